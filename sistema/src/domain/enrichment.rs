//! Cross-entity enrichment engine.
//!
//! Turns base entities into denormalized composites using only the entity
//! client contracts. Related fetches degrade: a dangling reference or an
//! unavailable dependency leaves the nested field absent or the nested list
//! empty while the base entity's own fields are always preserved. Composites
//! are built fresh per call and never cached.
//!
//! Independent sub-fetches run concurrently: the user and course lookups
//! inside [`EnrichmentService::enrich_payment`] are joined, and list
//! enrichment fans out through an order-preserving bounded buffer, so output
//! order always matches input order regardless of completion order.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use super::course::Course;
use super::enriched::{CourseSummary, EnrichedCourse, EnrichedPayment, EnrichedUser};
use super::error::Error;
use super::payment::Payment;
use super::ports::{
    CourseCatalogue, FetchOutcome, ListOutcome, PaymentLedger, SystemQuery, UserDirectory,
};
use super::user::User;

/// Upper bound on simultaneous outbound sub-fetches per composite.
const MAX_CONCURRENT_FETCHES: usize = 8;

/// Aggregation engine composing the three entity clients.
///
/// Holds no mutable state; safe to share across concurrent requests.
pub struct EnrichmentService<U, C, P> {
    users: Arc<U>,
    courses: Arc<C>,
    payments: Arc<P>,
}

impl<U, C, P> EnrichmentService<U, C, P> {
    /// Create an engine over explicit entity clients.
    pub fn new(users: Arc<U>, courses: Arc<C>, payments: Arc<P>) -> Self {
        Self {
            users,
            courses,
            payments,
        }
    }
}

impl<U, C, P> EnrichmentService<U, C, P>
where
    U: UserDirectory,
    C: CourseCatalogue,
    P: PaymentLedger,
{
    /// Augment one payment with its user and course.
    ///
    /// The two lookups are independent and run concurrently. Either may come
    /// back absent; the payment's own fields are returned regardless.
    pub async fn enrich_payment(&self, payment: Payment) -> EnrichedPayment {
        let rut = payment.user_rut.to_string();
        let (user, course) = tokio::join!(
            self.users.fetch_by_rut(&rut),
            self.courses.fetch_by_id(payment.course_id),
        );

        if user.is_unavailable() {
            warn!(
                payment_id = payment.id,
                rut = %rut,
                "user lookup unavailable; leaving payment user absent"
            );
        }
        if course.is_unavailable() {
            warn!(
                payment_id = payment.id,
                course_id = payment.course_id,
                "course lookup unavailable; leaving payment course absent"
            );
        }

        EnrichedPayment {
            id: payment.id,
            paid: payment.paid,
            user_rut: payment.user_rut,
            course_id: payment.course_id,
            user: user.into_found(),
            course: course.into_found(),
        }
    }

    /// Enrich payments element-wise, preserving input order.
    pub async fn enrich_payments(&self, payments: Vec<Payment>) -> Vec<EnrichedPayment> {
        stream::iter(payments)
            .map(|payment| self.enrich_payment(payment))
            .buffered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await
    }

    /// Augment one course with its payments and the distinct users behind
    /// them.
    ///
    /// Payments are fetched in bulk and filtered to this course; the ledger
    /// exposes no query by course id. Enrolled users are deduplicated by rut
    /// in first-seen order, and unresolvable users are silently omitted from
    /// the roster. A ledger outage degrades to the bare course.
    pub async fn enrich_course(&self, course: Course) -> EnrichedCourse {
        let ListOutcome::Listed(all_payments) = self.payments.fetch_all().await else {
            warn!(
                course_id = course.id,
                "payment ledger unavailable; returning course without enrolment data"
            );
            return EnrichedCourse::bare(course);
        };

        let course_payments: Vec<Payment> = all_payments
            .into_iter()
            .filter(|payment| payment.course_id == course.id)
            .collect();
        let related_payments = self.enrich_payments(course_payments).await;

        let mut seen: HashSet<String> = HashSet::new();
        let mut enrolled_users: Vec<User> = Vec::new();
        for payment in &related_payments {
            if let Some(user) = &payment.user {
                if seen.insert(user.rut.clone()) {
                    enrolled_users.push(user.clone());
                }
            }
        }

        debug!(
            course_id = course.id,
            payments = related_payments.len(),
            enrolled = enrolled_users.len(),
            "course enriched"
        );

        EnrichedCourse {
            id: course.id,
            name: course.name,
            description: course.description,
            total_enrolled: enrolled_users.len(),
            enrolled_users,
            related_payments,
        }
    }

    /// Enrich courses element-wise, preserving input order.
    pub async fn enrich_courses(&self, courses: Vec<Course>) -> Vec<EnrichedCourse> {
        stream::iter(courses)
            .map(|course| self.enrich_course(course))
            .buffered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await
    }

    /// Enrich the course with the given id; `None` when it does not exist or
    /// the catalogue cannot be consulted.
    pub async fn enrich_course_by_id(&self, course_id: i64) -> Option<EnrichedCourse> {
        match self.courses.fetch_by_id(course_id).await {
            FetchOutcome::Found(course) => Some(self.enrich_course(course).await),
            FetchOutcome::Missing => {
                debug!(course_id, "course not found");
                None
            }
            FetchOutcome::Unavailable => {
                warn!(course_id, "course catalogue unavailable");
                None
            }
        }
    }

    /// Augment one user with the courses derived from the user's payments.
    ///
    /// Only public identity fields are copied into the view. The aggregated
    /// list keeps one summary per resolved payment, so repeat payments for
    /// the same course appear once per payment. Unresolvable courses are
    /// skipped; a ledger outage degrades to an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with code `InvalidRequest` when the user's rut is
    /// not numeric. That is a data defect on the caller's side, not a remote
    /// condition, and absorbing it would hide integration bugs.
    pub async fn enrich_user(&self, user: User) -> Result<EnrichedUser, Error> {
        let rut: i64 = user.rut.trim().parse().map_err(|_| {
            Error::invalid_request(format!("user rut `{}` is not numeric", user.rut))
        })?;

        let view = EnrichedUser {
            rut: user.rut,
            name: user.name,
            email: user.email,
            aggregated_courses: Vec::new(),
        };

        let ListOutcome::Listed(all_payments) = self.payments.fetch_all().await else {
            warn!(rut, "payment ledger unavailable; returning user without course data");
            return Ok(view);
        };

        let user_payments: Vec<Payment> = all_payments
            .into_iter()
            .filter(|payment| payment.user_rut == rut)
            .collect();
        debug!(rut, payments = user_payments.len(), "payments matched for user");

        let resolved: Vec<Option<CourseSummary>> = stream::iter(user_payments)
            .map(|payment| async move {
                match self.courses.fetch_by_id(payment.course_id).await {
                    FetchOutcome::Found(course) => Some(CourseSummary::from(course)),
                    FetchOutcome::Missing => {
                        debug!(
                            rut,
                            course_id = payment.course_id,
                            "payment references a course that does not exist"
                        );
                        None
                    }
                    FetchOutcome::Unavailable => {
                        warn!(
                            rut,
                            course_id = payment.course_id,
                            "course lookup unavailable; skipping course"
                        );
                        None
                    }
                }
            })
            .buffered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        Ok(EnrichedUser {
            aggregated_courses: resolved.into_iter().flatten().collect(),
            ..view
        })
    }

    /// Enrich users element-wise, preserving input order.
    ///
    /// # Errors
    ///
    /// Propagates the first malformed-rut error; remote failures degrade per
    /// element without affecting siblings.
    pub async fn enrich_users(&self, users: Vec<User>) -> Result<Vec<EnrichedUser>, Error> {
        stream::iter(users)
            .map(|user| self.enrich_user(user))
            .buffered(MAX_CONCURRENT_FETCHES)
            .collect::<Vec<Result<EnrichedUser, Error>>>()
            .await
            .into_iter()
            .collect()
    }

    /// Enrich the user with the given rut; `Ok(None)` when the user does not
    /// exist or the directory cannot be consulted. No other service is
    /// consulted in that case.
    ///
    /// # Errors
    ///
    /// Same contract as [`EnrichmentService::enrich_user`].
    pub async fn enrich_user_by_rut(&self, rut: &str) -> Result<Option<EnrichedUser>, Error> {
        match self.users.fetch_by_rut(rut).await {
            FetchOutcome::Found(user) => self.enrich_user(user).await.map(Some),
            FetchOutcome::Missing => {
                debug!(rut, "user not found");
                Ok(None)
            }
            FetchOutcome::Unavailable => {
                warn!(rut, "user directory unavailable");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<U, C, P> SystemQuery for EnrichmentService<U, C, P>
where
    U: UserDirectory + 'static,
    C: CourseCatalogue + 'static,
    P: PaymentLedger + 'static,
{
    async fn enriched_payments(&self) -> Vec<EnrichedPayment> {
        match self.payments.fetch_all().await {
            ListOutcome::Listed(payments) => self.enrich_payments(payments).await,
            ListOutcome::Unavailable => {
                warn!("payment ledger unavailable; listing no payments");
                Vec::new()
            }
        }
    }

    async fn enriched_payment(&self, id: i64) -> Option<EnrichedPayment> {
        match self.payments.fetch_by_id(id).await {
            FetchOutcome::Found(payment) => Some(self.enrich_payment(payment).await),
            FetchOutcome::Missing => {
                debug!(payment_id = id, "payment not found");
                None
            }
            FetchOutcome::Unavailable => {
                warn!(payment_id = id, "payment ledger unavailable");
                None
            }
        }
    }

    async fn enriched_courses(&self) -> Vec<EnrichedCourse> {
        match self.courses.fetch_all().await {
            ListOutcome::Listed(courses) => self.enrich_courses(courses).await,
            ListOutcome::Unavailable => {
                warn!("course catalogue unavailable; listing no courses");
                Vec::new()
            }
        }
    }

    async fn enriched_course(&self, id: i64) -> Option<EnrichedCourse> {
        self.enrich_course_by_id(id).await
    }

    async fn enriched_users(&self) -> Result<Vec<EnrichedUser>, Error> {
        match self.users.fetch_all().await {
            ListOutcome::Listed(users) => self.enrich_users(users).await,
            ListOutcome::Unavailable => {
                warn!("user directory unavailable; listing no users");
                Ok(Vec::new())
            }
        }
    }

    async fn enriched_user(&self, rut: &str) -> Result<Option<EnrichedUser>, Error> {
        self.enrich_user_by_rut(rut).await
    }
}
