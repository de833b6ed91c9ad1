//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`UserDirectory`], [`CourseCatalogue`], [`PaymentLedger`])
//! hide remote-call mechanics behind an absent/empty-collapsing contract; the
//! driving port ([`SystemQuery`]) is the aggregation façade the HTTP adapter
//! calls.

mod course_catalogue;
mod outcome;
mod payment_ledger;
mod system_query;
mod user_directory;

#[cfg(test)]
pub use course_catalogue::MockCourseCatalogue;
pub use course_catalogue::{CourseCatalogue, FixtureCourseCatalogue};
pub use outcome::{FetchOutcome, ListOutcome};
#[cfg(test)]
pub use payment_ledger::MockPaymentLedger;
pub use payment_ledger::{FixturePaymentLedger, PaymentLedger};
#[cfg(test)]
pub use system_query::MockSystemQuery;
pub use system_query::{FixtureSystemQuery, SystemQuery};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory};
