//! Domain entities, composite views, and the enrichment engine.
//!
//! Entities mirror the wire contract of the owning record services; the
//! composite (`Enriched*`) views are pure per-request projections that are
//! never cached or persisted.

pub mod course;
pub mod enriched;
pub mod enrichment;
pub mod error;
pub mod payment;
pub mod ports;
pub mod user;

pub use self::course::Course;
pub use self::enriched::{CourseSummary, EnrichedCourse, EnrichedPayment, EnrichedUser};
pub use self::enrichment::EnrichmentService;
pub use self::error::{Error, ErrorCode};
pub use self::payment::Payment;
pub use self::user::User;
