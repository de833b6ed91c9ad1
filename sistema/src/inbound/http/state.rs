//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! the driving port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::SystemQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub system: Arc<dyn SystemQuery>,
}

impl HttpState {
    /// Bundle the aggregation façade for handler injection.
    pub fn new(system: Arc<dyn SystemQuery>) -> Self {
        Self { system }
    }
}
