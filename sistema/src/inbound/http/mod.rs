//! HTTP inbound adapter exposing the read-only aggregation endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod system;

pub use error::ApiResult;
pub use state::HttpState;
