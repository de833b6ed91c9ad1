//! Payment record as served by the payment service.

use serde::{Deserialize, Serialize};

/// One payment fetched read-only from the payment service.
///
/// The `usuarioRut` and `cursoId` references are foreign keys into services
/// the payment service does not validate; a dangling reference is a normal
/// condition for the enrichment engine, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    /// `true` when paid, `false` while pending.
    #[serde(rename = "estado")]
    pub paid: bool,
    #[serde(rename = "usuarioRut")]
    pub user_rut: i64,
    #[serde(rename = "cursoId")]
    pub course_id: i64,
}
