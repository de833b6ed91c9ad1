//! User record as served by the user service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One user fetched read-only from the user service.
///
/// The rut is the stable natural key; two users are the same user exactly
/// when their ruts are equal. The user-type reference stays an identifier so
/// enrichment never depends on the user-type service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub rut: String,
    pub dv: Option<String>,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "fechaRegistro")]
    pub registered_at: Option<NaiveDateTime>,
    #[serde(rename = "tipoUsuarioId")]
    pub user_type_id: Option<i64>,
}
