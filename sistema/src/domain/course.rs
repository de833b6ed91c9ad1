//! Course record as served by the course service.

use serde::{Deserialize, Serialize};

/// One course fetched read-only from the course service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(rename = "nombreCurso")]
    pub name: String,
    #[serde(rename = "descripcionCurso")]
    pub description: Option<String>,
}
