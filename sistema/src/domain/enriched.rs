//! Composite views assembled by the enrichment engine.
//!
//! Each view copies the base entity's own fields verbatim and augments them
//! with related entities resolved from the other services. Absent related
//! data (`None`, empty lists) means the reference dangled or the owning
//! service was unavailable; it never suppresses the base fields.

use serde::{Deserialize, Serialize};

use super::course::Course;
use super::user::User;

/// Payment augmented with its user and course, either of which may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPayment {
    pub id: i64,
    #[serde(rename = "estado")]
    pub paid: bool,
    #[serde(rename = "usuarioRut")]
    pub user_rut: i64,
    #[serde(rename = "cursoId")]
    pub course_id: i64,
    #[serde(rename = "usuario")]
    pub user: Option<User>,
    #[serde(rename = "curso")]
    pub course: Option<Course>,
}

/// Course augmented with its payments and the distinct users behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCourse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    /// Users deduplicated by rut, in first-seen payment order.
    #[serde(rename = "usuariosInscritos")]
    pub enrolled_users: Vec<User>,
    #[serde(rename = "pagosRelacionados")]
    pub related_payments: Vec<EnrichedPayment>,
    #[serde(rename = "totalInscritos")]
    pub total_enrolled: usize,
}

impl EnrichedCourse {
    /// The degraded form: just the course's own fields, empty related data.
    pub fn bare(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
            enrolled_users: Vec::new(),
            related_payments: Vec::new(),
            total_enrolled: 0,
        }
    }
}

/// Trimmed course projection carried inside [`EnrichedUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: i64,
    #[serde(rename = "nombreCurso")]
    pub name: String,
    #[serde(rename = "descripcionCurso")]
    pub description: Option<String>,
}

impl From<Course> for CourseSummary {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
        }
    }
}

/// User identity fields plus the courses derived from the user's payments.
///
/// Carries only public identity fields; dv, registration time, and the
/// user-type reference never propagate into the enriched view. Aggregated
/// courses hold one entry per resolved payment, so repeat payments for the
/// same course appear once per payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedUser {
    pub rut: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "cursosAgregados")]
    pub aggregated_courses: Vec<CourseSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            id: 10,
            name: "Rust".to_owned(),
            description: Some("Sistemas".to_owned()),
        }
    }

    #[test]
    fn enriched_course_serializes_wire_names() {
        let view = EnrichedCourse::bare(course());
        let value = serde_json::to_value(view).expect("serialize");

        assert_eq!(value["nombre"], "Rust");
        assert_eq!(value["descripcion"], "Sistemas");
        assert_eq!(value["totalInscritos"], 0);
        assert!(value["usuariosInscritos"].as_array().expect("array").is_empty());
        assert!(value["pagosRelacionados"].as_array().expect("array").is_empty());
    }

    #[test]
    fn enriched_payment_keeps_base_fields_when_relations_absent() {
        let payment = EnrichedPayment {
            id: 3,
            paid: false,
            user_rut: 11_111_111,
            course_id: 99,
            user: None,
            course: None,
        };
        let value = serde_json::to_value(payment).expect("serialize");

        assert_eq!(value["id"], 3);
        assert_eq!(value["estado"], false);
        assert_eq!(value["usuarioRut"], 11_111_111);
        assert_eq!(value["cursoId"], 99);
        assert!(value["usuario"].is_null());
        assert!(value["curso"].is_null());
    }

    #[test]
    fn course_summary_trims_nothing_but_matches_course_fields() {
        let summary = CourseSummary::from(course());
        assert_eq!(summary.id, 10);
        assert_eq!(summary.name, "Rust");
        assert_eq!(summary.description.as_deref(), Some("Sistemas"));
    }

    #[test]
    fn enriched_user_exposes_only_public_identity_fields() {
        let value = serde_json::to_value(EnrichedUser {
            rut: "11111111".to_owned(),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            aggregated_courses: Vec::new(),
        })
        .expect("serialize");

        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        assert!(keys.contains(&"rut"));
        assert!(keys.contains(&"cursosAgregados"));
        assert!(!keys.contains(&"dv"));
        assert!(!keys.contains(&"tipoUsuarioId"));
    }
}
