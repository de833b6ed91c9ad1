//! Aggregation endpoints.
//!
//! ```text
//! GET /api/v1/sistema/pagos
//! GET /api/v1/sistema/pagos/{id}
//! GET /api/v1/sistema/cursos
//! GET /api/v1/sistema/cursos/{id}
//! GET /api/v1/sistema/usuarios
//! GET /api/v1/sistema/usuarios/{rut}
//! ```
//!
//! All endpoints are read-only. Downstream unavailability degrades the
//! payload; it never yields a 5xx here.

use actix_web::{HttpResponse, get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn positive_id(id: i64, what: &str) -> Result<i64, Error> {
    if id <= 0 {
        return Err(Error::invalid_request(format!("{what} id must be positive")));
    }
    Ok(id)
}

/// List every payment, enriched with its user and course.
#[get("/pagos")]
pub async fn list_payments(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let payments = state.system.enriched_payments().await;
    Ok(HttpResponse::Ok().json(payments))
}

/// Fetch one enriched payment.
#[get("/pagos/{id}")]
pub async fn get_payment(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = positive_id(path.into_inner(), "payment")?;
    match state.system.enriched_payment(id).await {
        Some(payment) => Ok(HttpResponse::Ok().json(payment)),
        None => Err(Error::not_found(format!("payment {id} not found"))),
    }
}

/// List every course, enriched with payments and enrolled users.
#[get("/cursos")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let courses = state.system.enriched_courses().await;
    Ok(HttpResponse::Ok().json(courses))
}

/// Fetch one enriched course.
#[get("/cursos/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = positive_id(path.into_inner(), "course")?;
    match state.system.enriched_course(id).await {
        Some(course) => Ok(HttpResponse::Ok().json(course)),
        None => Err(Error::not_found(format!("course {id} not found"))),
    }
}

/// List every user, enriched with the courses they have paid for.
#[get("/usuarios")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.system.enriched_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Fetch one enriched user by rut.
#[get("/usuarios/{rut}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let rut = path.into_inner();
    if rut.trim().is_empty() {
        return Err(Error::invalid_request("rut must not be blank"));
    }
    match state.system.enriched_user(&rut).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(Error::not_found(format!("user {rut} not found"))),
    }
}

#[cfg(test)]
mod tests;
