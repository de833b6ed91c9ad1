//! Server construction and dependency wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use crate::domain::EnrichmentService;
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::{HttpState, system};
use crate::outbound::remote::{HttpCourseCatalogue, HttpPaymentLedger, HttpUserDirectory};

/// Wire the enrichment engine over HTTP entity clients.
///
/// # Errors
///
/// Returns an error when a reqwest client cannot be constructed.
pub fn build_state(config: &ServerConfig) -> Result<HttpState, reqwest::Error> {
    let users = HttpUserDirectory::new(config.user_service_url.clone(), config.remote_timeout)?;
    let courses =
        HttpCourseCatalogue::new(config.course_service_url.clone(), config.remote_timeout)?;
    let payments =
        HttpPaymentLedger::new(config.payment_service_url.clone(), config.remote_timeout)?;

    let engine = EnrichmentService::new(Arc::new(users), Arc::new(courses), Arc::new(payments));
    Ok(HttpState::new(Arc::new(engine)))
}

/// Start the HTTP server on the given address.
///
/// # Errors
///
/// Returns an error when the address cannot be bound.
pub fn run(
    bind_addr: SocketAddr,
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(health_state.clone())
            .service(health::live)
            .service(health::ready)
            .service(
                web::scope("/api/v1/sistema")
                    .service(system::list_payments)
                    .service(system::get_payment)
                    .service(system::list_courses)
                    .service(system::get_course)
                    .service(system::list_users)
                    .service(system::get_user),
            )
    })
    .bind(bind_addr)?;

    Ok(server.run())
}
