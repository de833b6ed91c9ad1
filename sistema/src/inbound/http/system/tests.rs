//! Handler tests over a mocked aggregation façade.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use super::*;
use crate::domain::ports::{MockSystemQuery, SystemQuery};
use crate::domain::{EnrichedPayment, EnrichedUser, Error};

fn enriched_payment(id: i64) -> EnrichedPayment {
    EnrichedPayment {
        id,
        paid: true,
        user_rut: 11_111_111,
        course_id: 10,
        user: None,
        course: None,
    }
}

async fn spawn_app(
    system: impl SystemQuery + 'static,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let state = web::Data::new(HttpState::new(Arc::new(system)));
    test::init_service(
        App::new().app_data(state).service(
            web::scope("/api/v1/sistema")
                .service(list_payments)
                .service(get_payment)
                .service(list_courses)
                .service(get_course)
                .service(list_users)
                .service(get_user),
        ),
    )
    .await
}

#[actix_web::test]
async fn listing_payments_returns_wire_shaped_json() {
    let mut system = MockSystemQuery::new();
    system
        .expect_enriched_payments()
        .returning(|| vec![enriched_payment(1), enriched_payment(2)]);

    let app = spawn_app(system).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/sistema/pagos")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["usuarioRut"], 11_111_111);
    assert!(items[0]["usuario"].is_null());
}

#[actix_web::test]
async fn unknown_payment_maps_to_404_with_error_body() {
    let mut system = MockSystemQuery::new();
    system
        .expect_enriched_payment()
        .withf(|&id| id == 7)
        .returning(|_| None);

    let app = spawn_app(system).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/sistema/pagos/7")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn non_positive_course_id_maps_to_400_without_calling_the_facade() {
    // No expectations: the mock panics if the handler consults it.
    let app = spawn_app(MockSystemQuery::new()).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/sistema/cursos/0")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn known_user_returns_enriched_view() {
    let mut system = MockSystemQuery::new();
    system
        .expect_enriched_user()
        .withf(|rut| rut == "11111111")
        .returning(|_| {
            Ok(Some(EnrichedUser {
                rut: "11111111".to_owned(),
                name: "Ana".to_owned(),
                email: "ana@example.com".to_owned(),
                aggregated_courses: Vec::new(),
            }))
        });

    let app = spawn_app(system).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/sistema/usuarios/11111111")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["nombre"], "Ana");
    assert!(body["cursosAgregados"].as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn malformed_stored_rut_maps_to_400() {
    let mut system = MockSystemQuery::new();
    system
        .expect_enriched_user()
        .returning(|_| Err(Error::invalid_request("user rut `abc` is not numeric")));

    let app = spawn_app(system).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/sistema/usuarios/abc")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
}
