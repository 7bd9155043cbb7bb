//! Tests for the service bootstrap: repository selection, app wiring and
//! listener binding.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::json;

use super::server::{ServerConfig, build_repository, create_server};
use mailinglist::ServerSettings;
use mailinglist::domain::ports::EmailRepository;
use mailinglist::inbound::http::state::HttpState;
use mailinglist::outbound::memory::InMemoryEmailRepository;

#[fixture]
fn in_memory_settings() -> ServerSettings {
    ServerSettings {
        bind_addr: None,
        database_url: None,
        pool_max_size: mailinglist::outbound::persistence::DEFAULT_MAX_SIZE,
    }
}

#[rstest]
#[actix_rt::test]
async fn missing_database_url_selects_in_memory_store(in_memory_settings: ServerSettings) {
    let repo = build_repository(&in_memory_settings)
        .await
        .expect("in-memory repository");
    let email = mailinglist::domain::EmailAddress::new("a@example.com").expect("valid email");

    repo.create(&email).await.expect("create");
    let found = repo.find_by_email(&email).await.expect("find");
    assert_eq!(found.map(|entry| entry.id), Some(1));
}

#[rstest]
#[actix_rt::test]
async fn create_server_binds_ephemeral_port() {
    let config = ServerConfig::new("127.0.0.1:0", Arc::new(InMemoryEmailRepository::new()));
    assert_eq!(config.bind_addr(), "127.0.0.1:0");

    let _server = create_server(config).expect("bind succeeds");
}

#[rstest]
#[case("not an address")]
#[case("127.0.0.1:99999")]
#[actix_rt::test]
async fn create_server_reports_bind_failure(#[case] bind_addr: &str) {
    let config = ServerConfig::new(bind_addr, Arc::new(InMemoryEmailRepository::new()));
    assert!(create_server(config).is_err());
}

#[rstest]
#[actix_rt::test]
async fn app_serves_routes_with_trace_header() {
    let state = web::Data::new(HttpState::new(Arc::new(InMemoryEmailRepository::new())));
    let app = actix_test::init_service(super::server::build_app(state)).await;

    let req = actix_test::TestRequest::post()
        .uri("/email/create")
        .set_payload(json!({"Email": "a@example.com"}).to_string())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("trace-id"));
}

#[cfg(debug_assertions)]
#[rstest]
#[actix_rt::test]
async fn app_serves_openapi_document_in_debug_builds() {
    let state = web::Data::new(HttpState::new(Arc::new(InMemoryEmailRepository::new())));
    let app = actix_test::init_service(super::server::build_app(state)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert!(body["paths"]["/email/get_batch"].is_object());
}
