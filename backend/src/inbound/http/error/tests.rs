//! Tests for HTTP error mapping.

use super::*;
use crate::domain::ErrorEnvelope;
use crate::domain::ports::EmailRepositoryError;
use actix_web::body::to_bytes;
use actix_web::http::header::CONTENT_TYPE;
use rstest::rstest;

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::collaborator("db down"), StatusCode::BAD_REQUEST)]
#[case(Error::method_not_allowed("use POST"), StatusCode::METHOD_NOT_ALLOWED)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_kind(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[case(Error::invalid_request("Email field is required"))]
#[case(Error::from(EmailRepositoryError::duplicate("a@example.com")))]
#[actix_web::test]
async fn client_errors_render_the_envelope(#[case] error: Error) {
    let response = ResponseError::error_response(&error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json; charset=utf-8")
    );
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let envelope: ErrorEnvelope = serde_json::from_slice(&bytes).expect("envelope json");
    assert_eq!(envelope.err, error.message());
}

#[actix_web::test]
async fn internal_errors_have_no_body() {
    let response = ResponseError::error_response(&Error::internal("encoder exploded"));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    assert!(bytes.is_empty());
}
