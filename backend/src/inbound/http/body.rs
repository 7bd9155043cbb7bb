//! JSON request decoding and response encoding shared by every handler.
//!
//! Bodies arrive as raw bytes so that GET requests can carry JSON too. An
//! empty body decodes to the target's default value; anything else must be
//! valid JSON. Extraction failures, such as an oversized payload, are caught
//! here so they leave as the JSON error envelope rather than actix's plain
//! text response.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use actix_web::web::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::domain::Error;

/// Content type stamped on every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Request body as extracted by actix, with extraction failures kept.
pub type RawBody = Result<Bytes, actix_web::Error>;

/// Decode an extracted request body.
///
/// # Errors
///
/// Returns [`Error::invalid_request`] when the body could not be read, for
/// example because it exceeds the payload limit, or is not valid JSON for `T`.
pub fn decode_payload<T>(body: RawBody) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    let bytes =
        body.map_err(|err| Error::invalid_request(format!("invalid request body: {err}")))?;
    decode_json(&bytes)
}

/// Decode a request body.
///
/// # Errors
///
/// Returns [`Error::invalid_request`] when the body is not valid JSON for `T`.
///
/// # Examples
/// ```
/// use actix_web::web::Bytes;
/// use mailinglist::inbound::http::body::decode_json;
///
/// let empty: Vec<u8> = decode_json(&Bytes::new()).expect("empty body");
/// assert!(empty.is_empty());
/// assert!(decode_json::<Vec<u8>>(&Bytes::from_static(b"{")).is_err());
/// ```
pub fn decode_json<T>(body: &Bytes) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| Error::invalid_request(format!("invalid JSON body: {err}")))
}

/// Encode `value` as a JSON response with the given status.
///
/// Serialisation failures are logged and answered with a bare 500.
pub fn json_response<T>(status: StatusCode, value: &T) -> HttpResponse
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec(value) {
        Ok(bytes) => HttpResponse::build(status)
            .content_type(JSON_CONTENT_TYPE)
            .body(bytes),
        Err(err) => {
            error!(error = %err, "failed to encode response body");
            Error::internal(format!("failed to encode response body: {err}")).error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde::Deserialize;
    use serde::ser::Error as _;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct Probe {
        email: String,
        opt_out: bool,
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"  \n".as_slice())]
    #[case(b"{}".as_slice())]
    fn empty_bodies_decode_to_default(#[case] raw: &'static [u8]) {
        let decoded: Probe = decode_json(&Bytes::from_static(raw)).expect("decodes");
        assert_eq!(decoded, Probe::default());
    }

    #[rstest]
    fn fields_are_read_by_pascal_case_name() {
        let decoded: Probe =
            decode_json(&Bytes::from_static(br#"{"Email":"a@example.com","OptOut":true}"#))
                .expect("decodes");
        assert_eq!(
            decoded,
            Probe {
                email: "a@example.com".into(),
                opt_out: true,
            }
        );
    }

    #[rstest]
    #[case(b"{".as_slice())]
    #[case(b"not json".as_slice())]
    #[case(br#"{"Email": 5}"#.as_slice())]
    fn malformed_bodies_are_invalid_requests(#[case] raw: &'static [u8]) {
        let err = decode_json::<Probe>(&Bytes::from_static(raw)).expect_err("rejects");
        assert_eq!(err.kind(), crate::domain::ErrorKind::InvalidRequest);
        assert!(err.message().starts_with("invalid JSON body: "));
    }

    #[rstest]
    fn payload_errors_are_invalid_requests() {
        let body: RawBody = Err(actix_web::error::PayloadError::Overflow.into());

        let err = decode_payload::<Probe>(body).expect_err("rejects");

        assert_eq!(err.kind(), crate::domain::ErrorKind::InvalidRequest);
        assert!(err.message().starts_with("invalid request body: "));
    }

    #[rstest]
    fn extracted_payloads_are_decoded() {
        let body: RawBody = Ok(Bytes::from_static(br#"{"Email":"a@example.com"}"#));

        let decoded: Probe = decode_payload(body).expect("decodes");

        assert_eq!(decoded.email, "a@example.com");
    }

    #[actix_web::test]
    async fn json_response_sets_charset_content_type() {
        let response = json_response(StatusCode::OK, &Option::<u8>::None);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|value| value.to_str().ok()),
            Some(JSON_CONTENT_TYPE)
        );
        let bytes = to_bytes(response.into_body()).await.expect("body");
        assert_eq!(bytes.as_ref(), b"null");
    }

    #[actix_web::test]
    async fn encode_failure_is_a_bare_500() {
        let response = json_response(StatusCode::OK, &Unencodable);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body()).await.expect("body");
        assert!(bytes.is_empty());
    }
}
