//! Mailing-list HTTP handlers.
//!
//! ```text
//! POST /email/create     {"Email": ...}            -> EmailEntry
//! GET  /email/get        {"Email": ...}            -> EmailEntry | null
//! GET  /email/get_batch  {"Page": n, "Count": n}   -> [EmailEntry]
//! PUT  /email/update     EmailEntry                -> EmailEntry
//! POST /email/delete     {"Email": ...}            -> null
//! ```
//!
//! Every mutation performs one write followed by one read, and the read's
//! result is what the client sees. Any repository failure is answered with a
//! 400 envelope.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use pagination::PageRequest;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{EmailAddress, EmailEntry, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::{RawBody, decode_payload, json_response};
use crate::inbound::http::schemas::{EmailEntrySchema, ErrorEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Path of the create endpoint.
pub const CREATE_PATH: &str = "/email/create";
/// Path of the single-entry lookup endpoint.
pub const GET_PATH: &str = "/email/get";
/// Path of the paginated listing endpoint.
pub const GET_BATCH_PATH: &str = "/email/get_batch";
/// Path of the update endpoint.
pub const UPDATE_PATH: &str = "/email/update";
/// Path of the delete endpoint.
pub const DELETE_PATH: &str = "/email/delete";

/// Request body shared by the single-entry endpoints.
///
/// Missing fields take their zero value, so `{}` and an empty body both
/// decode; the handler then rejects the blank `Email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailEntryRequest {
    /// Ignored on input; identifiers are assigned by the store.
    #[schema(example = 0)]
    pub id: i64,
    #[schema(example = "a@example.com")]
    pub email: String,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub opt_out: bool,
}

impl EmailEntryRequest {
    fn email_address(&self) -> Result<EmailAddress, Error> {
        EmailAddress::new(self.email.as_str()).map_err(Error::from)
    }

    fn into_entry(self) -> Result<EmailEntry, Error> {
        let email = self.email_address()?;
        Ok(EmailEntry {
            id: self.id,
            email,
            confirmed_at: self.confirmed_at,
            opt_out: self.opt_out,
        })
    }
}

/// Request body for the paginated listing.
///
/// Fields are signed so that zero and negative values reach validation and
/// are reported with the pagination message rather than a decode error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchQueryParams {
    /// 1-based page number.
    #[schema(example = 1)]
    pub page: i64,
    /// Rows per page.
    #[schema(example = 20)]
    pub count: i64,
}

impl TryFrom<BatchQueryParams> for PageRequest {
    type Error = Error;

    fn try_from(params: BatchQueryParams) -> Result<Self, Self::Error> {
        PageRequest::new(params.page, params.count).map_err(Error::from)
    }
}

fn entry_response(entry: Option<&EmailEntry>) -> HttpResponse {
    json_response(StatusCode::OK, &entry)
}

/// Subscribe an address.
#[utoipa::path(
    post,
    path = "/email/create",
    description = "Insert an unconfirmed, opted-in entry and return it as stored.",
    request_body = EmailEntryRequest,
    responses(
        (status = 200, description = "Stored entry", body = EmailEntrySchema),
        (status = 400, description = "Invalid body or store failure", body = ErrorEnvelopeSchema),
        (status = 405, description = "Wrong method", body = ErrorEnvelopeSchema)
    ),
    tags = ["email"],
    operation_id = "createEmail"
)]
pub async fn create_email(state: web::Data<HttpState>, body: RawBody) -> ApiResult<HttpResponse> {
    let request: EmailEntryRequest = decode_payload(body)?;
    let email = request.email_address()?;
    info!(operation = "create", email = %email, "handling email request");

    state.emails.create(&email).await?;
    let stored = state.emails.find_by_email(&email).await?;
    Ok(entry_response(stored.as_ref()))
}

/// Look up an entry by address.
#[utoipa::path(
    get,
    path = "/email/get",
    description = "Fetch an entry by address. The body is `null` when none exists.",
    request_body = EmailEntryRequest,
    responses(
        (status = 200, description = "Entry or null", body = EmailEntrySchema),
        (status = 400, description = "Invalid body or store failure", body = ErrorEnvelopeSchema),
        (status = 405, description = "Wrong method", body = ErrorEnvelopeSchema)
    ),
    tags = ["email"],
    operation_id = "getEmail"
)]
pub async fn get_email(state: web::Data<HttpState>, body: RawBody) -> ApiResult<HttpResponse> {
    let request: EmailEntryRequest = decode_payload(body)?;
    let email = request.email_address()?;
    info!(operation = "get", email = %email, "handling email request");

    let stored = state.emails.find_by_email(&email).await?;
    Ok(entry_response(stored.as_ref()))
}

/// List active subscribers one page at a time.
#[utoipa::path(
    get,
    path = "/email/get_batch",
    description = "List entries that have not opted out, ordered by id.",
    request_body = BatchQueryParams,
    responses(
        (status = 200, description = "One page of entries", body = [EmailEntrySchema]),
        (status = 400, description = "Invalid paging or store failure", body = ErrorEnvelopeSchema),
        (status = 405, description = "Wrong method", body = ErrorEnvelopeSchema)
    ),
    tags = ["email"],
    operation_id = "getEmailBatch"
)]
pub async fn get_email_batch(
    state: web::Data<HttpState>,
    body: RawBody,
) -> ApiResult<HttpResponse> {
    let params: BatchQueryParams = decode_payload(body)?;
    info!(
        operation = "get_batch",
        page = params.page,
        count = params.count,
        "handling email request"
    );
    let page = PageRequest::try_from(params)?;

    let entries = state.emails.list_page(page).await?;
    Ok(json_response(StatusCode::OK, &entries))
}

/// Upsert an entry's confirmation and opt-out state.
#[utoipa::path(
    put,
    path = "/email/update",
    description = "Insert or update the entry keyed by `Email` and return it as stored.",
    request_body = EmailEntryRequest,
    responses(
        (status = 200, description = "Stored entry", body = EmailEntrySchema),
        (status = 400, description = "Invalid body or store failure", body = ErrorEnvelopeSchema),
        (status = 405, description = "Wrong method", body = ErrorEnvelopeSchema)
    ),
    tags = ["email"],
    operation_id = "updateEmail"
)]
pub async fn update_email(state: web::Data<HttpState>, body: RawBody) -> ApiResult<HttpResponse> {
    let request: EmailEntryRequest = decode_payload(body)?;
    let entry = request.into_entry()?;
    info!(
        operation = "update",
        email = %entry.email,
        opt_out = entry.opt_out,
        "handling email request"
    );

    state.emails.update(&entry).await?;
    let stored = state.emails.find_by_email(&entry.email).await?;
    Ok(entry_response(stored.as_ref()))
}

/// Remove an entry.
#[utoipa::path(
    post,
    path = "/email/delete",
    description = "Delete the entry and return a fresh lookup, normally `null`.",
    request_body = EmailEntryRequest,
    responses(
        (status = 200, description = "Lookup after deletion", body = EmailEntrySchema),
        (status = 400, description = "Invalid body or store failure", body = ErrorEnvelopeSchema),
        (status = 405, description = "Wrong method", body = ErrorEnvelopeSchema)
    ),
    tags = ["email"],
    operation_id = "deleteEmail"
)]
pub async fn delete_email(state: web::Data<HttpState>, body: RawBody) -> ApiResult<HttpResponse> {
    let request: EmailEntryRequest = decode_payload(body)?;
    let email = request.email_address()?;
    info!(operation = "delete", email = %email, "handling email request");

    state.emails.delete(&email).await?;
    let remaining = state.emails.find_by_email(&email).await?;
    Ok(entry_response(remaining.as_ref()))
}
