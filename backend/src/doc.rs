//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the five `/email/*` operations, the request bodies
//! declared next to the handlers and the schema wrappers from
//! [`crate::inbound::http::schemas`]. The document backs Swagger UI in debug
//! builds and is exported with `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::emails::{BatchQueryParams, EmailEntryRequest};
use crate::inbound::http::schemas::{EmailEntrySchema, ErrorEnvelopeSchema};

/// OpenAPI document for the mailing-list API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mailing-list API",
        description = "JSON CRUD over mailing-list subscribers. Request bodies are JSON on every method, GET included.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::emails::create_email,
        crate::inbound::http::emails::get_email,
        crate::inbound::http::emails::get_email_batch,
        crate::inbound::http::emails::update_email,
        crate::inbound::http::emails::delete_email,
    ),
    components(schemas(
        EmailEntrySchema,
        ErrorEnvelopeSchema,
        EmailEntryRequest,
        BatchQueryParams
    )),
    tags(
        (name = "email", description = "Mailing-list subscriber operations")
    )
)]
pub struct ApiDoc;
