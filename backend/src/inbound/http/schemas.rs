//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! where framework concerns belong.

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::EmailEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EmailEntry)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmailEntrySchema {
    /// Store-assigned identifier.
    #[schema(rename = "Id", example = 1)]
    id: i64,
    /// Subscriber address.
    #[schema(rename = "Email", example = "a@example.com")]
    email: String,
    /// When the subscriber confirmed, if ever.
    #[schema(rename = "ConfirmedAt", example = "2024-06-01T09:30:00Z")]
    confirmed_at: Option<DateTime<Utc>>,
    /// Whether the subscriber has unsubscribed.
    #[schema(rename = "OptOut", example = false)]
    opt_out: bool,
}

/// OpenAPI schema for [`crate::domain::ErrorEnvelope`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    /// Human-readable failure message.
    #[schema(rename = "Err", example = "Email field is required")]
    err: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn property_names<T: PartialSchema>() -> Vec<String> {
        match T::schema() {
            RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
            _ => panic!("expected an inline object schema"),
        }
    }

    #[test]
    fn entry_schema_uses_wire_names() {
        let mut names = property_names::<EmailEntrySchema>();
        names.sort();
        assert_eq!(names, ["ConfirmedAt", "Email", "Id", "OptOut"]);
    }

    #[test]
    fn envelope_schema_uses_wire_name() {
        assert_eq!(property_names::<ErrorEnvelopeSchema>(), ["Err"]);
    }

    #[test]
    fn schemas_register_under_domain_names() {
        assert_eq!(
            <EmailEntrySchema as ToSchema>::name(),
            "crate.domain.EmailEntry"
        );
        assert_eq!(
            <ErrorEnvelopeSchema as ToSchema>::name(),
            "crate.domain.ErrorEnvelope"
        );
    }
}
