//! HTTP inbound adapter exposing the `/email/*` endpoints.

pub mod body;
pub mod emails;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
