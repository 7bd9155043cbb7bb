//! Internal Diesel row structs for the `emails` table.
//!
//! These types never leave the persistence module.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::emails;

/// Row struct for reading from the emails table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = emails)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmailRow {
    pub id: i64,
    pub email: String,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub opt_out: bool,
}

/// Insertable struct used by both create and upsert.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = emails)]
pub(crate) struct NewEmailRow<'a> {
    pub email: &'a str,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub opt_out: bool,
}
