//! PostgreSQL-backed `EmailRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{EmailRepository, EmailRepositoryError};
use crate::domain::{EmailAddress, EmailEntry};

use super::diesel_basic_error_mapping::{map_diesel_error, map_insert_error, map_pool_error};
use super::models::{EmailRow, NewEmailRow};
use super::pool::DbPool;
use super::schema::emails;

/// Diesel-backed implementation of the `EmailRepository` port.
#[derive(Clone)]
pub struct DieselEmailRepository {
    pool: DbPool,
}

impl DieselEmailRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a domain entry.
fn row_to_entry(row: EmailRow) -> Result<EmailEntry, EmailRepositoryError> {
    let email = EmailAddress::new(row.email).map_err(|err| {
        tracing::warn!(id = row.id, error = %err, "stored email failed validation");
        EmailRepositoryError::query(format!("stored entry {} is invalid: {err}", row.id))
    })?;
    Ok(EmailEntry {
        id: row.id,
        email,
        confirmed_at: row.confirmed_at,
        opt_out: row.opt_out,
    })
}

/// Convert page bounds to SQL `LIMIT`/`OFFSET` values.
fn limit_and_offset(page: PageRequest) -> (i64, i64) {
    let limit = i64::try_from(page.count()).unwrap_or(i64::MAX);
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

#[async_trait]
impl EmailRepository for DieselEmailRepository {
    async fn create(&self, email: &EmailAddress) -> Result<(), EmailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewEmailRow {
            email: email.as_ref(),
            confirmed_at: None,
            opt_out: false,
        };

        diesel::insert_into(emails::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, email.as_ref()))
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<EmailEntry>, EmailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmailRow> = emails::table
            .filter(emails::email.eq(email.as_ref()))
            .select(EmailRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_entry).transpose()
    }

    async fn update(&self, entry: &EmailEntry) -> Result<(), EmailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewEmailRow {
            email: entry.email.as_ref(),
            confirmed_at: entry.confirmed_at,
            opt_out: entry.opt_out,
        };

        diesel::insert_into(emails::table)
            .values(&row)
            .on_conflict(emails::email)
            .do_update()
            .set((
                emails::confirmed_at.eq(excluded(emails::confirmed_at)),
                emails::opt_out.eq(excluded(emails::opt_out)),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, email: &EmailAddress) -> Result<(), EmailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(emails::table.filter(emails::email.eq(email.as_ref())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        tracing::debug!(email = %email, removed, "deleted email rows");
        Ok(())
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<EmailEntry>, EmailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (limit, offset) = limit_and_offset(page);

        let rows: Vec<EmailRow> = emails::table
            .filter(emails::opt_out.eq(false))
            .order(emails::id.asc())
            .limit(limit)
            .offset(offset)
            .select(EmailRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_entry).collect()
    }
}
