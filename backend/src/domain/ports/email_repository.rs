//! Port for the mailing-list store.
//!
//! The [`EmailRepository`] trait is the data-access collaborator behind every
//! HTTP operation. Entries are keyed by email address; the store assigns
//! numeric identifiers.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{EmailAddress, EmailEntry};

use super::define_port_error;

define_port_error! {
    /// Errors raised by email repository adapters.
    pub enum EmailRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "email repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "email repository query failed: {message}",
        /// An entry for this address already exists.
        Duplicate { email: String } =>
            "email already registered: {email}",
    }
}

/// Port for mailing-list storage.
///
/// # Semantics
///
/// - [`create`](Self::create) inserts an unconfirmed, opted-in entry and
///   fails with [`EmailRepositoryError::Duplicate`] if the address exists.
/// - [`update`](Self::update) upserts by address, overwriting `confirmed_at`
///   and `opt_out`. The entry's `id` is ignored.
/// - [`delete`](Self::delete) removes the entry. Removing a missing address
///   succeeds.
/// - [`list_page`](Self::list_page) returns entries that have not opted out,
///   ordered by `id` ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailRepository: Send + Sync {
    /// Insert a new subscriber.
    async fn create(&self, email: &EmailAddress) -> Result<(), EmailRepositoryError>;

    /// Fetch a subscriber by address.
    ///
    /// Returns `None` when no entry exists.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<EmailEntry>, EmailRepositoryError>;

    /// Insert or update the entry keyed by `entry.email`.
    async fn update(&self, entry: &EmailEntry) -> Result<(), EmailRepositoryError>;

    /// Remove a subscriber.
    async fn delete(&self, email: &EmailAddress) -> Result<(), EmailRepositoryError>;

    /// Fetch one page of active subscribers.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<EmailEntry>, EmailRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn duplicate_error_names_the_address() {
        let error = EmailRepositoryError::duplicate("a@example.com");
        assert_eq!(error.to_string(), "email already registered: a@example.com");
    }

    #[rstest]
    #[case(EmailRepositoryError::connection("refused"), "connection failed: refused")]
    #[case(EmailRepositoryError::query("syntax"), "query failed: syntax")]
    fn errors_carry_adapter_message(#[case] error: EmailRepositoryError, #[case] fragment: &str) {
        assert!(error.to_string().contains(fragment));
    }

    #[tokio::test]
    async fn mock_repository_is_usable_as_trait_object() {
        let mut mock = MockEmailRepository::new();
        mock.expect_find_by_email().returning(|_| Ok(None));
        let repo: Box<dyn EmailRepository> = Box::new(mock);

        let email = EmailAddress::new("a@example.com").expect("valid email");
        let found = repo.find_by_email(&email).await.expect("lookup succeeds");
        assert!(found.is_none());
    }
}
