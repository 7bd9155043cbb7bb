//! Mailing-list subscriber model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    EmptyEmail,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email field is required"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// Email address keying a mailing-list entry.
///
/// Only presence is enforced: the value must contain something other than
/// whitespace. Surrounding whitespace is trimmed so `" a@b.c "` and `"a@b.c"`
/// address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use mailinglist::domain::EmailAddress;
    ///
    /// let email = EmailAddress::new(" a@example.com ").expect("non-blank");
    /// assert_eq!(email.as_ref(), "a@example.com");
    /// assert!(EmailAddress::new("   ").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, EmailValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, EmailValidationError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(EmailValidationError::EmptyEmail);
        }
        if trimmed.len() == email.len() {
            Ok(Self(email))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// One mailing-list subscriber.
///
/// Serialised with the wire field names clients already use:
///
/// ```text
/// {"Id":1,"Email":"a@example.com","ConfirmedAt":null,"OptOut":false}
/// ```
///
/// `id` is assigned by the store; callers building an entry for an update
/// may leave it at `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailEntry {
    pub id: i64,
    pub email: EmailAddress,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub opt_out: bool,
}

impl EmailEntry {
    /// Entry for a freshly subscribed address: unconfirmed and opted in.
    pub fn subscribed(id: i64, email: EmailAddress) -> Self {
        Self {
            id,
            email,
            confirmed_at: None,
            opt_out: false,
        }
    }
}
