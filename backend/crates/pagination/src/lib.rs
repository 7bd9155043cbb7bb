//! Page and count primitives shared by batch endpoints.
//!
//! A [`PageRequest`] is the validated form of a client supplied
//! `{"Page": n, "Count": m}` pair. Pages are 1-based and both values must be
//! strictly positive; anything else is rejected before a query is built.
//!
//! ```
//! use pagination::PageRequest;
//!
//! let request = PageRequest::new(3, 25).expect("positive values");
//! assert_eq!(request.offset(), 50);
//! assert!(PageRequest::new(0, 25).is_err());
//! ```

/// Message reported whenever page parameters fail validation.
pub const PAGE_REQUEST_MESSAGE: &str = "Page and Count fields are required and must be > 0";

/// Validation failures raised by [`PageRequest::new`].
///
/// Both variants display as [`PAGE_REQUEST_MESSAGE`]; the rejected value is
/// kept for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// `Page` was zero or negative.
    #[error("{}", PAGE_REQUEST_MESSAGE)]
    Page(i64),
    /// `Count` was zero or negative.
    #[error("{}", PAGE_REQUEST_MESSAGE)]
    Count(i64),
}

/// A validated, 1-based page selector.
///
/// ## Invariants
/// - `page >= 1`
/// - `count >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    count: u64,
}

impl PageRequest {
    /// Validate raw client values.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when either value is not strictly
    /// positive. `Page` is checked first.
    pub fn new(page: i64, count: i64) -> Result<Self, PageRequestError> {
        let page = positive(page).ok_or(PageRequestError::Page(page))?;
        let count = positive(count).ok_or(PageRequestError::Count(count))?;
        Ok(Self { page, count })
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of rows on the page.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Number of rows preceding this page, saturating at `u64::MAX`.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.count)
    }
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|value| *value > 0)
}
