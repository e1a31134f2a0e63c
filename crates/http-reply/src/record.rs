//! The immutable `(code, name, message)` status record.

use std::borrow::Cow;
use std::fmt;

/// An HTTP status described by its numeric code, canonical
/// `SCREAMING_SNAKE_CASE` name and a human-readable message.
///
/// Records are immutable: localization and custom formatting always build a
/// new record rather than mutating an existing one. The string fields are
/// [`Cow<'static, str>`] so the shipped tables borrow static data without
/// allocation.
///
/// # Examples
///
/// ```
/// use http_reply::StatusRecord;
///
/// let not_found = StatusRecord::new(404, "NOT_FOUND", "The requested resource could not be found");
/// assert_eq!(not_found.code(), 404);
/// assert_eq!(not_found.name(), "NOT_FOUND");
/// assert_eq!(not_found.to_string(), "404 NOT_FOUND: The requested resource could not be found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusRecord {
    code: u16,
    name: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl StatusRecord {
    /// Create a new status record.
    ///
    /// This performs no validation; range and uniqueness checks happen when
    /// records are assembled into a [`StatusTable`](crate::StatusTable).
    pub fn new(
        code: u16,
        name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            message: message.into(),
        }
    }

    /// The numeric HTTP status code (e.g. `404`).
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// The canonical `SCREAMING_SNAKE_CASE` name (e.g. `NOT_FOUND`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable description of the status.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Return a new record with the same `code` and `name` but a different
    /// `message`. Used by locale overlays.
    ///
    /// ```
    /// use http_reply::StatusRecord;
    ///
    /// let base = StatusRecord::new(403, "FORBIDDEN", "The server refuses to authorize it");
    /// let de = base.with_message("Der Server verweigert die Autorisierung");
    /// assert_eq!(de.code(), 403);
    /// assert_eq!(de.name(), "FORBIDDEN");
    /// assert_ne!(de.message(), base.message());
    /// ```
    #[must_use]
    pub fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: self.code,
            name: self.name.clone(),
            message: message.into(),
        }
    }
}

impl fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.code, self.name, self.message)
    }
}
