#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! ## API Reference
//!
//! # Types
//!
//! - [`http_status`] — The canonical three-key status collection
//! - [`StatusRecord`] — One `(code, name, message)` status description
//! - [`StatusTable`] — The ordered canonical table behind everything
//! - [`StatusMap`] — Generic three-key alias map over per-code payloads
//! - [`create_custom_status`] — Rebuild the collection in a caller-defined shape
//! - [`locales`] — Localized collections (feature-gated per locale)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::sync::LazyLock;

mod error;
mod record;
mod status_map;
mod table;

pub mod locales;

pub use error::TableError;
pub use record::StatusRecord;
pub use status_map::{camel_alias, StatusKey, StatusMap};
pub use table::StatusTable;

static HTTP_STATUS: LazyLock<StatusMap<StatusRecord>> = LazyLock::new(|| {
    let table = StatusTable::canonical();
    StatusMap::project(
        table
            .iter()
            .map(|record| (record.code(), record.name(), record.clone())),
    )
    .expect("canonical status table projects without key collisions")
});

/// The canonical HTTP status collection, addressable by camelCase key,
/// `SCREAMING_SNAKE_CASE` key or numeric code.
///
/// Built once on first access and shared read-only for the life of the
/// process; all three key forms resolve to the identical record instance.
///
/// # Examples
///
/// ```
/// use http_reply::http_status;
///
/// let statuses = http_status();
/// let not_found = statuses.get("notFound").unwrap();
/// assert_eq!(not_found.code(), 404);
/// assert_eq!(not_found.name(), "NOT_FOUND");
/// assert_eq!(not_found.message(), "The requested resource could not be found");
///
/// // All three key forms yield the same record.
/// assert!(std::ptr::eq(not_found, statuses.get(404).unwrap()));
/// assert!(std::ptr::eq(not_found, statuses.get("NOT_FOUND").unwrap()));
/// ```
#[must_use]
pub fn http_status() -> &'static StatusMap<StatusRecord> {
    &HTTP_STATUS
}

/// Rebuild the canonical collection with every status passed through
/// `transform`, keeping the three-key aliasing over the transformed values.
///
/// `transform` receives `(code, name, message)` and is called exactly once
/// per supported status code — never once per alias. See
/// [`StatusMap::format_with`] for the same operation over an arbitrary base
/// map.
///
/// # Examples
///
/// ```
/// use http_reply::create_custom_status;
///
/// #[derive(Debug, PartialEq)]
/// struct ApiError {
///     http_code: u16,
///     label: &'static str,
/// }
///
/// let custom = create_custom_status(|code, name, _message| ApiError {
///     http_code: code,
///     label: match name {
///         "IM_A_TEAPOT" => "IM_A_TEAPOT",
///         _ => "OTHER",
///     },
/// });
///
/// assert_eq!(custom["imATeapot"], ApiError { http_code: 418, label: "IM_A_TEAPOT" });
/// ```
pub fn create_custom_status<T>(transform: impl FnMut(u16, &str, &str) -> T) -> StatusMap<T> {
    http_status().format_with(transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_is_memoized() {
        assert!(std::ptr::eq(http_status(), http_status()));
    }

    #[test]
    fn covers_the_whole_canonical_table() {
        let table = StatusTable::canonical();
        let statuses = http_status();
        assert_eq!(statuses.len(), table.len());
        for record in table {
            assert!(statuses.contains(record.code()));
        }
    }

    #[test]
    fn create_custom_status_transforms_every_code_once() {
        let mut calls = 0;
        let custom = create_custom_status(|code, _, _| {
            calls += 1;
            code
        });
        assert_eq!(calls, StatusTable::canonical().len());
        assert_eq!(custom[500], 500);
    }
}
