//! English locale — the default.
//!
//! The canonical table already carries English messages, so this module is
//! an alias for the base collection rather than an overlay.

/// The status collection with English messages, identical to
/// [`crate::http_status`].
///
/// ```
/// use http_reply::locales::en;
///
/// assert_eq!(
///     en::http_status()["FORBIDDEN"].message(),
///     "The server understood the request but refuses to authorize it",
/// );
/// ```
pub use crate::http_status;
