//! Localized status collections.
//!
//! Each locale substitutes only the human-readable `message` per status
//! code; `code` and `name` are fixed by the HTTP specification and never
//! vary across locales. Every locale covers exactly the canonical code set —
//! an incomplete message table fails at overlay construction instead of
//! silently falling back to English.
//!
//! Locales other than the English default sit behind same-named cargo
//! features (`de`, `es`, `ja`, all enabled by the default `all-locales`
//! feature) so a consumer pulls in only the message tables it needs:
//!
//! ```toml
//! [dependencies]
//! http-reply = { version = "0.1", default-features = false, features = ["serde", "de"] }
//! ```

pub mod en;

#[cfg(feature = "de")]
pub mod de;

#[cfg(feature = "es")]
pub mod es;

#[cfg(feature = "ja")]
pub mod ja;
