//! Three-key alias projection over per-code payloads.
//!
//! A [`StatusMap`] exposes every status under a lower-camel-case key, its
//! `SCREAMING_SNAKE_CASE` name and its numeric code. All three keys resolve
//! to the *same* payload instance: payloads are stored once and the key maps
//! point at them by index, so referential identity across alias forms is
//! structural rather than a property the data happens to have.

use std::collections::HashMap;
use std::ops::Index;

use crate::error::TableError;
use crate::record::StatusRecord;

/// Derive the lower-camel-case alias from a `SCREAMING_SNAKE_CASE` name.
///
/// Splits on `_`, lowercases the first segment and capitalizes the rest.
///
/// # Examples
///
/// ```
/// use http_reply::camel_alias;
///
/// assert_eq!(camel_alias("OK"), "ok");
/// assert_eq!(camel_alias("NOT_FOUND"), "notFound");
/// assert_eq!(camel_alias("IM_A_TEAPOT"), "imATeapot");
/// ```
#[must_use]
pub fn camel_alias(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, segment) in name.split('_').filter(|s| !s.is_empty()).enumerate() {
        let mut chars = segment.chars();
        if i == 0 {
            out.extend(chars.flat_map(char::to_lowercase));
        } else if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

/// A lookup key for a [`StatusMap`]: either a numeric code or one of the two
/// name forms.
///
/// Converts from `u16`, `&str` and [`http::StatusCode`], so all of these
/// work:
///
/// ```
/// use http_reply::http_status;
///
/// let statuses = http_status();
/// assert!(statuses.get(404).is_some());
/// assert!(statuses.get("NOT_FOUND").is_some());
/// assert!(statuses.get("notFound").is_some());
/// assert!(statuses.get(http::StatusCode::NOT_FOUND).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey<'a> {
    /// Numeric status code, e.g. `404`.
    Code(u16),
    /// Symbolic name in either alias form, e.g. `NOT_FOUND` or `notFound`.
    Name(&'a str),
}

impl From<u16> for StatusKey<'static> {
    fn from(code: u16) -> Self {
        Self::Code(code)
    }
}

impl<'a> From<&'a str> for StatusKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<http::StatusCode> for StatusKey<'static> {
    fn from(code: http::StatusCode) -> Self {
        Self::Code(code.as_u16())
    }
}

/// Per-code payloads addressable under three equivalent key forms.
///
/// The default collection (see [`http_status`](crate::http_status)) carries
/// [`StatusRecord`] payloads; [`format_with`](StatusMap::format_with)
/// produces maps over any caller-chosen type.
///
/// Payloads live in a single vector in canonical registration order; the
/// code and name maps resolve keys to vector indices. Lookups through any
/// alias therefore return the identical `&T`, and re-reading a key never
/// regenerates the value.
#[derive(Debug, Clone)]
pub struct StatusMap<T> {
    entries: Vec<T>,
    codes: Vec<u16>,
    by_code: HashMap<u16, usize>,
    by_name: HashMap<String, usize>,
}

impl<T> StatusMap<T> {
    /// Project `(code, name, payload)` entries into a three-key alias map.
    ///
    /// The camel-case key is derived from `name` via [`camel_alias`]; the
    /// payload is inserted once and referenced by all three keys.
    ///
    /// # Errors
    ///
    /// Fails fast on a duplicate numeric code or on two entries whose keys
    /// collide (for example two distinct names deriving the same camelCase
    /// alias) — both indicate a corrupt source table.
    pub fn project<'a, I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u16, &'a str, T)>,
    {
        let entries = entries.into_iter();
        let (lower, _) = entries.size_hint();

        let mut map = Self {
            entries: Vec::with_capacity(lower),
            codes: Vec::with_capacity(lower),
            by_code: HashMap::with_capacity(lower),
            by_name: HashMap::with_capacity(lower),
        };

        for (code, name, payload) in entries {
            let index = map.entries.len();
            if map.by_code.insert(code, index).is_some() {
                return Err(TableError::DuplicateCode(code));
            }

            let camel = camel_alias(name);
            for key in [name.to_owned(), camel] {
                // A name without underscores that is already lowercase
                // derives itself; a single insertion covers both forms.
                if map.by_name.get(&key) == Some(&index) {
                    continue;
                }
                if map.by_name.insert(key.clone(), index).is_some() {
                    return Err(TableError::AliasCollision(key));
                }
            }

            map.entries.push(payload);
            map.codes.push(code);
        }

        Ok(map)
    }

    /// Look up a payload by any of the three key forms.
    ///
    /// Returns [`None`] for unsupported codes or unknown names — a normal
    /// outcome for arbitrary caller input, distinct from the construction
    /// errors in [`TableError`].
    pub fn get<'a>(&self, key: impl Into<StatusKey<'a>>) -> Option<&T> {
        let index = match key.into() {
            StatusKey::Code(code) => self.by_code.get(&code),
            StatusKey::Name(name) => self.by_name.get(name),
        };
        index.map(|&i| &self.entries[i])
    }

    /// Whether any of the three key forms resolves to a payload.
    pub fn contains<'a>(&self, key: impl Into<StatusKey<'a>>) -> bool {
        self.get(key).is_some()
    }

    /// Iterate `(code, payload)` pairs in canonical registration order.
    ///
    /// Iteration is restartable and yields the identical ordering on every
    /// call.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &T)> + '_ {
        self.codes.iter().copied().zip(self.entries.iter())
    }

    /// The numeric codes covered by this map, in canonical order.
    pub fn codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.codes.iter().copied()
    }

    /// Number of statuses in the map (one per code, not per alias).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatusMap<StatusRecord> {
    /// Rebuild the collection with every record passed through `transform`,
    /// preserving the three-key aliasing over the transformed payloads.
    ///
    /// `transform` is invoked exactly once per status code with that
    /// record's `(code, name, message)` — never once per alias. The produced
    /// map reuses this map's already-validated keys, so the three aliases
    /// for a code reference the single value `transform` returned for it.
    /// Panics raised by `transform` propagate to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_reply::http_status;
    ///
    /// struct Label {
    ///     http_code: u16,
    ///     label: String,
    /// }
    ///
    /// let custom = http_status().format_with(|code, name, _message| Label {
    ///     http_code: code,
    ///     label: name.to_owned(),
    /// });
    ///
    /// let teapot = custom.get("imATeapot").unwrap();
    /// assert_eq!(teapot.http_code, 418);
    /// assert_eq!(teapot.label, "IM_A_TEAPOT");
    /// ```
    pub fn format_with<U>(&self, mut transform: impl FnMut(u16, &str, &str) -> U) -> StatusMap<U> {
        let entries = self
            .entries
            .iter()
            .map(|record| transform(record.code(), record.name(), record.message()))
            .collect();

        StatusMap {
            entries,
            codes: self.codes.clone(),
            by_code: self.by_code.clone(),
            by_name: self.by_name.clone(),
        }
    }

    /// Produce a new collection with every record's `message` replaced by
    /// the locale-specific string for its code, `code` and `name` untouched.
    ///
    /// Iterates the per-code record list once (not the alias-expanded view)
    /// and reuses the validated keys, so the localized map covers exactly
    /// the same code set as this one.
    ///
    /// # Errors
    ///
    /// An incomplete locale is a data-authoring bug: a canonical code absent
    /// from `messages` yields [`TableError::MissingMessage`] and a blank
    /// translation yields [`TableError::EmptyMessage`]. There is no silent
    /// fallback to the base message.
    pub fn localize(&self, messages: &[(u16, &'static str)]) -> Result<Self, TableError> {
        let lookup: HashMap<u16, &'static str> = messages.iter().copied().collect();

        let mut entries = Vec::with_capacity(self.entries.len());
        for record in &self.entries {
            let message = lookup
                .get(&record.code())
                .copied()
                .ok_or(TableError::MissingMessage(record.code()))?;
            if message.is_empty() {
                return Err(TableError::EmptyMessage(record.code()));
            }
            entries.push(record.with_message(message));
        }

        Ok(Self {
            entries,
            codes: self.codes.clone(),
            by_code: self.by_code.clone(),
            by_name: self.by_name.clone(),
        })
    }
}

impl<T> Index<u16> for StatusMap<T> {
    type Output = T;

    /// Shorthand for [`get`](StatusMap::get).
    ///
    /// # Panics
    ///
    /// Panics if the code is not in the map; use `get` for fallible lookup.
    fn index(&self, code: u16) -> &T {
        self.get(code)
            .unwrap_or_else(|| panic!("no status registered for code {code}"))
    }
}

impl<T> Index<&str> for StatusMap<T> {
    type Output = T;

    /// Shorthand for [`get`](StatusMap::get).
    ///
    /// # Panics
    ///
    /// Panics if the name is not in the map; use `get` for fallible lookup.
    fn index(&self, name: &str) -> &T {
        self.get(name)
            .unwrap_or_else(|| panic!("no status registered for name `{name}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_alias_cases() {
        let cases: &[(&str, &str)] = &[
            ("OK", "ok"),
            ("CREATED", "created"),
            ("NOT_FOUND", "notFound"),
            ("IM_A_TEAPOT", "imATeapot"),
            ("MOVED_PERMANENTLY", "movedPermanently"),
            ("REQUEST_HEADER_FIELDS_TOO_LARGE", "requestHeaderFieldsTooLarge"),
            ("HTTP_VERSION_NOT_SUPPORTED", "httpVersionNotSupported"),
        ];
        for (name, expected) in cases {
            assert_eq!(camel_alias(name), *expected, "derivation of {name}");
        }
    }

    #[test]
    fn camel_alias_ignores_empty_segments() {
        assert_eq!(camel_alias("NOT__FOUND"), "notFound");
        assert_eq!(camel_alias("_OK_"), "ok");
    }

    #[test]
    fn three_keys_one_payload() {
        let map = StatusMap::project([(404, "NOT_FOUND", "payload")]).unwrap();

        let by_code = map.get(404).unwrap();
        let by_snake = map.get("NOT_FOUND").unwrap();
        let by_camel = map.get("notFound").unwrap();

        assert!(std::ptr::eq(by_code, by_snake));
        assert!(std::ptr::eq(by_snake, by_camel));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn absent_keys_return_none() {
        let map = StatusMap::project([(404, "NOT_FOUND", ())]).unwrap();
        assert!(map.get(405).is_none());
        assert!(map.get("METHOD_NOT_ALLOWED").is_none());
        assert!(map.get("NotFound").is_none());
        assert!(!map.contains(500));
    }

    #[test]
    fn project_rejects_duplicate_code() {
        let err = StatusMap::project([(404, "NOT_FOUND", ()), (404, "ALSO_NOT_FOUND", ())])
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateCode(404));
    }

    #[test]
    fn project_rejects_colliding_camel_aliases() {
        // Distinct snake names, identical derived camel key.
        let err = StatusMap::project([(404, "NOT_FOUND", ()), (405, "NOT__FOUND", ())])
            .unwrap_err();
        assert_eq!(err, TableError::AliasCollision("notFound".into()));
    }

    #[test]
    fn project_accepts_self_deriving_name() {
        // An already-lowercase single-segment name derives itself; that is
        // one key, not a collision.
        let map = StatusMap::project([(200, "ok", ())]).unwrap();
        assert!(map.contains("ok"));
    }

    #[test]
    fn iteration_order_matches_registration() {
        let map = StatusMap::project([(200, "OK", "a"), (404, "NOT_FOUND", "b"), (500, "INTERNAL_SERVER_ERROR", "c")])
            .unwrap();
        let order: Vec<u16> = map.iter().map(|(code, _)| code).collect();
        assert_eq!(order, vec![200, 404, 500]);
        // Restartable with identical ordering.
        let again: Vec<u16> = map.codes().collect();
        assert_eq!(again, order);
    }

    #[test]
    fn index_by_code_and_name() {
        let map = StatusMap::project([(404, "NOT_FOUND", 44)]).unwrap();
        assert_eq!(map[404], 44);
        assert_eq!(map["NOT_FOUND"], 44);
        assert_eq!(map["notFound"], 44);
    }

    #[test]
    #[should_panic(expected = "no status registered for code 599")]
    fn index_panics_on_absent_code() {
        let map = StatusMap::project([(404, "NOT_FOUND", ())]).unwrap();
        let _ = map[599];
    }

    #[test]
    fn format_with_reuses_keys_and_runs_once_per_code() {
        let base = StatusMap::project([
            (404, "NOT_FOUND", StatusRecord::new(404, "NOT_FOUND", "missing")),
            (500, "INTERNAL_SERVER_ERROR", StatusRecord::new(500, "INTERNAL_SERVER_ERROR", "boom")),
        ])
        .unwrap();

        let mut calls = 0;
        let custom = base.format_with(|code, name, message| {
            calls += 1;
            format!("{code}/{name}/{message}")
        });

        assert_eq!(calls, 2);
        assert_eq!(custom[404], "404/NOT_FOUND/missing");
        assert!(std::ptr::eq(
            custom.get(500).unwrap(),
            custom.get("internalServerError").unwrap(),
        ));
    }

    #[test]
    fn localize_replaces_only_messages() {
        let base = StatusMap::project([
            (403, "FORBIDDEN", StatusRecord::new(403, "FORBIDDEN", "refused")),
        ])
        .unwrap();

        let localized = base.localize(&[(403, "verboten")]).unwrap();
        let record = localized.get("forbidden").unwrap();
        assert_eq!(record.code(), 403);
        assert_eq!(record.name(), "FORBIDDEN");
        assert_eq!(record.message(), "verboten");

        // Base map is untouched.
        assert_eq!(base[403].message(), "refused");
    }

    #[test]
    fn localize_fails_fast_on_missing_code() {
        let base = StatusMap::project([
            (403, "FORBIDDEN", StatusRecord::new(403, "FORBIDDEN", "refused")),
            (404, "NOT_FOUND", StatusRecord::new(404, "NOT_FOUND", "missing")),
        ])
        .unwrap();

        let err = base.localize(&[(403, "verboten")]).unwrap_err();
        assert_eq!(err, TableError::MissingMessage(404));
    }

    #[test]
    fn localize_fails_fast_on_empty_message() {
        let base = StatusMap::project([
            (403, "FORBIDDEN", StatusRecord::new(403, "FORBIDDEN", "refused")),
        ])
        .unwrap();

        let err = base.localize(&[(403, "")]).unwrap_err();
        assert_eq!(err, TableError::EmptyMessage(403));
    }

    #[test]
    fn http_status_code_keys() {
        let map = StatusMap::project([(404, "NOT_FOUND", "x")]).unwrap();
        assert!(map.get(http::StatusCode::NOT_FOUND).is_some());
        assert!(map.get(http::StatusCode::GONE).is_none());
    }
}
