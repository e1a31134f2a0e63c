//! The canonical status table — single source of truth for every supported
//! code, its `SCREAMING_SNAKE_CASE` name and its default English message.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::TableError;
use crate::record::StatusRecord;

/// Canonical `(code, name, message)` triples, registered in ascending code
/// order grouped by class. Alias keys and locale overlays are always derived
/// from this list, never hand-maintained.
pub(crate) const CANONICAL: &[(u16, &str, &str)] = &[
    // 2xx Success
    (200, "OK", "The request has succeeded"),
    (201, "CREATED", "The request has been fulfilled and resulted in a new resource"),
    (202, "ACCEPTED", "The request has been accepted for processing"),
    (204, "NO_CONTENT", "The server successfully processed the request but returns no content"),
    (206, "PARTIAL_CONTENT", "The server is delivering only part of the resource due to a range header sent by the client"),
    // 3xx Redirection
    (301, "MOVED_PERMANENTLY", "The requested resource has been permanently moved"),
    (302, "FOUND", "The requested resource temporarily resides under a different URI"),
    (304, "NOT_MODIFIED", "The resource has not been modified since last requested"),
    (307, "TEMPORARY_REDIRECT", "The request should be repeated with another URI but future requests should still use the original URI"),
    (308, "PERMANENT_REDIRECT", "The request and all future requests should be repeated using another URI"),
    // 4xx Client Error
    (400, "BAD_REQUEST", "The server cannot process the request due to client error"),
    (401, "UNAUTHORIZED", "Authentication is required and has failed or not been provided"),
    (403, "FORBIDDEN", "The server understood the request but refuses to authorize it"),
    (404, "NOT_FOUND", "The requested resource could not be found"),
    (405, "METHOD_NOT_ALLOWED", "The request method is not allowed for this resource"),
    (406, "NOT_ACCEPTABLE", "The requested resource is capable of generating only content not acceptable according to the Accept headers"),
    (408, "REQUEST_TIMEOUT", "The server timed out waiting for the request"),
    (409, "CONFLICT", "The request conflicts with the current state of the resource"),
    (410, "GONE", "The requested resource is no longer available"),
    (411, "LENGTH_REQUIRED", "The request did not specify the length of its content which is required by the requested resource"),
    (412, "PRECONDITION_FAILED", "The server does not meet one of the preconditions that the requester put on the request"),
    (413, "PAYLOAD_TOO_LARGE", "The request is larger than the server is willing or able to process"),
    (414, "URI_TOO_LONG", "The URI provided was too long for the server to process"),
    (415, "UNSUPPORTED_MEDIA_TYPE", "The request entity has a media type which the server or resource does not support"),
    (416, "RANGE_NOT_SATISFIABLE", "The client has asked for a portion of the file but the server cannot supply that portion"),
    (417, "EXPECTATION_FAILED", "The server cannot meet the requirements of the Expect request-header field"),
    (418, "IM_A_TEAPOT", "Any attempt to brew coffee with a teapot should result in the error code 418 I'm a teapot"),
    (422, "UNPROCESSABLE_ENTITY", "The request was well-formed but contains semantic errors"),
    (426, "UPGRADE_REQUIRED", "The client should switch to a different protocol such as TLS/1.0 given in the Upgrade header field"),
    (428, "PRECONDITION_REQUIRED", "The origin server requires the request to be conditional"),
    (429, "TOO_MANY_REQUESTS", "The user has sent too many requests in a given amount of time"),
    (431, "REQUEST_HEADER_FIELDS_TOO_LARGE", "The server is unwilling to process the request because either an individual header field or all the header fields collectively are too large"),
    (451, "UNAVAILABLE_FOR_LEGAL_REASONS", "A server operator has received a legal demand to deny access to a resource or to a set of resources that includes the requested resource"),
    // 5xx Server Error
    (500, "INTERNAL_SERVER_ERROR", "The server encountered an unexpected condition"),
    (501, "NOT_IMPLEMENTED", "The server does not support the functionality required"),
    (502, "BAD_GATEWAY", "The server received an invalid response from the upstream server"),
    (503, "SERVICE_UNAVAILABLE", "The server is currently unavailable"),
    (504, "GATEWAY_TIMEOUT", "The server did not receive a timely response from upstream"),
    (505, "HTTP_VERSION_NOT_SUPPORTED", "The server does not support the HTTP protocol version used in the request"),
    (511, "NETWORK_AUTHENTICATION_REQUIRED", "The client needs to authenticate to gain network access"),
];

static TABLE: LazyLock<StatusTable> = LazyLock::new(|| {
    StatusTable::from_entries(CANONICAL).expect("canonical status table is internally consistent")
});

/// The ordered collection of all supported [`StatusRecord`]s.
///
/// Construction validates the data-consistency contract up front: codes must
/// be in range and unique, names unique, messages non-empty. A lookup for an
/// unsupported code is an ordinary absent result, not an error.
///
/// # Examples
///
/// ```
/// use http_reply::StatusTable;
///
/// let table = StatusTable::canonical();
/// assert_eq!(table.get(404).unwrap().name(), "NOT_FOUND");
/// assert!(table.get(499).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StatusTable {
    records: Vec<StatusRecord>,
}

impl StatusTable {
    /// Build a table from `(code, name, message)` triples, in the given
    /// order.
    ///
    /// # Errors
    ///
    /// Fails fast on the configuration defects described in [`TableError`]:
    /// a code outside `100..=599`, a duplicate code or name, or an empty
    /// message.
    pub fn from_entries(entries: &[(u16, &'static str, &'static str)]) -> Result<Self, TableError> {
        let mut codes = HashSet::with_capacity(entries.len());
        let mut names = HashSet::with_capacity(entries.len());
        let mut records = Vec::with_capacity(entries.len());

        for &(code, name, message) in entries {
            if !(100..=599).contains(&code) {
                return Err(TableError::CodeOutOfRange(code));
            }
            if !codes.insert(code) {
                return Err(TableError::DuplicateCode(code));
            }
            if !names.insert(name) {
                return Err(TableError::DuplicateName(name.to_owned()));
            }
            if message.is_empty() {
                return Err(TableError::EmptyMessage(code));
            }
            records.push(StatusRecord::new(code, name, message));
        }

        Ok(Self { records })
    }

    /// The canonical table covering all supported HTTP status codes.
    ///
    /// Built once on first access and shared read-only for the life of the
    /// process.
    #[must_use]
    pub fn canonical() -> &'static Self {
        &TABLE
    }

    /// Look up a record by numeric code. Returns [`None`] for codes the
    /// table does not cover.
    #[must_use]
    pub fn get(&self, code: u16) -> Option<&StatusRecord> {
        self.records.iter().find(|record| record.code() == code)
    }

    /// All records, in registration order. Iteration is restartable and
    /// yields the identical ordering on every call.
    #[must_use]
    pub fn records(&self) -> &[StatusRecord] {
        &self.records
    }

    /// Iterate over all records in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, StatusRecord> {
        self.records.iter()
    }

    /// Number of supported status codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a StatusTable {
    type Item = &'a StatusRecord;
    type IntoIter = std::slice::Iter<'a, StatusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
