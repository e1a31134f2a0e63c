//! Construction-time configuration errors.

/// Errors raised while building a status table, alias map or locale overlay.
///
/// Every variant is a data-authoring defect detected at construction time,
/// never a runtime condition: a corrupt canonical table or an incomplete
/// locale must surface immediately instead of degrading silently. Looking up
/// an unsupported code or key is *not* an error — those lookups return
/// [`None`](Option::None).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TableError {
    /// A status code outside the valid `100..=599` range.
    #[error("status code {0} is outside the valid 100..=599 range")]
    CodeOutOfRange(u16),

    /// The same numeric code was registered twice.
    #[error("duplicate status code {0} in table")]
    DuplicateCode(u16),

    /// The same symbolic name was registered twice.
    #[error("duplicate status name `{0}` in table")]
    DuplicateName(String),

    /// Two distinct entries derived the same alias key.
    #[error("alias key `{0}` resolves to more than one status")]
    AliasCollision(String),

    /// A locale message map has no entry for a canonical status code.
    #[error("locale is missing a message for status code {0}")]
    MissingMessage(u16),

    /// A message (canonical or localized) is empty.
    #[error("empty message for status code {0}")]
    EmptyMessage(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TableError::DuplicateCode(404).to_string(),
            "duplicate status code 404 in table",
        );
        assert_eq!(
            TableError::AliasCollision("notFound".into()).to_string(),
            "alias key `notFound` resolves to more than one status",
        );
        assert_eq!(
            TableError::MissingMessage(511).to_string(),
            "locale is missing a message for status code 511",
        );
    }
}
