use thiserror::Error;

/// Grammar violations reported by media type parsing.
///
/// # Examples
/// ```
/// use dataurl_core::{MediaTypeError, normalize_media_type};
///
/// let err = normalize_media_type("apple/banana/cherry").unwrap_err();
/// assert!(matches!(err, MediaTypeError::TrailingContent { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaTypeError {
    #[error("no media type")]
    NoMediaType,
    #[error("expected slash after first token")]
    MissingSlash,
    #[error("expected token after slash")]
    MissingSubtype,
    #[error("unexpected content after media subtype: {rest:?}")]
    TrailingContent { rest: String },
    #[error("invalid media parameter at byte {offset}")]
    InvalidParameter { offset: usize },
    #[error("unterminated quoted string at byte {offset}")]
    UnterminatedQuote { offset: usize },
    #[error("duplicate parameter name: {name}")]
    DuplicateParameter { name: String },
}
