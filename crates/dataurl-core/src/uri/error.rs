use thiserror::Error;

/// Payload decoding failures, wrapped by [`crate::ParseError::Syntax`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid URL escape {escape:?} at byte {offset}")]
    InvalidPercentEscape { offset: usize, escape: String },
}
