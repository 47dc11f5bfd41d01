use thiserror::Error;

use crate::media_type::MediaTypeError;
use crate::uri::error::PayloadError;

/// Failure category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotADataUri,
    Syntax,
    BadMediaType,
    Internal,
}

impl ErrorKind {
    /// Every category except `Internal` is the caller's fault.
    pub fn is_bad_request(self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

/// Errors returned by [`crate::parse`].
///
/// Exactly one category applies per failure. Check categories most-specific
/// first; [`ParseError::is_bad_request`] matches every category but
/// `Internal`.
///
/// # Examples
/// ```
/// use dataurl_core::{ErrorKind, parse};
///
/// let err = parse("datum:,").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotADataUri);
/// assert!(err.is_bad_request());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("bad request: not a data URI")]
    NotADataUri,
    #[error("bad request: syntax error: {message}")]
    Syntax {
        message: String,
        #[source]
        source: Option<PayloadError>,
    },
    #[error("bad request: bad media type: {0}")]
    BadMediaType(#[from] MediaTypeError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        ParseError::Syntax {
            message: message.into(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NotADataUri => ErrorKind::NotADataUri,
            ParseError::Syntax { .. } => ErrorKind::Syntax,
            ParseError::BadMediaType(_) => ErrorKind::BadMediaType,
            ParseError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.kind().is_bad_request()
    }

    pub fn is_syntax_error(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    pub fn is_bad_media_type(&self) -> bool {
        self.kind() == ErrorKind::BadMediaType
    }

    pub fn is_not_a_data_uri(&self) -> bool {
        self.kind() == ErrorKind::NotADataUri
    }

    pub fn is_internal_error(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }

    /// The grammar failure behind a `BadMediaType` error.
    pub fn media_type_error(&self) -> Option<&MediaTypeError> {
        match self {
            ParseError::BadMediaType(err) => Some(err),
            _ => None,
        }
    }

    /// The decoder failure behind a `Syntax` error, if any.
    pub fn payload_error(&self) -> Option<&PayloadError> {
        match self {
            ParseError::Syntax { source, .. } => source.as_ref(),
            _ => None,
        }
    }
}

impl From<PayloadError> for ParseError {
    fn from(err: PayloadError) -> Self {
        ParseError::Syntax {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
