use crate::error::ParseError;

use super::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base64,
    PercentEscaped,
}

/// The two regions of a data URI, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUriParts<'a> {
    pub media_type: &'a str,
    pub payload: &'a str,
    pub encoding: Encoding,
}

pub struct DataUriReader<'a> {
    uri: &'a str,
}

impl<'a> DataUriReader<'a> {
    pub fn new(uri: &'a str) -> Self {
        Self { uri }
    }

    pub fn has_scheme(&self) -> bool {
        self.uri.starts_with(layout::DATA_SCHEME)
    }

    /// Locates the media type/payload boundary.
    ///
    /// A `;base64,` marker anywhere in the URI wins over a plain comma, even
    /// when the comma comes first.
    pub fn split(&self) -> Result<DataUriParts<'a>, ParseError> {
        let (index, marker, encoding) = if let Some(index) = self.uri.find(layout::BASE64_MARKER)
        {
            (index, layout::BASE64_MARKER, Encoding::Base64)
        } else if let Some(index) = self.uri.find(layout::COMMA) {
            (index, layout::COMMA, Encoding::PercentEscaped)
        } else {
            return Err(ParseError::syntax("data URI does not contain a comma"));
        };

        let media_type = self.read_region(layout::DATA_SCHEME.len()..index)?;
        let payload = self.read_region(index + marker.len()..self.uri.len())?;
        Ok(DataUriParts {
            media_type,
            payload,
            encoding,
        })
    }

    fn read_region(&self, range: std::ops::Range<usize>) -> Result<&'a str, ParseError> {
        self.uri.get(range.clone()).ok_or_else(|| {
            ParseError::Internal(format!(
                "region {}..{} out of bounds for a {}-byte URI",
                range.start,
                range.end,
                self.uri.len()
            ))
        })
    }
}
