use std::str::FromStr;

use log::trace;

use super::layout;
use super::payload::decode_payload;
use super::reader::DataUriReader;
use crate::error::ParseError;
use crate::media_type::normalize_media_type;
use crate::parcel::Parcel;

/// Parses a data URI into its decoded content and normalized media type.
///
/// The media type region is never percent-decoded. The payload is base64
/// when a `;base64,` marker is present anywhere in the URI, and
/// percent-escaped otherwise.
///
/// # Examples
/// ```
/// use dataurl_core::parse;
///
/// let parcel = parse("data:text/plain;base64,VGhpcyBpcyBhIHRlc3Qh")?;
/// assert_eq!(parcel.text()?, "This is a test!");
/// assert_eq!(parcel.media_type(), "text/plain;charset=US-ASCII");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(uri: &str) -> Result<Parcel, ParseError> {
    let reader = DataUriReader::new(uri);
    if !reader.has_scheme() {
        return Err(ParseError::NotADataUri);
    }

    if layout::EMPTY_DEFAULT_URIS.iter().any(|empty| *empty == uri) {
        trace!("data URI {uri:?} is an empty default");
        return Ok(Parcel::empty_default());
    }

    let parts = reader.split()?;
    trace!(
        "data URI media type region {:?}, {:?} payload of {} bytes",
        parts.media_type,
        parts.encoding,
        parts.payload.len()
    );

    let media_type = normalize_media_type(parts.media_type)?;
    let bytes = decode_payload(parts.payload, parts.encoding)?;
    Ok(Parcel::new(bytes, media_type))
}

/// Like [`parse`], but panics on failure. Meant for URIs known to be valid.
///
/// # Examples
/// ```
/// let parcel = dataurl_core::parse_or_panic("data:,Hello");
/// assert_eq!(parcel.as_bytes(), b"Hello");
/// ```
#[track_caller]
pub fn parse_or_panic(uri: &str) -> Parcel {
    match parse(uri) {
        Ok(parcel) => parcel,
        Err(err) => panic!("invalid data URI {uri:?}: {err}"),
    }
}

impl FromStr for Parcel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Parcel {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_or_panic};
    use crate::error::ErrorKind;
    use crate::parcel::Parcel;

    #[test]
    fn parse_rejects_other_schemes() {
        for uri in ["", "datum:,", "http://example.com/robots.txt", "DATA:,x"] {
            assert_eq!(parse(uri).unwrap_err().kind(), ErrorKind::NotADataUri);
        }
    }

    #[test]
    fn parse_empty_defaults_match_general_path() {
        for uri in [
            "data:text/plain;charset=US-ASCII,",
            "data:;charset=US-ASCII;base64,",
        ] {
            let parcel = parse(uri).unwrap();
            assert_eq!(parcel, Parcel::empty_default());
        }
        let general = parse("data:text/plain;charset=US-ASCII,x").unwrap();
        assert_eq!(general.media_type(), Parcel::empty_default().media_type());
    }

    #[test]
    fn parse_bad_media_type() {
        let err = parse("data:text/plaincharset=utf-8,x").unwrap_err();
        assert!(err.is_bad_media_type());
        assert!(err.media_type_error().is_some());
    }

    #[test]
    fn parse_bad_payload_is_syntax_error() {
        let err = parse("data:;base64,abc").unwrap_err();
        assert!(err.is_syntax_error());
        assert!(err.payload_error().is_some());

        let err = parse("data:,100%").unwrap_err();
        assert!(err.is_syntax_error());
    }

    #[test]
    fn parse_lenient_base64_payloads() {
        assert_eq!(parse("data:;base64,QR==").unwrap().as_bytes(), b"A");
        let parcel = parse("data:;base64,VGhp\r\ncyBp").unwrap();
        assert_eq!(parcel.text().unwrap(), "This i");
    }

    #[test]
    fn parse_lone_semicolon_media_type() {
        let parcel = parse("data:;,test").unwrap();
        assert_eq!(parcel.media_type(), "text/plain;charset=US-ASCII");
        assert_eq!(parcel.text().unwrap(), "test");
    }

    #[test]
    fn from_str_and_try_from_route_to_parse() {
        let parcel: Parcel = "data:,a,b".parse().unwrap();
        assert_eq!(parcel.as_bytes(), b"a,b");
        assert!(Parcel::try_from("nope").is_err());
    }

    #[test]
    #[should_panic(expected = "not a data URI")]
    fn parse_or_panic_panics() {
        parse_or_panic("http://example.com");
    }
}
