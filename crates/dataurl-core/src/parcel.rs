use std::borrow::Cow;
use std::io::Cursor;
use std::str::Utf8Error;

use crate::media_type::layout::DEFAULT_MEDIA_TYPE;

/// Decoded content of a data URI together with its normalized media type.
///
/// Every view reads the same bytes; none applies decoding beyond what the
/// parser already did.
///
/// # Examples
/// ```
/// use std::io::Read;
///
/// use dataurl_core::parse;
///
/// let parcel = parse("data:,Hello%20world!")?;
/// assert_eq!(parcel.text()?, "Hello world!");
/// assert_eq!(parcel.media_type(), "text/plain;charset=US-ASCII");
///
/// let mut streamed = String::new();
/// parcel.reader().read_to_string(&mut streamed)?;
/// assert_eq!(streamed, "Hello world!");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    bytes: Cow<'static, [u8]>,
    media_type: Cow<'static, str>,
}

const EMPTY_DEFAULT: Parcel = Parcel {
    bytes: Cow::Borrowed(&[]),
    media_type: Cow::Borrowed(DEFAULT_MEDIA_TYPE),
};

impl Parcel {
    pub(crate) fn new(bytes: Vec<u8>, media_type: Cow<'_, str>) -> Self {
        let media_type = match media_type {
            Cow::Borrowed(DEFAULT_MEDIA_TYPE) => Cow::Borrowed(DEFAULT_MEDIA_TYPE),
            other => Cow::Owned(other.into_owned()),
        };
        Self {
            bytes: Cow::Owned(bytes),
            media_type,
        }
    }

    /// Empty content with the default media type. Never allocates.
    pub const fn empty_default() -> Self {
        EMPTY_DEFAULT
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The content as text; fails when it is not valid UTF-8.
    pub fn text(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    /// The content as text, with invalid UTF-8 replaced by U+FFFD.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// The content as code points, with invalid UTF-8 replaced by U+FFFD.
    pub fn codepoints(&self) -> Vec<char> {
        self.text_lossy().chars().collect()
    }

    /// A fresh reader over the content; call again to re-read.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.as_bytes())
    }

    /// The normalized media type, always carrying a `charset` parameter.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

impl AsRef<[u8]> for Parcel {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::io::Read;

    use super::Parcel;

    #[test]
    fn empty_default_borrows_static_data() {
        let parcel = Parcel::empty_default();
        assert!(parcel.is_empty());
        assert_eq!(parcel.media_type(), "text/plain;charset=US-ASCII");
        assert!(matches!(parcel.bytes, Cow::Borrowed(_)));
        assert!(matches!(parcel.media_type, Cow::Borrowed(_)));
    }

    #[test]
    fn views_agree_on_content() {
        let parcel = Parcel::new(
            "שלום".as_bytes().to_vec(),
            Cow::Borrowed("text/plain;charset=UTF-8"),
        );
        assert_eq!(parcel.text().unwrap(), "שלום");
        assert_eq!(parcel.codepoints(), "שלום".chars().collect::<Vec<_>>());
        assert_eq!(parcel.len(), 8);

        let mut first = Vec::new();
        parcel.reader().read_to_end(&mut first).unwrap();
        let mut second = Vec::new();
        parcel.reader().read_to_end(&mut second).unwrap();
        assert_eq!(first, parcel.as_bytes());
        assert_eq!(second, parcel.as_bytes());
    }

    #[test]
    fn non_utf8_content_keeps_raw_bytes() {
        let parcel = Parcel::new(
            vec![0xb8, 0xf7, 0xfe],
            Cow::Borrowed("text/plain;charset=iso-8859-7"),
        );
        assert!(parcel.text().is_err());
        assert_eq!(parcel.as_bytes(), &[0xb8, 0xf7, 0xfe]);
        assert_eq!(parcel.text_lossy(), "\u{FFFD}\u{FFFD}\u{FFFD}");
        assert_eq!(parcel.codepoints().len(), 3);
        assert_eq!(parcel.into_bytes(), vec![0xb8, 0xf7, 0xfe]);
    }

    #[test]
    fn default_media_type_is_not_copied() {
        let parcel = Parcel::new(Vec::new(), Cow::Borrowed("text/plain;charset=US-ASCII"));
        assert!(matches!(parcel.media_type, Cow::Borrowed(_)));
        assert_eq!(parcel, Parcel::empty_default());
    }
}
