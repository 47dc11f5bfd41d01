use std::borrow::Cow;

use super::error::MediaTypeError;
use super::layout;
use super::parser::parse_media_type;

/// Turns the media type region of a data URI into a fully specified media
/// type that always carries a `charset` parameter.
///
/// Existing parameters keep their order and casing; only a missing
/// type/subtype or a missing charset is supplied. The input is borrowed back
/// unchanged when nothing needs to be supplied.
///
/// # Examples
/// ```
/// use dataurl_core::normalize_media_type;
///
/// assert_eq!(normalize_media_type("").unwrap(), "text/plain;charset=US-ASCII");
/// assert_eq!(normalize_media_type("text/csv").unwrap(), "text/csv;charset=US-ASCII");
/// assert_eq!(normalize_media_type(";charset=utf-8").unwrap(), "text/plain;charset=utf-8");
/// ```
pub fn normalize_media_type(raw: &str) -> Result<Cow<'_, str>, MediaTypeError> {
    if raw.is_empty() {
        return Ok(Cow::Borrowed(layout::DEFAULT_MEDIA_TYPE));
    }

    let media_type: Cow<'_, str> = if raw.starts_with(layout::SEMICOLON) {
        Cow::Owned(format!("{}{raw}", layout::DEFAULT_ESSENCE))
    } else {
        Cow::Borrowed(raw)
    };

    let parsed = parse_media_type(&media_type)?;
    if parsed.declares(layout::CHARSET) {
        return Ok(media_type);
    }

    // Collapse a dangling separator so the result parses again.
    let base = media_type.trim_end_matches(|c: char| c == layout::SEMICOLON || c.is_whitespace());
    Ok(Cow::Owned(format!(
        "{base}{}{}",
        layout::SEMICOLON,
        layout::DEFAULT_CHARSET_PARAM
    )))
}
