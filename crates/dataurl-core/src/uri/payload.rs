use std::borrow::Cow;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::{DecodePaddingMode, Engine};
use percent_encoding::percent_decode_str;

use super::error::PayloadError;
use super::reader::Encoding;

/// Standard alphabet with required padding. Non-zero trailing bits in the
/// last symbol are accepted.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

pub fn decode_payload(payload: &str, encoding: Encoding) -> Result<Vec<u8>, PayloadError> {
    match encoding {
        Encoding::Base64 => decode_base64(payload),
        Encoding::PercentEscaped => decode_percent_escaped(payload),
    }
}

/// Line breaks inside the payload are skipped.
fn decode_base64(payload: &str) -> Result<Vec<u8>, PayloadError> {
    let payload: Cow<'_, str> = if payload.contains(['\r', '\n']) {
        Cow::Owned(payload.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(payload)
    };
    Ok(BASE64.decode(payload.as_bytes())?)
}

/// Strict `%XX` decoding. `+` is payload content, not a space.
fn decode_percent_escaped(payload: &str) -> Result<Vec<u8>, PayloadError> {
    let bytes = payload.as_bytes();
    for (offset, _) in payload.match_indices('%') {
        let escape = bytes.get(offset + 1..offset + 3);
        let valid = escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (offset + 3).min(bytes.len());
            return Err(PayloadError::InvalidPercentEscape {
                offset,
                escape: String::from_utf8_lossy(&bytes[offset..end]).into_owned(),
            });
        }
    }
    Ok(percent_decode_str(payload).collect())
}
