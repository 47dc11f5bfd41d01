//! Decoder for `data:` URIs (RFC 2397).
//!
//! A data URI is split into a media type region and a payload region. The
//! media type is normalized (defaulting to `text/plain`, with a `charset`
//! parameter always present) and the payload is decoded as base64 or as
//! percent-escaped text. The result is a [`Parcel`] exposing the decoded
//! bytes through several equivalent views.
//!
//! Decoding is pure: no I/O, no shared mutable state. Each concern follows a
//! layout/reader/parser/error split, so literal markers, safe text access
//! and domain decoding stay separate.
//!
//! Invariants:
//! - The media type of a successful parse always carries a `charset`.
//! - Normalizing an already normalized media type returns it unchanged.
//! - Failures fall in exactly one [`ErrorKind`].
//!
//! # Examples
//! ```
//! use dataurl_core::parse;
//!
//! let parcel = parse("data:;charset=utf-8,This%20is%20a%20test%21")?;
//! assert_eq!(parcel.media_type(), "text/plain;charset=utf-8");
//! assert_eq!(parcel.text()?, "This is a test!");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod media_type;
mod parcel;
mod uri;

pub use error::{ErrorKind, ParseError};
pub use media_type::{MediaTypeError, normalize_media_type};
pub use parcel::Parcel;
pub use uri::{PayloadError, parse, parse_or_panic};

/// Media type of a data URI that declares none.
pub const DEFAULT_MEDIA_TYPE: &str = media_type::layout::DEFAULT_MEDIA_TYPE;
