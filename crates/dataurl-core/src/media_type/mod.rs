//! Media type parsing and normalization.
//!
//! - `layout`: literal defaults and grammar characters
//! - `reader`: token and quoted-string cursor
//! - `parser`: RFC 2045 type/subtype plus parameters
//! - `normalize`: defaulting and charset injection for data URIs
//! - `error`: grammar violations

pub mod error;
pub mod layout;
pub mod normalize;
pub mod parser;
pub mod reader;

pub use error::MediaTypeError;
pub use normalize::normalize_media_type;
pub use parser::{MediaType, parse_media_type};
