//! Data URI decoding.
//!
//! `reader` splits the URI into its media type and payload regions,
//! `payload` decodes the payload per its encoding, and `parser` ties both to
//! media type normalization. Literal markers live in `layout`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod payload;
pub mod reader;

pub use error::PayloadError;
pub use parser::{parse, parse_or_panic};
