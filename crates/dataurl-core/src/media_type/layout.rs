/// Media type assumed when a data URI declares none.
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain;charset=US-ASCII";
/// Type/subtype supplied when only parameters are given.
pub const DEFAULT_ESSENCE: &str = "text/plain";
/// Parameter appended when no charset is declared.
pub const DEFAULT_CHARSET_PARAM: &str = "charset=US-ASCII";

pub const CHARSET: &str = "charset";

pub const SLASH: char = '/';
pub const SEMICOLON: char = ';';
pub const EQUALS: char = '=';
pub const QUOTE: char = '"';
pub const BACKSLASH: char = '\\';

/// RFC 2045 `tspecials`; never part of a token.
pub const TSPECIALS: &[u8] = b"()<>@,;:\\\"/[]?=";
