pub const DATA_SCHEME: &str = "data:";
pub const BASE64_MARKER: &str = ";base64,";
pub const COMMA: &str = ",";

/// URIs that always decode to empty content with the default media type.
pub const EMPTY_DEFAULT_URIS: [&str; 8] = [
    "data:,",
    "data:text/plain,",
    "data:text/plain;charset=US-ASCII,",
    "data:;charset=US-ASCII,",
    "data:;base64,",
    "data:text/plain;base64,",
    "data:text/plain;charset=US-ASCII;base64,",
    "data:;charset=US-ASCII;base64,",
];
