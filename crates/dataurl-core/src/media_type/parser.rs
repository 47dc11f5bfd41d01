use super::error::MediaTypeError;
use super::layout;
use super::reader::MediaTypeReader;

/// A parsed media type. Type, subtype and parameter names are lowercased;
/// parameter values keep their original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    pub type_: String,
    pub subtype: String,
    /// `(name, value)` pairs in declaration order.
    pub parameters: Vec<(String, String)>,
}

impl MediaType {
    /// Looks up a parameter by (case-insensitive) name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter is declared, either plainly or in RFC 2231
    /// extended form (`name*`, `name*0`, `name*0*`).
    pub fn declares(&self, name: &str) -> bool {
        self.parameters
            .iter()
            .any(|(n, _)| extended_base_name(n).eq_ignore_ascii_case(name))
    }
}

/// Strips an RFC 2231 charset marker and continuation index from a name.
fn extended_base_name(name: &str) -> &str {
    let name = name.strip_suffix('*').unwrap_or(name);
    match name.rsplit_once('*') {
        Some((base, index)) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => name,
    }
}

pub fn parse_media_type(input: &str) -> Result<MediaType, MediaTypeError> {
    let split = input.find(layout::SEMICOLON).unwrap_or(input.len());
    let (type_, subtype) = parse_essence(input[..split].trim())?;

    let mut reader = MediaTypeReader::new(&input[split..]);
    let mut parameters: Vec<(String, String)> = Vec::new();
    loop {
        reader.skip_whitespace();
        if reader.is_at_end() {
            break;
        }
        let start = split + reader.offset();
        let invalid = MediaTypeError::InvalidParameter { offset: start };
        if !reader.eat(layout::SEMICOLON) {
            return Err(invalid);
        }
        reader.skip_whitespace();
        if reader.is_at_end() {
            // A single trailing semicolon is tolerated.
            break;
        }
        let name = reader.read_token();
        if name.is_empty() {
            return Err(invalid);
        }
        reader.skip_whitespace();
        if !reader.eat(layout::EQUALS) {
            return Err(invalid);
        }
        reader.skip_whitespace();
        let value = match reader.read_value() {
            Some(value) => value,
            None if reader.rest().starts_with(layout::QUOTE) => {
                return Err(MediaTypeError::UnterminatedQuote {
                    offset: split + reader.offset(),
                });
            }
            None => return Err(invalid),
        };

        let name = name.to_ascii_lowercase();
        if parameters.iter().any(|(n, _)| *n == name) {
            return Err(MediaTypeError::DuplicateParameter { name });
        }
        parameters.push((name, value));
    }

    Ok(MediaType {
        type_,
        subtype,
        parameters,
    })
}

fn parse_essence(essence: &str) -> Result<(String, String), MediaTypeError> {
    let mut reader = MediaTypeReader::new(essence);
    let type_ = reader.read_token();
    if type_.is_empty() {
        return Err(MediaTypeError::NoMediaType);
    }
    if !reader.eat(layout::SLASH) {
        return Err(MediaTypeError::MissingSlash);
    }
    let subtype = reader.read_token();
    if subtype.is_empty() {
        return Err(MediaTypeError::MissingSubtype);
    }
    if !reader.is_at_end() {
        return Err(MediaTypeError::TrailingContent {
            rest: reader.rest().to_string(),
        });
    }
    Ok((type_.to_ascii_lowercase(), subtype.to_ascii_lowercase()))
}
