use super::layout;

/// Cursor over a media type string.
///
/// Positions only ever advance over whole characters, so `rest` is always
/// sliced on a char boundary.
pub struct MediaTypeReader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> MediaTypeReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Reads a (possibly empty) RFC 2045 token.
    pub fn read_token(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.bytes().take_while(|&b| is_token_byte(b)).count();
        self.pos += len;
        &rest[..len]
    }

    /// Reads a parameter value: a non-empty token or a quoted string.
    pub fn read_value(&mut self) -> Option<String> {
        if self.rest().starts_with(layout::QUOTE) {
            return self.read_quoted();
        }
        let token = self.read_token();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Reads a quoted string, unescaping `\` before tspecials.
    ///
    /// The cursor does not move when the string is unterminated or spans a
    /// line break.
    fn read_quoted(&mut self) -> Option<String> {
        let rest = self.rest();
        let mut chars = rest.char_indices().skip(1).peekable();
        let mut value = String::new();
        while let Some((idx, c)) = chars.next() {
            match c {
                layout::QUOTE => {
                    self.pos += idx + c.len_utf8();
                    return Some(value);
                }
                layout::BACKSLASH => match chars.peek() {
                    Some(&(_, next)) if next.is_ascii() && is_tspecial(next as u8) => {
                        value.push(next);
                        chars.next();
                    }
                    _ => value.push(c),
                },
                '\r' | '\n' => return None,
                _ => value.push(c),
            }
        }
        None
    }
}

fn is_tspecial(b: u8) -> bool {
    layout::TSPECIALS.contains(&b)
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii() && !b.is_ascii_control() && b != b' ' && !is_tspecial(b)
}
