use std::fmt::{self, Write};

/// Format a string as a double-quoted GraphQL string literal.
///
/// Strings without quotes, backslashes or control characters are written
/// unchanged between the quotes.
#[derive(Debug)]
pub(crate) struct StringLiteral<'a>(pub(crate) &'a str);

impl fmt::Display for StringLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\u{0008}' => f.write_str("\\b")?,
                '\u{000c}' => f.write_str("\\f")?,
                c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}
