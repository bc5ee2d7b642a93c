// Tue Aug 25 2026 - Alex

use crate::directive::{Directive, DirectiveKind};
use crate::error::GeneratorError;

/// Line-oriented parser for the directive DSL.
///
/// A non-indented line opens a new directive; indented lines belong to the
/// most recently opened one. Blank lines and `#` comments are dropped
/// everywhere, including inside bodies.
pub struct DirectiveParser;

impl DirectiveParser {
    pub fn parse(text: &str) -> Result<Vec<Directive>, GeneratorError> {
        let mut directives: Vec<Directive> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let stripped = line.trim();
            if stripped.is_empty() || stripped.starts_with('#') {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                match directives.last_mut() {
                    Some(open) => open.body.push(line.to_string()),
                    None => return Err(GeneratorError::OrphanBodyLine { line: idx + 1 }),
                }
            } else {
                let (kind, rest) = Self::next_word(line);
                let (name, args) = Self::next_word(rest);
                directives.push(Directive::new(
                    DirectiveKind::from_word(kind),
                    name.to_string(),
                    args.trim_end().to_string(),
                ));
            }
        }

        Ok(directives)
    }

    /// Splits off the first whitespace-delimited word, returning it along
    /// with the remainder (leading whitespace stripped).
    fn next_word(text: &str) -> (&str, &str) {
        let text = text.trim_start();
        match text.find(char::is_whitespace) {
            Some(i) => (&text[..i], text[i..].trim_start()),
            None => (text, ""),
        }
    }
}
