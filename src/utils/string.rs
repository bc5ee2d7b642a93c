// Wed Aug 26 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

pub struct StringUtils;

impl StringUtils {
    /// True if `s` is a valid C identifier.
    pub fn is_identifier(s: &str) -> bool {
        IDENTIFIER_RE.is_match(s)
    }

    /// Escapes a line for embedding inside a double-quoted C string literal.
    pub fn escape_c_literal(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('\n', "\\n")
            .replace('"', "\\\"")
    }
}
