// Tue Aug 25 2026 - Alex

pub mod parser;

pub use parser::DirectiveParser;

use std::fmt;

/// The fixed set of directive kinds understood by the emitter. Anything else
/// is carried through the parser untouched and simply never acted on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Include,
    Define,
    Struct,
    OutputInclude,
    OutputGuard,
    Unknown(String),
}

impl DirectiveKind {
    pub fn from_word(word: &str) -> Self {
        match word {
            "include" => DirectiveKind::Include,
            "define" => DirectiveKind::Define,
            "struct" => DirectiveKind::Struct,
            "output_include" => DirectiveKind::OutputInclude,
            "output_guard" => DirectiveKind::OutputGuard,
            other => DirectiveKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DirectiveKind::Include => "include",
            DirectiveKind::Define => "define",
            DirectiveKind::Struct => "struct",
            DirectiveKind::OutputInclude => "output_include",
            DirectiveKind::OutputGuard => "output_guard",
            DirectiveKind::Unknown(word) => word,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed top-level entry of the input file.
///
/// `body` holds the indented continuation lines verbatim, leading whitespace
/// included; the resolver strips it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub name: String,
    pub args: String,
    pub body: Vec<String>,
}

impl Directive {
    pub fn new(kind: DirectiveKind, name: String, args: String) -> Self {
        Self {
            kind,
            name,
            args,
            body: Vec::new(),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
