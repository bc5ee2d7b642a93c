// Wed Aug 26 2026 - Alex

/// One leading `@` token consumed from a field line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `@@check`: the line only participates in the layout probe.
    CheckOnly,
    /// `@@emit`: the line only appears in the generated header text.
    EmitOnly,
    /// `@` with no name: suppress field-name detection entirely.
    Anonymous,
    /// `@name`: the field is called `name` on both sides.
    Name(String),
    /// `@host=generated`: the host struct and the candidate struct use
    /// different identifiers for the same field.
    Alias { host: String, generated: String },
}

/// Cursor over the leading attribute tokens of a field line. An attribute
/// token runs from `@` to the next space or the end of the line; everything
/// after the last attribute is the field declaration proper.
pub struct AttrScanner<'a> {
    rest: &'a str,
}

impl<'a> AttrScanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line.trim() }
    }

    pub fn next_attr(&mut self) -> Option<Attribute> {
        if !self.rest.starts_with('@') {
            return None;
        }

        let (token, rest) = match self.rest.find(' ') {
            Some(i) => (&self.rest[..i], self.rest[i..].trim_start()),
            None => (self.rest, ""),
        };
        self.rest = rest;

        Some(match token {
            "@@check" => Attribute::CheckOnly,
            "@@emit" => Attribute::EmitOnly,
            "@" => Attribute::Anonymous,
            _ => {
                let name = &token[1..];
                match name.split_once('=') {
                    Some((host, generated)) => Attribute::Alias {
                        host: host.to_string(),
                        generated: generated.to_string(),
                    },
                    None => Attribute::Name(name.to_string()),
                }
            }
        })
    }

    /// The unconsumed tail of the line.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_no_attributes() {
        let mut scanner = AttrScanner::new("int x;");
        assert_eq!(scanner.next_attr(), None);
        assert_eq!(scanner.remaining(), "int x;");
    }

    #[test]
    fn test_scan_name_attribute() {
        let mut scanner = AttrScanner::new("@a int a[10];");
        assert_eq!(scanner.next_attr(), Some(Attribute::Name("a".to_string())));
        assert_eq!(scanner.next_attr(), None);
        assert_eq!(scanner.remaining(), "int a[10];");
    }

    #[test]
    fn test_scan_bare_at() {
        let mut scanner = AttrScanner::new("@ uint16_t _pad0;");
        assert_eq!(scanner.next_attr(), Some(Attribute::Anonymous));
        assert_eq!(scanner.remaining(), "uint16_t _pad0;");
    }

    #[test]
    fn test_scan_alias() {
        let mut scanner = AttrScanner::new("@st_atime=st_atim int st_atim;");
        assert_eq!(
            scanner.next_attr(),
            Some(Attribute::Alias {
                host: "st_atime".to_string(),
                generated: "st_atim".to_string(),
            })
        );
        assert_eq!(scanner.remaining(), "int st_atim;");
    }

    #[test]
    fn test_scan_check_emit_tokens() {
        let mut scanner = AttrScanner::new("@@check int x;");
        assert_eq!(scanner.next_attr(), Some(Attribute::CheckOnly));

        let mut scanner = AttrScanner::new("@@emit int x;");
        assert_eq!(scanner.next_attr(), Some(Attribute::EmitOnly));
    }

    #[test]
    fn test_scan_multiple_attributes() {
        let mut scanner = AttrScanner::new("@@check @x int x;");
        assert_eq!(scanner.next_attr(), Some(Attribute::CheckOnly));
        assert_eq!(scanner.next_attr(), Some(Attribute::Name("x".to_string())));
        assert_eq!(scanner.next_attr(), None);
        assert_eq!(scanner.remaining(), "int x;");
    }

    #[test]
    fn test_scan_attribute_only_line() {
        let mut scanner = AttrScanner::new("@inner");
        assert_eq!(
            scanner.next_attr(),
            Some(Attribute::Name("inner".to_string()))
        );
        assert_eq!(scanner.remaining(), "");
    }
}
