// Wed Aug 26 2026 - Alex

pub mod attr;

pub use attr::{AttrScanner, Attribute};

use crate::error::GeneratorError;
use crate::utils::StringUtils;
use std::fmt;

/// One field to verify, possibly under different names on the two sides.
///
/// `host_name` is looked up in the platform's own struct, `generated_name` in
/// the candidate redefinition. They only diverge when the host header exposes
/// a name that cannot be reused in the candidate declaration, such as a field
/// shadowed by a macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    host_name: String,
    generated_name: String,
}

impl FieldEntry {
    pub fn new(host_name: String, generated_name: String) -> Self {
        Self {
            host_name,
            generated_name,
        }
    }

    pub fn same(name: String) -> Self {
        Self {
            host_name: name.clone(),
            generated_name: name,
        }
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn generated_name(&self) -> &str {
        &self.generated_name
    }
}

impl fmt::Display for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host_name == self.generated_name {
            f.write_str(&self.host_name)
        } else {
            write!(f, "{}={}", self.host_name, self.generated_name)
        }
    }
}

/// The three artifacts produced from one struct directive body: the fields to
/// probe, the candidate body compiled into the checker, and the body printed
/// into the generated header. The two bodies are identical unless a line is
/// restricted with `@@check` or `@@emit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedBody {
    pub fields: Vec<FieldEntry>,
    pub check_lines: Vec<String>,
    pub emit_lines: Vec<String>,
}

pub struct BodyResolver;

impl BodyResolver {
    pub fn resolve(body: &[String]) -> Result<ResolvedBody, GeneratorError> {
        let mut resolved = ResolvedBody::default();

        for raw in body {
            let orig = raw.trim();
            let mut scanner = AttrScanner::new(orig);

            let mut auto_name = true;
            let mut check_only = false;
            let mut emit_only = false;

            while let Some(attr) = scanner.next_attr() {
                match attr {
                    Attribute::CheckOnly => check_only = true,
                    Attribute::EmitOnly => emit_only = true,
                    Attribute::Anonymous => auto_name = false,
                    Attribute::Name(name) => {
                        auto_name = false;
                        resolved.fields.push(FieldEntry::same(name));
                    }
                    Attribute::Alias { host, generated } => {
                        auto_name = false;
                        resolved.fields.push(FieldEntry::new(host, generated));
                    }
                }
            }

            if check_only && emit_only {
                return Err(GeneratorError::ConflictingAttributes {
                    line: orig.to_string(),
                });
            }

            let rest = scanner.remaining();

            if auto_name {
                if !rest.ends_with(';') {
                    return Err(GeneratorError::MissingTerminator {
                        line: orig.to_string(),
                    });
                }
                let name = rest
                    .trim_end_matches(';')
                    .split_whitespace()
                    .last()
                    .unwrap_or("");
                if !StringUtils::is_identifier(name) {
                    return Err(GeneratorError::InvalidFieldName {
                        name: name.to_string(),
                        line: orig.to_string(),
                    });
                }
                resolved.fields.push(FieldEntry::same(name.to_string()));
            }

            // A line reduced to nothing by its attributes records a field
            // name without contributing any struct body text.
            if !rest.is_empty() {
                if !emit_only {
                    resolved.check_lines.push(rest.to_string());
                }
                if !check_only {
                    resolved.emit_lines.push(rest.to_string());
                }
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(body: &[&str]) -> Vec<String> {
        body.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_trivial_fields() {
        let body = lines(&["    uint8_t x;", "    uint32_t y;", "    long z;"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert_eq!(resolved.fields.len(), 3);
        for (entry, name) in resolved.fields.iter().zip(["x", "y", "z"]) {
            assert_eq!(entry.host_name(), name);
            assert_eq!(entry.generated_name(), name);
        }
        assert_eq!(resolved.check_lines, resolved.emit_lines);
        assert_eq!(resolved.check_lines.len(), 3);
    }

    #[test]
    fn test_resolve_explicit_name() {
        let body = lines(&["    @a int a[10];"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert_eq!(resolved.fields, vec![FieldEntry::same("a".to_string())]);
        assert_eq!(resolved.check_lines, vec!["int a[10];".to_string()]);
    }

    #[test]
    fn test_resolve_alias() {
        let body = lines(&["    @st_atime=st_atim struct timespec st_atim;"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert_eq!(
            resolved.fields,
            vec![FieldEntry::new(
                "st_atime".to_string(),
                "st_atim".to_string()
            )]
        );
        assert_eq!(resolved.fields.len(), 1);
    }

    #[test]
    fn test_resolve_anonymous_padding() {
        let body = lines(&["    @ uint16_t _pad0;"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert!(resolved.fields.is_empty());
        assert_eq!(resolved.check_lines, vec!["uint16_t _pad0;".to_string()]);
        assert_eq!(resolved.emit_lines, vec!["uint16_t _pad0;".to_string()]);
    }

    #[test]
    fn test_resolve_name_only_line() {
        let body = lines(&["    @inner"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert_eq!(resolved.fields, vec![FieldEntry::same("inner".to_string())]);
        assert!(resolved.check_lines.is_empty());
        assert!(resolved.emit_lines.is_empty());
    }

    #[test]
    fn test_resolve_check_only_line() {
        let body = lines(&["    @@check @ char _reserved[8];", "    int x;"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert_eq!(
            resolved.check_lines,
            vec!["char _reserved[8];".to_string(), "int x;".to_string()]
        );
        assert_eq!(resolved.emit_lines, vec!["int x;".to_string()]);
    }

    #[test]
    fn test_resolve_emit_only_line() {
        let body = lines(&["    @@emit @ char _spare[4];"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert!(resolved.check_lines.is_empty());
        assert_eq!(resolved.emit_lines, vec!["char _spare[4];".to_string()]);
    }

    #[test]
    fn test_resolve_check_emit_conflict() {
        let body = lines(&["    @@check @@emit int x;"]);
        let result = BodyResolver::resolve(&body);
        assert!(matches!(
            result,
            Err(GeneratorError::ConflictingAttributes { .. })
        ));
    }

    #[test]
    fn test_resolve_check_line_still_autodetects() {
        let body = lines(&["    @@check int hidden;"]);
        let resolved = BodyResolver::resolve(&body).unwrap();

        assert_eq!(resolved.fields, vec![FieldEntry::same("hidden".to_string())]);
        assert_eq!(resolved.check_lines, vec!["int hidden;".to_string()]);
        assert!(resolved.emit_lines.is_empty());
    }

    #[test]
    fn test_resolve_missing_terminator() {
        let body = lines(&["    int x"]);
        let result = BodyResolver::resolve(&body);
        assert!(matches!(
            result,
            Err(GeneratorError::MissingTerminator { .. })
        ));
    }

    #[test]
    fn test_resolve_bad_autodetected_name() {
        let body = lines(&["    int a[10];"]);
        let result = BodyResolver::resolve(&body);
        match result {
            Err(GeneratorError::InvalidFieldName { name, .. }) => {
                assert_eq!(name, "a[10]");
            }
            other => panic!("expected InvalidFieldName, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_function_pointer_needs_attribute() {
        let body = lines(&["    void (*handler)(int);"]);
        assert!(BodyResolver::resolve(&body).is_err());

        let body = lines(&["    @handler void (*handler)(int);"]);
        let resolved = BodyResolver::resolve(&body).unwrap();
        assert_eq!(
            resolved.fields,
            vec![FieldEntry::same("handler".to_string())]
        );
    }
}
