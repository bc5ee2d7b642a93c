// Thu Aug 27 2026 - Alex

pub mod structs;

pub use structs::StructGroup;

use crate::directive::{Directive, DirectiveKind};
use crate::error::GeneratorError;
use crate::resolver::BodyResolver;
use indexmap::IndexMap;

/// Emits the complete C source of the checker/generator program.
///
/// The emitted program, compiled against the target platform's headers and
/// run there, probes every candidate struct layout with sizeof/offsetof and
/// prints the final header to its stdout. This emitter never produces the
/// header itself.
pub struct MetaProgramEmitter;

impl MetaProgramEmitter {
    pub fn emit(directives: &[Directive]) -> Result<String, GeneratorError> {
        // All validation happens before a single line is produced; the tool
        // emits a complete program or nothing.
        let guard = directives
            .iter()
            .filter(|d| d.kind == DirectiveKind::OutputGuard)
            .last()
            .map(|d| d.name.as_str())
            .filter(|name| !name.is_empty())
            .ok_or(GeneratorError::MissingOutputGuard)?;

        let mut groups: IndexMap<&str, StructGroup> = IndexMap::new();
        for d in directives {
            if d.kind == DirectiveKind::Struct {
                groups
                    .entry(d.name.as_str())
                    .or_insert_with(|| StructGroup::new(d.name.clone()))
                    .push(BodyResolver::resolve(&d.body)?);
            }
        }

        let mut out = String::new();
        Self::emit_includes(directives, &mut out);
        Self::emit_compare_macro(&mut out);
        for group in groups.values() {
            group.emit_candidates(&mut out);
            group.emit_dispatcher(&mut out);
        }
        Self::emit_literal_suffix_macro(&mut out);
        Self::emit_main(directives, guard, &groups, &mut out);

        Ok(out)
    }

    fn emit_includes(directives: &[Directive], out: &mut String) {
        out.push_str("#include <stdlib.h>\n");
        out.push_str("#include <stdio.h>\n");
        out.push_str("#include <stddef.h>\n");
        for d in Self::of_kind(directives, &DirectiveKind::Include) {
            out.push_str(&format!("#include <{}>\n", d.name));
        }
        // output_include headers are needed twice: here, because the
        // candidate redefinitions reference their types, and again as text
        // in the generated header.
        for d in Self::of_kind(directives, &DirectiveKind::OutputInclude) {
            out.push_str(&format!("#include <{}>\n", d.name));
        }
    }

    /// Rebuilding with -DVERBOSE shows every operand of every comparison,
    /// which is how a layout mismatch on a new platform gets debugged.
    fn emit_compare_macro(out: &mut String) {
        out.push_str("#ifdef VERBOSE\n");
        out.push_str("#  define COMPARE(a, b) \\\n");
        out.push_str(
            "    (printf(\"%s = %u, %s = %d, equal? %d\\n\", #a, (int)(a), #b, (int)(b), (a) == (b)), \\\n",
        );
        out.push_str("      (a) == (b))\n");
        out.push_str("#else\n");
        out.push_str("#  define COMPARE(a, b) ((a) == (b))\n");
        out.push_str("#endif\n");
    }

    /// Without the right suffix a large constant would be truncated when the
    /// generated header is later compiled.
    fn emit_literal_suffix_macro(out: &mut String) {
        out.push_str("#define LITERAL_SUFFIX(x) \\\n");
        out.push_str("  (sizeof((x)) == sizeof(long long) ? \"ll\" : \\\n");
        out.push_str("  sizeof((x)) == sizeof(long) ? \"l\" : \\\n");
        out.push_str("  \"\")\n");
    }

    fn emit_main(
        directives: &[Directive],
        guard: &str,
        groups: &IndexMap<&str, StructGroup>,
        out: &mut String,
    ) {
        out.push_str("int main() {\n");
        out.push_str(&format!("  puts(\"#ifndef {}\");\n", guard));
        out.push_str(&format!("  puts(\"#define {}\");\n", guard));

        for d in Self::of_kind(directives, &DirectiveKind::OutputInclude) {
            out.push_str(&format!("  puts(\"#include <{}>\");\n", d.name));
        }

        for d in Self::of_kind(directives, &DirectiveKind::Define) {
            out.push_str(&format!(
                "  printf(\"#define {name} %lld%s\\n\", (long long){name}, LITERAL_SUFFIX({name}));\n",
                name = d.name
            ));
        }

        for group in groups.values() {
            out.push_str(&format!("  struct_{}();\n", group.name()));
        }

        out.push_str("  puts(\"#endif\");\n");
        out.push_str("  return 0;\n");
        out.push_str("}\n");
    }

    fn of_kind<'a>(
        directives: &'a [Directive],
        kind: &'a DirectiveKind,
    ) -> impl Iterator<Item = &'a Directive> {
        directives.iter().filter(move |d| d.kind == *kind)
    }
}
