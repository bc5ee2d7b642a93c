// Thu Aug 27 2026 - Alex

use crate::resolver::ResolvedBody;
use crate::utils::StringUtils;
use itertools::Itertools;

/// All candidate definitions sharing one struct name, in file order. The
/// dispatcher tries them in this order and the first structural match wins;
/// later candidates are never considered once one matches.
pub struct StructGroup {
    name: String,
    candidates: Vec<ResolvedBody>,
}

impl StructGroup {
    pub fn new(name: String) -> Self {
        Self {
            name,
            candidates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, body: ResolvedBody) {
        self.candidates.push(body);
    }

    /// Emits, for every candidate: the private redefinition probed with
    /// sizeof/offsetof, its stringified form destined for the generated
    /// header, and the probe function comparing it against the host struct.
    pub fn emit_candidates(&self, out: &mut String) {
        for (i, body) in self.candidates.iter().enumerate() {
            self.emit_redefinition(out, i, body);
            self.emit_stringified(out, i, body);
            self.emit_probe(out, i, body);
        }
    }

    fn emit_redefinition(&self, out: &mut String, i: usize, body: &ResolvedBody) {
        out.push_str(&format!("struct my_{}_{} {{\n", self.name, i));
        for line in &body.check_lines {
            out.push_str(&format!("  {}\n", line));
        }
        out.push_str("};\n");
    }

    fn emit_stringified(&self, out: &mut String, i: usize, body: &ResolvedBody) {
        out.push_str(&format!("const char* my_{}_{}_def =\n", self.name, i));

        let opener = format!("struct {} {{", self.name);
        let text_lines = std::iter::once(opener.as_str())
            .chain(body.emit_lines.iter().map(String::as_str))
            .chain(std::iter::once("};"));
        for line in text_lines {
            out.push_str(&format!(
                "  \"{}\\n\"\n",
                StringUtils::escape_c_literal(line)
            ));
        }
        out.push_str("  ;\n");
    }

    fn emit_probe(&self, out: &mut String, i: usize, body: &ResolvedBody) {
        out.push_str(&format!("int struct_try_{}_{}() {{\n", self.name, i));
        out.push_str(&format!("  struct {} host;\n", self.name));
        out.push_str(&format!("  struct my_{}_{} my;\n", self.name, i));

        let mut terms = vec!["COMPARE(sizeof(host), sizeof(my))".to_string()];
        for field in &body.fields {
            terms.push(format!(
                "COMPARE(sizeof(host.{}), sizeof(my.{}))",
                field.host_name(),
                field.generated_name()
            ));
            terms.push(format!(
                "COMPARE(offsetof(struct {}, {}), offsetof(struct my_{}_{}, {}))",
                self.name,
                field.host_name(),
                self.name,
                i,
                field.generated_name()
            ));
        }

        out.push_str(&format!(
            "  return {}\n    ;\n",
            terms.iter().join("\n    && ")
        ));
        out.push_str("}\n");
    }

    /// Emits the dispatcher: first matching candidate is printed and wins;
    /// no match is fatal to the whole generation run.
    pub fn emit_dispatcher(&self, out: &mut String) {
        out.push_str(&format!("void struct_{}() {{\n", self.name));
        for i in 0..self.candidates.len() {
            out.push_str(&format!("  if (struct_try_{}_{}()) {{\n", self.name, i));
            out.push_str(&format!("    puts(my_{}_{}_def);\n", self.name, i));
            out.push_str("    return;\n");
            out.push_str("  }\n");
        }
        out.push_str(&format!(
            "  fputs(\"error: found no matching definition for {}\\n\", stderr);\n",
            self.name
        ));
        out.push_str("  exit(1);\n");
        out.push_str("}\n");
    }
}
