//! Declarations → Go source text.
//!
//! Each declaration renders as
//!
//! ```text
//! type Name struct {
//! 	Field Type `yaml:"key" json:"key"` // comment
//! }
//!
//! ```
//!
//! i.e. always followed by one blank line, with every line prefixed by the
//! configured indent.
use crate::ir::{Declaration, Field};

pub struct Codegen {
    out: String,
    indent: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self::with_indent("")
    }

    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self { out: String::new(), indent: indent.into() }
    }

    pub fn emit(&mut self, decl: &Declaration) {
        let indent = self.indent.as_str();
        self.out.push_str(&format!("{indent}type {} struct {{\n", decl.name));
        for field in &decl.fields {
            self.out.push_str(&format!("{indent}\t{}\n", render_field(field)));
        }
        self.out.push_str(&format!("{indent}}}\n\n"));
    }

    pub fn emit_all<'a>(&mut self, decls: impl IntoIterator<Item = &'a Declaration>) {
        for decl in decls {
            self.emit(decl);
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

fn render_field(field: &Field) -> String {
    let mut line = format!("{} {} `yaml:\"{}\"", field.name, field.ty, field.key);
    if let Some(json_key) = &field.json_key {
        line.push_str(&format!(" json:\"{json_key}\""));
    }
    line.push('`');
    if let Some(comment) = &field.comment {
        line.push_str(&format!(" // {comment}"));
    }
    line
}
