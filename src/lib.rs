//! YAML → Go struct generator.
//!
//! ```text
//! text ─> node::parse_document ─> lower::lower_mapping ─> codegen::Codegen ─> Go source
//!           (saphyr events)        (entries + inference    (type X struct {...})
//!                                   + naming, recursive)
//! ```
//!
//! Fields are sorted by key, nested mappings (and lists whose first element is
//! a mapping) become their own declarations named `<Parent><Field>`, emitted
//! depth-first after their parent.
pub mod codegen;
pub mod entries;
pub mod error;
pub mod inference;
pub mod ir;
pub mod lower;
pub mod naming;
pub mod node;

use std::collections::HashSet;

use tracing::{debug, warn};

pub use error::{GenerateError, Result};
pub use lower::GenerateOptions;

/// Default root struct name of the command-line tool.
pub const DEFAULT_STRUCT_NAME: &str = "YAMLToGoStruct";

/// Parse `source` and lower its root mapping into declarations, root first.
pub fn generate_declarations(
    source: &str,
    struct_name: &str,
    options: &GenerateOptions,
) -> Result<Vec<ir::Declaration>> {
    let root = match node::parse_document(source)? {
        Some(root) if root.is_mapping() => root,
        _ => return Err(GenerateError::expected_root_mapping()),
    };
    let decls = lower::lower_mapping(&root, struct_name, options)?.into_declarations();
    report_collisions(&decls);
    debug!(struct_name, declarations = decls.len(), "generated");
    Ok(decls)
}

/// Generate Go struct declarations for the YAML document in `source`.
pub fn generate_go_struct(source: &str, struct_name: &str, options: &GenerateOptions) -> Result<String> {
    let decls = generate_declarations(source, struct_name, options)?;
    let mut cg = codegen::Codegen::with_indent(options.indent.clone());
    cg.emit_all(&decls);
    Ok(cg.into_string())
}

/// Name clashes are not errors; the output keeps every declaration as-is.
fn report_collisions(decls: &[ir::Declaration]) {
    let mut seen = HashSet::new();
    for decl in decls {
        if !seen.insert(decl.name.as_str()) {
            warn!(name = %decl.name, "duplicate struct name in generated output");
        }
        let mut fields = HashSet::new();
        for field in &decl.fields {
            if !fields.insert(field.name.as_str()) {
                warn!(struct_name = %decl.name, field = %field.name, "duplicate field name in struct");
            }
        }
    }
}
