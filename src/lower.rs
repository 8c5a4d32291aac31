use tracing::{debug, trace};

use crate::entries::sorted_entries;
use crate::error::Result;
use crate::inference::go_type_of;
use crate::ir::{Declaration, Field, GoType};
use crate::naming::to_camel;
use crate::node::{Node, NodeKind};

/// Knobs shared by every level of the recursion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Add `json:"<key>"` next to the `yaml:"<key>"` tag.
    pub json_tag: bool,
    /// Prefix for every emitted line.
    pub indent: String,
}

/// One mapping lowered: its own declaration plus everything nested below it,
/// depth-first in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lowered {
    pub declaration: Declaration,
    pub nested: Vec<Declaration>,
}

impl Lowered {
    pub fn into_declarations(self) -> Vec<Declaration> {
        let mut out = Vec::with_capacity(1 + self.nested.len());
        out.push(self.declaration);
        out.extend(self.nested);
        out
    }
}

pub fn lower_mapping(node: &Node, struct_name: &str, options: &GenerateOptions) -> Result<Lowered> {
    let entries = sorted_entries(node, struct_name)?;

    let mut fields = Vec::with_capacity(entries.len());
    let mut nested = Vec::new();

    for entry in entries {
        let field_name = to_camel(entry.key);
        let mut ty = go_type_of(entry.node);

        if entry.kind == NodeKind::Mapping {
            let sub_name = format!("{struct_name}{field_name}");
            nested.extend(lower_mapping(entry.node, &sub_name, options)?.into_declarations());
            ty = GoType::Named(sub_name);
        } else if let Some(first) = entry.node.first_item().filter(|n| n.is_mapping()) {
            // list of objects: the first element stands for all of them
            let sub_name = format!("{struct_name}{field_name}");
            nested.extend(lower_mapping(first, &sub_name, options)?.into_declarations());
            ty = GoType::slice_of(GoType::Named(sub_name));
        }

        trace!(struct_name, key = entry.key, %ty, "field");
        fields.push(Field {
            name: field_name,
            ty,
            key: entry.key.to_string(),
            json_key: options.json_tag.then(|| entry.key.to_string()),
            comment: (!entry.comment.is_empty()).then(|| entry.comment.to_string()),
        });
    }

    debug!(struct_name, fields = fields.len(), nested = nested.len(), "lowered mapping");
    Ok(Lowered {
        declaration: Declaration { name: struct_name.to_string(), fields },
        nested,
    })
}
