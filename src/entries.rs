use crate::error::{GenerateError, Result};
use crate::node::{Content, Node, NodeKind};

/// One mapping field, ready to become one struct field.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub key: &'a str,
    /// Scalar text; empty for structural values.
    pub value: &'a str,
    /// Trimmed trailing comment; empty when there is none.
    pub comment: &'a str,
    pub kind: NodeKind,
    pub node: &'a Node,
}

/// Entries of a mapping node, sorted by key (byte-wise, stable).
///
/// `struct_name` is only used to say which struct we were building when
/// `node` turns out not to be a mapping. Duplicate keys are kept as they are.
pub fn sorted_entries<'a>(node: &'a Node, struct_name: &str) -> Result<Vec<Entry<'a>>> {
    let Content::Mapping(pairs) = &node.content else {
        return Err(GenerateError::expected_mapping(struct_name));
    };

    let mut entries: Vec<Entry<'a>> = pairs
        .iter()
        .map(|(key, value)| Entry {
            key: key.value(),
            value: value.value(),
            comment: value.comment.as_deref().map(str::trim).unwrap_or_default(),
            kind: value.kind(),
            node: value,
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(b.key));
    Ok(entries)
}
