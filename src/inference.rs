//! Node → Go type.
//!
//! One node in, one type out; no naming context. Mappings come back as the
//! [`GoType::Struct`] placeholder and the emitter substitutes the generated
//! declaration name. Sequences are typed by their first element only.
use crate::ir::GoType;
use crate::node::{Content, Node, ScalarTag};

pub fn go_type_of(node: &Node) -> GoType {
    match &node.content {
        Content::Scalar { tag, .. } => scalar_type(tag),
        Content::Sequence(items) => match items.first() {
            Some(first) => GoType::slice_of(go_type_of(first)),
            None => GoType::slice_of(GoType::Interface),
        },
        Content::Mapping(_) => GoType::Struct,
        Content::Other => GoType::Interface,
    }
}

fn scalar_type(tag: &ScalarTag) -> GoType {
    match tag {
        ScalarTag::Int => GoType::Int,
        ScalarTag::Float => GoType::Float64,
        ScalarTag::Bool => GoType::Bool,
        ScalarTag::Str | ScalarTag::Null | ScalarTag::Custom(_) => GoType::String,
    }
}
