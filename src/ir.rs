// Go-side IR for codegen. No YAML nodes here.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum GoType {
    Int,
    Float64,
    Bool,
    String,
    Interface,               // interface{}
    Slice(Box<GoType>),
    Struct,                  // placeholder until the emitter names it
    Named(String),           // a generated declaration
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: GoType,
    pub key: String,              // `yaml:"..."`
    pub json_key: Option<String>, // `json:"..."`, only when requested
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub fields: Vec<Field>,  // sorted by key
}

impl GoType {
    pub fn slice_of(item: GoType) -> Self {
        GoType::Slice(Box::new(item))
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoType::Int => f.write_str("int"),
            GoType::Float64 => f.write_str("float64"),
            GoType::Bool => f.write_str("bool"),
            GoType::String => f.write_str("string"),
            GoType::Interface => f.write_str("interface{}"),
            GoType::Slice(item) => write!(f, "[]{item}"),
            GoType::Struct => f.write_str("struct"),
            GoType::Named(name) => f.write_str(name),
        }
    }
}
