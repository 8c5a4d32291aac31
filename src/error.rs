use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The input is not well-formed YAML. The parser's message is kept as-is.
    #[error("{message}")]
    Parse { message: String },

    /// Well-formed YAML that cannot become a struct: a non-mapping where a
    /// mapping is required.
    #[error("{}", format_message(.struct_name))]
    Format { struct_name: Option<String> },
}

fn format_message(struct_name: &Option<String>) -> String {
    match struct_name {
        Some(name) => format!("expected mapping node for struct {name}"),
        None => "invalid YAML format: expected mapping node".to_string(),
    }
}

impl GenerateError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    pub fn expected_mapping(struct_name: impl Into<String>) -> Self {
        Self::Format { struct_name: Some(struct_name.into()) }
    }

    pub fn expected_root_mapping() -> Self {
        Self::Format { struct_name: None }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
