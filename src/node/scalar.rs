use once_cell::sync::Lazy;
use regex::Regex;

/// Resolved scalar type, one per YAML core-schema tag we care about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScalarTag {
    Null,
    Bool,
    Int,
    Float,
    Str,
    /// Any other explicit tag (`!!timestamp`, `!local`, ...), kept verbatim.
    Custom(String),
}

const CORE_SCHEMA_PREFIX: &str = "tag:yaml.org,2002:";

// Applied after `_` separators are removed.
static INT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(0[bB][01]+|0[oO][0-7]+|0[xX][0-9a-fA-F]+|0[0-7]*|[1-9][0-9]*)$").unwrap()
});
static FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?$").unwrap()
});

const NULLS: &[&str] = &["", "~", "null", "Null", "NULL"];
const BOOLS: &[&str] = &["true", "True", "TRUE", "false", "False", "FALSE"];
const FLOAT_SPECIALS: &[&str] = &[
    ".inf", ".Inf", ".INF", "+.inf", "+.Inf", "+.INF", "-.inf", "-.Inf", "-.INF",
    ".nan", ".NaN", ".NAN",
];

impl ScalarTag {
    /// Resolve a plain (unquoted, untagged) scalar.
    pub fn resolve_plain(value: &str) -> Self {
        if NULLS.contains(&value) {
            return Self::Null;
        }
        if BOOLS.contains(&value) {
            return Self::Bool;
        }
        if FLOAT_SPECIALS.contains(&value) {
            return Self::Float;
        }
        let plain = value.replace('_', "");
        if INT_RE.is_match(&plain) && fits_in_64_bits(&plain) {
            return Self::Int;
        }
        if FLOAT_RE.is_match(&plain) {
            return Self::Float;
        }
        Self::Str
    }

    /// Map an explicit tag (as split by the parser) onto a scalar type.
    pub fn from_explicit(handle: &str, suffix: &str) -> Self {
        let core = if handle == "!!" || handle == CORE_SCHEMA_PREFIX {
            Some(suffix)
        } else {
            suffix.strip_prefix(CORE_SCHEMA_PREFIX)
        };
        match core {
            Some("int") => Self::Int,
            Some("float") => Self::Float,
            Some("bool") => Self::Bool,
            Some("null") => Self::Null,
            Some("str") => Self::Str,
            Some(other) => Self::Custom(format!("!!{other}")),
            // non-specific `!`
            None if handle == "!" && suffix.is_empty() => Self::Str,
            None => Self::Custom(format!("{handle}{suffix}")),
        }
    }
}

/// Integer literals that overflow 64 bits fall through to float (or string).
fn fits_in_64_bits(literal: &str) -> bool {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let lower = unsigned.to_ascii_lowercase();
    let (digits, radix) = if let Some(d) = lower.strip_prefix("0x") {
        (d, 16)
    } else if let Some(d) = lower.strip_prefix("0o") {
        (d, 8)
    } else if let Some(d) = lower.strip_prefix("0b") {
        (d, 2)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };
    match u64::from_str_radix(digits, radix) {
        Ok(v) if negative => v <= i64::MAX as u64 + 1,
        Ok(_) => true,
        Err(_) => false,
    }
}
