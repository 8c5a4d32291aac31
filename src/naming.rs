use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());

/// Turn an arbitrary YAML key into an exported Go identifier.
///
/// `snake_case`, `kebab-case`, dotted or spaced keys all become UpperCamelCase;
/// a leading digit gets an `N` prefix. Blank input gives an empty string.
pub fn to_camel(key: &str) -> String {
    let key = key.trim();
    if key.is_empty() {
        return String::new();
    }

    let ident: String = NON_IDENT_RE
        .replace_all(key, "_")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(upper_first)
        .collect();
    // checked after joining: `_1abc` must not come out as `1abc`
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("N{ident}")
    } else {
        ident
    }
}

fn upper_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
