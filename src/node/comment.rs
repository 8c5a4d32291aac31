//! Trailing `# comment` recovery.
//!
//! The event stream drops comments, so we go back to the source text: given the
//! position where a node ends, whatever follows on that line (after blanks) is
//! its comment if it starts with `#`. Positions are parser markers: 1-based
//! lines, 0-based columns counted in chars.

/// Byte offset of `line:col` in `source`.
fn offset_of(source: &str, line: usize, col: usize) -> Option<usize> {
    let mut start = 0;
    for (n, text) in source.split_inclusive('\n').enumerate() {
        if n + 1 == line {
            let text = text.trim_end_matches(['\n', '\r']);
            return text.char_indices().nth(col).map(|(at, _)| start + at);
        }
        start += text.len();
    }
    None
}

fn rest_of_line(source: &str, line: usize, col: usize) -> Option<&str> {
    let rest = &source[offset_of(source, line, col)?..];
    Some(rest.split(['\n', '\r']).next().unwrap_or(rest))
}

pub fn char_at(source: &str, line: usize, col: usize) -> Option<char> {
    rest_of_line(source, line, col)?.chars().next()
}

/// Comment after a plain scalar (or alias) ending at `line:col`.
pub fn after(source: &str, line: usize, col: usize) -> Option<String> {
    trailing(rest_of_line(source, line, col)?)
}

/// Comment after a quoted scalar starting at `line:col`.
///
/// The parser's end marker for quoted scalars runs past the comment, so we
/// walk from the opening quote to the closing one ourselves (`''` escapes a
/// single quote, `\` escapes anything in double quotes). The scalar may span
/// lines; the comment must sit on the line of the closing quote.
pub fn after_quoted(source: &str, line: usize, col: usize, quote: char) -> Option<String> {
    let from = offset_of(source, line, col)?;
    let opening = from + source[from..].find(quote)?;
    let body = &source[opening + quote.len_utf8()..];

    let mut chars = body.char_indices().peekable();
    while let Some((at, c)) = chars.next() {
        match c {
            '\\' if quote == '"' => {
                chars.next();
            }
            '\'' if quote == '\'' && matches!(chars.peek(), Some((_, '\''))) => {
                chars.next();
            }
            c if c == quote => {
                let rest = &body[at + c.len_utf8()..];
                return trailing(rest.split(['\n', '\r']).next().unwrap_or(rest));
            }
            _ => {}
        }
    }
    None
}

/// Comment after a flow collection whose closing bracket sits at `line:col`.
pub fn after_closing(source: &str, line: usize, col: usize) -> Option<String> {
    let rest = rest_of_line(source, line, col)?;
    let rest = rest.strip_prefix([']', '}'])?;
    trailing(rest)
}

fn trailing(rest: &str) -> Option<String> {
    let rest = rest.trim_start_matches([' ', '\t']);
    if rest.starts_with('#') {
        Some(rest.trim_end().to_string())
    } else {
        None
    }
}
