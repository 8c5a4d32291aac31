//! YAML document tree, built from `saphyr-parser` events.
//!
//! The parser streams events; we fold them into an owned [`Node`] tree whose
//! variants are fixed here, so nothing downstream ever sees a parser type.
//!
//! - Scalars carry a resolved [`ScalarTag`] (explicit tag or core-schema
//!   resolution of plain text, see [`scalar`]).
//! - Every node may carry the trailing `# ...` comment found right after it on
//!   the same line (see [`comment`]).
//! - Aliases are kept opaque ([`Content::Other`]), they are not expanded.
pub mod comment;
pub mod scalar;

use saphyr_parser::{Event, Parser, ScalarStyle, Span};

use crate::error::{GenerateError, Result};

pub use scalar::ScalarTag;

// ------------------------------- Tree ------------------------------------ //

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub content: Content,
    /// Trailing line comment, from the `#` to the end of the line.
    pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Scalar { value: String, tag: ScalarTag },
    Sequence(Vec<Node>),
    /// Key/value pairs in document order.
    Mapping(Vec<(Node, Node)>),
    /// Alias references, and anything else with no structural reading.
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
    Other,
}

impl Node {
    pub fn new(content: Content) -> Self {
        Self { content, comment: None }
    }

    pub fn scalar(value: impl Into<String>, tag: ScalarTag) -> Self {
        Self::new(Content::Scalar { value: value.into(), tag })
    }

    pub fn sequence(items: Vec<Node>) -> Self {
        Self::new(Content::Sequence(items))
    }

    pub fn mapping(pairs: Vec<(Node, Node)>) -> Self {
        Self::new(Content::Mapping(pairs))
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn kind(&self) -> NodeKind {
        match &self.content {
            Content::Scalar { .. } => NodeKind::Scalar,
            Content::Sequence(_) => NodeKind::Sequence,
            Content::Mapping(_) => NodeKind::Mapping,
            Content::Other => NodeKind::Other,
        }
    }

    pub fn is_mapping(&self) -> bool {
        self.kind() == NodeKind::Mapping
    }

    /// Scalar text; empty for every structural kind.
    pub fn value(&self) -> &str {
        match &self.content {
            Content::Scalar { value, .. } => value,
            _ => "",
        }
    }

    /// First element of a sequence, if any.
    pub fn first_item(&self) -> Option<&Node> {
        match &self.content {
            Content::Sequence(items) => items.first(),
            _ => None,
        }
    }
}

// ------------------------------- Build ----------------------------------- //

/// Parse `source` and return the root node of its first document.
///
/// `Ok(None)` means the stream holds no document at all (empty input or
/// comments only). Later documents are not read.
pub fn parse_document(source: &str) -> Result<Option<Node>> {
    let mut builder = TreeBuilder::new(source);
    for next in Parser::new_from_str(source) {
        let (event, span) = next.map_err(|error| GenerateError::parse(error.to_string()))?;
        if builder.on_event(event, span) {
            break;
        }
    }
    Ok(builder.root)
}

enum Frame {
    Sequence {
        items: Vec<Node>,
        flow: bool,
    },
    Mapping {
        pairs: Vec<(Node, Node)>,
        pending_key: Option<Node>,
        flow: bool,
    },
}

struct TreeBuilder<'src> {
    source: &'src str,
    stack: Vec<Frame>,
    root: Option<Node>,
}

impl<'src> TreeBuilder<'src> {
    fn new(source: &'src str) -> Self {
        Self { source, stack: Vec::new(), root: None }
    }

    /// Returns true once the first document is complete.
    fn on_event(&mut self, event: Event<'_>, span: Span) -> bool {
        match event {
            Event::Scalar(value, style, _anchor, tag) => {
                let value: String = value.into();
                let plain = matches!(style, ScalarStyle::Plain);
                let quote = match style {
                    ScalarStyle::SingleQuoted => Some('\''),
                    ScalarStyle::DoubleQuoted => Some('"'),
                    _ => None,
                };
                let tag = match tag.as_ref() {
                    Some(tag) => ScalarTag::from_explicit(&tag.handle, &tag.suffix),
                    None if plain => ScalarTag::resolve_plain(&value),
                    None => ScalarTag::Str,
                };
                let mut node = Node::scalar(value, tag);
                // block scalars and implicit empty values never carry one
                node.comment = match quote {
                    Some(q) => comment::after_quoted(self.source, span.start.line(), span.start.col(), q),
                    None if plain && span.end.index() != span.start.index() => {
                        comment::after(self.source, span.end.line(), span.end.col())
                    }
                    None => None,
                };
                self.push(node);
            }
            Event::Alias(_) => {
                let mut node = Node::new(Content::Other);
                node.comment = comment::after(self.source, span.end.line(), span.end.col());
                self.push(node);
            }
            Event::SequenceStart(_, _) => {
                let flow = self.opens_flow(&span);
                self.stack.push(Frame::Sequence { items: Vec::new(), flow });
            }
            Event::MappingStart(_, _) => {
                let flow = self.opens_flow(&span);
                self.stack.push(Frame::Mapping { pairs: Vec::new(), pending_key: None, flow });
            }
            Event::SequenceEnd | Event::MappingEnd => {
                let (mut node, flow) = match self.stack.pop() {
                    Some(Frame::Sequence { items, flow }) => (Node::sequence(items), flow),
                    // a key left without a value is dropped
                    Some(Frame::Mapping { pairs, flow, .. }) => (Node::mapping(pairs), flow),
                    None => return false,
                };
                if flow {
                    node.comment = comment::after_closing(self.source, span.start.line(), span.start.col());
                }
                self.push(node);
            }
            Event::DocumentEnd => return self.root.is_some(),
            _ => {}
        }
        false
    }

    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { pairs, pending_key, .. }) => match pending_key.take() {
                Some(key) => pairs.push((key, node)),
                None => *pending_key = Some(node),
            },
        }
    }

    fn opens_flow(&self, span: &Span) -> bool {
        matches!(
            comment::char_at(self.source, span.start.line(), span.start.col()),
            Some('[' | '{')
        )
    }
}

// ------------------------------- Tests ----------------------------------- //
