//! Message templates with named placeholders.
//!
//! Templates are parsed once into literal/placeholder segments, so repeated
//! rendering never re-scans the source text. Placeholders use `{name}` syntax;
//! a placeholder with no matching parameter renders as the empty string.

use std::borrow::Cow;

/// One parsed segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed message template.
///
/// # Examples
///
/// ```rust,ignore
/// let tpl = Template::parse("{attribute} should have length {length}.");
/// let out = tpl.render(&[
///     ("attribute".into(), "name".to_string()),
///     ("length".into(), "3".to_string()),
/// ]);
/// assert_eq!(out, "name should have length 3.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template string.
    ///
    /// A `{` starts a placeholder only when it encloses a well-formed name
    /// (ASCII alphanumerics and underscores); anything else is kept literal,
    /// so stray braces never fail parsing.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) if is_placeholder_name(&after[..close]) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(after[..close].to_string()));
                    rest = &after[close + 1..];
                }
                _ => {
                    literal.push('{');
                    rest = after;
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Renders the template, substituting params by placeholder name.
    #[must_use]
    pub fn render(&self, params: &[(Cow<'static, str>, String)]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some((_, value)) = params.iter().find(|(key, _)| key == name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }

    /// Returns the placeholder names referenced by this template.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
}
