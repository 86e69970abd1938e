//! Path templates with typed positional placeholders.
//!
//! A template is literal path text interleaved with `{string}` and
//! `{integer}` slots, e.g. `projects/{string}/sharings/{integer}`. Slots are
//! filled strictly left to right from a list of [`serde_json::Value`]s.
//!
//! Literal braces are written doubled: `{{` and `}}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use thiserror::Error;

/// The declared type of a placeholder slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PlaceholderKind {
    /// `{string}` - accepts strings, numbers and booleans.
    String,
    /// `{integer}` - accepts integral numbers and strings holding an integer.
    Integer,
}

impl PlaceholderKind {
    /// Formats `value` for this slot, or returns `None` when it cannot be
    /// coerced to the declared type.
    ///
    /// ## Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use waypoint_define::PlaceholderKind;
    ///
    /// assert_eq!(PlaceholderKind::String.coerce(&json!("abc")), Some("abc".to_string()));
    /// assert_eq!(PlaceholderKind::Integer.coerce(&json!("42")), Some("42".to_string()));
    /// assert_eq!(PlaceholderKind::Integer.coerce(&json!(1.5)), None);
    /// ```
    pub fn coerce(&self, value: &Value) -> Option<String> {
        match self {
            Self::String => match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Null | Value::Array(_) | Value::Object(_) => None,
            },
            Self::Integer => match value {
                Value::Number(n) => n
                    .as_i64()
                    .map(|i| i.to_string())
                    .or_else(|| n.as_u64().map(|u| u.to_string())),
                Value::String(s) => {
                    let s = s.trim();
                    s.parse::<i64>()
                        .map(|i| i.to_string())
                        .or_else(|_| s.parse::<u64>().map(|u| u.to_string()))
                        .ok()
                }
                _ => None,
            },
        }
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal path text (escapes already resolved).
    Literal(String),
    /// A typed slot.
    Placeholder(PlaceholderKind),
}

/// Errors raised while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{` was never closed.
    #[error("unterminated placeholder starting at byte {position}")]
    Unterminated {
        /// Byte offset of the opening brace.
        position: usize,
    },

    /// A `}` appeared without a matching `{`.
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedClose {
        /// Byte offset of the closing brace.
        position: usize,
    },

    /// The slot name is not a recognized placeholder type.
    #[error("unknown placeholder type '{{{name}}}' (expected {{string}} or {{integer}})")]
    UnknownPlaceholder {
        /// The name found between the braces.
        name: String,
    },
}

/// Errors raised while filling a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Fewer values were supplied than the template has slots.
    #[error("expected {expected} path argument(s), got {supplied}")]
    InsufficientArguments {
        /// Number of slots in the template.
        expected: usize,
        /// Number of values supplied.
        supplied: usize,
    },

    /// A value could not be coerced to its slot's declared type.
    #[error("path argument {position} must be {expected}, got {found}")]
    TypeMismatch {
        /// Zero-based index of the offending argument.
        position: usize,
        /// The slot's declared type.
        expected: PlaceholderKind,
        /// Short description of the supplied value.
        found: String,
    },
}

/// A parsed path template.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use waypoint_define::PathTemplate;
///
/// let template = PathTemplate::parse("projects/{string}/sharings/{integer}").unwrap();
/// assert_eq!(template.placeholder_count(), 2);
///
/// let path = template.render(&[json!("abc123"), json!(42)]).unwrap();
/// assert_eq!(path, "projects/abc123/sharings/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template string.
    ///
    /// ## Errors
    ///
    /// Returns a [`TemplateError`] for unbalanced braces or unknown slot types.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TemplateError> {
        let raw = raw.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    let mut closed = false;
                    for (_, next) in chars.by_ref() {
                        if next == '}' {
                            closed = true;
                            break;
                        }
                        name.push(next);
                    }
                    if !closed {
                        return Err(TemplateError::Unterminated { position: pos });
                    }

                    let kind = PlaceholderKind::from_str(name.trim())
                        .map_err(|_| TemplateError::UnknownPlaceholder { name: name.clone() })?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(kind));
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(TemplateError::UnmatchedClose { position: pos });
                    }
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { raw, segments })
    }

    /// Returns the template as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the slot types, left to right.
    pub fn placeholders(&self) -> impl Iterator<Item = PlaceholderKind> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(kind) => Some(*kind),
            Segment::Literal(_) => None,
        })
    }

    /// Number of slots, i.e. how many leading arguments the path consumes.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }

    /// Fills the slots with `args`, left to right.
    ///
    /// Only the first [`placeholder_count`](Self::placeholder_count) values
    /// are used.
    ///
    /// ## Errors
    ///
    /// - [`RenderError::InsufficientArguments`] if `args` is shorter than the
    ///   slot count; no partial path is produced.
    /// - [`RenderError::TypeMismatch`] if a value cannot be coerced to its
    ///   slot's type.
    pub fn render(&self, args: &[Value]) -> Result<String, RenderError> {
        let expected = self.placeholder_count();
        if args.len() < expected {
            return Err(RenderError::InsufficientArguments {
                expected,
                supplied: args.len(),
            });
        }

        let mut path = String::with_capacity(self.raw.len());
        let supplied = args.len();
        let mut values = args.iter().enumerate();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(kind) => {
                    let (position, value) =
                        values
                            .next()
                            .ok_or(RenderError::InsufficientArguments { expected, supplied })?;
                    let rendered = kind.coerce(value).ok_or_else(|| RenderError::TypeMismatch {
                        position,
                        expected: *kind,
                        found: describe(value),
                    })?;
                    path.push_str(&rendered);
                }
            }
        }

        Ok(path)
    }
}

/// Short human-readable description of a JSON value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of {} item(s)", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PathTemplate> for String {
    fn from(template: PathTemplate) -> Self {
        template.raw
    }
}
