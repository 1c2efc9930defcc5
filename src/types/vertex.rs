//! Vertex identity and the composite-name codec used by graph products.

use std::fmt;

use serde::{Serialize, Serializer};

use super::error::{GraphError, GraphResult};

/// The key a vertex is identified by.
///
/// Product graphs name their vertices by pairing the names of the factor
/// vertices, so repeated products produce nested `Pair`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexName {
    /// Integer index, as assigned by the generators.
    Index(u64),
    /// Arbitrary text label.
    Label(String),
    /// Composite name of a product vertex: `(left,right)`.
    Pair(Box<VertexName>, Box<VertexName>),
}

impl VertexName {
    /// Build a composite name from two factor names.
    pub fn pair(left: VertexName, right: VertexName) -> Self {
        Self::Pair(Box::new(left), Box::new(right))
    }

    /// Parse a name from its display form.
    ///
    /// `(x,y)` with a top-level comma becomes a `Pair` (recursively), a run of
    /// decimal digits becomes an `Index`, anything else is a `Label`.
    pub fn parse(text: &str) -> GraphResult<Self> {
        if is_enclosed(text) {
            let (left, right) = split_composite_name(&text[1..text.len() - 1])?;
            return Ok(Self::pair(Self::parse(left)?, Self::parse(right)?));
        }
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = text.parse::<u64>() {
                return Ok(Self::Index(index));
            }
        }
        Ok(Self::Label(text.to_string()))
    }

    /// Whether this name was produced by a graph product.
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(..))
    }

    /// Binary coordinate of a hypercube vertex: every `0`/`1` character of the
    /// display form, left to right.
    pub fn binary_digits(&self) -> String {
        self.to_string()
            .chars()
            .filter(|c| matches!(c, '0' | '1'))
            .collect()
    }
}

impl fmt::Display for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Label(s) => f.write_str(s),
            Self::Pair(l, r) => write!(f, "({},{})", l, r),
        }
    }
}

/// True when the opening parenthesis at the start of `text` is closed by its
/// final character.
fn is_enclosed(text: &str) -> bool {
    if !text.starts_with('(') || !text.ends_with(')') {
        return false;
    }
    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = match depth.checked_sub(1) {
                    Some(d) => d,
                    None => return false,
                };
                if depth == 0 {
                    return i == text.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Split a two-part name `x,y` at its first top-level comma.
///
/// Commas nested inside parentheses belong to sub-names and never split:
/// `"(0,1),(1,0)"` splits into `"(0,1)"` and `"(1,0)"`.
pub fn split_composite_name(text: &str) -> GraphResult<(&str, &str)> {
    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| GraphError::MalformedName(text.to_string()))?;
            }
            ',' if depth == 0 => return Ok((&text[..i], &text[i + 1..])),
            _ => {}
        }
    }
    Err(GraphError::MalformedName(text.to_string()))
}

/// A graph vertex. Equality, ordering and hashing go through the name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    /// Identity key.
    pub name: VertexName,
}

impl Vertex {
    /// Create a vertex with the given name.
    pub fn new(name: impl Into<VertexName>) -> Self {
        Self { name: name.into() }
    }

    /// Vertex of a product graph, named after its two factor vertices.
    pub fn pair(left: &Vertex, right: &Vertex) -> Self {
        Self {
            name: VertexName::pair(left.name.clone(), right.name.clone()),
        }
    }

    /// Parse a vertex from the display form of its name.
    pub fn parse(text: &str) -> GraphResult<Self> {
        VertexName::parse(text).map(|name| Self { name })
    }
}

impl From<u64> for VertexName {
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for VertexName {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for VertexName {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl From<VertexName> for Vertex {
    fn from(name: VertexName) -> Self {
        Self { name }
    }
}

impl From<u64> for Vertex {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Vertex {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
