//! Marker token pairs and their compiled line patterns.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Begin token of the default marker pair.
pub const DEFAULT_BEGIN: &str = "// bffgen:begin";
/// End token of the default marker pair.
pub const DEFAULT_END: &str = "// bffgen:end";

/// A literal begin/end token pair delimiting a machine-owned region.
///
/// Deserializes from either explicit tokens (`{ begin = "...", end = "..." }`)
/// or an identifier (`{ id = "routes" }`, see [`Marker::scoped`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MarkerRepr")]
pub struct Marker {
    pub begin: String,
    pub end: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MarkerRepr {
    Tokens { begin: String, end: String },
    Scoped { id: String },
}

impl From<MarkerRepr> for Marker {
    fn from(repr: MarkerRepr) -> Self {
        match repr {
            MarkerRepr::Tokens { begin, end } => Self { begin, end },
            MarkerRepr::Scoped { id } => Self::scoped(&id),
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            begin: DEFAULT_BEGIN.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }
}

impl Marker {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// Marker pair with `identifier` embedded in both tokens.
    ///
    /// # Example
    /// ```
    /// use bffgen_blocks::Marker;
    ///
    /// let marker = Marker::scoped("routes");
    /// assert_eq!(marker.begin, "// bffgen:begin:routes");
    /// assert_eq!(marker.end, "// bffgen:end:routes");
    /// ```
    pub fn scoped(identifier: &str) -> Self {
        Self {
            begin: format!("{DEFAULT_BEGIN}:{identifier}"),
            end: format!("{DEFAULT_END}:{identifier}"),
        }
    }

    /// Compile both tokens into whole-line patterns.
    pub fn compile(&self) -> crate::Result<MarkerPattern> {
        Ok(MarkerPattern {
            begin: line_pattern(&self.begin)?,
            end: line_pattern(&self.end)?,
        })
    }

    /// Fence `body` with this marker's tokens.
    ///
    /// An empty body yields just the two marker lines.
    pub fn wrap(&self, body: &str) -> String {
        if body.is_empty() {
            format!("{}\n{}", self.begin, self.end)
        } else {
            format!("{}\n{}\n{}", self.begin, body, self.end)
        }
    }
}

fn line_pattern(token: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"^\s*{}\s*$", regex::escape(token)))
}

/// Compiled begin/end patterns for one [`Marker`].
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    begin: Regex,
    end: Regex,
}

impl MarkerPattern {
    pub fn is_begin(&self, line: &str) -> bool {
        self.begin.is_match(line)
    }

    pub fn is_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }
}
