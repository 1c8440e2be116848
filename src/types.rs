use crate::error::{Result, SniError};

/// Which registration slot a pattern targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// A full, literal hostname ("www.example.com")
    Exact,
    /// A `*.`-prefixed pattern ("*.example.com"), matching any strictly-deeper
    /// hostname under the suffix
    Wildcard,
}

/// A parsed, validated hostname or wildcard pattern.
///
/// Labels are stored in traversal order: rightmost (TLD) first, so trie walks
/// are plain forward iteration over the label vector. Input is lowercased at
/// construction, matching the lowercase-at-the-boundary guarantee the rest of
/// the crate relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPattern {
    raw: String,
    labels: Vec<String>,
    kind: PatternKind,
}

impl HostPattern {
    /// Parse a hostname or `*.`-prefixed wildcard pattern.
    ///
    /// Rejected inputs: the empty string, any empty label (leading, trailing,
    /// or doubled dots), bare `"*"` or `"*."`, and a `*` anywhere other than
    /// as the leading `*.` prefix.
    pub fn parse(pattern: &str) -> Result<Self> {
        let raw = pattern.to_lowercase();

        let (name, kind) = match raw.strip_prefix("*.") {
            Some(rest) => (rest, PatternKind::Wildcard),
            None => (raw.as_str(), PatternKind::Exact),
        };

        if name.is_empty() {
            return Err(SniError::InvalidPattern(raw));
        }

        let mut labels = Vec::new();
        for label in name.split('.') {
            if label.is_empty() || label.contains('*') {
                return Err(SniError::InvalidPattern(raw));
            }
            labels.push(label.to_string());
        }
        labels.reverse();

        Ok(Self { raw, labels, kind })
    }

    /// Labels in traversal order (TLD first)
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The lowercased input string, wildcard prefix included
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}
