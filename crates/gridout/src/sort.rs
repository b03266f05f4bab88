//! Sort directives: direction, keys, and the compact textual form.
//!
//! A directive is a comma-separated list of `column[:asc|:desc]` tokens,
//! e.g. `"NAME:desc,HEAP-PERCENT"`. Parsing is deliberately lenient: a
//! monitoring CLI should render a table rather than abort on a cosmetic
//! directive problem, so malformed tokens are dropped silently. Whether a
//! key actually names a declared column is checked at render time.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged; for `Desc`, reverses it.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single sort key: column header plus direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// The header the key refers to, matched case-insensitively.
    pub header: String,
    /// The sort direction.
    pub dir: Dir,
}

impl SortKey {
    /// Creates an ascending key for the given header.
    pub fn asc(header: impl Into<String>) -> Self {
        SortKey {
            header: header.into(),
            dir: Dir::Asc,
        }
    }

    /// Creates a descending key for the given header.
    pub fn desc(header: impl Into<String>) -> Self {
        SortKey {
            header: header.into(),
            dir: Dir::Desc,
        }
    }

    /// Creates a key with the given direction.
    pub fn new(header: impl Into<String>, dir: Dir) -> Self {
        SortKey {
            header: header.into(),
            dir,
        }
    }
}

/// An ordered list of sort keys forming the tie-break chain.
///
/// The first key decides the order; rows equal under it fall through to the
/// next key, and a full tie preserves the input order (the sort is stable).
/// An empty spec is a legal no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Creates an empty spec (no reordering).
    pub fn new() -> Self {
        SortSpec::default()
    }

    /// Parses a compact sort directive.
    ///
    /// Tokens are split on commas and trimmed; an optional `:asc` or `:desc`
    /// suffix (case-insensitive) picks the direction, anything else means
    /// ascending. Tokens whose header is empty after trimming are skipped.
    /// Parsing never fails; key order matches token order exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridout::{Dir, SortSpec};
    ///
    /// let spec = SortSpec::parse(" NAME:desc , AGE ");
    /// let keys = spec.keys();
    /// assert_eq!((keys[0].header.as_str(), keys[0].dir), ("NAME", Dir::Desc));
    /// assert_eq!((keys[1].header.as_str(), keys[1].dir), ("AGE", Dir::Asc));
    /// ```
    pub fn parse(directive: &str) -> Self {
        let mut keys = Vec::new();
        for token in directive.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let (header, dir) = match token.split_once(':') {
                Some((header, suffix)) => {
                    let dir = if suffix.trim().eq_ignore_ascii_case("desc") {
                        Dir::Desc
                    } else {
                        Dir::Asc
                    };
                    (header.trim(), dir)
                }
                None => (token, Dir::Asc),
            };
            if header.is_empty() {
                continue;
            }
            keys.push(SortKey::new(header, dir));
        }
        SortSpec { keys }
    }

    /// The keys in tie-break order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns `true` if the spec carries no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl From<Vec<SortKey>> for SortSpec {
    fn from(keys: Vec<SortKey>) -> Self {
        SortSpec { keys }
    }
}
