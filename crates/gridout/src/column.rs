//! Column schema types: semantic value kinds and header declarations.

use serde::{Deserialize, Serialize};

/// Semantic kind of the values in a column.
///
/// The kind decides how raw cell text is parsed when ordering rows; it never
/// changes how a cell is displayed. Cells stay plain strings end-to-end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text, ordered byte-wise.
    #[default]
    Text,
    /// Floating-point numerals, e.g. `"42"` or `"-1.5"`.
    Number,
    /// Numerals with an optional trailing `%`, e.g. `"73%"`.
    Percent,
    /// Humanized byte sizes, e.g. `"1.5mb"` or `"900 b"`.
    DataSize,
    /// RFC 3339 timestamps, e.g. `"2024-01-29T10:00:00Z"`.
    Date,
}

/// A single column declaration: header name plus value kind.
///
/// Headers are matched case-insensitively by sort directives and are
/// expected to be unique within a schema; uniqueness is the producing
/// side's concern.
///
/// # Example
///
/// ```rust
/// use gridout::{ColumnDef, ColumnType};
///
/// let columns = vec![
///     ColumnDef::text("NAME"),
///     ColumnDef::percent("HEAP-PERCENT"),
///     ColumnDef::data_size("STORE-SIZE"),
/// ];
/// assert_eq!(columns[2].kind, ColumnType::DataSize);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Header text, also the name sort directives refer to.
    pub header: String,
    /// Semantic kind used when ordering this column's cells.
    pub kind: ColumnType,
}

impl ColumnDef {
    /// Creates a column with the given header and kind.
    pub fn new(header: impl Into<String>, kind: ColumnType) -> Self {
        ColumnDef {
            header: header.into(),
            kind,
        }
    }

    /// Creates a free-text column.
    pub fn text(header: impl Into<String>) -> Self {
        Self::new(header, ColumnType::Text)
    }

    /// Creates a numeric column.
    pub fn number(header: impl Into<String>) -> Self {
        Self::new(header, ColumnType::Number)
    }

    /// Creates a percentage column.
    pub fn percent(header: impl Into<String>) -> Self {
        Self::new(header, ColumnType::Percent)
    }

    /// Creates a byte-size column.
    pub fn data_size(header: impl Into<String>) -> Self {
        Self::new(header, ColumnType::DataSize)
    }

    /// Creates a timestamp column.
    pub fn date(header: impl Into<String>) -> Self {
        Self::new(header, ColumnType::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_default_is_text() {
        assert_eq!(ColumnType::default(), ColumnType::Text);
    }

    #[test]
    fn column_type_serde_roundtrip() {
        let values = [
            ColumnType::Text,
            ColumnType::Number,
            ColumnType::Percent,
            ColumnType::DataSize,
            ColumnType::Date,
        ];
        for kind in values {
            let json = serde_json::to_string(&kind).unwrap();
            let parsed: ColumnType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn column_type_serde_is_lowercase() {
        let json = serde_json::to_string(&ColumnType::DataSize).unwrap();
        assert_eq!(json, "\"datasize\"");
    }

    #[test]
    fn shorthand_constructors() {
        assert_eq!(
            ColumnDef::text("NAME"),
            ColumnDef::new("NAME", ColumnType::Text)
        );
        assert_eq!(ColumnDef::number("ID").kind, ColumnType::Number);
        assert_eq!(ColumnDef::percent("CPU").kind, ColumnType::Percent);
        assert_eq!(ColumnDef::data_size("SIZE").kind, ColumnType::DataSize);
        assert_eq!(ColumnDef::date("CREATED").kind, ColumnType::Date);
    }

    #[test]
    fn column_def_serde_roundtrip() {
        let column = ColumnDef::data_size("STORE-SIZE");
        let json = serde_json::to_string(&column).unwrap();
        let parsed: ColumnDef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, column);
    }
}
