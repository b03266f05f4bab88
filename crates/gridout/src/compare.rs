//! Type-aware ordering over raw cell text.
//!
//! Cells arrive as already-humanized strings (`"1.5mb"`, `"73%"`); comparing
//! them textually would order `"10kb"` before `"900b"`. Every non-text kind
//! therefore parses both sides before comparing. Parsing happens here and
//! nowhere else: parsed values never leak back into display.
//!
//! A cell that fails its kind's grammar (including the empty string) sorts
//! before every parsable value, so one malformed row degrades the ordering
//! locally instead of failing the whole table.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use crate::column::ColumnType;

/// Byte-size suffixes with their power-of-1024 shift. Two-letter suffixes
/// must be tried before the bare `b`.
const DATA_SIZE_UNITS: [(&str, u32); 6] = [
    ("kb", 10),
    ("mb", 20),
    ("gb", 30),
    ("tb", 40),
    ("pb", 50),
    ("b", 0),
];

/// Compares two raw cells under the given column kind.
///
/// This is a total order for every kind: text compares byte-wise, the other
/// kinds compare their parsed values with unparsable cells first.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use gridout::{compare_cells, ColumnType};
///
/// // 900 bytes < 1024 bytes, despite "1kb" < "900b" textually.
/// assert_eq!(compare_cells(ColumnType::DataSize, "900b", "1kb"), Ordering::Less);
/// ```
pub fn compare_cells(kind: ColumnType, left: &str, right: &str) -> Ordering {
    match kind {
        ColumnType::Text => left.cmp(right),
        ColumnType::Number => cmp_parsed(parse_number(left), parse_number(right)),
        ColumnType::Percent => cmp_parsed(parse_percent(left), parse_percent(right)),
        ColumnType::DataSize => cmp_parsed(parse_data_size(left), parse_data_size(right)),
        ColumnType::Date => cmp_parsed(parse_date(left), parse_date(right)),
    }
}

/// Unparsable cells sort first; two parsed values use the type's own order.
fn cmp_parsed<T: PartialOrd>(left: Option<T>, right: Option<T>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Parses a floating-point numeral. A literal NaN counts as unparsable so
/// the resulting order stays total.
fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Strips one trailing `%` if present, then parses as a number.
fn parse_percent(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    parse_number(cell.strip_suffix('%').unwrap_or(cell))
}

/// Parses a magnitude plus unit suffix into a canonical byte count.
///
/// Suffixes are case-insensitive and may be separated from the magnitude by
/// whitespace; units scale by powers of 1024 (`kb = 2^10`, `mb = 2^20`, ...).
/// The suffix is required: a bare numeral is not a size.
fn parse_data_size(cell: &str) -> Option<f64> {
    let lower = cell.trim().to_ascii_lowercase();
    for (suffix, shift) in DATA_SIZE_UNITS {
        if let Some(magnitude) = lower.strip_suffix(suffix) {
            let magnitude = magnitude.trim_end().parse::<f64>().ok()?;
            if magnitude.is_nan() {
                return None;
            }
            return Some(magnitude * (1u64 << shift) as f64);
        }
    }
    None
}

/// Parses the fixed upstream timestamp layout (RFC 3339).
fn parse_date(cell: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(cell.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn less(kind: ColumnType, left: &str, right: &str) {
        assert_eq!(compare_cells(kind, left, right), Ordering::Less);
        assert_eq!(compare_cells(kind, right, left), Ordering::Greater);
    }

    #[test]
    fn text_is_byte_order() {
        less(ColumnType::Text, "apple", "banana");
        less(ColumnType::Text, "", "a");
        assert_eq!(compare_cells(ColumnType::Text, "same", "same"), Ordering::Equal);
    }

    #[test]
    fn numbers_compare_numerically() {
        less(ColumnType::Number, "9", "10");
        less(ColumnType::Number, "-1.5", "0");
        assert_eq!(compare_cells(ColumnType::Number, "1.0", "1"), Ordering::Equal);
    }

    #[test]
    fn unparsable_numbers_sort_first() {
        less(ColumnType::Number, "", "-9999");
        less(ColumnType::Number, "n/a", "0");
        assert_eq!(compare_cells(ColumnType::Number, "", "junk"), Ordering::Equal);
    }

    #[test]
    fn nan_counts_as_unparsable() {
        less(ColumnType::Number, "NaN", "-1");
        assert_eq!(compare_cells(ColumnType::Number, "NaN", ""), Ordering::Equal);
    }

    #[test]
    fn percent_strips_suffix() {
        less(ColumnType::Percent, "5%", "50%");
        less(ColumnType::Percent, "5", "50%");
    }

    #[test]
    fn malformed_percent_sorts_first() {
        less(ColumnType::Percent, "%", "5%");
        less(ColumnType::Percent, "", "0%");
    }

    #[test]
    fn data_sizes_compare_by_byte_count() {
        // 900 < 1024 < 524288, not the lexicographic "0.5mb" < "1kb" < "900b".
        less(ColumnType::DataSize, "900b", "1kb");
        less(ColumnType::DataSize, "1kb", "0.5mb");
        less(ColumnType::DataSize, "999pb", "1000pb");
    }

    #[test]
    fn data_size_suffix_is_case_insensitive() {
        assert_eq!(
            compare_cells(ColumnType::DataSize, "1KB", "1kb"),
            Ordering::Equal
        );
        less(ColumnType::DataSize, "1MB", "1GB");
    }

    #[test]
    fn data_size_allows_space_before_suffix() {
        assert_eq!(
            compare_cells(ColumnType::DataSize, "900 b", "900b"),
            Ordering::Equal
        );
        less(ColumnType::DataSize, "1.5 kb", "2kb");
    }

    #[test]
    fn data_size_units_use_powers_of_1024() {
        assert_eq!(parse_data_size("1kb"), Some(1024.0));
        assert_eq!(parse_data_size("1mb"), Some(1_048_576.0));
        assert_eq!(parse_data_size("0.5mb"), Some(524_288.0));
        assert_eq!(parse_data_size("1pb"), Some(1_125_899_906_842_624.0));
    }

    #[test]
    fn data_size_requires_a_suffix() {
        assert_eq!(parse_data_size("1024"), None);
        less(ColumnType::DataSize, "1024", "1b");
    }

    #[test]
    fn unparsable_sizes_sort_first() {
        less(ColumnType::DataSize, "", "0b");
        less(ColumnType::DataSize, "big", "1b");
        less(ColumnType::DataSize, "kb", "0b");
    }

    #[test]
    fn dates_compare_chronologically() {
        less(
            ColumnType::Date,
            "2024-01-29T10:00:00Z",
            "2024-01-29T10:00:01Z",
        );
        // Same instant expressed in different offsets.
        assert_eq!(
            compare_cells(
                ColumnType::Date,
                "2024-01-29T10:00:00+00:00",
                "2024-01-29T12:00:00+02:00"
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn unparsable_dates_sort_first() {
        less(ColumnType::Date, "", "1970-01-01T00:00:00Z");
        less(ColumnType::Date, "yesterday", "1970-01-01T00:00:00Z");
    }
}
