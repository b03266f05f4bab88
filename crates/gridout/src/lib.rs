//! Gridout - deterministic tabular output for cluster-monitoring CLIs.
//!
//! Gridout takes heterogeneous, semantically typed columnar data (free text,
//! numbers, percentages, byte sizes, timestamps) plus a compact multi-key
//! sort directive, and produces a deterministically ordered, aligned,
//! column-pruned text table. Values arrive as already-humanized strings and
//! stay strings end-to-end; ordering parses them by column kind, so `"900b"`
//! sorts below `"1kb"` instead of after it.
//!
//! # Quick Start
//!
//! ```rust
//! use gridout::{ColumnDef, SortSpec, Table};
//!
//! let mut table = Table::new(vec![
//!     ColumnDef::text("INDEX"),
//!     ColumnDef::data_size("STORE-SIZE"),
//!     ColumnDef::percent("HEAP"),
//! ]);
//! table.push_row(["logs-2024", "1.5mb", "73%"]);
//! table.push_row(["metrics", "900b", "12%"]);
//!
//! let out = table.render(&SortSpec::parse("STORE-SIZE:desc")).unwrap();
//! assert!(out.lines().nth(1).unwrap().starts_with("logs-2024"));
//! ```
//!
//! # Ordering semantics
//!
//! - A directive like `"NAME:desc,HEAP-PERCENT"` forms a tie-break chain:
//!   the first key decides, equal rows fall through to the next key, and a
//!   full tie keeps the input order (the sort is stable).
//! - Headers are matched case-insensitively. A key naming an undeclared
//!   column fails the render before any output; everything else degrades
//!   gracefully. Empty or unparsable cells sort first within their column.
//!
//! # Column pruning
//!
//! Columns whose cells are empty in every row are dropped from the rendered
//! output. Pruning is display-only: sorting has already run against the
//! full schema, and a zero-row table keeps all of its headers.

mod column;
mod compare;
mod error;
mod sort;
mod table;
mod util;

pub use column::{ColumnDef, ColumnType};
pub use compare::compare_cells;
pub use error::{Error, Result};
pub use sort::{Dir, SortKey, SortSpec};
pub use table::Table;
pub use util::{display_width, pad_right};
