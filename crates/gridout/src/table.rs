//! Table construction, sorting, pruning, and emission.
//!
//! [`Table`] owns a column schema and a row matrix of raw string cells. A
//! render call validates the sort spec against the schema, stable-sorts the
//! rows through the tie-break chain, prunes columns that carry no data, and
//! emits an aligned text table. Sorting always runs against the full matrix;
//! pruning affects display only.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Write;

use crate::column::ColumnDef;
use crate::compare::compare_cells;
use crate::error::{Error, Result};
use crate::sort::SortSpec;
use crate::util::{display_width, pad_right};

/// Gap between adjacent columns.
const COLUMN_GAP: &str = "  ";

/// An in-memory table: a column schema plus positionally aligned rows.
///
/// Every stored row has exactly one cell per declared column; missing data
/// is the empty string. Rendering is synchronous and leaves the table
/// untouched, so one snapshot can be re-rendered freely (e.g. by a caller
/// emulating a watch mode).
///
/// # Example
///
/// ```rust
/// use gridout::{ColumnDef, SortSpec, Table};
///
/// let mut table = Table::new(vec![
///     ColumnDef::text("INDEX"),
///     ColumnDef::data_size("STORE-SIZE"),
/// ]);
/// table.push_row(["logs-2024", "1.5mb"]);
/// table.push_row(["metrics", "900b"]);
///
/// let out = table.render(&SortSpec::parse("STORE-SIZE")).unwrap();
/// assert_eq!(out, "INDEX      STORE-SIZE\nmetrics    900b\nlogs-2024  1.5mb\n");
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<ColumnDef>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table over the given schema.
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, normalizing it to the schema's width.
    ///
    /// Missing cells become empty strings and surplus cells are dropped, so
    /// positional alignment with the schema holds by construction.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    /// The declared schema.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// The stored rows, in insertion order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Renders the sorted, pruned, aligned table into a string.
    ///
    /// Fails with [`Error::UnknownSortColumn`] if any sort key names a
    /// header missing from the schema; nothing is produced in that case.
    pub fn render(&self, sort: &SortSpec) -> Result<String> {
        let order = self.sorted_order(sort)?;
        let visible = self.visible_columns();

        let mut widths = Vec::with_capacity(visible.len());
        for &col in &visible {
            let mut width = display_width(&self.columns[col].header);
            for row in &self.rows {
                width = width.max(display_width(&row[col]));
            }
            widths.push(width);
        }

        let mut out = String::new();
        push_line(
            &mut out,
            &widths,
            visible.iter().map(|&col| self.columns[col].header.as_str()),
        );
        for &row in &order {
            push_line(
                &mut out,
                &widths,
                visible.iter().map(|&col| self.rows[row][col].as_str()),
            );
        }
        Ok(out)
    }

    /// Renders into the given sink.
    ///
    /// The table is rendered fully before the first byte is written, so a
    /// failed render produces no partial output.
    pub fn write_to<W: Write>(&self, sort: &SortSpec, out: &mut W) -> Result<()> {
        let text = self.render(sort)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Resolves the sort spec against the schema and returns the row indices
    /// in output order. Rows themselves are never reordered.
    fn sorted_order(&self, sort: &SortSpec) -> Result<Vec<usize>> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if sort.is_empty() {
            return Ok(order);
        }

        let mut index_by_header = HashMap::with_capacity(self.columns.len());
        for (index, column) in self.columns.iter().enumerate() {
            index_by_header.insert(column.header.to_lowercase(), index);
        }

        // Every key must resolve before any reordering happens.
        let mut resolved = Vec::with_capacity(sort.len());
        for key in sort.keys() {
            let index = index_by_header
                .get(&key.header.to_lowercase())
                .copied()
                .ok_or_else(|| Error::UnknownSortColumn(key.header.clone()))?;
            resolved.push((index, key.dir));
        }

        // sort_by is stable: a full tie keeps the input order.
        order.sort_by(|&a, &b| {
            for &(index, dir) in &resolved {
                let ordering = compare_cells(
                    self.columns[index].kind,
                    &self.rows[a][index],
                    &self.rows[b][index],
                );
                if ordering != Ordering::Equal {
                    return dir.apply(ordering);
                }
            }
            Ordering::Equal
        });
        Ok(order)
    }

    /// Indices of columns that survive pruning.
    ///
    /// A column is pruned iff it has at least one row and every cell in it
    /// is empty; with zero rows nothing is pruned, so headers still show.
    fn visible_columns(&self) -> Vec<usize> {
        let has_rows = !self.rows.is_empty();
        (0..self.columns.len())
            .filter(|&col| !has_rows || self.rows.iter().any(|row| !row[col].is_empty()))
            .collect()
    }
}

/// Appends one aligned line. The last visible column is not padded, so
/// lines never carry trailing whitespace.
fn push_line<'a>(
    out: &mut String,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) {
    for (position, (cell, &width)) in cells.zip(widths).enumerate() {
        if position > 0 {
            out.push_str(COLUMN_GAP);
        }
        if position + 1 == widths.len() {
            out.push_str(cell);
        } else {
            out.push_str(&pad_right(cell, width));
        }
    }
    out.push('\n');
}
