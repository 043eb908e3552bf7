use crate::{BenchmarkRow, COLUMNS};
use comfy_table::{presets::NOTHING, CellAlignment, Table};
use itertools::Itertools;
use std::{fmt, iter};

/// Append-only, ordered collection of benchmark rows from any number of
/// sources. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedTable {
    rows: Vec<BenchmarkRow>,
}

impl CombinedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRow> {
        self.rows.iter()
    }

    /// append rows after all existing ones
    pub fn append<I: IntoIterator<Item = BenchmarkRow>>(&mut self, rows: I) {
        self.rows.extend(rows);
    }

    /// concatenate two tables, rows of `other` follow the rows of `self`
    pub fn concat(mut self, other: CombinedTable) -> Self {
        self.rows.extend(other.rows);
        self
    }

    /// distinct class labels in order of first appearance
    pub fn classes(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.class.as_str())
            .unique()
            .collect()
    }

    /// distinct author labels in order of first appearance
    pub fn authors(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.author.as_str())
            .unique()
            .collect()
    }

    pub fn filter_class(&self, class: &str) -> impl Iterator<Item = &BenchmarkRow> + '_ {
        let class = class.to_owned();

        self.rows.iter().filter(move |row| row.class == class)
    }
}

impl<'a> IntoIterator for &'a CombinedTable {
    type Item = &'a BenchmarkRow;
    type IntoIter = std::slice::Iter<'a, BenchmarkRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for CombinedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "Empty table")?;
            return write!(f, "Columns: [{}]", COLUMNS.iter().join(", "));
        }

        let mut dump = Table::new();
        dump.load_preset(NOTHING).set_header(iter::once("").chain(COLUMNS));

        for (index, row) in self.rows.iter().enumerate() {
            dump.add_row(iter::once(index.to_string()).chain(row.cells()));
        }

        for column in dump.column_iter_mut() {
            column.set_cell_alignment(CellAlignment::Right);
        }

        writeln!(f, "{dump}")?;
        write!(f, "\n[{} rows x {} columns]", self.rows.len(), COLUMNS.len())
    }
}
