pub mod load;
pub mod row;
pub mod source;
pub mod table;


pub use load::{load, load_source, read_rows};
pub use row::{BenchmarkRow, COLUMNS, DEFAULT_AUTHOR};
pub use source::{class_label, Source};
pub use table::CombinedTable;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to list directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read an entry of {path:?}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0:?} is not a regular file")]
    NotAFile(PathBuf),
    #[error("Failed to open {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed CSV in {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("{path:?} line {line}: expected 3 fields (n, addAll, allMatches), found {found}")]
    FieldCount {
        path: PathBuf,
        line: u64,
        found: usize,
    },
    #[error("{path:?} line {line}: column {column} is not numeric ({value:?})")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("{0:?} contains no records")]
    EmptyFile(PathBuf),
    #[error("File name {0:?} has no '.' to derive a class label from")]
    MissingClassSeparator(String),
    #[error("File name {0:?} yields an empty class label")]
    EmptyClassLabel(String),
    #[error("File name {0:?} is not valid UTF-8")]
    NonUnicodeFileName(PathBuf),
}
