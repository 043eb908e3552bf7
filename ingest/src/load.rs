use crate::{class_label, row::RawRecord, BenchmarkRow, CombinedTable, IngestError, Source};
use csv::{ReaderBuilder, Trim};
use itertools::Itertools;
use std::{
    fs::{self, DirEntry, File},
    path::Path,
};
use tracing::{debug, info, instrument};

/// Load every result file in `directory` and append the rows, tagged with
/// their class and `author`, to `table`
///
/// The directory is read in the order the OS lists it. Use [`load_source`]
/// with [`Source::sorted`] if a reproducible order is required.
pub fn load(
    table: CombinedTable,
    directory: &Path,
    author: &str,
) -> Result<CombinedTable, IngestError> {
    load_source(table, &Source::new(directory).author(author))
}

/// Load a single source into `table`
///
/// Rows are staged per call and only appended once every file of the
/// directory was parsed, a single bad file aborts the whole load.
#[instrument(level = "debug", skip_all, fields(path = ?source.path, author = %source.author))]
pub fn load_source(
    mut table: CombinedTable,
    source: &Source,
) -> Result<CombinedTable, IngestError> {
    let entries = list_entries(source)?;
    let mut staged = Vec::new();
    let mut files = 0;

    for entry in entries {
        let file_name = entry.file_name();

        if !source.accepts(&file_name) {
            debug!(file = ?file_name, "Skipped, file name doesn't match the filter");
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            return Err(IngestError::NotAFile(path));
        }

        let class = class_label(&file_name)?;
        let rows = read_rows(&path, &class, &source.author)?;

        debug!(file = ?path, class = %class, rows = rows.len(), "Read result file");
        staged.extend(rows);
        files += 1;
    }

    info!(
        "Loaded {} rows from {files} files in {:?} for {}",
        staged.len(),
        source.path,
        source.author
    );
    table.append(staged);

    Ok(table)
}

fn list_entries(source: &Source) -> Result<Vec<DirEntry>, IngestError> {
    let entries = fs::read_dir(&source.path)
        .map_err(|error| IngestError::ReadDir {
            path: source.path.clone(),
            source: error,
        })?
        .map(|entry| {
            entry.map_err(|error| IngestError::ReadEntry {
                path: source.path.clone(),
                source: error,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if source.sorted {
        Ok(entries
            .into_iter()
            .sorted_by_key(DirEntry::file_name)
            .collect_vec())
    } else {
        Ok(entries)
    }
}

/// Read one header-less result file with exactly three numeric fields per
/// line: `n`, `addAll` and `allMatches`
pub fn read_rows(path: &Path, class: &str, author: &str) -> Result<Vec<BenchmarkRow>, IngestError> {
    let file = File::open(path).map_err(|error| IngestError::OpenFile {
        path: path.to_path_buf(),
        source: error,
    })?;

    // flexible, since the field count is checked below to report it properly
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| IngestError::Csv {
            path: path.to_path_buf(),
            source: error,
        })?;
        let line = record
            .position()
            .map_or(index as u64 + 1, |position| position.line());

        if record.len() != 3 {
            return Err(IngestError::FieldCount {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            });
        }

        let raw = RawRecord::parse(&record).map_err(|(column, value)| {
            IngestError::InvalidNumber {
                path: path.to_path_buf(),
                line,
                column,
                value,
            }
        })?;

        rows.push(raw.into_row(class, author));
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyFile(path.to_path_buf()));
    }

    Ok(rows)
}
