use crate::{IngestError, DEFAULT_AUTHOR};
use globset::GlobMatcher;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Derive the class label of a result file: everything before the first '.'
///
/// `ArrayList.csv` and `ArrayList.2022.csv` both yield `ArrayList`. Names
/// without a '.' or with nothing in front of it (e.g., `.DS_Store`) are
/// rejected instead of producing an empty or accidental label.
pub fn class_label(file_name: &OsStr) -> Result<String, IngestError> {
    let name = file_name
        .to_str()
        .ok_or_else(|| IngestError::NonUnicodeFileName(PathBuf::from(file_name)))?;

    match name.split_once('.') {
        None => Err(IngestError::MissingClassSeparator(name.to_owned())),
        Some(("", _)) => Err(IngestError::EmptyClassLabel(name.to_owned())),
        Some((class, _)) => Ok(class.to_owned()),
    }
}

/// A directory of per-class result files together with the label of whoever
/// produced them
#[derive(Debug, Clone)]
pub struct Source {
    pub path: PathBuf,
    pub author: String,
    // only entries with a matching file name are read, everything is read if None
    pub filter: Option<GlobMatcher>,
    // read entries by file name instead of the order the OS lists them in
    pub sorted: bool,
}

impl Source {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            author: DEFAULT_AUTHOR.to_owned(),
            filter: None,
            sorted: false,
        }
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_owned();
        self
    }

    pub fn filter(mut self, filter: Option<GlobMatcher>) -> Self {
        self.filter = filter;
        self
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// check a file name against the optional filter
    pub fn accepts(&self, file_name: &OsStr) -> bool {
        self.filter
            .as_ref()
            .map_or(true, |matcher| matcher.is_match(file_name))
    }
}
