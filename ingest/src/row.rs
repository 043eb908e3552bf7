/// Author label used when a source doesn't name one
pub const DEFAULT_AUTHOR: &str = "me";

/// Column order of a combined table
pub const COLUMNS: [&str; 5] = ["n", "addAll", "allMatches", "Class", "Author"];

/// One measurement: the input size, the cost of both operations and the labels
/// describing where the measurement came from
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub n: f64,
    pub add_all: f64,
    pub all_matches: f64,
    pub class: String,
    pub author: String,
}

impl BenchmarkRow {
    pub fn new(n: f64, add_all: f64, all_matches: f64, class: &str, author: &str) -> Self {
        Self {
            n,
            add_all,
            all_matches,
            class: class.to_owned(),
            author: author.to_owned(),
        }
    }

    /// render all five fields in `COLUMNS` order
    pub fn cells(&self) -> [String; 5] {
        [
            self.n.to_string(),
            self.add_all.to_string(),
            self.all_matches.to_string(),
            self.class.clone(),
            self.author.clone(),
        ]
    }
}

/// Header-less record as stored on disk, fields are assigned by position
#[derive(Debug)]
pub(crate) struct RawRecord {
    pub n: f64,
    pub add_all: f64,
    pub all_matches: f64,
}

impl RawRecord {
    /// parse the three positional fields, returning the offending column on failure
    pub fn parse(record: &csv::StringRecord) -> Result<Self, (&'static str, String)> {
        let field = |index: usize| -> Result<f64, (&'static str, String)> {
            let value = record.get(index).unwrap_or_default();

            value
                .parse::<f64>()
                .map_err(|_| (COLUMNS[index], value.to_owned()))
        };

        Ok(Self {
            n: field(0)?,
            add_all: field(1)?,
            all_matches: field(2)?,
        })
    }

    pub fn into_row(self, class: &str, author: &str) -> BenchmarkRow {
        BenchmarkRow::new(self.n, self.add_all, self.all_matches, class, author)
    }
}
