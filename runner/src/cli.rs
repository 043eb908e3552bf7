use crate::config::{ConfigErrors, SourceConfig};
use benchview_analysis::View;
use clap::{ArgAction, ArgMatches, Parser};
use std::path::PathBuf;

/// Aggregate per-class benchmark CSVs of one or more authors and chart them
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML file with sources and chart options, command line options take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory of result files named <Class>.<anything>, may be repeated
    #[arg(short, long = "source", value_name = "DIR")]
    pub sources: Vec<PathBuf>,

    /// Author label of the preceding --source [default: me]
    #[arg(short, long = "author", value_name = "LABEL")]
    pub authors: Vec<String>,

    /// Chart to render: by-class or by-author [default: by-class]
    #[arg(long, value_name = "VIEW")]
    pub view: Option<View>,

    /// Where to write the SVG chart [default: benchview.svg]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only read files matching this pattern, e.g., "*.csv"
    #[arg(short, long, value_name = "PATTERN")]
    pub glob: Option<String>,

    /// Read files in name order instead of directory listing order
    #[arg(long)]
    pub sorted: bool,

    /// Only print the combined table
    #[arg(long)]
    pub no_render: bool,

    /// Increase log verbosity, RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Sources given on the command line, in order, with their author labels
    ///
    /// Every `--author` belongs to the closest `--source` in front of it.
    pub fn paired_sources(&self, matches: &ArgMatches) -> Result<Vec<SourceConfig>, ConfigErrors> {
        let source_indices = matches
            .indices_of("sources")
            .map(|indices| indices.collect::<Vec<_>>())
            .unwrap_or_default();
        let author_indices = matches
            .indices_of("authors")
            .map(|indices| indices.collect::<Vec<_>>())
            .unwrap_or_default();

        pair_authors(
            &self.sources,
            &source_indices,
            &self.authors,
            &author_indices,
        )
    }
}

pub fn pair_authors(
    sources: &[PathBuf],
    source_indices: &[usize],
    authors: &[String],
    author_indices: &[usize],
) -> Result<Vec<SourceConfig>, ConfigErrors> {
    let mut paired = sources.iter().map(SourceConfig::new).collect::<Vec<_>>();
    let mut labelled = vec![false; paired.len()];

    for (author, &author_index) in authors.iter().zip(author_indices) {
        let owner = source_indices
            .iter()
            .rposition(|&source_index| source_index < author_index);

        match owner {
            Some(owner) if !labelled[owner] => {
                paired[owner].author = author.clone();
                labelled[owner] = true;
            }
            _ => return Err(ConfigErrors::DanglingAuthor(author.clone())),
        }
    }

    Ok(paired)
}
