use crate::cli::Cli;
use benchview_analysis::View;
use benchview_ingest::{Source, DEFAULT_AUTHOR};
use globset::GlobBuilder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path, path::PathBuf};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ConfigErrors {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Globs were invalid")]
    InvalidGlobs(Vec<(PathBuf, globset::Error)>),
    #[error("--author {0} has no --source in front of it to attach to")]
    DanglingAuthor(String),
    #[error("Preflight checks failed")]
    PreflightFailed,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    // directories of result files, loaded in this order
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub view: View,
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
    // read each directory by file name instead of the OS listing order
    #[serde(default)]
    pub sorted: bool,
    #[serde(default = "default_render")]
    pub render: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    #[serde(alias = "dir")]
    pub path: PathBuf,
    #[serde(default = "default_author")]
    pub author: String,
    // only read files whose name matches, e.g., "*.csv"
    #[serde(default)]
    pub glob: Option<String>,
}

impl SourceConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            author: default_author(),
            glob: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            view: View::default(),
            output: default_output_path(),
            sorted: false,
            render: default_render(),
        }
    }
}

impl RunConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigErrors> {
        let content = fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigErrors> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// apply command line options on top of the file config, command line
    /// sources are loaded after the ones from the file
    pub fn merge_cli(&mut self, cli: &Cli, sources: Vec<SourceConfig>) {
        self.sources.extend(sources);

        if let Some(ref glob) = cli.glob {
            self.sources
                .iter_mut()
                .filter(|source| source.glob.is_none())
                .for_each(|source| source.glob = Some(glob.clone()));
        }
        if let Some(view) = cli.view {
            self.view = view;
        }
        if let Some(ref output) = cli.output {
            self.output = output.clone();
        }
        self.sorted |= cli.sorted;
        self.render &= !cli.no_render;
    }

    /// Compile the glob filters and turn every source into a loadable `Source`
    pub fn compile_sources(&self) -> Result<Vec<Source>, Vec<(PathBuf, globset::Error)>> {
        let mut errors = Vec::new();
        let mut sources = Vec::new();

        for config in self.sources.iter() {
            let filter = match config.glob {
                Some(ref glob) => match GlobBuilder::new(glob)
                    .literal_separator(true)
                    .build()
                    .map(|glob| glob.compile_matcher())
                {
                    Ok(matcher) => Some(matcher),
                    Err(error) => {
                        errors.push((config.path.clone(), error));
                        continue;
                    }
                },
                None => None,
            };

            sources.push(
                Source::new(&config.path)
                    .author(&config.author)
                    .filter(filter)
                    .sorted(self.sorted),
            );
        }

        if errors.is_empty() {
            Ok(sources)
        } else {
            Err(errors)
        }
    }

    /// Check the merged config before anything is loaded, returns whether an
    /// error was found
    pub fn preflight_checks(&self) -> bool {
        // report every problem at once instead of one per run
        let mut contains_error = false;

        if self.sources.is_empty() {
            error!(
                "No source was defined, use --source <DIR> or 'sources' in the config file"
            );
            contains_error = true;
        }

        for (index, source) in self.sources.iter().enumerate() {
            if !source.path.is_dir() {
                error!(
                    "sources.{index}.path ({}) is either not a directory or not found",
                    source.path.to_string_lossy()
                );
                contains_error = true;
            }

            // labels are used verbatim, only a blank one is rejected
            if source.author.trim().is_empty() {
                error!("sources.{index}.author must not be empty");
                contains_error = true;
            } else if source.author.trim().len() != source.author.len() {
                warn!(
                    "sources.{index}.author '{}' has surrounding whitespace, it is kept as is",
                    source.author
                );
            }
        }

        // loading a directory twice is allowed, but duplicates every row
        let mut counts: BTreeMap<(&PathBuf, &String), usize> = BTreeMap::new();
        for source in self.sources.iter() {
            *counts.entry((&source.path, &source.author)).or_default() += 1;
        }
        for ((path, author), count) in counts.into_iter().filter(|(_, count)| *count > 1) {
            warn!(
                "{} is loaded {count} times for {author}, its rows will be duplicated",
                path.to_string_lossy()
            );
        }

        if self.render {
            let is_svg = self
                .output
                .extension()
                .is_some_and(|extension| extension.eq_ignore_ascii_case("svg"));

            if !is_svg {
                warn!(
                    "output {} doesn't end in .svg, the chart is written as SVG regardless",
                    self.output.to_string_lossy()
                );
            }
        }

        let authors = self
            .sources
            .iter()
            .map(|source| &source.author)
            .unique()
            .count();
        if self.view == View::ByAuthor && authors < 2 {
            warn!(
                "The by-author view compares authors, but only {authors} author was given"
            );
        }

        contains_error
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("benchview.svg")
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_owned()
}

fn default_render() -> bool {
    true
}
