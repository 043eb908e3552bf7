mod cli;
mod config;

#[cfg(test)]
mod cli_test;

use benchview_analysis::{panels, render_svg, Layout, RenderError};
use benchview_ingest::{load_source, CombinedTable, IngestError};
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use cli::Cli;
use config::{ConfigErrors, RunConfig};
use std::{io::Write, process::ExitCode};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigErrors),
    #[error("Failed to load results: {0}")]
    Ingest(#[from] IngestError),
    #[error("Failed to render chart: {0}")]
    Render(#[from] RenderError),
    #[error("Failed to print table: {0}")]
    Output(#[from] std::io::Error),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    // stdout is reserved for the table
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// merge config file and command line, load every source in order, print the
/// combined table and render the selected view
pub fn run<W: Write>(
    cli: &Cli,
    matches: &ArgMatches,
    out: &mut W,
) -> Result<CombinedTable, RunError> {
    let mut config = match cli.config {
        Some(ref path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };
    config.merge_cli(cli, cli.paired_sources(matches)?);

    if config.preflight_checks() {
        return Err(ConfigErrors::PreflightFailed.into());
    }

    let sources = config.compile_sources().map_err(|errors| {
        for (path, error) in errors.iter() {
            error!(
                "Failed to compile glob for {}: {error}",
                path.to_string_lossy()
            );
        }

        ConfigErrors::InvalidGlobs(errors)
    })?;

    let table = sources.iter().try_fold(CombinedTable::new(), load_source)?;
    info!(
        "Combined {} rows of {} classes from {} sources",
        table.len(),
        table.classes().len(),
        sources.len()
    );

    writeln!(out, "{table}")?;

    if config.render {
        let panels = panels(&table, config.view);
        let layout = Layout::for_view(config.view, panels.len());

        render_svg(&panels, layout, &config.output)?;
    }

    Ok(table)
}

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(error) => error.exit(),
    };

    init_tracing(cli.verbose);

    match run(&cli, &matches, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            error!(error = ?error, "{error}");
            ExitCode::FAILURE
        }
    }
}
