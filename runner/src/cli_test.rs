use crate::{
    cli::{pair_authors, Cli},
    config::ConfigErrors,
};
use benchview_analysis::View;
use clap::{CommandFactory, FromArgMatches};
use std::path::PathBuf;

fn parse(args: &[&str]) -> (Cli, clap::ArgMatches) {
    let matches = Cli::command().try_get_matches_from(args).unwrap();
    let cli = Cli::from_arg_matches(&matches).unwrap();

    (cli, matches)
}

#[test]
pub fn authors_attach_to_preceding_source() {
    let (cli, matches) = parse(&[
        "benchview",
        "--source",
        "results/mine",
        "--source",
        "results/hhc",
        "--author",
        "hhc",
        "-s",
        "results/other",
    ]);

    let sources = cli.paired_sources(&matches).unwrap();

    assert_eq!(sources.len(), 3);
    assert_eq!(sources[0].path, PathBuf::from("results/mine"));
    assert_eq!(sources[0].author, "me");
    assert_eq!(sources[1].path, PathBuf::from("results/hhc"));
    assert_eq!(sources[1].author, "hhc");
    assert_eq!(sources[2].author, "me");
}

#[test]
pub fn author_before_any_source() {
    let (cli, matches) = parse(&["benchview", "--author", "hhc", "--source", "results"]);

    assert!(matches!(
        cli.paired_sources(&matches),
        Err(ConfigErrors::DanglingAuthor(author)) if author == "hhc"
    ));
}

#[test]
pub fn two_authors_for_one_source() {
    let (cli, matches) = parse(&[
        "benchview",
        "--source=results",
        "--author=me",
        "--author=hhc",
    ]);

    assert!(matches!(
        cli.paired_sources(&matches),
        Err(ConfigErrors::DanglingAuthor(author)) if author == "hhc"
    ));
}

#[test]
pub fn pair_by_position() {
    let sources = vec![PathBuf::from("a"), PathBuf::from("b")];
    let authors = vec!["x".to_owned()];

    let paired = pair_authors(&sources, &[1, 5], &authors, &[7]).unwrap();

    assert_eq!(paired[0].author, "me");
    assert_eq!(paired[1].author, "x");
}

#[test]
pub fn parse_options() {
    let (cli, _) = parse(&[
        "benchview",
        "--view",
        "by-author",
        "--output",
        "chart.svg",
        "--glob",
        "*.csv",
        "--sorted",
        "--no-render",
        "-vv",
    ]);

    assert_eq!(cli.view, Some(View::ByAuthor));
    assert_eq!(cli.output, Some(PathBuf::from("chart.svg")));
    assert_eq!(cli.glob.as_deref(), Some("*.csv"));
    assert!(cli.sorted);
    assert!(cli.no_render);
    assert_eq!(cli.verbose, 2);
}

#[test]
pub fn reject_unknown_view() {
    assert!(Cli::command()
        .try_get_matches_from(["benchview", "--view", "by-colour"])
        .is_err());
}
