//! Tests for parse, analyze and completions subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_no_subcommand() {
    assert!(parse(&["svlink"]).is_none());
}

#[test]
fn cli_parse_with_url() {
    match parse(&["svlink", "parse", "https://www.google.com/maps/@1,2/data=!1sX"]) {
        Some(CliCommand::Parse { url, compact }) => {
            assert_eq!(
                url.as_deref(),
                Some("https://www.google.com/maps/@1,2/data=!1sX")
            );
            assert!(!compact);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_interactive() {
    match parse(&["svlink", "parse"]) {
        Some(CliCommand::Parse { url, compact }) => {
            assert!(url.is_none());
            assert!(!compact);
        }
        _ => panic!("expected Parse without url"),
    }
}

#[test]
fn cli_parse_compact() {
    match parse(&["svlink", "parse", "--compact"]) {
        Some(CliCommand::Parse { compact, .. }) => assert!(compact),
        _ => panic!("expected Parse with --compact"),
    }
}

#[test]
fn cli_parse_analyze() {
    match parse(&["svlink", "analyze", "https://example.com/@1,2"]) {
        Some(CliCommand::Analyze { url }) => assert_eq!(url, "https://example.com/@1,2"),
        _ => panic!("expected Analyze"),
    }
}

#[test]
fn cli_parse_analyze_requires_url() {
    assert!(Cli::try_parse_from(["svlink", "analyze"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["svlink", "completions", "bash"]) {
        Some(CliCommand::Completions { shell }) => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_unknown_shell() {
    assert!(Cli::try_parse_from(["svlink", "completions", "cmd.exe"]).is_err());
}
