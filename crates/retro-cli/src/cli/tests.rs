//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_network() {
    match parse(&["retro", "network"]) {
        CliCommand::Network => {}
        _ => panic!("expected Network"),
    }
}

#[test]
fn cli_parse_keystore() {
    match parse(&["retro", "keystore"]) {
        CliCommand::Keystore { entries } => assert!(entries.is_none()),
        _ => panic!("expected Keystore"),
    }
}

#[test]
fn cli_parse_keystore_entries() {
    match parse(&["retro", "keystore", "--entries", "12"]) {
        CliCommand::Keystore { entries } => assert_eq!(entries, Some(12)),
        _ => panic!("expected Keystore with --entries"),
    }
}
