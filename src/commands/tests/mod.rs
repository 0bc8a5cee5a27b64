
use clap::ArgMatches;

use crate::commands::build_cli;

/// Parses `args` as if given after the binary name
pub(crate) fn cli_matches(args: &[&str]) -> ArgMatches {
    build_cli()
        .try_get_matches_from(std::iter::once("regionkit").chain(args.iter().copied()))
        .unwrap()
}
