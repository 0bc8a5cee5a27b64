//! Command-line argument definitions

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Argument parser for the `regionkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("RegionKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bounding box geometry and deterministic image tiling")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("segment")
                .short('s')
                .long("segment")
                .help("Cut the image into a grid of tiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("crop")
                .short('c')
                .long("crop")
                .help("Crop the image by each --bbox")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for tiles or crops")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("bbox")
                .long("bbox")
                .help("Bounding box as x,y,width,height (repeatable)")
                .value_name("BBOX")
                .action(ArgAction::Append)
                .required(false),
        )
        .arg(
            Arg::new("tile-width")
                .long("tile-width")
                .help("Tile width in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("tile-height")
                .long("tile-height")
                .help("Tile height in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .help("Tile order (horizontal or vertical)")
                .value_name("ORDER")
                .required(false),
        )
        .arg(
            Arg::new("expand")
                .long("expand")
                .help("Expand boxes before cropping (default proportion from config)")
                .value_name("PROPORTION")
                .num_args(0..=1)
                .default_missing_value("")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write a log of the run to this file")
                .value_name("FILE")
                .required(false),
        )
}
