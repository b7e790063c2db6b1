//! Command-line interface definition.
//!
//! Lives in the library so the xtask crate can render a man page from it.

use std::path::PathBuf;

use clap::Parser;

use crate::config::PipelineConfig;

/// Convert truecolor escape sequences on stdin to the 16-color ANSI palette.
#[derive(Parser, Debug)]
#[command(name = "rgb2ansi", version)]
pub struct Cli {
    /// Path to custom palette JSON file
    #[arg(long, value_name = "PATH")]
    pub palette: Option<PathBuf>,

    /// Disable pruning of repeated ANSI codes, which compresses the output
    /// when it has consecutive same-colored glyphs. Needed if the input is
    /// not a single character per color code.
    #[arg(long)]
    pub no_pruning: bool,

    /// Do not reset the color after each character. Might produce wrong
    /// colors in the output.
    #[arg(long)]
    pub no_reset: bool,

    /// Print the active palette as JSON and exit
    #[arg(long)]
    pub print_palette: bool,
}

impl Cli {
    /// Pipeline settings selected by the flags.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            reset_per_char: !self.no_reset,
            prune: !self.no_pruning,
        }
    }
}
