//! Convert 24-bit truecolor terminal text to the 16-color ANSI palette.
//!
//! Each `ESC[38;2;R;G;Bm` sequence is replaced by the escape code of the
//! nearest palette color, and runs of same-colored glyphs can be collapsed
//! to shorten the output.

pub mod cli;
pub mod config;
pub mod convert;
pub mod logging;
pub mod palette;

pub use config::PipelineConfig;
pub use convert::{MapColors, Pipeline, PruneRepetitions, Transform};
pub use palette::{ColorName, Palette, PaletteError, Rgb};
