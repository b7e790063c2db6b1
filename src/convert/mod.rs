//! Truecolor conversion pipeline.
//!
//! The pipeline rewrites the whole input through a fixed sequence of
//! transforms:
//!
//! 1. [`MapColors`] replaces each truecolor foreground sequence with the
//!    nearest of the 16 palette colors.
//! 2. [`PruneRepetitions`] (optional) collapses consecutive same-color
//!    single-glyph segments.
//!
//! # Module Structure
//!
//! - [`scanner`] - Truecolor escape sequence recognition
//! - [`mapper`] - Nearest-color substitution
//! - [`prune`] - Repetition pruning

pub mod scanner;

mod mapper;
mod prune;

pub use mapper::MapColors;
pub use prune::PruneRepetitions;

use crate::config::PipelineConfig;
use crate::palette::Palette;

/// A text rewriting stage.
pub trait Transform {
    /// Rewrite `text` in place.
    fn transform(&mut self, text: &mut String);
}

/// Runs the configured stages over a text blob.
pub struct Pipeline<'a> {
    palette: &'a Palette,
    config: PipelineConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(palette: &'a Palette, config: PipelineConfig) -> Self {
        Self { palette, config }
    }

    /// Convert `input`, returning the rewritten text.
    pub fn run(&self, input: &str) -> String {
        let mut text = input.to_string();
        for mut stage in self.stages() {
            stage.transform(&mut text);
        }
        text
    }

    fn stages(&self) -> Vec<Box<dyn Transform + 'a>> {
        let mut stages: Vec<Box<dyn Transform + 'a>> = vec![Box::new(MapColors::new(
            self.palette,
            self.config.reset_per_char,
        ))];
        if self.config.prune {
            stages.push(Box::new(PruneRepetitions::new()));
        }
        stages
    }
}
