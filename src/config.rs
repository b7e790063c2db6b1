//! Configuration for the conversion pipeline.

/// Which stages run and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Consume one glyph after each color and reset after it
    pub reset_per_char: bool,
    /// Collapse runs of same-color glyphs
    pub prune: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reset_per_char: true,
            prune: true,
        }
    }
}
