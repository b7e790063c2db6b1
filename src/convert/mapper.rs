//! Truecolor to 16-color substitution.

use super::scanner::{glyph_at, parse_truecolor, TRUECOLOR_PREFIX};
use super::Transform;
use crate::palette::{Palette, RESET};

/// Replaces truecolor foreground sequences with the nearest palette color.
///
/// In per-character mode each sequence must be followed by one glyph (not a
/// line feed); the output is the palette code, the glyph, then a reset.
/// Sequences without a glyph are left untouched in that mode. Without
/// resets every sequence is replaced by the palette code alone.
pub struct MapColors<'a> {
    palette: &'a Palette,
    reset_per_char: bool,
    mapped_count: usize,
}

impl<'a> MapColors<'a> {
    /// Create a mapper over `palette`.
    pub fn new(palette: &'a Palette, reset_per_char: bool) -> Self {
        Self {
            palette,
            reset_per_char,
            mapped_count: 0,
        }
    }

    /// Number of sequences replaced so far.
    pub fn mapped_count(&self) -> usize {
        self.mapped_count
    }

    /// Map `input` in a single left-to-right scan.
    pub fn map(&mut self, input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find(TRUECOLOR_PREFIX) {
            result.push_str(&rest[..start]);
            let candidate = &rest[start..];

            match self.substitute(candidate, &mut result) {
                Some(consumed) => rest = &candidate[consumed..],
                None => {
                    // Resume right after the ESC so the next search can
                    // start inside this failed candidate.
                    result.push('\x1b');
                    rest = &candidate[1..];
                }
            }
        }
        result.push_str(rest);
        result
    }

    /// Write the replacement for a sequence at the start of `candidate`,
    /// returning how many bytes it consumed.
    fn substitute(&mut self, candidate: &str, out: &mut String) -> Option<usize> {
        let tc = parse_truecolor(candidate)?;
        let name = self.palette.nearest(tc.r, tc.g, tc.b);

        let consumed = if self.reset_per_char {
            let glyph = glyph_at(&candidate[tc.len..])?;
            out.push_str(name.escape());
            out.push(glyph);
            out.push_str(RESET);
            tc.len + glyph.len_utf8()
        } else {
            out.push_str(name.escape());
            tc.len
        };

        self.mapped_count += 1;
        Some(consumed)
    }
}

impl Transform for MapColors<'_> {
    fn transform(&mut self, text: &mut String) {
        *text = self.map(text);
        tracing::debug!(mapped = self.mapped_count, "mapped truecolor sequences");
    }
}
