//! Same-color repetition pruning.
//!
//! Mapped output colors every glyph on its own (`code, glyph, reset`). When
//! consecutive glyphs share a color the repeated codes are redundant, so a
//! run of two or more of them collapses to `code, glyphs..., reset`.

use super::scanner::glyph_at;
use super::Transform;
use crate::palette::{ColorName, RESET};

/// Collapses runs of single-glyph segments that share a color.
///
/// One pass per palette color, in canonical order. Each pass scans the text
/// left by the previous one, so the result depends on that order. Segments
/// holding more than one glyph are never merged.
#[derive(Debug, Default)]
pub struct PruneRepetitions {
    pruned_runs: usize,
}

impl PruneRepetitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runs collapsed so far.
    pub fn pruned_runs(&self) -> usize {
        self.pruned_runs
    }

    /// Run all 16 passes over `input`.
    pub fn prune(&mut self, input: &str) -> String {
        let mut text = input.to_string();
        for name in ColorName::ALL {
            if let Some(pruned) = self.prune_color(&text, name) {
                text = pruned;
            }
        }
        text
    }

    /// One left-to-right pass for a single color. Returns `None` when the
    /// pass found nothing to collapse.
    fn prune_color(&mut self, input: &str, name: ColorName) -> Option<String> {
        let code = name.escape();
        let mut result = String::with_capacity(input.len());
        let mut rest = input;
        let mut runs = 0;

        while let Some(start) = rest.find(code) {
            result.push_str(&rest[..start]);
            let candidate = &rest[start..];
            let (glyphs, consumed) = scan_run(candidate, code);

            if glyphs.len() >= 2 {
                result.push_str(code);
                result.extend(glyphs);
                result.push_str(RESET);
                rest = &candidate[consumed..];
                runs += 1;
            } else {
                result.push('\x1b');
                rest = &candidate[1..];
            }
        }

        if runs == 0 {
            return None;
        }
        result.push_str(rest);
        self.pruned_runs += runs;
        tracing::debug!(color = %name, runs, "pruned repeated color codes");
        Some(result)
    }
}

/// Greedily read `code, glyph, optional reset` segments from the start of
/// `input`. Returns the glyphs and the bytes they span.
fn scan_run(input: &str, code: &str) -> (Vec<char>, usize) {
    let mut glyphs = Vec::new();
    let mut pos = 0;

    while input[pos..].starts_with(code) {
        let after_code = pos + code.len();
        let Some(glyph) = glyph_at(&input[after_code..]) else {
            break;
        };
        let mut end = after_code + glyph.len_utf8();
        if input[end..].starts_with(RESET) {
            end += RESET.len();
        }
        glyphs.push(glyph);
        pos = end;
    }

    (glyphs, pos)
}

impl Transform for PruneRepetitions {
    fn transform(&mut self, text: &mut String) {
        *text = self.prune(text);
    }
}
