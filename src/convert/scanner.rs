//! Truecolor escape sequence recognition.
//!
//! Recognizes `ESC[38;2;<r>;<g>;<b>m` with an explicit byte scan. Each
//! component is one or more ASCII digits; anything else (missing fields,
//! extra fields, a missing `m`) does not match and is left to pass through.

/// Prefix every truecolor foreground sequence starts with.
pub const TRUECOLOR_PREFIX: &str = "\x1b[38;2;";

/// A truecolor sequence found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrueColor {
    /// Components as written; digit strings beyond `u32` saturate.
    pub r: u32,
    pub g: u32,
    pub b: u32,
    /// Byte length of the whole sequence, `m` included.
    pub len: usize,
}

/// Parse a truecolor sequence at the very start of `input`.
pub fn parse_truecolor(input: &str) -> Option<TrueColor> {
    let bytes = input.as_bytes();
    if !input.starts_with(TRUECOLOR_PREFIX) {
        return None;
    }
    let mut pos = TRUECOLOR_PREFIX.len();

    let (r, next) = parse_component(bytes, pos)?;
    pos = expect(bytes, next, b';')?;
    let (g, next) = parse_component(bytes, pos)?;
    pos = expect(bytes, next, b';')?;
    let (b, next) = parse_component(bytes, pos)?;
    pos = expect(bytes, next, b'm')?;

    Some(TrueColor { r, g, b, len: pos })
}

/// Reads one or more decimal digits starting at `pos`.
fn parse_component(bytes: &[u8], pos: usize) -> Option<(u32, usize)> {
    let digits = bytes[pos..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let value = bytes[pos..pos + digits].iter().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    });
    Some((value, pos + digits))
}

fn expect(bytes: &[u8], pos: usize, byte: u8) -> Option<usize> {
    (bytes.get(pos) == Some(&byte)).then_some(pos + 1)
}

/// The single glyph a color applies to, in per-character mode.
///
/// Any character except a line feed qualifies.
pub fn glyph_at(input: &str) -> Option<char> {
    input.chars().next().filter(|&c| c != '\n')
}
