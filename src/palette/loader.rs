//! Palette override files.
//!
//! A palette file is a JSON object mapping color names to `[r, g, b]`
//! arrays. Entries are validated one at a time against the default palette;
//! anything unusable is reported and skipped.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::{ColorName, Palette, PaletteError, Rgb};

/// Load the active palette.
///
/// Without a path this is the default palette. With a path, the file's
/// entries override the defaults; problems are returned as diagnostics
/// alongside the palette that was built anyway.
pub fn load(path: Option<&Path>) -> (Palette, Vec<PaletteError>) {
    let Some(path) = path else {
        tracing::debug!("using default palette");
        return (Palette::default(), Vec::new());
    };

    match read_object(path) {
        Ok(user) => {
            let (palette, diagnostics) = validate(&user);
            tracing::debug!(
                path = %path.display(),
                rejected = diagnostics.len(),
                "loaded palette file"
            );
            (palette, diagnostics)
        }
        Err(e) => (Palette::default(), vec![e]),
    }
}

fn read_object(path: &Path) -> Result<Map<String, Value>, PaletteError> {
    let content = fs::read_to_string(path).map_err(|source| PaletteError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| PaletteError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PaletteError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Apply user entries over the default palette.
///
/// Entries are processed in the order they appear. Unknown names and values
/// that are not three integers in `0..=255` are rejected.
pub fn validate(user: &Map<String, Value>) -> (Palette, Vec<PaletteError>) {
    let mut palette = Palette::default();
    let mut diagnostics = Vec::new();

    for (key, value) in user {
        match (ColorName::from_name(key), parse_rgb(value)) {
            (Some(name), Some(rgb)) => palette.set(name, rgb),
            _ => diagnostics.push(PaletteError::InvalidEntry { name: key.clone() }),
        }
    }

    (palette, diagnostics)
}

fn parse_rgb(value: &Value) -> Option<Rgb> {
    let items = value.as_array()?;
    if items.len() != 3 {
        return None;
    }
    let mut channels = [0u8; 3];
    for (channel, item) in channels.iter_mut().zip(items) {
        *channel = u8::try_from(item.as_u64()?).ok()?;
    }
    Some(Rgb::from(channels))
}
