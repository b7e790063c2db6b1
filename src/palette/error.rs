//! Palette loading diagnostics.

use std::path::PathBuf;

/// Problems found while loading a palette file.
///
/// None of these are fatal: a file-level error falls back to the default
/// palette and an entry-level error keeps the default for that entry.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Error loading palette file {}: {source}. Falling back to default.", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading palette file {}: {source}. Falling back to default.", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error loading palette file {}: expected a JSON object. Falling back to default.", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("'{name}' is not a valid color, ignoring")]
    InvalidEntry { name: String },
}

impl PaletteError {
    /// Whether the whole file was rejected (as opposed to a single entry).
    pub fn is_file_error(&self) -> bool {
        !matches!(self, Self::InvalidEntry { .. })
    }
}
