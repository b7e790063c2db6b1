//! The 16-color ANSI palette.
//!
//! Contains the fixed bindings every stage relies on:
//! - [`ColorName`]: the 16 palette identifiers in canonical order
//! - [`Rgb`]: a 24-bit color triple
//! - [`Palette`]: the active name → RGB mapping (default or user-overridden)
//!
//! Each name is bound one-to-one to an SGR foreground number (30–37 for the
//! standard colors, 90–97 for the bright ones) and to its full escape string.

mod error;
mod loader;

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub use error::PaletteError;
pub use loader::{load, validate};

/// SGR reset sequence.
pub const RESET: &str = "\x1b[0m";

/// One of the 16 named ANSI foreground colors.
///
/// Declaration order is the canonical order: it decides nearest-color ties
/// and the order of the pruning passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ColorName {
    /// All names in canonical order.
    pub const ALL: [ColorName; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Position in [`ColorName::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name as written in palette files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
        }
    }

    /// Look up a name as written in palette files.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    /// SGR foreground number.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }

    /// Full escape sequence selecting this foreground color.
    pub fn escape(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::BrightBlack => "\x1b[90m",
            Self::BrightRed => "\x1b[91m",
            Self::BrightGreen => "\x1b[92m",
            Self::BrightYellow => "\x1b[93m",
            Self::BrightBlue => "\x1b[94m",
            Self::BrightMagenta => "\x1b[95m",
            Self::BrightCyan => "\x1b[96m",
            Self::BrightWhite => "\x1b[97m",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance to an arbitrary triple.
    ///
    /// Components of escape sequences are unbounded in the input, so the
    /// other side is taken as `u32` and the sum as `u128`.
    pub fn distance_squared(&self, r: u32, g: u32, b: u32) -> u128 {
        let d = |a: u8, b: u32| {
            let diff = i128::from(b) - i128::from(a);
            (diff * diff) as u128
        };
        d(self.r, r) + d(self.g, g) + d(self.b, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Calibrated default RGB values, indexed by [`ColorName::index`].
const DEFAULT_RGB: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(181, 5, 5),
    Rgb::new(15, 181, 15),
    Rgb::new(176, 87, 31),
    Rgb::new(21, 31, 178),
    Rgb::new(164, 40, 154),
    Rgb::new(79, 184, 204),
    Rgb::new(191, 191, 191),
    Rgb::new(73, 73, 73),
    Rgb::new(255, 94, 90),
    Rgb::new(90, 255, 92),
    Rgb::new(232, 255, 82),
    Rgb::new(66, 101, 216),
    Rgb::new(241, 90, 255),
    Rgb::new(58, 242, 255),
    Rgb::new(255, 255, 255),
];

/// Mapping of all 16 color names to RGB values.
///
/// Always binds exactly the 16 names; entries can be replaced but never
/// added or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 16],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_RGB,
        }
    }
}

impl Palette {
    /// RGB value bound to `name`.
    pub fn get(&self, name: ColorName) -> Rgb {
        self.colors[name.index()]
    }

    /// Rebind `name` to `rgb`.
    pub fn set(&mut self, name: ColorName, rgb: Rgb) {
        self.colors[name.index()] = rgb;
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorName, Rgb)> + '_ {
        ColorName::ALL.iter().map(move |&name| (name, self.get(name)))
    }

    /// Palette entry closest to `(r, g, b)` by Euclidean distance.
    ///
    /// The first entry in canonical order wins ties. The escape scanner
    /// saturates oversized components at `u32::MAX`, so inputs beyond that
    /// are compared as if they were `u32::MAX`.
    pub fn nearest(&self, r: u32, g: u32, b: u32) -> ColorName {
        let mut closest = ColorName::Black;
        let mut min_distance = u128::MAX;
        for (name, rgb) in self.iter() {
            let distance = rgb.distance_squared(r, g, b);
            if distance < min_distance {
                min_distance = distance;
                closest = name;
            }
        }
        closest
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ColorName::ALL.len()))?;
        for (name, rgb) in self.iter() {
            map.serialize_entry(name.as_str(), &[rgb.r, rgb.g, rgb.b])?;
        }
        map.end()
    }
}
