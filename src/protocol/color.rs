//! Hex colors and the canvas palette.
//!
//! A [`Color`] is always a `#RRGGBB` string. The caller's casing is kept so
//! the wire frame carries exactly what the caller supplied.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// Colors accepted by the canvas server, in palette order.
pub const PALETTE: [&str; 32] = [
    // Dark burgundy to green-teal
    "#6D001A", "#BE0039", "#FF4500", "#FFA800", "#FFD635", "#FFF8B8", "#FFFFCC", "#00A368",
    // Light green to purple-blue
    "#00CC78", "#00756F", "#009EAA", "#00CCC0", "#2450A4", "#3690EA", "#51E9F4", "#493AC1",
    // Lavender-blue to light pink
    "#6A5CFF", "#811E9F", "#B44AC0", "#E4ABFF", "#DE107F", "#FF3881", "#FF99AA", "#FFCCDD",
    // Brown to white
    "#6D482F", "#9C6926", "#FFB470", "#000000", "#515252", "#898D90", "#D4D7D9", "#FFFFFF",
];

// ============================================================================
// Color
// ============================================================================

/// A validated `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parses a color, rejecting anything that is not `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the value is malformed.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if HEX_COLOR.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(Error::invalid_color(value))
        }
    }

    /// Returns the color exactly as supplied.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the server palette contains this color.
    ///
    /// Comparison is exact, as on the server: `#ff4500` is not `#FF4500`.
    #[must_use]
    pub fn in_palette(&self) -> bool {
        PALETTE.contains(&self.as_str())
    }

    /// Returns `self` if it is a palette color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColorNotInPalette`] otherwise.
    pub fn require_palette(&self) -> Result<&Self> {
        if self.in_palette() {
            Ok(self)
        } else {
            Err(Error::color_not_in_palette(self.0.clone()))
        }
    }
}

impl Default for Color {
    /// `#f4f4f4`, the color of the stock pixel event.
    fn default() -> Self {
        Self("#f4f4f4".to_string())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
