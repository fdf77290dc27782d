use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{EngineError, Result};

lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// Literal used by the persisted cell format for a transparent background.
pub const TRANSPARENT: &str = "transparent";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` (the leading `#` is optional, case insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHexColor`] for anything else.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidHexColor { value: hex.to_string() };
        let Some(cap) = HEX_COLOR_REGEX.captures(hex.trim()) else {
            return Err(invalid());
        };
        let (_, [r, g, b]) = cap.extract();
        let r = u8::from_str_radix(r, 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(g, 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(b, 16).map_err(|_| invalid())?;
        Ok(Color::new(r, g, b))
    }

    /// Channel-wise linear interpolation, `t` clamped to `0..=1`.
    /// `t == 0` yields `self` and `t == 1` yields `other` exactly.
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8 };
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(value: Color) -> (u8, u8, u8) {
        (value.r, value.g, value.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::new(value[0], value[1], value[2])
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for an optional color that is written as `"transparent"` when absent.
pub mod transparent_color {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Color, TRANSPARENT};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error> {
        match color {
            Some(c) => serializer.serialize_str(&c.to_hex()),
            None => serializer.serialize_str(TRANSPARENT),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Color>, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.eq_ignore_ascii_case(TRANSPARENT) || s.is_empty() {
            return Ok(None);
        }
        Color::from_hex(&s).map(Some).map_err(serde::de::Error::custom)
    }
}
