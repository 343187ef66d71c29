//! RGB color value type with hex parsing and formatting.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{input}'")]
pub struct ParseColorError {
    /// The rejected input, as given.
    pub input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// An immutable RGB triple with 8-bit channels.
///
/// Values compare bit-for-bit, so derived palettes can be asserted exactly.
/// [`Display`](fmt::Display) renders the `rgb(r, g, b)` form used in style
/// attributes; [`Rgb::to_hex`] renders the `#RRGGBB` form used in theme
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black, the dark anchor of lo-hi ramps.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white, the light anchor of lo-hi ramps.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `#RGB`, case-insensitive.
    ///
    /// The shorthand form expands each digit, so `#F3A` is `#FF33AA`.
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let hex = input
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::new(input))?;
        // All-hexdigit up front; from_str_radix alone would let sign
        // prefixes like "#+12345" through.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(input));
        }
        match hex.len() {
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError::new(input))
                };
                Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| ParseColorError::new(input))
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(ParseColorError::new(input)),
        }
    }

    /// Formats as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::from_hex("#87AFDF"), Ok(Rgb::new(0x87, 0xAF, 0xDF)));
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::BLACK));
        assert_eq!(Rgb::from_hex("#ffffff"), Ok(Rgb::WHITE));
    }

    #[test]
    fn parses_shorthand_hex() {
        // Each digit expands to a full channel: 0xF * 17 = 255.
        assert_eq!(Rgb::from_hex("#fff"), Ok(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#F3A"), Ok(Rgb::new(0xFF, 0x33, 0xAA)));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Rgb::from_hex("#aF12Cd"), Rgb::from_hex("#AF12CD"));
    }

    #[test]
    fn rejects_malformed_strings() {
        for input in [
            "", "#", "87AFDF", "#87AFD", "#87AFDF0", "#G7AFDF", "#+12345", "#ab", "#é3A1B2",
        ] {
            let err = Rgb::from_hex(input).unwrap_err();
            assert_eq!(err.input, input, "input '{input}' should be rejected whole");
        }
    }

    #[test]
    fn hex_formatting_round_trips() {
        for rgb in [Rgb::new(0, 0, 0), Rgb::new(0x1D, 0x1F, 0x21), Rgb::new(255, 255, 255)] {
            assert_eq!(Rgb::from_hex(&rgb.to_hex()), Ok(rgb));
        }
        assert_eq!(Rgb::new(0x0A, 0x0F, 0x14).to_hex(), "#0A0F14");
    }

    #[test]
    fn display_uses_rgb_form() {
        assert_eq!(Rgb::new(95, 129, 157).to_string(), "rgb(95, 129, 157)");
    }

    #[test]
    fn from_str_matches_from_hex() {
        let parsed: Rgb = "#5F819D".parse().expect("valid hex");
        assert_eq!(parsed, Rgb::new(0x5F, 0x81, 0x9D));
        assert!("blue".parse::<Rgb>().is_err());
    }
}
