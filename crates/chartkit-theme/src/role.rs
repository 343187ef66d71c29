//! Semantic color roles shared by every theme.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// The ten semantic roles a theme table assigns colors to.
///
/// Roles are the vocabulary chart code uses to ask for colors without
/// naming concrete values; every theme supplies all ten. The declaration
/// order is the canonical table order used by [`ColorRole::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Black,
    Blue,
    Cyan,
    Foreground,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl ColorRole {
    /// Every role, in canonical table order.
    pub const ALL: [ColorRole; 10] = [
        ColorRole::Background,
        ColorRole::Black,
        ColorRole::Blue,
        ColorRole::Cyan,
        ColorRole::Foreground,
        ColorRole::Green,
        ColorRole::Magenta,
        ColorRole::Red,
        ColorRole::White,
        ColorRole::Yellow,
    ];

    /// Number of roles in a complete theme table.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this role in canonical table order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The role's lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Black => "black",
            ColorRole::Blue => "blue",
            ColorRole::Cyan => "cyan",
            ColorRole::Foreground => "foreground",
            ColorRole::Green => "green",
            ColorRole::Magenta => "magenta",
            ColorRole::Red => "red",
            ColorRole::White => "white",
            ColorRole::Yellow => "yellow",
        }
    }

    /// Looks up a role by canonical position.
    pub const fn from_index(index: usize) -> Option<ColorRole> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// All role names in canonical order.
    pub fn names() -> [&'static str; Self::COUNT] {
        Self::ALL.map(Self::name)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(ColorRole::Background),
            "black" => Ok(ColorRole::Black),
            "blue" => Ok(ColorRole::Blue),
            "cyan" => Ok(ColorRole::Cyan),
            "foreground" => Ok(ColorRole::Foreground),
            "green" => Ok(ColorRole::Green),
            "magenta" => Ok(ColorRole::Magenta),
            "red" => Ok(ColorRole::Red),
            "white" => Ok(ColorRole::White),
            "yellow" => Ok(ColorRole::Yellow),
            _ => Err(ThemeError::unknown_role(s)),
        }
    }
}
