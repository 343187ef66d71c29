//! Complete role-to-color assignments.

use chartkit_color::Rgb;

use crate::error::{Result, ThemeError};
use crate::role::ColorRole;

/// A complete mapping from every [`ColorRole`] to a concrete color.
///
/// Tables are plain value types: building one never touches the registry,
/// and a table stays valid no matter which theme is currently active.
/// Colors are stored in canonical role order ([`ColorRole::ALL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTable {
    colors: [Rgb; ColorRole::COUNT],
}

impl ThemeTable {
    /// Builds a table from colors given in canonical role order.
    pub const fn new(colors: [Rgb; ColorRole::COUNT]) -> Self {
        Self { colors }
    }

    /// Builds a table from `(role, color)` entries.
    ///
    /// Every role must appear exactly once. Returns
    /// [`ThemeError::DuplicateRole`] when a role is set twice and
    /// [`ThemeError::MissingRole`] when one is absent.
    pub fn from_entries(entries: impl IntoIterator<Item = (ColorRole, Rgb)>) -> Result<Self> {
        let mut slots: [Option<Rgb>; ColorRole::COUNT] = [None; ColorRole::COUNT];
        for (role, rgb) in entries {
            if slots[role.index()].replace(rgb).is_some() {
                return Err(ThemeError::DuplicateRole { role });
            }
        }
        let mut colors = [Rgb::BLACK; ColorRole::COUNT];
        for role in ColorRole::ALL {
            colors[role.index()] =
                slots[role.index()].ok_or(ThemeError::MissingRole { role })?;
        }
        Ok(Self { colors })
    }

    /// Builds a table from `(role name, hex color)` string entries.
    ///
    /// This is the loading path for user-supplied themes. Validation is
    /// strict: unknown role names, malformed hex values, duplicates and
    /// missing roles are all errors, and nothing partial is produced.
    pub fn from_hex_entries(entries: &[(&str, &str)]) -> Result<Self> {
        let mut resolved = Vec::with_capacity(entries.len());
        for &(name, hex) in entries {
            let role: ColorRole = name.parse()?;
            let rgb = Rgb::from_hex(hex).map_err(|source| ThemeError::invalid_color(name, source))?;
            resolved.push((role, rgb));
        }
        Self::from_entries(resolved)
    }

    /// The color assigned to `role`.
    pub const fn get(&self, role: ColorRole) -> Rgb {
        self.colors[role.index()]
    }

    /// Returns a copy of this table with one role reassigned.
    #[must_use]
    pub const fn with(self, role: ColorRole, rgb: Rgb) -> Self {
        let mut colors = self.colors;
        colors[role.index()] = rgb;
        Self { colors }
    }

    /// All colors in canonical role order.
    pub const fn colors(&self) -> [Rgb; ColorRole::COUNT] {
        self.colors
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{ColorRole, Rgb, ThemeTable};

    /// Named-field mirror of a table. Field order matches canonical role
    /// order so the array below can be built positionally.
    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ThemeTableRepr {
        background: Rgb,
        black: Rgb,
        blue: Rgb,
        cyan: Rgb,
        foreground: Rgb,
        green: Rgb,
        magenta: Rgb,
        red: Rgb,
        white: Rgb,
        yellow: Rgb,
    }

    impl Serialize for ThemeTable {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            ThemeTableRepr {
                background: self.get(ColorRole::Background),
                black: self.get(ColorRole::Black),
                blue: self.get(ColorRole::Blue),
                cyan: self.get(ColorRole::Cyan),
                foreground: self.get(ColorRole::Foreground),
                green: self.get(ColorRole::Green),
                magenta: self.get(ColorRole::Magenta),
                red: self.get(ColorRole::Red),
                white: self.get(ColorRole::White),
                yellow: self.get(ColorRole::Yellow),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ThemeTable {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = ThemeTableRepr::deserialize(deserializer)?;
            Ok(ThemeTable::new([
                repr.background,
                repr.black,
                repr.blue,
                repr.cyan,
                repr.foreground,
                repr.green,
                repr.magenta,
                repr.red,
                repr.white,
                repr.yellow,
            ]))
        }
    }
}
