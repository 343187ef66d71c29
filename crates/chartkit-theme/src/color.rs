//! Theme-resolved colors and color references.

use std::fmt;

use chartkit_color::{DEFAULT_LOHI_LIMITS, Rgb, lohi_scale_array};

use crate::error::{Result, ThemeError};
use crate::role::ColorRole;

/// Number of steps in a fade ramp. Fade percentages index into it, so
/// values above 99 clamp to the lightest step.
const FADE_RAMP_LEN: usize = 100;

/// A color resolved against a concrete theme.
///
/// Besides the color value itself, a `ThemeColor` remembers which role it
/// came from and the theme's black and white anchors, which [`fade`]
/// blends toward. It stays valid after the registry switches themes; it
/// just keeps describing the theme it was resolved from.
///
/// [`fade`]: ThemeColor::fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColor {
    role: ColorRole,
    rgb: Rgb,
    ramp_black: Rgb,
    ramp_white: Rgb,
}

impl ThemeColor {
    pub(crate) const fn new(role: ColorRole, rgb: Rgb, ramp_black: Rgb, ramp_white: Rgb) -> Self {
        Self {
            role,
            rgb,
            ramp_black,
            ramp_white,
        }
    }

    /// The role this color was resolved from.
    pub const fn role(&self) -> ColorRole {
        self.role
    }

    /// The role name, e.g. `"blue"`.
    pub const fn name(&self) -> &'static str {
        self.role.name()
    }

    /// The concrete color value.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// A lightness variant of this color.
    ///
    /// `pct` walks a 100-step ramp from the theme's black anchor through
    /// the pure color to its white anchor. `fade(0)` is the darkest
    /// variant (40% toward the color), `fade(50)` is the color itself and
    /// `fade(99)` the lightest (70% toward white). Values above 99 clamp.
    pub fn fade(&self, pct: u8) -> Rgb {
        let ramp = lohi_scale_array(
            self.ramp_black,
            self.rgb,
            self.ramp_white,
            FADE_RAMP_LEN,
            DEFAULT_LOHI_LIMITS,
        );
        ramp[(pct as usize).min(ramp.len() - 1)]
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rgb.fmt(f)
    }
}

impl From<ThemeColor> for Rgb {
    fn from(color: ThemeColor) -> Rgb {
        color.rgb
    }
}

/// A color request that is either a role looked up in the active theme or
/// a literal value used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRef {
    /// Resolve through the active theme.
    Named(ColorRole),
    /// Use this exact color.
    Literal(Rgb),
}

impl ColorRef {
    /// Parses a reference from user input.
    ///
    /// Strings starting with `#` are hex literals; everything else must
    /// be a role name.
    pub fn parse(s: &str) -> Result<Self> {
        if s.starts_with('#') {
            let rgb = Rgb::from_hex(s).map_err(|source| ThemeError::invalid_color(s, source))?;
            Ok(ColorRef::Literal(rgb))
        } else {
            Ok(ColorRef::Named(s.parse()?))
        }
    }
}

impl From<ColorRole> for ColorRef {
    fn from(role: ColorRole) -> Self {
        ColorRef::Named(role)
    }
}

impl From<Rgb> for ColorRef {
    fn from(rgb: Rgb) -> Self {
        ColorRef::Literal(rgb)
    }
}

impl From<ThemeColor> for ColorRef {
    fn from(color: ThemeColor) -> Self {
        ColorRef::Literal(color.rgb())
    }
}
