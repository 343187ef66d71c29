//! The resolved color set of an active theme.

use std::hash::Hash;
use std::ops::Index;

use chartkit_color::{
    DEFAULT_BOUNDS, DEFAULT_LOHI_LIMITS, LinearGradientScale, OrdinalScale, QuantileScale, Rgb,
};

use crate::color::{ColorRef, ThemeColor};
use crate::error::Result;
use crate::role::ColorRole;
use crate::table::ThemeTable;

/// Roles whose lightness ramps make up the large category palette.
const CATEGORY_ROLES: [ColorRole; 5] = [
    ColorRole::Blue,
    ColorRole::Red,
    ColorRole::Green,
    ColorRole::Magenta,
    ColorRole::Foreground,
];

/// Steps per role ramp in the large category palette.
const CATEGORY_RAMP_LEN: usize = 5;

/// Blend limits for category ramps. Tighter than fade ramps so the
/// extreme steps stay distinguishable from black and white.
const CATEGORY_RAMP_LIMITS: [f64; 2] = [0.6, 0.6];

/// Roles of the main-color palette, most distinguishable first.
const CATEGORY_MAIN_ROLES: [ColorRole; 7] = [
    ColorRole::Blue,
    ColorRole::Cyan,
    ColorRole::Green,
    ColorRole::Magenta,
    ColorRole::Red,
    ColorRole::Yellow,
    ColorRole::Foreground,
];

/// Every color of one theme, resolved and ready to use.
///
/// A color set is an immutable snapshot: it is built once from a
/// [`ThemeTable`] and never changes afterwards, so chart code holding one
/// keeps rendering consistently while the registry switches themes
/// underneath. All palette and scale constructors live here because they
/// resolve roles against this snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveColorSet {
    theme_name: String,
    colors: [ThemeColor; ColorRole::COUNT],
}

impl ActiveColorSet {
    /// Resolves every role of `table` into a named color set.
    pub fn from_table(theme_name: impl Into<String>, table: &ThemeTable) -> Self {
        let black = table.get(ColorRole::Black);
        let white = table.get(ColorRole::White);
        Self {
            theme_name: theme_name.into(),
            colors: ColorRole::ALL.map(|role| ThemeColor::new(role, table.get(role), black, white)),
        }
    }

    /// Name of the theme this set was resolved from.
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// The resolved color for `role`.
    pub fn color(&self, role: ColorRole) -> ThemeColor {
        self.colors[role.index()]
    }

    /// All resolved colors in canonical role order.
    pub fn colors(&self) -> [ThemeColor; ColorRole::COUNT] {
        self.colors
    }

    /// Resolves a color reference to a concrete value.
    ///
    /// Role references go through this set; literals pass through
    /// unchanged. This never fails, unlike the string form
    /// [`resolve_str`](Self::resolve_str).
    pub fn resolve(&self, color: impl Into<ColorRef>) -> Rgb {
        match color.into() {
            ColorRef::Named(role) => self.color(role).rgb(),
            ColorRef::Literal(rgb) => rgb,
        }
    }

    /// Resolves a role name or `#RRGGBB` literal from user input.
    pub fn resolve_str(&self, s: &str) -> Result<Rgb> {
        Ok(self.resolve(ColorRef::parse(s)?))
    }

    /// Resolves a whole list of role names and hex literals.
    ///
    /// Fails on the first string that is neither, resolving nothing
    /// partial.
    pub fn resolve_strs(&self, names: &[&str]) -> Result<Vec<Rgb>> {
        names.iter().map(|name| self.resolve_str(name)).collect()
    }

    /// An evenly stepped gradient between two colors.
    pub fn gradient_array(
        &self,
        from: impl Into<ColorRef>,
        to: impl Into<ColorRef>,
        length: usize,
    ) -> Vec<Rgb> {
        self.gradient_array_bounded(from, to, length, DEFAULT_BOUNDS)
    }

    /// Like [`gradient_array`](Self::gradient_array), sampling only the
    /// `bounds` span of the interpolation.
    pub fn gradient_array_bounded(
        &self,
        from: impl Into<ColorRef>,
        to: impl Into<ColorRef>,
        length: usize,
        bounds: [f64; 2],
    ) -> Vec<Rgb> {
        chartkit_color::gradient_array(self.resolve(from), self.resolve(to), length, bounds)
    }

    /// A dark-to-light ramp through `color`, anchored at this theme's
    /// black and white.
    pub fn lohi_scale_array(&self, color: impl Into<ColorRef>, length: usize) -> Vec<Rgb> {
        self.lohi_scale_array_with(color, length, DEFAULT_LOHI_LIMITS)
    }

    /// Like [`lohi_scale_array`](Self::lohi_scale_array) with explicit
    /// blend limits.
    pub fn lohi_scale_array_with(
        &self,
        color: impl Into<ColorRef>,
        length: usize,
        limits: [f64; 2],
    ) -> Vec<Rgb> {
        chartkit_color::lohi_scale_array(
            self.color(ColorRole::Black).rgb(),
            self.resolve(color),
            self.color(ColorRole::White).rgb(),
            length,
            limits,
        )
    }

    /// The large category palette: a lightness ramp per category role,
    /// 25 colors total. The pure role color sits in the middle of each
    /// ramp.
    pub fn category(&self) -> Vec<Rgb> {
        let mut colors = Vec::with_capacity(CATEGORY_ROLES.len() * CATEGORY_RAMP_LEN);
        for role in CATEGORY_ROLES {
            colors.extend(self.lohi_scale_array_with(
                role,
                CATEGORY_RAMP_LEN,
                CATEGORY_RAMP_LIMITS,
            ));
        }
        colors
    }

    /// The main-color palette: the seven most distinguishable role
    /// colors, with their identity attached.
    pub fn category_main(&self) -> [ThemeColor; CATEGORY_MAIN_ROLES.len()] {
        CATEGORY_MAIN_ROLES.map(|role| self.color(role))
    }

    /// The pure middle color of every category ramp, in category order.
    pub fn small_ordinal_palette(&self) -> Vec<Rgb> {
        self.category()
            .into_iter()
            .skip(CATEGORY_RAMP_LEN / 2)
            .step_by(CATEGORY_RAMP_LEN)
            .collect()
    }

    /// An ordinal scale over the 25-color category palette.
    pub fn ordinal<K: Eq + Hash + Clone>(&self) -> OrdinalScale<K> {
        OrdinalScale::new(self.category())
    }

    /// An ordinal scale over the five pure category colors, for data with
    /// few distinct keys.
    pub fn small_ordinal<K: Eq + Hash + Clone>(&self) -> OrdinalScale<K> {
        OrdinalScale::new(self.small_ordinal_palette())
    }

    /// A linear gradient over `domain` from this theme's white to its
    /// black, the usual encoding for continuous intensity.
    pub fn linear_gradient(&self, domain: [f64; 2]) -> LinearGradientScale {
        self.linear_gradient_between(domain, ColorRole::White, ColorRole::Black)
    }

    /// A linear gradient over `domain` between two explicit colors.
    pub fn linear_gradient_between(
        &self,
        domain: [f64; 2],
        from: impl Into<ColorRef>,
        to: impl Into<ColorRef>,
    ) -> LinearGradientScale {
        LinearGradientScale::new(domain, self.resolve(from), self.resolve(to))
    }

    /// A quantile scale binning `samples` into `colors` many classes.
    pub fn quantile(&self, samples: &[f64], colors: Vec<Rgb>) -> QuantileScale {
        QuantileScale::new(samples, colors)
    }
}

impl Index<ColorRole> for ActiveColorSet {
    type Output = ThemeColor;

    fn index(&self, role: ColorRole) -> &ThemeColor {
        &self.colors[role.index()]
    }
}
