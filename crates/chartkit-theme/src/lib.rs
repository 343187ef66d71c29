#![forbid(unsafe_code)]

//! Theme registry and resolved color sets for ChartKit.
//!
//! # Role in ChartKit
//! `chartkit-theme` turns raw color math from `chartkit-color` into a
//! theming system: named themes assign concrete colors to semantic roles,
//! and chart code asks for roles instead of hex values, so a single theme
//! switch restyles every chart.
//!
//! # This crate provides
//! - [`ThemeRegistry`] holding registered themes and the active one,
//!   switchable at runtime.
//! - [`ActiveColorSet`], an immutable snapshot of one theme with palette
//!   and scale constructors.
//! - [`ThemeColor`] with [`fade`](ThemeColor::fade) for per-color
//!   lightness ramps.
//! - [`ThemeTable`] and [`ColorRole`] for defining themes, plus ten
//!   built-in themes.
//!
//! # How it fits in the system
//! Chart code loads a snapshot with [`ThemeRegistry::current`], resolves
//! roles and builds scales from it, and renders. Snapshots are plain
//! values behind an `Arc`, so rendering keeps its colors even while
//! another thread activates a different theme.

/// Built-in theme tables and the default theme.
pub mod builtin;
/// Theme-resolved colors and color references.
pub mod color;
/// Error types for theme lookup and validation.
pub mod error;
/// Theme registration and live switching.
pub mod registry;
/// Semantic color roles.
pub mod role;
/// The resolved color set of an active theme.
pub mod set;
/// Complete role-to-color assignments.
pub mod table;

pub use builtin::{BUILTIN_THEME_NAMES, DEFAULT_THEME};
pub use color::{ColorRef, ThemeColor};
pub use error::{Result, ThemeError};
pub use registry::ThemeRegistry;
pub use role::ColorRole;
pub use set::ActiveColorSet;
pub use table::ThemeTable;

// Chart code names colors through this crate; re-export the value and
// scale types so callers rarely need chartkit-color directly.
pub use chartkit_color::{LinearGradientScale, OrdinalScale, QuantileScale, Rgb};
