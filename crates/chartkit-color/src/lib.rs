#![forbid(unsafe_code)]

//! Color interpolation, ramps, and scale primitives for ChartKit.
//!
//! # Role in ChartKit
//! `chartkit-color` is the computational core of the theme engine. It knows
//! nothing about themes or roles; it turns concrete colors into ramps and
//! numeric domains into color mappings, deterministically.
//!
//! # This crate provides
//! - [`Rgb`] with hex parsing and formatting.
//! - [`interpolate_to_array`] and [`interpolate_rgb`], the sampling loop and
//!   the channel-wise linear blend every ramp is built from.
//! - [`gradient_array`] and [`lohi_scale_array`], the two ramp shapes.
//! - [`OrdinalScale`], [`LinearGradientScale`], and [`QuantileScale`].
//!
//! # How it fits in the system
//! `chartkit-theme` resolves role names against the active theme and hands
//! the concrete colors down to this crate; chart code mostly consumes these
//! types through the active color set rather than directly.

/// Deterministic interpolation and ramp construction.
pub mod interpolate;
/// RGB color value type with hex parsing and formatting.
pub mod rgb;
/// Ordinal, linear-gradient, and quantile color scales.
pub mod scale;

pub use interpolate::{
    DEFAULT_BOUNDS, DEFAULT_LOHI_LIMITS, gradient_array, interpolate_rgb, interpolate_to_array,
    lohi_scale_array,
};
pub use rgb::{ParseColorError, Rgb};
pub use scale::{LinearGradientScale, OrdinalScale, QuantileScale};
