//! Deterministic interpolation and ramp construction.
//!
//! Two ramp shapes are built on one sampling loop: a plain two-endpoint
//! gradient, and the symmetric black→color→white "lo-hi" ramp that category
//! palettes and fades are cut from. The loop's step arithmetic is part of
//! the compatibility surface: downstream palettes index into ramps by
//! position, so element counts must not drift.

use crate::rgb::Rgb;

/// Interpolation parameter range covering the full `[0, 1]` span.
pub const DEFAULT_BOUNDS: [f64; 2] = [0.0, 1.0];

/// Default blend limits for [`lohi_scale_array`]: the dark end starts 40%
/// of the way from black to the color, the light end stops 70% of the way
/// from the color to white.
pub const DEFAULT_LOHI_LIMITS: [f64; 2] = [0.4, 0.7];

/// Guard subtracted from the loop stop so accumulated floating-point error
/// cannot emit an extra step right before the final element.
const STEP_GUARD: f64 = 1e-4;

/// Samples `ipol` into a vector of nominally `length` elements over
/// `bounds`.
///
/// For `length <= 2` the result collapses to `[ipol(0.0), ipol(1.0)]`, the
/// full endpoints, regardless of `bounds`. Otherwise the first element is
/// `ipol(lo)`, the last is exactly `ipol(hi)`, and interior elements advance
/// by `(hi - lo) / length` while at least one step plus the guard remains
/// before `hi`. For every practical length the output length equals
/// `length`; treat `length` as a step count, not a guaranteed element count.
pub fn interpolate_to_array<T>(
    ipol: impl Fn(f64) -> T,
    length: usize,
    bounds: [f64; 2],
) -> Vec<T> {
    if length <= 2 {
        return vec![ipol(0.0), ipol(1.0)];
    }
    let [lo, hi] = bounds;
    let step = (hi - lo) / length as f64;
    let stop = hi - step - STEP_GUARD;
    let mut arr = Vec::with_capacity(length);
    arr.push(ipol(lo));
    let mut pt = lo + step;
    loop {
        arr.push(ipol(pt));
        pt += step;
        // Do-while order, written so a non-finite `pt` terminates.
        if !(pt < stop) {
            break;
        }
    }
    arr.push(ipol(hi));
    arr
}

/// Returns the linear RGB interpolator between `from` and `to`.
///
/// Channels blend independently in f64 and are rounded to the nearest
/// integer, clamped to the 8-bit range, so parameters outside `[0, 1]`
/// extrapolate without wrapping.
pub fn interpolate_rgb(from: Rgb, to: Rgb) -> impl Fn(f64) -> Rgb {
    move |t| {
        Rgb::new(
            lerp_channel(from.r, to.r, t),
            lerp_channel(from.g, to.g, t),
            lerp_channel(from.b, to.b, t),
        )
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Builds a gradient ramp of nominally `length` colors from `from` to `to`.
pub fn gradient_array(from: Rgb, to: Rgb, length: usize, bounds: [f64; 2]) -> Vec<Rgb> {
    interpolate_to_array(interpolate_rgb(from, to), length, bounds)
}

/// Builds the symmetric black→color→white ramp of nominally `length`
/// colors.
///
/// The lower half blends from `black` into `color` starting at `limits[0]`,
/// the upper half from `color` toward `white` stopping at `limits[1]`, and
/// the shared midpoint appears once. The even/odd substep split keeps the
/// pure `color` at index `length / 2` for every `length >= 3`.
pub fn lohi_scale_array(
    black: Rgb,
    color: Rgb,
    white: Rgb,
    length: usize,
    limits: [f64; 2],
) -> Vec<Rgb> {
    let even = length % 2 == 0;
    let substeps = if even { length / 2 } else { (length + 1) / 2 };
    let lo_len = if even { substeps + 1 } else { substeps };
    let mut ramp = gradient_array(black, color, lo_len, [limits[0], 1.0]);
    let hi = gradient_array(color, white, substeps, [0.0, limits[1]]);
    ramp.extend(hi.into_iter().skip(1));
    ramp
}
