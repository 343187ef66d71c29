//! Ordinal, linear-gradient, and quantile color scales.
//!
//! Scales map chart data to colors. The ordinal scale hands out palette
//! colors to discrete keys in first-seen order; the linear scale blends
//! continuously across a numeric domain; the quantile scale cuts a sample
//! distribution into equal-population bins, one color per bin.

use std::hash::Hash;

use ahash::AHashMap;

use crate::interpolate::interpolate_rgb;
use crate::rgb::Rgb;

/// Ordinal color scale: discrete keys mapped to range colors in first-seen
/// order.
///
/// The first distinct key gets `range[0]`, the second `range[1]`, and so on,
/// wrapping modulo the range length. A key keeps its color for the lifetime
/// of the scale.
#[derive(Debug, Clone)]
pub struct OrdinalScale<K> {
    index: AHashMap<K, usize>,
    domain: Vec<K>,
    range: Vec<Rgb>,
}

impl<K: Eq + Hash + Clone> OrdinalScale<K> {
    /// Creates a scale over `range`.
    pub fn new(range: Vec<Rgb>) -> Self {
        Self {
            index: AHashMap::new(),
            domain: Vec::new(),
            range,
        }
    }

    /// Returns the color for `key`, assigning the next range slot on first
    /// sight. `None` only when the range is empty.
    pub fn get(&mut self, key: K) -> Option<Rgb> {
        if self.range.is_empty() {
            return None;
        }
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.domain.len();
                self.index.insert(key.clone(), idx);
                self.domain.push(key);
                idx
            }
        };
        Some(self.range[idx % self.range.len()])
    }

    /// Keys seen so far, in first-seen order.
    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    /// The configured range colors.
    pub fn range(&self) -> &[Rgb] {
        &self.range
    }
}

/// Continuous linear color scale over a numeric domain.
///
/// Inputs outside the domain extrapolate; channel clamping keeps the result
/// a valid color. A degenerate single-point domain maps every input to the
/// midpoint blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradientScale {
    domain: [f64; 2],
    from: Rgb,
    to: Rgb,
}

impl LinearGradientScale {
    /// Creates a scale mapping `domain` onto the `from`→`to` blend.
    pub fn new(domain: [f64; 2], from: Rgb, to: Rgb) -> Self {
        Self { domain, from, to }
    }

    /// Maps `x` to its color.
    pub fn get(&self, x: f64) -> Rgb {
        let [d0, d1] = self.domain;
        let t = if d1 == d0 { 0.5 } else { (x - d0) / (d1 - d0) };
        interpolate_rgb(self.from, self.to)(t)
    }

    /// The numeric domain.
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }
}

/// Quantile color scale: equal-population bins over a sample distribution.
///
/// With `n` range colors the sorted samples are cut at the `i / n` quantiles
/// (type-7 estimator), so each bin holds the same share of the observed
/// values rather than the same share of the value axis. Lookup bisects to
/// the right: a value sitting exactly on a cut lands in the upper bin.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale {
    domain: Vec<f64>,
    thresholds: Vec<f64>,
    range: Vec<Rgb>,
}

impl QuantileScale {
    /// Builds the scale from a sample distribution and a discrete range.
    /// Non-finite samples are dropped.
    pub fn new(samples: &[f64], range: Vec<Rgb>) -> Self {
        let mut domain: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        domain.sort_unstable_by(f64::total_cmp);
        let n = range.len();
        let thresholds = if domain.is_empty() || n < 2 {
            Vec::new()
        } else {
            (1..n)
                .map(|i| quantile_sorted(&domain, i as f64 / n as f64))
                .collect()
        };
        Self {
            domain,
            thresholds,
            range,
        }
    }

    /// Returns the bin color for `x`; `None` for non-finite inputs or an
    /// empty scale.
    pub fn get(&self, x: f64) -> Option<Rgb> {
        if !x.is_finite() || self.range.is_empty() || self.domain.is_empty() {
            return None;
        }
        let idx = self.thresholds.partition_point(|&t| t <= x);
        Some(self.range[idx])
    }

    /// The bin boundaries, ascending; one fewer than the range length.
    pub fn quantiles(&self) -> &[f64] {
        &self.thresholds
    }

    /// The retained samples, sorted ascending.
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }
}

/// Type-7 quantile of ascending-sorted samples: linear interpolation between
/// the two order statistics flanking rank `(n - 1) * p`.
///
/// Callers guarantee `sorted` is non-empty.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[i0 + 1];
    v0 + (v1 - v0) * (i - i0 as f64)
}
