//! Piecewise-linear interpolation over sampled axes.
//!
//! Policy, shared by [`Curve`] and [`Grid`]:
//!
//! * an argument equal to an axis node uses that node's sample verbatim;
//! * an argument strictly between two nodes blends the two bracketing
//!   samples linearly;
//! * an argument outside `[first, last]` is a miss, never an
//!   extrapolation.
//!
//! [`Grid`] additionally tolerates absent samples: a query only fails if
//! one of the samples it actually needs is absent.

use std::fmt;

use tracing::trace;

/// Position of `x` on a strictly increasing axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    pub lo: usize,
    pub hi: usize,
    /// Weight of `hi`, in `[0, 1)`.  Zero when `x` sits on node `lo`.
    pub frac: f64,
}

impl Bracket {
    fn exact(i: usize) -> Self {
        Self { lo: i, hi: i, frac: 0.0 }
    }

    pub fn is_exact(&self) -> bool {
        self.lo == self.hi
    }
}

/// Locate `x` on `axis`.  `None` when `x` is outside the axis or NaN.
pub(crate) fn bracket(axis: &[f64], x: f64) -> Option<Bracket> {
    let (first, last) = (*axis.first()?, *axis.last()?);
    // written so NaN lands here too
    if !(x >= first && x <= last) {
        return None;
    }
    let i = axis.partition_point(|&a| a < x);
    if axis[i] == x {
        return Some(Bracket::exact(i));
    }
    // first < x < axis[i], so i >= 1
    let (lo, hi) = (i - 1, i);
    Some(Bracket {
        lo,
        hi,
        frac: (x - axis[lo]) / (axis[hi] - axis[lo]),
    })
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// ── 1-D ─────────────────────────────────────────────────────────────

/// A sampled single-variable function `y(x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Curve {
    /// Caller guarantees `x` strictly increasing and `x.len() == y.len()`;
    /// the dataset loader checks both before building a curve.
    pub(crate) fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    pub fn axis(&self) -> &[f64] {
        &self.x
    }

    pub fn samples(&self) -> &[f64] {
        &self.y
    }

    /// Sampled range of the argument.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn eval(&self, x: f64) -> Option<f64> {
        let b = bracket(&self.x, x)?;
        if b.is_exact() {
            return Some(self.y[b.lo]);
        }
        Some(lerp(self.y[b.lo], self.y[b.hi], b.frac))
    }
}

// ── 2-D ─────────────────────────────────────────────────────────────

/// Why a [`Grid`] lookup could not be answered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridMiss {
    Temperature { min: f64, max: f64 },
    Concentration { min: f64, max: f64 },
    /// The node needed for the blend has no sample.
    NoSample { temperature: f64, volume_pct: f64 },
}

impl fmt::Display for GridMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridMiss::Temperature { min, max } => {
                write!(f, "temperature outside sampled range [{min}, {max}] °C")
            }
            GridMiss::Concentration { min, max } => {
                write!(f, "volume concentration outside sampled range [{min}, {max}] %")
            }
            GridMiss::NoSample { temperature, volume_pct } => write!(
                f,
                "no sample at grid node (T = {temperature} °C, {volume_pct} %), \
                 the mixture is frozen there"
            ),
        }
    }
}

/// A sampled two-variable function `v(temperature, volume_pct)`.
///
/// Row-major: one row per temperature line, one column per concentration
/// line.  `None` marks a node without a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    temperature: Vec<f64>,
    concentration: Vec<f64>,
    values: Vec<Option<f64>>,
}

impl Grid {
    /// Caller guarantees both axes strictly increasing and
    /// `values.len() == temperature.len() * concentration.len()`.
    pub(crate) fn new(temperature: Vec<f64>, concentration: Vec<f64>, values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(values.len(), temperature.len() * concentration.len());
        Self { temperature, concentration, values }
    }

    pub fn temperature_axis(&self) -> &[f64] {
        &self.temperature
    }

    pub fn concentration_axis(&self) -> &[f64] {
        &self.concentration
    }

    /// Stored sample at node `(ti, ci)`.
    pub fn sample(&self, ti: usize, ci: usize) -> Option<f64> {
        if ti >= self.temperature.len() || ci >= self.concentration.len() {
            return None;
        }
        self.values[ti * self.concentration.len() + ci]
    }

    fn node(&self, ti: usize, ci: usize) -> Result<f64, GridMiss> {
        self.sample(ti, ci).ok_or(GridMiss::NoSample {
            temperature: self.temperature[ti],
            volume_pct: self.concentration[ci],
        })
    }

    /// Value along temperature line `ti`.
    fn along_concentration(&self, ti: usize, cb: &Bracket) -> Result<f64, GridMiss> {
        let a = self.node(ti, cb.lo)?;
        if cb.is_exact() {
            return Ok(a);
        }
        Ok(lerp(a, self.node(ti, cb.hi)?, cb.frac))
    }

    /// Bilinear blend of the (up to four) nodes around the point.
    ///
    /// On a grid line only the two nodes of that line are read, so a
    /// query on the edge of a sparse region still succeeds.
    pub fn eval(&self, temperature: f64, volume_pct: f64) -> Result<f64, GridMiss> {
        let tb = bracket(&self.temperature, temperature).ok_or(GridMiss::Temperature {
            min: self.temperature[0],
            max: self.temperature[self.temperature.len() - 1],
        })?;
        let cb = bracket(&self.concentration, volume_pct).ok_or(GridMiss::Concentration {
            min: self.concentration[0],
            max: self.concentration[self.concentration.len() - 1],
        })?;
        trace!(?tb, ?cb, temperature, volume_pct, "grid bracket");

        let a = self.along_concentration(tb.lo, &cb)?;
        if tb.is_exact() {
            return Ok(a);
        }
        let b = self.along_concentration(tb.hi, &cb)?;
        Ok(lerp(a, b, tb.frac))
    }
}
