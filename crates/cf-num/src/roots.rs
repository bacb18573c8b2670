//! Bracketed scalar root finding (Brent's method).

use crate::error::{NumError, NumResult};
use cf_core::Tolerances;
use tracing::debug;

/// Root finder configuration.
#[derive(Clone, Copy, Debug)]
pub struct RootConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Convergence tolerances on the abscissa
    pub tolerances: Tolerances,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerances: Tolerances::default(),
        }
    }
}

/// Converged root.
#[derive(Clone, Copy, Debug)]
pub struct RootFind {
    /// Abscissa of the root
    pub root: f64,
    /// Residual at the root
    pub f_root: f64,
    /// Iterations consumed
    pub iterations: usize,
}

/// Find a root of `f` in `[lo, hi]` with Brent's method.
///
/// Combines bisection, secant, and inverse quadratic interpolation; the
/// bracket must straddle a sign change. Guaranteed to converge for any
/// continuous `f` with `f(lo) * f(hi) <= 0`.
///
/// Fails with [`NumError::NoRootInBracket`] when the function has the same
/// sign at both ends, and [`NumError::ConvergenceFailed`] when the
/// iteration budget runs out.
pub fn find_root_brent<F>(f: F, lo: f64, hi: f64, config: &RootConfig) -> NumResult<RootFind>
where
    F: Fn(f64) -> NumResult<f64>,
{
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(NumError::InvalidBracket {
            what: "bracket endpoints must be finite with lo < hi",
        });
    }

    let mut a = lo;
    let mut b = hi;
    let mut fa = f(a)?;
    let mut fb = f(b)?;

    if fa == 0.0 {
        return Ok(RootFind {
            root: a,
            f_root: 0.0,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(RootFind {
            root: b,
            f_root: 0.0,
            iterations: 0,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(NumError::NoRootInBracket { lo, hi });
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iter in 1..=config.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let xtol = config.tolerances.abs + config.tolerances.rel * b.abs();
        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * xtol;
        let xm = 0.5 * (c - b);

        if xm.abs() <= tol1 || fb == 0.0 {
            debug!(root = b, iterations = iter, "root finder converged");
            return Ok(RootFind {
                root: b,
                f_root: fb,
                iterations: iter,
            });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Attempt inverse quadratic interpolation (secant when a == c)
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q0 = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q0 * (q0 - r) - (b - a) * (r - 1.0)),
                    (q0 - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                // Interpolation accepted
                e = d;
                d = p / q;
            } else {
                // Fall back to bisection
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 {
            d
        } else {
            tol1.copysign(xm)
        };
        fb = f(b)?;
    }

    Err(NumError::ConvergenceFailed {
        what: format!(
            "root finder exceeded {} iterations in [{lo}, {hi}]",
            config.max_iterations
        ),
    })
}
