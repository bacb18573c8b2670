//! Elliptic integrals of the first kind.
//!
//! Carlson symmetric forms evaluated with the duplication theorem, plus the
//! Legendre incomplete/complete integrals built on top of them.
//!
//! Reference: Carlson (1995), *Numerical computation of real or complex
//! elliptic integrals*, Numerical Algorithms 10, 13-98.

use crate::error::{NumError, NumResult};
use std::f64::consts::{FRAC_PI_2, PI};

/// Relative series truncation control; error scales as ERRTOL^6.
const ERRTOL: f64 = 0.0025;

const MAX_DUPLICATIONS: usize = 100;

/// Carlson symmetric elliptic integral R_F(x, y, z).
///
/// Requires non-negative arguments with at most one of them zero.
///
/// # Accuracy
/// Relative error below 2.5e-16 for arguments within f64 range.
pub fn carlson_rf(x: f64, y: f64, z: f64) -> NumResult<f64> {
    if x < 0.0 || y < 0.0 || z < 0.0 {
        return Err(NumError::Domain {
            what: "carlson_rf requires non-negative arguments",
        });
    }
    if (x + y).min(x + z).min(y + z) == 0.0 {
        return Err(NumError::Domain {
            what: "carlson_rf requires at most one zero argument",
        });
    }

    let (mut x, mut y, mut z) = (x, y, z);
    let mut ave;
    let (mut dx, mut dy, mut dz);
    let mut iterations = 0;
    loop {
        let sx = x.sqrt();
        let sy = y.sqrt();
        let sz = z.sqrt();
        let lambda = sx * (sy + sz) + sy * sz;
        x = 0.25 * (x + lambda);
        y = 0.25 * (y + lambda);
        z = 0.25 * (z + lambda);
        ave = (x + y + z) / 3.0;
        dx = (ave - x) / ave;
        dy = (ave - y) / ave;
        dz = (ave - z) / ave;
        if dx.abs().max(dy.abs()).max(dz.abs()) < ERRTOL {
            break;
        }
        iterations += 1;
        if iterations > MAX_DUPLICATIONS {
            return Err(NumError::ConvergenceFailed {
                what: "carlson_rf duplication did not contract".into(),
            });
        }
    }

    let e2 = dx * dy - dz * dz;
    let e3 = dx * dy * dz;
    Ok((1.0 + (e2 / 24.0 - 0.1 - 3.0 * e3 / 44.0) * e2 + e3 / 14.0) / ave.sqrt())
}

/// Legendre incomplete elliptic integral of the first kind F(phi | m).
///
/// Uses the parameter convention m = k^2. Valid for 0 <= phi <= pi and
/// m sin^2(phi) <= 1 (with m < 1 required once phi exceeds pi/2, where the
/// reflection F(phi|m) = 2K(m) - F(pi - phi|m) applies).
pub fn ellint_f(phi: f64, m: f64) -> NumResult<f64> {
    if !(0.0..=PI).contains(&phi) {
        return Err(NumError::Domain {
            what: "ellint_f requires 0 <= phi <= pi",
        });
    }
    if phi > FRAC_PI_2 {
        let k = ellint_k(m)?;
        return Ok(2.0 * k - ellint_f(PI - phi, m)?);
    }
    let s = phi.sin();
    let c = phi.cos();
    let q = 1.0 - m * s * s;
    if q < 0.0 {
        return Err(NumError::Domain {
            what: "ellint_f requires m sin^2(phi) <= 1",
        });
    }
    Ok(s * carlson_rf(c * c, q, 1.0)?)
}

/// Legendre complete elliptic integral of the first kind K(m) = F(pi/2 | m).
pub fn ellint_k(m: f64) -> NumResult<f64> {
    if m >= 1.0 {
        return Err(NumError::Domain {
            what: "ellint_k requires m < 1",
        });
    }
    carlson_rf(0.0, 1.0 - m, 1.0)
}
