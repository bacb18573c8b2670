//! Adaptive Gauss-Kronrod quadrature.

use crate::error::{NumError, NumResult};
use tracing::{debug, trace};

/// 15-point Kronrod abscissae, positive half of [-1, 1] (QUADPACK dqk15).
const XGK: [f64; 8] = [
    0.991_455_371_120_813,
    0.949_107_912_342_759,
    0.864_864_423_359_769,
    0.741_531_185_599_394,
    0.586_087_235_467_691,
    0.405_845_151_377_397,
    0.207_784_955_007_898,
    0.0,
];

/// 15-point Kronrod weights.
const WGK: [f64; 8] = [
    0.022_935_322_010_529,
    0.063_092_092_629_979,
    0.104_790_010_322_250,
    0.140_653_259_715_525,
    0.169_004_726_639_267,
    0.190_350_578_064_785,
    0.204_432_940_075_298,
    0.209_482_141_084_728,
];

/// 7-point Gauss weights (paired with the odd Kronrod abscissae).
const WG: [f64; 4] = [
    0.129_484_966_168_870,
    0.279_705_391_489_277,
    0.381_830_050_505_119,
    0.417_959_183_673_469,
];

/// Quadrature configuration.
#[derive(Clone, Copy, Debug)]
pub struct QuadratureConfig {
    /// Relative tolerance on the integral value
    pub rel_tol: f64,
    /// Absolute tolerance floor
    pub abs_tol: f64,
    /// Maximum bisection depth before giving up
    pub max_depth: u32,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            rel_tol: 1e-10,
            abs_tol: 1e-14,
            max_depth: 60,
        }
    }
}

/// Converged quadrature result.
#[derive(Clone, Copy, Debug)]
pub struct QuadratureEstimate {
    /// Integral value
    pub value: f64,
    /// Accumulated error estimate (sum of |K15 - G7| over accepted intervals)
    pub error_estimate: f64,
    /// Number of integrand evaluations
    pub evaluations: usize,
}

/// Integrate `f` over `[a, b]` to the configured tolerance.
///
/// The integrand returns `NumResult<f64>`; any evaluation error aborts the
/// whole integration. `a == b` returns exactly zero, and `a > b` flips the
/// sign of the result. Refinement is deterministic bisection, so identical
/// inputs give bit-identical outputs.
///
/// Fails with [`NumError::ConvergenceFailed`] when a subinterval still
/// misses its error budget at `max_depth`.
pub fn integrate<F>(f: F, a: f64, b: f64, config: &QuadratureConfig) -> NumResult<QuadratureEstimate>
where
    F: Fn(f64) -> NumResult<f64>,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(NumError::InvalidInterval {
            what: "endpoints must be finite",
        });
    }
    if a == b {
        return Ok(QuadratureEstimate {
            value: 0.0,
            error_estimate: 0.0,
            evaluations: 0,
        });
    }
    if a > b {
        let mut est = integrate(f, b, a, config)?;
        est.value = -est.value;
        return Ok(est);
    }

    let mut evaluations = 0usize;
    let (whole, whole_err) = kronrod15(&f, a, b, &mut evaluations)?;
    let tol = config.abs_tol.max(config.rel_tol * whole.abs());

    let mut value = 0.0;
    let mut error_estimate = 0.0;
    // (lo, hi, budget, depth); budget halves with each split so the sum of
    // accepted errors stays below the requested tolerance.
    let mut stack: Vec<(f64, f64, f64, u32)> = vec![(a, b, tol, 0)];

    while let Some((lo, hi, budget, depth)) = stack.pop() {
        let (est, err) = if depth == 0 {
            (whole, whole_err)
        } else {
            kronrod15(&f, lo, hi, &mut evaluations)?
        };

        let roundoff_floor = 50.0 * f64::EPSILON * est.abs();
        if err <= budget || err <= roundoff_floor {
            value += est;
            error_estimate += err;
            continue;
        }
        if depth >= config.max_depth {
            return Err(NumError::ConvergenceFailed {
                what: format!(
                    "subdivision budget exhausted on [{lo}, {hi}] (error {err:.3e}, budget {budget:.3e})"
                ),
            });
        }

        trace!(lo, hi, err, budget, depth, "refining quadrature subinterval");
        let mid = 0.5 * (lo + hi);
        let half_budget = 0.5 * budget;
        stack.push((mid, hi, half_budget, depth + 1));
        stack.push((lo, mid, half_budget, depth + 1));
    }

    debug!(value, error_estimate, evaluations, "quadrature converged");
    Ok(QuadratureEstimate {
        value,
        error_estimate,
        evaluations,
    })
}

/// Single 15-point Gauss-Kronrod application on `[lo, hi]`.
///
/// Returns `(K15 estimate, |K15 - G7|)`. All abscissae are interior, so the
/// integrand is never evaluated at the endpoints.
fn kronrod15<F>(f: &F, lo: f64, hi: f64, evaluations: &mut usize) -> NumResult<(f64, f64)>
where
    F: Fn(f64) -> NumResult<f64>,
{
    let center = 0.5 * (lo + hi);
    let half = 0.5 * (hi - lo);

    let fc = f(center)?;
    *evaluations += 1;
    let mut resk = WGK[7] * fc;
    let mut resg = WG[3] * fc;

    for (j, &x) in XGK.iter().take(7).enumerate() {
        let dx = half * x;
        let f1 = f(center - dx)?;
        let f2 = f(center + dx)?;
        *evaluations += 2;
        let sum = f1 + f2;
        resk += WGK[j] * sum;
        if j % 2 == 1 {
            resg += WG[j / 2] * sum;
        }
    }

    let k15 = resk * half;
    let g7 = resg * half;
    if !k15.is_finite() {
        return Err(NumError::Evaluation {
            what: format!("non-finite quadrature sum on [{lo}, {hi}]"),
        });
    }
    Ok((k15, (k15 - g7).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_is_exact() {
        // K15 integrates degree <= 22 exactly; x^3 over [0, 2] = 4
        let est = integrate(|x| Ok(x * x * x), 0.0, 2.0, &QuadratureConfig::default()).unwrap();
        assert!((est.value - 4.0).abs() < 1e-12);
    }

    #[test]
    fn empty_interval_is_exactly_zero() {
        let est = integrate(|x| Ok(x.exp()), 1.5, 1.5, &QuadratureConfig::default()).unwrap();
        assert_eq!(est.value, 0.0);
        assert_eq!(est.evaluations, 0);
    }

    #[test]
    fn reversed_interval_flips_sign() {
        let cfg = QuadratureConfig::default();
        let fwd = integrate(|x| Ok(x.sin()), 0.0, 1.0, &cfg).unwrap();
        let rev = integrate(|x| Ok(x.sin()), 1.0, 0.0, &cfg).unwrap();
        assert_eq!(fwd.value, -rev.value);
    }

    #[test]
    fn smooth_transcendental() {
        // \int_0^1 e^x dx = e - 1
        let est = integrate(|x| Ok(x.exp()), 0.0, 1.0, &QuadratureConfig::default()).unwrap();
        assert!((est.value - (1f64.exp() - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn sqrt_endpoint_singularity_converges() {
        // \int_0^1 sqrt(x) dx = 2/3; derivative singular at 0
        let est = integrate(|x| Ok(x.sqrt()), 0.0, 1.0, &QuadratureConfig::default()).unwrap();
        assert!((est.value - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn integrand_error_aborts() {
        let result = integrate(
            |x| {
                if x > 0.5 {
                    Err(NumError::Evaluation {
                        what: "bad region".into(),
                    })
                } else {
                    Ok(1.0)
                }
            },
            0.0,
            1.0,
            &QuadratureConfig::default(),
        );
        assert!(matches!(result, Err(NumError::Evaluation { .. })));
    }

    #[test]
    fn budget_exhaustion_is_an_error() {
        let cfg = QuadratureConfig {
            rel_tol: 1e-14,
            abs_tol: 0.0,
            max_depth: 2,
        };
        // Oscillatory enough that depth 2 cannot resolve it
        let result = integrate(|x| Ok((50.0 * x).sin()), 0.0, 10.0, &cfg);
        assert!(matches!(result, Err(NumError::ConvergenceFailed { .. })));
    }

    #[test]
    fn deterministic_repeats() {
        let cfg = QuadratureConfig::default();
        let a = integrate(|x| Ok(1.0 / (1.0 + x * x)), 0.0, 4.0, &cfg).unwrap();
        let b = integrate(|x| Ok(1.0 / (1.0 + x * x)), 0.0, 4.0, &cfg).unwrap();
        assert_eq!(a.value, b.value);
        assert_eq!(a.evaluations, b.evaluations);
    }
}
