//! Distance and time measures derived from the expansion history.
//!
//! Everything here composes the dimensionless comoving integral
//! ∫₀^z dz'/E(z') and the age kernel ∫ dz'/[(1+z')E(z')]. Flat ΛCDM
//! without radiation takes closed forms (incomplete elliptic integral for
//! distance, asinh for age); every other model goes through the adaptive
//! quadrature engine. All quantities are exactly zero at z = 0.

use crate::cosmology::{FlrwCosmology, validation};
use crate::error::{FlrwError, FlrwResult};
use cf_core::units::constants::{ARCSEC_PER_RADIAN, KPC_PER_MPC, RADIAN_PER_ARCMIN};
use cf_core::units::{Length, Time, gyr, mpc, mpc_value};
use cf_num::{NumError, QuadratureConfig, ellint_f, integrate};
use tracing::trace;

/// Proper or comoving angular scale [kpc/arcmin].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type KpcPerArcmin = f64;

/// Inverse angular scale [arcsec/kpc].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type ArcsecPerKpc = f64;

/// Elliptic parameter m = sin^2(75°) of the flat ΛCDM distance form.
const LCDM_ELLIPTIC_M: f64 = 0.933_012_701_892_219_3;

impl FlrwCosmology {
    /// Line-of-sight comoving distance to redshift z.
    pub fn comoving_distance(&self, z: f64) -> FlrwResult<Length> {
        Ok(mpc(self.hubble_distance_mpc() * self.comoving_integral(z)?))
    }

    /// Transverse comoving distance (proper-motion distance) to z.
    ///
    /// Curvature decides the map from the line-of-sight integral: identity
    /// when flat, sinh when open, sin when closed.
    pub fn comoving_transverse_distance(&self, z: f64) -> FlrwResult<Length> {
        Ok(mpc(
            self.hubble_distance_mpc() * self.transverse_integral(z)?
        ))
    }

    /// Angular diameter distance D_A = D_M/(1+z).
    pub fn angular_diameter_distance(&self, z: f64) -> FlrwResult<Length> {
        let dm = self.transverse_integral(z)?;
        Ok(mpc(self.hubble_distance_mpc() * dm / (1.0 + z)))
    }

    /// Luminosity distance D_L = (1+z)·D_M.
    pub fn luminosity_distance(&self, z: f64) -> FlrwResult<Length> {
        let dm = self.transverse_integral(z)?;
        Ok(mpc(self.hubble_distance_mpc() * dm * (1.0 + z)))
    }

    /// Distance modulus 5·log10(D_L/10 pc) [mag].
    ///
    /// Follows the logarithm at z = 0, i.e. returns −∞ rather than an
    /// error; negative luminosity distance (blueshifted inputs) has no
    /// modulus and is rejected.
    pub fn distmod(&self, z: f64) -> FlrwResult<f64> {
        let dl_mpc = mpc_value(self.luminosity_distance(z)?);
        if dl_mpc < 0.0 {
            return Err(FlrwError::PhysicalDomain {
                what: format!("distance modulus undefined for D_L < 0 at z = {z}"),
            });
        }
        Ok(5.0 * dl_mpc.log10() + 25.0)
    }

    /// Lookback time to redshift z.
    pub fn lookback_time(&self, z: f64) -> FlrwResult<Time> {
        Ok(gyr(self.hubble_time_gyr() * self.lookback_integral(z)?))
    }

    /// Age of the universe at redshift z.
    ///
    /// Computed in scale factor over (0, 1/(1+z)] so no infinite redshift
    /// domain is ever integrated.
    pub fn age(&self, z: f64) -> FlrwResult<Time> {
        Ok(gyr(self.hubble_time_gyr() * self.age_integral(z)?))
    }

    /// Proper transverse scale [kpc/arcmin] at redshift z.
    pub fn kpc_proper_per_arcmin(&self, z: f64) -> FlrwResult<KpcPerArcmin> {
        let da_kpc = mpc_value(self.angular_diameter_distance(z)?) * KPC_PER_MPC;
        Ok(da_kpc * RADIAN_PER_ARCMIN)
    }

    /// Comoving transverse scale [kpc/arcmin] at redshift z.
    pub fn kpc_comoving_per_arcmin(&self, z: f64) -> FlrwResult<KpcPerArcmin> {
        let dm_kpc = mpc_value(self.comoving_transverse_distance(z)?) * KPC_PER_MPC;
        Ok(dm_kpc * RADIAN_PER_ARCMIN)
    }

    /// Angle [arcsec] subtended by one proper kpc at redshift z.
    ///
    /// Diverges (+∞) as z → 0, the limit of the small-angle formula.
    pub fn arcsec_per_kpc_proper(&self, z: f64) -> FlrwResult<ArcsecPerKpc> {
        let da_kpc = mpc_value(self.angular_diameter_distance(z)?) * KPC_PER_MPC;
        Ok(ARCSEC_PER_RADIAN / da_kpc)
    }

    /// Angle [arcsec] subtended by one comoving kpc at redshift z.
    pub fn arcsec_per_kpc_comoving(&self, z: f64) -> FlrwResult<ArcsecPerKpc> {
        let dm_kpc = mpc_value(self.comoving_transverse_distance(z)?) * KPC_PER_MPC;
        Ok(ARCSEC_PER_RADIAN / dm_kpc)
    }

    /// Dimensionless line-of-sight comoving integral ∫₀^z dz'/E.
    pub(crate) fn comoving_integral(&self, z: f64) -> FlrwResult<f64> {
        validation::validate_redshift(z)?;
        if self.is_analytic_flat_lcdm() {
            return self.comoving_integral_lcdm(z);
        }
        let est = integrate(
            |zz| self.inv_efunc_kernel(zz),
            0.0,
            z,
            &QuadratureConfig::default(),
        )?;
        Ok(est.value)
    }

    /// Curvature-mapped transverse integral.
    pub(crate) fn transverse_integral(&self, z: f64) -> FlrwResult<f64> {
        let xi = self.comoving_integral(z)?;
        let ok0 = self.ok0();
        if ok0 == 0.0 {
            Ok(xi)
        } else if ok0 > 0.0 {
            let sqrt_ok = ok0.sqrt();
            Ok((sqrt_ok * xi).sinh() / sqrt_ok)
        } else {
            let sqrt_ok = (-ok0).sqrt();
            Ok((sqrt_ok * xi).sin() / sqrt_ok)
        }
    }

    /// Dimensionless lookback integral ∫₀^z dz'/[(1+z')E].
    pub(crate) fn lookback_integral(&self, z: f64) -> FlrwResult<f64> {
        validation::validate_redshift(z)?;
        if self.is_analytic_flat_lcdm() && self.om0() > 0.0 && self.ode0() >= 0.0 {
            return Ok(self.age_integral_lcdm(0.0) - self.age_integral_lcdm(z));
        }
        let est = integrate(
            |zz| Ok(self.inv_efunc_kernel(zz)? / (1.0 + zz)),
            0.0,
            z,
            &QuadratureConfig::default(),
        )?;
        Ok(est.value)
    }

    /// Dimensionless age integral ∫_z^∞ dz'/[(1+z')E], evaluated in scale
    /// factor as ∫₀^{1/(1+z)} da/[a·E(1/a − 1)].
    pub(crate) fn age_integral(&self, z: f64) -> FlrwResult<f64> {
        validation::validate_redshift(z)?;
        if self.is_analytic_flat_lcdm() && self.om0() > 0.0 && self.ode0() >= 0.0 {
            return Ok(self.age_integral_lcdm(z));
        }
        let a_z = 1.0 / (1.0 + z);
        let est = integrate(
            |a| {
                let inv_e = self.inv_efunc_kernel(1.0 / a - 1.0)?;
                Ok(inv_e / a)
            },
            0.0,
            a_z,
            &QuadratureConfig::default(),
        )?;
        Ok(est.value)
    }

    /// Quadrature kernel 1/E with the radicand guard.
    fn inv_efunc_kernel(&self, z: f64) -> Result<f64, NumError> {
        let e2 = self.e2_raw(z);
        if !(e2 > 0.0) || !e2.is_finite() {
            return Err(NumError::Evaluation {
                what: format!("E^2({z}) = {e2:.6e} is not positive and finite"),
            });
        }
        Ok(1.0 / e2.sqrt())
    }

    /// Flat matter+Λ comoving integral.
    ///
    /// For 0 < Om0 < 1, ∫ du/√(Om·u³ + Ode) reduces to the incomplete
    /// elliptic integral of the first kind with fixed parameter
    /// m = (2+√3)/4; the Om0 = 1 (Einstein-de Sitter) and Om0 = 0
    /// (de Sitter) limits are elementary.
    fn comoving_integral_lcdm(&self, z: f64) -> FlrwResult<f64> {
        let om0 = self.om0();
        let ode0 = self.ode0();
        if om0 == 0.0 {
            // E ≡ 1
            return Ok(z);
        }
        if ode0 <= 0.0 {
            if om0 == 1.0 && ode0 == 0.0 {
                return Ok(2.0 * (1.0 - 1.0 / (1.0 + z).sqrt()));
            }
            // Ode0 < 0 has no elliptic reduction with these branch cuts
            let est = integrate(
                |zz| self.inv_efunc_kernel(zz),
                0.0,
                z,
                &QuadratureConfig::default(),
            )?;
            return Ok(est.value);
        }

        trace!(z, om0, "elliptic fast path");
        let s = (ode0 / om0).cbrt();
        let sqrt3 = 3.0f64.sqrt();
        let prefactor = 1.0 / (3.0f64.powf(0.25) * s.sqrt());
        let t = |y: f64| -> FlrwResult<f64> {
            let phi = ((y + s * (1.0 - sqrt3)) / (y + s * (1.0 + sqrt3))).acos();
            Ok(prefactor * ellint_f(phi, LCDM_ELLIPTIC_M)?)
        };
        Ok((t(1.0)? - t(1.0 + z)?) / om0.sqrt())
    }

    /// Flat matter+Λ age integral (2/(3√Ode0))·asinh(√(Ode0/Om0)(1+z)^-3/2),
    /// degenerating to (2/3)(1+z)^-3/2 for Einstein-de Sitter.
    fn age_integral_lcdm(&self, z: f64) -> f64 {
        let om0 = self.om0();
        let ode0 = self.ode0();
        let zfac = (1.0 + z).powf(-1.5);
        if ode0 <= 0.0 {
            return 2.0 / 3.0 * zfac;
        }
        2.0 / (3.0 * ode0.sqrt()) * ((ode0 / om0).sqrt() * zfac).asinh()
    }
}
