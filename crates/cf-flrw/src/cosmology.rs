//! FLRW cosmology model and expansion-function queries.

use crate::eos::DarkEnergy;
use crate::error::{FlrwError, FlrwResult};
use cf_core::units::constants::{
    C_KM_PER_S, C_M_PER_S, G_SI, KM_PER_MPC, MPC_M, SEC_PER_GYR, SIGMA_SB_SI,
};
use cf_core::units::{Length, MassDensity, Time, gyr, kg_per_m3, mpc};
use cf_core::Real;

/// Hubble rate [km/s/Mpc].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type HubbleRate = f64;

/// Optional constructor parameters shared by every variant.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CosmologyOptions {
    /// CMB temperature at z = 0 [K]; 0 disables the radiation terms
    pub tcmb0: f64,
    /// Effective number of massless neutrino species
    pub neff: f64,
}

impl Default for CosmologyOptions {
    fn default() -> Self {
        Self {
            tcmb0: 2.725,
            neff: 3.04,
        }
    }
}

/// Full parameter set for [`FlrwCosmology::new`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CosmologyParams {
    /// Hubble constant [km/s/Mpc]
    pub h0: f64,
    /// Matter density fraction at z = 0
    pub om0: f64,
    /// Dark-energy density fraction at z = 0; `None` derives it so the
    /// model closes flat (Ok0 = 0 exactly)
    pub ode0: Option<f64>,
    /// CMB temperature at z = 0 [K]
    pub tcmb0: f64,
    /// Effective number of massless neutrino species
    pub neff: f64,
    /// Dark-energy equation of state
    pub dark_energy: DarkEnergy,
}

/// An immutable FLRW cosmology.
///
/// All derived constants (photon/neutrino densities, curvature, critical
/// density, Hubble distance/time) are computed eagerly at construction, so
/// a constructed instance is safe to share across threads with no
/// synchronization. Changing a parameter means constructing a new instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FlrwCosmology {
    h0: Real,
    om0: Real,
    ode0: Real,
    ok0: Real,
    ogamma0: Real,
    onu0: Real,
    tcmb0: Real,
    neff: Real,
    dark_energy: DarkEnergy,
    critical_density0_kg_m3: Real,
    hubble_distance_mpc: Real,
    hubble_time_gyr: Real,
}

impl FlrwCosmology {
    /// Construct from a full parameter set.
    ///
    /// Validates physical bounds (H0 > 0, Om0 >= 0, Tcmb0 >= 0, Neff >= 0,
    /// finite EOS parameters) and derives all cached constants.
    pub fn new(params: CosmologyParams) -> FlrwResult<Self> {
        validation::validate_hubble_constant(params.h0)?;
        validation::validate_density_fraction("Om0", params.om0)?;
        validation::validate_temperature(params.tcmb0)?;
        validation::validate_neff(params.neff)?;
        params.dark_energy.validate()?;
        if let Some(ode0) = params.ode0 {
            validation::validate_finite("Ode0", ode0)?;
        }

        let h0_per_s = params.h0 * 1.0e3 / MPC_M;
        let critical_density0_kg_m3 =
            3.0 * h0_per_s * h0_per_s / (8.0 * std::f64::consts::PI * G_SI);

        let (ogamma0, onu0) = if params.tcmb0 > 0.0 {
            // Blackbody photon energy density against the critical density,
            // then the standard massless-neutrino scaling per species.
            let radiation_constant = 4.0 * SIGMA_SB_SI / C_M_PER_S;
            let photon_energy_density = radiation_constant * params.tcmb0.powi(4);
            let ogamma0 =
                photon_energy_density / (C_M_PER_S * C_M_PER_S) / critical_density0_kg_m3;
            let species_factor = 7.0 / 8.0 * (4.0f64 / 11.0).powf(4.0 / 3.0);
            (ogamma0, params.neff * species_factor * ogamma0)
        } else {
            (0.0, 0.0)
        };

        let (ode0, ok0) = match params.ode0 {
            // Flat: close the budget exactly, Ok0 pinned to zero.
            None => (1.0 - params.om0 - ogamma0 - onu0, 0.0),
            Some(ode0) => (ode0, 1.0 - params.om0 - ode0 - ogamma0 - onu0),
        };

        Ok(Self {
            h0: params.h0,
            om0: params.om0,
            ode0,
            ok0,
            ogamma0,
            onu0,
            tcmb0: params.tcmb0,
            neff: params.neff,
            dark_energy: params.dark_energy,
            critical_density0_kg_m3,
            hubble_distance_mpc: C_KM_PER_S / params.h0,
            hubble_time_gyr: KM_PER_MPC / params.h0 / SEC_PER_GYR,
        })
    }

    /// Flat ΛCDM: dark energy is a cosmological constant, Ok0 = 0.
    pub fn flat_lambda_cdm(h0: f64, om0: f64, options: &CosmologyOptions) -> FlrwResult<Self> {
        Self::new(CosmologyParams {
            h0,
            om0,
            ode0: None,
            tcmb0: options.tcmb0,
            neff: options.neff,
            dark_energy: DarkEnergy::CosmologicalConstant,
        })
    }

    /// ΛCDM with explicit dark-energy density (curvature derived).
    pub fn lambda_cdm(h0: f64, om0: f64, ode0: f64, options: &CosmologyOptions) -> FlrwResult<Self> {
        Self::new(CosmologyParams {
            h0,
            om0,
            ode0: Some(ode0),
            tcmb0: options.tcmb0,
            neff: options.neff,
            dark_energy: DarkEnergy::CosmologicalConstant,
        })
    }

    /// Flat wCDM: constant equation of state w0, Ok0 = 0.
    pub fn flat_w_cdm(h0: f64, om0: f64, w0: f64, options: &CosmologyOptions) -> FlrwResult<Self> {
        Self::new(CosmologyParams {
            h0,
            om0,
            ode0: None,
            tcmb0: options.tcmb0,
            neff: options.neff,
            dark_energy: DarkEnergy::ConstantW { w0 },
        })
    }

    /// wCDM with explicit dark-energy density (curvature derived).
    pub fn w_cdm(
        h0: f64,
        om0: f64,
        ode0: f64,
        w0: f64,
        options: &CosmologyOptions,
    ) -> FlrwResult<Self> {
        Self::new(CosmologyParams {
            h0,
            om0,
            ode0: Some(ode0),
            tcmb0: options.tcmb0,
            neff: options.neff,
            dark_energy: DarkEnergy::ConstantW { w0 },
        })
    }

    /// CPL w0waCDM with explicit dark-energy density (curvature derived).
    pub fn w0wa_cdm(
        h0: f64,
        om0: f64,
        ode0: f64,
        w0: f64,
        wa: f64,
        options: &CosmologyOptions,
    ) -> FlrwResult<Self> {
        Self::new(CosmologyParams {
            h0,
            om0,
            ode0: Some(ode0),
            tcmb0: options.tcmb0,
            neff: options.neff,
            dark_energy: DarkEnergy::Cpl { w0, wa },
        })
    }

    /// Pivot-CPL wpwaCDM with explicit dark-energy density.
    pub fn wpwa_cdm(
        h0: f64,
        om0: f64,
        ode0: f64,
        wp: f64,
        wa: f64,
        zp: f64,
        options: &CosmologyOptions,
    ) -> FlrwResult<Self> {
        Self::new(CosmologyParams {
            h0,
            om0,
            ode0: Some(ode0),
            tcmb0: options.tcmb0,
            neff: options.neff,
            dark_energy: DarkEnergy::PivotCpl { wp, wa, zp },
        })
    }

    /// Linear-in-z w0wzCDM with explicit dark-energy density.
    pub fn w0wz_cdm(
        h0: f64,
        om0: f64,
        ode0: f64,
        w0: f64,
        wz: f64,
        options: &CosmologyOptions,
    ) -> FlrwResult<Self> {
        Self::new(CosmologyParams {
            h0,
            om0,
            ode0: Some(ode0),
            tcmb0: options.tcmb0,
            neff: options.neff,
            dark_energy: DarkEnergy::LinearRedshift { w0, wz },
        })
    }

    // Plain accessors

    /// Hubble constant [km/s/Mpc].
    pub fn h0(&self) -> HubbleRate {
        self.h0
    }

    pub fn om0(&self) -> f64 {
        self.om0
    }

    pub fn ode0(&self) -> f64 {
        self.ode0
    }

    pub fn ok0(&self) -> f64 {
        self.ok0
    }

    pub fn ogamma0(&self) -> f64 {
        self.ogamma0
    }

    pub fn onu0(&self) -> f64 {
        self.onu0
    }

    /// CMB temperature at z = 0 [K].
    pub fn tcmb0(&self) -> f64 {
        self.tcmb0
    }

    pub fn neff(&self) -> f64 {
        self.neff
    }

    pub fn dark_energy(&self) -> &DarkEnergy {
        &self.dark_energy
    }

    pub fn is_flat(&self) -> bool {
        self.ok0 == 0.0
    }

    /// Critical density at z = 0.
    pub fn critical_density0(&self) -> MassDensity {
        kg_per_m3(self.critical_density0_kg_m3)
    }

    /// Hubble distance c/H0.
    pub fn hubble_distance(&self) -> Length {
        mpc(self.hubble_distance_mpc)
    }

    /// Hubble time 1/H0.
    pub fn hubble_time(&self) -> Time {
        gyr(self.hubble_time_gyr)
    }

    pub(crate) fn hubble_distance_mpc(&self) -> Real {
        self.hubble_distance_mpc
    }

    pub(crate) fn hubble_time_gyr(&self) -> Real {
        self.hubble_time_gyr
    }

    /// Scale factor a = 1/(1+z).
    pub fn scale_factor(&self, z: f64) -> FlrwResult<f64> {
        validation::validate_redshift(z)?;
        Ok(1.0 / (1.0 + z))
    }

    /// E^2(z) without redshift validation, for integration kernels whose
    /// interval is already validated at the endpoints.
    pub(crate) fn e2_raw(&self, z: f64) -> Real {
        let zp1 = 1.0 + z;
        let zp1_2 = zp1 * zp1;
        self.om0 * zp1_2 * zp1
            + self.ok0 * zp1_2
            + (self.ogamma0 + self.onu0) * zp1_2 * zp1_2
            + self.ode0 * self.dark_energy.density_scale(z)
    }

    /// The Friedmann radicand E^2(z).
    pub fn e2(&self, z: f64) -> FlrwResult<f64> {
        validation::validate_redshift(z)?;
        let e2 = self.e2_raw(z);
        if !e2.is_finite() {
            return Err(FlrwError::PhysicalDomain {
                what: format!("E^2({z}) is not finite"),
            });
        }
        Ok(e2)
    }

    /// Dimensionless expansion function E(z) = H(z)/H0.
    ///
    /// A negative radicand (possible for exotic equation-of-state
    /// combinations) is surfaced as [`FlrwError::PhysicalDomain`], never as
    /// a silent NaN.
    pub fn efunc(&self, z: f64) -> FlrwResult<f64> {
        let e2 = self.e2(z)?;
        if e2 < 0.0 {
            return Err(FlrwError::PhysicalDomain {
                what: format!("E^2({z}) = {e2:.6e} is negative"),
            });
        }
        Ok(e2.sqrt())
    }

    /// 1/E(z).
    pub fn inv_efunc(&self, z: f64) -> FlrwResult<f64> {
        Ok(1.0 / self.efunc(z)?)
    }

    /// Hubble rate H(z) [km/s/Mpc].
    pub fn hubble_rate(&self, z: f64) -> FlrwResult<HubbleRate> {
        Ok(self.h0 * self.efunc(z)?)
    }

    /// Matter density fraction at z.
    pub fn om(&self, z: f64) -> FlrwResult<f64> {
        let e2 = self.nonzero_e2(z)?;
        let zp1 = 1.0 + z;
        Ok(self.om0 * zp1.powi(3) / e2)
    }

    /// Dark-energy density fraction at z.
    pub fn ode(&self, z: f64) -> FlrwResult<f64> {
        let e2 = self.nonzero_e2(z)?;
        Ok(self.ode0 * self.dark_energy.density_scale(z) / e2)
    }

    /// Photon density fraction at z.
    pub fn ogamma(&self, z: f64) -> FlrwResult<f64> {
        let e2 = self.nonzero_e2(z)?;
        let zp1 = 1.0 + z;
        Ok(self.ogamma0 * zp1.powi(4) / e2)
    }

    /// Neutrino density fraction at z (massless approximation).
    pub fn onu(&self, z: f64) -> FlrwResult<f64> {
        let e2 = self.nonzero_e2(z)?;
        let zp1 = 1.0 + z;
        Ok(self.onu0 * zp1.powi(4) / e2)
    }

    /// Curvature density fraction at z.
    pub fn ok(&self, z: f64) -> FlrwResult<f64> {
        let e2 = self.nonzero_e2(z)?;
        let zp1 = 1.0 + z;
        Ok(self.ok0 * zp1 * zp1 / e2)
    }

    /// Equation-of-state value w(z).
    pub fn w(&self, z: f64) -> FlrwResult<f64> {
        validation::validate_redshift(z)?;
        Ok(self.dark_energy.w(z))
    }

    /// Critical density at z.
    pub fn critical_density(&self, z: f64) -> FlrwResult<MassDensity> {
        Ok(kg_per_m3(self.critical_density0_kg_m3 * self.e2(z)?))
    }

    /// Whether the ΛCDM closed forms apply (cosmological constant, flat,
    /// no radiation).
    pub(crate) fn is_analytic_flat_lcdm(&self) -> bool {
        self.dark_energy.is_cosmological_constant()
            && self.ok0 == 0.0
            && self.ogamma0 == 0.0
            && self.onu0 == 0.0
    }

    fn nonzero_e2(&self, z: f64) -> FlrwResult<f64> {
        let e2 = self.e2(z)?;
        if e2 == 0.0 {
            return Err(FlrwError::PhysicalDomain {
                what: format!("density fractions undefined where E({z}) = 0"),
            });
        }
        Ok(e2)
    }
}

/// Validation helpers for constructor and query inputs.
pub(crate) mod validation {
    use super::*;

    pub fn validate_hubble_constant(h0: f64) -> FlrwResult<()> {
        if !h0.is_finite() || h0 <= 0.0 {
            return Err(FlrwError::Configuration {
                what: format!("H0 must be positive and finite, got {h0}"),
            });
        }
        Ok(())
    }

    pub fn validate_density_fraction(name: &str, v: f64) -> FlrwResult<()> {
        if !v.is_finite() || v < 0.0 {
            return Err(FlrwError::Configuration {
                what: format!("{name} must be non-negative and finite, got {v}"),
            });
        }
        Ok(())
    }

    pub fn validate_finite(name: &str, v: f64) -> FlrwResult<()> {
        if !v.is_finite() {
            return Err(FlrwError::Configuration {
                what: format!("{name} must be finite, got {v}"),
            });
        }
        Ok(())
    }

    pub fn validate_temperature(tcmb0: f64) -> FlrwResult<()> {
        if !tcmb0.is_finite() || tcmb0 < 0.0 {
            return Err(FlrwError::Configuration {
                what: format!("Tcmb0 must be non-negative and finite, got {tcmb0}"),
            });
        }
        Ok(())
    }

    pub fn validate_neff(neff: f64) -> FlrwResult<()> {
        if !neff.is_finite() || neff < 0.0 {
            return Err(FlrwError::Configuration {
                what: format!("Neff must be non-negative and finite, got {neff}"),
            });
        }
        Ok(())
    }

    /// Redshifts must be finite and strictly above -1 (a > 0).
    pub fn validate_redshift(z: f64) -> FlrwResult<()> {
        if !z.is_finite() || z <= -1.0 {
            return Err(FlrwError::Domain { z });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_radiation() -> CosmologyOptions {
        CosmologyOptions {
            tcmb0: 0.0,
            neff: 3.04,
        }
    }

    #[test]
    fn reject_non_positive_h0() {
        assert!(FlrwCosmology::flat_lambda_cdm(0.0, 0.3, &no_radiation()).is_err());
        assert!(FlrwCosmology::flat_lambda_cdm(-70.0, 0.3, &no_radiation()).is_err());
        assert!(FlrwCosmology::flat_lambda_cdm(f64::NAN, 0.3, &no_radiation()).is_err());
    }

    #[test]
    fn reject_negative_matter_density() {
        assert!(FlrwCosmology::flat_lambda_cdm(70.0, -0.1, &no_radiation()).is_err());
    }

    #[test]
    fn reject_negative_temperature_and_neff() {
        let bad_t = CosmologyOptions {
            tcmb0: -1.0,
            neff: 3.04,
        };
        assert!(FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &bad_t).is_err());
        let bad_n = CosmologyOptions {
            tcmb0: 2.725,
            neff: -0.5,
        };
        assert!(FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &bad_n).is_err());
    }

    #[test]
    fn hubble_scales() {
        let c = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        assert!((cf_core::mpc_value(c.hubble_distance()) - 4282.7494).abs() < 1e-4);
        assert!((cf_core::gyr_value(c.hubble_time()) - 13.968_460_309_725_56).abs() < 1e-9);
    }

    #[test]
    fn unit_quantities_expose_si() {
        use cf_core::units::constants::{MPC_M, SEC_PER_GYR};
        use uom::si::length::meter;
        use uom::si::time::second;

        let c = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        let d_m = c.hubble_distance().get::<meter>();
        assert!((d_m / MPC_M - 4282.7494).abs() < 1e-4);
        let t_s = c.hubble_time().get::<second>();
        assert!((t_s / SEC_PER_GYR - 13.968_460_309_725_56).abs() < 1e-9);
    }

    #[test]
    fn critical_density_today() {
        let c = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        let rho = cf_core::kg_per_m3_value(c.critical_density0());
        assert!((rho - 9.203_873_922_972_52e-27).abs() / rho < 1e-12);
    }

    #[test]
    fn radiation_densities_wmap7() {
        let c = FlrwCosmology::flat_lambda_cdm(70.4, 0.272, &CosmologyOptions::default()).unwrap();
        assert!((c.ogamma0() - 4.986_039_863_817_2e-5).abs() / c.ogamma0() < 1e-10);
        assert!((c.onu0() - 3.442_393_063_224_4e-5).abs() / c.onu0() < 1e-10);
        assert!((c.ode0() - 0.727_915_715_670_729_6).abs() < 1e-12);
    }

    #[test]
    fn zero_temperature_disables_radiation_exactly() {
        let c = FlrwCosmology::flat_lambda_cdm(70.4, 0.272, &no_radiation()).unwrap();
        assert_eq!(c.ogamma0(), 0.0);
        assert_eq!(c.onu0(), 0.0);
    }

    #[test]
    fn zero_neff_disables_neutrinos_only() {
        let opts = CosmologyOptions {
            tcmb0: 2.725,
            neff: 0.0,
        };
        let c = FlrwCosmology::flat_lambda_cdm(70.4, 0.272, &opts).unwrap();
        assert_eq!(c.onu0(), 0.0);
        assert!(c.ogamma0() > 0.0);
        assert_eq!(c.onu(3.0).unwrap(), 0.0);
        assert!(c.ogamma(3.0).unwrap() > 0.0);
    }

    #[test]
    fn flat_closure_holds_with_radiation() {
        let c = FlrwCosmology::flat_lambda_cdm(70.4, 0.272, &CosmologyOptions::default()).unwrap();
        let total = c.om0() + c.ode0() + c.ok0() + c.ogamma0() + c.onu0();
        assert!((total - 1.0).abs() < 1e-14);
        for z in [0.0, 0.5, 10.0, 1100.0] {
            let sum = c.om(z).unwrap()
                + c.ode(z).unwrap()
                + c.ok(z).unwrap()
                + c.ogamma(z).unwrap()
                + c.onu(z).unwrap();
            assert!((sum - 1.0).abs() < 1e-10, "z={z}: sum={sum}");
        }
    }

    #[test]
    fn curvature_sign_from_density_budget() {
        let open = FlrwCosmology::lambda_cdm(70.0, 0.3, 0.6, &no_radiation()).unwrap();
        assert!((open.ok0() - 0.1).abs() < 1e-14);
        assert!(!open.is_flat());

        let closed = FlrwCosmology::lambda_cdm(70.0, 0.4, 0.7, &no_radiation()).unwrap();
        assert!((closed.ok0() - -0.1).abs() < 1e-14);

        let flat = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        assert_eq!(flat.ok0(), 0.0);
        assert!(flat.is_flat());
    }

    #[test]
    fn efunc_reference_value() {
        let c = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        assert_eq!(c.efunc(0.0).unwrap(), 1.0);
        assert!((c.efunc(2.0).unwrap() - 2.966_479_394_838_265).abs() < 1e-12);
    }

    #[test]
    fn efunc_stable_to_high_redshift() {
        let c = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &CosmologyOptions::default()).unwrap();
        let e = c.efunc(1.0e4).unwrap();
        assert!(e.is_finite());
        assert!(e > 0.0);
    }

    #[test]
    fn redshift_domain_is_enforced() {
        let c = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        assert!(matches!(c.efunc(-1.0), Err(FlrwError::Domain { .. })));
        assert!(matches!(c.efunc(-2.0), Err(FlrwError::Domain { .. })));
        assert!(matches!(c.efunc(f64::NAN), Err(FlrwError::Domain { .. })));
        // Blueshifted but physical
        assert!(c.efunc(-0.5).is_ok());
    }

    #[test]
    fn negative_radicand_is_a_physical_domain_error() {
        // Exotic EOS: the negative curvature term overwhelms E^2 at modest z
        let c = FlrwCosmology::w_cdm(70.0, 0.1, 2.0, -4.0, &no_radiation()).unwrap();
        // Ok0 = 1 - 0.1 - 2.0 = -1.1 with the dark-energy term dying off fast
        let result = c.efunc(2.0);
        assert!(matches!(result, Err(FlrwError::PhysicalDomain { .. })));
    }

    #[test]
    fn w_query_dispatches_to_eos() {
        let c = FlrwCosmology::w0wa_cdm(70.0, 0.3, 0.7, -0.9, 0.2, &no_radiation()).unwrap();
        assert!((c.w(1.0).unwrap() - -0.8).abs() < 1e-12);
        assert!(c.w(-1.0).is_err());
    }

    #[test]
    fn monotone_efunc_for_matter_lambda() {
        let c = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        let mut prev = c.efunc(0.0).unwrap();
        for i in 1..=100 {
            let z = 0.2 * i as f64;
            let e = c.efunc(z).unwrap();
            assert!(e >= prev, "E not monotone at z={z}");
            prev = e;
        }
    }

    #[test]
    fn instances_are_value_objects() {
        let a = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
        let b = a.clone();
        assert_eq!(a, b);
    }
}
