//! Vectorized evaluation over redshift arrays.
//!
//! Every public scalar quantity is addressable through [`CosmoQuantity`],
//! and [`evaluate_quantity_sweep`] maps it over an ordered redshift slice.
//! Elements are independent, so the sweep runs on the rayon thread pool;
//! output order always matches input order. The error policy is whole-call
//! abort: the first invalid element fails the entire sweep, matching the
//! scalar call semantics.

use crate::cosmology::FlrwCosmology;
use crate::error::FlrwResult;
use cf_core::units::{gyr_value, kg_per_m3_value, mpc_value};
use rayon::prelude::*;

/// A scalar cosmological quantity addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CosmoQuantity {
    Efunc,
    HubbleRate,
    MatterFraction,
    DarkEnergyFraction,
    PhotonFraction,
    NeutrinoFraction,
    CurvatureFraction,
    EquationOfState,
    CriticalDensity,
    ComovingDistance,
    TransverseComovingDistance,
    AngularDiameterDistance,
    LuminosityDistance,
    DistanceModulus,
    LookbackTime,
    Age,
    KpcProperPerArcmin,
    KpcComovingPerArcmin,
    ArcsecPerKpcProper,
    ArcsecPerKpcComoving,
}

impl CosmoQuantity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Efunc => "E(z)",
            Self::HubbleRate => "H(z)",
            Self::MatterFraction => "Om(z)",
            Self::DarkEnergyFraction => "Ode(z)",
            Self::PhotonFraction => "Ogamma(z)",
            Self::NeutrinoFraction => "Onu(z)",
            Self::CurvatureFraction => "Ok(z)",
            Self::EquationOfState => "w(z)",
            Self::CriticalDensity => "rho_crit(z)",
            Self::ComovingDistance => "D_C(z)",
            Self::TransverseComovingDistance => "D_M(z)",
            Self::AngularDiameterDistance => "D_A(z)",
            Self::LuminosityDistance => "D_L(z)",
            Self::DistanceModulus => "mu(z)",
            Self::LookbackTime => "t_L(z)",
            Self::Age => "t(z)",
            Self::KpcProperPerArcmin => "proper scale",
            Self::KpcComovingPerArcmin => "comoving scale",
            Self::ArcsecPerKpcProper => "inverse proper scale",
            Self::ArcsecPerKpcComoving => "inverse comoving scale",
        }
    }

    /// Conventional unit of the evaluated value.
    pub fn unit_label(self) -> &'static str {
        match self {
            Self::Efunc
            | Self::MatterFraction
            | Self::DarkEnergyFraction
            | Self::PhotonFraction
            | Self::NeutrinoFraction
            | Self::CurvatureFraction
            | Self::EquationOfState => "",
            Self::HubbleRate => "km/s/Mpc",
            Self::CriticalDensity => "kg/m^3",
            Self::ComovingDistance
            | Self::TransverseComovingDistance
            | Self::AngularDiameterDistance
            | Self::LuminosityDistance => "Mpc",
            Self::DistanceModulus => "mag",
            Self::LookbackTime | Self::Age => "Gyr",
            Self::KpcProperPerArcmin | Self::KpcComovingPerArcmin => "kpc/arcmin",
            Self::ArcsecPerKpcProper | Self::ArcsecPerKpcComoving => "arcsec/kpc",
        }
    }
}

/// Evaluate one quantity at one redshift, in the conventional unit given by
/// [`CosmoQuantity::unit_label`].
pub fn evaluate_quantity(
    cosmo: &FlrwCosmology,
    quantity: CosmoQuantity,
    z: f64,
) -> FlrwResult<f64> {
    match quantity {
        CosmoQuantity::Efunc => cosmo.efunc(z),
        CosmoQuantity::HubbleRate => cosmo.hubble_rate(z),
        CosmoQuantity::MatterFraction => cosmo.om(z),
        CosmoQuantity::DarkEnergyFraction => cosmo.ode(z),
        CosmoQuantity::PhotonFraction => cosmo.ogamma(z),
        CosmoQuantity::NeutrinoFraction => cosmo.onu(z),
        CosmoQuantity::CurvatureFraction => cosmo.ok(z),
        CosmoQuantity::EquationOfState => cosmo.w(z),
        CosmoQuantity::CriticalDensity => Ok(kg_per_m3_value(cosmo.critical_density(z)?)),
        CosmoQuantity::ComovingDistance => Ok(mpc_value(cosmo.comoving_distance(z)?)),
        CosmoQuantity::TransverseComovingDistance => {
            Ok(mpc_value(cosmo.comoving_transverse_distance(z)?))
        }
        CosmoQuantity::AngularDiameterDistance => {
            Ok(mpc_value(cosmo.angular_diameter_distance(z)?))
        }
        CosmoQuantity::LuminosityDistance => Ok(mpc_value(cosmo.luminosity_distance(z)?)),
        CosmoQuantity::DistanceModulus => cosmo.distmod(z),
        CosmoQuantity::LookbackTime => Ok(gyr_value(cosmo.lookback_time(z)?)),
        CosmoQuantity::Age => Ok(gyr_value(cosmo.age(z)?)),
        CosmoQuantity::KpcProperPerArcmin => cosmo.kpc_proper_per_arcmin(z),
        CosmoQuantity::KpcComovingPerArcmin => cosmo.kpc_comoving_per_arcmin(z),
        CosmoQuantity::ArcsecPerKpcProper => cosmo.arcsec_per_kpc_proper(z),
        CosmoQuantity::ArcsecPerKpcComoving => cosmo.arcsec_per_kpc_comoving(z),
    }
}

/// Evaluate one quantity over an ordered redshift slice.
///
/// Output element i corresponds to `redshifts[i]`. Aborts on the first
/// element whose evaluation fails.
pub fn evaluate_quantity_sweep(
    cosmo: &FlrwCosmology,
    quantity: CosmoQuantity,
    redshifts: &[f64],
) -> FlrwResult<Vec<f64>> {
    redshifts
        .par_iter()
        .map(|&z| evaluate_quantity(cosmo, quantity, z))
        .collect()
}
