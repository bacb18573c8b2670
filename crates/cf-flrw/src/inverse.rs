//! Inverse lookups: redshift at a given age, time, or distance.
//!
//! Every forward quantity here is monotonic in z over the physically
//! interesting range, so a bracketed Brent search against the forward
//! function recovers z. The caller bounds the search; no solution in the
//! bracket is an explicit error, never a clamped result.

use crate::cosmology::FlrwCosmology;
use crate::error::{FlrwError, FlrwResult};
use cf_core::units::{Length, Time, gyr_value, mpc_value};
use cf_num::{NumError, RootConfig, find_root_brent};
use std::cell::RefCell;

/// Redshift search bracket for inverse lookups.
#[derive(Clone, Copy, Debug)]
pub struct ZBracket {
    pub zmin: f64,
    pub zmax: f64,
}

impl Default for ZBracket {
    fn default() -> Self {
        Self {
            zmin: 1e-8,
            zmax: 1000.0,
        }
    }
}

impl ZBracket {
    fn validate(&self) -> FlrwResult<()> {
        if !self.zmin.is_finite() || !self.zmax.is_finite() || self.zmin <= -1.0 {
            return Err(FlrwError::Configuration {
                what: format!(
                    "bracket [{}, {}] must be finite with zmin > -1",
                    self.zmin, self.zmax
                ),
            });
        }
        if self.zmin >= self.zmax {
            return Err(FlrwError::Configuration {
                what: format!("bracket [{}, {}] must have zmin < zmax", self.zmin, self.zmax),
            });
        }
        Ok(())
    }
}

impl FlrwCosmology {
    /// Redshift at which the universe has the given age.
    pub fn z_at_age(&self, target: Time, bracket: &ZBracket) -> FlrwResult<f64> {
        let target_gyr = gyr_value(target);
        self.solve_for_z(bracket, |z| Ok(gyr_value(self.age(z)?) - target_gyr))
    }

    /// Redshift with the given lookback time.
    pub fn z_at_lookback_time(&self, target: Time, bracket: &ZBracket) -> FlrwResult<f64> {
        let target_gyr = gyr_value(target);
        self.solve_for_z(bracket, |z| {
            Ok(gyr_value(self.lookback_time(z)?) - target_gyr)
        })
    }

    /// Redshift at the given line-of-sight comoving distance.
    pub fn z_at_comoving_distance(&self, target: Length, bracket: &ZBracket) -> FlrwResult<f64> {
        let target_mpc = mpc_value(target);
        self.solve_for_z(bracket, |z| {
            Ok(mpc_value(self.comoving_distance(z)?) - target_mpc)
        })
    }

    /// Redshift at the given luminosity distance.
    pub fn z_at_luminosity_distance(&self, target: Length, bracket: &ZBracket) -> FlrwResult<f64> {
        let target_mpc = mpc_value(target);
        self.solve_for_z(bracket, |z| {
            Ok(mpc_value(self.luminosity_distance(z)?) - target_mpc)
        })
    }

    /// Brent search over the bracket, preserving the original error if the
    /// forward model fails mid-search.
    fn solve_for_z<G>(&self, bracket: &ZBracket, residual: G) -> FlrwResult<f64>
    where
        G: Fn(f64) -> FlrwResult<f64>,
    {
        bracket.validate()?;
        let forward_failure: RefCell<Option<FlrwError>> = RefCell::new(None);

        let result = find_root_brent(
            |z| {
                residual(z).map_err(|err| {
                    let what = err.to_string();
                    *forward_failure.borrow_mut() = Some(err);
                    NumError::Evaluation { what }
                })
            },
            bracket.zmin,
            bracket.zmax,
            &RootConfig::default(),
        );

        match result {
            Ok(found) => Ok(found.root),
            Err(err) => Err(forward_failure.into_inner().unwrap_or_else(|| err.into())),
        }
    }
}
