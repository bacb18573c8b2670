//! Dark-energy equation-of-state variants.
//!
//! Each variant exposes w(z) and the density-evolution factor
//! f(z) = exp(3 ∫₀^z (1+w(z'))/(1+z') dz'), which scales the dark-energy
//! density as Ode(z) = Ode0 · f(z). All five parametrizations admit closed
//! forms, so no per-call quadrature is needed here.

use crate::error::{FlrwError, FlrwResult};

/// Dark-energy equation-of-state parametrization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DarkEnergy {
    /// w ≡ -1 (a cosmological constant); f(z) ≡ 1.
    CosmologicalConstant,

    /// Constant w = w0; f(z) = (1+z)^(3(1+w0)).
    ConstantW { w0: f64 },

    /// CPL (Chevallier-Polarski-Linder): w(z) = w0 + wa·z/(1+z).
    Cpl { w0: f64, wa: f64 },

    /// Linear in redshift: w(z) = w0 + wz·z.
    LinearRedshift { w0: f64, wz: f64 },

    /// CPL reparametrized about a pivot redshift zp:
    /// w(a) = wp + wa·(ap - a) with ap = 1/(1+zp).
    PivotCpl { wp: f64, wa: f64, zp: f64 },
}

impl DarkEnergy {
    /// Equation-of-state value w at redshift z.
    ///
    /// The caller is responsible for z > -1; the model's shared redshift
    /// validation enforces it before dispatching here.
    pub fn w(&self, z: f64) -> f64 {
        match *self {
            Self::CosmologicalConstant => -1.0,
            Self::ConstantW { w0 } => w0,
            Self::Cpl { w0, wa } => w0 + wa * z / (1.0 + z),
            Self::LinearRedshift { w0, wz } => w0 + wz * z,
            Self::PivotCpl { .. } => {
                let (w0, wa) = self.effective_cpl();
                w0 + wa * z / (1.0 + z)
            }
        }
    }

    /// Density-evolution factor f(z) = exp(3 ∫₀^z (1+w)/(1+z') dz').
    pub fn density_scale(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        match *self {
            Self::CosmologicalConstant => 1.0,
            Self::ConstantW { w0 } => zp1.powf(3.0 * (1.0 + w0)),
            Self::Cpl { w0, wa } => {
                zp1.powf(3.0 * (1.0 + w0 + wa)) * (-3.0 * wa * z / zp1).exp()
            }
            Self::LinearRedshift { w0, wz } => {
                zp1.powf(3.0 * (1.0 + w0 - wz)) * (3.0 * wz * z).exp()
            }
            Self::PivotCpl { .. } => {
                let (w0, wa) = self.effective_cpl();
                zp1.powf(3.0 * (1.0 + w0 + wa)) * (-3.0 * wa * z / zp1).exp()
            }
        }
    }

    pub fn is_cosmological_constant(&self) -> bool {
        matches!(self, Self::CosmologicalConstant)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CosmologicalConstant => "Lambda",
            Self::ConstantW { .. } => "wCDM",
            Self::Cpl { .. } => "w0waCDM",
            Self::LinearRedshift { .. } => "w0wzCDM",
            Self::PivotCpl { .. } => "wpwaCDM",
        }
    }

    /// Pivot form reduced to effective CPL (w0, wa).
    fn effective_cpl(&self) -> (f64, f64) {
        match *self {
            Self::PivotCpl { wp, wa, zp } => {
                let ap = 1.0 / (1.0 + zp);
                (wp + wa * (ap - 1.0), wa)
            }
            Self::Cpl { w0, wa } => (w0, wa),
            Self::CosmologicalConstant => (-1.0, 0.0),
            Self::ConstantW { w0 } => (w0, 0.0),
            Self::LinearRedshift { .. } => unreachable!("linear form has no CPL equivalent"),
        }
    }

    /// Reject non-finite parameters (and a pivot at or below z = -1).
    pub(crate) fn validate(&self) -> FlrwResult<()> {
        let check = |name: &str, v: f64| -> FlrwResult<()> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(FlrwError::Configuration {
                    what: format!("equation-of-state parameter {name} must be finite"),
                })
            }
        };
        match *self {
            Self::CosmologicalConstant => Ok(()),
            Self::ConstantW { w0 } => check("w0", w0),
            Self::Cpl { w0, wa } => {
                check("w0", w0)?;
                check("wa", wa)
            }
            Self::LinearRedshift { w0, wz } => {
                check("w0", w0)?;
                check("wz", wz)
            }
            Self::PivotCpl { wp, wa, zp } => {
                check("wp", wp)?;
                check("wa", wa)?;
                check("zp", zp)?;
                if zp <= -1.0 {
                    return Err(FlrwError::Configuration {
                        what: "pivot redshift zp must be > -1".into(),
                    });
                }
                Ok(())
            }
        }
    }
}
