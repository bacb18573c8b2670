//! cf-flrw: FLRW cosmology calculations for cosmoflow.
//!
//! Provides:
//! - Dark-energy equation-of-state variants (Λ, constant-w, CPL,
//!   linear-in-z, pivot-CPL)
//! - The immutable `FlrwCosmology` model with eager derived constants
//! - Distance/time/density measures built on adaptive quadrature with
//!   closed-form fast paths for flat ΛCDM
//! - Inverse lookups (redshift at a given age or distance)
//! - Vectorized evaluation over redshift arrays
//! - A static catalog of literature parameter sets
//!
//! # Architecture
//!
//! Every computation is a pure function of (model, redshift): there is no
//! global "current cosmology" and no interior mutability, so instances can
//! be shared freely across threads. The numerics live in `cf-num`; this
//! crate decides what the kernels mean and what their failures mean
//! (negative radicand → physical-domain error, subdivision exhaustion →
//! convergence error, empty root bracket → no-solution error).
//!
//! # Example
//!
//! ```
//! use cf_flrw::{CosmologyOptions, FlrwCosmology};
//! use cf_core::units::{gyr_value, mpc_value};
//!
//! let cosmo = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &CosmologyOptions::default()).unwrap();
//! let d = cosmo.comoving_distance(1.0).unwrap();
//! let age = cosmo.age(0.0).unwrap();
//! println!("D_C(1) = {} Mpc, age = {} Gyr", mpc_value(d), gyr_value(age));
//! ```

pub mod catalog;
pub mod cosmology;
pub mod distance;
pub mod eos;
pub mod error;
pub mod inverse;
pub mod sweep;

// Re-exports for ergonomics
pub use catalog::{CosmologyCatalogEntry, filter_literature_catalog, literature_catalog};
pub use cosmology::{CosmologyOptions, CosmologyParams, FlrwCosmology, HubbleRate};
pub use distance::{ArcsecPerKpc, KpcPerArcmin};
pub use eos::DarkEnergy;
pub use error::{FlrwError, FlrwResult};
pub use inverse::ZBracket;
pub use sweep::{CosmoQuantity, evaluate_quantity, evaluate_quantity_sweep};
