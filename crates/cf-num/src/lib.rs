//! cf-num: numerical engine for cosmoflow.
//!
//! Provides:
//! - Adaptive Gauss-Kronrod quadrature with a hard subdivision budget
//! - Bracketed scalar root finding (Brent's method)
//! - Carlson/Legendre elliptic integrals of the first kind
//!
//! # Architecture
//!
//! This crate is deliberately free of any cosmology: it exposes generic
//! numeric primitives over `Fn(f64) -> NumResult<f64>` closures, so the
//! model crate decides what an integrand failure means. Every routine
//! either meets its tolerance or returns an error; none of them return a
//! low-confidence result silently.

pub mod elliptic;
pub mod error;
pub mod quadrature;
pub mod roots;

// Re-exports for ergonomics
pub use elliptic::{carlson_rf, ellint_f, ellint_k};
pub use error::{NumError, NumResult};
pub use quadrature::{QuadratureConfig, QuadratureEstimate, integrate};
pub use roots::{RootConfig, RootFind, find_root_brent};
