//! pc-correlations: empirical correlations for petroleum pseudo-components.
//!
//! Provides:
//! - Residual forms of each correlation (`library`)
//! - Relation descriptors tying an ordered property list to a residual (`relation`)
//! - The ordered relation catalogue and its phase selection (`registry`)
//!
//! # Example
//!
//! ```
//! use pc_core::{ConstantContext, Phase, PropertyId};
//! use pc_correlations::{CorrelationRegistry, RegistryOptions};
//!
//! let registry = CorrelationRegistry::standard(RegistryOptions::default());
//! let gas: Vec<_> = registry.select(Phase::Gas).collect();
//! assert!(gas.iter().any(|r| r.variables() == [PropertyId::Mw, PropertyId::SgGas]));
//!
//! let ctx = ConstantContext::default();
//! let mw_sg_gas = &gas[0];
//! assert!(mw_sg_gas.residual(&[28.97, 1.0], &ctx).abs() < 1e-12);
//! ```

pub mod error;
pub mod library;
pub mod registry;
pub mod relation;

pub use error::{RegistryError, RegistryResult};
pub use library::{api_from_sg_liq, sg_liq_from_density};
pub use registry::{BoilingPointForm, CorrelationRegistry, RegistryBuilder, RegistryOptions};
pub use relation::{PhaseSet, Relation, RelationId, Residual};
