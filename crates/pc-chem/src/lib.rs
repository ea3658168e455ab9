//! pc-chem: pure-compound data and gas-mixture heating values for petrochar.
//!
//! Provides:
//! - Compound definitions and a built-in property catalogue (lookup by name,
//!   alias or CAS number)
//! - GPA 2145 ideal-gas heating values with a heat-of-combustion fallback
//! - Composition normalization with petroleum-fraction detection
//! - Heating-value unit conversion backed by `uom`
//! - Mixture GHV breakdown that back-calculates the fraction's GHV
//!
//! # Example
//!
//! ```
//! use pc_chem::{Composition, ghv_breakdown};
//! use pc_core::ConstantContext;
//!
//! let comp = Composition::normalize([("methane", 90.0), ("fractions", 10.0)]).unwrap();
//! let breakdown = ghv_breakdown(&comp, 1200.0, &ConstantContext::default()).unwrap();
//! assert!(breakdown.fraction_ghv() > 1010.0);
//! ```

pub mod breakdown;
pub mod catalog;
pub mod composition;
pub mod compound;
pub mod error;
pub mod heating_value;
pub mod units;

pub use breakdown::{BreakdownRow, GhvBreakdown, ghv_breakdown};
pub use catalog::{ChemicalData, CompoundRecord, lookup, record, records};
pub use composition::{Composition, is_fraction};
pub use compound::Compound;
pub use error::{ChemError, ChemResult};
pub use heating_value::{GpaListing, ghv_from_heat_of_combustion, ghv_ideal_gas, lookup_ghv_ideal};
pub use units::{Basis, EnergyUnit, UnitError, convert};
