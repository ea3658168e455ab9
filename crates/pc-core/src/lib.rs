//! pc-core: stable foundation for petrochar.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers + rounding)
//! - property (property identifiers, phase tag, tagged property values)
//! - constants (physical constant context shared by every relation)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod property;

// Re-exports: nice ergonomics for downstream crates
pub use constants::ConstantContext;
pub use error::{PcError, PcResult};
pub use numeric::*;
pub use property::{Phase, PropertyId, PropertyValue};
