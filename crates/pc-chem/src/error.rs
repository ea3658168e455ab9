//! Chemical data and mixture errors.

use pc_core::PcError;
use thiserror::Error;

use crate::units::UnitError;

/// Result type for chemical lookups and mixture calculations.
pub type ChemResult<T> = Result<T, ChemError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// Name, alias or CAS number not in the catalogue.
    #[error("Chemical name '{name}' is not recognized")]
    UnknownCompound { name: String },

    /// Compound is catalogued but lacks a datum a calculation needs.
    #[error("Chemical name '{compound}' is recognized but missing a required data ({field}).")]
    MissingData {
        compound: String,
        field: &'static str,
    },

    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Composition rejected before normalization.
    #[error("Invalid composition: {what}")]
    Composition { what: &'static str },

    /// Heating-value breakdown needs exactly one `fraction` entry.
    #[error("Composition has no petroleum fraction entry (named 'fraction' or 'fractions')")]
    NoFraction,

    #[error(transparent)]
    Core(#[from] PcError),
}
