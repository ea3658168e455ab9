use thiserror::Error;

use crate::property::PropertyId;

pub type PcResult<T> = Result<T, PcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PcError {
    #[error(
        "Unsupported phase type '{phase}'. Available phase types are ['liquid', 'gas']"
    )]
    InvalidPhase { phase: String },

    #[error("API value is not applicable for the gas phase. Do not input API, or leave it absent.")]
    ApiNotApplicableToGas,

    #[error("Unknown constant: {name}")]
    UnknownConstant { name: String },

    #[error("Unknown property: {name}")]
    UnknownProperty { name: String },

    #[error("Property {property} is already resolved")]
    AlreadyResolved { property: PropertyId },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl PcError {
    /// Errors raised while configuring a run; the caller must not proceed.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PcError::InvalidPhase { .. }
                | PcError::ApiNotApplicableToGas
                | PcError::UnknownConstant { .. }
                | PcError::NonFinite { .. }
        )
    }
}
