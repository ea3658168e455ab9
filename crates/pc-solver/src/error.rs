//! Error types for solver operations.

use pc_core::{PcError, Real};
use thiserror::Error;

/// Errors that can occur while solving a single relation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Derivative was zero at x = {x}")]
    ZeroDerivative { x: Real },

    #[error("Non-finite {what} at x = {x}")]
    NonFinite { what: &'static str, x: Real },

    #[error("Core error: {0}")]
    Core(#[from] PcError),
}

pub type SolverResult<T> = Result<T, SolverError>;
