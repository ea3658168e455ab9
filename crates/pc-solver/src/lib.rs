//! Property-dependency resolution for petroleum pseudo-components.
//!
//! Given a partially known set of properties, the resolver finds every relation
//! with a single unknown, solves it with a scalar Newton iteration, and repeats
//! until nothing more can be learned. Phase policies decide which properties are
//! legal and which are never solved.

pub mod characterize;
pub mod derivative;
pub mod error;
pub mod guess;
pub mod newton;
pub mod policy;
pub mod resolve;
pub mod store;

pub use characterize::{Characterization, characterize};
pub use error::{SolverError, SolverResult};
pub use guess::initial_guess;
pub use newton::{NewtonConfig, NewtonResult, newton_solve, newton_solve_with_derivative};
pub use policy::{GasPolicy, LiquidPolicy, PhasePolicy, PrimingStep, policy_for};
pub use resolve::{Assignment, Outcome, ResolutionReport, Resolver};
pub use store::{FinalizedStore, PropertyStore};
