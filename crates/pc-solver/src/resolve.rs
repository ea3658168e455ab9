//! Dependency resolution over the correlation registry.
//!
//! The resolver repeatedly scans the registry in insertion order. A relation fires
//! only when exactly one of its properties is unresolved; the root solver then
//! fixes that property from the others. Passes repeat until every solvable
//! property is known, a pass makes no progress, or a solve fails.
//!
//! A solver failure aborts the run. The store keeps whatever was resolved so far
//! and the report names the failed property.

use core::fmt;

use pc_core::{ConstantContext, Phase, PropertyId, Real};
use pc_correlations::{CorrelationRegistry, Relation, RelationId};
use tracing::{debug, info, warn};

use crate::error::{SolverError, SolverResult};
use crate::guess::initial_guess;
use crate::newton::{NewtonConfig, NewtonResult, newton_solve};
use crate::policy::{PhasePolicy, policy_for};
use crate::store::PropertyStore;

/// One solved property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub property: PropertyId,
    pub relation: RelationId,
    pub value: Real,
    pub iterations: usize,
    /// Solved by the phase priming step rather than a generic pass.
    pub primed: bool,
}

/// How a resolution run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every property reachable through the selected relations is resolved.
    Complete,
    /// A full pass made no progress.
    Stalled { unresolved: Vec<PropertyId> },
    /// The root solver failed; resolution stopped at `property`.
    SolverFailed {
        property: PropertyId,
        relation: RelationId,
        error: SolverError,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Complete => f.write_str("fully resolved"),
            Outcome::Stalled { unresolved } => {
                f.write_str("partially resolved (stalled")?;
                if !unresolved.is_empty() {
                    let names: Vec<_> = unresolved.iter().map(PropertyId::key).collect();
                    write!(f, "; unresolved: {}", names.join(", "))?;
                }
                f.write_str(")")
            }
            Outcome::SolverFailed {
                property,
                relation,
                error,
            } => write!(
                f,
                "partially resolved (solver failure on {property} via {relation}: {error})"
            ),
        }
    }
}

/// Result of one resolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionReport {
    pub outcome: Outcome,
    /// Solved properties in solve order.
    pub assignments: Vec<Assignment>,
    /// Generic passes made over the registry.
    pub passes: usize,
}

impl ResolutionReport {
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, Outcome::Complete)
    }

    pub fn failed_property(&self) -> Option<PropertyId> {
        match &self.outcome {
            Outcome::SolverFailed { property, .. } => Some(*property),
            _ => None,
        }
    }

    /// The relation that produced `property` in this run, if any.
    pub fn solved_by(&self, property: PropertyId) -> Option<RelationId> {
        self.assignments
            .iter()
            .find(|a| a.property == property)
            .map(|a| a.relation)
    }
}

/// Drives a property store to its fixed point.
///
/// Borrows the registry and constant context for the whole run, so neither can be
/// modified while a resolution is in progress.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a CorrelationRegistry,
    constants: &'a ConstantContext,
    config: NewtonConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a CorrelationRegistry, constants: &'a ConstantContext) -> Self {
        Self {
            registry,
            constants,
            config: NewtonConfig::default(),
        }
    }

    /// Replace the root solver settings used for every relation.
    pub fn with_config(mut self, config: NewtonConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve `store` in place.
    pub fn resolve(&self, store: &mut PropertyStore) -> ResolutionReport {
        let phase = store.phase();
        let policy = policy_for(phase);
        let mut assignments = Vec::new();

        if let Some(step) = policy.priming_step(store) {
            match self.registry.get(step.relation) {
                Some(relation) => {
                    if let Err(error) =
                        self.apply(relation, step.target, true, store, &mut assignments)
                    {
                        return self.abort(step.target, step.relation, error, assignments, 0);
                    }
                }
                None => debug!(
                    relation = %step.relation,
                    "priming relation not registered, skipping"
                ),
            }
        }

        let targets = self.solvable(phase, policy);
        let mut passes = 0;

        let outcome = loop {
            if targets.iter().all(|p| store.is_resolved(*p)) {
                break Outcome::Complete;
            }

            passes += 1;
            let mut progressed = false;

            for relation in self.registry.select(phase) {
                let Some(target) = sole_unresolved(relation, store) else {
                    continue;
                };
                if policy.is_excluded(target) {
                    continue;
                }
                if let Err(error) = self.apply(relation, target, false, store, &mut assignments)
                {
                    return self.abort(target, relation.id(), error, assignments, passes);
                }
                progressed = true;
            }

            if !progressed {
                let unresolved = targets
                    .iter()
                    .copied()
                    .filter(|p| !store.is_resolved(*p))
                    .collect();
                break Outcome::Stalled { unresolved };
            }
        };

        info!(%phase, passes, solved = assignments.len(), outcome = %outcome, "resolution finished");
        ResolutionReport {
            outcome,
            assignments,
            passes,
        }
    }

    /// Solve `relation` for `target` with every other variable fixed at its
    /// resolved value.
    pub fn solve_for(
        &self,
        relation: &Relation,
        target: PropertyId,
        store: &PropertyStore,
    ) -> SolverResult<NewtonResult> {
        let vars = relation.variables();
        let n = vars.len();
        let pos = vars
            .iter()
            .position(|v| *v == target)
            .ok_or(SolverError::Core(pc_core::PcError::InvalidArg {
                what: "target is not a variable of the relation",
            }))?;

        let mut fixed = [0.0; 3];
        for (i, var) in vars.iter().enumerate() {
            if i != pos {
                fixed[i] = store.get(*var).ok_or(SolverError::Core(
                    pc_core::PcError::InvalidArg {
                        what: "relation has more than one unresolved variable",
                    },
                ))?;
            }
        }

        let ctx = self.constants;
        let residual = |x: Real| {
            let mut args = fixed;
            args[pos] = x;
            relation.residual(&args[..n], ctx)
        };
        newton_solve(initial_guess(target), residual, &self.config)
    }

    fn apply(
        &self,
        relation: &Relation,
        target: PropertyId,
        primed: bool,
        store: &mut PropertyStore,
        assignments: &mut Vec<Assignment>,
    ) -> SolverResult<()> {
        let result = self.solve_for(relation, target, store)?;
        store.assign(target, result.x)?;
        debug!(
            property = %target,
            relation = %relation.id(),
            value = result.x,
            iterations = result.iterations,
            primed,
            "property resolved"
        );
        assignments.push(Assignment {
            property: target,
            relation: relation.id(),
            value: result.x,
            iterations: result.iterations,
            primed,
        });
        Ok(())
    }

    fn abort(
        &self,
        property: PropertyId,
        relation: RelationId,
        error: SolverError,
        assignments: Vec<Assignment>,
        passes: usize,
    ) -> ResolutionReport {
        warn!(%property, %relation, %error, "Error in calculating {property}");
        ResolutionReport {
            outcome: Outcome::SolverFailed {
                property,
                relation,
                error,
            },
            assignments,
            passes,
        }
    }

    /// Properties touched by a selected relation and not excluded by the policy.
    fn solvable(&self, phase: Phase, policy: &dyn PhasePolicy) -> Vec<PropertyId> {
        let mut out: Vec<PropertyId> = Vec::new();
        for relation in self.registry.select(phase) {
            for var in relation.variables() {
                if !policy.is_excluded(*var) && !out.contains(var) {
                    out.push(*var);
                }
            }
        }
        out.sort();
        out
    }
}

fn sole_unresolved(relation: &Relation, store: &PropertyStore) -> Option<PropertyId> {
    let mut unresolved = relation
        .variables()
        .iter()
        .copied()
        .filter(|v| !store.is_resolved(*v));
    match (unresolved.next(), unresolved.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}
