//! Phase-specific resolution rules.
//!
//! A policy decides which properties are legal inputs for its phase, which
//! properties the resolver must never solve, and whether a priming step runs
//! before the generic passes.

use pc_core::{PcError, PcResult, Phase, PropertyId};
use pc_correlations::RelationId;

use crate::store::PropertyStore;

/// One priming solve: resolve `target` from `relation` before the generic passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimingStep {
    pub relation: RelationId,
    pub target: PropertyId,
}

/// Gas/liquid rules consulted by the resolver.
pub trait PhasePolicy: Send + Sync {
    fn phase(&self) -> Phase;

    /// Reject inputs that are illegal for the phase.
    fn validate(&self, store: &PropertyStore) -> PcResult<()>;

    /// Properties that are never solved for this phase, even as the sole unknown
    /// of a relation.
    fn is_excluded(&self, property: PropertyId) -> bool {
        let _ = property;
        false
    }

    /// Priming solve to run before the generic passes, if any applies to `store`.
    fn priming_step(&self, store: &PropertyStore) -> Option<PrimingStep> {
        let _ = store;
        None
    }
}

/// Gas phase: API gravity is a liquid-only property.
pub struct GasPolicy;

impl PhasePolicy for GasPolicy {
    fn phase(&self) -> Phase {
        Phase::Gas
    }

    fn validate(&self, store: &PropertyStore) -> PcResult<()> {
        if store.is_resolved(PropertyId::Api) {
            return Err(PcError::ApiNotApplicableToGas);
        }
        Ok(())
    }

    fn is_excluded(&self, property: PropertyId) -> bool {
        property == PropertyId::Api
    }
}

/// Liquid phase: primes `sg_liq` so the mw↔sg_liq and Tb↔mw↔sg_liq relations do
/// not both wait on two unknowns.
pub struct LiquidPolicy;

impl PhasePolicy for LiquidPolicy {
    fn phase(&self) -> Phase {
        Phase::Liquid
    }

    fn validate(&self, _store: &PropertyStore) -> PcResult<()> {
        Ok(())
    }

    fn priming_step(&self, store: &PropertyStore) -> Option<PrimingStep> {
        if store.is_resolved(PropertyId::SgLiq) {
            return None;
        }
        if store.is_resolved(PropertyId::Api) {
            return Some(PrimingStep {
                relation: RelationId::ApiSgLiq,
                target: PropertyId::SgLiq,
            });
        }
        if store.is_resolved(PropertyId::Mw) {
            return Some(PrimingStep {
                relation: RelationId::MwSgLiq,
                target: PropertyId::SgLiq,
            });
        }
        None
    }
}

/// Policy for a phase.
pub fn policy_for(phase: Phase) -> &'static dyn PhasePolicy {
    match phase {
        Phase::Gas => &GasPolicy,
        Phase::Liquid => &LiquidPolicy,
    }
}
