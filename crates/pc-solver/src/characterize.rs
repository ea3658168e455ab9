//! One-call characterization: build, resolve, finalize.

use pc_core::{ConstantContext, PcResult, Phase, PropertyId, Real};
use pc_correlations::CorrelationRegistry;

use crate::resolve::{ResolutionReport, Resolver};
use crate::store::{FinalizedStore, PropertyStore};

/// Finalized properties of one pseudo-component plus how they were obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Characterization {
    pub properties: FinalizedStore,
    pub report: ResolutionReport,
}

/// Characterize a pseudo-component from its known properties.
///
/// Configuration errors (e.g. API given for a gas) are returned. Solver failures
/// are not: they end resolution early and are recorded in the report.
pub fn characterize<I>(
    phase: Phase,
    known: I,
    registry: &CorrelationRegistry,
    constants: &ConstantContext,
) -> PcResult<Characterization>
where
    I: IntoIterator<Item = (PropertyId, Real)>,
{
    let store = PropertyStore::new(phase, known)?;
    Ok(Resolver::new(registry, constants).characterize(store))
}

impl Resolver<'_> {
    /// Resolve `store` and finalize it.
    pub fn characterize(&self, mut store: PropertyStore) -> Characterization {
        let report = self.resolve(&mut store);
        Characterization {
            properties: store.finalize(),
            report,
        }
    }
}
