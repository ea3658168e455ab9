//! Relation descriptors.

use core::fmt;

use pc_core::{ConstantContext, Phase, PropertyId, Real};

use crate::library;

/// Residual of a relation: positional arguments follow the relation's variable list.
pub type Residual = fn(&[Real], &ConstantContext) -> Real;

/// Stable identity of each catalogued relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationId {
    MwSgGas,
    MwSgLiq,
    ApiSgLiq,
    TbMwSgLiq,
    TbMw,
    GasGhvSgGas,
    GasNhvSgGas,
    LiquidGhvApi,
}

impl RelationId {
    pub fn key(&self) -> &'static str {
        match self {
            RelationId::MwSgGas => "mw<->sg_gas",
            RelationId::MwSgLiq => "mw<->sg_liq",
            RelationId::ApiSgLiq => "API<->sg_liq",
            RelationId::TbMwSgLiq => "Tb<->mw<->sg_liq",
            RelationId::TbMw => "Tb<->mw",
            RelationId::GasGhvSgGas => "ghv<->sg_gas",
            RelationId::GasNhvSgGas => "nhv<->sg_gas",
            RelationId::LiquidGhvApi => "ghv<->API",
        }
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Phases a relation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSet {
    Any,
    Only(Phase),
}

impl PhaseSet {
    pub fn contains(&self, phase: Phase) -> bool {
        match self {
            PhaseSet::Any => true,
            PhaseSet::Only(p) => *p == phase,
        }
    }
}

/// A named residual over an ordered list of properties.
#[derive(Clone, Copy)]
pub struct Relation {
    id: RelationId,
    variables: &'static [PropertyId],
    phases: PhaseSet,
    residual: Residual,
}

impl Relation {
    pub const fn new(
        id: RelationId,
        variables: &'static [PropertyId],
        phases: PhaseSet,
        residual: Residual,
    ) -> Self {
        Self {
            id,
            variables,
            phases,
            residual,
        }
    }

    pub fn id(&self) -> RelationId {
        self.id
    }

    pub fn variables(&self) -> &'static [PropertyId] {
        self.variables
    }

    pub fn phases(&self) -> PhaseSet {
        self.phases
    }

    pub fn applies_to(&self, phase: Phase) -> bool {
        self.phases.contains(phase)
    }

    pub fn touches(&self, property: PropertyId) -> bool {
        self.variables.contains(&property)
    }

    /// Evaluate the residual. `args` must follow [`Relation::variables`] order.
    pub fn residual(&self, args: &[Real], ctx: &ConstantContext) -> Real {
        debug_assert_eq!(args.len(), self.variables.len());
        (self.residual)(args, ctx)
    }

    pub fn mw_sg_gas() -> Self {
        Self::new(
            RelationId::MwSgGas,
            &[PropertyId::Mw, PropertyId::SgGas],
            PhaseSet::Any,
            |a, ctx| library::mw_sg_gas(a[0], a[1], ctx.mw_air),
        )
    }

    pub fn mw_sg_liq() -> Self {
        Self::new(
            RelationId::MwSgLiq,
            &[PropertyId::Mw, PropertyId::SgLiq],
            PhaseSet::Any,
            |a, _| library::mw_sg_liq(a[0], a[1]),
        )
    }

    pub fn api_sg_liq() -> Self {
        Self::new(
            RelationId::ApiSgLiq,
            &[PropertyId::Api, PropertyId::SgLiq],
            PhaseSet::Any,
            |a, _| library::api_sg_liq(a[0], a[1]),
        )
    }

    pub fn tb_mw_sg_liq() -> Self {
        Self::new(
            RelationId::TbMwSgLiq,
            &[PropertyId::Tb, PropertyId::Mw, PropertyId::SgLiq],
            PhaseSet::Any,
            |a, _| library::tb_mw_sg_liq(a[0], a[1], a[2]),
        )
    }

    pub fn tb_mw() -> Self {
        Self::new(
            RelationId::TbMw,
            &[PropertyId::Tb, PropertyId::Mw],
            PhaseSet::Any,
            |a, _| library::tb_mw(a[0], a[1]),
        )
    }

    pub fn gas_ghv_sg_gas() -> Self {
        Self::new(
            RelationId::GasGhvSgGas,
            &[PropertyId::Ghv, PropertyId::SgGas],
            PhaseSet::Only(Phase::Gas),
            |a, _| library::gas_ghv_sg(a[0], a[1]),
        )
    }

    pub fn gas_nhv_sg_gas() -> Self {
        Self::new(
            RelationId::GasNhvSgGas,
            &[PropertyId::Nhv, PropertyId::SgGas],
            PhaseSet::Only(Phase::Gas),
            |a, _| library::gas_nhv_sg(a[0], a[1]),
        )
    }

    pub fn liquid_ghv_api() -> Self {
        Self::new(
            RelationId::LiquidGhvApi,
            &[PropertyId::Ghv, PropertyId::Api],
            PhaseSet::Only(Phase::Liquid),
            |a, _| library::liquid_ghv_api(a[0], a[1]),
        )
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("id", &self.id)
            .field("variables", &self.variables)
            .field("phases", &self.phases)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_follows_variable_order() {
        let ctx = ConstantContext::default();
        let rel = Relation::tb_mw_sg_liq();
        assert_eq!(
            rel.variables(),
            [PropertyId::Tb, PropertyId::Mw, PropertyId::SgLiq]
        );
        assert_eq!(rel.residual(&[100.5, 100.0, 1.0], &ctx), 0.0);
    }

    #[test]
    fn mw_sg_gas_reads_air_weight_from_context() {
        let ctx = ConstantContext::default().with_overrides([("MW_AIR", 29.0)]);
        let rel = Relation::mw_sg_gas();
        assert_eq!(rel.residual(&[29.0, 1.0], &ctx), 0.0);
    }

    #[test]
    fn heating_value_relations_are_phase_specific() {
        assert!(Relation::gas_ghv_sg_gas().applies_to(Phase::Gas));
        assert!(!Relation::gas_ghv_sg_gas().applies_to(Phase::Liquid));
        assert!(Relation::liquid_ghv_api().applies_to(Phase::Liquid));
        assert!(!Relation::liquid_ghv_api().applies_to(Phase::Gas));
        assert!(Relation::mw_sg_liq().applies_to(Phase::Gas));
    }

    #[test]
    fn display_uses_variable_names() {
        assert_eq!(RelationId::ApiSgLiq.to_string(), "API<->sg_liq");
    }
}
