//! Ordered relation catalogue.
//!
//! Insertion order is part of the observable contract: when several relations could
//! resolve the same property, the first eligible one in this order wins.

use pc_core::{Phase, PropertyId};

use crate::error::{RegistryError, RegistryResult};
use crate::relation::{Relation, RelationId};

/// Which boiling-point closure the standard registry uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoilingPointForm {
    /// `Tb = mw + 0.5·sg_liq`
    #[default]
    Linear,
    /// Exponential Tb↔mw form (Riazi / Nourozieh).
    Riazi,
}

/// Options for [`CorrelationRegistry::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryOptions {
    /// Enable the heating-value relations (ghv/nhv vs sg_gas, ghv vs API).
    pub heating_value: bool,
    pub boiling_point: BoilingPointForm,
}

/// Builder for constructing a registry incrementally.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    relations: Vec<Relation>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relation; order of calls is the registry order.
    pub fn add(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Validate and freeze into an immutable registry.
    pub fn build(self) -> RegistryResult<CorrelationRegistry> {
        for (i, rel) in self.relations.iter().enumerate() {
            let count = rel.variables().len();
            if !(2..=3).contains(&count) {
                return Err(RegistryError::InvalidArity {
                    relation: rel.id(),
                    count,
                });
            }
            for (j, var) in rel.variables().iter().enumerate() {
                if rel.variables()[..j].contains(var) {
                    return Err(RegistryError::DuplicateVariable {
                        relation: rel.id(),
                        property: *var,
                    });
                }
            }
            if self.relations[..i].iter().any(|r| r.id() == rel.id()) {
                return Err(RegistryError::DuplicateRelation { relation: rel.id() });
            }
        }
        Ok(CorrelationRegistry {
            relations: self.relations,
        })
    }
}

/// Immutable, ordered catalogue of relations.
#[derive(Debug, Clone)]
pub struct CorrelationRegistry {
    relations: Vec<Relation>,
}

impl CorrelationRegistry {
    /// The standard catalogue:
    ///
    /// 1. mw↔sg_gas
    /// 2. mw↔sg_liq
    /// 3. API↔sg_liq
    /// 4. Tb↔mw↔sg_liq (or Tb↔mw with [`BoilingPointForm::Riazi`])
    /// 5. ghv↔sg_gas, gas only
    /// 6. nhv↔sg_gas, gas only
    /// 7. ghv↔API, liquid only
    ///
    /// Relations 5–7 are present only with `heating_value` enabled.
    pub fn standard(options: RegistryOptions) -> Self {
        let boiling_point = match options.boiling_point {
            BoilingPointForm::Linear => Relation::tb_mw_sg_liq(),
            BoilingPointForm::Riazi => Relation::tb_mw(),
        };
        let mut relations = vec![
            Relation::mw_sg_gas(),
            Relation::mw_sg_liq(),
            Relation::api_sg_liq(),
            boiling_point,
        ];
        if options.heating_value {
            relations.extend([
                Relation::gas_ghv_sg_gas(),
                Relation::gas_nhv_sg_gas(),
                Relation::liquid_ghv_api(),
            ]);
        }
        Self { relations }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// All relations, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.iter()
    }

    /// Relations applicable to `phase`, in insertion order.
    pub fn select(&self, phase: Phase) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.iter().filter(move |r| r.applies_to(phase))
    }

    pub fn get(&self, id: RelationId) -> Option<&Relation> {
        self.relations.iter().find(|r| r.id() == id)
    }

    /// Property list of a relation, if registered.
    pub fn variables_of(&self, id: RelationId) -> Option<&'static [PropertyId]> {
        self.get(id).map(Relation::variables)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl Default for CorrelationRegistry {
    fn default() -> Self {
        Self::standard(RegistryOptions::default())
    }
}
