//! Registry construction errors.

use crate::relation::RelationId;
use pc_core::PropertyId;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A relation ties fewer than 2 or more than 3 properties.
    InvalidArity { relation: RelationId, count: usize },

    /// A relation lists the same property twice.
    DuplicateVariable {
        relation: RelationId,
        property: PropertyId,
    },

    /// The same relation was inserted twice.
    DuplicateRelation { relation: RelationId },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::InvalidArity { relation, count } => {
                write!(
                    f,
                    "Relation {} ties {} properties (expected 2 or 3)",
                    relation, count
                )
            }
            RegistryError::DuplicateVariable { relation, property } => {
                write!(f, "Relation {} lists {} more than once", relation, property)
            }
            RegistryError::DuplicateRelation { relation } => {
                write!(f, "Relation {} is already registered", relation)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
