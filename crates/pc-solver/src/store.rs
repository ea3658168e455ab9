//! Property store for one pseudo-component.
//!
//! A store is owned by exactly one resolution run. Slots are single-assignment:
//! once a property holds a value it is never overwritten.

use core::fmt;

use pc_core::{
    FINAL_DECIMALS, PcError, PcResult, Phase, PropertyId, PropertyValue, Real, ensure_finite,
};

use crate::policy::policy_for;

const N_PROPERTIES: usize = PropertyId::ALL.len();

/// Mutable property slots of one pseudo-component.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyStore {
    phase: Phase,
    values: [Option<Real>; N_PROPERTIES],
}

impl PropertyStore {
    /// Create a store from known values.
    ///
    /// Fails with a configuration error if a known value is not finite or is
    /// illegal for the phase.
    pub fn new<I>(phase: Phase, known: I) -> PcResult<Self>
    where
        I: IntoIterator<Item = (PropertyId, Real)>,
    {
        let mut values = [None; N_PROPERTIES];
        for (id, v) in known {
            values[id.index()] = Some(ensure_finite(v, id.key())?);
        }
        let store = Self { phase, values };
        policy_for(phase).validate(&store)?;
        Ok(store)
    }

    /// A store with every property absent.
    pub fn empty(phase: Phase) -> Self {
        Self {
            phase,
            values: [None; N_PROPERTIES],
        }
    }

    /// Create a store from caller-facing names, as accepted on the command line or
    /// in data files. Absent values may be passed as `None`.
    pub fn from_named<I, K>(phase: &str, inputs: I) -> PcResult<Self>
    where
        I: IntoIterator<Item = (K, Option<Real>)>,
        K: AsRef<str>,
    {
        let phase: Phase = phase.parse()?;
        let mut known = Vec::new();
        for (name, value) in inputs {
            let id: PropertyId = name.as_ref().parse()?;
            if let Some(v) = value {
                known.push((id, v));
            }
        }
        Self::new(phase, known)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn get(&self, id: PropertyId) -> Option<Real> {
        self.values[id.index()]
    }

    pub fn is_resolved(&self, id: PropertyId) -> bool {
        self.values[id.index()].is_some()
    }

    /// Properties currently holding a value, in report order.
    pub fn resolved(&self) -> impl Iterator<Item = PropertyId> + '_ {
        PropertyId::ALL
            .into_iter()
            .filter(move |id| self.is_resolved(*id))
    }

    /// Write a solved value into an absent slot.
    pub(crate) fn assign(&mut self, id: PropertyId, value: Real) -> PcResult<()> {
        let slot = &mut self.values[id.index()];
        if slot.is_some() {
            return Err(PcError::AlreadyResolved { property: id });
        }
        *slot = Some(value);
        Ok(())
    }

    /// Round every numeric slot to five decimals. The phase tag and absent slots
    /// are carried over unchanged.
    pub fn finalize(self) -> FinalizedStore {
        let mut entries: Vec<(&'static str, PropertyValue)> = PropertyId::ALL
            .iter()
            .map(|id| {
                let value = PropertyValue::from_option(self.get(*id)).rounded(FINAL_DECIMALS);
                (id.key(), value)
            })
            .collect();
        entries.push((
            "phase",
            PropertyValue::Text(self.phase.key().to_string()).rounded(FINAL_DECIMALS),
        ));
        FinalizedStore {
            phase: self.phase,
            entries,
        }
    }
}

/// Immutable, rounded property report.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedStore {
    phase: Phase,
    entries: Vec<(&'static str, PropertyValue)>,
}

impl FinalizedStore {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn get(&self, id: PropertyId) -> Option<Real> {
        self.entries[id.index()].1.as_number()
    }

    /// Every slot, properties first and the phase tag last.
    pub fn entries(&self) -> &[(&'static str, PropertyValue)] {
        &self.entries
    }

    /// Reopen as a store, e.g. to resolve further with a different registry.
    pub fn to_store(&self) -> PropertyStore {
        let mut values = [None; N_PROPERTIES];
        for id in PropertyId::ALL {
            values[id.index()] = self.get(id);
        }
        PropertyStore {
            phase: self.phase,
            values,
        }
    }
}

impl fmt::Display for FinalizedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FinalizedStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_store_rejects_api() {
        let err = PropertyStore::new(Phase::Gas, [(PropertyId::Api, 40.0)]).unwrap_err();
        assert_eq!(err, PcError::ApiNotApplicableToGas);
        assert!(err.is_config_error());
    }

    #[test]
    fn non_finite_known_values_are_rejected() {
        for bad in [Real::NAN, Real::INFINITY, Real::NEG_INFINITY] {
            let err = PropertyStore::new(Phase::Gas, [(PropertyId::Mw, bad)]).unwrap_err();
            assert!(matches!(err, PcError::NonFinite { what: "mw", .. }));
            assert!(err.is_config_error());
        }
        let err = PropertyStore::from_named("liquid", [("api", Some(Real::NAN))]).unwrap_err();
        assert!(matches!(err, PcError::NonFinite { what: "API", .. }));
    }

    #[test]
    fn liquid_store_accepts_api() {
        let store = PropertyStore::new(Phase::Liquid, [(PropertyId::Api, 40.0)]).unwrap();
        assert_eq!(store.get(PropertyId::Api), Some(40.0));
        assert_eq!(store.resolved().collect::<Vec<_>>(), vec![PropertyId::Api]);
    }

    #[test]
    fn from_named_parses_phase_and_aliases() {
        let store =
            PropertyStore::from_named("gas", [("sg", Some(1.035)), ("mw", None)]).unwrap();
        assert_eq!(store.get(PropertyId::SgGas), Some(1.035));
        assert!(!store.is_resolved(PropertyId::Mw));

        let err = PropertyStore::from_named("vapor", [("mw", Some(1.0))]).unwrap_err();
        assert!(matches!(err, PcError::InvalidPhase { phase } if phase == "vapor"));

        let err = PropertyStore::from_named("gas", [("api", Some(1.0))]).unwrap_err();
        assert_eq!(err, PcError::ApiNotApplicableToGas);
    }

    #[test]
    fn gas_store_with_absent_api_is_fine() {
        let store = PropertyStore::from_named("gas", [("API", None::<Real>)]).unwrap();
        assert_eq!(store.phase(), Phase::Gas);
    }

    #[test]
    fn assign_is_single_shot() {
        let mut store = PropertyStore::empty(Phase::Gas);
        store.assign(PropertyId::Mw, 10.0).unwrap();
        let err = store.assign(PropertyId::Mw, 11.0).unwrap_err();
        assert_eq!(
            err,
            PcError::AlreadyResolved {
                property: PropertyId::Mw
            }
        );
        assert_eq!(store.get(PropertyId::Mw), Some(10.0));
    }

    #[test]
    fn finalize_rounds_numbers_only() {
        let store = PropertyStore::new(Phase::Gas, [(PropertyId::SgGas, 175.0 / 28.97)]).unwrap();
        let done = store.finalize();
        assert_eq!(done.get(PropertyId::SgGas), Some(6.04073));
        assert_eq!(done.get(PropertyId::Mw), None);
        let last = done.entries().last().unwrap();
        assert_eq!(last.0, "phase");
        assert_eq!(last.1, PropertyValue::Text("gas".into()));
        assert_eq!(done.entries().len(), PropertyId::ALL.len() + 1);
    }

    #[test]
    fn display_looks_like_a_mapping() {
        let done = PropertyStore::new(Phase::Liquid, [(PropertyId::Mw, 175.0)])
            .unwrap()
            .finalize();
        let text = done.to_string();
        assert!(text.starts_with("{mw: 175, sg_gas: None"));
        assert!(text.ends_with("phase: liquid}"));
    }

    #[test]
    fn reopen_keeps_values() {
        let done = PropertyStore::new(Phase::Liquid, [(PropertyId::Tb, 300.123456)])
            .unwrap()
            .finalize();
        let store = done.to_store();
        assert_eq!(store.get(PropertyId::Tb), Some(300.12346));
        assert_eq!(store.phase(), Phase::Liquid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_flat_map() {
        let done = PropertyStore::new(Phase::Gas, [(PropertyId::Mw, 175.0)])
            .unwrap()
            .finalize();
        let json = serde_json::to_value(&done).unwrap();
        assert_eq!(json["mw"], serde_json::json!(175.0));
        assert!(json["sg_gas"].is_null());
        assert_eq!(json["phase"], serde_json::json!("gas"));
    }
}
