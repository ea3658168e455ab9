//! Mixture composition (pure compounds plus an optional petroleum fraction).

use pc_core::Real;

use crate::error::{ChemError, ChemResult};

/// Whether an entry name denotes the petroleum fraction.
pub fn is_fraction(name: &str) -> bool {
    matches!(name.trim().to_lowercase().as_str(), "fraction" | "fractions")
}

/// Named mole fractions, normalized to sum to one.
///
/// Entry order is preserved. The last entry absorbs the rounding error of the
/// normalization, so the sum is one up to a single rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(String, Real)>,
}

impl Composition {
    /// Normalize raw amounts (mole percents, counts, anything proportional).
    ///
    /// All entries but the last are divided by the total; the last is set to one
    /// minus the sum of the others.
    pub fn normalize<I, K>(entries: I) -> ChemResult<Self>
    where
        I: IntoIterator<Item = (K, Real)>,
        K: Into<String>,
    {
        let raw: Vec<(String, Real)> = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if raw.is_empty() {
            return Err(ChemError::Composition {
                what: "empty composition",
            });
        }

        let mut total = 0.0;
        for (_, amount) in &raw {
            if !amount.is_finite() {
                return Err(ChemError::Composition {
                    what: "non-finite mole fraction",
                });
            }
            if *amount < 0.0 {
                return Err(ChemError::Composition {
                    what: "negative mole fraction",
                });
            }
            total += amount;
        }
        if total <= 0.0 || !total.is_finite() {
            return Err(ChemError::Composition {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        let last = raw.len() - 1;
        let mut items = Vec::with_capacity(raw.len());
        let mut others = 0.0;
        for (i, (name, amount)) in raw.into_iter().enumerate() {
            let z = if i == last { 1.0 - others } else { amount / total };
            others += z;
            items.push((name, z));
        }
        Ok(Self { items })
    }

    /// Mole fraction of `name` (0.0 if absent).
    pub fn mole_fraction(&self, name: &str) -> Real {
        self.items
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, z)| *z)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> + '_ {
        self.items.iter().map(|(n, z)| (n.as_str(), *z))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pure-compound entries, in order.
    pub fn pure(&self) -> impl Iterator<Item = (&str, Real)> + '_ {
        self.iter().filter(|(n, _)| !is_fraction(n))
    }

    /// Mole fraction of the petroleum fraction, if the composition has one.
    pub fn fraction(&self) -> Option<Real> {
        self.iter().find(|(n, _)| is_fraction(n)).map(|(_, z)| z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-12,
    };

    #[test]
    fn fraction_names() {
        assert!(is_fraction("fraction"));
        assert!(is_fraction("Fractions"));
        assert!(!is_fraction("fractional"));
        assert!(!is_fraction("methane"));
    }

    #[test]
    fn normalizes_percentages() {
        let comp = Composition::normalize([("methane", 3.0), ("ethane", 6.0)]).unwrap();
        assert!(nearly_equal(comp.mole_fraction("methane"), 1.0 / 3.0, TOL));
        assert_eq!(comp.mole_fraction("ethane"), 1.0 - 1.0 / 3.0);
        assert_eq!(comp.mole_fraction("propane"), 0.0);
    }

    #[test]
    fn keeps_entry_order_and_splits_fraction() {
        let comp = Composition::normalize([
            ("nitrogen", 2.304),
            ("methane", 71.432),
            ("fractions", 0.889),
            ("propane", 7.595),
        ])
        .unwrap();
        let names: Vec<_> = comp.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["nitrogen", "methane", "fractions", "propane"]);
        assert_eq!(comp.pure().count(), 3);
        let z = comp.fraction().unwrap();
        assert!(nearly_equal(z, 0.889 / (2.304 + 71.432 + 0.889 + 7.595), TOL));
    }

    #[test]
    fn rejects_bad_input() {
        let empty: [(&str, Real); 0] = [];
        assert!(Composition::normalize(empty).is_err());
        assert!(Composition::normalize([("a", -1.0), ("b", 2.0)]).is_err());
        assert!(Composition::normalize([("a", 0.0), ("b", 0.0)]).is_err());
        assert!(Composition::normalize([("a", Real::NAN)]).is_err());
        assert!(Composition::normalize([("a", Real::INFINITY)]).is_err());
    }

    #[test]
    fn zero_entries_are_kept() {
        let comp = Composition::normalize([("neopentane", 0.0), ("methane", 5.0)]).unwrap();
        assert_eq!(comp.len(), 2);
        assert_eq!(comp.mole_fraction("neopentane"), 0.0);
        assert_eq!(comp.mole_fraction("methane"), 1.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pc_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_sum_is_one(amounts in prop::collection::vec(0.0_f64..100.0_f64, 1..12)) {
            let entries: Vec<(String, f64)> = amounts
                .iter()
                .enumerate()
                .map(|(i, &a)| (format!("c{i}"), a))
                .collect();

            if let Ok(comp) = Composition::normalize(entries) {
                let sum: f64 = comp.iter().map(|(_, z)| z).sum();
                let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
                prop_assert!(nearly_equal(sum, 1.0, tol));
            }
        }
    }
}
