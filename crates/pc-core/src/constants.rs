//! Physical constant context consumed by correlation relations.
//!
//! A context is built once (defaults plus optional overrides) and then borrowed
//! immutably by every resolution run. Updating it while a run holds a borrow is
//! rejected by the compiler; callers sharing a context across threads must finish
//! all updates before handing out references.

use std::collections::BTreeMap;

use crate::error::{PcError, PcResult};
use crate::numeric::Real;

pub const R: &str = "R";
pub const T_STANDARD: &str = "T_STANDARD";
pub const P_STANDARD: &str = "P_STANDARD";
pub const MW_AIR: &str = "MW_AIR";
pub const RHO_WATER: &str = "RHO_WATER";

/// Named physical constants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantContext {
    /// Universal gas constant [J/(mol·K)]
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    pub r: Real,
    /// Standard temperature, 60 °F [K]
    #[cfg_attr(feature = "serde", serde(rename = "T_STANDARD"))]
    pub t_standard: Real,
    /// Standard pressure, 1 atm [Pa]
    #[cfg_attr(feature = "serde", serde(rename = "P_STANDARD"))]
    pub p_standard: Real,
    /// Molecular weight of air [g/mol]
    #[cfg_attr(feature = "serde", serde(rename = "MW_AIR"))]
    pub mw_air: Real,
    /// Density of water at 60 °F and 1 atm (IAPWS-95) [kg/m³]
    #[cfg_attr(feature = "serde", serde(rename = "RHO_WATER"))]
    pub rho_water: Real,
    /// Caller-defined constants with no dedicated field.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: BTreeMap<String, Real>,
}

impl Default for ConstantContext {
    fn default() -> Self {
        Self {
            r: 8.314_462_618_153_24,
            t_standard: 288.705_56,
            p_standard: 101_325.0,
            mw_air: 28.97,
            rho_water: 999.017_012_531_717_1,
            extra: BTreeMap::new(),
        }
    }
}

impl ConstantContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a constant by name.
    pub fn get(&self, name: &str) -> PcResult<Real> {
        match name {
            R => Ok(self.r),
            T_STANDARD => Ok(self.t_standard),
            P_STANDARD => Ok(self.p_standard),
            MW_AIR => Ok(self.mw_air),
            RHO_WATER => Ok(self.rho_water),
            other => self
                .extra
                .get(other)
                .copied()
                .ok_or_else(|| PcError::UnknownConstant {
                    name: other.to_string(),
                }),
        }
    }

    /// Merge overrides into the context. Last writer wins; values are not range-checked.
    pub fn update<I, K>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, Real)>,
        K: AsRef<str>,
    {
        for (name, value) in overrides {
            match name.as_ref() {
                R => self.r = value,
                T_STANDARD => self.t_standard = value,
                P_STANDARD => self.p_standard = value,
                MW_AIR => self.mw_air = value,
                RHO_WATER => self.rho_water = value,
                other => {
                    self.extra.insert(other.to_string(), value);
                }
            }
        }
    }

    /// Builder-style variant of [`ConstantContext::update`].
    pub fn with_overrides<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Real)>,
        K: AsRef<str>,
    {
        self.update(overrides);
        self
    }

    /// All constants as name/value pairs, named fields first.
    pub fn entries(&self) -> Vec<(String, Real)> {
        let mut out = vec![
            (R.to_string(), self.r),
            (T_STANDARD.to_string(), self.t_standard),
            (P_STANDARD.to_string(), self.p_standard),
            (MW_AIR.to_string(), self.mw_air),
            (RHO_WATER.to_string(), self.rho_water),
        ];
        out.extend(self.extra.iter().map(|(k, v)| (k.clone(), *v)));
        out
    }

    /// Ideal-gas molar volume at standard conditions, V = R·T/P [m³/mol].
    pub fn ideal_gas_molar_volume(&self) -> Real {
        self.r * self.t_standard / self.p_standard
    }
}
