//! Property identifiers, phase tag, and tagged property values.

use core::fmt;

use crate::error::PcError;
use crate::numeric::{Real, round_to};

/// Named scalar property of a petroleum pseudo-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyId {
    /// Molecular weight [g/mol]
    Mw,
    /// Gas specific gravity (relative to air)
    SgGas,
    /// Liquid specific gravity (relative to water at 60 °F)
    SgLiq,
    /// Volume-averaged boiling point
    Vabp,
    /// API gravity
    Api,
    /// Gross heating value
    Ghv,
    /// Net heating value
    Nhv,
    /// Critical pressure
    Pc,
    /// Critical temperature
    Tc,
    /// Acentric factor
    Omega,
    /// Normal boiling temperature
    Tb,
}

impl PropertyId {
    /// Every property, in report order.
    pub const ALL: [PropertyId; 11] = [
        PropertyId::Mw,
        PropertyId::SgGas,
        PropertyId::SgLiq,
        PropertyId::Vabp,
        PropertyId::Api,
        PropertyId::Ghv,
        PropertyId::Nhv,
        PropertyId::Pc,
        PropertyId::Tc,
        PropertyId::Omega,
        PropertyId::Tb,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PropertyId::Mw => "mw",
            PropertyId::SgGas => "sg_gas",
            PropertyId::SgLiq => "sg_liq",
            PropertyId::Vabp => "VABP",
            PropertyId::Api => "API",
            PropertyId::Ghv => "ghv",
            PropertyId::Nhv => "nhv",
            PropertyId::Pc => "Pc",
            PropertyId::Tc => "Tc",
            PropertyId::Omega => "omega",
            PropertyId::Tb => "Tb",
        }
    }

    /// Position in [`PropertyId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for PropertyId {
    type Err = PcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mw" | "MW" => Ok(PropertyId::Mw),
            "sg_gas" | "sg" => Ok(PropertyId::SgGas),
            "sg_liq" | "_sg_liq" => Ok(PropertyId::SgLiq),
            "VABP" | "vabp" => Ok(PropertyId::Vabp),
            "API" | "api" => Ok(PropertyId::Api),
            "ghv" | "GHV" => Ok(PropertyId::Ghv),
            "nhv" | "NHV" | "lhv" | "LHV" => Ok(PropertyId::Nhv),
            "Pc" | "pc" => Ok(PropertyId::Pc),
            "Tc" | "tc" => Ok(PropertyId::Tc),
            "omega" => Ok(PropertyId::Omega),
            "Tb" | "tb" => Ok(PropertyId::Tb),
            other => Err(PcError::UnknownProperty {
                name: other.to_string(),
            }),
        }
    }
}

/// Phase of a pseudo-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    Gas,
    Liquid,
}

impl Phase {
    pub fn key(&self) -> &'static str {
        match self {
            Phase::Gas => "gas",
            Phase::Liquid => "liquid",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Phase {
    type Err = PcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gas" => Ok(Phase::Gas),
            "liquid" => Ok(Phase::Liquid),
            other => Err(PcError::InvalidPhase {
                phase: other.to_string(),
            }),
        }
    }
}

/// Value held in one slot of a finalized property report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    Number(Real),
    Text(String),
    Absent,
}

impl PropertyValue {
    pub fn from_option(v: Option<Real>) -> Self {
        match v {
            Some(x) => PropertyValue::Number(x),
            None => PropertyValue::Absent,
        }
    }

    pub fn as_number(&self) -> Option<Real> {
        match self {
            PropertyValue::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// Rounding touches numbers only; text and absent slots pass through.
    pub fn rounded(self, digits: u32) -> Self {
        match self {
            PropertyValue::Number(x) => PropertyValue::Number(round_to(x, digits)),
            other => other,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(x) => write!(f, "{x}"),
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Absent => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for id in PropertyId::ALL {
            let parsed: PropertyId = id.key().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, id) in PropertyId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn aliases_from_variant_classes() {
        assert_eq!("sg".parse::<PropertyId>().unwrap(), PropertyId::SgGas);
        assert_eq!("_sg_liq".parse::<PropertyId>().unwrap(), PropertyId::SgLiq);
        assert_eq!("api".parse::<PropertyId>().unwrap(), PropertyId::Api);
        assert_eq!("lhv".parse::<PropertyId>().unwrap(), PropertyId::Nhv);
        assert!("density".parse::<PropertyId>().is_err());
    }

    #[test]
    fn phase_parse_rejects_unknown() {
        assert_eq!("gas".parse::<Phase>().unwrap(), Phase::Gas);
        assert_eq!("liquid".parse::<Phase>().unwrap(), Phase::Liquid);
        let err = "plasma".parse::<Phase>().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn rounding_skips_text_and_absent() {
        let text = PropertyValue::Text("gas".into());
        assert_eq!(text.clone().rounded(5), text);
        assert_eq!(PropertyValue::Absent.rounded(5), PropertyValue::Absent);
        assert_eq!(
            PropertyValue::Number(1.234567).rounded(5),
            PropertyValue::Number(1.23457)
        );
    }
}
