//! Heating-value unit conversion.
//!
//! Units are written as an energy unit, optionally divided by a volume, mass or
//! amount-of-substance unit: `"Btu/ft^3"`, `"J/m3"`, `"kJ/kg"`, `"Btu/lbmol"`.
//! Both sides of a conversion must share the same basis.
//!
//! Supported tokens:
//! - energy: `J`, `kJ`, `MJ`, `Btu`, `kWh`
//! - volume: `m^3`, `ft^3` (`scf`), `L`, `gal`
//! - mass: `kg`, `g`, `lb`
//! - amount: `mol`, `kmol`, `lbmol`

use std::fmt;

use uom::si::f64::{AmountOfSubstance, Energy, Mass, Volume};

/// What the energy is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Total,
    PerVolume,
    PerMass,
    PerAmount,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total => write!(f, "energy"),
            Self::PerVolume => write!(f, "energy/volume"),
            Self::PerMass => write!(f, "energy/mass"),
            Self::PerAmount => write!(f, "energy/amount"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Unit text is not `energy` or `energy/denominator`
    Malformed(String),
    /// Token not recognized
    UnknownUnit { unit: String },
    /// Source and target have different bases
    Incompatible { from: String, to: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(text) => write!(f, "Malformed unit '{}'", text),
            Self::UnknownUnit { unit } => write!(f, "Unknown unit '{}'", unit),
            Self::Incompatible { from, to } => {
                write!(f, "Cannot convert '{}' to '{}'", from, to)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// A parsed unit: its basis and the factor taking a value to SI
/// (J, J/m³, J/kg or J/mol).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyUnit {
    pub basis: Basis,
    pub to_si: f64,
}

impl std::str::FromStr for EnergyUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut parts = text.split('/');
        let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
            (Some(n), d, None) => (n.trim(), d.map(str::trim)),
            _ => return Err(UnitError::Malformed(text.to_string())),
        };
        if numerator.is_empty() || denominator.is_some_and(str::is_empty) {
            return Err(UnitError::Malformed(text.to_string()));
        }

        let energy = energy_factor(numerator)?;
        let (basis, per) = match denominator {
            None => (Basis::Total, 1.0),
            Some(d) => denominator_factor(d)?,
        };
        Ok(Self {
            basis,
            to_si: energy / per,
        })
    }
}

fn energy_factor(token: &str) -> Result<f64, UnitError> {
    use uom::si::energy::{btu_it, joule, kilojoule, kilowatt_hour, megajoule};

    let one = match token.to_ascii_lowercase().as_str() {
        "j" | "joule" => Energy::new::<joule>(1.0),
        "kj" => Energy::new::<kilojoule>(1.0),
        "mj" => Energy::new::<megajoule>(1.0),
        "btu" => Energy::new::<btu_it>(1.0),
        "kwh" => Energy::new::<kilowatt_hour>(1.0),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: token.to_string(),
            });
        }
    };
    Ok(one.get::<joule>())
}

fn denominator_factor(token: &str) -> Result<(Basis, f64), UnitError> {
    use uom::si::amount_of_substance::{kilomole, mole};
    use uom::si::mass::{gram, kilogram, pound};
    use uom::si::volume::{cubic_foot, cubic_meter, gallon, liter};

    let cubic = |v: Volume| (Basis::PerVolume, v.get::<cubic_meter>());
    let mass = |m: Mass| (Basis::PerMass, m.get::<kilogram>());
    let amount = |n: AmountOfSubstance| (Basis::PerAmount, n.get::<mole>());

    let out = match token.to_ascii_lowercase().as_str() {
        "m^3" | "m3" => cubic(Volume::new::<cubic_meter>(1.0)),
        "ft^3" | "ft3" | "scf" => cubic(Volume::new::<cubic_foot>(1.0)),
        "l" => cubic(Volume::new::<liter>(1.0)),
        "gal" => cubic(Volume::new::<gallon>(1.0)),
        "kg" => mass(Mass::new::<kilogram>(1.0)),
        "g" => mass(Mass::new::<gram>(1.0)),
        "lb" | "lbm" => mass(Mass::new::<pound>(1.0)),
        "mol" => amount(AmountOfSubstance::new::<mole>(1.0)),
        "kmol" => amount(AmountOfSubstance::new::<kilomole>(1.0)),
        // A pound-mole holds as many moles as a pound holds grams.
        "lbmol" => amount(AmountOfSubstance::new::<mole>(
            Mass::new::<pound>(1.0).get::<gram>(),
        )),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: token.to_string(),
            });
        }
    };
    Ok(out)
}

/// Convert `value` from one heating-value unit to another.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    let src: EnergyUnit = from.parse()?;
    let dst: EnergyUnit = to.parse()?;
    if src.basis != dst.basis {
        return Err(UnitError::Incompatible {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(value * src.to_si / dst.to_si)
}
