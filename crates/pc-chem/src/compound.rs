//! Pure compounds found in natural-gas and light-oil analyses.

use std::fmt;

/// A catalogued pure compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compound {
    /// Methane (CH₄)
    Methane,
    /// Ethane (C₂H₆)
    Ethane,
    /// Propane (C₃H₈)
    Propane,
    /// Isobutane (i-C₄H₁₀)
    Isobutane,
    /// n-Butane (n-C₄H₁₀)
    NButane,
    /// Neopentane
    Neopentane,
    /// Isopentane
    Isopentane,
    /// n-Pentane
    NPentane,
    /// n-Hexane
    NHexane,
    /// n-Heptane
    NHeptane,
    /// n-Octane
    NOctane,
    /// n-Decane
    NDecane,
    /// n-Docosane (C₂₂H₄₆)
    Docosane,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Hydrogen sulfide (H₂S)
    HydrogenSulfide,
    /// Hydrogen (H₂)
    Hydrogen,
    /// Carbon monoxide (CO)
    CarbonMonoxide,
    /// Oxygen (O₂)
    Oxygen,
    /// Helium (He)
    Helium,
    /// Argon (Ar)
    Argon,
    /// Water (H₂O)
    Water,
}

impl Compound {
    pub const ALL: [Compound; 22] = [
        Compound::Methane,
        Compound::Ethane,
        Compound::Propane,
        Compound::Isobutane,
        Compound::NButane,
        Compound::Neopentane,
        Compound::Isopentane,
        Compound::NPentane,
        Compound::NHexane,
        Compound::NHeptane,
        Compound::NOctane,
        Compound::NDecane,
        Compound::Docosane,
        Compound::Nitrogen,
        Compound::CarbonDioxide,
        Compound::HydrogenSulfide,
        Compound::Hydrogen,
        Compound::CarbonMonoxide,
        Compound::Oxygen,
        Compound::Helium,
        Compound::Argon,
        Compound::Water,
    ];

    /// Lower-case canonical name.
    pub fn key(&self) -> &'static str {
        match self {
            Compound::Methane => "methane",
            Compound::Ethane => "ethane",
            Compound::Propane => "propane",
            Compound::Isobutane => "isobutane",
            Compound::NButane => "n-butane",
            Compound::Neopentane => "neopentane",
            Compound::Isopentane => "isopentane",
            Compound::NPentane => "n-pentane",
            Compound::NHexane => "n-hexane",
            Compound::NHeptane => "n-heptane",
            Compound::NOctane => "n-octane",
            Compound::NDecane => "n-decane",
            Compound::Docosane => "docosane",
            Compound::Nitrogen => "nitrogen",
            Compound::CarbonDioxide => "carbon dioxide",
            Compound::HydrogenSulfide => "hydrogen sulfide",
            Compound::Hydrogen => "hydrogen",
            Compound::CarbonMonoxide => "carbon monoxide",
            Compound::Oxygen => "oxygen",
            Compound::Helium => "helium",
            Compound::Argon => "argon",
            Compound::Water => "water",
        }
    }

    /// CAS registry number.
    pub fn cas(&self) -> &'static str {
        match self {
            Compound::Methane => "74-82-8",
            Compound::Ethane => "74-84-0",
            Compound::Propane => "74-98-6",
            Compound::Isobutane => "75-28-5",
            Compound::NButane => "106-97-8",
            Compound::Neopentane => "463-82-1",
            Compound::Isopentane => "78-78-4",
            Compound::NPentane => "109-66-0",
            Compound::NHexane => "110-54-3",
            Compound::NHeptane => "142-82-5",
            Compound::NOctane => "111-65-9",
            Compound::NDecane => "124-18-5",
            Compound::Docosane => "629-97-0",
            Compound::Nitrogen => "7727-37-9",
            Compound::CarbonDioxide => "124-38-9",
            Compound::HydrogenSulfide => "7783-06-4",
            Compound::Hydrogen => "1333-74-0",
            Compound::CarbonMonoxide => "630-08-0",
            Compound::Oxygen => "7782-44-7",
            Compound::Helium => "7440-59-7",
            Compound::Argon => "7440-37-1",
            Compound::Water => "7732-18-5",
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Compound {
    type Err = crate::error::ChemError;

    /// Accepts names, aliases, formulas and CAS numbers, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::catalog::lookup(s).map(|record| record.compound)
    }
}
