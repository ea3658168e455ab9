//! Built-in pure-compound database.
//!
//! Values are for the ideal-gas/normal-boiling reference states used by the
//! heating-value and characterization code: molecular weight [g/mol], normal
//! boiling point [K], heat of combustion [J/mol, negative when exothermic] and
//! liquid mass density at 60 °F [kg/m³]. A `None` marks data the source tables do
//! not carry.

use pc_core::{ConstantContext, Real};
use pc_correlations::{api_from_sg_liq, sg_liq_from_density};

use crate::compound::Compound;
use crate::error::{ChemError, ChemResult};

pub const FIELD_RHOL_60F: &str = "rhol_60F_mass, liquid mass density at 60F";
pub const FIELD_MW: &str = "mw, molecular weight";
pub const FIELD_TB: &str = "Tb, normal boiling temperature";
pub const FIELD_HC: &str = "Hc, heat of combustion [J/mol]";

/// One catalogue row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundRecord {
    pub compound: Compound,
    pub aliases: &'static [&'static str],
    pub mw: Option<Real>,
    pub tb: Option<Real>,
    pub hc: Option<Real>,
    pub rhol_60f: Option<Real>,
}

impl CompoundRecord {
    pub fn name(&self) -> &'static str {
        self.compound.key()
    }

    pub fn cas(&self) -> &'static str {
        self.compound.cas()
    }

    /// Exact, case-insensitive match on name, alias or CAS number.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        query == self.name()
            || query == self.cas()
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase() == query)
    }

    /// Heat of combustion, or `MissingData`.
    pub fn heat_of_combustion(&self) -> ChemResult<Real> {
        self.hc.ok_or_else(|| self.missing(FIELD_HC))
    }

    /// Check that the minimum characterization data is present.
    pub fn require(&self) -> ChemResult<ChemicalData> {
        let rhol_60f = self.rhol_60f.ok_or_else(|| self.missing(FIELD_RHOL_60F))?;
        let mw = self.mw.ok_or_else(|| self.missing(FIELD_MW))?;
        let tb = self.tb.ok_or_else(|| self.missing(FIELD_TB))?;
        let hc = self.heat_of_combustion()?;
        Ok(ChemicalData {
            compound: self.compound,
            mw,
            tb,
            hc,
            rhol_60f,
        })
    }

    fn missing(&self, field: &'static str) -> ChemError {
        ChemError::MissingData {
            compound: self.name().to_string(),
            field,
        }
    }
}

/// Complete data for a compound that passed [`CompoundRecord::require`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChemicalData {
    pub compound: Compound,
    pub mw: Real,
    pub tb: Real,
    pub hc: Real,
    pub rhol_60f: Real,
}

impl ChemicalData {
    /// Liquid specific gravity at 60 °F.
    pub fn sg_liq(&self, ctx: &ConstantContext) -> Real {
        sg_liq_from_density(self.rhol_60f, ctx.rho_water)
    }

    pub fn api(&self, ctx: &ConstantContext) -> Real {
        api_from_sg_liq(self.sg_liq(ctx))
    }
}

const fn rec(
    compound: Compound,
    aliases: &'static [&'static str],
    mw: Option<Real>,
    tb: Option<Real>,
    hc: Option<Real>,
    rhol_60f: Option<Real>,
) -> CompoundRecord {
    CompoundRecord {
        compound,
        aliases,
        mw,
        tb,
        hc,
        rhol_60f,
    }
}

static CATALOG: [CompoundRecord; 22] = [
    rec(Compound::Methane, &["CH4", "C1"], Some(16.04246), Some(111.66), Some(-890_590.0), Some(299.4)),
    rec(Compound::Ethane, &["C2H6", "C2"], Some(30.06904), Some(184.55), Some(-1_560_690.0), Some(355.7)),
    rec(Compound::Propane, &["C3H8", "C3"], Some(44.09562), Some(231.04), Some(-2_219_170.0), Some(507.0)),
    rec(Compound::Isobutane, &["i-butane", "iC4", "2-methylpropane"], Some(58.1222), Some(261.4), Some(-2_868_200.0), Some(562.9)),
    rec(Compound::NButane, &["butane", "nC4"], Some(58.1222), Some(272.66), Some(-2_877_400.0), Some(584.1)),
    rec(Compound::Neopentane, &["neo-pentane", "2,2-dimethylpropane"], Some(72.14878), Some(282.65), Some(-3_514_100.0), Some(596.1)),
    rec(Compound::Isopentane, &["i-pentane", "iC5", "2-methylbutane"], Some(72.14878), Some(300.98), Some(-3_528_800.0), Some(624.5)),
    rec(Compound::NPentane, &["pentane", "nC5"], Some(72.14878), Some(309.21), Some(-3_535_800.0), Some(631.1)),
    rec(Compound::NHexane, &["hexane", "nC6"], Some(86.17536), Some(341.87), Some(-4_194_800.0), Some(664.3)),
    rec(Compound::NHeptane, &["heptane", "nC7"], Some(100.20194), Some(371.53), Some(-4_853_400.0), Some(688.0)),
    rec(Compound::NOctane, &["octane", "nC8"], Some(114.22852), Some(398.82), Some(-5_512_200.0), Some(706.8)),
    rec(Compound::NDecane, &["decane", "nC10"], Some(142.28168), Some(447.27), Some(-6_829_300.0), Some(734.2)),
    rec(Compound::Docosane, &["n-docosane", "nC22"], Some(310.6027), Some(641.75), None, Some(785.0)),
    rec(Compound::Nitrogen, &["N2"], Some(28.0134), Some(77.355), Some(0.0), Some(806.1)),
    rec(Compound::CarbonDioxide, &["CO2"], Some(44.0095), Some(194.67), Some(0.0), Some(827.0)),
    rec(Compound::HydrogenSulfide, &["H2S"], Some(34.08088), Some(212.8), Some(-562_010.0), Some(799.3)),
    rec(Compound::Hydrogen, &["H2"], Some(2.01588), Some(20.271), Some(-285_830.0), Some(70.8)),
    rec(Compound::CarbonMonoxide, &["CO"], Some(28.0101), Some(81.6), Some(-282_980.0), Some(788.6)),
    rec(Compound::Oxygen, &["O2"], Some(31.9988), Some(90.188), Some(0.0), Some(1141.0)),
    rec(Compound::Helium, &["He", "helium-4"], Some(4.002602), Some(4.222), Some(0.0), Some(124.8)),
    rec(Compound::Argon, &["Ar"], Some(39.948), Some(87.302), Some(0.0), Some(1393.0)),
    rec(Compound::Water, &["H2O"], Some(18.01528), Some(373.124), Some(0.0), Some(999.0)),
];

/// Every catalogued compound.
pub fn records() -> &'static [CompoundRecord] {
    &CATALOG
}

/// Look up a compound by name, alias or CAS number.
pub fn lookup(query: &str) -> ChemResult<&'static CompoundRecord> {
    CATALOG
        .iter()
        .find(|record| record.matches(query))
        .ok_or_else(|| ChemError::UnknownCompound {
            name: query.trim().to_string(),
        })
}

/// The record for a known compound.
pub fn record(compound: Compound) -> &'static CompoundRecord {
    // CATALOG is ordered like Compound::ALL.
    &CATALOG[compound as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::{Tolerances, nearly_equal};

    #[test]
    fn catalog_follows_compound_order() {
        for (i, compound) in Compound::ALL.iter().enumerate() {
            assert_eq!(CATALOG[i].compound, *compound);
            assert_eq!(record(*compound).compound, *compound);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Methane").unwrap().compound, Compound::Methane);
        assert_eq!(lookup("  nc4 ").unwrap().compound, Compound::NButane);
        assert_eq!(lookup("7727-37-9").unwrap().compound, Compound::Nitrogen);
    }

    #[test]
    fn unknown_compound() {
        let err = lookup("kryptonite").unwrap_err();
        assert_eq!(
            err,
            ChemError::UnknownCompound {
                name: "kryptonite".into()
            }
        );
    }

    #[test]
    fn docosane_is_missing_heat_of_combustion() {
        let err = lookup("docosane").unwrap().require().unwrap_err();
        assert_eq!(
            err,
            ChemError::MissingData {
                compound: "docosane".into(),
                field: FIELD_HC
            }
        );
    }

    #[test]
    fn missing_fields_are_checked_in_order() {
        let bare = rec(Compound::Water, &[], None, None, None, None);
        assert!(matches!(
            bare.require(),
            Err(ChemError::MissingData { field: FIELD_RHOL_60F, .. })
        ));
        let no_mw = rec(Compound::Water, &[], None, None, None, Some(999.0));
        assert!(matches!(
            no_mw.require(),
            Err(ChemError::MissingData { field: FIELD_MW, .. })
        ));
        let no_tb = rec(Compound::Water, &[], Some(18.0), None, None, Some(999.0));
        assert!(matches!(
            no_tb.require(),
            Err(ChemError::MissingData { field: FIELD_TB, .. })
        ));
    }

    #[test]
    fn liquid_gravity_from_density() {
        let ctx = ConstantContext::default();
        let hexane = lookup("hexane").unwrap().require().unwrap();
        let tol = Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        };
        assert!(nearly_equal(hexane.sg_liq(&ctx), 664.3 / ctx.rho_water, tol));
        assert!(hexane.api(&ctx) > 75.0 && hexane.api(&ctx) < 85.0);
    }
}
