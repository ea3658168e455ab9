//! Ideal-gas gross heating values of pure compounds.
//!
//! Tabulated values come from GPA 2145-16 at 60 °F and 14.696 psia. Compounds the
//! table lists without a value (inerts) and compounds it does not list at all fall
//! back to the heat of combustion divided by the ideal-gas molar volume.

use pc_core::{ConstantContext, Real};
use tracing::warn;

use crate::catalog::CompoundRecord;
use crate::error::ChemResult;
use crate::units::convert;

/// Result of a GPA 2145 table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GpaListing {
    /// Ideal-gas GHV [Btu/ft³]
    Listed(Real),
    /// Row present, heating value column empty
    Blank,
    NotFound,
}

/// CAS number and ideal-gas GHV [Btu/ft³]; `None` is a blank cell.
static GPA_2145: &[(&str, Option<Real>)] = &[
    ("74-82-8", Some(1010.0)),
    ("74-84-0", Some(1769.7)),
    ("74-98-6", Some(2516.1)),
    ("75-28-5", Some(3251.9)),
    ("106-97-8", Some(3262.3)),
    ("463-82-1", Some(3985.2)),
    ("78-78-4", Some(4000.9)),
    ("109-66-0", Some(4008.9)),
    ("110-54-3", Some(4755.9)),
    ("142-82-5", Some(5502.5)),
    ("111-65-9", Some(6248.9)),
    ("7783-06-4", Some(637.1)),
    ("1333-74-0", Some(324.2)),
    ("630-08-0", Some(320.5)),
    ("7727-37-9", None),
    ("124-38-9", None),
    ("7782-44-7", None),
    ("7440-59-7", None),
    ("7440-37-1", None),
    ("7732-18-5", None),
];

pub fn lookup_ghv_ideal(cas: &str) -> GpaListing {
    match GPA_2145.iter().find(|(c, _)| *c == cas) {
        Some((_, Some(ghv))) => GpaListing::Listed(*ghv),
        Some((_, None)) => GpaListing::Blank,
        None => GpaListing::NotFound,
    }
}

/// Ideal-gas GHV of a compound [Btu/ft³].
pub fn ghv_ideal_gas(record: &CompoundRecord, ctx: &ConstantContext) -> ChemResult<Real> {
    let listing = lookup_ghv_ideal(record.cas());
    if let GpaListing::Listed(ghv) = listing {
        return Ok(ghv);
    }

    let hc = record.heat_of_combustion()?;
    if hc == 0.0 {
        return Ok(0.0);
    }
    let ghv = ghv_from_heat_of_combustion(hc, ctx)?;
    warn!(
        compound = record.name(),
        cas = record.cas(),
        ?listing,
        ghv,
        "no tabulated heating value, using heat of combustion"
    );
    Ok(ghv)
}

/// `-Hc / V_molar`, converted from J/m³ to Btu/ft³.
pub fn ghv_from_heat_of_combustion(hc: Real, ctx: &ConstantContext) -> ChemResult<Real> {
    let j_per_m3 = -hc / ctx.ideal_gas_molar_volume();
    Ok(convert(j_per_m3, "J/m^3", "Btu/ft^3")?)
}
