//! Heating-value breakdown of a gas mixture containing one petroleum fraction.
//!
//! Given a measured mixture GHV, the pure compounds' ideal-gas GHVs are
//! mole-weighted and subtracted; what remains, divided by the fraction's mole
//! fraction, is the fraction's GHV.

use std::fmt;

use pc_core::{ConstantContext, Real, round_to};
use tracing::debug;

use crate::catalog::lookup;
use crate::composition::{Composition, is_fraction};
use crate::error::{ChemError, ChemResult};
use crate::heating_value::ghv_ideal_gas;

/// Decimals kept on the back-calculated fraction GHV.
pub const FRACTION_GHV_DECIMALS: u32 = 1;

/// One line of the breakdown table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BreakdownRow {
    pub name: String,
    pub cas: Option<&'static str>,
    /// Ideal-gas GHV [Btu/scf]
    pub ghv: Real,
    pub mole_fraction: Real,
    /// `ghv · mole_fraction` [Btu/scf]
    pub weighted_ghv: Real,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GhvBreakdown {
    /// Pure compounds, in composition order.
    pub pure: Vec<BreakdownRow>,
    pub fraction: BreakdownRow,
    pub total_mole_percent: Real,
    /// Sum of weighted GHVs [Btu/scf]
    pub total_ghv: Real,
}

impl GhvBreakdown {
    /// Back-calculated GHV of the petroleum fraction [Btu/scf].
    pub fn fraction_ghv(&self) -> Real {
        self.fraction.ghv
    }
}

/// Split a measured mixture GHV between its pure compounds and its fraction.
pub fn ghv_breakdown(
    composition: &Composition,
    ghv_total: Real,
    ctx: &ConstantContext,
) -> ChemResult<GhvBreakdown> {
    let mut fractions = composition.iter().filter(|(n, _)| is_fraction(n));
    let (fraction_name, z_fraction) = fractions.next().ok_or(ChemError::NoFraction)?;
    if fractions.next().is_some() {
        return Err(ChemError::Composition {
            what: "more than one petroleum fraction entry",
        });
    }
    if z_fraction <= 0.0 {
        return Err(ChemError::Composition {
            what: "petroleum fraction has zero mole fraction",
        });
    }

    let mut pure = Vec::new();
    for (name, z) in composition.pure() {
        let record = lookup(name)?;
        record.require()?;
        let ghv = ghv_ideal_gas(record, ctx)?;
        debug!(compound = name, cas = record.cas(), ghv, z, "pure compound heating value");
        pure.push(BreakdownRow {
            name: name.to_string(),
            cas: Some(record.cas()),
            ghv,
            mole_fraction: z,
            weighted_ghv: ghv * z,
        });
    }

    let weighted_pure: Real = pure.iter().map(|r| r.weighted_ghv).sum();
    let z_pure: Real = pure.iter().map(|r| r.mole_fraction).sum();
    let fraction_ghv = round_to((ghv_total - weighted_pure) / z_fraction, FRACTION_GHV_DECIMALS);
    let fraction = BreakdownRow {
        name: fraction_name.to_string(),
        cas: None,
        ghv: fraction_ghv,
        mole_fraction: z_fraction,
        weighted_ghv: fraction_ghv * z_fraction,
    };
    debug!(ghv_total, fraction_ghv, z_fraction, "fraction heating value");

    Ok(GhvBreakdown {
        total_mole_percent: (z_pure + z_fraction) * 100.0,
        total_ghv: weighted_pure + fraction.weighted_ghv,
        pure,
        fraction,
    })
}

impl fmt::Display for GhvBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:<11} {:>22} {:>15} {:>30}",
            "Compound Name",
            "CAS",
            "Ideal Gas GHV [Btu/scf]",
            "Mole Frac. [%]",
            "Wghtd. Ideal Gas GHV [Btu/scf]"
        )?;
        for row in self.pure.iter().chain(std::iter::once(&self.fraction)) {
            writeln!(
                f,
                "{:<20} {:<11} {:>22.1} {:>15.4} {:>30.3}",
                row.name,
                row.cas.unwrap_or("-"),
                row.ghv,
                row.mole_fraction * 100.0,
                row.weighted_ghv
            )?;
        }
        write!(
            f,
            "{:<20} {:<11} {:>22} {:>15.4} {:>30.3}",
            "Total", "-", "-", self.total_mole_percent, self.total_ghv
        )
    }
}
