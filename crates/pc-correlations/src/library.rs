//! Residual forms of the empirical correlations.
//!
//! Each function returns zero when its arguments satisfy the correlation.
//!
//! Sources:
//! - Riazi, M. R., "Characterization and Properties of Petroleum Fractions", ASTM (2005)
//! - Nourozieh, H., Kariznovi, M., Abedi, J., SPE-174558-PA (2016)
//! - API Technical Data Book; GPA Publication 2145

use pc_core::Real;

/// Gas specific gravity from molecular weight (Riazi eq. 2.6). Valid for all gases.
pub fn mw_sg_gas(mw: Real, sg_gas: Real, mw_air: Real) -> Real {
    mw / mw_air - sg_gas
}

/// Liquid specific gravity from molecular weight (Nourozieh eq. 3).
///
/// Fitted for C7 to C100; off by about 11% for C6.
pub fn mw_sg_liq(mw: Real, sg_liq: Real) -> Real {
    -sg_liq + 1.07 - (3.56073 - 2.93886 * mw.powf(0.1)).exp()
}

/// API gravity definition (Riazi eq. 2.4). Valid for all liquids.
pub fn api_sg_liq(api: Real, sg_liq: Real) -> Real {
    -api + 141.5 / sg_liq - 131.5
}

/// Linear boiling-point closure.
pub fn tb_mw_sg_liq(tb: Real, mw: Real, sg_liq: Real) -> Real {
    tb - (mw + 0.5 * sg_liq)
}

/// Boiling point from molecular weight (Nourozieh eq. 2; Riazi eq. 2.42).
pub fn tb_mw(tb: Real, mw: Real) -> Real {
    -mw + ((6.97996 - (1080.0 - tb).ln()) / 0.01964).powf(1.5)
}

/// Gross heating value of fuel gases vs gas specific gravity [Btu/scf].
pub fn gas_ghv_sg(ghv: Real, sg_gas: Real) -> Real {
    -ghv + 229.60 + 1321.0 * sg_gas + 207.97 * sg_gas.powi(2) - 57.084 * sg_gas.powi(3)
}

/// Net heating value of fuel gases vs gas specific gravity [Btu/scf].
pub fn gas_nhv_sg(nhv: Real, sg_gas: Real) -> Real {
    -nhv + 186.37 + 1219.3 * sg_gas + 206.93 * sg_gas.powi(2) - 56.936 * sg_gas.powi(3)
}

/// Gross heating value of liquid petroleum fractions vs API gravity [Btu/lb].
pub fn liquid_ghv_api(ghv: Real, api: Real) -> Real {
    -ghv + 17_672.0 + 66.6 * api - 0.316 * api.powi(2) - 0.0014 * api.powi(3)
}

/// Liquid specific gravity from mass density at 60 °F.
pub fn sg_liq_density(sg_liq: Real, density: Real, rho_water: Real) -> Real {
    density / rho_water - sg_liq
}

/// Direct form of [`sg_liq_density`].
pub fn sg_liq_from_density(density: Real, rho_water: Real) -> Real {
    density / rho_water
}

/// Direct form of [`api_sg_liq`].
pub fn api_from_sg_liq(sg_liq: Real) -> Real {
    141.5 / sg_liq - 131.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    };

    #[test]
    fn api_and_sg_liq_agree() {
        let sg = 0.814_654_370_028_600_1;
        let api = api_from_sg_liq(sg);
        assert!(nearly_equal(api, 42.193_292_770_322_145, TOL));
        assert!(api_sg_liq(api, sg).abs() < 1e-12);
    }

    #[test]
    fn mw_sg_gas_zero_on_air() {
        assert_eq!(mw_sg_gas(28.97, 1.0, 28.97), 0.0);
    }

    #[test]
    fn mw_sg_liq_is_increasing_in_mw() {
        let sg_at = |mw: Real| mw_sg_liq(mw, 0.0);
        assert!(sg_at(100.0) < sg_at(175.0));
        assert!(sg_at(175.0) < sg_at(300.0));
    }

    #[test]
    fn water_density_gives_unit_gravity() {
        assert_eq!(sg_liq_from_density(999.0, 999.0), 1.0);
        assert_eq!(sg_liq_density(0.5, 500.0, 1000.0), 0.0);
    }

    #[test]
    fn gas_heating_values_at_zero_gravity() {
        assert!(nearly_equal(gas_ghv_sg(229.60, 0.0), 0.0, TOL));
        assert!(nearly_equal(gas_nhv_sg(186.37, 0.0), 0.0, TOL));
    }

    #[test]
    fn liquid_ghv_at_thirty_api() {
        let ghv = 17_672.0 + 66.6 * 30.0 - 0.316 * 900.0 - 0.0014 * 27_000.0;
        assert!(nearly_equal(liquid_ghv_api(ghv, 30.0), 0.0, TOL));
    }

    #[test]
    fn riazi_boiling_point_is_finite_below_limit() {
        let r = tb_mw(400.0, 0.0);
        assert!(r.is_finite() && r > 0.0);
        assert!(tb_mw(1100.0, 0.0).is_nan());
    }
}
