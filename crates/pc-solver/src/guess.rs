//! Initial guesses for the root solver.

use pc_core::{PropertyId, Real};

/// Starting point used when solving a relation for `property`.
pub fn initial_guess(property: PropertyId) -> Real {
    match property {
        PropertyId::Mw => 100.0,
        PropertyId::Api => 30.0,
        PropertyId::SgLiq => 0.8,
        PropertyId::SgGas => 0.6,
        PropertyId::Tb => 300.0,
        PropertyId::Ghv | PropertyId::Nhv => 3000.0,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(initial_guess(PropertyId::Mw), 100.0);
        assert_eq!(initial_guess(PropertyId::SgGas), 0.6);
        assert_eq!(initial_guess(PropertyId::Nhv), 3000.0);
        assert_eq!(initial_guess(PropertyId::Omega), 1.0);
    }
}
