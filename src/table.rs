//! Runtime table of the constants, addressable by symbolic name.

use crate::{Result, UnknownConstant, consts};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a constant is fixed by definition or computed from other
/// constants.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Base,
    Derived,
}

/// A named physical constant with its value, unit and category.
///
/// The unit is documentation only and not enforced.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstant {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub category: Category,
}

static TABLE: [PhysicalConstant; 16] = [
    PhysicalConstant {
        name: "CS133_TFREQ",
        value: consts::f64::CS133_TFREQ,
        unit: "Hz",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "SPEED_OF_LIGHT",
        value: consts::f64::SPEED_OF_LIGHT,
        unit: "m/s",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "PLANCK_CONST",
        value: consts::f64::PLANCK_CONST,
        unit: "J·s",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "ELECTRON_CHARGE",
        value: consts::f64::ELECTRON_CHARGE,
        unit: "C",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "BOLTZMANN_CONST",
        value: consts::f64::BOLTZMANN_CONST,
        unit: "J/K",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "AVOGADRO_CONST",
        value: consts::f64::AVOGADRO_CONST,
        unit: "1/mol",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "CANDELA_CONST",
        value: consts::f64::CANDELA_CONST,
        unit: "lm/W",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "REGNAULT_CONST",
        value: consts::f64::REGNAULT_CONST,
        unit: "J/(mol·K)",
        category: Category::Derived,
    },
    PhysicalConstant {
        name: "NEWTON_CONST",
        value: consts::f64::NEWTON_CONST,
        unit: "N·m²/kg²",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "SGRAVACCEL",
        value: consts::f64::SGRAVACCEL,
        unit: "m/s²",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "COULOMB_CONST",
        value: consts::f64::COULOMB_CONST,
        unit: "N·m²/C²",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "ELECTRIC_PERMITTIVITY",
        value: consts::f64::ELECTRIC_PERMITTIVITY,
        unit: "F/m",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "ELECTRIC_PERMEABILITY",
        value: consts::f64::ELECTRIC_PERMEABILITY,
        unit: "N/A²",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "VACUUM_IMPEDANCE",
        value: consts::f64::VACUUM_IMPEDANCE,
        unit: "Ω",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "VACUUM_PERMEABILITY",
        value: consts::f64::VACUUM_PERMEABILITY,
        unit: "H/m",
        category: Category::Base,
    },
    PhysicalConstant {
        name: "VACUUM_PERMITTIVITY",
        value: consts::f64::VACUUM_PERMITTIVITY,
        unit: "F/m",
        category: Category::Base,
    },
];

impl fmt::Display for PhysicalConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {}", self.name, self.value, self.unit)
    }
}

/// Returns the full table of constants.
pub fn all() -> &'static [PhysicalConstant] {
    &TABLE
}

/// Looks up the full record of the constant with the given symbolic name.
///
/// # Errors
/// Returns an [`UnknownConstant`] error if the name is not in the fixed set.
pub fn lookup(name: &str) -> Result<&'static PhysicalConstant> {
    TABLE
        .iter()
        .find(|constant| constant.name == name)
        .ok_or_else(|| UnknownConstant {
            name: name.to_string(),
        })
}

/// Looks up the value of the constant with the given symbolic name.
///
/// # Errors
/// Returns an [`UnknownConstant`] error if the name is not in the fixed set.
pub fn get(name: &str) -> Result<f64> {
    lookup(name).map(|constant| constant.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|constant| constant.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn table_values_match_const_items() {
        assert_eq!(
            get("SPEED_OF_LIGHT").unwrap().to_bits(),
            consts::f64::SPEED_OF_LIGHT.to_bits()
        );
        assert_eq!(
            get("BOLTZMANN_CONST").unwrap().to_bits(),
            consts::f64::BOLTZMANN_CONST.to_bits()
        );
        assert_eq!(
            get("REGNAULT_CONST").unwrap().to_bits(),
            consts::f64::REGNAULT_CONST.to_bits()
        );
        assert_eq!(
            get("VACUUM_IMPEDANCE").unwrap().to_bits(),
            consts::f64::VACUUM_IMPEDANCE.to_bits()
        );
    }

    #[test]
    fn lookup_yields_unit_and_category() {
        let constant = lookup("REGNAULT_CONST").unwrap();
        assert_eq!(constant.unit, "J/(mol·K)");
        assert_eq!(constant.category, Category::Derived);

        let constant = lookup("CANDELA_CONST").unwrap();
        assert_eq!(constant.unit, "lm/W");
        assert_eq!(constant.category, Category::Base);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let error = get("NOT_A_CONSTANT").unwrap_err();
        assert_eq!(error.name, "NOT_A_CONSTANT");
        assert!(lookup("").is_err());
        assert!(lookup("speed_of_light").is_err());
    }

    #[test]
    fn only_regnault_const_is_derived() {
        let derived: Vec<_> = all()
            .iter()
            .filter(|constant| constant.category == Category::Derived)
            .map(|constant| constant.name)
            .collect();
        assert_eq!(derived, ["REGNAULT_CONST"]);
    }
}
