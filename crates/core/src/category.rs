//! Product categories and stock-keeping units.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Perishable product category.
///
/// Festival impact sets and seasonality fallback curves are keyed by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Poultry,
    Produce,
    Dairy,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Poultry, Category::Produce, Category::Dairy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Poultry => "poultry",
            Category::Produce => "produce",
            Category::Dairy => "dairy",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poultry" => Ok(Category::Poultry),
            "produce" => Ok(Category::Produce),
            "dairy" => Ok(Category::Dairy),
            other => Err(DomainError::validation(format!("unknown category: {other}"))),
        }
    }
}

/// Stock-keeping unit for lot quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "units")]
    Piece,
    #[serde(rename = "packs")]
    Pack,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Piece => "units",
            Unit::Pack => "packs",
        }
    }

    /// Whether quantities in this unit are already denominated in kilograms.
    ///
    /// Waste exposure is reported in kg; non-mass units need a configured
    /// per-unit weight conversion.
    pub fn is_mass(&self) -> bool {
        matches!(self, Unit::Kilogram)
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_lowercase_names() {
        assert_eq!("poultry".parse::<Category>().unwrap(), Category::Poultry);
        assert!("seafood".parse::<Category>().is_err());
    }

    #[test]
    fn only_kilograms_are_mass_denominated() {
        assert!(Unit::Kilogram.is_mass());
        assert!(!Unit::Piece.is_mass());
        assert!(!Unit::Pack.is_mass());
    }
}
