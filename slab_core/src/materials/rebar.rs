//! Reinforcing Bar Catalog
//!
//! Fixed catalog of bar designations available for slab reinforcement.
//! RB bars are plain round bars, DB bars are deformed bars; the number is the
//! nominal diameter in millimetres.
//!
//! The catalog is closed: callers select an entry by [`BarSize`] or by name
//! through [`BarSize::from_str_flexible`], but never construct a [`BarSpec`]
//! themselves.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Millimeters};

/// Cross-section data for one catalog bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarSpec {
    /// Designation (e.g. "RB9")
    pub name: &'static str,
    /// Nominal cross-sectional area (cm²)
    pub area_cm2: f64,
    /// Nominal diameter (mm)
    pub diameter_mm: f64,
}

impl BarSpec {
    /// Nominal diameter in centimetres
    pub fn diameter_cm(&self) -> f64 {
        Centimeters::from(Millimeters(self.diameter_mm)).value()
    }
}

/// Catalog bar designations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// 6 mm round bar
    #[serde(rename = "RB6")]
    Rb6,
    /// 9 mm round bar
    #[default]
    #[serde(rename = "RB9")]
    Rb9,
    /// 10 mm deformed bar
    #[serde(rename = "DB10")]
    Db10,
    /// 12 mm deformed bar
    #[serde(rename = "DB12")]
    Db12,
    /// 16 mm deformed bar
    #[serde(rename = "DB16")]
    Db16,
}

const RB6: BarSpec = BarSpec { name: "RB6", area_cm2: 0.283, diameter_mm: 6.0 };
const RB9: BarSpec = BarSpec { name: "RB9", area_cm2: 0.636, diameter_mm: 9.0 };
const DB10: BarSpec = BarSpec { name: "DB10", area_cm2: 0.785, diameter_mm: 10.0 };
const DB12: BarSpec = BarSpec { name: "DB12", area_cm2: 1.131, diameter_mm: 12.0 };
const DB16: BarSpec = BarSpec { name: "DB16", area_cm2: 2.011, diameter_mm: 16.0 };

impl BarSize {
    /// All catalog bars, smallest first
    pub const ALL: [BarSize; 5] = [
        BarSize::Rb6,
        BarSize::Rb9,
        BarSize::Db10,
        BarSize::Db12,
        BarSize::Db16,
    ];

    /// Catalog entry for this bar
    pub fn spec(&self) -> &'static BarSpec {
        match self {
            BarSize::Rb6 => &RB6,
            BarSize::Rb9 => &RB9,
            BarSize::Db10 => &DB10,
            BarSize::Db12 => &DB12,
            BarSize::Db16 => &DB16,
        }
    }

    /// Designation string (e.g. "DB12")
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// Look up a bar by name, tolerating case and separators ("db 12", "DB-12")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_uppercase();
        BarSize::ALL
            .iter()
            .copied()
            .find(|bar| bar.name() == normalized)
            .ok_or_else(|| CalcError::bar_not_found(s))
    }

    /// True for deformed (DB) bars
    pub fn is_deformed(&self) -> bool {
        !matches!(self, BarSize::Rb6 | BarSize::Rb9)
    }
}

impl std::str::FromStr for BarSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BarSize::from_str_flexible(s)
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        assert_eq!(BarSize::Rb6.spec().area_cm2, 0.283);
        assert_eq!(BarSize::Rb9.spec().area_cm2, 0.636);
        assert_eq!(BarSize::Db10.spec().area_cm2, 0.785);
        assert_eq!(BarSize::Db12.spec().area_cm2, 1.131);
        assert_eq!(BarSize::Db16.spec().area_cm2, 2.011);
        assert!((BarSize::Db12.spec().diameter_cm() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_catalog_ordered_by_area() {
        for pair in BarSize::ALL.windows(2) {
            assert!(pair[0].spec().area_cm2 < pair[1].spec().area_cm2);
        }
    }

    #[test]
    fn test_flexible_lookup() {
        assert_eq!(BarSize::from_str_flexible("RB9").unwrap(), BarSize::Rb9);
        assert_eq!(BarSize::from_str_flexible("db 12").unwrap(), BarSize::Db12);
        assert_eq!("DB-16".parse::<BarSize>().unwrap(), BarSize::Db16);
    }

    #[test]
    fn test_unknown_bar() {
        let err = BarSize::from_str_flexible("DB99").unwrap_err();
        assert_eq!(err.error_code(), "BAR_NOT_FOUND");
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_deformed() {
        assert!(!BarSize::Rb9.is_deformed());
        assert!(BarSize::Db10.is_deformed());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&BarSize::Db12).unwrap();
        assert_eq!(json, "\"DB12\"");
        let parsed: BarSize = serde_json::from_str("\"RB6\"").unwrap();
        assert_eq!(parsed, BarSize::Rb6);
        assert!(serde_json::from_str::<BarSize>("\"DB99\"").is_err());
    }
}
