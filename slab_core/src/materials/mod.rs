//! # Materials
//!
//! Concrete and reinforcing steel properties for slab design, plus the fixed
//! reinforcing bar catalog.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::{BarSize, MaterialProperties, SteelTier};
//!
//! let materials = MaterialProperties::new(240.0, 4000.0);
//! assert_eq!(materials.steel_tier(), SteelTier::HighStrength);
//! assert_eq!(materials.minimum_steel_ratio(), 0.0018);
//!
//! let bar = BarSize::Rb9.spec();
//! assert_eq!(bar.area_cm2, 0.636);
//! ```

pub mod rebar;

pub use rebar::{BarSize, BarSpec};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Yield strength (ksc) at and above which the lower minimum-steel ratio applies
pub const HIGH_STRENGTH_FY_KSC: f64 = 4000.0;

/// Shrinkage and temperature steel ratio for lower-grade bars
pub const MIN_STEEL_RATIO_STANDARD: f64 = 0.0020;

/// Shrinkage and temperature steel ratio for high-grade bars
pub const MIN_STEEL_RATIO_HIGH_STRENGTH: f64 = 0.0018;

/// Two-tier classification of reinforcing steel for the minimum-steel rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelTier {
    /// fy below 4000 ksc (e.g. SR24 round bars, SD30)
    Standard,
    /// fy of 4000 ksc or more (e.g. SD40, SD50)
    HighStrength,
}

impl SteelTier {
    /// Classify a yield strength
    pub fn from_fy(fy_ksc: f64) -> Self {
        if fy_ksc >= HIGH_STRENGTH_FY_KSC {
            SteelTier::HighStrength
        } else {
            SteelTier::Standard
        }
    }

    /// Minimum reinforcement ratio (As,min / b·h) for this tier
    pub fn minimum_steel_ratio(&self) -> f64 {
        match self {
            SteelTier::Standard => MIN_STEEL_RATIO_STANDARD,
            SteelTier::HighStrength => MIN_STEEL_RATIO_HIGH_STRENGTH,
        }
    }
}

/// Concrete and steel strengths.
///
/// ## JSON Example
///
/// ```json
/// { "fc_ksc": 240.0, "fy_ksc": 4000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Specified compressive strength of concrete f'c (ksc)
    pub fc_ksc: f64,

    /// Specified yield strength of reinforcement fy (ksc)
    pub fy_ksc: f64,
}

impl MaterialProperties {
    /// Create a material pair
    pub fn new(fc_ksc: f64, fy_ksc: f64) -> Self {
        MaterialProperties { fc_ksc, fy_ksc }
    }

    /// Validate that both strengths are positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.fc_ksc.is_finite() && self.fc_ksc > 0.0) {
            return Err(CalcError::invalid_input(
                "fc_ksc",
                self.fc_ksc.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if !(self.fy_ksc.is_finite() && self.fy_ksc > 0.0) {
            return Err(CalcError::invalid_input(
                "fy_ksc",
                self.fy_ksc.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        Ok(())
    }

    /// Steel tier used by the minimum-steel rule
    pub fn steel_tier(&self) -> SteelTier {
        SteelTier::from_fy(self.fy_ksc)
    }

    /// Minimum reinforcement ratio for this steel
    pub fn minimum_steel_ratio(&self) -> f64 {
        self.steel_tier().minimum_steel_ratio()
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties::new(240.0, 4000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steel_tiers() {
        assert_eq!(SteelTier::from_fy(2400.0), SteelTier::Standard);
        assert_eq!(SteelTier::from_fy(3999.9), SteelTier::Standard);
        assert_eq!(SteelTier::from_fy(4000.0), SteelTier::HighStrength);
        assert_eq!(SteelTier::from_fy(5000.0), SteelTier::HighStrength);
    }

    #[test]
    fn test_minimum_steel_ratio_is_two_tier() {
        assert_eq!(MaterialProperties::new(240.0, 2400.0).minimum_steel_ratio(), 0.0020);
        assert_eq!(MaterialProperties::new(240.0, 3000.0).minimum_steel_ratio(), 0.0020);
        assert_eq!(MaterialProperties::new(240.0, 4000.0).minimum_steel_ratio(), 0.0018);
        assert_eq!(MaterialProperties::new(240.0, 5000.0).minimum_steel_ratio(), 0.0018);
    }

    #[test]
    fn test_validation() {
        assert!(MaterialProperties::default().validate().is_ok());
        assert!(MaterialProperties::new(0.0, 4000.0).validate().is_err());
        assert!(MaterialProperties::new(240.0, -1.0).validate().is_err());
        assert!(MaterialProperties::new(f64::NAN, 4000.0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let mat = MaterialProperties::new(280.0, 5000.0);
        let json = serde_json::to_string(&mat).unwrap();
        assert!(json.contains("\"fc_ksc\":280.0"));
        let parsed: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, parsed);
    }
}
