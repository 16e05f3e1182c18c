//! # Design Settings
//!
//! Deployment-wide constants for a design run: the load factor set, concrete
//! unit weight and the detailing limits. Chosen once and passed by reference
//! to every stage so a single run never mixes conventions.
//!
//! ## JSON Example
//!
//! Every field has a default, so a settings file only needs the overrides:
//!
//! ```rust
//! use slab_core::loads::LoadFactorSet;
//! use slab_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json(r#"{ "load_factors": "Aci318Strength" }"#).unwrap();
//! assert_eq!(settings.load_factors, LoadFactorSet::Aci318Strength);
//! assert_eq!(settings.max_spacing_cm, 45.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadFactorSet;

/// Constants shared by every stage of a design run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Load and strength reduction factors
    pub load_factors: LoadFactorSet,

    /// Normal-weight concrete unit weight (kg/m³)
    pub concrete_unit_weight_kg_m3: f64,

    /// Absolute upper limit on bar spacing (cm)
    pub max_spacing_cm: f64,

    /// Spacing may not exceed this multiple of the slab thickness
    pub spacing_thickness_multiple: f64,

    /// Spacings are rounded down to a whole number of this increment (cm)
    pub spacing_increment_cm: f64,

    /// Moments at or below this magnitude get minimum steel only (kg-m)
    pub negligible_moment_kgm: f64,

    /// Shear demand is wu × S / divisor
    pub shear_demand_divisor: f64,

    /// Minimum thickness is perimeter / divisor
    pub thickness_perimeter_divisor: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            load_factors: LoadFactorSet::default(),
            concrete_unit_weight_kg_m3: 2400.0,
            max_spacing_cm: 45.0,
            spacing_thickness_multiple: 3.0,
            spacing_increment_cm: 0.5,
            negligible_moment_kgm: 1e-6,
            shear_demand_divisor: 2.0,
            thickness_perimeter_divisor: 180.0,
        }
    }
}

impl DesignSettings {
    /// Parse settings from JSON, filling omitted fields with defaults, and validate.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)
            .map_err(|e| CalcError::invalid_input("settings", "<json>", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Every numeric constant must be positive and finite
    /// (the negligible-moment threshold may be zero).
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("concrete_unit_weight_kg_m3", self.concrete_unit_weight_kg_m3),
            ("max_spacing_cm", self.max_spacing_cm),
            ("spacing_thickness_multiple", self.spacing_thickness_multiple),
            ("spacing_increment_cm", self.spacing_increment_cm),
            ("shear_demand_divisor", self.shear_demand_divisor),
            ("thickness_perimeter_divisor", self.thickness_perimeter_divisor),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
            }
        }
        if !(self.negligible_moment_kgm.is_finite() && self.negligible_moment_kgm >= 0.0) {
            return Err(CalcError::invalid_input(
                "negligible_moment_kgm",
                self.negligible_moment_kgm.to_string(),
                "Cannot be negative",
            ));
        }
        Ok(())
    }

    /// Spacing cap for a slab of the given thickness: min(k·h, s_max)
    pub fn spacing_limit_cm(&self, thickness_cm: f64) -> f64 {
        (self.spacing_thickness_multiple * thickness_cm).min(self.max_spacing_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DesignSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.load_factors, LoadFactorSet::Aci318Legacy);
        assert_eq!(settings.concrete_unit_weight_kg_m3, 2400.0);
    }

    #[test]
    fn test_spacing_limit() {
        let settings = DesignSettings::default();
        assert_eq!(settings.spacing_limit_cm(12.0), 36.0);
        assert_eq!(settings.spacing_limit_cm(20.0), 45.0);
    }

    #[test]
    fn test_partial_json() {
        let settings = DesignSettings::from_json(r#"{ "max_spacing_cm": 30.0 }"#).unwrap();
        assert_eq!(settings.max_spacing_cm, 30.0);
        assert_eq!(settings.spacing_increment_cm, 0.5);
    }

    #[test]
    fn test_invalid_json_values() {
        let err = DesignSettings::from_json(r#"{ "spacing_increment_cm": 0.0 }"#).unwrap_err();
        assert!(err.to_string().contains("spacing_increment_cm"));
        assert!(DesignSettings::from_json("not json").is_err());
        assert!(DesignSettings::from_json(r#"{ "load_factors": "Asd" }"#).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let settings = DesignSettings {
            load_factors: LoadFactorSet::Aci318Strength,
            ..DesignSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: DesignSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, parsed);
    }
}
