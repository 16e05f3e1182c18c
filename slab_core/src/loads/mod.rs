//! # Loads
//!
//! Area loads on a slab panel and their factoring for strength design.
//!
//! Self-weight is always derived from the slab thickness and the concrete
//! unit weight; only the superimposed dead load and the live load are inputs.
//!
//! ## Load Factor Sets
//!
//! | Set | Equation | φ flexure | φ shear |
//! |-----|----------|-----------|---------|
//! | [`LoadFactorSet::Aci318Legacy`] | 1.4D + 1.7L | 0.90 | 0.85 |
//! | [`LoadFactorSet::Aci318Strength`] | 1.2D + 1.6L | 0.90 | 0.75 |
//!
//! A set carries its own strength reduction factors, so factors from
//! different code editions are never mixed inside one design.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::loads::{compute_factored_load, LoadInputs};
//! use slab_core::settings::DesignSettings;
//!
//! let loads = LoadInputs::new(150.0, 200.0);
//! let factored = compute_factored_load(12.0, &loads, &DesignSettings::default()).unwrap();
//!
//! assert!((factored.self_weight - 288.0).abs() < 1e-9);
//! assert!((factored.total - 953.2).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::self_weight;
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;

/// Load and strength reduction factors of one code edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadFactorSet {
    /// ACI 318-99 and earlier: U = 1.4D + 1.7L
    #[default]
    Aci318Legacy,
    /// ACI 318-02 and later: U = 1.2D + 1.6L
    Aci318Strength,
}

impl LoadFactorSet {
    /// All factor sets
    pub const ALL: [LoadFactorSet; 2] = [LoadFactorSet::Aci318Legacy, LoadFactorSet::Aci318Strength];

    /// Short identifier
    pub fn name(&self) -> &'static str {
        match self {
            LoadFactorSet::Aci318Legacy => "ACI 318-99",
            LoadFactorSet::Aci318Strength => "ACI 318-19",
        }
    }

    /// Human-readable combination
    pub fn equation(&self) -> &'static str {
        match self {
            LoadFactorSet::Aci318Legacy => "1.4D + 1.7L",
            LoadFactorSet::Aci318Strength => "1.2D + 1.6L",
        }
    }

    /// Dead load factor γD
    pub fn dead_factor(&self) -> f64 {
        match self {
            LoadFactorSet::Aci318Legacy => 1.4,
            LoadFactorSet::Aci318Strength => 1.2,
        }
    }

    /// Live load factor γL
    pub fn live_factor(&self) -> f64 {
        match self {
            LoadFactorSet::Aci318Legacy => 1.7,
            LoadFactorSet::Aci318Strength => 1.6,
        }
    }

    /// Strength reduction factor for flexure (tension-controlled)
    pub fn phi_flexure(&self) -> f64 {
        0.9
    }

    /// Strength reduction factor for shear
    pub fn phi_shear(&self) -> f64 {
        match self {
            LoadFactorSet::Aci318Legacy => 0.85,
            LoadFactorSet::Aci318Strength => 0.75,
        }
    }

    /// Parse from a flexible string ("legacy", "1.4D+1.7L", "ACI 318-19", ...)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "legacy" | "aci318legacy" | "aci31899" | "1.4d+1.7l" => Ok(LoadFactorSet::Aci318Legacy),
            "strength" | "aci318strength" | "aci31819" | "aci31802" | "1.2d+1.6l" => {
                Ok(LoadFactorSet::Aci318Strength)
            }
            _ => Err(CalcError::invalid_input(
                "load_factors",
                s,
                "Unknown load factor set (expected legacy or strength)",
            )),
        }
    }
}

impl std::fmt::Display for LoadFactorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.equation())
    }
}

/// Service (unfactored) area loads applied on top of self-weight.
///
/// ## JSON Example
///
/// ```json
/// { "superimposed_dead_kg_m2": 150.0, "live_kg_m2": 200.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadInputs {
    /// Superimposed dead load: finishes, partitions, services (kg/m²)
    pub superimposed_dead_kg_m2: f64,

    /// Live load (kg/m²)
    pub live_kg_m2: f64,
}

impl LoadInputs {
    pub fn new(superimposed_dead_kg_m2: f64, live_kg_m2: f64) -> Self {
        LoadInputs {
            superimposed_dead_kg_m2,
            live_kg_m2,
        }
    }

    /// Both loads must be finite and non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.superimposed_dead_kg_m2.is_finite() && self.superimposed_dead_kg_m2 >= 0.0) {
            return Err(CalcError::invalid_input(
                "superimposed_dead_kg_m2",
                self.superimposed_dead_kg_m2.to_string(),
                "Superimposed dead load cannot be negative",
            ));
        }
        if !(self.live_kg_m2.is_finite() && self.live_kg_m2 >= 0.0) {
            return Err(CalcError::invalid_input(
                "live_kg_m2",
                self.live_kg_m2.to_string(),
                "Live load cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Derived and factored area loads (all kg/m²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactoredLoad {
    /// Slab self-weight
    pub self_weight: f64,
    /// Self-weight + superimposed dead load (service)
    pub total_dead: f64,
    /// Factored dead load wD = γD × total_dead
    pub dead: f64,
    /// Factored live load wL = γL × live
    pub live: f64,
    /// Total factored load wu = wD + wL
    pub total: f64,
    /// Factor set that produced these values
    pub factor_set: LoadFactorSet,
}

/// Factor the panel loads with the set selected in `settings`.
///
/// # Errors
/// `InvalidInput` for a non-positive thickness, negative loads or a
/// non-positive concrete unit weight.
pub fn compute_factored_load(
    thickness_cm: f64,
    loads: &LoadInputs,
    settings: &DesignSettings,
) -> CalcResult<FactoredLoad> {
    if !(thickness_cm.is_finite() && thickness_cm > 0.0) {
        return Err(CalcError::invalid_input(
            "thickness_cm",
            thickness_cm.to_string(),
            "Slab thickness must be positive",
        ));
    }
    loads.validate()?;
    if !(settings.concrete_unit_weight_kg_m3.is_finite() && settings.concrete_unit_weight_kg_m3 > 0.0) {
        return Err(CalcError::invalid_input(
            "concrete_unit_weight_kg_m3",
            settings.concrete_unit_weight_kg_m3.to_string(),
            "Concrete unit weight must be positive",
        ));
    }

    let factor_set = settings.load_factors;
    let self_weight = self_weight(settings.concrete_unit_weight_kg_m3, thickness_cm);
    let total_dead = self_weight + loads.superimposed_dead_kg_m2;
    let dead = factor_set.dead_factor() * total_dead;
    let live = factor_set.live_factor() * loads.live_kg_m2;

    Ok(FactoredLoad {
        self_weight,
        total_dead,
        dead,
        live,
        total: dead + live,
        factor_set,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example_loads() {
        let factored =
            compute_factored_load(12.0, &LoadInputs::new(150.0, 200.0), &DesignSettings::default()).unwrap();

        assert!((factored.self_weight - 288.0).abs() < 1e-9);
        assert!((factored.total_dead - 438.0).abs() < 1e-9);
        assert!((factored.dead - 613.2).abs() < 1e-9);
        assert!((factored.live - 340.0).abs() < 1e-9);
        assert!((factored.total - 953.2).abs() < 1e-9);
        assert_eq!(factored.factor_set, LoadFactorSet::Aci318Legacy);
    }

    #[test]
    fn test_strength_factor_set() {
        let settings = DesignSettings {
            load_factors: LoadFactorSet::Aci318Strength,
            ..DesignSettings::default()
        };
        let factored = compute_factored_load(12.0, &LoadInputs::new(150.0, 200.0), &settings).unwrap();

        // 1.2 × 438 + 1.6 × 200
        assert!((factored.dead - 525.6).abs() < 1e-9);
        assert!((factored.live - 320.0).abs() < 1e-9);
        assert!((factored.total - 845.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_superimposed_loads() {
        let factored =
            compute_factored_load(10.0, &LoadInputs::new(0.0, 0.0), &DesignSettings::default()).unwrap();
        assert!((factored.total - 1.4 * 240.0).abs() < 1e-9);
        assert_eq!(factored.live, 0.0);
    }

    #[test]
    fn test_invalid_loads() {
        let settings = DesignSettings::default();
        assert!(compute_factored_load(0.0, &LoadInputs::new(150.0, 200.0), &settings).is_err());
        assert!(compute_factored_load(12.0, &LoadInputs::new(-1.0, 200.0), &settings).is_err());

        let err = compute_factored_load(12.0, &LoadInputs::new(150.0, f64::NAN), &settings).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "live_kg_m2"));
    }

    #[test]
    fn test_factor_set_phi_values() {
        assert_eq!(LoadFactorSet::Aci318Legacy.phi_shear(), 0.85);
        assert_eq!(LoadFactorSet::Aci318Strength.phi_shear(), 0.75);
        for set in LoadFactorSet::ALL {
            assert_eq!(set.phi_flexure(), 0.9);
        }
    }

    #[test]
    fn test_factor_set_parsing() {
        assert_eq!(LoadFactorSet::from_str_flexible("legacy").unwrap(), LoadFactorSet::Aci318Legacy);
        assert_eq!(LoadFactorSet::from_str_flexible("1.2D + 1.6L").unwrap(), LoadFactorSet::Aci318Strength);
        assert_eq!(LoadFactorSet::from_str_flexible("ACI 318-19").unwrap(), LoadFactorSet::Aci318Strength);
        assert!(LoadFactorSet::from_str_flexible("ASD").is_err());
    }

    #[test]
    fn test_load_inputs_serialization() {
        let loads = LoadInputs::new(150.0, 200.0);
        let json = serde_json::to_string(&loads).unwrap();
        let parsed: LoadInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(loads, parsed);
    }
}
