//! # Capacity Checks
//!
//! Serviceability and strength checks that accompany the flexural design.
//! Both checks report pass/fail in their result; a failing check is a design
//! outcome, not an error.
//!
//! - **One-way shear**: Vu = wu·S / 2 against φVc = φ·0.53·√f'c·b·d
//! - **Minimum thickness**: h ≥ perimeter / 180. This is the Method 2 rule
//!   of thumb and does not replace a deflection calculation.

use serde::{Deserialize, Serialize};

use crate::equations::{minimum_thickness_from_perimeter, one_way_shear_capacity, STRIP_WIDTH_CM};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;

/// One-way shear check on a 1 m strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearCheck {
    /// Factored shear Vu (kg)
    pub demand_kg: f64,
    /// Design strength φVc (kg)
    pub capacity_kg: f64,
    /// φ used for shear
    pub phi: f64,
    /// Effective depth used (cm)
    pub effective_depth_cm: f64,
    /// demand / capacity
    pub unity: f64,
    pub passes: bool,
}

/// Minimum thickness check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThicknessCheck {
    /// Panel perimeter (cm)
    pub perimeter_cm: f64,
    /// perimeter / divisor (cm)
    pub minimum_required_cm: f64,
    /// Slab thickness provided (cm)
    pub provided_cm: f64,
    pub passes: bool,
}

/// Check one-way shear of the short-span strip.
///
/// # Example
/// ```rust
/// use slab_core::calculations::capacity::check_shear;
/// use slab_core::settings::DesignSettings;
///
/// let check = check_shear(953.2, 4.0, 240.0, 9.05, &DesignSettings::default()).unwrap();
/// assert!((check.demand_kg - 1906.4).abs() < 1e-9);
/// assert!(check.passes);
/// ```
pub fn check_shear(
    total_factored_load_kg_m2: f64,
    short_span_m: f64,
    fc_ksc: f64,
    effective_depth_cm: f64,
    settings: &DesignSettings,
) -> CalcResult<ShearCheck> {
    let positive = [
        ("short_span_m", short_span_m),
        ("fc_ksc", fc_ksc),
        ("effective_depth_cm", effective_depth_cm),
    ];
    for (field, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
        }
    }
    if !(total_factored_load_kg_m2.is_finite() && total_factored_load_kg_m2 >= 0.0) {
        return Err(CalcError::invalid_input(
            "total_factored_load_kg_m2",
            total_factored_load_kg_m2.to_string(),
            "Load cannot be negative",
        ));
    }

    let phi = settings.load_factors.phi_shear();
    let demand_kg = total_factored_load_kg_m2 * short_span_m / settings.shear_demand_divisor;
    let capacity_kg = one_way_shear_capacity(phi, fc_ksc, STRIP_WIDTH_CM, effective_depth_cm);

    Ok(ShearCheck {
        demand_kg,
        capacity_kg,
        phi,
        effective_depth_cm,
        unity: demand_kg / capacity_kg,
        passes: capacity_kg >= demand_kg,
    })
}

/// Check the slab thickness against the perimeter rule.
pub fn check_thickness(perimeter_cm: f64, thickness_cm: f64, settings: &DesignSettings) -> CalcResult<ThicknessCheck> {
    if !(perimeter_cm.is_finite() && perimeter_cm > 0.0) {
        return Err(CalcError::invalid_input(
            "perimeter_cm",
            perimeter_cm.to_string(),
            "Perimeter must be positive",
        ));
    }
    if !(thickness_cm.is_finite() && thickness_cm > 0.0) {
        return Err(CalcError::invalid_input(
            "thickness_cm",
            thickness_cm.to_string(),
            "Slab thickness must be positive",
        ));
    }

    let minimum_required_cm = minimum_thickness_from_perimeter(perimeter_cm, settings.thickness_perimeter_divisor);
    Ok(ThicknessCheck {
        perimeter_cm,
        minimum_required_cm,
        provided_cm: thickness_cm,
        passes: thickness_cm >= minimum_required_cm,
    })
}
