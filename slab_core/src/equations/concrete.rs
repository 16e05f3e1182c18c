//! # Reinforced Concrete Slab Formulas
//!
//! Strength-design formulas for a singly-reinforced rectangular slab strip.
//!
//! ## Notation
//!
//! - `b` = Strip width (cm), 100 cm for per-metre design
//! - `d` = Effective depth to the centroid of tension steel (cm)
//! - `h` = Overall slab thickness (cm)
//! - `f'c` = Concrete compressive strength (ksc)
//! - `fy` = Steel yield strength (ksc)
//! - `Mu` = Factored moment (kg-cm)
//! - `φ` = Strength reduction factor
//!
//! ## References
//!
//! - ACI 318 Section 10.2 / 22.2: Flexural strength assumptions (Whitney block)
//! - ACI 318 Section 7.12 / 24.4: Shrinkage and temperature reinforcement
//! - ACI 318 Section 11.2 / 22.5: One-way shear strength of concrete

use crate::units::{Centimeters, KgPerCuM, Meters};

/// Design strip width (cm)
pub const STRIP_WIDTH_CM: f64 = 100.0;

/// Whitney stress block intensity factor (0.85 f'c)
const STRESS_BLOCK_FACTOR: f64 = 0.85;

/// Concrete shear coefficient in ksc units (Vc = 0.53 √f'c · b · d)
const SHEAR_COEFFICIENT_KSC: f64 = 0.53;

/// Slab self-weight as an area load.
///
/// # Formula
/// w_sw = γc × h
///
/// # Arguments
/// * `unit_weight_kg_m3` - Concrete unit weight (kg/m³)
/// * `thickness_cm` - Slab thickness (cm)
///
/// # Returns
/// Self-weight in kg/m²
///
/// # Example
/// ```rust
/// use slab_core::equations::concrete::self_weight;
///
/// let w = self_weight(2400.0, 12.0);
/// assert!((w - 288.0).abs() < 1e-9);
/// ```
#[inline]
pub fn self_weight(unit_weight_kg_m3: f64, thickness_cm: f64) -> f64 {
    (KgPerCuM(unit_weight_kg_m3) * Meters::from(Centimeters(thickness_cm))).value()
}

/// Nominal resistance coefficient of a rectangular section.
///
/// # Formula
/// Rn = Mu / (φ · b · d²)
///
/// # Arguments
/// * `moment_kgcm` - Factored moment Mu (kg-cm)
/// * `phi` - Flexural strength reduction factor
/// * `width_cm` - Strip width b (cm)
/// * `depth_cm` - Effective depth d (cm)
///
/// # Returns
/// Rn in ksc
#[inline]
pub fn nominal_resistance_coefficient(moment_kgcm: f64, phi: f64, width_cm: f64, depth_cm: f64) -> f64 {
    moment_kgcm / (phi * width_cm * depth_cm.powi(2))
}

/// Required reinforcement ratio from the Whitney-block quadratic.
///
/// # Formula
/// ρ = (0.85 f'c / fy) · (1 − √(1 − 2Rn / (0.85 f'c)))
///
/// # Returns
/// `Some(ρ)`, or `None` when the radicand is negative, i.e. the concrete
/// compression zone cannot develop the moment at this depth.
///
/// # Example
/// ```rust
/// use slab_core::equations::concrete::required_steel_ratio;
///
/// let rho = required_steel_ratio(10.0, 240.0, 4000.0).unwrap();
/// assert!(rho > 0.0025 && rho < 0.0027);
///
/// // Rn beyond 0.85 f'c / 2 has no real solution
/// assert!(required_steel_ratio(150.0, 240.0, 4000.0).is_none());
/// ```
pub fn required_steel_ratio(rn_ksc: f64, fc_ksc: f64, fy_ksc: f64) -> Option<f64> {
    let block = STRESS_BLOCK_FACTOR * fc_ksc;
    let radicand = 1.0 - 2.0 * rn_ksc / block;
    if radicand < 0.0 {
        return None;
    }
    Some((block / fy_ksc) * (1.0 - radicand.sqrt()))
}

/// Centre-to-centre spacing of bars that supplies a given area per strip.
///
/// # Formula
/// s = Ab · b / As
///
/// # Arguments
/// * `bar_area_cm2` - Area of one bar (cm²)
/// * `width_cm` - Strip width b (cm)
/// * `required_area_cm2` - Required steel area per strip (cm²)
#[inline]
pub fn bar_spacing(bar_area_cm2: f64, width_cm: f64, required_area_cm2: f64) -> f64 {
    bar_area_cm2 * width_cm / required_area_cm2
}

/// Round a value down to a whole number of increments.
///
/// The result never exceeds `value`, even when floating-point division lands
/// a hair above an integer.
///
/// # Example
/// ```rust
/// use slab_core::equations::concrete::round_down_to_increment;
///
/// assert_eq!(round_down_to_increment(26.47, 0.5), 26.0);
/// assert_eq!(round_down_to_increment(29.5, 0.5), 29.5);
/// ```
pub fn round_down_to_increment(value: f64, increment: f64) -> f64 {
    let rounded = (value / increment).floor() * increment;
    if rounded > value {
        rounded - increment
    } else {
        rounded
    }
}

/// Design one-way shear strength of a concrete strip without stirrups.
///
/// # Formula
/// φVc = φ · 0.53 · √f'c · b · d
///
/// # Returns
/// φVc in kg
pub fn one_way_shear_capacity(phi: f64, fc_ksc: f64, width_cm: f64, depth_cm: f64) -> f64 {
    phi * SHEAR_COEFFICIENT_KSC * fc_ksc.sqrt() * width_cm * depth_cm
}

/// Minimum slab thickness from the panel perimeter.
///
/// # Formula
/// h_min = perimeter / divisor
///
/// This is the Method 2 rule of thumb for panels on stiff supports and stands
/// in for a deflection calculation.
///
/// # Example
/// ```rust
/// use slab_core::equations::concrete::minimum_thickness_from_perimeter;
///
/// // 4 m x 5 m panel: perimeter 1800 cm
/// assert_eq!(minimum_thickness_from_perimeter(1800.0, 180.0), 10.0);
/// ```
#[inline]
pub fn minimum_thickness_from_perimeter(perimeter_cm: f64, divisor: f64) -> f64 {
    perimeter_cm / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_resistance() {
        // Mu = 762.56 kg-m, d = 9.05 cm, φ = 0.9
        let rn = nominal_resistance_coefficient(76_256.0, 0.9, STRIP_WIDTH_CM, 9.05);
        assert!((rn - 10.345).abs() < 0.001);
    }

    #[test]
    fn test_required_ratio_zero_moment() {
        assert_eq!(required_steel_ratio(0.0, 240.0, 4000.0), Some(0.0));
    }

    #[test]
    fn test_required_ratio_boundary() {
        // radicand exactly zero is still solvable: ρ = 0.85 f'c / fy
        let rn = 0.85 * 240.0 / 2.0;
        let rho = required_steel_ratio(rn, 240.0, 4000.0).unwrap();
        assert!((rho - 0.051).abs() < 1e-12);
        assert!(required_steel_ratio(rn + 0.01, 240.0, 4000.0).is_none());
    }

    #[test]
    fn test_bar_spacing() {
        // RB9 for 2.16 cm² per metre
        let s = bar_spacing(0.636, STRIP_WIDTH_CM, 2.16);
        assert!((s - 29.444).abs() < 0.001);
    }

    #[test]
    fn test_round_down_never_up() {
        for raw in [0.1, 0.49, 0.5, 7.75, 26.4654, 29.999_999, 36.0, 44.51] {
            let rounded = round_down_to_increment(raw, 0.5);
            assert!(rounded <= raw);
            assert!(raw - rounded < 0.5);
        }
        assert!(round_down_to_increment(0.3, 0.1) <= 0.3);
    }

    #[test]
    fn test_shear_capacity() {
        // φ = 0.85, f'c = 240, d = 9.05 -> about 6316 kg
        let vc = one_way_shear_capacity(0.85, 240.0, STRIP_WIDTH_CM, 9.05);
        assert!((vc - 6316.1).abs() < 0.5);
    }

    #[test]
    fn test_self_weight() {
        assert!((self_weight(2400.0, 15.0) - 360.0).abs() < 1e-9);
    }
}
