//! # Flexural Reinforcement
//!
//! Required steel area and bar spacing for one design moment on a 100 cm
//! strip.
//!
//! ## Procedure
//!
//! 1. A negligible moment (|M| ≤ ε) gets minimum steel directly. Sign noise
//!    just below zero counts as negligible.
//! 2. Rn = Mu / (φ·b·d²)
//! 3. ρ = (0.85 f'c / fy)(1 − √(1 − 2Rn / 0.85 f'c)); no real root means the
//!    section is inadequate.
//! 4. As = max(ρ·b·d, ρmin·b·h)
//! 5. s = Ab·b / As, capped at min(3h, 45 cm) and rounded down to 0.5 cm.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::reinforcement::{design, GoverningReason, ReinforcementInput};
//! use slab_core::materials::{BarSize, MaterialProperties};
//! use slab_core::settings::DesignSettings;
//!
//! let input = ReinforcementInput {
//!     moment_kgm: 762.56,
//!     effective_depth_cm: 9.05,
//!     thickness_cm: 12.0,
//!     materials: MaterialProperties::new(240.0, 4000.0),
//!     bar: BarSize::Rb9,
//! };
//! let result = design(&input, &DesignSettings::default()).unwrap();
//!
//! assert_eq!(result.governing, GoverningReason::Flexure);
//! assert_eq!(result.spacing_cm, 26.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    bar_spacing, nominal_resistance_coefficient, required_steel_ratio, round_down_to_increment,
    STRIP_WIDTH_CM,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarSize, MaterialProperties};
use crate::settings::DesignSettings;
use crate::units::{KgCm, KgM};

/// What set the required steel area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoverningReason {
    /// Strength demand exceeds the minimum
    Flexure,
    /// Shrinkage and temperature minimum governs
    MinimumSteel,
}

impl GoverningReason {
    pub fn display_name(&self) -> &'static str {
        match self {
            GoverningReason::Flexure => "Flexure",
            GoverningReason::MinimumSteel => "Minimum steel",
        }
    }
}

impl std::fmt::Display for GoverningReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What set the bar spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingControl {
    /// Spacing needed to supply the required area
    Demand,
    /// Capped at a multiple of the slab thickness
    ThicknessLimit,
    /// Capped at the absolute maximum spacing
    AbsoluteLimit,
}

impl SpacingControl {
    pub fn display_name(&self) -> &'static str {
        match self {
            SpacingControl::Demand => "Required area",
            SpacingControl::ThicknessLimit => "3h limit",
            SpacingControl::AbsoluteLimit => "Maximum spacing",
        }
    }
}

/// Section and moment for one reinforcement design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementInput {
    /// Factored moment per metre width (kg-m), non-negative up to the
    /// negligible-moment tolerance
    pub moment_kgm: f64,
    /// Effective depth of this layer (cm)
    pub effective_depth_cm: f64,
    /// Overall slab thickness (cm)
    pub thickness_cm: f64,
    pub materials: MaterialProperties,
    pub bar: BarSize,
}

impl ReinforcementInput {
    /// `negligible_moment_kgm` is the tolerance below zero still accepted as
    /// a zero moment.
    pub fn validate(&self, negligible_moment_kgm: f64) -> CalcResult<()> {
        if !(self.moment_kgm.is_finite() && self.moment_kgm >= -negligible_moment_kgm) {
            return Err(CalcError::invalid_input(
                "moment_kgm",
                self.moment_kgm.to_string(),
                "Design moment must be a non-negative magnitude",
            ));
        }
        if !(self.thickness_cm.is_finite() && self.thickness_cm > 0.0) {
            return Err(CalcError::invalid_input(
                "thickness_cm",
                self.thickness_cm.to_string(),
                "Slab thickness must be positive",
            ));
        }
        if !(self.effective_depth_cm.is_finite() && self.effective_depth_cm > 0.0) {
            return Err(CalcError::invalid_input(
                "effective_depth_cm",
                self.effective_depth_cm.to_string(),
                "Effective depth must be positive",
            ));
        }
        if self.effective_depth_cm > self.thickness_cm {
            return Err(CalcError::invalid_input(
                "effective_depth_cm",
                self.effective_depth_cm.to_string(),
                "Effective depth cannot exceed the slab thickness",
            ));
        }
        self.materials.validate()
    }
}

/// Steel for one moment location, per metre width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementResult {
    /// Design moment (kg-m)
    pub moment_kgm: f64,
    /// Effective depth used (cm)
    pub effective_depth_cm: f64,
    /// Nominal resistance coefficient Rn (ksc); `None` for a negligible moment
    pub rn_ksc: Option<f64>,
    /// Strength-required steel ratio ρ; `None` for a negligible moment
    pub rho_required: Option<f64>,
    /// ρmin·b·h (cm²)
    pub min_area_cm2: f64,
    /// Governing required area As (cm²)
    pub required_area_cm2: f64,
    pub governing: GoverningReason,
    pub bar: BarSize,
    /// Ab·b / As before any cap or rounding (cm)
    pub raw_spacing_cm: f64,
    /// Selected centre-to-centre spacing (cm)
    pub spacing_cm: f64,
    pub spacing_control: SpacingControl,
    /// Area supplied by the selected bar at the selected spacing (cm²)
    pub provided_area_cm2: f64,
}

impl ReinforcementResult {
    /// Callout such as "RB9 @ 26.0 cm"
    pub fn callout(&self) -> String {
        format!("{} @ {:.1} cm", self.bar.name(), self.spacing_cm)
    }
}

/// Design the reinforcement for one moment.
///
/// # Errors
/// - `InvalidInput` for a malformed section or materials
/// - `SectionInadequate` when the concrete block cannot develop the moment,
///   or when the bar cannot supply the area at the smallest spacing increment
pub fn design(input: &ReinforcementInput, settings: &DesignSettings) -> CalcResult<ReinforcementResult> {
    input.validate(settings.negligible_moment_kgm)?;

    let b = STRIP_WIDTH_CM;
    let h = input.thickness_cm;
    let d = input.effective_depth_cm;
    let fc = input.materials.fc_ksc;
    let fy = input.materials.fy_ksc;

    let min_area_cm2 = input.materials.minimum_steel_ratio() * b * h;

    let (rn_ksc, rho_required, required_area_cm2, governing) = if input.moment_kgm.abs() <= settings.negligible_moment_kgm {
        (None, None, min_area_cm2, GoverningReason::MinimumSteel)
    } else {
        let mu = KgCm::from(KgM(input.moment_kgm));
        let phi = settings.load_factors.phi_flexure();
        let rn = nominal_resistance_coefficient(mu.value(), phi, b, d);
        let rho = required_steel_ratio(rn, fc, fy).ok_or_else(|| {
            CalcError::section_inadequate(
                input.moment_kgm,
                d,
                format!(
                    "Rn = {:.2} ksc exceeds the compression block limit 0.425 f'c = {:.2} ksc",
                    rn,
                    0.425 * fc
                ),
            )
        })?;
        let flexural_area = rho * b * d;
        if flexural_area > min_area_cm2 {
            (Some(rn), Some(rho), flexural_area, GoverningReason::Flexure)
        } else {
            (Some(rn), Some(rho), min_area_cm2, GoverningReason::MinimumSteel)
        }
    };

    let bar = input.bar.spec();
    let raw_spacing_cm = bar_spacing(bar.area_cm2, b, required_area_cm2);

    let thickness_limit = settings.spacing_thickness_multiple * h;
    let limit = settings.spacing_limit_cm(h);
    let spacing_control = if raw_spacing_cm <= limit {
        SpacingControl::Demand
    } else if thickness_limit <= settings.max_spacing_cm {
        SpacingControl::ThicknessLimit
    } else {
        SpacingControl::AbsoluteLimit
    };

    let spacing_cm = round_down_to_increment(raw_spacing_cm.min(limit), settings.spacing_increment_cm);
    if spacing_cm <= 0.0 {
        return Err(CalcError::section_inadequate(
            input.moment_kgm,
            d,
            format!(
                "{} cannot supply {:.2} cm² per metre at a practical spacing",
                bar.name, required_area_cm2
            ),
        ));
    }

    Ok(ReinforcementResult {
        moment_kgm: input.moment_kgm.max(0.0),
        effective_depth_cm: d,
        rn_ksc,
        rho_required,
        min_area_cm2,
        required_area_cm2,
        governing,
        bar: input.bar,
        raw_spacing_cm,
        spacing_cm,
        spacing_control,
        provided_area_cm2: bar.area_cm2 * b / spacing_cm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strip(moment_kgm: f64, effective_depth_cm: f64) -> ReinforcementInput {
        ReinforcementInput {
            moment_kgm,
            effective_depth_cm,
            thickness_cm: 12.0,
            materials: MaterialProperties::new(240.0, 4000.0),
            bar: BarSize::Rb9,
        }
    }

    #[test]
    fn test_flexure_governs() {
        let result = design(&strip(762.56, 9.05), &DesignSettings::default()).unwrap();

        assert_eq!(result.governing, GoverningReason::Flexure);
        assert!((result.rn_ksc.unwrap() - 10.345).abs() < 0.001);
        assert!((result.rho_required.unwrap() - 0.0026554).abs() < 1e-6);
        assert!((result.required_area_cm2 - 2.4031).abs() < 0.001);
        assert!((result.raw_spacing_cm - 26.465).abs() < 0.01);
        assert_eq!(result.spacing_cm, 26.0);
        assert_eq!(result.spacing_control, SpacingControl::Demand);
        assert!(result.provided_area_cm2 >= result.required_area_cm2);
        assert_eq!(result.callout(), "RB9 @ 26.0 cm");
    }

    #[test]
    fn test_minimum_steel_governs() {
        let result = design(&strip(486.87, 9.05), &DesignSettings::default()).unwrap();

        assert_eq!(result.governing, GoverningReason::MinimumSteel);
        assert!((result.required_area_cm2 - 2.16).abs() < 1e-9);
        assert!(result.rho_required.unwrap() < 0.0018 * 12.0 / 9.05);
        assert_eq!(result.spacing_cm, 29.0);
    }

    #[test]
    fn test_zero_moment_gives_exact_minimum() {
        let result = design(&strip(0.0, 9.05), &DesignSettings::default()).unwrap();

        assert_eq!(result.governing, GoverningReason::MinimumSteel);
        assert_eq!(result.required_area_cm2, 0.0018 * 100.0 * 12.0);
        assert_eq!(result.rn_ksc, None);
        assert_eq!(result.rho_required, None);
    }

    #[test]
    fn test_moment_at_threshold_is_negligible() {
        let settings = DesignSettings::default();
        let at = design(&strip(settings.negligible_moment_kgm, 9.05), &settings).unwrap();
        let zero = design(&strip(0.0, 9.05), &settings).unwrap();

        assert_eq!(at.governing, GoverningReason::MinimumSteel);
        assert_eq!(at.rn_ksc, None);
        assert_eq!(at.rho_required, None);
        assert_eq!(at.required_area_cm2, zero.required_area_cm2);
        assert_eq!(at.spacing_cm, zero.spacing_cm);
    }

    #[test]
    fn test_negative_sign_noise_is_negligible() {
        let settings = DesignSettings::default();
        let noisy = design(&strip(-1e-12, 9.05), &settings).unwrap();
        let zero = design(&strip(0.0, 9.05), &settings).unwrap();

        assert_eq!(noisy.governing, GoverningReason::MinimumSteel);
        assert_eq!(noisy.rn_ksc, None);
        assert_eq!(noisy.moment_kgm, 0.0);
        assert_eq!(noisy.required_area_cm2, zero.required_area_cm2);
        assert_eq!(noisy.spacing_cm, zero.spacing_cm);

        let at_negative_threshold = design(&strip(-settings.negligible_moment_kgm, 9.05), &settings).unwrap();
        assert_eq!(at_negative_threshold.rn_ksc, None);
    }

    #[test]
    fn test_moment_just_above_threshold_takes_flexure_path() {
        let settings = DesignSettings::default();
        let result = design(&strip(2.0 * settings.negligible_moment_kgm, 9.05), &settings).unwrap();

        assert!(result.rn_ksc.unwrap() > 0.0);
        assert!(result.rho_required.unwrap() > 0.0);
        assert_eq!(result.governing, GoverningReason::MinimumSteel);
        assert_eq!(result.required_area_cm2, result.min_area_cm2);
    }

    #[test]
    fn test_minimum_ratio_for_low_grade_steel() {
        let input = ReinforcementInput {
            materials: MaterialProperties::new(240.0, 2400.0),
            ..strip(0.0, 9.05)
        };
        let result = design(&input, &DesignSettings::default()).unwrap();
        assert!((result.required_area_cm2 - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_thickness_limit_caps_spacing() {
        // DB16 at minimum steel would be 2.011·100/2.16 = 93 cm
        let input = ReinforcementInput {
            bar: BarSize::Db16,
            ..strip(100.0, 8.7)
        };
        let result = design(&input, &DesignSettings::default()).unwrap();
        assert_eq!(result.spacing_cm, 36.0);
        assert_eq!(result.spacing_control, SpacingControl::ThicknessLimit);
    }

    #[test]
    fn test_absolute_limit_caps_spacing() {
        let input = ReinforcementInput {
            thickness_cm: 20.0,
            bar: BarSize::Db16,
            ..strip(0.0, 16.7)
        };
        let result = design(&input, &DesignSettings::default()).unwrap();
        assert_eq!(result.spacing_cm, 45.0);
        assert_eq!(result.spacing_control, SpacingControl::AbsoluteLimit);
    }

    #[test]
    fn test_section_inadequate() {
        let err = design(&strip(5000.0, 4.0), &DesignSettings::default()).unwrap_err();
        assert!(err.is_design_failure());
        assert_eq!(err.error_code(), "SECTION_INADEQUATE");
    }

    #[test]
    fn test_invalid_section() {
        let settings = DesignSettings::default();
        assert!(design(&strip(-1.0, 9.05), &settings).is_err());
        assert!(design(&strip(-2e-6, 9.05), &settings).is_err());
        assert!(design(&strip(f64::NAN, 9.05), &settings).is_err());
        assert!(design(&strip(100.0, 0.0), &settings).is_err());
        assert!(design(&strip(100.0, 13.0), &settings).is_err());
    }

    proptest! {
        #[test]
        fn prop_spacing_rounded_down_and_capped(
            moment in 0.0f64..1500.0,
            thickness in 10.0f64..25.0,
            bar_index in 0usize..5,
        ) {
            let bar = BarSize::ALL[bar_index];
            let depth = thickness - 2.5 - bar.spec().diameter_cm() / 2.0;
            let input = ReinforcementInput {
                moment_kgm: moment,
                effective_depth_cm: depth,
                thickness_cm: thickness,
                materials: MaterialProperties::new(240.0, 4000.0),
                bar,
            };
            let settings = DesignSettings::default();
            let result = design(&input, &settings).unwrap();

            prop_assert!(result.spacing_cm <= result.raw_spacing_cm);
            prop_assert!(result.spacing_cm <= (3.0 * thickness).min(45.0));
            prop_assert!(result.required_area_cm2 >= result.min_area_cm2);
            let steps = result.spacing_cm / 0.5;
            prop_assert!((steps - steps.round()).abs() < 1e-9);
        }
    }
}
