//! # Two-Way Slab Design (ACI Method 2)
//!
//! Designs a rectangular slab panel supported on walls or stiff beams along
//! all four edges.
//!
//! ## Sequence
//!
//! 1. Validate inputs; normalise the geometry so the short span comes first
//! 2. Resolve moment coefficients for the edge case and m = S / L
//! 3. Factor the loads
//! 4. Compute the four design moments
//! 5. Design reinforcement for each moment (short-span steel in the outer
//!    layer, long-span steel in the inner layer)
//! 6. Check one-way shear and minimum thickness
//!
//! The run is atomic: any failure is returned as a single
//! [`CalcError::DesignFailed`] naming the stage (and moment location) and
//! carrying the original error; no partial result is produced.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::two_way_slab::{calculate, PanelGeometry, TwoWaySlabInput};
//! use slab_core::coefficients::EdgeCase;
//! use slab_core::loads::LoadInputs;
//! use slab_core::materials::{BarSize, MaterialProperties};
//! use slab_core::settings::DesignSettings;
//!
//! let input = TwoWaySlabInput {
//!     label: "S-1".to_string(),
//!     geometry: PanelGeometry::new(4.0, 5.0, 12.0, 2.5),
//!     edge_case: EdgeCase::AllContinuous,
//!     materials: MaterialProperties::new(240.0, 4000.0),
//!     loads: LoadInputs::new(150.0, 200.0),
//!     bar: BarSize::Rb9,
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).expect("Design should succeed");
//! assert!((result.factored_load.total - 953.2).abs() < 1e-9);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use super::capacity::{check_shear, check_thickness, ShearCheck, ThicknessCheck};
use super::moments::{compute_moments, MomentSet};
use super::reinforcement::{design, ReinforcementInput, ReinforcementResult};
use super::MomentCase;
use crate::coefficients::{CoefficientTable, EdgeCase, ResolvedCoefficients};
use crate::errors::{CalcError, CalcResult, DesignStage};
use crate::loads::{compute_factored_load, FactoredLoad, LoadInputs};
use crate::materials::{BarSize, MaterialProperties};
use crate::settings::DesignSettings;
use crate::units::{Centimeters, Meters};

/// Panel dimensions.
///
/// Spans are centre-to-centre of supports. If the spans are supplied the
/// wrong way round, [`calculate`] swaps them and records a warning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Short span S (m)
    pub short_span_m: f64,
    /// Long span L (m)
    pub long_span_m: f64,
    /// Overall slab thickness h (cm)
    pub thickness_cm: f64,
    /// Clear cover to the outer bar layer (cm)
    pub cover_cm: f64,
}

impl PanelGeometry {
    pub fn new(short_span_m: f64, long_span_m: f64, thickness_cm: f64, cover_cm: f64) -> Self {
        PanelGeometry {
            short_span_m,
            long_span_m,
            thickness_cm,
            cover_cm,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !(self.short_span_m.is_finite() && self.short_span_m > 0.0) {
            return Err(CalcError::invalid_input(
                "short_span_m",
                self.short_span_m.to_string(),
                "Span must be positive",
            ));
        }
        if !(self.long_span_m.is_finite() && self.long_span_m > 0.0) {
            return Err(CalcError::invalid_input(
                "long_span_m",
                self.long_span_m.to_string(),
                "Span must be positive",
            ));
        }
        if !(self.thickness_cm.is_finite() && self.thickness_cm > 0.0) {
            return Err(CalcError::invalid_input(
                "thickness_cm",
                self.thickness_cm.to_string(),
                "Slab thickness must be positive",
            ));
        }
        if !(self.cover_cm.is_finite() && self.cover_cm >= 0.0) {
            return Err(CalcError::invalid_input(
                "cover_cm",
                self.cover_cm.to_string(),
                "Cover cannot be negative",
            ));
        }
        if self.cover_cm >= self.thickness_cm {
            return Err(CalcError::invalid_input(
                "cover_cm",
                self.cover_cm.to_string(),
                format!("Cover must be less than the slab thickness ({} cm)", self.thickness_cm),
            ));
        }
        Ok(())
    }

    /// Geometry with the shorter span first, and whether a swap was needed
    pub fn normalized(&self) -> (PanelGeometry, bool) {
        if self.short_span_m > self.long_span_m {
            (
                PanelGeometry {
                    short_span_m: self.long_span_m,
                    long_span_m: self.short_span_m,
                    ..*self
                },
                true,
            )
        } else {
            (*self, false)
        }
    }

    /// m = S / L
    pub fn aspect_ratio(&self) -> f64 {
        self.short_span_m / self.long_span_m
    }

    pub fn perimeter_cm(&self) -> f64 {
        Centimeters::from(Meters(2.0 * (self.short_span_m + self.long_span_m))).value()
    }

    /// Effective depths of the two bar layers for the given bar.
    ///
    /// Short-span bars sit in the outer layer: d = h − cover − db/2.
    /// Long-span bars sit on top of them: d = d_short − db.
    pub fn effective_depths(&self, bar: BarSize) -> CalcResult<EffectiveDepths> {
        let db = bar.spec().diameter_cm();
        let short_cm = self.thickness_cm - self.cover_cm - db / 2.0;
        let long_cm = short_cm - db;
        if long_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "thickness_cm",
                self.thickness_cm.to_string(),
                format!("No effective depth left for two layers of {} under {} cm cover", bar, self.cover_cm),
            ));
        }
        Ok(EffectiveDepths { short_cm, long_cm })
    }
}

/// Effective depth of each reinforcement layer (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveDepths {
    /// Short-span (outer) layer
    pub short_cm: f64,
    /// Long-span (inner) layer
    pub long_cm: f64,
}

impl EffectiveDepths {
    pub fn for_case(&self, case: MomentCase) -> f64 {
        if case.is_short_span() {
            self.short_cm
        } else {
            self.long_cm
        }
    }
}

/// Input parameters for a two-way slab panel.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "geometry": { "short_span_m": 4.0, "long_span_m": 5.0, "thickness_cm": 12.0, "cover_cm": 2.5 },
///   "edge_case": 1,
///   "materials": { "fc_ksc": 240.0, "fy_ksc": 4000.0 },
///   "loads": { "superimposed_dead_kg_m2": 150.0, "live_kg_m2": 200.0 },
///   "bar": "RB9"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoWaySlabInput {
    /// User label for this panel (e.g., "S-1", "Corner bay")
    pub label: String,
    pub geometry: PanelGeometry,
    pub edge_case: EdgeCase,
    pub materials: MaterialProperties,
    pub loads: LoadInputs,
    /// Bar used for all four moment locations
    pub bar: BarSize,
}

impl TwoWaySlabInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        self.materials.validate()?;
        self.loads.validate()
    }
}

/// Non-fatal conditions recorded during a design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignWarning {
    /// The aspect ratio was outside the coefficient table and was clamped
    RatioClamped { requested: f64, used: f64 },
    /// The spans were supplied long-first and have been swapped
    SpansSwapped { supplied_short_m: f64, supplied_long_m: f64 },
}

impl DesignWarning {
    pub fn message(&self) -> String {
        match self {
            DesignWarning::RatioClamped { requested, used } => format!(
                "Aspect ratio m = {:.3} is outside the coefficient table; m = {:.2} was used",
                requested, used
            ),
            DesignWarning::SpansSwapped {
                supplied_short_m,
                supplied_long_m,
            } => format!(
                "Spans supplied as {:.2} m x {:.2} m were swapped so the short span comes first",
                supplied_short_m, supplied_long_m
            ),
        }
    }
}

impl std::fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Reinforcement for the four moment locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementSet {
    pub short_negative: ReinforcementResult,
    pub short_positive: ReinforcementResult,
    pub long_negative: ReinforcementResult,
    pub long_positive: ReinforcementResult,
}

impl ReinforcementSet {
    pub fn get(&self, case: MomentCase) -> &ReinforcementResult {
        match case {
            MomentCase::ShortNegative => &self.short_negative,
            MomentCase::ShortPositive => &self.short_positive,
            MomentCase::LongNegative => &self.long_negative,
            MomentCase::LongPositive => &self.long_positive,
        }
    }

    /// Results in design order
    pub fn iter(&self) -> impl Iterator<Item = (MomentCase, &ReinforcementResult)> {
        MomentCase::ALL.into_iter().map(move |case| (case, self.get(case)))
    }
}

/// Results of a two-way slab design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoWaySlabResult {
    pub label: String,

    // === Inputs as used ===
    /// Geometry after normalisation (short span first)
    pub geometry: PanelGeometry,
    /// True when the supplied spans were swapped
    pub spans_swapped: bool,
    pub edge_case: EdgeCase,
    pub materials: MaterialProperties,
    pub loads: LoadInputs,
    pub bar: BarSize,

    // === Analysis ===
    /// Coefficient lookup, including the ratio actually used
    pub coefficients: ResolvedCoefficients,
    pub factored_load: FactoredLoad,
    pub effective_depths: EffectiveDepths,
    /// Design moments (kg-m per metre width)
    pub moments: MomentSet,

    // === Design ===
    pub reinforcement: ReinforcementSet,
    pub shear: ShearCheck,
    pub thickness: ThicknessCheck,

    pub warnings: Vec<DesignWarning>,
}

impl TwoWaySlabResult {
    /// True when both capacity checks pass
    pub fn passes(&self) -> bool {
        self.shear.passes && self.thickness.passes
    }
}

fn failed_at(stage: DesignStage) -> impl FnOnce(CalcError) -> CalcError {
    move |source| CalcError::design_failed(stage, None, source)
}

/// Design a two-way slab panel.
///
/// # Errors
///
/// Always a [`CalcError::DesignFailed`] whose `source` is the error raised
/// by the failing stage, unmodified.
pub fn calculate(input: &TwoWaySlabInput, settings: &DesignSettings) -> CalcResult<TwoWaySlabResult> {
    settings.validate().map_err(failed_at(DesignStage::Validation))?;
    input.validate().map_err(failed_at(DesignStage::Validation))?;

    let mut warnings = Vec::new();

    let (geometry, spans_swapped) = input.geometry.normalized();
    if spans_swapped {
        warnings.push(DesignWarning::SpansSwapped {
            supplied_short_m: input.geometry.short_span_m,
            supplied_long_m: input.geometry.long_span_m,
        });
    }
    let effective_depths = geometry
        .effective_depths(input.bar)
        .map_err(failed_at(DesignStage::Validation))?;

    let coefficients = CoefficientTable::builtin()
        .and_then(|table| table.resolve(input.edge_case, geometry.aspect_ratio()))
        .map_err(failed_at(DesignStage::Coefficients))?;
    if coefficients.clamped {
        warnings.push(DesignWarning::RatioClamped {
            requested: coefficients.requested_ratio,
            used: coefficients.ratio_used,
        });
    }

    let factored_load = compute_factored_load(geometry.thickness_cm, &input.loads, settings)
        .map_err(failed_at(DesignStage::Loads))?;

    let moments = compute_moments(&coefficients.coefficients, &factored_load, geometry.short_span_m)
        .map_err(failed_at(DesignStage::Moments))?;

    let design_case = |case: MomentCase| {
        let strip = ReinforcementInput {
            moment_kgm: moments.get(case),
            effective_depth_cm: effective_depths.for_case(case),
            thickness_cm: geometry.thickness_cm,
            materials: input.materials,
            bar: input.bar,
        };
        design(&strip, settings)
            .map_err(|source| CalcError::design_failed(DesignStage::Reinforcement, Some(case), source))
    };
    let reinforcement = ReinforcementSet {
        short_negative: design_case(MomentCase::ShortNegative)?,
        short_positive: design_case(MomentCase::ShortPositive)?,
        long_negative: design_case(MomentCase::LongNegative)?,
        long_positive: design_case(MomentCase::LongPositive)?,
    };

    let shear = check_shear(
        factored_load.total,
        geometry.short_span_m,
        input.materials.fc_ksc,
        effective_depths.short_cm,
        settings,
    )
    .map_err(failed_at(DesignStage::Capacity))?;
    let thickness = check_thickness(geometry.perimeter_cm(), geometry.thickness_cm, settings)
        .map_err(failed_at(DesignStage::Capacity))?;

    Ok(TwoWaySlabResult {
        label: input.label.clone(),
        geometry,
        spans_swapped,
        edge_case: input.edge_case,
        materials: input.materials,
        loads: input.loads,
        bar: input.bar,
        coefficients,
        factored_load,
        effective_depths,
        moments,
        reinforcement,
        shear,
        thickness,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::reinforcement::GoverningReason;

    fn worked_example() -> TwoWaySlabInput {
        TwoWaySlabInput {
            label: "S-1".to_string(),
            geometry: PanelGeometry::new(4.0, 5.0, 12.0, 2.5),
            edge_case: EdgeCase::AllContinuous,
            materials: MaterialProperties::new(240.0, 4000.0),
            loads: LoadInputs::new(150.0, 200.0),
            bar: BarSize::Rb9,
        }
    }

    #[test]
    fn test_worked_example() {
        let result = calculate(&worked_example(), &DesignSettings::default()).unwrap();

        assert!((result.factored_load.self_weight - 288.0).abs() < 1e-9);
        assert!((result.factored_load.total_dead - 438.0).abs() < 1e-9);
        assert!((result.factored_load.total - 953.2).abs() < 1e-9);

        assert!(!result.coefficients.interpolated);
        assert!((result.effective_depths.short_cm - 9.05).abs() < 1e-9);
        assert!((result.effective_depths.long_cm - 8.15).abs() < 1e-9);

        assert!((result.moments.short_negative - 762.56).abs() < 1e-6);
        assert!((result.moments.short_positive - 486.8736).abs() < 1e-6);
        assert!((result.moments.long_negative - 503.2896).abs() < 1e-6);
        assert!((result.moments.long_positive - 257.0368).abs() < 1e-6);

        let short_neg = result.reinforcement.short_negative;
        assert_eq!(short_neg.governing, GoverningReason::Flexure);
        assert!((short_neg.required_area_cm2 - 2.4031).abs() < 0.001);
        assert_eq!(short_neg.spacing_cm, 26.0);

        for case in [MomentCase::ShortPositive, MomentCase::LongNegative, MomentCase::LongPositive] {
            let r = result.reinforcement.get(case);
            assert_eq!(r.governing, GoverningReason::MinimumSteel);
            assert!((r.required_area_cm2 - 2.16).abs() < 1e-9);
            assert_eq!(r.spacing_cm, 29.0);
        }
        for (_, r) in result.reinforcement.iter() {
            assert!(r.spacing_cm <= 36.0);
        }

        assert!((result.shear.demand_kg - 1906.4).abs() < 1e-9);
        assert!(result.shear.passes);
        assert_eq!(result.thickness.minimum_required_cm, 10.0);
        assert!(result.thickness.passes);

        assert!(result.warnings.is_empty());
        assert!(!result.spans_swapped);
    }

    #[test]
    fn test_swapped_spans_are_corrected() {
        let mut input = worked_example();
        input.geometry = PanelGeometry::new(5.0, 4.0, 12.0, 2.5);

        let swapped = calculate(&input, &DesignSettings::default()).unwrap();
        let reference = calculate(&worked_example(), &DesignSettings::default()).unwrap();

        assert!(swapped.spans_swapped);
        assert_eq!(swapped.geometry.short_span_m, 4.0);
        assert_eq!(swapped.moments, reference.moments);
        assert_eq!(swapped.reinforcement, reference.reinforcement);
        assert_eq!(
            swapped.warnings,
            vec![DesignWarning::SpansSwapped {
                supplied_short_m: 5.0,
                supplied_long_m: 4.0
            }]
        );
    }

    #[test]
    fn test_narrow_panel_warns_about_clamping() {
        let mut input = worked_example();
        input.geometry = PanelGeometry::new(2.0, 5.0, 12.0, 2.5);

        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert!(result.coefficients.clamped);
        assert_eq!(result.coefficients.ratio_used, 0.5);
        assert!(matches!(
            result.warnings.as_slice(),
            [DesignWarning::RatioClamped { used, .. }] if *used == 0.5
        ));
    }

    #[test]
    fn test_interpolated_case() {
        let mut input = worked_example();
        input.edge_case = EdgeCase::AdjacentEdgesDiscontinuous;
        input.geometry = PanelGeometry::new(4.2, 5.0, 12.0, 2.5);

        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert!(result.coefficients.interpolated);
        assert_eq!(result.coefficients.bracket, (0.8, 0.9));
    }

    #[test]
    fn test_section_inadequate_is_wrapped() {
        let mut input = worked_example();
        input.geometry = PanelGeometry::new(6.0, 6.0, 8.0, 2.5);
        input.loads = LoadInputs::new(150.0, 3000.0);

        let err = calculate(&input, &DesignSettings::default()).unwrap_err();
        match &err {
            CalcError::DesignFailed { stage, moment_case, .. } => {
                assert_eq!(*stage, DesignStage::Reinforcement);
                assert_eq!(*moment_case, Some(MomentCase::ShortNegative));
            }
            other => panic!("Expected DesignFailed, got {:?}", other),
        }
        assert!(err.is_design_failure());
        assert!(matches!(err.root_cause(), CalcError::SectionInadequate { .. }));
    }

    #[test]
    fn test_configuration_error_passes_through_unmodified() {
        let mut input = worked_example();
        input.geometry.cover_cm = 12.0;

        let err = calculate(&input, &DesignSettings::default()).unwrap_err();
        let expected = input.geometry.validate().unwrap_err();
        assert_eq!(err.root_cause(), &expected);
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_no_room_for_two_layers() {
        let mut input = worked_example();
        input.geometry = PanelGeometry::new(4.0, 5.0, 4.5, 2.5);
        input.bar = BarSize::Db16;

        let err = calculate(&input, &DesignSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::DesignFailed {
                stage: DesignStage::Validation,
                ..
            }
        ));
    }

    #[test]
    fn test_input_json_roundtrip() {
        let json = r#"{
            "label": "S-1",
            "geometry": { "short_span_m": 4.0, "long_span_m": 5.0, "thickness_cm": 12.0, "cover_cm": 2.5 },
            "edge_case": 1,
            "materials": { "fc_ksc": 240.0, "fy_ksc": 4000.0 },
            "loads": { "superimposed_dead_kg_m2": 150.0, "live_kg_m2": 200.0 },
            "bar": "RB9"
        }"#;
        let input: TwoWaySlabInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, worked_example());

        let result = calculate(&input, &DesignSettings::default()).unwrap();
        let out = serde_json::to_string(&result).unwrap();
        let parsed: TwoWaySlabResult = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.label, result.label);
        assert_eq!(parsed.edge_case, result.edge_case);
        assert_eq!(parsed.reinforcement.short_negative.spacing_cm, 26.0);
        assert!((parsed.moments.short_negative - result.moments.short_negative).abs() < 1e-9);
    }

    #[test]
    fn test_panels_designed_in_parallel() {
        let handles: Vec<_> = EdgeCase::ALL
            .into_iter()
            .map(|edge_case| {
                std::thread::spawn(move || {
                    let input = TwoWaySlabInput {
                        edge_case,
                        ..worked_example()
                    };
                    calculate(&input, &DesignSettings::default())
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap().unwrap();
            assert_eq!(result.label, "S-1");
        }
    }
}
