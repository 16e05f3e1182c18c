//! # Design Moments
//!
//! Method 2 moments per metre width of slab. Every moment uses the square of
//! the **short** span, including the long-direction moments; the long-span
//! coefficients already account for the longer direction.
//!
//! ## Formulas
//!
//! - M_a,neg = Ca,neg · wu · S²
//! - M_a,pos = (Ca,dl · wD + Ca,ll · wL) · S²
//! - M_b,neg = Cb,neg · wu · S²
//! - M_b,pos = (Cb,dl · wD + Cb,ll · wL) · S²

use serde::{Deserialize, Serialize};

use super::MomentCase;
use crate::coefficients::CoefficientSet;
use crate::errors::{CalcError, CalcResult};
use crate::loads::FactoredLoad;

/// Design moments in kg-m per metre width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentSet {
    pub short_negative: f64,
    pub short_positive: f64,
    pub long_negative: f64,
    pub long_positive: f64,
}

impl MomentSet {
    /// Moment at one location
    pub fn get(&self, case: MomentCase) -> f64 {
        match case {
            MomentCase::ShortNegative => self.short_negative,
            MomentCase::ShortPositive => self.short_positive,
            MomentCase::LongNegative => self.long_negative,
            MomentCase::LongPositive => self.long_positive,
        }
    }
}

/// Compute the four design moments.
///
/// A zero coefficient gives a zero moment; that is a valid result and is
/// handled downstream by minimum steel.
///
/// # Example
/// ```rust
/// use slab_core::calculations::moments::compute_moments;
/// use slab_core::coefficients::{resolve, EdgeCase};
/// use slab_core::loads::{compute_factored_load, LoadInputs};
/// use slab_core::settings::DesignSettings;
///
/// let coeffs = resolve(EdgeCase::AllContinuous, 0.8).unwrap().coefficients;
/// let load = compute_factored_load(12.0, &LoadInputs::new(150.0, 200.0), &DesignSettings::default()).unwrap();
/// let moments = compute_moments(&coeffs, &load, 4.0).unwrap();
///
/// assert!((moments.short_negative - 762.56).abs() < 0.01);
/// ```
pub fn compute_moments(
    coefficients: &CoefficientSet,
    load: &FactoredLoad,
    short_span_m: f64,
) -> CalcResult<MomentSet> {
    if !(short_span_m.is_finite() && short_span_m > 0.0) {
        return Err(CalcError::invalid_input(
            "short_span_m",
            short_span_m.to_string(),
            "Span must be positive",
        ));
    }

    let s2 = short_span_m.powi(2);
    let positive = |dl: f64, ll: f64| (dl * load.dead + ll * load.live) * s2;

    Ok(MomentSet {
        short_negative: coefficients.ca_neg * load.total * s2,
        short_positive: positive(coefficients.ca_dl, coefficients.ca_ll),
        long_negative: coefficients.cb_neg * load.total * s2,
        long_positive: positive(coefficients.cb_dl, coefficients.cb_ll),
    })
}
