//! # Slab Calculations
//!
//! Calculation stages of a two-way slab design. The full design follows the
//! crate-wide pattern:
//!
//! - [`TwoWaySlabInput`] - Input parameters (JSON-serializable)
//! - [`TwoWaySlabResult`] - Calculation results (JSON-serializable)
//! - [`two_way_slab::calculate`] - Pure calculation function
//!
//! The stages it sequences are public on their own:
//!
//! - [`moments`] - Design moments from coefficients and factored loads
//! - [`reinforcement`] - Required steel and bar spacing for one moment
//! - [`capacity`] - One-way shear and minimum thickness checks
//! - [`two_way_slab`] - The orchestrator

pub mod capacity;
pub mod moments;
pub mod reinforcement;
pub mod two_way_slab;

use serde::{Deserialize, Serialize};

pub use capacity::{check_shear, check_thickness, ShearCheck, ThicknessCheck};
pub use moments::{compute_moments, MomentSet};
pub use reinforcement::{GoverningReason, ReinforcementInput, ReinforcementResult, SpacingControl};
pub use two_way_slab::{
    calculate, DesignWarning, EffectiveDepths, PanelGeometry, ReinforcementSet, TwoWaySlabInput,
    TwoWaySlabResult,
};

/// The four design moment locations of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MomentCase {
    /// Short direction, at the supports (top steel)
    ShortNegative,
    /// Short direction, at midspan (bottom steel)
    ShortPositive,
    /// Long direction, at the supports (top steel)
    LongNegative,
    /// Long direction, at midspan (bottom steel)
    LongPositive,
}

impl MomentCase {
    /// All cases in design order
    pub const ALL: [MomentCase; 4] = [
        MomentCase::ShortNegative,
        MomentCase::ShortPositive,
        MomentCase::LongNegative,
        MomentCase::LongPositive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MomentCase::ShortNegative => "Short span, negative (support)",
            MomentCase::ShortPositive => "Short span, positive (midspan)",
            MomentCase::LongNegative => "Long span, negative (support)",
            MomentCase::LongPositive => "Long span, positive (midspan)",
        }
    }

    /// True for moments in the short-span direction
    pub fn is_short_span(&self) -> bool {
        matches!(self, MomentCase::ShortNegative | MomentCase::ShortPositive)
    }

    /// True for support (hogging) moments
    pub fn is_negative(&self) -> bool {
        matches!(self, MomentCase::ShortNegative | MomentCase::LongNegative)
    }

    /// Face of the slab the tension steel sits on
    pub fn placement(&self) -> &'static str {
        if self.is_negative() {
            "Top"
        } else {
            "Bottom"
        }
    }
}

impl std::fmt::Display for MomentCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_case_classification() {
        assert!(MomentCase::ShortNegative.is_short_span());
        assert!(MomentCase::ShortNegative.is_negative());
        assert!(!MomentCase::LongPositive.is_short_span());
        assert_eq!(MomentCase::LongPositive.placement(), "Bottom");
        assert_eq!(MomentCase::LongNegative.placement(), "Top");
    }

    #[test]
    fn test_moment_case_labels_unique() {
        let labels: std::collections::HashSet<_> = MomentCase::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 4);
    }
}
