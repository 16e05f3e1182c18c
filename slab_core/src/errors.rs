//! # Error Types
//!
//! Structured error types for slab_core. These errors are designed to be
//! informative for both humans and programs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Errors fall into two families:
//!
//! - **Configuration errors** - malformed inputs (unknown edge case, unknown
//!   bar, non-positive geometry or material values, invalid coefficient data)
//! - **Design failures** - the inputs are fine but the section cannot carry
//!   the moment ([`CalcError::SectionInadequate`])
//!
//! The design orchestrator wraps either family in
//! [`CalcError::DesignFailed`], which records the stage and moment case that
//! failed while keeping the original error intact as `source`.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "short_span_m".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).unwrap_err().is_configuration_error());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::MomentCase;

/// Result type alias for slab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Pipeline stage of a design run, used to locate orchestrator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignStage {
    /// Input validation and geometry normalisation
    Validation,
    /// Moment coefficient lookup
    Coefficients,
    /// Load factoring
    Loads,
    /// Moment computation
    Moments,
    /// Flexural reinforcement design
    Reinforcement,
    /// Shear and thickness checks
    Capacity,
}

impl DesignStage {
    /// Human-readable stage name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignStage::Validation => "input validation",
            DesignStage::Coefficients => "coefficient lookup",
            DesignStage::Loads => "load factoring",
            DesignStage::Moments => "moment computation",
            DesignStage::Reinforcement => "reinforcement design",
            DesignStage::Capacity => "capacity checks",
        }
    }
}

impl std::fmt::Display for DesignStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-positive, inconsistent)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Edge-continuity case number outside 1..=9
    #[error("Unknown edge case: {case} (expected 1-9)")]
    UnknownEdgeCase { case: u8 },

    /// Bar designation not in the catalog
    #[error("Bar not found: {bar_name}")]
    BarNotFound { bar_name: String },

    /// Coefficient table data failed validation
    #[error("Invalid coefficient table: {reason}")]
    InvalidTable { reason: String },

    /// The required reinforcement ratio cannot be solved at this depth
    #[error("Section inadequate: Mu = {moment_kgm:.2} kg-m at d = {depth_cm:.2} cm - {reason}")]
    SectionInadequate {
        moment_kgm: f64,
        depth_cm: f64,
        reason: String,
    },

    /// Aggregate failure raised by the design orchestrator
    #[error("Design failed during {stage}{}: {source}", case_suffix(.moment_case))]
    DesignFailed {
        stage: DesignStage,
        moment_case: Option<MomentCase>,
        source: Box<CalcError>,
    },
}

fn case_suffix(moment_case: &Option<MomentCase>) -> String {
    match moment_case {
        Some(case) => format!(" ({})", case.label()),
        None => String::new(),
    }
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownEdgeCase error
    pub fn unknown_edge_case(case: u8) -> Self {
        CalcError::UnknownEdgeCase { case }
    }

    /// Create a BarNotFound error
    pub fn bar_not_found(bar_name: impl Into<String>) -> Self {
        CalcError::BarNotFound {
            bar_name: bar_name.into(),
        }
    }

    /// Create an InvalidTable error
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        CalcError::InvalidTable {
            reason: reason.into(),
        }
    }

    /// Create a SectionInadequate error
    pub fn section_inadequate(moment_kgm: f64, depth_cm: f64, reason: impl Into<String>) -> Self {
        CalcError::SectionInadequate {
            moment_kgm,
            depth_cm,
            reason: reason.into(),
        }
    }

    /// Wrap an error with the orchestrator stage (and moment case) it came from
    pub fn design_failed(stage: DesignStage, moment_case: Option<MomentCase>, source: CalcError) -> Self {
        CalcError::DesignFailed {
            stage,
            moment_case,
            source: Box::new(source),
        }
    }

    /// The innermost error, unwrapping any orchestrator aggregation
    pub fn root_cause(&self) -> &CalcError {
        match self {
            CalcError::DesignFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// True when the inputs or static configuration are malformed
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self.root_cause(),
            CalcError::InvalidInput { .. }
                | CalcError::UnknownEdgeCase { .. }
                | CalcError::BarNotFound { .. }
                | CalcError::InvalidTable { .. }
        )
    }

    /// True when the design itself is infeasible (not a malformed input)
    pub fn is_design_failure(&self) -> bool {
        matches!(self.root_cause(), CalcError::SectionInadequate { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownEdgeCase { .. } => "UNKNOWN_EDGE_CASE",
            CalcError::BarNotFound { .. } => "BAR_NOT_FOUND",
            CalcError::InvalidTable { .. } => "INVALID_TABLE",
            CalcError::SectionInadequate { .. } => "SECTION_INADEQUATE",
            CalcError::DesignFailed { .. } => "DESIGN_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("thickness_cm", "-5.0", "Thickness must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_edge_case(12).error_code(), "UNKNOWN_EDGE_CASE");
        assert_eq!(CalcError::bar_not_found("DB99").error_code(), "BAR_NOT_FOUND");
        assert_eq!(
            CalcError::section_inadequate(5000.0, 4.0, "negative radicand").error_code(),
            "SECTION_INADEQUATE"
        );
    }

    #[test]
    fn test_categories() {
        assert!(CalcError::unknown_edge_case(0).is_configuration_error());
        assert!(!CalcError::unknown_edge_case(0).is_design_failure());

        let inadequate = CalcError::section_inadequate(5000.0, 4.0, "negative radicand");
        assert!(inadequate.is_design_failure());
        assert!(!inadequate.is_configuration_error());
    }

    #[test]
    fn test_design_failed_keeps_source() {
        let inner = CalcError::section_inadequate(5000.0, 4.0, "negative radicand");
        let wrapped = CalcError::design_failed(
            DesignStage::Reinforcement,
            Some(MomentCase::ShortNegative),
            inner.clone(),
        );

        assert_eq!(wrapped.root_cause(), &inner);
        assert!(wrapped.is_design_failure());
        assert_eq!(wrapped.error_code(), "DESIGN_FAILED");

        let message = wrapped.to_string();
        assert!(message.contains("reinforcement design"));
        assert!(message.contains("Short span, negative"));
    }

    #[test]
    fn test_design_failed_serialization() {
        let wrapped = CalcError::design_failed(
            DesignStage::Coefficients,
            None,
            CalcError::unknown_edge_case(10),
        );
        let json = serde_json::to_string(&wrapped).unwrap();
        assert!(json.contains("DesignFailed"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(wrapped, roundtrip);
    }
}
