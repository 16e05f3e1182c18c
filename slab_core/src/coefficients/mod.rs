//! # Moment Coefficients (ACI Method 2)
//!
//! Static coefficient table indexed by edge-continuity case and aspect ratio
//! m = short span / long span, and the resolver that returns exact or
//! linearly interpolated coefficient sets.
//!
//! ## Coefficient Policy
//!
//! Positive (midspan) moments use **split** coefficients: one applied to the
//! factored dead load and one to the factored live load, summed after
//! scaling. Negative (support) moments use a single coefficient against the
//! total factored load.
//!
//! ## Domain
//!
//! Coefficients are codified for 0.5 ≤ m ≤ 1.0 and are never extrapolated.
//! Ratios outside the domain are clamped to the nearest end and the
//! [`ResolvedCoefficients::clamped`] flag is raised so callers can warn.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::coefficients::{resolve, EdgeCase};
//!
//! let resolved = resolve(EdgeCase::AllContinuous, 0.8).unwrap();
//! assert!(!resolved.clamped);
//! assert!(!resolved.interpolated);
//! assert_eq!(resolved.coefficients.ca_neg, 0.050);
//!
//! let between = resolve(EdgeCase::AllContinuous, 0.825).unwrap();
//! assert!(between.interpolated);
//! assert!(between.coefficients.ca_neg < 0.050 && between.coefficients.ca_neg > 0.045);
//! ```

mod table;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Ratios closer than this are treated as the same table key
pub const RATIO_TOLERANCE: f64 = 1e-9;

/// Upper end of the coefficient domain (square panel)
pub const MAX_RATIO: f64 = 1.0;

// ============================================================================
// Edge Cases
// ============================================================================

/// Edge-continuity condition of a panel.
///
/// Numbered 1-9 in the conventional Method 2 order. Serializes as its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EdgeCase {
    /// Case 1: all four edges continuous (interior panel)
    AllContinuous,
    /// Case 2: both short edges discontinuous
    ShortEdgesDiscontinuous,
    /// Case 3: both long edges discontinuous
    LongEdgesDiscontinuous,
    /// Case 4: two short edges and one long edge discontinuous
    TwoShortOneLongDiscontinuous,
    /// Case 5: two long edges and one short edge discontinuous
    TwoLongOneShortDiscontinuous,
    /// Case 6: two adjacent edges discontinuous (corner panel)
    AdjacentEdgesDiscontinuous,
    /// Case 7: one short edge discontinuous
    OneShortEdgeDiscontinuous,
    /// Case 8: one long edge discontinuous
    OneLongEdgeDiscontinuous,
    /// Case 9: all four edges discontinuous
    AllDiscontinuous,
}

impl EdgeCase {
    /// All cases in numeric order
    pub const ALL: [EdgeCase; 9] = [
        EdgeCase::AllContinuous,
        EdgeCase::ShortEdgesDiscontinuous,
        EdgeCase::LongEdgesDiscontinuous,
        EdgeCase::TwoShortOneLongDiscontinuous,
        EdgeCase::TwoLongOneShortDiscontinuous,
        EdgeCase::AdjacentEdgesDiscontinuous,
        EdgeCase::OneShortEdgeDiscontinuous,
        EdgeCase::OneLongEdgeDiscontinuous,
        EdgeCase::AllDiscontinuous,
    ];

    /// Case number (1-9)
    pub fn number(&self) -> u8 {
        match self {
            EdgeCase::AllContinuous => 1,
            EdgeCase::ShortEdgesDiscontinuous => 2,
            EdgeCase::LongEdgesDiscontinuous => 3,
            EdgeCase::TwoShortOneLongDiscontinuous => 4,
            EdgeCase::TwoLongOneShortDiscontinuous => 5,
            EdgeCase::AdjacentEdgesDiscontinuous => 6,
            EdgeCase::OneShortEdgeDiscontinuous => 7,
            EdgeCase::OneLongEdgeDiscontinuous => 8,
            EdgeCase::AllDiscontinuous => 9,
        }
    }

    /// Parse a case number, rejecting anything outside 1-9
    pub fn from_number(case: u8) -> CalcResult<Self> {
        EdgeCase::ALL
            .get(usize::from(case).wrapping_sub(1))
            .copied()
            .ok_or_else(|| CalcError::unknown_edge_case(case))
    }

    /// Continuity pattern description
    pub fn description(&self) -> &'static str {
        match self {
            EdgeCase::AllContinuous => "All edges continuous",
            EdgeCase::ShortEdgesDiscontinuous => "Short edges discontinuous",
            EdgeCase::LongEdgesDiscontinuous => "Long edges discontinuous",
            EdgeCase::TwoShortOneLongDiscontinuous => "2 short + 1 long edge discontinuous",
            EdgeCase::TwoLongOneShortDiscontinuous => "2 long + 1 short edge discontinuous",
            EdgeCase::AdjacentEdgesDiscontinuous => "2 adjacent edges discontinuous",
            EdgeCase::OneShortEdgeDiscontinuous => "1 short edge discontinuous",
            EdgeCase::OneLongEdgeDiscontinuous => "1 long edge discontinuous",
            EdgeCase::AllDiscontinuous => "All edges discontinuous",
        }
    }
}

impl TryFrom<u8> for EdgeCase {
    type Error = CalcError;

    fn try_from(case: u8) -> Result<Self, Self::Error> {
        EdgeCase::from_number(case)
    }
}

impl From<EdgeCase> for u8 {
    fn from(case: EdgeCase) -> Self {
        case.number()
    }
}

impl std::fmt::Display for EdgeCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Case {}: {}", self.number(), self.description())
    }
}

// ============================================================================
// Coefficient Sets
// ============================================================================

/// The six Method 2 coefficients for one (case, ratio) entry.
///
/// `a` is the short-span direction, `b` the long-span direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    /// Short-span negative moment coefficient (total factored load)
    pub ca_neg: f64,
    /// Short-span positive moment coefficient for factored dead load
    pub ca_dl: f64,
    /// Short-span positive moment coefficient for factored live load
    pub ca_ll: f64,
    /// Long-span negative moment coefficient (total factored load)
    pub cb_neg: f64,
    /// Long-span positive moment coefficient for factored dead load
    pub cb_dl: f64,
    /// Long-span positive moment coefficient for factored live load
    pub cb_ll: f64,
}

impl CoefficientSet {
    /// Build from `[Ca,neg, Ca,dl, Ca,ll, Cb,neg, Cb,dl, Cb,ll]`
    pub fn from_array(values: [f64; 6]) -> Self {
        let [ca_neg, ca_dl, ca_ll, cb_neg, cb_dl, cb_ll] = values;
        CoefficientSet { ca_neg, ca_dl, ca_ll, cb_neg, cb_dl, cb_ll }
    }

    /// Components in table order
    pub fn to_array(&self) -> [f64; 6] {
        [self.ca_neg, self.ca_dl, self.ca_ll, self.cb_neg, self.cb_dl, self.cb_ll]
    }

    /// Component-wise linear interpolation toward `other` at fraction `t` (0..=1).
    ///
    /// Each component stays within the closed interval spanned by the two
    /// inputs.
    pub fn lerp(&self, other: &CoefficientSet, t: f64) -> CoefficientSet {
        let a = self.to_array();
        let b = other.to_array();
        let mut out = [0.0; 6];
        for (i, slot) in out.iter_mut().enumerate() {
            let value = a[i] + (b[i] - a[i]) * t;
            *slot = value.clamp(a[i].min(b[i]), a[i].max(b[i]));
        }
        CoefficientSet::from_array(out)
    }
}

/// One sampled ratio of a case
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRow {
    /// Aspect ratio m = short / long
    pub ratio: f64,
    /// Coefficients at this ratio
    pub coefficients: CoefficientSet,
}

impl CoefficientRow {
    pub fn new(ratio: f64, values: [f64; 6]) -> Self {
        CoefficientRow {
            ratio,
            coefficients: CoefficientSet::from_array(values),
        }
    }
}

/// Outcome of a coefficient lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCoefficients {
    /// Edge case looked up
    pub case: EdgeCase,
    /// Ratio passed by the caller
    pub requested_ratio: f64,
    /// Ratio actually used, after clamping to the table domain
    pub ratio_used: f64,
    /// True when `requested_ratio` lay outside the table domain
    pub clamped: bool,
    /// True when the set was interpolated between two sampled ratios
    pub interpolated: bool,
    /// Bracketing sampled ratios (equal when no interpolation took place)
    pub bracket: (f64, f64),
    /// Resolved coefficients
    pub coefficients: CoefficientSet,
}

// ============================================================================
// Coefficient Table
// ============================================================================

/// Validated, immutable coefficient table.
///
/// Every case is present, has at least two sampled ratios in strictly
/// increasing order, and is defined at both ends of the shared domain
/// `[min_ratio, 1.0]`. There is no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    cases: HashMap<EdgeCase, Vec<CoefficientRow>>,
    min_ratio: f64,
}

static BUILTIN: Lazy<CalcResult<CoefficientTable>> = Lazy::new(|| {
    let raw: [(EdgeCase, &[table::RawRow]); 9] = [
        (EdgeCase::AllContinuous, table::CASE_1),
        (EdgeCase::ShortEdgesDiscontinuous, table::CASE_2),
        (EdgeCase::LongEdgesDiscontinuous, table::CASE_3),
        (EdgeCase::TwoShortOneLongDiscontinuous, table::CASE_4),
        (EdgeCase::TwoLongOneShortDiscontinuous, table::CASE_5),
        (EdgeCase::AdjacentEdgesDiscontinuous, table::CASE_6),
        (EdgeCase::OneShortEdgeDiscontinuous, table::CASE_7),
        (EdgeCase::OneLongEdgeDiscontinuous, table::CASE_8),
        (EdgeCase::AllDiscontinuous, table::CASE_9),
    ];
    CoefficientTable::new(raw.iter().map(|(case, rows)| {
        (
            *case,
            rows.iter().map(|(ratio, values)| CoefficientRow::new(*ratio, *values)).collect(),
        )
    }))
});

impl CoefficientTable {
    /// Build and validate a table from per-case rows (any order within a case).
    pub fn new(cases: impl IntoIterator<Item = (EdgeCase, Vec<CoefficientRow>)>) -> CalcResult<Self> {
        let mut map: HashMap<EdgeCase, Vec<CoefficientRow>> = HashMap::new();
        for (case, mut rows) in cases {
            if map.contains_key(&case) {
                return Err(CalcError::invalid_table(format!("{} defined twice", case)));
            }
            rows.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));
            map.insert(case, rows);
        }

        let mut min_ratio: Option<f64> = None;
        for case in EdgeCase::ALL {
            let rows = map
                .get(&case)
                .ok_or_else(|| CalcError::invalid_table(format!("{} has no coefficients", case)))?;
            validate_rows(case, rows)?;

            let lowest = rows[0].ratio;
            match min_ratio {
                None => min_ratio = Some(lowest),
                Some(expected) if (expected - lowest).abs() > RATIO_TOLERANCE => {
                    return Err(CalcError::invalid_table(format!(
                        "{} starts at m = {}, other cases start at m = {}",
                        case, lowest, expected
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(CoefficientTable {
            cases: map,
            min_ratio: min_ratio.unwrap_or(MAX_RATIO),
        })
    }

    /// The built-in table, initialised and validated once per process.
    pub fn builtin() -> CalcResult<&'static CoefficientTable> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Lowest sampled ratio (shared by every case)
    pub fn min_ratio(&self) -> f64 {
        self.min_ratio
    }

    /// Sampled rows of a case, ascending by ratio
    pub fn lookup(&self, case: EdgeCase) -> CalcResult<&[CoefficientRow]> {
        self.cases
            .get(&case)
            .map(Vec::as_slice)
            .ok_or_else(|| CalcError::unknown_edge_case(case.number()))
    }

    /// Resolve the coefficient set for a case and aspect ratio.
    ///
    /// The ratio is clamped to `[min_ratio, 1.0]`; an exact key returns the
    /// stored set unchanged, otherwise the two bracketing rows are
    /// interpolated component by component.
    pub fn resolve(&self, case: EdgeCase, ratio: f64) -> CalcResult<ResolvedCoefficients> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(CalcError::invalid_input(
                "ratio",
                ratio.to_string(),
                "Aspect ratio must be a positive number",
            ));
        }
        let rows = self.lookup(case)?;

        let ratio_used = ratio.clamp(self.min_ratio, MAX_RATIO);
        let clamped = (ratio_used - ratio).abs() > RATIO_TOLERANCE;

        let exact = |row: &CoefficientRow| ResolvedCoefficients {
            case,
            requested_ratio: ratio,
            ratio_used,
            clamped,
            interpolated: false,
            bracket: (row.ratio, row.ratio),
            coefficients: row.coefficients,
        };

        if let Some(row) = rows.iter().find(|row| (row.ratio - ratio_used).abs() <= RATIO_TOLERANCE) {
            return Ok(exact(row));
        }

        let upper_index = rows.partition_point(|row| row.ratio < ratio_used);
        let lower = upper_index.checked_sub(1).and_then(|i| rows.get(i));
        let upper = rows.get(upper_index);

        match (lower, upper) {
            (Some(lower), Some(upper)) => {
                let t = (ratio_used - lower.ratio) / (upper.ratio - lower.ratio);
                Ok(ResolvedCoefficients {
                    case,
                    requested_ratio: ratio,
                    ratio_used,
                    clamped,
                    interpolated: true,
                    bracket: (lower.ratio, upper.ratio),
                    coefficients: lower.coefficients.lerp(&upper.coefficients, t),
                })
            }
            (Some(only), None) | (None, Some(only)) => Ok(exact(only)),
            (None, None) => Err(CalcError::invalid_table(format!("{} has no coefficients", case))),
        }
    }
}

fn validate_rows(case: EdgeCase, rows: &[CoefficientRow]) -> CalcResult<()> {
    if rows.len() < 2 {
        return Err(CalcError::invalid_table(format!(
            "{} needs at least two sampled ratios, found {}",
            case,
            rows.len()
        )));
    }
    for row in rows {
        if !(row.ratio.is_finite() && row.ratio > 0.0 && row.ratio <= MAX_RATIO + RATIO_TOLERANCE) {
            return Err(CalcError::invalid_table(format!("{} has ratio {} outside (0, 1]", case, row.ratio)));
        }
        if row.coefficients.to_array().iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(CalcError::invalid_table(format!(
                "{} has a negative or non-finite coefficient at m = {}",
                case, row.ratio
            )));
        }
    }
    for pair in rows.windows(2) {
        if pair[1].ratio - pair[0].ratio <= RATIO_TOLERANCE {
            return Err(CalcError::invalid_table(format!("{} repeats ratio m = {}", case, pair[0].ratio)));
        }
    }
    let highest = rows[rows.len() - 1].ratio;
    if (highest - MAX_RATIO).abs() > RATIO_TOLERANCE {
        return Err(CalcError::invalid_table(format!(
            "{} must define the square panel (m = 1.0), highest is {}",
            case, highest
        )));
    }
    Ok(())
}

/// Resolve against the built-in table.
///
/// Shorthand for `CoefficientTable::builtin()?.resolve(case, ratio)`.
pub fn resolve(case: EdgeCase, ratio: f64) -> CalcResult<ResolvedCoefficients> {
    CoefficientTable::builtin()?.resolve(case, ratio)
}
