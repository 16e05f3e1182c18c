//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Metric / ksc System
//!
//! Slab design follows the metric gravitational units still common in
//! regional concrete practice:
//! - Length: metres (m) for spans, centimetres (cm) for sections, millimetres (mm) for bars
//! - Pressure (area load): kg/m²
//! - Density: kg/m³
//! - Moment: kg-m (per metre width), kg-cm for section design
//!
//! Strengths (ksc), forces (kg) and steel areas (cm²) stay plain `f64` in the
//! formula layer.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{Meters, Centimeters, KgM, KgCm};
//!
//! let span = Meters(4.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 400.0);
//!
//! let moment: KgCm = KgM(762.5).into();
//! assert_eq!(moment.0, 76_250.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

// ============================================================================
// Load Units
// ============================================================================

/// Area load in kg/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerSqM(pub f64);

/// Unit weight in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCuM(pub f64);

impl Mul<Meters> for KgPerCuM {
    type Output = KgPerSqM;
    /// Unit weight times thickness gives an area load
    fn mul(self, rhs: Meters) -> KgPerSqM {
        KgPerSqM(self.0 * rhs.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilogram-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgM(pub f64);

/// Moment in kilogram-centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCm(pub f64);

impl From<KgM> for KgCm {
    fn from(kgm: KgM) -> Self {
        KgCm(kgm.0 * 100.0)
    }
}

// ============================================================================
// Raw Access
// ============================================================================

macro_rules! impl_value {
    ($($type:ty),+) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )+
    };
}

impl_value!(Meters, Centimeters, Millimeters, KgPerSqM, KgPerCuM, KgM, KgCm);
