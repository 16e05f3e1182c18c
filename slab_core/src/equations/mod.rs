//! # Structural Engineering Equations
//!
//! This module contains the reinforced-concrete formulas used by the slab
//! calculations. Keeping equations in one place enables:
//! - Easy verification against code references (ACI 318)
//! - Documentation of assumptions and unit conventions
//! - Consistent implementation across calculation stages
//!
//! ## Modules
//!
//! - [`concrete`] - Strength design of rectangular slab strips, spacing, shear, thickness
//!
//! ## Unit Conventions
//!
//! - Section dimensions in cm, strengths in ksc, moments in kg-cm
//! - Design is per 100 cm strip width unless stated otherwise
//!
//! ## References
//!
//! - ACI 318: Building Code Requirements for Structural Concrete
//! - ACI 318-63 Appendix A, Method 2: Two-way slabs supported on walls or stiff beams

pub mod concrete;

pub use concrete::{
    STRIP_WIDTH_CM,
    bar_spacing,
    minimum_thickness_from_perimeter,
    nominal_resistance_coefficient,
    one_way_shear_capacity,
    required_steel_ratio,
    round_down_to_increment,
    self_weight,
};
