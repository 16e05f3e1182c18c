//! # slab_core - Two-Way Slab Design Engine
//!
//! `slab_core` designs reinforced-concrete two-way slab panels with the ACI
//! Method 2 moment-coefficient procedure. All inputs and outputs are
//! JSON-serializable, so the engine can sit behind a CLI, a web service or
//! any other front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No side effects**: The engine never logs, retries or substitutes defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::{calculate, DesignSettings, EdgeCase, PanelGeometry, TwoWaySlabInput};
//! use slab_core::loads::LoadInputs;
//! use slab_core::materials::{BarSize, MaterialProperties};
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
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("short_negative"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Moments, reinforcement, capacity checks and the design orchestrator
//! - [`coefficients`] - Method 2 coefficient table and resolver
//! - [`equations`] - Reinforced-concrete formulas
//! - [`loads`] - Load inputs and factoring
//! - [`materials`] - Concrete/steel properties and the bar catalog
//! - [`settings`] - Deployment-wide design constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod coefficients;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DesignWarning, MomentCase, PanelGeometry, TwoWaySlabInput, TwoWaySlabResult};
pub use coefficients::{CoefficientSet, CoefficientTable, EdgeCase};
pub use errors::{CalcError, CalcResult, DesignStage};
pub use settings::DesignSettings;
