//! beamflex - A native Rust finite element analysis engine for continuous
//! beams
//!
//! Given a beam's geometry, cross-section, material, support conditions and
//! transverse loads, the engine computes nodal deflections and rotations,
//! support reactions, and dense shear V(x) and bending moment M(x) diagrams
//! using Euler-Bernoulli beam elements with consistent nodal loads.
//!
//! Loads are entered downward positive. Results use upward-positive forces
//! and sagging-positive moments, and every result carries its sign
//! convention tag so downstream consumers never guess.
//!
//! The whole pipeline is a pure function of the model: no global state, no
//! I/O, safe to run concurrently on separate models.
//!
//! ## Example
//! ```rust
//! use beamflex::prelude::*;
//!
//! let model = BeamModel::new(6000.0, Section::new(250.0, 500.0, 40.0), Material::concrete())
//!     .with_support(Support::simple(0.0))
//!     .with_support(Support::simple(6000.0))
//!     .with_load(Load::uniform(0.0, 6000.0, 10.0));
//!
//! let result = model.analyze().unwrap();
//!
//! // wL/2 at each support, wL²/8 at midspan
//! let reaction = result.nodes.first().unwrap().reaction_force;
//! assert!((reaction - 30_000.0).abs() / 30_000.0 < 0.01);
//! let peak = result.max_moment().unwrap();
//! assert!((peak.moment - 45.0e6).abs() / 45.0e6 < 0.02);
//! ```

pub mod analysis;
pub mod diagram;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod mesh;
pub mod model;
pub mod results;
pub mod units;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{analyze, dof_index, Dof};
    pub use crate::elements::{Material, Section, Support, SupportKind};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::Load;
    pub use crate::model::{BeamModel, DEFAULT_DIAGRAM_POINTS};
    pub use crate::results::{AnalysisResult, DiagramPoint, NodeResult, SignConvention};
}
