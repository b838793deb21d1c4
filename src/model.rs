//! Beam model - the input contract for the analysis engine

use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::elements::{Material, Section, Support};
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::results::AnalysisResult;

/// Default diagram sample intervals per element (25 samples)
pub const DEFAULT_DIAGRAM_POINTS: usize = 24;

/// A single-span beam model in internal units (mm, N, MPa).
///
/// Loads are entered downward positive. The order of the support and load
/// lists carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamModel {
    /// Span length in mm
    pub span: f64,
    /// Rectangular cross-section
    pub section: Section,
    /// Material
    pub material: Material,
    /// Support conditions
    pub supports: Vec<Support>,
    /// Transverse loads, downward positive
    pub loads: Vec<Load>,
    /// Diagram sample intervals per element; the solver densifies every
    /// element by this count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_points_per_element: Option<usize>,
}

impl BeamModel {
    /// Create a model with no supports or loads yet
    pub fn new(span: f64, section: Section, material: Material) -> Self {
        Self {
            span,
            section,
            material,
            supports: Vec::new(),
            loads: Vec::new(),
            diagram_points_per_element: None,
        }
    }

    /// Add a support condition
    pub fn with_support(mut self, support: Support) -> Self {
        self.supports.push(support);
        self
    }

    /// Add a transverse load
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Override the diagram density
    pub fn with_diagram_points(mut self, points_per_element: usize) -> Self {
        self.diagram_points_per_element = Some(points_per_element);
        self
    }

    /// Diagram sample intervals per element, defaulting to
    /// [`DEFAULT_DIAGRAM_POINTS`]
    pub fn diagram_points(&self) -> usize {
        self.diagram_points_per_element
            .unwrap_or(DEFAULT_DIAGRAM_POINTS)
    }

    /// Validate geometry and material before meshing
    pub fn validate(&self) -> BeamResult<()> {
        if !(self.span > 0.0) {
            return Err(BeamError::InvalidGeometry(
                "span must be positive".to_string(),
            ));
        }
        if !(self.section.b > 0.0 && self.section.h > 0.0) {
            return Err(BeamError::InvalidGeometry(
                "section dimensions must be positive".to_string(),
            ));
        }
        if !(self.material.ec > 0.0) {
            return Err(BeamError::InvalidGeometry(
                "elastic modulus must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Run the linear analysis on this model
    pub fn analyze(&self) -> BeamResult<AnalysisResult> {
        analysis::analyze(self)
    }

    /// Serialize the model to JSON
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a model from JSON
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for BeamModel {
    /// A 6 m simply supported concrete beam under a 10 N/mm uniform load
    fn default() -> Self {
        Self {
            span: 6000.0,
            section: Section::new(250.0, 500.0, 40.0),
            material: Material::concrete(),
            supports: vec![Support::simple(0.0), Support::simple(6000.0)],
            loads: vec![Load::uniform(0.0, 6000.0, 10.0)],
            diagram_points_per_element: None,
        }
    }
}
