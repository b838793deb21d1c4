//! Result types for beam analysis

use serde::{Deserialize, Serialize};

use crate::error::BeamResult;

/// Sign convention identifier carried on every analysis result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignConvention {
    /// Loads are entered downward positive; internal forces are upward
    /// positive and moments sagging positive
    #[serde(rename = "user_down_positive__internal_up_positive")]
    UserDownPositiveInternalUpPositive,
}

/// Displacements and reactions at a mesh node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeResult {
    /// Position along the beam in mm
    pub x: f64,
    /// Vertical deflection in mm, upward positive
    pub deflection: f64,
    /// Rotation in radians
    pub rotation: f64,
    /// Support reaction force in N, upward positive; ~0 at unrestrained nodes
    pub reaction_force: f64,
    /// Support reaction moment in N·mm; ~0 at unrestrained nodes
    pub reaction_moment: f64,
}

/// One sample of the internal force diagrams
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Position along the beam in mm
    pub x: f64,
    /// Shear force in N, upward positive
    pub shear: f64,
    /// Bending moment in N·mm, sagging positive
    pub moment: f64,
}

/// Full result of a beam analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Per-node displacements and reactions, ordered by position
    pub nodes: Vec<NodeResult>,
    /// Dense shear/moment samples, ordered by position
    pub diagram: Vec<DiagramPoint>,
    /// Sign convention of every value above
    pub sign_convention: SignConvention,
}

impl AnalysisResult {
    /// Sample with the largest sagging moment
    pub fn max_moment(&self) -> Option<&DiagramPoint> {
        self.diagram
            .iter()
            .max_by(|a, b| a.moment.total_cmp(&b.moment))
    }

    /// Sample with the smallest (most hogging) moment
    pub fn min_moment(&self) -> Option<&DiagramPoint> {
        self.diagram
            .iter()
            .min_by(|a, b| a.moment.total_cmp(&b.moment))
    }

    /// Sample with the largest absolute shear
    pub fn max_abs_shear(&self) -> Option<&DiagramPoint> {
        self.diagram
            .iter()
            .max_by(|a, b| a.shear.abs().total_cmp(&b.shear.abs()))
    }

    /// Node with the largest absolute deflection
    pub fn max_abs_deflection(&self) -> Option<&NodeResult> {
        self.nodes
            .iter()
            .max_by(|a, b| a.deflection.abs().total_cmp(&b.deflection.abs()))
    }

    /// Sum of the vertical reactions in N, upward positive
    pub fn total_reaction_force(&self) -> f64 {
        self.nodes.iter().map(|n| n.reaction_force).sum()
    }

    /// Serialize the result to JSON
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, shear: f64, moment: f64) -> DiagramPoint {
        DiagramPoint { x, shear, moment }
    }

    #[test]
    fn test_diagram_extrema() {
        let result = AnalysisResult {
            nodes: vec![],
            diagram: vec![
                sample(0.0, 30.0, 0.0),
                sample(3000.0, 0.0, 45.0),
                sample(6000.0, -25.0, 0.0),
            ],
            sign_convention: SignConvention::UserDownPositiveInternalUpPositive,
        };
        assert_eq!(result.max_moment().unwrap().x, 3000.0);
        assert_eq!(result.max_abs_shear().unwrap().x, 0.0);
    }
}
