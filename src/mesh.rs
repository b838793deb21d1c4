//! Mesh synthesis - nodes and elements derived from a beam model

use log::debug;

use crate::elements::SupportKind;
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::math::{self, Mat4, Vec4};
use crate::model::BeamModel;

/// Positions closer than this are merged into a single node (mm)
pub const POSITION_TOLERANCE: f64 = 1e-9;

/// Trapezoidal-rule subintervals for consistent loads from a uniform load
const UNIFORM_INTEGRATION_STEPS: usize = 20;
/// Trapezoidal-rule subintervals for consistent loads from a trapezoidal load
const TRAPEZOIDAL_INTEGRATION_STEPS: usize = 30;

/// A mesh node derived from the beam model
#[derive(Debug, Clone, Copy)]
pub struct Node {
    /// Position along the beam in mm
    pub x: f64,
    /// Support restraint at this node, if any
    pub support: Option<SupportKind>,
}

/// A beam element between two consecutive nodes
#[derive(Debug, Clone)]
pub struct Element {
    /// Index of the left node
    pub i: usize,
    /// Index of the right node
    pub j: usize,
    /// Span start position in mm
    pub x_start: f64,
    /// Span end position in mm
    pub x_end: f64,
    /// Flexural rigidity EI in N·mm²
    pub ei: f64,
    /// Loads whose coverage intersects this element
    pub loads: Vec<Load>,
}

impl Element {
    /// Element length in mm
    pub fn length(&self) -> f64 {
        self.x_end - self.x_start
    }

    /// Local 4x4 stiffness matrix
    pub fn stiffness(&self) -> Mat4 {
        math::beam_stiffness(self.ei, self.length())
    }

    /// Consistent nodal load vector from every load on this element, in the
    /// internal convention (upward positive)
    pub fn equivalent_loads(&self) -> Vec4 {
        let mut fe = Vec4::zeros();
        for load in &self.loads {
            fe += self.equivalent_load(load);
        }
        fe
    }

    fn equivalent_load(&self, load: &Load) -> Vec4 {
        match *load {
            Load::Point { x, p } => {
                let xi = (x - self.x_start) / self.length();
                // user loads act downward; internal forces are upward positive
                math::consistent_point_load(-p, xi, self.length())
            }
            Load::Uniform { x1, x2, .. } | Load::Trapezoidal { x1, x2, .. } => {
                let a = x1.max(self.x_start);
                let b = x2.min(self.x_end);
                let steps = match load {
                    Load::Uniform { .. } => UNIFORM_INTEGRATION_STEPS,
                    _ => TRAPEZOIDAL_INTEGRATION_STEPS,
                };
                math::consistent_distributed_load(
                    |x| -load.intensity_at(x),
                    self.x_start,
                    self.x_end,
                    a,
                    b,
                    steps,
                )
            }
        }
    }

    /// Total distributed intensity at x from every load on this element,
    /// in the internal convention (upward positive)
    pub fn distributed_intensity_at(&self, x: f64) -> f64 {
        self.loads.iter().map(|load| -load.intensity_at(x)).sum()
    }
}

/// Build the node and element lists for a beam model.
///
/// Nodes are the union of the beam ends, the support positions and every
/// load breakpoint, clamped into [0, L] and merged within
/// [`POSITION_TOLERANCE`]. Each element carries its flexural rigidity and
/// the loads intersecting its span, so a load edge falling strictly inside
/// an element cannot occur.
pub fn build_mesh(model: &BeamModel) -> BeamResult<(Vec<Node>, Vec<Element>)> {
    model.validate()?;

    let span = model.span;
    let mut xs = vec![0.0, span];
    for support in &model.supports {
        xs.push(support.x);
    }
    for load in &model.loads {
        load.push_breakpoints(&mut xs);
    }

    for x in xs.iter_mut() {
        *x = x.clamp(0.0, span);
    }
    xs.sort_by(f64::total_cmp);

    let mut nodes: Vec<Node> = Vec::with_capacity(xs.len());
    for x in xs {
        match nodes.last() {
            Some(last) if (x - last.x).abs() <= POSITION_TOLERANCE => {}
            _ => nodes.push(Node { x, support: None }),
        }
    }

    if nodes.len() < 2 {
        return Err(BeamError::InvalidGeometry(
            "beam span is too short to mesh".to_string(),
        ));
    }

    // Supports land exactly on nodes; a later entry at the same position wins
    for support in &model.supports {
        let x = support.x.clamp(0.0, span);
        if let Some(node) = nodes
            .iter_mut()
            .find(|n| (n.x - x).abs() <= POSITION_TOLERANCE)
        {
            node.support = Some(support.kind);
        }
    }

    let ei = model.material.ec * model.section.moment_of_inertia();

    let count = nodes.len() - 1;
    let mut elements = Vec::with_capacity(count);
    for i in 0..count {
        let x_start = nodes[i].x;
        let x_end = nodes[i + 1].x;
        let last = i + 1 == count;
        let loads: Vec<Load> = model
            .loads
            .iter()
            .copied()
            .filter(|load| claims_load(load, x_start, x_end, last))
            .collect();
        elements.push(Element {
            i,
            j: i + 1,
            x_start,
            x_end,
            ei,
            loads,
        });
    }

    debug!("meshed beam: {} nodes, {} elements", nodes.len(), count);
    Ok((nodes, elements))
}

/// Whether an element spanning [x_start, x_end] carries a load.
///
/// Distributed loads belong to every element their interval overlaps; the
/// contribution is clipped later. A point load belongs to exactly one
/// element: spans are treated as half-open on the right, with the last
/// element also claiming its right endpoint, so a load sitting on a shared
/// node is never assembled twice.
fn claims_load(load: &Load, x_start: f64, x_end: f64, last: bool) -> bool {
    match *load {
        Load::Point { x, .. } => {
            if x < x_start - POSITION_TOLERANCE {
                return false;
            }
            if last {
                x <= x_end + POSITION_TOLERANCE
            } else {
                x < x_end - POSITION_TOLERANCE
            }
        }
        Load::Uniform { x1, x2, .. } | Load::Trapezoidal { x1, x2, .. } => {
            !(x2 <= x_start || x1 >= x_end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Support;
    use approx::assert_relative_eq;

    fn base_model() -> BeamModel {
        BeamModel::default()
    }

    #[test]
    fn test_nodes_from_breakpoints() {
        let mut model = base_model();
        model.loads = vec![
            Load::uniform(1000.0, 4000.0, 10.0),
            Load::point(2000.0, 50_000.0),
        ];
        let (nodes, elements) = build_mesh(&model).unwrap();
        let xs: Vec<f64> = nodes.iter().map(|n| n.x).collect();
        assert_eq!(xs, vec![0.0, 1000.0, 2000.0, 4000.0, 6000.0]);
        assert_eq!(elements.len(), 4);
    }

    #[test]
    fn test_duplicate_positions_merge() {
        let mut model = base_model();
        model.loads = vec![
            Load::point(3000.0, 10_000.0),
            Load::uniform(3000.0, 6000.0, 5.0),
        ];
        let (nodes, _) = build_mesh(&model).unwrap();
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn test_breakpoints_clamped_into_span() {
        let mut model = base_model();
        model.loads = vec![Load::uniform(-500.0, 7000.0, 10.0)];
        let (nodes, _) = build_mesh(&model).unwrap();
        let xs: Vec<f64> = nodes.iter().map(|n| n.x).collect();
        assert_eq!(xs, vec![0.0, 6000.0]);
    }

    #[test]
    fn test_supports_land_on_nodes() {
        let mut model = base_model();
        model.supports = vec![
            Support::simple(0.0),
            Support::fixed(3500.0),
            Support::simple(6000.0),
        ];
        let (nodes, _) = build_mesh(&model).unwrap();
        let supported: Vec<(f64, SupportKind)> = nodes
            .iter()
            .filter_map(|n| n.support.map(|s| (n.x, s)))
            .collect();
        assert_eq!(
            supported,
            vec![
                (0.0, SupportKind::Simple),
                (3500.0, SupportKind::Fixed),
                (6000.0, SupportKind::Simple),
            ]
        );
    }

    #[test]
    fn test_point_load_claimed_once() {
        let mut model = base_model();
        model.loads = vec![Load::point(3000.0, 40_000.0)];
        let (_, elements) = build_mesh(&model).unwrap();
        assert_eq!(elements.len(), 2);
        let owners: Vec<usize> = elements
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.loads.is_empty())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(owners, vec![1]);
    }

    #[test]
    fn test_point_load_at_right_end_claimed_by_last_element() {
        let mut model = base_model();
        model.loads = vec![Load::point(6000.0, 40_000.0), Load::point(3000.0, 1.0)];
        let (_, elements) = build_mesh(&model).unwrap();
        let last = elements.last().unwrap();
        assert!(last
            .loads
            .iter()
            .any(|l| matches!(l, Load::Point { x, .. } if *x == 6000.0)));
    }

    #[test]
    fn test_distributed_load_split_preserves_total_force() {
        let mut model = base_model();
        let w = 10.0;
        model.loads = vec![Load::uniform(1000.0, 5000.0, w), Load::point(2500.0, 0.0)];
        let (_, elements) = build_mesh(&model).unwrap();
        let total: f64 = elements
            .iter()
            .map(|e| {
                let fe = e.equivalent_loads();
                fe[0] + fe[2]
            })
            .sum();
        // internal convention is upward positive, user load acts downward
        assert_relative_eq!(total, -w * 4000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_element_rigidity() {
        let model = base_model();
        let (_, elements) = build_mesh(&model).unwrap();
        let expected = 25_000.0 * 250.0 * 500.0_f64.powi(3) / 12.0;
        assert_relative_eq!(elements[0].ei, expected, max_relative = 1e-12);
    }
}
