//! Shear and moment diagram reconstruction
//!
//! Diagrams come from per-element equilibrium: end forces are recovered
//! from the solved displacements, then the distributed and point load
//! contributions are integrated along the span.

use crate::analysis::{dof_index, Dof};
use crate::loads::Load;
use crate::math::{Vec as DVec, Vec4};
use crate::mesh::{Element, POSITION_TOLERANCE};
use crate::results::DiagramPoint;

/// Trapezoidal-rule subintervals for the cumulative load integrals
const SHEAR_INTEGRATION_STEPS: usize = 40;

/// Build the dense V(x)/M(x) sample sequence over every element.
///
/// `points_per_element` is the number of sample intervals per element, so
/// each element contributes one more sample than that. The first sample of
/// every element after the first coincides with the previous element's last
/// sample and is dropped, keeping positions strictly increasing.
pub fn build_diagram(
    elements: &[Element],
    displacements: &DVec,
    points_per_element: usize,
) -> Vec<DiagramPoint> {
    let divisions = points_per_element.max(1);
    let mut diagram: Vec<DiagramPoint> = Vec::new();

    for element in elements {
        let ue = Vec4::new(
            displacements[dof_index(element.i, Dof::Deflection)],
            displacements[dof_index(element.i, Dof::Rotation)],
            displacements[dof_index(element.j, Dof::Deflection)],
            displacements[dof_index(element.j, Dof::Rotation)],
        );

        // End forces q = ke·ue - fe; q[0] is the left-end shear (upward
        // positive) and q[1] the left-end moment (CCW positive), so the
        // sagging-positive left moment is -q[1].
        let q = element.stiffness() * ue - element.equivalent_loads();
        let v0 = q[0];
        let m0 = -q[1];

        let length = element.length();
        let first = if diagram.is_empty() { 0 } else { 1 };
        for k in first..=divisions {
            let xl = length * k as f64 / divisions as f64;
            let (dist_shear, dist_moment) = distributed_contribution(element, xl);
            let (point_shear, point_moment) = point_contribution(element, xl);

            diagram.push(DiagramPoint {
                x: element.x_start + xl,
                shear: v0 + dist_shear + point_shear,
                moment: m0 + v0 * xl + dist_moment + point_moment,
            });
        }
    }
    diagram
}

/// Cumulative shear and first-moment contributions of the distributed
/// loads over the local interval [0, xl]
fn distributed_contribution(element: &Element, xl: f64) -> (f64, f64) {
    if xl <= 0.0 {
        return (0.0, 0.0);
    }
    let n = SHEAR_INTEGRATION_STEPS;
    let h = xl / n as f64;
    let mut shear = 0.0;
    let mut moment = 0.0;
    for k in 0..=n {
        let s = k as f64 * h;
        let q = element.distributed_intensity_at(element.x_start + s);
        let weight = if k == 0 || k == n { 0.5 } else { 1.0 };
        shear += weight * q * h;
        moment += weight * q * (xl - s) * h;
    }
    (shear, moment)
}

/// Shear and moment contributions of the point loads at or left of the
/// local position xl
fn point_contribution(element: &Element, xl: f64) -> (f64, f64) {
    let x = element.x_start + xl;
    let mut shear = 0.0;
    let mut moment = 0.0;
    for load in &element.loads {
        if let Load::Point { x: xp, p } = *load {
            if xp < element.x_start - POSITION_TOLERANCE || xp > x + POSITION_TOLERANCE {
                continue;
            }
            let p_internal = -p;
            shear += p_internal;
            moment += p_internal * (xl - (xp - element.x_start));
        }
    }
    (shear, moment)
}
