//! Linear static analysis pipeline for beam models
//!
//! The pipeline is a pure function of the model: mesh, assemble, reduce by
//! the support constraints, solve, then recover reactions and diagrams.
//! Nothing is cached between invocations, so concurrent calls on separate
//! models are safe.

use log::debug;

use crate::diagram;
use crate::error::{BeamError, BeamResult};
use crate::math::{self, Mat, Vec as DVec};
use crate::mesh::{self, Element, Node};
use crate::model::BeamModel;
use crate::results::{AnalysisResult, NodeResult, SignConvention};

/// Degree of freedom at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dof {
    /// Vertical deflection, upward positive
    Deflection,
    /// Rotation
    Rotation,
}

/// Global index of a node's degree of freedom
pub fn dof_index(node: usize, dof: Dof) -> usize {
    node * 2
        + match dof {
            Dof::Deflection => 0,
            Dof::Rotation => 1,
        }
}

/// Run the full linear analysis on a beam model.
///
/// Returns per-node displacements and reactions together with dense shear
/// and moment diagrams, all tagged with the sign convention. Fails with a
/// typed error on invalid geometry or an under-restrained structure; no
/// partial result is produced.
pub fn analyze(model: &BeamModel) -> BeamResult<AnalysisResult> {
    let (nodes, elements) = mesh::build_mesh(model)?;
    check_stability(&nodes)?;

    let ndof = nodes.len() * 2;
    let mut k_global = Mat::zeros(ndof, ndof);
    let mut f_global = DVec::zeros(ndof);

    for element in &elements {
        let ke = element.stiffness();
        let fe = element.equivalent_loads();
        let dofs = element_dofs(element);
        for a in 0..4 {
            f_global[dofs[a]] += fe[a];
            for b in 0..4 {
                k_global[(dofs[a], dofs[b])] += ke[(a, b)];
            }
        }
    }

    // Fixed/free partition; prescribed displacements are zero
    let mut fixed = vec![false; ndof];
    for (i, node) in nodes.iter().enumerate() {
        if let Some(kind) = node.support {
            if kind.fixes_deflection() {
                fixed[dof_index(i, Dof::Deflection)] = true;
            }
            if kind.fixes_rotation() {
                fixed[dof_index(i, Dof::Rotation)] = true;
            }
        }
    }
    let free: Vec<usize> = (0..ndof).filter(|&d| !fixed[d]).collect();
    debug!("assembled system: {} dofs, {} free", ndof, free.len());

    let n_free = free.len();
    let mut k_ff = Mat::zeros(n_free, n_free);
    let mut f_f = DVec::zeros(n_free);
    for (a, &da) in free.iter().enumerate() {
        f_f[a] = f_global[da];
        for (b, &db) in free.iter().enumerate() {
            k_ff[(a, b)] = k_global[(da, db)];
        }
    }

    let u_f = math::solve_gaussian(&k_ff, &f_f)?;

    let mut u = DVec::zeros(ndof);
    for (a, &da) in free.iter().enumerate() {
        u[da] = u_f[a];
    }

    // Reactions from the full residual R = K·u - F; free entries stay ~0
    let residual = &k_global * &u - &f_global;

    let node_results: Vec<NodeResult> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| NodeResult {
            x: node.x,
            deflection: u[dof_index(i, Dof::Deflection)],
            rotation: u[dof_index(i, Dof::Rotation)],
            reaction_force: residual[dof_index(i, Dof::Deflection)],
            reaction_moment: residual[dof_index(i, Dof::Rotation)],
        })
        .collect();

    let diagram = diagram::build_diagram(&elements, &u, model.diagram_points());

    Ok(AnalysisResult {
        nodes: node_results,
        diagram,
        sign_convention: SignConvention::UserDownPositiveInternalUpPositive,
    })
}

fn element_dofs(element: &Element) -> [usize; 4] {
    [
        dof_index(element.i, Dof::Deflection),
        dof_index(element.i, Dof::Rotation),
        dof_index(element.j, Dof::Deflection),
        dof_index(element.j, Dof::Rotation),
    ]
}

/// Reject models that cannot resist rigid-body motion: a beam needs either
/// one fixed support or vertical restraint at two distinct nodes.
fn check_stability(nodes: &[Node]) -> BeamResult<()> {
    let mut vertical_restraints = 0;
    let mut has_fixed = false;
    for node in nodes {
        if let Some(kind) = node.support {
            if kind.fixes_deflection() {
                vertical_restraints += 1;
            }
            if kind.fixes_rotation() {
                has_fixed = true;
            }
        }
    }
    if has_fixed || vertical_restraints >= 2 {
        Ok(())
    } else {
        Err(BeamError::Unstable(format!(
            "{} vertical restraint(s); a fixed support or two supported nodes are required",
            vertical_restraints
        )))
    }
}
