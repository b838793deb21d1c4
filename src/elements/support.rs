//! Support conditions

use serde::{Deserialize, Serialize};

/// Kind of restraint a support applies to the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportKind {
    /// No restraint
    Free,
    /// Vertical translation restrained, rotation free
    Simple,
    /// Vertical translation and rotation restrained
    Fixed,
}

impl SupportKind {
    /// Whether this support restrains vertical deflection
    pub fn fixes_deflection(&self) -> bool {
        matches!(self, SupportKind::Simple | SupportKind::Fixed)
    }

    /// Whether this support restrains rotation
    pub fn fixes_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }
}

/// A support condition at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Position along the beam in mm
    pub x: f64,
    /// Restraint kind
    pub kind: SupportKind,
}

impl Support {
    /// Create a support at the given position
    pub fn new(x: f64, kind: SupportKind) -> Self {
        Self { x, kind }
    }

    /// Simple support: vertical restraint only
    pub fn simple(x: f64) -> Self {
        Self::new(x, SupportKind::Simple)
    }

    /// Fixed (clamped) support: vertical and rotational restraint
    pub fn fixed(x: f64) -> Self {
        Self::new(x, SupportKind::Fixed)
    }

    /// Free end marker: no restraint
    pub fn free(x: f64) -> Self {
        Self::new(x, SupportKind::Free)
    }
}
