//! Rectangular cross-section properties

use serde::{Deserialize, Serialize};

/// Rectangular cross-section of a beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Width in mm
    pub b: f64,
    /// Overall height in mm
    pub h: f64,
    /// Concrete cover to the reinforcement layer in mm
    pub cover: f64,
}

impl Section {
    /// Create a new rectangular section
    pub fn new(b: f64, h: f64, cover: f64) -> Self {
        Self { b, h, cover }
    }

    /// Cross-sectional area in mm²
    pub fn area(&self) -> f64 {
        self.b * self.h
    }

    /// Second moment of area about the bending axis, b·h³/12, in mm⁴
    pub fn moment_of_inertia(&self) -> f64 {
        self.b * self.h.powi(3) / 12.0
    }

    /// Effective depth to the reinforcement layer, h − cover, in mm
    pub fn effective_depth(&self) -> f64 {
        self.h - self.cover
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new(250.0, 500.0, 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moment_of_inertia() {
        let section = Section::new(250.0, 500.0, 40.0);
        assert_relative_eq!(
            section.moment_of_inertia(),
            250.0 * 500.0_f64.powi(3) / 12.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_effective_depth() {
        let section = Section::new(300.0, 600.0, 50.0);
        assert_eq!(section.effective_depth(), 550.0);
        assert_eq!(section.area(), 180_000.0);
    }
}
