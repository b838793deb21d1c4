//! Transverse load types
//!
//! Magnitudes follow the user convention: positive acts downward. The sign
//! flip into the internal upward-positive convention happens when element
//! load vectors are formed, not here.

use serde::{Deserialize, Serialize};

use crate::mesh::POSITION_TOLERANCE;

/// A transverse load on the beam, downward positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Load {
    /// Concentrated force P at position x
    Point { x: f64, p: f64 },
    /// Uniformly distributed intensity w over [x1, x2]
    Uniform { x1: f64, x2: f64, w: f64 },
    /// Linearly varying intensity from w1 at x1 to w2 at x2
    Trapezoidal { x1: f64, x2: f64, w1: f64, w2: f64 },
}

impl Load {
    /// Concentrated force in N at position x
    pub fn point(x: f64, p: f64) -> Self {
        Load::Point { x, p }
    }

    /// Uniformly distributed load in N/mm over [x1, x2]
    pub fn uniform(x1: f64, x2: f64, w: f64) -> Self {
        Load::Uniform { x1, x2, w }
    }

    /// Linearly varying load in N/mm, w1 at x1 through w2 at x2
    pub fn trapezoidal(x1: f64, x2: f64, w1: f64, w2: f64) -> Self {
        Load::Trapezoidal { x1, x2, w1, w2 }
    }

    /// Append the coordinates that must become mesh nodes
    pub fn push_breakpoints(&self, xs: &mut Vec<f64>) {
        match *self {
            Load::Point { x, .. } => xs.push(x),
            Load::Uniform { x1, x2, .. } | Load::Trapezoidal { x1, x2, .. } => {
                xs.push(x1);
                xs.push(x2);
            }
        }
    }

    /// Distributed intensity at x in N/mm, downward positive.
    ///
    /// Zero outside the coverage interval, for point loads, and for
    /// degenerate or inverted intervals.
    pub fn intensity_at(&self, x: f64) -> f64 {
        match *self {
            Load::Point { .. } => 0.0,
            Load::Uniform { x1, x2, w } => {
                if x >= x1 - POSITION_TOLERANCE && x <= x2 + POSITION_TOLERANCE {
                    w
                } else {
                    0.0
                }
            }
            Load::Trapezoidal { x1, x2, w1, w2 } => {
                let span = x2 - x1;
                if span.abs() <= POSITION_TOLERANCE {
                    return 0.0;
                }
                if x >= x1 - POSITION_TOLERANCE && x <= x2 + POSITION_TOLERANCE {
                    let t = (x - x1) / span;
                    w1 + (w2 - w1) * t
                } else {
                    0.0
                }
            }
        }
    }

    /// Total applied force in N, downward positive.
    ///
    /// Inverted distributed intervals (x2 ≤ x1) carry no load.
    pub fn total_force(&self) -> f64 {
        match *self {
            Load::Point { p, .. } => p,
            Load::Uniform { x1, x2, w } => {
                if x2 > x1 {
                    w * (x2 - x1)
                } else {
                    0.0
                }
            }
            Load::Trapezoidal { x1, x2, w1, w2 } => {
                if x2 > x1 {
                    (w1 + w2) / 2.0 * (x2 - x1)
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trapezoidal_interpolation() {
        let load = Load::trapezoidal(1000.0, 3000.0, 10.0, 30.0);
        assert_relative_eq!(load.intensity_at(1000.0), 10.0, epsilon = 1e-9);
        assert_relative_eq!(load.intensity_at(2000.0), 20.0, epsilon = 1e-9);
        assert_relative_eq!(load.intensity_at(3000.0), 30.0, epsilon = 1e-9);
        assert_eq!(load.intensity_at(4000.0), 0.0);
    }

    #[test]
    fn test_uniform_coverage() {
        let load = Load::uniform(500.0, 1500.0, 8.0);
        assert_eq!(load.intensity_at(499.0), 0.0);
        assert_eq!(load.intensity_at(1000.0), 8.0);
        assert_eq!(load.intensity_at(1501.0), 0.0);
        assert_relative_eq!(load.total_force(), 8_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverted_interval_carries_no_load() {
        let load = Load::uniform(4000.0, 1000.0, 8.0);
        assert_eq!(load.intensity_at(2000.0), 0.0);
        assert_eq!(load.total_force(), 0.0);

        let trap = Load::trapezoidal(2000.0, 2000.0, 5.0, 10.0);
        assert_eq!(trap.intensity_at(2000.0), 0.0);
        assert_eq!(trap.total_force(), 0.0);
    }

    #[test]
    fn test_breakpoints() {
        let mut xs = Vec::new();
        Load::point(1500.0, 20_000.0).push_breakpoints(&mut xs);
        Load::uniform(0.0, 3000.0, 10.0).push_breakpoints(&mut xs);
        assert_eq!(xs, vec![1500.0, 0.0, 3000.0]);
    }

    #[test]
    fn test_serde_tagging() {
        let load = Load::point(2500.0, 50_000.0);
        let json = serde_json::to_string(&load).unwrap();
        assert!(json.contains("\"type\":\"point\""));
        let back: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(back, load);
    }
}
