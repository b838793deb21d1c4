//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for beam analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity in MPa (N/mm²)
    pub ec: f64,
}

impl Material {
    /// Create a new material with the given elastic modulus
    pub fn new(ec: f64) -> Self {
        Self { ec }
    }

    /// Typical normal-weight concrete (Ec = 25000 MPa)
    pub fn concrete() -> Self {
        Self { ec: 25_000.0 }
    }

    /// Estimate the concrete modulus from compressive strength using the
    /// ACI expression Ec = 4700·√f'c, with f'c in MPa
    pub fn from_compressive_strength(fc: f64) -> Self {
        Self {
            ec: 4700.0 * fc.sqrt(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::concrete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_concrete_modulus() {
        let mat = Material::concrete();
        assert_eq!(mat.ec, 25_000.0);
    }

    #[test]
    fn test_modulus_from_strength() {
        let mat = Material::from_compressive_strength(25.0);
        assert_relative_eq!(mat.ec, 23_500.0, epsilon = 1e-9);
    }
}
