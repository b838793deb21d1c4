//! Stateless unit-conversion helpers
//!
//! The engine works in a fixed internal base (mm, N, N·mm, MPa). User-facing
//! values are rescaled around fixed ratio tables before a model is built and
//! after results are read; nothing here carries state.

use serde::{Deserialize, Serialize};

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "m")]
    M,
}

impl LengthUnit {
    fn to_mm(self) -> f64 {
        match self {
            LengthUnit::Mm => 1.0,
            LengthUnit::Cm => 10.0,
            LengthUnit::M => 1000.0,
        }
    }
}

/// Force units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    #[serde(rename = "N")]
    N,
    #[serde(rename = "kN")]
    Kn,
}

impl ForceUnit {
    fn to_n(self) -> f64 {
        match self {
            ForceUnit::N => 1.0,
            ForceUnit::Kn => 1000.0,
        }
    }
}

/// Moment units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentUnit {
    #[serde(rename = "Nmm")]
    Nmm,
    #[serde(rename = "kNm")]
    Knm,
}

impl MomentUnit {
    fn to_nmm(self) -> f64 {
        match self {
            MomentUnit::Nmm => 1.0,
            MomentUnit::Knm => 1_000_000.0,
        }
    }
}

/// Stress units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    #[serde(rename = "Pa")]
    Pa,
    #[serde(rename = "MPa")]
    Mpa,
}

impl StressUnit {
    fn to_pa(self) -> f64 {
        match self {
            StressUnit::Pa => 1.0,
            StressUnit::Mpa => 1_000_000.0,
        }
    }
}

/// Convert a length between units
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.to_mm() / to.to_mm()
}

/// Convert a force between units
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    value * from.to_n() / to.to_n()
}

/// Convert a moment between units
pub fn convert_moment(value: f64, from: MomentUnit, to: MomentUnit) -> f64 {
    value * from.to_nmm() / to.to_nmm()
}

/// Convert a stress between units
pub fn convert_stress(value: f64, from: StressUnit, to: StressUnit) -> f64 {
    value * from.to_pa() / to.to_pa()
}

/// Internal base units of the engine
pub mod internal {
    use super::{ForceUnit, LengthUnit, MomentUnit, StressUnit};

    pub const LENGTH: LengthUnit = LengthUnit::Mm;
    pub const FORCE: ForceUnit = ForceUnit::N;
    pub const MOMENT: MomentUnit = MomentUnit::Nmm;
    pub const STRESS: StressUnit = StressUnit::Mpa;
}
