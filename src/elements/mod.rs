//! Beam model building blocks

mod material;
mod section;
mod support;

pub use material::Material;
pub use section::Section;
pub use support::{Support, SupportKind};
