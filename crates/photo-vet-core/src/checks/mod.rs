//! Quality check implementations.
//!
//! Four independent checks in the order they run: brightness, sharpness,
//! resolution, file size.

mod brightness;
mod filesize;
mod resolution;
mod sharpness;

pub use brightness::{BrightnessCheck, BrightnessConfig};
pub use filesize::{FileSizeCheck, FileSizeConfig};
pub use resolution::{ResolutionCheck, ResolutionConfig};
pub use sharpness::{mean_edge_strength, SharpnessCheck, SharpnessConfig};
