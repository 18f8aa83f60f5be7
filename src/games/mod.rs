//! Game implementations.

pub mod pixel_forge;

pub use pixel_forge::{PixelForge, PixelForgeBuilder};
