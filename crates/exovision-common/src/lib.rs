//! exovision-common — Shared types used across all ExoVision crates.

pub mod model;
pub mod record;

// Re-export commonly used types
pub use record::{Classification, Exoplanet, RawRecord};
