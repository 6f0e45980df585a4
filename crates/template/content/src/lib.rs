//! Data-driven scenario definitions and loaders.
//!
//! This crate reads the inputs a host board would otherwise hand to the
//! measurement core at runtime:
//! - Scenarios: grid, board extent, placed templates and token snapshot (RON)
//! - Measurement configuration: measure style and placement defaults (TOML)
//!
//! All loaders use template-core types directly with serde for deserialization.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{BoardSize, Scenario, ScenarioError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ScenarioLoader};
