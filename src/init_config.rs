// init_config.rs
// Loads optional force and demo-loop settings from collide.toml.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub collide: Option<CollideSection>,
    pub layout: Option<LayoutSection>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CollideSection {
    /// Fixed body radius. The programmatic API also accepts a per-body
    /// accessor; a file can only express the constant case.
    pub radius: Option<f32>,
    pub strength: Option<f32>,
    pub iterations: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutSection {
    pub bodies: Option<usize>,
    pub ticks: Option<usize>,
    /// Fraction of velocity the host keeps after committing a tick.
    pub velocity_decay: Option<f32>,
    pub seed: Option<u64>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("collide.toml")
    }
}
