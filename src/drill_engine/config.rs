use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    error::{DrillError, Result},
    selector::WRONG_PILE_RATE,
};

/// Session settings. Every field has a default, so an empty TOML document is
/// a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Fixed seed for reproducible drills; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    /// Chance of retrying a missed card while unseen cards remain.
    pub wrong_pile_rate: f64,
    /// How long front ends keep a revealed answer on screen.
    pub reveal_delay_ms: u64,
    /// Word sets switched on at start. Empty means "only the first set".
    pub enabled_sets: Vec<String>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            rng_seed: None,
            wrong_pile_rate: WRONG_PILE_RATE,
            reveal_delay_ms: 1000,
            enabled_sets: Vec::new(),
        }
    }
}

impl DrillConfig {
    pub fn seeded(seed: u64) -> Self {
        DrillConfig { rng_seed: Some(seed), ..Default::default() }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: DrillConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.wrong_pile_rate) {
            return Err(DrillError::InvalidRate(self.wrong_pile_rate));
        }
        Ok(())
    }
}
