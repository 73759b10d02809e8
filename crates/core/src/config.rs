//! Game configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::pieces::Side;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name of the player starting on rows 0-1.
    pub red_name: String,
    /// Display name of the player starting on rows 6-7.
    pub green_name: String,
    pub first_to_move: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            red_name: "Red".to_string(),
            green_name: "Green".to_string(),
            first_to_move: Side::Green,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        let red = self.red_name.trim();
        let green = self.green_name.trim();
        if red.is_empty() || green.is_empty() {
            return Err(Error::Config("player names must not be empty".to_string()));
        }
        if red == green {
            return Err(Error::Config(format!(
                "both players are named '{}'",
                red
            )));
        }
        Ok(())
    }

    pub fn name_of(&self, side: Side) -> &str {
        match side {
            Side::Red => &self.red_name,
            Side::Green => &self.green_name,
        }
    }
}
