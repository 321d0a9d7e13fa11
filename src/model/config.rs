use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from `config.toml` (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Interface language ("en", "zh")
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key-hint footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
