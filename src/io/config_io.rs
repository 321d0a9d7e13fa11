use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::model::Config;

/// Platform config file location, e.g. `~/.config/sprig/config.toml` on
/// Linux. None when no home directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sprig").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the user config, falling back to defaults when the file is absent.
/// A malformed file also falls back, with a warning on stderr, so a typo in
/// the config never keeps the list from opening.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    load_config_from(&path)
}

fn load_config_from(path: &std::path::Path) -> Config {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Config::default(),
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: ignoring malformed config {}: {}", path.display(), e);
            Config::default()
        }
    }
}
