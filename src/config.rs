//! Persisted user preferences. A single TOML file in the platform config
//! directory holding the theme name; anything missing or unreadable falls
//! back to defaults. Load and save never fail the app.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

const PREFS_FILE: &str = "prefs.toml";

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Config {
  pub theme_name: Option<String>,
}

impl Config {
  pub fn load() -> Self {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "tubegrid") {
      let config_file = proj_dirs.config_dir().join(PREFS_FILE);
      if let Ok(content) = std::fs::read_to_string(config_file)
        && let Ok(config) = toml::from_str(&content)
      {
        return config;
      }
    }
    Self::default()
  }

  pub fn save(&self) {
    let Some(proj_dirs) = ProjectDirs::from("", "", "tubegrid") else { return };
    let config_dir = proj_dirs.config_dir();
    if let Err(e) = std::fs::create_dir_all(config_dir) {
      warn!(err = %e, "config: could not create config dir");
      return;
    }
    let config_file = config_dir.join(PREFS_FILE);
    match toml::to_string(self) {
      Ok(content) => {
        if let Err(e) = std::fs::write(config_file, content) {
          warn!(err = %e, "config: could not write prefs");
        }
      }
      Err(e) => warn!(err = %e, "config: could not serialize prefs"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn theme_name_round_trips_through_toml() {
    let config = Config { theme_name: Some("dark".to_string()) };
    let text = toml::to_string(&config).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back.theme_name.as_deref(), Some("dark"));
  }

  #[test]
  fn missing_key_defaults_to_none() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.theme_name.is_none());
  }
}
