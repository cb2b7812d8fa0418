// src/config.rs

use crate::error::ConfigError;
use crate::interactions::{DRAG_SENSITIVITY, SPIN_RATE};
use crate::model::Rgb;
use crate::rendering::scene::{POSITION_SCALE, VIEW_MARGIN};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- ViewConfig ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
  /// Angstrom -> renderer units
  pub position_scale: f64,
  pub view_margin: f64,
  /// rad/s while idle
  pub spin_rate: f64,
  pub drag_sensitivity: f64,
  /// Render at the display's backing scale instead of 1:1
  pub high_resolution: bool,
  pub background: Rgb,
}

impl Default for ViewConfig {
  fn default() -> Self {
    Self {
      position_scale: POSITION_SCALE,
      view_margin: VIEW_MARGIN,
      spin_rate: SPIN_RATE,
      drag_sensitivity: DRAG_SENSITIVITY,
      high_resolution: false,
      background: Rgb::BLACK,
    }
  }
}

impl ViewConfig {
  /// Replaces values the renderer cannot use with their defaults.
  pub fn sanitized(mut self) -> Self {
    let defaults = Self::default();
    let positive = [
      ("position_scale", &mut self.position_scale, defaults.position_scale),
      ("view_margin", &mut self.view_margin, defaults.view_margin),
      ("drag_sensitivity", &mut self.drag_sensitivity, defaults.drag_sensitivity),
    ];
    for (name, value, default) in positive {
      if !(value.is_finite() && *value > 0.0) {
        log::warn!("Config view.{} = {} is unusable, using {}", name, value, default);
        *value = default;
      }
    }
    if !self.spin_rate.is_finite() {
      log::warn!("Config view.spin_rate = {} is unusable, using {}", self.spin_rate, defaults.spin_rate);
      self.spin_rate = defaults.spin_rate;
    }
    let Rgb { r, g, b } = self.background;
    if ![r, g, b].iter().all(|c| c.is_finite()) {
      log::warn!("Config view.background is not a color, using black");
      self.background = defaults.background;
    }
    self
  }
}

// --- WindowConfig ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
  pub width: i32,
  pub height: i32,
}

impl Default for WindowConfig {
  fn default() -> Self {
    Self {
      width: 800,
      height: 600,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub view: ViewConfig,

  #[serde(default)]
  pub window: WindowConfig,
}

impl Config {
  /// Loads from the platform config dir (e.g. ~/.config/molspin/settings.json),
  /// falling back to defaults.
  pub fn load() -> Self {
    let path = Self::get_path();
    if !path.exists() {
      log::info!("No config found. Using defaults.");
      return Self::default();
    }

    match Self::load_from(&path) {
      Ok(cfg) => {
        log::info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        log::warn!("Error reading config {:?}: {}. Using defaults.", path, e);
        Self::default()
      }
    }
  }

  pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
    let reader = BufReader::new(File::open(path)?);
    let mut cfg: Self = serde_json::from_reader(reader)?;
    cfg.view = cfg.view.sanitized();
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    let path = Self::get_path();
    self.save_to(&path)?;
    log::info!("Config saved to {:?}", path);
    Ok(())
  }

  pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  pub fn get_path() -> PathBuf {
    match ProjectDirs::from("org", "molspin", "molspin") {
      Some(proj) => proj.config_dir().join("settings.json"),
      None => PathBuf::from("settings.json"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_renderer_constants() {
    let cfg = Config::default();
    assert_eq!(cfg.view.position_scale, 75.0);
    assert_eq!(cfg.view.view_margin, 2.5);
    assert_eq!(cfg.view.spin_rate, 1.0);
    assert_eq!(cfg.view.drag_sensitivity, 4.0);
    assert!(!cfg.view.high_resolution);
    assert_eq!(cfg.window.width, 800);
  }

  #[test]
  fn partial_json_fills_in_defaults() {
    let cfg: Config = serde_json::from_str(r#"{ "view": { "spin_rate": 0.5 } }"#).unwrap();
    assert_eq!(cfg.view.spin_rate, 0.5);
    assert_eq!(cfg.view.position_scale, 75.0);
    assert_eq!(cfg.window, WindowConfig::default());
  }

  #[test]
  fn save_and_reload() {
    let dir = std::env::temp_dir().join(format!("molspin-config-{}", std::process::id()));
    let path = dir.join("settings.json");

    let mut cfg = Config::default();
    cfg.view.background = Rgb::new(0.1, 0.2, 0.3);
    cfg.window.height = 480;
    cfg.save_to(&path).unwrap();

    let back = Config::load_from(&path).unwrap();
    assert_eq!(back, cfg);
    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn unusable_view_values_fall_back_to_defaults() {
    let dir = std::env::temp_dir().join(format!("molspin-odd-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    fs::write(
      &path,
      r#"{ "view": { "view_margin": 0, "position_scale": -3, "drag_sensitivity": 2.5, "spin_rate": -0.5 } }"#,
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.view.view_margin, 2.5);
    assert_eq!(cfg.view.position_scale, 75.0);
    // usable values are kept, including a reversed spin
    assert_eq!(cfg.view.drag_sensitivity, 2.5);
    assert_eq!(cfg.view.spin_rate, -0.5);
    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn sanitizing_rejects_non_finite_values() {
    let view = ViewConfig {
      drag_sensitivity: f64::NAN,
      spin_rate: f64::INFINITY,
      background: Rgb::new(f64::NAN, 0.0, 0.0),
      ..ViewConfig::default()
    }
    .sanitized();
    assert_eq!(view, ViewConfig::default());
  }

  #[test]
  fn malformed_file_is_a_parse_error() {
    let dir = std::env::temp_dir().join(format!("molspin-bad-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    let _ = fs::remove_dir_all(&dir);
  }
}
