// src/error.rs

use thiserror::Error;

/// Reasons the scene builder refuses a molecule.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
  #[error("molecule has no atoms")]
  EmptyMolecule,

  #[error("atom {index} ({symbol}) has a non-finite coordinate")]
  NonFiniteCoordinate { index: usize, symbol: String },

  #[error("element {symbol} has invalid radius {radius}")]
  InvalidRadius { symbol: String, radius: f64 },
}

#[derive(Debug, Error)]
pub enum SurfaceError {
  #[error("drawing surface unavailable: {0}")]
  Unavailable(String),

  #[error("invalid canvas size {width}x{height} (backing scale {backing_scale})")]
  InvalidSize {
    width: f64,
    height: f64,
    backing_scale: f64,
  },

  #[error("snapshot export failed: {0}")]
  Export(String),
}

/// Construction failures of a molecule view. Both are fatal for the view.
#[derive(Debug, Error)]
pub enum ViewError {
  #[error(transparent)]
  Scene(#[from] SceneError),

  #[error(transparent)]
  Surface(#[from] SurfaceError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config i/o: {0}")]
  Io(#[from] std::io::Error),

  #[error("config parse: {0}")]
  Parse(#[from] serde_json::Error),
}
