// src/utils/logger.rs

use env_logger::{Builder, Env};
use log::{Level, SetLoggerError};
use std::io::Write;

/// Installs the process logger. Honors `RUST_LOG`, defaulting to `info`.
pub fn init() -> Result<(), SetLoggerError> {
  Builder::from_env(Env::default().default_filter_or("info"))
    .format(|buf, record| {
      writeln!(buf, "{}  {}", level_icon(record.level()), record.args())
    })
    .try_init()
}

fn level_icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn icons_are_distinct_for_visible_levels() {
    let icons = [Level::Error, Level::Warn, Level::Info, Level::Debug].map(level_icon);
    for (i, a) in icons.iter().enumerate() {
      for b in &icons[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }
}
