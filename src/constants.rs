//! Application constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!` so it's always available —
//! no runtime file I/O. Parsed once on first access via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// All tuneable application constants.
#[derive(Debug, Deserialize)]
pub struct Constants {
  // Catalog generation
  pub catalog_size: usize,
  pub title_templates: Vec<String>,
  pub channels: Vec<String>,
  pub views_min: u64,
  pub views_max: u64,
  pub days_ago_max: u32,
  pub duration_min_minutes: u32,
  pub duration_max_minutes: u32,

  // Placeholder image services
  pub thumb_id_max: u32,
  pub thumb_width: u32,
  pub thumb_height: u32,
  pub avatar_id_max: u32,
  pub avatar_size: u32,

  // Timing (milliseconds)
  pub debounce_ms: u64,
  pub pulse_ms: u64,

  // Grid layout (terminal cells)
  pub card_width: u16,
  pub card_height: u16,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; if it's malformed this is a build-time error.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}
