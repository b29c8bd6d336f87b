//! The two-state (light/dark) visual theme. Each `Theme` names a color per
//! UI role; the active theme is selected by index into `THEMES` and its name
//! is what gets persisted in the preferences file.

use ratatui::style::Color;

pub struct Theme {
  pub name: &'static str,
  /// Icon shown on the theme toggle hint (what pressing the toggle switches to).
  pub toggle_icon: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub muted: Color,
  pub accent: Color,
  pub border: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub chip_fg: Color,
  pub chip_active_fg: Color,
  pub chip_active_bg: Color,
  pub thumb_bg: Color,
  pub thumb_fg: Color,
  pub badge_fg: Color,
  pub badge_bg: Color,
  pub key_fg: Color,
  pub key_bg: Color,
}

pub const THEMES: [Theme; 2] = [
  Theme {
    name: "light",
    toggle_icon: "🌙",
    bg: Color::Rgb(250, 250, 248),
    fg: Color::Rgb(32, 33, 36),
    muted: Color::Rgb(112, 117, 122),
    accent: Color::Rgb(197, 34, 31),
    border: Color::Rgb(204, 204, 200),
    highlight_fg: Color::Rgb(250, 250, 248),
    highlight_bg: Color::Rgb(197, 34, 31),
    chip_fg: Color::Rgb(60, 64, 67),
    chip_active_fg: Color::Rgb(250, 250, 248),
    chip_active_bg: Color::Rgb(32, 33, 36),
    thumb_bg: Color::Rgb(226, 227, 225),
    thumb_fg: Color::Rgb(138, 140, 138),
    badge_fg: Color::Rgb(250, 250, 248),
    badge_bg: Color::Rgb(32, 33, 36),
    key_fg: Color::Rgb(250, 250, 248),
    key_bg: Color::Rgb(112, 117, 122),
  },
  Theme {
    name: "dark",
    toggle_icon: "☀",
    bg: Color::Rgb(15, 15, 15),
    fg: Color::Rgb(241, 241, 241),
    muted: Color::Rgb(170, 170, 170),
    accent: Color::Rgb(255, 68, 68),
    border: Color::Rgb(63, 63, 63),
    highlight_fg: Color::Rgb(15, 15, 15),
    highlight_bg: Color::Rgb(255, 68, 68),
    chip_fg: Color::Rgb(209, 209, 209),
    chip_active_fg: Color::Rgb(15, 15, 15),
    chip_active_bg: Color::Rgb(241, 241, 241),
    thumb_bg: Color::Rgb(39, 39, 39),
    thumb_fg: Color::Rgb(120, 120, 120),
    badge_fg: Color::Rgb(241, 241, 241),
    badge_bg: Color::Rgb(30, 30, 30),
    key_fg: Color::Rgb(15, 15, 15),
    key_bg: Color::Rgb(170, 170, 170),
  },
];

/// Resolve a persisted theme name to its index in `THEMES`.
/// Unknown or missing names fall back to light (index 0).
pub fn index_of(name: &str) -> usize {
  THEMES.iter().position(|t| t.name == name).unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index_of_known_names() {
    assert_eq!(index_of("light"), 0);
    assert_eq!(index_of("dark"), 1);
  }

  #[test]
  fn index_of_unknown_defaults_to_light() {
    assert_eq!(index_of("solarized"), 0);
    assert_eq!(index_of(""), 0);
    assert_eq!(THEMES[index_of("nope")].name, "light");
  }
}
