use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::catalog::{Category, Video};
use crate::config::Config;
use crate::constants::constants;
use crate::theme::{THEMES, Theme};

// --- Modes ---

/// Which control currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
  /// Typing in the search field.
  Search,
  /// Moving along the category chip bar.
  Chips,
  /// Navigating the video card grid.
  Grid,
}

// --- App State ---

pub struct App {
  pub mode: AppMode,
  pub theme_index: usize,
  /// Fixed after generation; insertion order is generation order.
  pub videos: Vec<Video>,
  pub selected_category: Category,
  /// Highlighted chip while navigating the chip bar.
  pub chip_cursor: usize,
  pub query: String,
  pub cursor_position: usize,
  pub input_scroll: usize,
  /// Indices into `videos` that survive the category + text filter.
  /// When no filter is active, contains all indices.
  pub filtered_indices: Vec<usize>,
  /// Selection within `filtered_indices`.
  pub selected_card: usize,
  /// First visible card row; kept in range by the renderer.
  pub grid_scroll: usize,
  /// Cards per row, written by the renderer each frame so key handling can
  /// translate vertical movement. Always ≥ 1 once a frame has been drawn.
  pub grid_columns: usize,
  /// Transient "playing" pulse: catalog index + start instant.
  /// Purely cosmetic and self-reverting; re-triggering just restarts it.
  pub playing: Option<(usize, Instant)>,
  /// Pending debounced filter recompute. Replaced on every keystroke,
  /// fired (and cleared) by `tick` once the quiet period elapses.
  debounce_deadline: Option<Instant>,
  pub should_quit: bool,
}

impl App {
  pub fn new(videos: Vec<Video>, theme_index: usize) -> Self {
    let filtered_indices = (0..videos.len()).collect();
    Self {
      mode: AppMode::Search,
      theme_index,
      videos,
      selected_category: Category::All,
      chip_cursor: 0,
      query: String::new(),
      cursor_position: 0,
      input_scroll: 0,
      filtered_indices,
      selected_card: 0,
      grid_scroll: 0,
      grid_columns: 1,
      playing: None,
      debounce_deadline: None,
      should_quit: false,
    }
  }

  pub fn theme(&self) -> &'static Theme {
    // Safety: theme_index is always bounded by modular arithmetic in toggle_theme()
    // and by theme::index_of on initialization.
    &THEMES[self.theme_index]
  }

  /// Flip light↔dark, persist the new name. Re-applying the resulting theme
  /// is a no-op: the index fully determines the visible state.
  pub fn toggle_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    info!(theme = self.theme().name, "theme toggled");
    self.save_config();
  }

  /// The preferences snapshot that `save_config` persists.
  pub fn config(&self) -> Config {
    Config { theme_name: Some(self.theme().name.to_string()) }
  }

  fn save_config(&self) {
    self.config().save();
  }

  // --- Filter pipeline ---

  /// Check one video against a free-text query: case-insensitive substring
  /// match on title, channel, or category label. Empty query matches all.
  pub fn matches_query(video: &Video, query: &str) -> bool {
    if query.is_empty() {
      return true;
    }
    let needle = query.to_lowercase();
    video.title.to_lowercase().contains(&needle)
      || video.channel.to_lowercase().contains(&needle)
      || video.category.label().to_lowercase().contains(&needle)
  }

  /// Rebuild `filtered_indices` from the catalog, the selected category, and
  /// the trimmed query. Order-preserving: the result is always a subsequence
  /// of the generation order. Clamps the card selection to the new range.
  pub fn recompute_filter(&mut self) {
    let needle = self.query.trim();
    self.filtered_indices = self
      .videos
      .iter()
      .enumerate()
      .filter(|(_, v)| self.selected_category == Category::All || v.category == self.selected_category)
      .filter(|(_, v)| Self::matches_query(v, needle))
      .map(|(i, _)| i)
      .collect();

    if self.selected_card >= self.filtered_indices.len() {
      self.selected_card = self.filtered_indices.len().saturating_sub(1);
    }
    self.grid_scroll = 0;
  }

  /// Select a category chip and re-derive the visible subset.
  pub fn set_category(&mut self, category: Category) {
    debug!(category = category.label(), "category selected");
    self.selected_category = category;
    self.recompute_filter();
  }

  // --- Debounce ---

  /// (Re)schedule the debounced filter recompute. Called on every search
  /// keystroke; the single deadline is replaced, coalescing bursts into one
  /// recompute after the quiet period.
  pub fn schedule_debounce(&mut self) {
    self.debounce_deadline = Some(Instant::now() + Duration::from_millis(constants().debounce_ms));
  }

  /// Apply the search text immediately, cancelling any pending debounce.
  pub fn apply_search_now(&mut self) {
    self.debounce_deadline = None;
    debug!(query = %self.query.trim(), "search applied");
    self.recompute_filter();
  }

  /// Drive poll-checked timers: fire an elapsed debounce, expire the pulse.
  pub fn tick(&mut self) {
    if let Some(deadline) = self.debounce_deadline
      && Instant::now() >= deadline
    {
      self.debounce_deadline = None;
      self.recompute_filter();
    }
    if let Some((_, started)) = self.playing
      && started.elapsed() >= Duration::from_millis(constants().pulse_ms)
    {
      self.playing = None;
    }
  }

  // --- Card interaction ---

  /// Start the transient "playing" pulse on the selected card. No navigation
  /// happens; the pulse self-reverts via `tick`.
  pub fn start_pulse(&mut self) {
    if let Some(&idx) = self.filtered_indices.get(self.selected_card) {
      debug!(id = %self.videos[idx].id, "card activated");
      self.playing = Some((idx, Instant::now()));
    }
  }

  /// Whether the catalog entry at `idx` is currently pulsing.
  pub fn is_pulsing(&self, idx: usize) -> bool {
    self.playing.is_some_and(|(playing_idx, _)| playing_idx == idx)
  }

  /// Jump focus to the first rendered card, when one exists.
  pub fn focus_first_card(&mut self) {
    if !self.filtered_indices.is_empty() {
      self.mode = AppMode::Grid;
      self.selected_card = 0;
      self.grid_scroll = 0;
    }
  }

  pub fn move_card_horizontal(&mut self, delta: isize) {
    let count = self.filtered_indices.len();
    if count == 0 {
      return;
    }
    let target = self.selected_card as isize + delta;
    self.selected_card = target.clamp(0, count as isize - 1) as usize;
  }

  pub fn move_card_vertical(&mut self, delta: isize) {
    let count = self.filtered_indices.len();
    if count == 0 {
      return;
    }
    let columns = self.grid_columns.max(1) as isize;
    let target = self.selected_card as isize + delta * columns;
    if (0..count as isize).contains(&target) {
      self.selected_card = target as usize;
    } else if delta > 0 && self.selected_card / (columns as usize) < (count - 1) / columns as usize {
      // Partial last row: land on its final card.
      self.selected_card = count - 1;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::generate_videos;

  fn make_video(title: &str, channel: &str, category: Category) -> Video {
    Video {
      id: "0-test".to_string(),
      title: title.to_string(),
      channel: channel.to_string(),
      category,
      views: 1_000,
      days_ago: 3,
      thumb_url: String::new(),
      avatar_url: String::new(),
      duration: "3:05".to_string(),
    }
  }

  fn test_app() -> App {
    let videos = vec![
      make_video("Epic Boss Fight #1", "PixelForge", Category::Gaming),
      make_video("One Pot Pasta Night #2", "Mise en Place", Category::Cooking),
      make_video("Speedrun Record #3", "PixelForge", Category::Gaming),
      make_video("Synthwave Mix #4", "Fret Theory", Category::Music),
    ];
    App::new(videos, 0)
  }

  // --- matches_query ---

  #[test]
  fn matches_query_empty_matches_all() {
    let video = make_video("Anything", "Someone", Category::Tech);
    assert!(App::matches_query(&video, ""));
  }

  #[test]
  fn matches_query_title_channel_category() {
    let video = make_video("Epic Boss Fight", "PixelForge", Category::Gaming);
    assert!(App::matches_query(&video, "boss"));
    assert!(App::matches_query(&video, "PIXEL"));
    assert!(App::matches_query(&video, "gaming"));
    assert!(!App::matches_query(&video, "cooking"));
  }

  // --- recompute_filter ---

  #[test]
  fn filter_defaults_to_all_in_order() {
    let app = test_app();
    assert_eq!(app.filtered_indices, vec![0, 1, 2, 3]);
  }

  #[test]
  fn filter_by_category_preserves_order() {
    let mut app = test_app();
    app.set_category(Category::Gaming);
    assert_eq!(app.filtered_indices, vec![0, 2]);
    for &i in &app.filtered_indices {
      assert_eq!(app.videos[i].category, Category::Gaming);
    }
  }

  #[test]
  fn filter_combines_category_and_query() {
    let mut app = test_app();
    app.set_category(Category::Gaming);
    app.query = "  SPEEDRUN ".to_string();
    app.apply_search_now();
    assert_eq!(app.filtered_indices, vec![2]);
  }

  #[test]
  fn filter_is_idempotent() {
    let mut app = test_app();
    app.set_category(Category::Gaming);
    app.query = "pixel".to_string();
    app.apply_search_now();
    let first = app.filtered_indices.clone();
    app.recompute_filter();
    assert_eq!(app.filtered_indices, first);
  }

  #[test]
  fn filter_no_match_is_empty_and_clamps_selection() {
    let mut app = test_app();
    app.selected_card = 3;
    app.query = "xyz-no-match".to_string();
    app.apply_search_now();
    assert!(app.filtered_indices.is_empty());
    assert_eq!(app.selected_card, 0);
  }

  #[test]
  fn filter_never_mutates_catalog() {
    let mut app = test_app();
    let titles: Vec<String> = app.videos.iter().map(|v| v.title.clone()).collect();
    app.set_category(Category::Music);
    app.query = "mix".to_string();
    app.apply_search_now();
    assert_eq!(app.videos.len(), 4);
    assert!(app.videos.iter().map(|v| &v.title).eq(titles.iter()));
  }

  #[test]
  fn filter_over_generated_catalog_is_subset() {
    let mut app = App::new(generate_videos(36), 0);
    app.set_category(Category::Gaming);
    assert!(app.filtered_indices.len() <= 36);
    assert!(app.filtered_indices.windows(2).all(|w| w[0] < w[1]));
  }

  // --- theme ---

  #[test]
  fn toggle_theme_flips_and_snapshot_matches() {
    let mut app = test_app();
    assert_eq!(app.theme().name, "light");
    app.toggle_theme();
    assert_eq!(app.theme().name, "dark");
    assert_eq!(app.config().theme_name.as_deref(), Some("dark"));
    app.toggle_theme();
    assert_eq!(app.theme().name, "light");
    assert_eq!(app.config().theme_name.as_deref(), Some("light"));
  }

  // --- timers ---

  #[test]
  fn debounce_fires_after_deadline() {
    let mut app = test_app();
    app.query = "pasta".to_string();
    app.schedule_debounce();
    // Not yet elapsed: the derived subset is untouched.
    app.tick();
    assert_eq!(app.filtered_indices.len(), 4);

    let Some(past) = Instant::now().checked_sub(Duration::from_millis(constants().debounce_ms + 1)) else { return };
    app.debounce_deadline = Some(past);
    app.tick();
    assert_eq!(app.filtered_indices, vec![1]);
  }

  #[test]
  fn pulse_sets_and_expires() {
    let mut app = test_app();
    app.selected_card = 2;
    app.start_pulse();
    assert!(app.is_pulsing(2));
    assert!(!app.is_pulsing(0));
    app.tick();
    assert!(app.is_pulsing(2), "fresh pulse must survive a tick");

    let Some(past) = Instant::now().checked_sub(Duration::from_millis(constants().pulse_ms + 1)) else { return };
    app.playing = Some((2, past));
    app.tick();
    assert!(app.playing.is_none());
  }

  #[test]
  fn pulse_on_empty_filter_is_noop() {
    let mut app = test_app();
    app.query = "xyz-no-match".to_string();
    app.apply_search_now();
    app.start_pulse();
    assert!(app.playing.is_none());
  }

  // --- navigation ---

  #[test]
  fn focus_first_card_requires_results() {
    let mut app = test_app();
    app.selected_card = 3;
    app.focus_first_card();
    assert_eq!(app.mode, AppMode::Grid);
    assert_eq!(app.selected_card, 0);

    app.mode = AppMode::Search;
    app.query = "xyz-no-match".to_string();
    app.apply_search_now();
    app.focus_first_card();
    assert_eq!(app.mode, AppMode::Search, "no cards, focus stays put");
  }

  #[test]
  fn card_movement_clamps_to_grid() {
    let mut app = test_app();
    app.grid_columns = 2;
    app.move_card_horizontal(-1);
    assert_eq!(app.selected_card, 0);
    app.move_card_vertical(1);
    assert_eq!(app.selected_card, 2);
    app.move_card_horizontal(1);
    assert_eq!(app.selected_card, 3);
    app.move_card_vertical(1);
    assert_eq!(app.selected_card, 3);
    app.move_card_vertical(-1);
    assert_eq!(app.selected_card, 1);
  }
}
