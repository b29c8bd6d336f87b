use ratatui::crossterm::event::{self, KeyCode, KeyModifiers};

use crate::app::{App, AppMode};
use crate::catalog::Category;

// --- Helpers ---

/// Convert a char index to a byte offset within the string.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
  s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

/// Position the chip cursor on the currently selected category when the chip
/// bar takes focus.
fn enter_chips(app: &mut App) {
  app.chip_cursor = Category::CHIPS.iter().position(|c| *c == app.selected_category).unwrap_or(0);
  app.mode = AppMode::Chips;
}

// --- Event Handling ---

pub fn handle_key_event(app: &mut App, key: event::KeyEvent) {
  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
    app.should_quit = true;
    return;
  }

  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
    app.toggle_theme();
    return;
  }

  match app.mode {
    AppMode::Search => handle_search_key(app, key),
    AppMode::Chips => handle_chips_key(app, key),
    AppMode::Grid => handle_grid_key(app, key),
  }
}

fn handle_search_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Enter => {
      // Immediate apply; focus stays in the field (the "search button" path).
      app.apply_search_now();
    }
    KeyCode::Char(c) => {
      let byte_idx = char_to_byte_index(&app.query, app.cursor_position);
      app.query.insert(byte_idx, c);
      app.cursor_position += 1;
      app.schedule_debounce();
    }
    KeyCode::Backspace => {
      if app.cursor_position > 0 {
        app.cursor_position -= 1;
        let byte_idx = char_to_byte_index(&app.query, app.cursor_position);
        app.query.remove(byte_idx);
        app.schedule_debounce();
      }
    }
    KeyCode::Delete => {
      if app.cursor_position < app.query.chars().count() {
        let byte_idx = char_to_byte_index(&app.query, app.cursor_position);
        app.query.remove(byte_idx);
        app.schedule_debounce();
      }
    }
    KeyCode::Left => {
      app.cursor_position = app.cursor_position.saturating_sub(1);
    }
    KeyCode::Right => {
      if app.cursor_position < app.query.chars().count() {
        app.cursor_position += 1;
      }
    }
    KeyCode::Home => {
      app.cursor_position = 0;
    }
    KeyCode::End => {
      app.cursor_position = app.query.chars().count();
    }
    KeyCode::Tab => {
      enter_chips(app);
    }
    KeyCode::Down => {
      if !app.filtered_indices.is_empty() {
        app.mode = AppMode::Grid;
      }
    }
    KeyCode::Esc => {
      if !app.query.is_empty() {
        app.query.clear();
        app.cursor_position = 0;
        app.input_scroll = 0;
        app.apply_search_now();
      } else if !app.filtered_indices.is_empty() {
        app.mode = AppMode::Grid;
      } else {
        app.should_quit = true;
      }
    }
    _ => {}
  }
}

fn handle_chips_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Left | KeyCode::Char('h') => {
      app.chip_cursor = app.chip_cursor.saturating_sub(1);
    }
    KeyCode::Right | KeyCode::Char('l') => {
      if app.chip_cursor + 1 < Category::CHIPS.len() {
        app.chip_cursor += 1;
      }
    }
    KeyCode::Enter | KeyCode::Char(' ') => {
      app.set_category(Category::CHIPS[app.chip_cursor]);
    }
    KeyCode::Char('f') => {
      app.focus_first_card();
    }
    KeyCode::Char('/') | KeyCode::Up => {
      app.mode = AppMode::Search;
    }
    KeyCode::Tab | KeyCode::Down | KeyCode::Esc => {
      app.mode = AppMode::Grid;
    }
    KeyCode::Char('q') => {
      app.should_quit = true;
    }
    _ => {}
  }
}

fn handle_grid_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Left | KeyCode::Char('h') => {
      app.move_card_horizontal(-1);
    }
    KeyCode::Right | KeyCode::Char('l') => {
      app.move_card_horizontal(1);
    }
    KeyCode::Down | KeyCode::Char('j') => {
      app.move_card_vertical(1);
    }
    KeyCode::Up | KeyCode::Char('k') => {
      app.move_card_vertical(-1);
    }
    KeyCode::Enter | KeyCode::Char(' ') => {
      app.start_pulse();
    }
    KeyCode::Char('f') => {
      app.focus_first_card();
    }
    KeyCode::Char('/') => {
      app.mode = AppMode::Search;
    }
    KeyCode::Char('c') | KeyCode::Tab => {
      enter_chips(app);
    }
    KeyCode::Esc => {
      app.mode = AppMode::Search;
    }
    KeyCode::Char('q') => {
      app.should_quit = true;
    }
    _ => {}
  }
}
