use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, BorderType, Padding, Paragraph},
};

use crate::app::{App, AppMode};
use crate::catalog::Category;
use crate::constants::constants;
use crate::format::{format_views, time_ago};
use crate::theme::Theme;

// --- Helpers ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  use unicode_width::UnicodeWidthChar;
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` characters, appending "…" if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
  if s.chars().count() <= max_width {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
  }
}

// --- UI Rendering ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();
  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  let [header_area, input_area, chips_area, main_area, footer_area] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Length(1),
    Constraint::Min(5),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  render_header(frame, theme, header_area);
  render_search(frame, app, input_area);
  render_chips(frame, app, chips_area);
  render_grid(frame, app, main_area);
  render_footer(frame, app, footer_area);
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
  let left = Line::from(Span::styled(" ▶ tubegrid ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)));
  frame.render_widget(left, area);

  let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
  let right = Line::from(Span::styled(&version, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(version.len() as u16), width: version.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

fn render_search(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let border_color = if app.mode == AppMode::Search { theme.accent } else { theme.border };
  let input_block = Block::bordered()
    .title(" Search ")
    .title_style(Style::default().fg(border_color))
    .border_type(BorderType::Rounded)
    .border_style(Style::default().fg(border_color))
    .padding(Padding::horizontal(1));

  if app.query.is_empty() && app.mode != AppMode::Search {
    let hint = Paragraph::new("Search videos…").style(Style::default().fg(theme.muted)).block(input_block);
    frame.render_widget(hint, area);
    return;
  }

  let inner_w = area.width.saturating_sub(4) as usize;
  let cursor_col = display_width(&app.query, app.cursor_position);

  if cursor_col < app.input_scroll {
    app.input_scroll = cursor_col;
  } else if cursor_col >= app.input_scroll + inner_w {
    app.input_scroll = cursor_col.saturating_sub(inner_w) + 1;
  }

  let visible: String = app
    .query
    .chars()
    .scan(0usize, |col, c| {
      let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
      let start = *col;
      *col += w;
      Some((start, *col, c))
    })
    .skip_while(|(_, end, _)| *end <= app.input_scroll)
    .take_while(|(start, _, _)| *start < app.input_scroll + inner_w)
    .map(|(_, _, c)| c)
    .collect();

  let paragraph = Paragraph::new(visible).style(Style::default().fg(theme.fg)).block(input_block);
  frame.render_widget(paragraph, area);

  if app.mode == AppMode::Search {
    let cursor_x = area.x + 2 + (cursor_col - app.input_scroll) as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
  }
}

fn render_chips(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let mut spans: Vec<Span> = vec![Span::raw(" ")];
  for (i, category) in Category::CHIPS.iter().enumerate() {
    let label = format!(" {} ", category.label());
    let style = if *category == app.selected_category {
      Style::default().fg(theme.chip_active_fg).bg(theme.chip_active_bg).add_modifier(Modifier::BOLD)
    } else if app.mode == AppMode::Chips && i == app.chip_cursor {
      Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg)
    } else {
      Style::default().fg(theme.chip_fg)
    };
    spans.push(Span::styled(label, style));
    spans.push(Span::raw(" "));
  }
  frame.render_widget(Line::from(spans), area);

  let count = format!("{}/{} ", app.filtered_indices.len(), app.videos.len());
  let right = Line::from(Span::styled(&count, Style::default().fg(theme.muted)));
  let right_area = Rect { x: area.x + area.width.saturating_sub(count.len() as u16), width: count.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
  if app.filtered_indices.is_empty() {
    render_empty(frame, app.theme(), area);
    return;
  }

  let c = constants();
  let columns = (area.width / c.card_width).max(1) as usize;
  let rows_visible = (area.height / c.card_height).max(1) as usize;
  let total_rows = app.filtered_indices.len().div_ceil(columns);
  app.grid_columns = columns;

  // Keep the selected card's row in view.
  let selected_row = app.selected_card / columns;
  if selected_row < app.grid_scroll {
    app.grid_scroll = selected_row;
  } else if selected_row >= app.grid_scroll + rows_visible {
    app.grid_scroll = selected_row + 1 - rows_visible;
  }
  if app.grid_scroll + rows_visible > total_rows {
    app.grid_scroll = total_rows.saturating_sub(rows_visible);
  }

  for row in 0..rows_visible {
    let grid_row = app.grid_scroll + row;
    if grid_row >= total_rows {
      break;
    }
    for col in 0..columns {
      let slot = grid_row * columns + col;
      let Some(&idx) = app.filtered_indices.get(slot) else { break };
      let x = area.x + col as u16 * c.card_width;
      let card_area = Rect {
        x,
        y: area.y + row as u16 * c.card_height,
        // Clamped so a terminal narrower than one card never overflows the frame.
        width: c.card_width.min(area.right().saturating_sub(x)),
        height: c.card_height,
      };
      render_card(frame, app, idx, slot == app.selected_card, card_area);
    }
  }
}

fn render_card(frame: &mut Frame, app: &App, idx: usize, selected: bool, area: Rect) {
  let theme = app.theme();
  let video = &app.videos[idx];
  let pulsing = app.is_pulsing(idx);

  let border_color = if selected { theme.accent } else { theme.border };
  let block = Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(border_color));
  let inner = block.inner(area);
  frame.render_widget(block, area);
  if inner.width == 0 || inner.height == 0 {
    return;
  }

  let w = inner.width as usize;
  let thumb_style = Style::default().fg(theme.thumb_fg).bg(theme.thumb_bg);
  let blank = " ".repeat(w);

  // 3-line thumbnail placeholder with a centered glyph and a duration badge.
  let glyph = if pulsing { "▶ Playing" } else { "▶" };
  let glyph_style = if pulsing {
    Style::default().fg(theme.accent).bg(theme.thumb_bg).add_modifier(Modifier::BOLD)
  } else {
    thumb_style
  };
  let badge = format!(" {} ", video.duration);
  let badge_pad = " ".repeat(w.saturating_sub(badge.chars().count() + 1));

  let mut lines = vec![
    Line::from(Span::styled(blank.clone(), thumb_style)),
    Line::from(Span::styled(format!("{:^w$}", glyph, w = w), glyph_style)),
    Line::from(vec![
      Span::styled(badge_pad, thumb_style),
      Span::styled(badge, Style::default().fg(theme.badge_fg).bg(theme.badge_bg)),
      Span::styled(" ".to_string(), thumb_style),
    ]),
  ];

  let title_style = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);
  lines.push(Line::from(Span::styled(truncate_str(&video.title, w), title_style)));
  lines.push(Line::from(vec![
    Span::styled("◉ ", Style::default().fg(theme.muted)),
    Span::styled(truncate_str(&video.channel, w.saturating_sub(2)), Style::default().fg(theme.muted)),
  ]));
  let meta = format!("{} • {}", format_views(video.views), time_ago(video.days_ago));
  lines.push(Line::from(Span::styled(truncate_str(&meta, w), Style::default().fg(theme.muted))));

  frame.render_widget(Paragraph::new(lines), inner);
}

fn render_empty(frame: &mut Frame, theme: &Theme, area: Rect) {
  let text = vec![
    Line::from(""),
    Line::from(Span::styled("No videos found", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))),
    Line::from(""),
    Line::from(Span::styled("Try a different search or category.", Style::default().fg(theme.muted))),
  ];
  let paragraph = Paragraph::new(text)
    .alignment(Alignment::Center)
    .block(Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(theme.border)));
  frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let has_cards = !app.filtered_indices.is_empty();
  let keys: Vec<(&str, &str)> = match app.mode {
    AppMode::Search => {
      let mut k = vec![("Enter", "Apply"), ("Tab", "Chips")];
      if has_cards {
        k.push(("↓", "Grid"));
      }
      k.push(("^t", "Theme"));
      k.push(("Esc", "Clear/Quit"));
      k
    }
    AppMode::Chips => {
      vec![("←/→", "Move"), ("Enter", "Select"), ("Tab", "Grid"), ("/", "Search"), ("^t", "Theme")]
    }
    AppMode::Grid => {
      let mut k = vec![("hjkl", "Navigate"), ("Enter", "Play"), ("f", "First")];
      k.push(("/", "Search"));
      k.push(("c", "Chips"));
      k.push(("^t", "Theme"));
      k.push(("q", "Quit"));
      k
    }
  };

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw(" "));
      }
      s
    })
    .collect();

  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} {} ", theme.toggle_icon, theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let right_area = Rect {
    x: area.x + area.width.saturating_sub(theme_label.chars().count() as u16 + 1),
    width: (theme_label.chars().count() as u16 + 1).min(area.width),
    ..area
  };
  frame.render_widget(right, right_area);
}
