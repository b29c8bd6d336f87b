//! Pure formatting helpers for card metadata: view counts, relative ages,
//! and video durations. No state, no I/O — everything here is unit-testable.

/// Format a raw view count with a B/M/K suffix and one decimal place.
///
/// Thresholds: ≥1e9 → "B", ≥1e6 → "M", ≥1e3 → "K", else the literal integer.
/// Always appends " views".
pub fn format_views(views: u64) -> String {
  if views >= 1_000_000_000 {
    format!("{:.1}B views", views as f64 / 1_000_000_000.0)
  } else if views >= 1_000_000 {
    format!("{:.1}M views", views as f64 / 1_000_000.0)
  } else if views >= 1_000 {
    format!("{:.1}K views", views as f64 / 1_000.0)
  } else {
    format!("{} views", views)
  }
}

/// Bucket an age in days into a relative label.
///
/// Months are days/30 and years are days/365, both floored.
pub fn time_ago(days: u32) -> String {
  match days {
    0 => "Today".to_string(),
    1 => "1 day ago".to_string(),
    2..=29 => format!("{} days ago", days),
    30..=364 => format!("{} months ago", days / 30),
    _ => format!("{} years ago", days / 365),
  }
}

/// Format a duration as "m:ss" with zero-padded seconds.
pub fn format_duration(minutes: u32, seconds: u32) -> String {
  format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- format_views ---

  #[test]
  fn views_below_one_thousand_are_literal() {
    assert_eq!(format_views(0), "0 views");
    assert_eq!(format_views(500), "500 views");
    assert_eq!(format_views(999), "999 views");
  }

  #[test]
  fn views_thousands() {
    assert_eq!(format_views(1_000), "1.0K views");
    assert_eq!(format_views(1_500), "1.5K views");
    assert_eq!(format_views(999_999), "1000.0K views");
  }

  #[test]
  fn views_millions() {
    assert_eq!(format_views(1_000_000), "1.0M views");
    assert_eq!(format_views(2_340_000), "2.3M views");
    assert_eq!(format_views(999_999_999), "1000.0M views");
  }

  #[test]
  fn views_billions() {
    assert_eq!(format_views(1_000_000_000), "1.0B views");
  }

  // --- time_ago ---

  #[test]
  fn time_ago_buckets() {
    assert_eq!(time_ago(0), "Today");
    assert_eq!(time_ago(1), "1 day ago");
    assert_eq!(time_ago(2), "2 days ago");
    assert_eq!(time_ago(29), "29 days ago");
    assert_eq!(time_ago(30), "1 months ago");
    assert_eq!(time_ago(364), "12 months ago");
    assert_eq!(time_ago(365), "1 years ago");
    assert_eq!(time_ago(730), "2 years ago");
  }

  // --- format_duration ---

  #[test]
  fn duration_pads_seconds() {
    assert_eq!(format_duration(1, 0), "1:00");
    assert_eq!(format_duration(4, 7), "4:07");
    assert_eq!(format_duration(20, 59), "20:59");
  }
}
