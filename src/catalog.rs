//! Synthetic video catalog: the fixed category enumeration, the `Video`
//! record, and the unseeded generator that fills the grid at startup.

use rand::Rng;

use crate::constants::constants;
use crate::format::format_duration;

// --- Categories ---

/// The fixed category set. `All` is a pseudo-category used only for
/// filtering — generated videos never carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  All,
  Music,
  Gaming,
  Tech,
  Cooking,
  Travel,
  News,
  Science,
}

impl Category {
  /// Every chip shown in the category bar, `All` first.
  pub const CHIPS: [Category; 8] = [
    Category::All,
    Category::Music,
    Category::Gaming,
    Category::Tech,
    Category::Cooking,
    Category::Travel,
    Category::News,
    Category::Science,
  ];

  /// Categories a generated video can carry (`CHIPS` minus `All`).
  pub const POOL: [Category; 7] = [
    Category::Music,
    Category::Gaming,
    Category::Tech,
    Category::Cooking,
    Category::Travel,
    Category::News,
    Category::Science,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Category::All => "All",
      Category::Music => "Music",
      Category::Gaming => "Gaming",
      Category::Tech => "Tech",
      Category::Cooking => "Cooking",
      Category::Travel => "Travel",
      Category::News => "News",
      Category::Science => "Science",
    }
  }
}

// --- Video records ---

/// One synthetic video. Immutable once generated.
#[derive(Debug, Clone)]
pub struct Video {
  pub id: String,
  pub title: String,
  pub channel: String,
  pub category: Category,
  pub views: u64,
  pub days_ago: u32,
  pub thumb_url: String,
  pub avatar_url: String,
  /// Pre-formatted "m:ss" with zero-padded seconds.
  pub duration: String,
}

// --- Generation ---

/// Normalize a string into a lowercase hyphen-separated identifier token:
/// non-alphanumeric runs collapse to a single hyphen, edges stripped.
pub fn slugify(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut gap = false;
  for c in s.chars() {
    if c.is_ascii_alphanumeric() {
      if gap && !out.is_empty() {
        out.push('-');
      }
      gap = false;
      out.push(c.to_ascii_lowercase());
    } else {
      gap = true;
    }
  }
  out
}

/// Generate `count` synthetic videos from the pooled titles/channels and the
/// numeric ranges in `constants.ron`. Unseeded — every run produces a
/// different catalog. Ids are stable per (index, title) via `slugify`, with
/// uniqueness guaranteed only by the index prefix.
pub fn generate_videos(count: usize) -> Vec<Video> {
  let c = constants();
  let mut rng = rand::rng();

  (0..count)
    .map(|i| {
      let category = Category::POOL[rng.random_range(0..Category::POOL.len())];
      let template = &c.title_templates[rng.random_range(0..c.title_templates.len())];
      let title = format!("{} #{}", template, rng.random_range(1..=999));
      let channel = c.channels[rng.random_range(0..c.channels.len())].clone();

      let minutes = rng.random_range(c.duration_min_minutes..=c.duration_max_minutes);
      let seconds = rng.random_range(0..60);
      let thumb_id = rng.random_range(1..=c.thumb_id_max);
      let avatar_id = rng.random_range(1..=c.avatar_id_max);

      Video {
        id: format!("{}-{}", i, slugify(&title)),
        category,
        channel,
        views: rng.random_range(c.views_min..=c.views_max),
        days_ago: rng.random_range(0..=c.days_ago_max),
        thumb_url: format!("https://picsum.photos/id/{}/{}/{}", thumb_id, c.thumb_width, c.thumb_height),
        avatar_url: format!("https://i.pravatar.cc/{}?img={}", c.avatar_size, avatar_id),
        duration: format_duration(minutes, seconds),
        title,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- slugify ---

  #[test]
  fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("Lo-fi Beats to Study To #42"), "lo-fi-beats-to-study-to-42");
    assert_eq!(slugify("Breaking: Markets React"), "breaking-markets-react");
  }

  #[test]
  fn slugify_collapses_runs_and_strips_edges() {
    assert_eq!(slugify("  --Hello,   World!!  "), "hello-world");
    assert_eq!(slugify("***"), "");
    assert_eq!(slugify(""), "");
  }

  // --- generate_videos ---

  #[test]
  fn generates_requested_count() {
    assert_eq!(generate_videos(36).len(), 36);
    assert!(generate_videos(0).is_empty());
  }

  #[test]
  fn generated_fields_are_in_range() {
    let c = constants();
    for video in generate_videos(36) {
      assert_ne!(video.category, Category::All);
      assert!(Category::POOL.contains(&video.category));
      assert!(video.views >= c.views_min && video.views <= c.views_max);
      assert!(video.days_ago <= c.days_ago_max);
      assert!(c.channels.contains(&video.channel));
    }
  }

  #[test]
  fn generated_durations_match_pattern() {
    let c = constants();
    for video in generate_videos(36) {
      let (min, sec) = video.duration.split_once(':').expect("duration must be m:ss");
      let min: u32 = min.parse().expect("minutes must be numeric");
      let sec_num: u32 = sec.parse().expect("seconds must be numeric");
      assert_eq!(sec.len(), 2, "seconds must be zero-padded: {}", video.duration);
      assert!(min >= c.duration_min_minutes && min <= c.duration_max_minutes);
      assert!(sec_num < 60);
    }
  }

  #[test]
  fn generated_ids_are_index_prefixed_slugs() {
    for (i, video) in generate_videos(12).iter().enumerate() {
      assert_eq!(video.id, format!("{}-{}", i, slugify(&video.title)));
    }
  }

  #[test]
  fn generated_urls_point_at_placeholder_services() {
    let video = &generate_videos(1)[0];
    assert!(video.thumb_url.starts_with("https://picsum.photos/id/"));
    assert!(video.avatar_url.starts_with("https://i.pravatar.cc/"));
  }
}
