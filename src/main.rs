mod app;
mod catalog;
mod config;
mod constants;
mod format;
mod input;
mod theme;
mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use directories::ProjectDirs;
use ratatui::{
  DefaultTerminal,
  crossterm::event::{self, Event, KeyEventKind},
};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use catalog::generate_videos;
use config::Config;
use constants::constants;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Number of synthetic videos to generate (defaults to the built-in catalog size)
  #[arg(short = 'n', long)]
  count: Option<usize>,

  /// Startup theme: 'light', 'dark', or 'auto' (the persisted preference)
  #[arg(short, long, default_value = "auto")]
  theme: CliTheme,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTheme {
  Auto,
  Light,
  Dark,
}

// --- Logging ---

/// Route tracing output to a file in the platform data dir — stdout belongs
/// to the TUI. Returns the worker guard that must stay alive for the
/// non-blocking writer to flush.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
  let proj_dirs = ProjectDirs::from("", "", "tubegrid")?;
  let log_dir = proj_dirs.data_dir().to_path_buf();
  std::fs::create_dir_all(&log_dir).ok()?;
  let appender = tracing_appender::rolling::never(log_dir, "tubegrid.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);
  let filter = EnvFilter::try_from_env("TUBEGRID_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
  Some(guard)
}

// --- Main ---

fn main() -> Result<()> {
  let args = Args::parse();
  let _log_guard = init_logging();

  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    ratatui::restore();
    default_hook(info);
  }));

  let mut terminal = ratatui::init();
  let result = run(&mut terminal, args);
  ratatui::restore();
  result
}

fn run(terminal: &mut DefaultTerminal, args: Args) -> Result<()> {
  let config = Config::load();
  let theme_index = match args.theme {
    CliTheme::Light => theme::index_of("light"),
    CliTheme::Dark => theme::index_of("dark"),
    CliTheme::Auto => theme::index_of(config.theme_name.as_deref().unwrap_or("light")),
  };
  let count = args.count.unwrap_or(constants().catalog_size);
  info!(count, theme = theme::THEMES[theme_index].name, "starting up");

  let mut app = App::new(generate_videos(count), theme_index);

  loop {
    app.tick();
    terminal.draw(|frame| ui::ui(frame, &mut app))?;

    // Short poll timeout so the debounce and pulse deadlines fire promptly
    // even when no input arrives.
    if event::poll(Duration::from_millis(50))? {
      match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
          input::handle_key_event(&mut app, key);
        }
        _ => {}
      }
    }

    if app.should_quit {
      break;
    }
  }

  info!("shutting down");
  Ok(())
}
