//! `prodcat` — terminal table view over products, categories and users.
//!
//! # Usage
//!
//! ```text
//! prodcat                                   # bundled sample data
//! prodcat --data-dir ./data --log-file prodcat.log
//! prodcat --print --owner anna --query a    # JSON to stdout, no TUI
//! ```

mod app;
mod ui;

use std::{
  fs::OpenOptions,
  io::{self, Write},
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result, bail};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use prodcat_core::{Catalog, FilterState, Tables};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "prodcat", version, about = "Filterable product table")]
struct Args {
  /// Path to a TOML config file (data_dir, log_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Directory holding users.json, categories.json and products.json.
  #[arg(long, env = "PRODCAT_DATA_DIR", value_name = "DIR")]
  data_dir: Option<PathBuf>,

  /// Append logs to this file (the TUI owns the terminal).
  #[arg(long, env = "PRODCAT_LOG_FILE", value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Print the visible rows as JSON and exit instead of opening the TUI.
  #[arg(long)]
  print: bool,

  /// Initial owner filter: a user name, or `all`.
  #[arg(long)]
  owner: Option<String>,

  /// Initial search query.
  #[arg(long)]
  query: Option<String>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
struct ConfigFile {
  #[serde(default)]
  data_dir: Option<PathBuf>,
  #[serde(default)]
  log_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let data_dir = args.data_dir.clone().or(file_cfg.data_dir);
  let log_file = args.log_file.clone().or(file_cfg.log_file);

  init_tracing(log_file.as_deref(), args.print)?;

  let tables = match &data_dir {
    Some(dir) => {
      Tables::from_dir(dir).with_context(|| format!("loading tables from {}", dir.display()))?
    }
    None => Tables::sample().context("loading bundled sample tables")?,
  };
  let catalog = Catalog::new(tables).context("joining product tables")?;
  let filters = initial_filters(&catalog, args.owner.as_deref(), args.query.as_deref())?;

  if args.print {
    return write_visible(&catalog, &filters, &mut io::stdout().lock(), &mut io::stderr().lock());
  }

  run_tui(App::new(catalog, filters))
}

/// Install a `tracing` subscriber honouring `RUST_LOG`.
///
/// Logs go to `log_file` when given. Without one, the TUI runs silent and
/// `--print` logs to stderr.
fn init_tracing(log_file: Option<&Path>, print_mode: bool) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  match log_file {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    None if print_mode => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    }
    None => {}
  }
  Ok(())
}

/// Build the starting filter state from `--owner` / `--query`.
fn initial_filters(catalog: &Catalog, owner: Option<&str>, query: Option<&str>) -> Result<FilterState> {
  let mut filters = FilterState::new();

  match owner {
    None => {}
    Some(name) if name.eq_ignore_ascii_case("all") => filters.select_all(),
    Some(name) => match catalog.user_by_name(name) {
      Some(user) => filters.select_owner(user),
      None => bail!("unknown owner {name:?}"),
    },
  }
  if let Some(query) = query {
    filters.set_query(query);
  }
  Ok(filters)
}

/// Write the rows visible under `filters` to `out` as pretty JSON.
///
/// An empty result still writes `[]`; the no-matches message goes to `err`.
fn write_visible(
  catalog: &Catalog,
  filters: &FilterState,
  out: &mut impl Write,
  err: &mut impl Write,
) -> Result<()> {
  let visible = catalog.visible(filters);
  tracing::info!(visible = visible.len(), total = catalog.products().len(), "filtered products");

  if visible.is_empty() {
    writeln!(err, "No products matching selected criteria").context("writing to stderr")?;
  }
  serde_json::to_writer_pretty(&mut *out, &visible).context("serialising products")?;
  writeln!(out).context("writing to stdout")?;
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_tui(mut app: App) -> Result<()> {
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(250)).context("polling events")? {
      continue;
    }
    match event::read().context("reading event")? {
      Event::Key(key) => {
        if !app.handle_key(key) {
          break;
        }
      }
      Event::Resize(_, _) => {
        // Terminal will redraw on next iteration.
      }
      _ => {}
    }
  }

  tracing::info!("exiting");
  Ok(())
}

#[cfg(test)]
mod tests {
  use prodcat_core::{OwnerFilter, model::UserId};

  use super::*;

  fn catalog() -> Catalog { Catalog::new(Tables::sample().unwrap()).unwrap() }

  #[test]
  fn owner_flag_matches_name_case_insensitively() {
    let filters = initial_filters(&catalog(), Some("ANNA"), None).unwrap();
    assert_eq!(filters.owner(), OwnerFilter::User(UserId(2)));
  }

  #[test]
  fn owner_flag_all_and_query() {
    let filters = initial_filters(&catalog(), Some("all"), Some("mil")).unwrap();
    assert!(filters.owner().is_all());
    assert_eq!(filters.query(), "mil");
  }

  #[test]
  fn unknown_owner_flag_is_an_error() {
    let err = initial_filters(&catalog(), Some("Nobody"), None).unwrap_err();
    assert!(err.to_string().contains("Nobody"));
  }

  fn run_print(owner: Option<&str>, query: Option<&str>) -> (serde_json::Value, String) {
    let catalog = catalog();
    let filters = initial_filters(&catalog, owner, query).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    write_visible(&catalog, &filters, &mut out, &mut err).unwrap();
    (serde_json::from_slice(&out).unwrap(), String::from_utf8(err).unwrap())
  }

  #[test]
  fn print_writes_visible_rows_as_json() {
    let (json, err) = run_print(Some("anna"), Some("a"));
    let ids: Vec<u64> = json
      .as_array()
      .unwrap()
      .iter()
      .map(|row| row["id"].as_u64().unwrap())
      .collect();
    assert_eq!(ids, [2, 5, 7, 8, 9]);
    assert!(json.as_array().unwrap().iter().all(|row| row["user"]["name"] == "Anna"));
    assert!(err.is_empty());
  }

  #[test]
  fn print_signals_no_matches() {
    let (json, err) = run_print(None, Some("undefined"));
    assert_eq!(json, serde_json::json!([]));
    assert_eq!(err.trim_end(), "No products matching selected criteria");
  }

  #[test]
  fn config_file_fields_are_optional() {
    let cfg: ConfigFile = toml::from_str("data_dir = \"/srv/data\"").unwrap();
    assert_eq!(cfg.data_dir, Some(PathBuf::from("/srv/data")));
    assert!(cfg.log_file.is_none());
  }
}
