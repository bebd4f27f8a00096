//! Application state machine and key dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use prodcat_core::{Catalog, EnrichedProduct, FilterState};

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Joined base data. Never changes after startup.
  pub catalog: Catalog,

  /// Current owner / query / toggled-category selection.
  pub filters: FilterState,

  /// Whether keystrokes are going into the search field.
  pub search_active: bool,

  /// Index of the highlighted category chip.
  pub category_cursor: usize,

  /// Cursor position within the *visible* product rows.
  pub row_cursor: usize,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new(catalog: Catalog, filters: FilterState) -> Self {
    Self {
      catalog,
      filters,
      search_active: false,
      category_cursor: 0,
      row_cursor: 0,
      status_msg: String::new(),
    }
  }

  /// Rows visible under the current filters, recomputed on every call.
  pub fn visible(&self) -> Vec<EnrichedProduct> { self.catalog.visible(&self.filters) }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.search_active {
      self.handle_search_key(key);
      return true;
    }

    self.handle_browse_key(key)
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.filters.clear_query();
      }
      KeyCode::Enter => {
        self.search_active = false;
      }
      KeyCode::Backspace => {
        let mut query = self.filters.query().to_owned();
        query.pop();
        self.filters.set_query(query);
      }
      KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
        let mut query = self.filters.query().to_owned();
        query.push(c);
        self.filters.set_query(query);
      }
      _ => return,
    }
    self.filters_changed();
  }

  fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
    self.status_msg.clear();

    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Search
      KeyCode::Char('/') => self.search_active = true,
      KeyCode::Char('x') => {
        self.filters.clear_query();
        self.filters_changed();
      }

      // Owner
      KeyCode::Char('a') => {
        self.filters.select_all();
        self.filters_changed();
      }
      KeyCode::Char(c @ '1'..='9') => self.select_nth_owner(c as usize - '1' as usize),

      // Category chips
      KeyCode::Left | KeyCode::Char('h') => {
        self.category_cursor = self.category_cursor.saturating_sub(1);
      }
      KeyCode::Right | KeyCode::Char('l') => {
        if self.category_cursor + 1 < self.catalog.categories().len() {
          self.category_cursor += 1;
        }
      }
      KeyCode::Char(' ') => {
        if let Some(category) = self.catalog.categories().get(self.category_cursor) {
          let title = category.title.clone();
          self.filters.toggle_category(&title);
          tracing::debug!(category = %title, "toggled category");
        }
      }

      // Reset
      KeyCode::Char('r') => {
        self.filters.reset();
        self.filters_changed();
        self.status_msg = "Filters reset".into();
      }

      // Row navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible().len();
        if len > 0 && self.row_cursor + 1 < len {
          self.row_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.row_cursor = self.row_cursor.saturating_sub(1);
      }

      _ => {}
    }
    true
  }

  fn select_nth_owner(&mut self, index: usize) {
    match self.catalog.users().get(index).cloned() {
      Some(user) => {
        self.filters.select_owner(&user);
        self.filters_changed();
      }
      None => self.status_msg = format!("No user #{}", index + 1),
    }
  }

  fn filters_changed(&mut self) {
    self.row_cursor = 0;
    tracing::debug!(
      owner = ?self.filters.owner(),
      query = self.filters.query(),
      "filters changed"
    );
  }
}
