//! TUI rendering — orchestrates all panes.

pub mod filters;
pub mod product_table;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(5), // filters panel
      Constraint::Min(0),    // product table
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  filters::draw(f, rows[1], app);
  product_table::draw(f, rows[2], app);
  draw_status(f, rows[3], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " Product Categories",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.search_active {
    ("SEARCH", "Type to filter  Esc clear  Enter done")
  } else {
    (
      "NORMAL",
      "/ search  x clear  a all  1-9 owner  ←→ category  Space toggle  r reset  q quit",
    )
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray));

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span])).style(Style::default().bg(Color::Black)),
    area,
  );
}

#[cfg(test)]
mod tests {
  use prodcat_core::{Catalog, FilterState, Tables, model::UserId};
  use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

  use super::*;

  fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
  }

  fn render(app: &App) -> String {
    render_buffer(app)
      .content()
      .iter()
      .map(|cell| cell.symbol())
      .collect()
  }

  fn app() -> App {
    App::new(Catalog::new(Tables::sample().unwrap()).unwrap(), FilterState::new())
  }

  /// Column where `word` starts in `symbols`, one cell per char, at or after
  /// `from`.
  fn find(symbols: &[&str], word: &str, from: usize) -> Option<usize> {
    let chars: Vec<String> = word.chars().map(String::from).collect();
    (from..symbols.len().saturating_sub(chars.len() - 1))
      .find(|&x| chars.iter().enumerate().all(|(i, c)| symbols[x + i] == c))
  }

  /// Foreground of the user cell in the table row showing `product`.
  fn user_fg(buf: &Buffer, product: &str, user: &str) -> Color {
    for y in 0..buf.area.height {
      let symbols: Vec<&str> = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
      let Some(px) = find(&symbols, product, 0) else {
        continue;
      };
      let ux = find(&symbols, user, px + product.len()).expect("user cell in product row");
      return buf[(ux as u16, y)].fg;
    }
    panic!("no row for {product}");
  }

  #[test]
  fn renders_rows_and_headers() {
    let screen = render(&app());
    assert!(screen.contains("Product Categories"));
    assert!(screen.contains("Milk"));
    assert!(screen.contains("Drinks"));
    assert!(screen.contains("Roma"));
    assert!(screen.contains("Category ⇅"));
    assert!(!screen.contains("No products matching"));
  }

  #[test]
  fn renders_no_matching_message() {
    let mut app = app();
    app.filters.set_query("undefined");
    let screen = render(&app);
    assert!(screen.contains("No products matching selected criteria"));
    assert!(!screen.contains("Milk"));
    for column in ["ID ⇅", "Product ⇅", "Category ⇅", "User ⇅"] {
      assert!(screen.contains(column), "missing header {column}");
    }
  }

  #[test]
  fn clear_hint_only_with_query() {
    let mut app = app();
    assert!(!render(&app).contains("[x]"));
    app.filters.set_query("mil");
    assert!(render(&app).contains("[x]"));
  }

  #[test]
  fn women_are_red_and_men_use_their_colour() {
    let buf = render_buffer(&app());
    // Bread → Grocery → Anna; Laptop → Electronics → Roma (#3273dc).
    assert_eq!(user_fg(&buf, "Bread", "Anna"), Color::Red);
    assert_eq!(user_fg(&buf, "Laptop", "Roma"), Color::Rgb(50, 115, 220));
  }

  #[test]
  fn user_without_colour_falls_back() {
    let tables = Tables::from_json(
      r#"[{"id":1,"name":"Max","sex":"m"}]"#,
      r#"[{"id":1,"title":"Drinks","icon":"","ownerId":1}]"#,
      r#"[{"id":1,"name":"Milk","categoryId":1},{"id":2,"name":"Soda","categoryId":1}]"#,
    )
    .unwrap();
    let app = App::new(Catalog::new(tables).unwrap(), FilterState::new());
    let buf = render_buffer(&app);
    assert_eq!(user_fg(&buf, "Soda", "Max"), Color::LightBlue);
  }

  #[test]
  fn title_names_selected_owner() {
    let mut app = app();
    let anna = app.catalog.user(UserId(2)).unwrap().clone();
    app.filters.select_owner(&anna);
    assert!(render(&app).contains(" Products (6/15, Anna) "));

    app.filters.select_all();
    app.filters.set_query("milk");
    assert!(render(&app).contains(" Products (1/15) "));
  }
}
