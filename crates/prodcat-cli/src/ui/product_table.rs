//! Product table — one row per visible enriched product.

use std::str::FromStr;

use prodcat_core::{EnrichedProduct, OwnerFilter, SortColumn, model::Sex};
use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  text::Span,
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use strum::IntoEnumIterator;

use crate::app::App;

/// Shown next to every column title. No column actually sorts.
const SORT_ICON: &str = "⇅";

const NO_MATCHES: &str = "No products matching selected criteria";

/// Render the product table into `area`.
///
/// The header row is always drawn. An empty view shows the no-matches
/// message beneath it.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.visible();

  let block = Block::default()
    .title(title(app, visible.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);

  let header = Row::new(
    SortColumn::iter().map(|column| Cell::from(format!("{column} {SORT_ICON}"))),
  )
  .style(Style::default().add_modifier(Modifier::BOLD))
  .bottom_margin(1);

  let rows: Vec<Row> = visible.iter().map(product_row).collect();

  let widths = [
    Constraint::Length(6),
    Constraint::Min(16),
    Constraint::Min(20),
    Constraint::Min(10),
  ];

  let mut state = TableState::default();
  state.select(if visible.is_empty() {
    None
  } else {
    Some(app.row_cursor.min(visible.len() - 1))
  });

  f.render_stateful_widget(
    Table::new(rows, widths)
      .header(header)
      .block(block)
      .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White)),
    area,
    &mut state,
  );

  if visible.is_empty() {
    // Header line plus its bottom margin.
    let message_area = Rect {
      y:      inner.y.saturating_add(2),
      height: inner.height.saturating_sub(2),
      ..inner
    };
    f.render_widget(
      Paragraph::new(NO_MATCHES).style(Style::default().fg(Color::DarkGray)),
      message_area,
    );
  }
}

/// ` Products (n) `, or ` Products (shown/total[, owner]) ` while filtering.
fn title(app: &App, shown: usize) -> String {
  let total = app.catalog.products().len();
  if app.filters.is_default() {
    return format!(" Products ({total}) ");
  }
  match app.filters.owner() {
    OwnerFilter::User(id) => {
      let owner = app.catalog.user(id).map(|u| u.name.as_str()).unwrap_or("?");
      format!(" Products ({shown}/{total}, {owner}) ")
    }
    OwnerFilter::All => format!(" Products ({shown}/{total}) "),
  }
}

fn product_row(row: &EnrichedProduct) -> Row<'static> {
  Row::new(vec![
    Cell::from(Span::styled(
      row.product.id.to_string(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Cell::from(row.product.name.clone()),
    Cell::from(format!("{} - {}", row.category.icon, row.category.title)),
    Cell::from(Span::styled(row.user.name.clone(), user_style(row))),
  ])
}

/// Women are always highlighted red; everyone else uses their own colour.
fn user_style(row: &EnrichedProduct) -> Style {
  let color = match row.user.sex {
    Sex::Female => Color::Red,
    Sex::Male => row
      .user
      .color
      .as_deref()
      .and_then(|hex| Color::from_str(hex).ok())
      .unwrap_or(Color::LightBlue),
  };
  Style::default().fg(color)
}
