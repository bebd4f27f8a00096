//! Filters panel — owner tabs, search field and category chips.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Render the filters panel into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Filters ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // owners
      Constraint::Length(1), // search
      Constraint::Length(1), // categories
    ])
    .split(inner);

  f.render_widget(Paragraph::new(owner_tabs(app)), lines[0]);
  f.render_widget(Paragraph::new(search_field(app)), lines[1]);
  f.render_widget(Paragraph::new(category_chips(app)), lines[2]);
}

fn tab_style(active: bool) -> Style {
  if active {
    Style::default()
      .fg(Color::Black)
      .bg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::Gray)
  }
}

fn owner_tabs(app: &App) -> Line<'static> {
  let owner = app.filters.owner();
  let mut spans = vec![Span::styled(" [a] All ", tab_style(owner.is_all())), Span::raw(" ")];

  for (i, user) in app.catalog.users().iter().enumerate() {
    let label = if i < 9 {
      format!(" [{}] {} ", i + 1, user.name)
    } else {
      format!(" {} ", user.name)
    };
    spans.push(Span::styled(label, tab_style(owner.is_user(user))));
    spans.push(Span::raw(" "));
  }
  Line::from(spans)
}

fn search_field(app: &App) -> Line<'static> {
  let query = app.filters.query();
  let mut spans = vec![Span::raw(" 🔍 ")];

  if query.is_empty() && !app.search_active {
    spans.push(Span::styled("Search", Style::default().fg(Color::DarkGray)));
  } else {
    let text = if app.search_active {
      format!("{query}_")
    } else {
      query.to_string()
    };
    spans.push(Span::styled(text, Style::default().fg(Color::Yellow)));
  }

  if !query.is_empty() {
    spans.push(Span::styled("  [x]", Style::default().fg(Color::Red)));
  }
  Line::from(spans)
}

fn category_chips(app: &App) -> Line<'static> {
  let mut spans = vec![
    Span::styled(
      " All ",
      Style::default().fg(Color::Black).bg(Color::Green),
    ),
    Span::raw("   "),
  ];

  for (i, category) in app.catalog.categories().iter().enumerate() {
    let mut style = if app.filters.is_toggled(&category.title) {
      Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
      Style::default().fg(Color::White)
    };
    if i == app.category_cursor {
      style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    spans.push(Span::styled(format!(" {} ", category.title), style));
    spans.push(Span::raw(" "));
  }
  Line::from(spans)
}
