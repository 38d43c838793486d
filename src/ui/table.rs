//! Attendee table rendering.
//!
//! Displays the current page of attendees with check boxes, registration
//! and check-in times relative to `now`.

use crate::app::{App, LoadError};
use crate::attendees::Attendee;
use crate::relative_time::format_relative;
use crate::ui::icon_button::IconButton;
use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget, Wrap},
};

/// Shown in the check-in column for attendees that have not checked in.
pub const NOT_CHECKED_IN: &str = "Não fez check-in";

/// Lines per attendee row (name + email).
const ROW_HEIGHT: u16 = 2;

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn column_widths() -> [Constraint; 6] {
    [
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Min(24),
        Constraint::Length(20),
        Constraint::Length(20),
        Constraint::Length(3),
    ]
}

fn attendee_row<'a>(app: &App, attendee: &'a Attendee, now: DateTime<Utc>) -> Row<'a> {
    let participant = Text::from(vec![
        Line::from(Span::styled(
            attendee.name.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            attendee.email.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ]);

    let checked_in = match attendee.checked_in_at {
        Some(at) => Cell::from(format_relative(at, now)),
        None => Cell::from(Span::styled(
            NOT_CHECKED_IN,
            Style::default().fg(Color::DarkGray),
        )),
    };

    Row::new(vec![
        Cell::from(checkbox(app.is_selected(attendee))),
        Cell::from(attendee.id.to_string()),
        Cell::from(participant),
        Cell::from(format_relative(attendee.created_at, now)),
        checked_in,
        Cell::from(Line::from(IconButton::new("…").transparent(true).inline())),
    ])
    .height(ROW_HEIGHT)
}

/// Render the attendee table.
///
/// # Arguments
/// * `app` - Application state
/// * `now` - Reference instant for relative times
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// A blocking load error replaces the rows with the error message. The
/// header check box is checked when every row on the page is checked.
pub fn render_table(app: &App, now: DateTime<Utc>, area: Rect, buf: &mut Buffer) {
    let title = if app.is_loading() {
        "Participantes (carregando...)"
    } else {
        "Participantes"
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if let Some(LoadError::Blocking(message)) = &app.load_error {
        Paragraph::new(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        )))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
        return;
    }

    if app.attendees.is_empty() {
        let message = if app.is_loading() {
            "Carregando participantes..."
        } else {
            "Nenhum participante encontrado"
        };
        Paragraph::new(Span::styled(message, Style::default().fg(Color::Gray)))
            .block(block)
            .render(area, buf);
        return;
    }

    let header = Row::new(vec![
        Cell::from(checkbox(app.all_on_page_selected())),
        Cell::from("Código"),
        Cell::from("Participantes"),
        Cell::from("Data de inscrição"),
        Cell::from("Data do check-in"),
        Cell::from(""),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .attendees
        .iter()
        .map(|attendee| attendee_row(app, attendee, now))
        .collect();

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(Color::Blue));

    let mut state = TableState::default().with_selected(Some(app.cursor));
    StatefulWidget::render(table, area, buf, &mut state);
}
