//! Header rendering: screen title and search box.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const SEARCH_PLACEHOLDER: &str = "Buscar participante...";

/// Render the header.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in (3 lines high)
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows the "Participantes" title next to the search box. The box shows
/// the placeholder while empty and is highlighted in search mode.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Max(50), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Participantes",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().fg(Color::White));
    // vertically align with the text inside the bordered search box
    title.render(
        Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..chunks[0]
        },
        buf,
    );

    let is_active = app.mode == UiMode::Search;
    let mut spans = vec![Span::styled("⌕ ", Style::default().fg(Color::Green))];
    if app.search.is_empty() && !is_active {
        spans.push(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            app.search.as_str(),
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        ));
    }
    if is_active {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(if is_active {
                "Buscar (Enter/Esc para sair)"
            } else {
                "Buscar (tecle '/')"
            })
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    paragraph.render(chunks[1], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::ListLocation;
    use crate::ui::buffer_text;

    fn render(app: &App) -> String {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        render_search(app, area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_placeholder_when_empty() {
        let app = App::new(ListLocation::default());
        let text = render(&app);
        assert!(text.contains("Participantes"));
        assert!(text.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn test_shows_search_text() {
        let app = App::new(ListLocation::parse("search=leandro"));
        let text = render(&app);
        assert!(text.contains("leandro"));
        assert!(!text.contains(SEARCH_PLACEHOLDER));
    }
}
