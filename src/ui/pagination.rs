//! Pagination footer rendering.
//!
//! Displays the row summary, the page position and the four page buttons.

use crate::app::App;
use crate::ui::icon_button::IconButton;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

const BUTTON_WIDTH: u16 = 5;
const PAGE_LABEL_WIDTH: u16 = 24;

/// Page transition triggered by a footer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

impl PageAction {
    /// Buttons in display order.
    pub const ALL: [PageAction; 4] = [
        PageAction::First,
        PageAction::Previous,
        PageAction::Next,
        PageAction::Last,
    ];

    fn icon(self) -> &'static str {
        match self {
            PageAction::First => "«",
            PageAction::Previous => "‹",
            PageAction::Next => "›",
            PageAction::Last => "»",
        }
    }

    /// Whether the button is enabled for the current state.
    pub fn is_enabled(self, app: &App) -> bool {
        match self {
            PageAction::First | PageAction::Previous => app.can_go_previous(),
            PageAction::Next | PageAction::Last => app.can_go_next(),
        }
    }

    /// Perform the transition. Disabled actions are no-ops.
    pub fn apply(self, app: &mut App) {
        match self {
            PageAction::First => app.go_to_first_page(),
            PageAction::Previous => app.go_to_previous_page(),
            PageAction::Next => app.go_to_next_page(),
            PageAction::Last => app.go_to_last_page(),
        }
    }
}

/// Areas of the footer parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationLayout {
    pub summary: Rect,
    pub page_label: Rect,
    /// Buttons in `PageAction::ALL` order
    pub buttons: [Rect; 4],
}

impl PaginationLayout {
    /// Split the footer area (3 lines high).
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(PAGE_LABEL_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(area);
        Self {
            summary: chunks[0],
            page_label: chunks[1],
            buttons: [chunks[2], chunks[3], chunks[4], chunks[5]],
        }
    }

    /// Button under a terminal cell, if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<PageAction> {
        self.buttons
            .iter()
            .position(|rect| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|index| PageAction::ALL[index])
    }
}

/// Render the pagination footer.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in (3 lines high)
/// * `buf` - Buffer to render to
pub fn render_pagination(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = PaginationLayout::new(area);
    let text_row = |rect: Rect| Rect {
        y: rect.y + rect.height.min(3) / 2,
        height: 1,
        ..rect
    };

    Paragraph::new(Span::styled(
        format!(" {}", app.showing_summary()),
        Style::default().fg(Color::Gray),
    ))
    .render(text_row(layout.summary), buf);

    Paragraph::new(Span::styled(
        app.page_summary(),
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Right)
    .render(text_row(layout.page_label), buf);

    for (action, rect) in PageAction::ALL.iter().zip(layout.buttons) {
        IconButton::new(action.icon())
            .disabled(!action.is_enabled(app))
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendees::AttendeePage;
    use crate::loader::FetchOutcome;
    use crate::location::ListLocation;
    use crate::ui::buffer_text;

    fn app_on_page(page: u32, total: u64) -> App {
        let mut app = App::new(ListLocation {
            page,
            search: String::new(),
        });
        let request = app.take_pending_request().unwrap();
        app.apply_fetch(FetchOutcome {
            seq: request.seq,
            result: Ok(AttendeePage {
                attendees: Vec::new(),
                total,
            }),
        });
        app
    }

    #[test]
    fn test_footer_text() {
        let app = app_on_page(1, 228);
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        render_pagination(&app, area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Mostrando 0 de 228 itens"));
        assert!(text.contains("Página 1 de 23"));
        for icon in ["«", "‹", "›", "»"] {
            assert!(text.contains(icon));
        }
    }

    #[test]
    fn test_button_enablement_at_boundaries() {
        let first = app_on_page(1, 228);
        assert!(!PageAction::First.is_enabled(&first));
        assert!(!PageAction::Previous.is_enabled(&first));
        assert!(PageAction::Next.is_enabled(&first));
        assert!(PageAction::Last.is_enabled(&first));

        let last = app_on_page(23, 228);
        assert!(PageAction::First.is_enabled(&last));
        assert!(PageAction::Previous.is_enabled(&last));
        assert!(!PageAction::Next.is_enabled(&last));
        assert!(!PageAction::Last.is_enabled(&last));
    }

    #[test]
    fn test_apply_last_moves_to_last_page() {
        let mut app = app_on_page(1, 228);
        PageAction::Last.apply(&mut app);
        assert_eq!(app.page, 23);
        assert_eq!(app.location().to_query(), "page=23");
    }

    #[test]
    fn test_button_hit_testing() {
        let layout = PaginationLayout::new(Rect::new(0, 10, 80, 3));
        assert_eq!(layout.button_at(60, 11), Some(PageAction::First));
        assert_eq!(layout.button_at(79, 12), Some(PageAction::Last));
        assert_eq!(layout.button_at(10, 11), None);
        assert_eq!(layout.button_at(79, 13), None);
    }
}
