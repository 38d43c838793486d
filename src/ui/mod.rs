//! UI components module.
//!
//! Contains ratatui widgets for displaying the attendee list screen.

pub mod icon_button;
pub mod pagination;
pub mod search;
pub mod table;

pub use pagination::render_pagination;
pub use search::render_search;
pub use table::render_table;

use pagination::PaginationLayout;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the screen parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub table: Rect,
    pub footer: Rect,
    /// Hit areas inside `footer`
    pub pagination: PaginationLayout,
    pub status: Rect,
}

impl ScreenLayout {
    /// Split the full terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header + search
                Constraint::Min(0),    // Attendee table
                Constraint::Length(3), // Pagination
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        Self {
            header: chunks[0],
            table: chunks[1],
            footer: chunks[2],
            pagination: PaginationLayout::new(chunks[2]),
            status: chunks[3],
        }
    }
}

/// Flatten a buffer to text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}
