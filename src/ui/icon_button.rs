//! Icon button widget.
//!
//! A small bordered button holding a single icon glyph, with a
//! `transparent` variant for row actions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Icon button.
#[derive(Debug, Clone, Copy)]
pub struct IconButton<'a> {
    icon: &'a str,
    transparent: bool,
    disabled: bool,
}

impl<'a> IconButton<'a> {
    /// Create a button showing `icon`.
    pub fn new(icon: &'a str) -> Self {
        Self {
            icon,
            transparent: false,
            disabled: false,
        }
    }

    /// Use the transparent (darker) background variant.
    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Render dimmed; the caller ignores clicks on it.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn style(&self) -> Style {
        let base = if self.transparent {
            Style::default().bg(Color::Black)
        } else {
            Style::default().bg(Color::DarkGray)
        };
        if self.disabled {
            base.fg(Color::Gray).add_modifier(Modifier::DIM)
        } else {
            base.fg(Color::White)
        }
    }

    /// Single-line form for use inside table cells.
    pub fn inline(&self) -> Span<'a> {
        Span::styled(format!(" {} ", self.icon), self.style())
    }
}

impl Widget for IconButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Span::styled(self.icon, style))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn test_icon_button_renders_icon_centered() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        IconButton::new("»").render(area, &mut buf);

        let text = buffer_text(&buf);
        assert_eq!(text.lines().nth(1), Some("│ » │"));
    }

    #[test]
    fn test_variants_change_background() {
        let solid = IconButton::new("…").inline();
        let transparent = IconButton::new("…").transparent(true).inline();
        assert_eq!(solid.content, " … ");
        assert_ne!(solid.style.bg, transparent.style.bg);
    }

    #[test]
    fn test_disabled_is_dimmed() {
        let span = IconButton::new("«").disabled(true).inline();
        assert!(span.style.add_modifier.contains(Modifier::DIM));
    }
}
