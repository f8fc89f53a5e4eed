//! Clickable bordered button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A bordered, centered label
pub struct Button<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> Button<'a> {
    #[must_use]
    pub const fn new(label: &'a str, style: Style) -> Self {
        Self { label, style }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.label)
            .style(self.style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Lay out `count` buttons of `width` columns, centered with a gap
#[must_use]
pub fn button_row(area: Rect, count: usize, width: u16) -> Vec<Rect> {
    Layout::horizontal(vec![Constraint::Length(width); count])
        .flex(Flex::Center)
        .spacing(2)
        .split(area)
        .to_vec()
}
