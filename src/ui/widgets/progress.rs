//! Progress row: one dot per card

use crate::session::ItemStatus;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Centered row of dots colored by item status
pub struct ProgressDots<'a> {
    statuses: Vec<ItemStatus>,
    theme: &'a Theme,
}

impl<'a> ProgressDots<'a> {
    #[must_use]
    pub const fn new(statuses: Vec<ItemStatus>, theme: &'a Theme) -> Self {
        Self { statuses, theme }
    }
}

impl Widget for ProgressDots<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.statuses.len() * 2);
        for (i, status) in self.statuses.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let symbol = if *status == ItemStatus::Current { "◉" } else { "●" };
            spans.push(Span::styled(symbol, self.theme.dot_style(*status)));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
