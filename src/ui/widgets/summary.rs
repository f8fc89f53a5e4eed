//! End-of-round summary

use crate::session::Summary;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Counts plus the list of liked items
pub struct SummaryView<'a> {
    summary: &'a Summary,
    theme: &'a Theme,
}

impl<'a> SummaryView<'a> {
    #[must_use]
    pub const fn new(summary: &'a Summary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for SummaryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Summary 🐱 ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                self.summary.headline(),
                self.theme.title_style().remove_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::raw(""),
        ];

        if self.summary.liked.is_empty() {
            lines.push(Line::raw("No liked cats this round. 😼").alignment(Alignment::Center));
        } else {
            lines.extend(self.summary.liked.iter().map(|item| {
                Line::from(vec![
                    Span::styled("♥ ", self.theme.like_style(0.5)),
                    Span::raw(item.as_str()),
                ])
            }));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
