//! The swipe card
//!
//! The card is a bordered panel that slides horizontally with the drag
//! offset. Whatever slides past the edge of its container is clipped, so a
//! card pushed a full width to either side disappears.

use crate::media::MediaStatus;
use crate::session::Item;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const CAT_ART: [&str; 3] = [r" /\_/\ ", r"( o.o )", r" > ^ < "];

/// `area` moved `shift` columns sideways and clipped to `area`
///
/// Returns `None` when nothing of the card remains visible.
#[must_use]
pub fn shifted(area: Rect, shift: i32) -> Option<Rect> {
    let left = i32::from(area.x);
    let right = left + i32::from(area.width);
    let new_left = (left + shift).max(left);
    let new_right = (right + shift).min(right);
    if new_right <= new_left {
        return None;
    }
    let x = u16::try_from(new_left).ok()?;
    let width = u16::try_from(new_right - new_left).ok()?;
    Some(Rect::new(x, area.y, width, area.height))
}

/// Card showing the current item
pub struct Card<'a> {
    item: &'a Item,
    index: usize,
    total: usize,
    status: Option<MediaStatus>,
    shift: i32,
    strength: f64,
    theme: &'a Theme,
}

impl<'a> Card<'a> {
    /// Create a card for the item at `index` of `total`
    #[must_use]
    pub const fn new(item: &'a Item, index: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            item,
            index,
            total,
            status: None,
            shift: 0,
            strength: 0.0,
            theme,
        }
    }

    /// Prefetch status shown under the reference
    #[must_use]
    pub const fn status(mut self, status: MediaStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Horizontal displacement in columns and how close the drag is to committing
    #[must_use]
    pub const fn shift(mut self, columns: i32, strength: f64) -> Self {
        self.shift = columns;
        self.strength = strength;
        self
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(rect) = shifted(area, self.shift) else {
            return;
        };

        Clear.render(rect, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" {}/{} ", self.index + 1, self.total));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let mut lines: Vec<Line> = vec![Line::raw("")];
        lines.extend(CAT_ART.iter().map(|row| Line::raw(*row)));
        lines.push(Line::raw(""));
        lines.push(Line::styled(self.item.as_str(), self.theme.dimmed_style()));
        if let Some(status) = self.status {
            let status_style = match status {
                MediaStatus::Failed => self.theme.error_style(),
                MediaStatus::Ready { .. } => self.theme.success_style(),
                MediaStatus::Pending => self.theme.dimmed_style(),
            };
            lines.push(Line::styled(status.label(), status_style));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        if inner.width < 6 || inner.height == 0 {
            return;
        }
        let hint_row = Rect::new(inner.x + 1, inner.y, inner.width - 2, 1);
        if self.shift > 0 {
            Paragraph::new(Span::styled("LIKE", self.theme.like_style(self.strength)))
                .render(hint_row, buf);
        } else if self.shift < 0 {
            Paragraph::new(Span::styled("NOPE", self.theme.nope_style(self.strength)))
                .alignment(Alignment::Right)
                .render(hint_row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_shifted_right_clips() {
        let area = Rect::new(10, 0, 20, 5);
        assert_eq!(shifted(area, 0), Some(area));
        assert_eq!(shifted(area, 5), Some(Rect::new(15, 0, 15, 5)));
        assert_eq!(shifted(area, -5), Some(Rect::new(10, 0, 15, 5)));
        assert_eq!(shifted(area, 20), None);
        assert_eq!(shifted(area, -25), None);
    }

    #[test]
    fn test_like_hint_when_dragging_right() {
        let theme = Theme::default();
        let item = Item::new("https://cataas.com/cat");
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        Card::new(&item, 0, 3, &theme).shift(3, 0.5).render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("LIKE"));
        assert!(!row_text(&buf, 1).contains("NOPE"));
    }

    #[test]
    fn test_nope_hint_when_dragging_left() {
        let theme = Theme::default();
        let item = Item::new("x");
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        Card::new(&item, 0, 3, &theme).shift(-3, 0.5).render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("NOPE"));
    }

    #[test]
    fn test_title_shows_position() {
        let theme = Theme::default();
        let item = Item::new("x");
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        Card::new(&item, 1, 14, &theme).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("2/14"));
    }
}
