//! Title bar with the undo control

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const TITLE: &str = "🐾 Cat Tinder";
const UNDO_LABEL: &str = "[↩ Undo]";

/// Title on the left, undo control on the right
pub struct TopBar<'a> {
    can_undo: bool,
    theme: &'a Theme,
}

impl<'a> TopBar<'a> {
    #[must_use]
    pub const fn new(can_undo: bool, theme: &'a Theme) -> Self {
        Self { can_undo, theme }
    }

    /// Region occupied by the undo control within `area`
    #[must_use]
    pub fn undo_area(area: Rect) -> Rect {
        #[allow(clippy::cast_possible_truncation)]
        let width = (Span::raw(UNDO_LABEL).width() as u16).min(area.width);
        Rect::new(area.right().saturating_sub(width), area.y, width, area.height.min(1))
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(TITLE, self.theme.title_style())).render(area, buf);

        let undo_style = if self.can_undo {
            self.theme.key_style()
        } else {
            self.theme.dimmed_style()
        };
        Paragraph::new(Line::from(Span::styled(UNDO_LABEL, undo_style)))
            .render(Self::undo_area(area), buf);
    }
}
