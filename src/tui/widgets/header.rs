//! Header widget: product title plus page tabs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::tui::app::Page;
use crate::tui::theme::Theme;

pub struct Header<'a> {
    active: Page,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(active: Page, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(
                " Documentation Generator ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", Style::default().fg(self.theme.border)),
        ];
        for page in Page::ALL {
            let style = if page == self.active {
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.theme.text_muted)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(page.title(), style));
            spans.push(Span::raw(" "));
        }

        let line = Line::from(spans);
        buf.set_style(area, Style::default().bg(self.theme.bg_panel));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
