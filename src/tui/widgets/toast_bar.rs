//! Toast Bar Widget
//!
//! Single-line strip at the bottom of the screen showing the current
//! ephemeral status message in its severity color.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::tui::theme::Theme;
use crate::ui::{Severity, Toast};

const INDICATOR: char = '●';

pub struct ToastBar<'a> {
    toast: Option<&'a Toast>,
    theme: &'a Theme,
}

impl<'a> ToastBar<'a> {
    pub fn new(toast: Option<&'a Toast>, theme: &'a Theme) -> Self {
        Self { toast, theme }
    }

    fn severity_color(&self, severity: Severity) -> ratatui::style::Color {
        match severity {
            Severity::Success => self.theme.green,
            Severity::Error => self.theme.red,
            Severity::Warning => self.theme.yellow,
            Severity::Info => self.theme.blue,
        }
    }
}

impl Widget for ToastBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base_style = Style::default().bg(self.theme.bg_panel);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_style(base_style);
            }
        }

        let Some(toast) = self.toast else {
            // Idle: single muted center dot.
            let center_x = area.left() + area.width / 2;
            buf[(center_x, area.top())]
                .set_char('·')
                .set_style(Style::default().fg(self.theme.text_muted).bg(self.theme.bg_panel));
            return;
        };

        let style = Style::default()
            .fg(self.severity_color(toast.severity))
            .bg(self.theme.bg_panel);
        let text = format!("{} {}", INDICATOR, toast.message);
        let y = area.top();
        for (i, ch) in text.chars().enumerate() {
            let x = area.left() + 1 + i as u16;
            if x >= area.right() {
                break;
            }
            buf[(x, y)].set_char(ch).set_style(style);
        }
    }
}
