//! Widget and page rendering tests
//!
//! Renders into a test backend and asserts on the captured buffer.
//!
//! Run: cargo test --test widget_render

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use docgen::tui::renderer;
use docgen::tui::theme::Theme;
use docgen::tui::widgets::{Header, ToastBar};
use docgen::tui::{AppState, Page, ThemeMode};
use docgen::ui::{Severity, ToastSlot};

/// Helper to render a widget and capture the buffer as text.
fn render_widget<W>(widget: W, width: u16, height: u16) -> String
where
    W: ratatui::widgets::Widget,
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let area = Rect {
                x: 0,
                y: 0,
                width,
                height,
            };
            f.render_widget(widget, area);
        })
        .unwrap();

    buffer_text(&terminal)
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let area = buf.area;
    let mut result = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            result.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        result.push('\n');
    }
    result
}

#[test]
fn header_shows_title_and_all_page_tabs() {
    let theme = Theme::default();
    let widget = Header::new(Page::Documentation, &theme);
    let output = render_widget(widget, 120, 1);

    assert!(output.contains("Documentation Generator"));
    for page in Page::ALL {
        assert!(output.contains(page.title()), "missing tab {}", page.title());
    }
}

#[test]
fn toast_bar_shows_the_current_message() {
    let theme = Theme::default();
    let mut slot = ToastSlot::new();
    slot.show("Diagram generated", Severity::Success);

    let widget = ToastBar::new(slot.current(), &theme);
    let output = render_widget(widget, 80, 1);
    assert!(output.contains("Diagram generated"));
}

#[test]
fn toast_bar_idles_with_a_dot() {
    let theme = Theme::default();
    let widget = ToastBar::new(None, &theme);
    let output = render_widget(widget, 80, 1);
    assert!(output.contains('·'));
}

#[test]
fn every_page_renders_without_panicking() {
    let mut state = AppState::new(ThemeMode::Dark);
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();

    for page in Page::ALL {
        state.page = page;
        terminal.draw(|frame| renderer::draw(frame, &state)).unwrap();
    }
}

#[test]
fn workflows_page_lists_the_demo_records() {
    let mut state = AppState::new(ThemeMode::Dark);
    state.page = Page::Workflows;

    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| renderer::draw(frame, &state)).unwrap();

    let output = buffer_text(&terminal);
    assert!(output.contains("API Documentation"));
    assert!(output.contains("Code Analysis Report"));
    assert!(output.contains("[Active]"));
}

#[test]
fn light_theme_renders_too() {
    let mut state = AppState::new(ThemeMode::Light);
    state.toggle_theme();
    assert_eq!(state.theme_mode, ThemeMode::Dark);
    state.toggle_theme();
    assert_eq!(state.theme_mode, ThemeMode::Light);

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| renderer::draw(frame, &state)).unwrap();
}
