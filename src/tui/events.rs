//! Event handling for the TUI
//!
//! Terminal events come from crossterm's poll loop; completions of backend
//! calls arrive as [`AppMsg`] values over an mpsc channel, tagged with the
//! operation token that started them.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;

use crate::api::types::{AnalysisResult, GeneratedContent, Template, WorkflowDiagram};
use crate::api::ApiError;
use crate::ui::OpToken;

/// TUI events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for timers and animations
    Tick,
}

/// Completion of a backend call, delivered to the UI loop.
#[derive(Debug)]
pub enum AppMsg {
    TemplatesLoaded {
        token: OpToken,
        result: Result<Vec<Template>, ApiError>,
    },
    SectionsLoaded {
        token: OpToken,
        template_id: String,
        result: Result<Vec<String>, ApiError>,
    },
    SectionGenerated {
        token: OpToken,
        result: Result<GeneratedContent, ApiError>,
    },
    AnalysisFinished {
        token: OpToken,
        result: Result<AnalysisResult, ApiError>,
    },
    DiagramFinished {
        token: OpToken,
        result: Result<WorkflowDiagram, ApiError>,
    },
}

/// Event handler for polling terminal events
pub struct EventHandler {
    /// Tick rate for timers (milliseconds)
    tick_rate: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl EventHandler {
    /// Create a new event handler with specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}
