//! Ephemeral, auto-dismissing status messages.
//!
//! Single-slot queue: showing a message overwrites whatever is visible and
//! restarts the display window from that call. Expiry is evaluated on UI
//! ticks rather than a dedicated timer.

use std::time::{Duration, Instant};

/// How long a message stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any visible one and restarting the window.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(Instant::now(), message, severity);
    }

    /// Same as [`show`](Self::show) with an explicit timestamp (test seam).
    pub fn show_at(&mut self, now: Instant, message: impl Into<String>, severity: Severity) {
        self.current = Some(Toast {
            message: message.into(),
            severity,
            shown_at: now,
        });
    }

    /// Dismiss the visible message before its window elapses.
    pub fn hide(&mut self) {
        self.current = None;
    }

    /// Expire the message once its window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.current {
            if now.duration_since(toast.shown_at) >= TOAST_DURATION {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_expire() {
        let start = Instant::now();
        let mut slot = ToastSlot::new();
        slot.show_at(start, "saved", Severity::Success);
        slot.tick(start + Duration::from_secs(5));
        assert!(slot.current().is_some());
        slot.tick(start + TOAST_DURATION);
        assert!(slot.current().is_none());
    }

    #[test]
    fn second_show_replaces_and_restarts_the_window() {
        let start = Instant::now();
        let mut slot = ToastSlot::new();
        slot.show_at(start, "first", Severity::Info);
        slot.show_at(start + Duration::from_secs(4), "second", Severity::Error);

        let toast = slot.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Error);

        // 5s after the second call: still visible, 9s after the first.
        slot.tick(start + Duration::from_secs(9));
        assert_eq!(slot.current().unwrap().message, "second");

        slot.tick(start + Duration::from_secs(10));
        assert!(slot.current().is_none());
    }

    #[test]
    fn hide_preempts_the_window() {
        let start = Instant::now();
        let mut slot = ToastSlot::new();
        slot.show_at(start, "working", Severity::Info);
        slot.hide();
        assert!(slot.current().is_none());
    }
}
