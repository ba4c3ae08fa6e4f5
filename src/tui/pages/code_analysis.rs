//! Code analysis page
//!
//! Paste code, pick a language, send it to the backend, show the analysis.

use crate::api::types::AnalysisResult;
use crate::api::ApiError;
use crate::ui::{AsyncOp, OpToken, Severity, ToastSlot};

/// Languages the backend accepts.
pub const LANGUAGES: [&str; 4] = ["python", "javascript", "java", "typescript"];

#[derive(Debug, Default)]
pub struct CodeAnalysisPage {
    pub code: String,
    pub language_index: usize,
    pub analysis: AsyncOp<AnalysisResult>,
}

impl CodeAnalysisPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> &'static str {
        LANGUAGES[self.language_index]
    }

    pub fn next_language(&mut self) {
        self.language_index = (self.language_index + 1) % LANGUAGES.len();
    }

    pub fn prev_language(&mut self) {
        self.language_index = (self.language_index + LANGUAGES.len() - 1) % LANGUAGES.len();
    }

    pub fn input_char(&mut self, c: char) {
        self.code.push(c);
    }

    pub fn newline(&mut self) {
        self.code.push('\n');
    }

    pub fn backspace(&mut self) {
        self.code.pop();
    }

    /// Presence check before any call is made.
    pub fn can_analyze(&self) -> bool {
        !self.code.trim().is_empty()
    }

    /// Begin an analysis call, or raise a validation toast when there is
    /// nothing to analyze. Returns the token plus the request parameters.
    pub fn begin_analysis(&mut self, toast: &mut ToastSlot) -> Option<(OpToken, String, String)> {
        if !self.can_analyze() {
            toast.show("Enter some code to analyze", Severity::Error);
            return None;
        }
        Some((
            self.analysis.start(),
            self.code.clone(),
            self.language().to_string(),
        ))
    }

    pub fn apply_analysis(
        &mut self,
        token: OpToken,
        result: Result<AnalysisResult, ApiError>,
        toast: &mut ToastSlot,
    ) {
        match result {
            Ok(analysis) => {
                self.analysis.resolve(token, analysis);
            }
            Err(err) => {
                if self.analysis.reject(token, err.message.clone()) {
                    toast.show(err.message, Severity::Error);
                }
            }
        }
    }
}
