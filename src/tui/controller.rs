//! Event loop and key routing.
//!
//! Owns the app state and the service bundle. Backend calls run as spawned
//! tasks; their completions come back over the message channel and are
//! folded into page state between renders.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::app::{AppState, Page};
use super::events::{AppMsg, Event, EventHandler};
use super::pages::documentation::WizardStep;
use super::renderer;
use crate::services::Services;

pub struct Controller {
    pub state: AppState,
    services: Services,
    events: EventHandler,
    msg_tx: mpsc::UnboundedSender<AppMsg>,
    msg_rx: mpsc::UnboundedReceiver<AppMsg>,
}

impl Controller {
    pub fn new(state: AppState, services: Services) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            state,
            services,
            events: EventHandler::default(),
            msg_tx,
            msg_rx,
        }
    }

    /// Run the UI loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        // The template list drives the wizard's first step; fetch it up front.
        self.spawn_templates_fetch();

        while !self.state.should_quit {
            terminal.draw(|frame| renderer::draw(frame, &self.state))?;

            match self.events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(..) | Event::Mouse(_) | Event::Tick => {}
            }

            while let Ok(msg) = self.msg_rx.try_recv() {
                self.state.apply_msg(msg);
            }
            self.state.toast.tick(Instant::now());
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first.
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.state.quit();
                return;
            }
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
                self.state.next_page();
                return;
            }
            (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
                self.state.previous_page();
                return;
            }
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                self.state.toggle_theme();
                return;
            }
            _ => {}
        }

        match self.state.page {
            Page::Documentation => self.handle_documentation_key(key),
            Page::CodeAnalysis => self.handle_code_analysis_key(key),
            Page::WorkflowBuilder => self.handle_builder_key(key),
            Page::Workflows => self.handle_workflows_key(key),
        }
    }

    // --- documentation wizard -----------------------------------------------

    fn handle_documentation_key(&mut self, key: KeyEvent) {
        let step = self.state.documentation.step;
        match step {
            WizardStep::TemplateSelection => match key.code {
                KeyCode::Up => self.state.documentation.cursor_up(),
                KeyCode::Down => self.state.documentation.cursor_down(),
                KeyCode::Enter => self.spawn_sections_fetch(),
                _ => {}
            },
            WizardStep::ContentEntry | WizardStep::AiReview => {
                match (key.code, key.modifiers) {
                    (KeyCode::Up, _) => self.state.documentation.field_up(),
                    (KeyCode::Down, _) => self.state.documentation.field_down(),
                    (KeyCode::Right, KeyModifiers::CONTROL) => {
                        self.state.documentation.advance()
                    }
                    (KeyCode::Left, KeyModifiers::CONTROL) => {
                        self.state.documentation.go_back()
                    }
                    (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                        if step == WizardStep::AiReview {
                            self.spawn_generation();
                        }
                    }
                    (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                        self.state.documentation.input_char(c)
                    }
                    (KeyCode::Enter, _) => self.state.documentation.input_char('\n'),
                    (KeyCode::Backspace, _) => self.state.documentation.backspace(),
                    _ => {}
                }
            }
        }
    }

    // --- code analysis ------------------------------------------------------

    fn handle_code_analysis_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.state.code_analysis.next_language()
            }
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.spawn_analysis(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.state.code_analysis.input_char(c)
            }
            (KeyCode::Enter, _) => self.state.code_analysis.newline(),
            (KeyCode::Tab, _) => {
                // Code is pasted more often than typed; keep literal tabs.
                self.state.code_analysis.input_char('\t')
            }
            (KeyCode::Backspace, _) => self.state.code_analysis.backspace(),
            _ => {}
        }
    }

    // --- workflow diagram builder -------------------------------------------

    fn handle_builder_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) => self.state.builder.focus_next(),
            (KeyCode::BackTab, _) => self.state.builder.focus_prev(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.state.builder.add_step();
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.state.builder.add_participant();
            }
            (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
                self.state.builder.remove_focused_entry()
            }
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.spawn_diagram(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.state.builder.input_char(c)
            }
            (KeyCode::Backspace, _) => self.state.builder.backspace(),
            _ => {}
        }
    }

    // --- workflow list ------------------------------------------------------

    fn handle_workflows_key(&mut self, key: KeyEvent) {
        if self.state.workflows.dialog.is_some() {
            match key.code {
                KeyCode::Esc => self.state.workflows.close_dialog(),
                KeyCode::Tab => self.state.workflows.dialog_toggle_field(),
                KeyCode::Enter => {
                    let AppState {
                        workflows, toast, ..
                    } = &mut self.state;
                    workflows.save_dialog(toast);
                }
                KeyCode::Char(c) => self.state.workflows.dialog_input(c),
                KeyCode::Backspace => self.state.workflows.dialog_backspace(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Up => self.state.workflows.select_prev(),
            KeyCode::Down => self.state.workflows.select_next(),
            KeyCode::Char('n') => self.state.workflows.open_create_dialog(),
            KeyCode::Char('e') => self.state.workflows.open_edit_dialog(),
            KeyCode::Char('t') => self.state.workflows.toggle_selected(),
            KeyCode::Char('d') => self.state.workflows.delete_selected(),
            _ => {}
        }
    }

    // --- backend calls ------------------------------------------------------

    fn spawn_templates_fetch(&mut self) {
        let token = self.state.documentation.begin_templates_fetch();
        let service = self.services.documentation.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let result = service.get_templates().await;
            let _ = tx.send(AppMsg::TemplatesLoaded { token, result });
        });
    }

    fn spawn_sections_fetch(&mut self) {
        let Some((token, template_id)) = self.state.documentation.select_template() else {
            return;
        };
        let service = self.services.documentation.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let result = service.get_template_sections(&template_id).await;
            let _ = tx.send(AppMsg::SectionsLoaded {
                token,
                template_id,
                result,
            });
        });
    }

    fn spawn_generation(&mut self) {
        let Some((token, template_type, section, context)) =
            self.state.documentation.begin_generation()
        else {
            return;
        };
        let service = self.services.documentation.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let result = service
                .generate_section(&template_type, &section, context)
                .await;
            let _ = tx.send(AppMsg::SectionGenerated { token, result });
        });
    }

    fn spawn_analysis(&mut self) {
        let AppState {
            code_analysis,
            toast,
            ..
        } = &mut self.state;
        let Some((token, code, language)) = code_analysis.begin_analysis(toast) else {
            return;
        };
        let service = self.services.code_analysis.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let result = service.analyze_code(&code, &language).await;
            let _ = tx.send(AppMsg::AnalysisFinished { token, result });
        });
    }

    fn spawn_diagram(&mut self) {
        let AppState { builder, toast, .. } = &mut self.state;
        let Some((token, request)) = builder.begin_generate(toast) else {
            return;
        };
        let service = self.services.workflow.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let result = service.generate_diagram(&request).await;
            let _ = tx.send(AppMsg::DiagramFinished { token, result });
        });
    }
}
