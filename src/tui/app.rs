//! Application shell: the active page, theme context, toast slot, and the
//! routing of backend-call completions into page state.

use super::events::AppMsg;
use super::pages::{CodeAnalysisPage, DocumentationPage, WorkflowBuilderPage, WorkflowsPage};
use super::theme::{Theme, ThemeMode};
use crate::ui::ToastSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Documentation,
    CodeAnalysis,
    WorkflowBuilder,
    Workflows,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Documentation,
        Page::CodeAnalysis,
        Page::WorkflowBuilder,
        Page::Workflows,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Documentation => "Documentation",
            Self::CodeAnalysis => "Code Analysis",
            Self::WorkflowBuilder => "Diagram Builder",
            Self::Workflows => "Workflows",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Documentation => Self::CodeAnalysis,
            Self::CodeAnalysis => Self::WorkflowBuilder,
            Self::WorkflowBuilder => Self::Workflows,
            Self::Workflows => Self::Documentation,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Documentation => Self::Workflows,
            Self::CodeAnalysis => Self::Documentation,
            Self::WorkflowBuilder => Self::CodeAnalysis,
            Self::Workflows => Self::WorkflowBuilder,
        }
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub page: Page,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub toast: ToastSlot,
    pub documentation: DocumentationPage,
    pub code_analysis: CodeAnalysisPage,
    pub builder: WorkflowBuilderPage,
    pub workflows: WorkflowsPage,
}

impl AppState {
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self {
            should_quit: false,
            page: Page::default(),
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            toast: ToastSlot::new(),
            documentation: DocumentationPage::new(),
            code_analysis: CodeAnalysisPage::new(),
            builder: WorkflowBuilderPage::new(),
            workflows: WorkflowsPage::default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::from_mode(self.theme_mode);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.previous();
    }

    /// Route a backend-call completion to the page that started it.
    pub fn apply_msg(&mut self, msg: AppMsg) {
        match msg {
            AppMsg::TemplatesLoaded { token, result } => {
                self.documentation
                    .apply_templates(token, result, &mut self.toast);
            }
            AppMsg::SectionsLoaded {
                token,
                template_id,
                result,
            } => {
                self.documentation
                    .apply_sections(token, template_id, result, &mut self.toast);
            }
            AppMsg::SectionGenerated { token, result } => {
                self.documentation
                    .apply_generation(token, result, &mut self.toast);
            }
            AppMsg::AnalysisFinished { token, result } => {
                self.code_analysis
                    .apply_analysis(token, result, &mut self.toast);
            }
            AppMsg::DiagramFinished { token, result } => {
                self.builder.apply_diagram(token, result, &mut self.toast);
            }
        }
    }
}
