//! Page state: one module per user-facing flow.

pub mod code_analysis;
pub mod documentation;
pub mod workflow_builder;
pub mod workflows;

pub use code_analysis::CodeAnalysisPage;
pub use documentation::{DocumentationPage, WizardStep};
pub use workflow_builder::WorkflowBuilderPage;
pub use workflows::WorkflowsPage;
