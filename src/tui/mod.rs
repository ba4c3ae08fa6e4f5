//! Terminal user interface.
//!
//! Pages compose service calls and state containers into the user-facing
//! flows; the controller runs the event loop and the renderer draws it all.

pub mod app;
pub mod controller;
pub mod events;
pub mod pages;
pub mod renderer;
pub mod theme;
pub mod widgets;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub use app::{AppState, Page};
pub use controller::Controller;
pub use events::{AppMsg, Event, EventHandler};
pub use theme::{Theme, ThemeMode};

use crate::api::ApiClient;
use crate::config::Config;
use crate::services::Services;

/// Run the interactive front-end until the user quits.
pub async fn run(config: Config) -> Result<()> {
    let client = Arc::new(ApiClient::new(config.backend.base_url.clone()));
    let services = Services::new(client);
    let state = AppState::new(ThemeMode::from_name(&config.ui.theme));
    let mut controller = Controller::new(state, services);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
