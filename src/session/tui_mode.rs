//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::numerology::StandardCalculator;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// Sets up the terminal, runs the UI loop until the user quits and restores
/// the terminal even when the loop fails.
pub fn run_tui_mode(ui_config: UIConfig) -> Result<(), Box<dyn Error>> {
    print_session_starting(
        "TUI",
        &ui_config.defaults.first_name,
        &ui_config.defaults.last_name,
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(Box::new(StandardCalculator), ui_config);
    let result = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();
    Ok(())
}
