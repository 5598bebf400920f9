//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{EVENT_POLL_INTERVAL_MS, SPLASH_DURATION_SECS};
use crate::numerology::{Calculator, InputSet};
use crate::ui::dashboard::{DashboardState, KeyOutcome, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub rtl: bool,
    /// Values the form starts with.
    pub defaults: InputSet,
    /// Upper bound of the year field.
    pub max_year: i32,
}

impl UIConfig {
    pub fn new(with_background_color: bool, rtl: bool, defaults: InputSet, max_year: i32) -> Self {
        Self {
            with_background_color,
            rtl,
            defaults,
            max_year,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Form and results.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Produces the tables and analysis for a render pass.
    calculator: Box<dyn Calculator>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(calculator: Box<dyn Calculator>, ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            calculator,
            ui_config,
        }
    }

    fn open_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard(Box::new(DashboardState::new(&self.ui_config)));
    }

    /// Route one key press; returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: event::KeyEvent) -> bool {
        match &mut self.current_screen {
            Screen::Splash => {
                let ctrl_c =
                    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
                if key.code == KeyCode::Esc || ctrl_c {
                    return true;
                }
                // Any other key skips the splash screen
                self.open_dashboard();
                false
            }
            Screen::Dashboard(state) => {
                state.handle_key(key, self.calculator.as_ref()) == KeyOutcome::Quit
            }
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    loop {
        terminal.draw(|f| render(f, &app.current_screen))?;

        if let Screen::Splash = app.screen() {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) {
                    log::debug!("Quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerology::StandardCalculator;
    use crate::ui::dashboard::page::Results;
    use crossterm::event::KeyEvent;

    fn app() -> App {
        let defaults = InputSet {
            day: 26,
            month: 11,
            year: 1976,
            first_name: "תומר".to_string(),
            last_name: "נוי".to_string(),
        };
        App::new(
            Box::new(StandardCalculator),
            UIConfig::new(true, true, defaults, 2026),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_any_key_skips_splash() {
        let mut app = app();
        assert!(!app.handle_key(key(KeyCode::Char('x'))));
        assert!(matches!(app.screen(), Screen::Dashboard(_)));
    }

    #[test]
    fn test_escape_on_splash_quits() {
        let mut app = app();
        assert!(app.handle_key(key(KeyCode::Esc)));
    }

    #[test]
    fn test_enter_on_dashboard_calculates() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.handle_key(key(KeyCode::Enter)));
        match app.screen() {
            Screen::Dashboard(state) => assert!(matches!(state.results, Results::Ready(_))),
            Screen::Splash => panic!("expected dashboard"),
        }
        assert!(app.handle_key(key(KeyCode::Esc)));
    }
}
