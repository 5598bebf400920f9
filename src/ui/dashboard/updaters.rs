//! Dashboard state update logic
//!
//! Key handling and render passes

use super::page::{Results, error_message, render_pass};
use super::state::DashboardState;

use crate::events::Event;
use crate::numerology::Calculator;
use crate::ui::form::FormAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines moved by one PageUp/PageDown in the analysis section.
const ANALYSIS_SCROLL_STEP: u16 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

impl DashboardState {
    /// Handle one key press; form changes start a new render pass.
    pub fn handle_key(&mut self, key: KeyEvent, calculator: &dyn Calculator) -> KeyOutcome {
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            return KeyOutcome::Quit;
        }

        match key.code {
            KeyCode::PageDown => {
                self.analysis_scroll = self.analysis_scroll.saturating_add(ANALYSIS_SCROLL_STEP);
            }
            KeyCode::PageUp => {
                self.analysis_scroll = self.analysis_scroll.saturating_sub(ANALYSIS_SCROLL_STEP);
            }
            _ => match self.form.handle_key(key) {
                FormAction::Submit => self.rerender(true, calculator),
                FormAction::Edited => self.rerender(false, calculator),
                FormAction::None => {}
            },
        }
        KeyOutcome::Continue
    }

    /// Run a render pass with the current form inputs and record the outcome.
    pub fn rerender(&mut self, trigger: bool, calculator: &dyn Calculator) {
        let input = self.form.input_set();
        self.results = render_pass(
            &input,
            &mut self.render_state,
            trigger,
            self.rtl,
            calculator,
        );
        if trigger {
            self.analysis_scroll = 0;
        }

        let event = match &self.results {
            Results::Idle => return,
            Results::Ready(_) => {
                let msg = format!(
                    "{} {} {}/{}/{}",
                    input.first_name, input.last_name, input.day, input.month, input.year
                );
                if trigger {
                    Event::success(format!("חושב: {msg}"))
                } else {
                    Event::refresh(format!("עודכן: {msg}"))
                }
            }
            Results::Failed(e) => {
                let level = self.error_classifier().classify_computation_error(e);
                Event::error_with_level(error_message(e), level)
            }
        };
        self.add_to_activity_log(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
    use crate::events::EventType;
    use crate::numerology::{InputSet, StandardCalculator};
    use crate::ui::app::UIConfig;

    fn state() -> DashboardState {
        DashboardState::new(&UIConfig::new(
            false,
            true,
            InputSet {
                day: 26,
                month: 11,
                year: 1976,
                first_name: "תומר".to_string(),
                last_name: "נוי".to_string(),
            },
            2026,
        ))
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyOutcome {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &StandardCalculator)
    }

    #[test]
    fn test_enter_triggers_calculation() {
        let mut state = state();
        assert_eq!(press(&mut state, KeyCode::Enter), KeyOutcome::Continue);
        assert!(matches!(state.results, Results::Ready(_)));
        assert!(state.render_state.calculated);
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.activity_logs[0].event_type, EventType::Success);
    }

    #[test]
    // Editing before the first trigger leaves the page idle.
    fn test_edits_before_trigger_stay_idle() {
        let mut state = state();
        press(&mut state, KeyCode::Up);
        assert_eq!(state.form.input_set().day, 27);
        assert_eq!(state.results, Results::Idle);
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    // After the trigger, an edit that makes the date impossible shows only the error.
    fn test_edit_after_trigger_recalculates() {
        let mut state = state();
        press(&mut state, KeyCode::Enter);
        for _ in 0..5 {
            press(&mut state, KeyCode::Up);
        }
        assert_eq!(state.form.input_set().day, 31);
        assert!(matches!(state.results, Results::Failed(_)));
        let last = state.activity_logs.back().unwrap();
        assert_eq!(last.event_type, EventType::Error);

        press(&mut state, KeyCode::Down);
        assert!(matches!(state.results, Results::Ready(_)));
        assert_eq!(
            state.activity_logs.back().unwrap().event_type,
            EventType::Refresh
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert_eq!(press(&mut state, KeyCode::Esc), KeyOutcome::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            state.handle_key(ctrl_c, &StandardCalculator),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn test_scroll_resets_on_trigger() {
        let mut state = state();
        press(&mut state, KeyCode::PageDown);
        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.analysis_scroll, 10);
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.analysis_scroll, 5);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.analysis_scroll, 0);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for _ in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.rerender(true, &StandardCalculator);
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
