//! Dashboard state management
//!
//! Contains the main dashboard state struct

use super::page::{RenderState, Results};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use crate::ui::app::UIConfig;
use crate::ui::form::InputForm;

use std::collections::VecDeque;

/// Dashboard state: the form, the request-scoped render state and the
/// results of the latest render pass.
#[derive(Debug)]
pub struct DashboardState {
    /// Sidebar input form.
    pub form: InputForm,
    /// State carried between render passes.
    pub render_state: RenderState,
    /// Results of the latest render pass.
    pub results: Results,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<Event>,
    /// First visible line of the analysis section.
    pub analysis_scroll: u16,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Right-to-left layout
    pub rtl: bool,

    error_classifier: ErrorClassifier,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(ui_config: &UIConfig) -> Self {
        Self {
            form: InputForm::new(&ui_config.defaults, ui_config.max_year),
            render_state: RenderState::default(),
            results: Results::Idle,
            activity_logs: VecDeque::new(),
            analysis_scroll: 0,
            with_background_color: ui_config.with_background_color,
            rtl: ui_config.rtl,
            error_classifier: ErrorClassifier::new(),
        }
    }

    pub fn error_classifier(&self) -> &ErrorClassifier {
        &self.error_classifier
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
