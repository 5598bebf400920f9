use crate::logging::LogLevel;
use crate::numerology::ComputationError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_computation_error(&self, error: &ComputationError) -> LogLevel {
        match error {
            // Non-critical: the user can fix the input
            ComputationError::InvalidDate { .. } => LogLevel::Warn,
            ComputationError::EmptyName(_) => LogLevel::Warn,
            ComputationError::MalformedName { .. } => LogLevel::Warn,

            // Critical: calculator fault
            ComputationError::Internal(_) => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
