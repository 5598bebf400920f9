//! Error handling for the numerology calculator

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputationError {
    /// The day/month/year combination does not exist on the calendar.
    #[error("תאריך לא קיים: {day}/{month}/{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },

    /// A name field was empty or contained only ignorable characters.
    #[error("השדה '{0}' ריק")]
    EmptyName(&'static str),

    /// A name contained a character with no numeric value.
    #[error("תו לא נתמך '{ch}' בשם '{name}'")]
    MalformedName { name: String, ch: char },

    /// Any other calculator fault.
    #[error("שגיאה פנימית: {0}")]
    Internal(String),
}
