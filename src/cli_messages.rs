//! CLI command messaging system
//!
//! Consistent messaging for the non-interactive commands (show, set-defaults,
//! reset).

/// Kind of a CLI message, which decides its tag and color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warn,
    Error,
    Success,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;33m[INFO]\x1b[0m",
            MessageKind::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            MessageKind::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            MessageKind::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// Format a CLI message line.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", kind.tag(), title)
    } else {
        format!("{} {}\t {}", kind.tag(), title, details)
    }
}

/// Print CLI command message
pub fn print_message(kind: MessageKind, title: &str, details: &str) {
    println!("{}", format_message(kind, title, details));
}

/// Print a diagnostic line to stderr, leaving stdout to command output
pub fn eprint_message(kind: MessageKind, title: &str, details: &str) {
    eprintln!("{}", format_message(kind, title, details));
}

/// Macro for CLI info messages
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Info,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI warnings
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::MessageKind::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Error,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Success,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI warnings written to stderr
#[macro_export]
macro_rules! eprint_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::eprint_message(
            $crate::cli_messages::MessageKind::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_without_details() {
        assert_eq!(
            format_message(MessageKind::Info, "Saved", ""),
            "\x1b[1;33m[INFO]\x1b[0m Saved"
        );
    }

    #[test]
    fn test_format_message_with_details() {
        let line = format_message(MessageKind::Error, "Failed", "reason");
        assert!(line.contains("[ERROR]"));
        assert!(line.ends_with("Failed\t reason"));
    }
}
