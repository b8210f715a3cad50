//! # Application Events
//!
//! Events delivered to the main loop from the input reader task.

use crate::app::commands::Command;

/// Input results sent to the main loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A parsed shell command
    Command(Command),
    /// A line that did not parse; carries the usage error
    Invalid(String),
    /// Input stream closed (EOF or reader error)
    InputClosed,
}

impl AppEvent {
    /// Event for one raw input line. Blank lines produce nothing.
    pub fn from_line(line: &str) -> Option<Self> {
        match Command::parse(line) {
            Ok(Some(command)) => Some(AppEvent::Command(command)),
            Ok(None) => None,
            Err(usage) => Some(AppEvent::Invalid(usage)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line() {
        assert_eq!(AppEvent::from_line("   "), None);
        assert_eq!(AppEvent::from_line("cancel"), Some(AppEvent::Command(Command::Cancel)));
        assert!(matches!(AppEvent::from_line("fly"), Some(AppEvent::Invalid(_))));
    }
}
