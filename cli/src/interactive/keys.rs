//! Key bindings for the interactive board
//!
//! Kept free of hooks so the mapping can be tested without a terminal.

use iocraft::prelude::*;
use kiosk_core::routes::{BUS_STATION, CATHEDRAL_QUARTER, HOME};

/// What a key press asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    /// Navigate to a route by name
    Named(&'static str),
    /// Navigate to a typed location
    Location(String),
    Back,
    Refresh,
    Quit,
}

/// Map a key press to a command
///
/// While the path prompt is open, keys edit the prompt; Enter submits it
/// and Esc discards it.
pub fn handle_key(code: KeyCode, prompt: &mut Option<String>) -> Option<KeyCommand> {
    if let Some(input) = prompt.as_mut() {
        match code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let location = prompt.take().unwrap_or_default();
                let location = location.trim();
                if !location.is_empty() {
                    return Some(KeyCommand::Location(location.to_string()));
                }
            }
            KeyCode::Esc => *prompt = None,
            _ => {}
        }
        return None;
    }

    match code {
        KeyCode::Char('h') => Some(KeyCommand::Named(HOME)),
        KeyCode::Char('c') => Some(KeyCommand::Named(CATHEDRAL_QUARTER)),
        KeyCode::Char('b') => Some(KeyCommand::Named(BUS_STATION)),
        KeyCode::Char('/') => {
            *prompt = Some("/".to_string());
            None
        }
        KeyCode::Backspace | KeyCode::Left => Some(KeyCommand::Back),
        KeyCode::Char('r') => Some(KeyCommand::Refresh),
        KeyCode::Char('q') => Some(KeyCommand::Quit),
        _ => None,
    }
}

/// Key help shown in the status line
pub const KEY_HELP: &str = "h home · c cathedral quarter · b bus station · / go to · ← back · r refresh · q quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_keys() {
        let mut prompt = None;
        assert_eq!(
            handle_key(KeyCode::Char('c'), &mut prompt),
            Some(KeyCommand::Named(CATHEDRAL_QUARTER))
        );
        assert_eq!(
            handle_key(KeyCode::Char('b'), &mut prompt),
            Some(KeyCommand::Named(BUS_STATION))
        );
        assert_eq!(handle_key(KeyCode::Left, &mut prompt), Some(KeyCommand::Back));
        assert_eq!(handle_key(KeyCode::Char('q'), &mut prompt), Some(KeyCommand::Quit));
        assert_eq!(handle_key(KeyCode::Char('x'), &mut prompt), None);
    }

    #[test]
    fn test_prompt_submits_location() {
        let mut prompt = None;
        assert_eq!(handle_key(KeyCode::Char('/'), &mut prompt), None);
        assert_eq!(prompt.as_deref(), Some("/"));

        for c in "app/bsx".chars() {
            handle_key(KeyCode::Char(c), &mut prompt);
        }
        handle_key(KeyCode::Backspace, &mut prompt);
        assert_eq!(prompt.as_deref(), Some("/app/bs"));

        assert_eq!(
            handle_key(KeyCode::Enter, &mut prompt),
            Some(KeyCommand::Location("/app/bs".to_string()))
        );
        assert!(prompt.is_none());
    }

    #[test]
    fn test_prompt_keys_are_text() {
        let mut prompt = Some("/".to_string());
        assert_eq!(handle_key(KeyCode::Char('q'), &mut prompt), None);
        assert_eq!(prompt.as_deref(), Some("/q"));
    }

    #[test]
    fn test_prompt_escape_cancels() {
        let mut prompt = Some("/cq".to_string());
        assert_eq!(handle_key(KeyCode::Esc, &mut prompt), None);
        assert!(prompt.is_none());

        // Enter on a blank prompt does nothing
        let mut prompt = Some("  ".to_string());
        assert_eq!(handle_key(KeyCode::Enter, &mut prompt), None);
        assert!(prompt.is_none());
    }
}
