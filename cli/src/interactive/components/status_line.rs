//! Status line component
//!
//! Shows the current location, uptime and either the key help or the open
//! path prompt.

use crate::interactive::keys::KEY_HELP;
use iocraft::prelude::*;
use kiosk_core::departures::format_uptime;
use std::time::Duration;

#[derive(Clone, Default, Props)]
pub struct StatusLineProps {
    pub location: String,
    pub uptime: Duration,
    pub can_go_back: bool,
    /// Text typed into the path prompt, when open
    pub prompt: Option<String>,
    /// Where departures come from
    pub source: String,
}

/// Text shown on the right of the status line
fn hint_text(props: &StatusLineProps) -> String {
    match &props.prompt {
        Some(input) => format!("go to: {}▏ (enter to open · esc to cancel)", input),
        None if props.can_go_back => KEY_HELP.to_string(),
        None => KEY_HELP.replace(" · ← back", ""),
    }
}

#[component]
pub fn StatusLine(props: &StatusLineProps) -> impl Into<AnyElement<'static>> {
    let hint_color = if props.prompt.is_some() {
        Color::Yellow
    } else {
        Color::Grey
    };

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
        ) {
            View(flex_direction: FlexDirection::Row, width: 100pct, justify_content: JustifyContent::SpaceBetween) {
                Text(content: props.location.clone(), weight: Weight::Bold, color: Color::Cyan)
                Text(content: props.source.clone(), color: Color::DarkGrey)
                Text(content: format_uptime(props.uptime), color: Color::Grey)
            }
            Text(content: hint_text(props), color: hint_color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_props_default() {
        let props = StatusLineProps::default();
        assert!(props.prompt.is_none());
        assert_eq!(props.uptime, Duration::ZERO);
    }

    #[test]
    fn test_hint_text() {
        let mut props = StatusLineProps::default();
        assert!(!hint_text(&props).contains("back"));

        props.can_go_back = true;
        assert_eq!(hint_text(&props), KEY_HELP);

        props.prompt = Some("/cq".to_string());
        assert!(hint_text(&props).starts_with("go to: /cq"));
    }
}
