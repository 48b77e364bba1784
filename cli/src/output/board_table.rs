//! Plain-text departure board
//!
//! Fixed-width, 128-column layout with right-aligned cells. A departure
//! takes one line, plus one line each for its "via" and notes, plus a
//! blank spacer line.

use kiosk_core::views::Frame;
use unicode_width::UnicodeWidthStr;

/// Total width of the board
pub const BOARD_WIDTH: usize = 128;

const STOP: usize = 5;
const SERVICE: usize = 6;
const DESTINATION: usize = 62;
const TIME: usize = 5;
const OPERATOR: usize = 26;

/// Right-align `text` in a cell of `width` terminal columns
fn pad_left(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - used), text)
    }
}

/// One board line, without the trailing newline
fn line(cells: [&str; 6]) -> String {
    let widths = [STOP, SERVICE, DESTINATION, TIME, TIME, OPERATOR];
    let mut text = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        text.push_str(&format!(" {} |", pad_left(cell, width)));
    }
    text
}

/// Render a frame as a text board
pub fn render_frame(frame: &Frame) -> String {
    let rule = "-".repeat(BOARD_WIDTH);
    let mut lines = vec![
        frame.title.clone(),
        rule.clone(),
        line(["STOP", "ROUTE", "DESTINATION", "SCH", "EST", "OPERATOR"]),
        rule.clone(),
    ];

    if let Some(notice) = &frame.notice {
        lines.push(format!("| {}", notice));
    }

    for departure in &frame.rows {
        let mut main = line([
            departure.stop.label(),
            &departure.service,
            &departure.destination,
            &departure.scheduled,
            departure.expected.as_deref().unwrap_or(""),
            &departure.operator,
        ]);
        if let Some(debug) = departure.debug.as_deref().filter(|debug| !debug.is_empty()) {
            main.push_str(&format!(" {}", debug));
        }
        lines.push(main);

        if let Some(via) = &departure.via {
            lines.push(line(["", "", &format!("via {}", via), "", "", ""]));
        }
        if let Some(notes) = &departure.notes {
            lines.push(line(["", "", notes, "", "", ""]));
        }
        lines.push(line(["", "", "", "", "", ""]));
    }

    lines.push(rule);
    lines.push(pad_left(&frame.footer, BOARD_WIDTH - 1));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::departures::{Board, Departure, StopMarker};

    fn frame(rows: Vec<Departure>, notice: Option<&str>) -> Frame {
        Frame {
            title: "Bus Station".to_string(),
            board: Board::BusStation,
            rows,
            notice: notice.map(str::to_string),
            footer: "Data From bustimes.org".to_string(),
        }
    }

    fn departure() -> Departure {
        Departure {
            stop: StopMarker {
                indicator: None,
                icon: None,
                bay: Some("23".to_string()),
            },
            service: "6.4".to_string(),
            destination: "Belper Estates fast".to_string(),
            via: Some("A38 to Kilburn Toll Bar".to_string()),
            notes: Some("Returns to Derby as 6.4 via Duffield".to_string()),
            scheduled: "17:20".to_string(),
            expected: Some("17:24".to_string()),
            operator: "trentbarton".to_string(),
            debug: None,
        }
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("6.1", 6), "   6.1");
        assert_eq!(pad_left("toolong", 3), "toolong");
        assert_eq!(pad_left("", 2), "  ");
    }

    #[test]
    fn test_rows_fill_board_width() {
        let text = render_frame(&frame(vec![departure()], None));
        let header = text.lines().nth(2).expect("header line");

        assert_eq!(UnicodeWidthStr::width(header), BOARD_WIDTH);
        assert!(header.contains("DESTINATION"));
    }

    #[test]
    fn test_departure_lines() {
        let text = render_frame(&frame(vec![departure()], None));

        assert!(text.contains("|    23 |    6.4 |"));
        assert!(text.contains("via A38 to Kilburn Toll Bar |"));
        assert!(text.contains("Returns to Derby as 6.4 via Duffield |"));
        assert!(text.contains("| 17:20 | 17:24 |"));
        assert!(text.trim_end().ends_with("Data From bustimes.org"));
    }

    #[test]
    fn test_notice_is_shown() {
        let text = render_frame(&frame(Vec::new(), Some("No departures scheduled")));
        assert!(text.contains("| No departures scheduled"));
    }

    #[test]
    fn test_line_layout() {
        let mut row = departure();
        row.via = None;
        row.notes = None;
        row.debug = Some("cancelled upstream".to_string());

        let text = render_frame(&frame(vec![row], None));
        let lines: Vec<&str> = text.lines().collect();

        // title, rule, header, rule, row, spacer, rule, footer
        assert_eq!(lines.len(), 8);
        assert!(lines[4].ends_with("| cancelled upstream"));
        assert_eq!(UnicodeWidthStr::width(lines[5]), BOARD_WIDTH);
        assert!(text.ends_with('\n'));
    }
}
