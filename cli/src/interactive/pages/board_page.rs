//! Board page component
//!
//! Draws one view frame: a title, the column header, one block per
//! departure and the attribution footer.

use iocraft::prelude::*;
use kiosk_core::departures::Departure;
use kiosk_core::Frame;

/// Properties for the board page component
#[derive(Default, Props)]
pub struct BoardPageProps {
    pub frame: Option<Frame>,
}

/// Colour for the expected time: yellow when running late
fn expected_color(departure: &Departure) -> Color {
    if departure.is_late() {
        Color::Yellow
    } else {
        Color::Green
    }
}

#[component]
fn DepartureRow(props: &DepartureRowProps) -> impl Into<AnyElement<'static>> {
    let Some(departure) = &props.departure else {
        return element! { View {} };
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct, margin_bottom: 1) {
            View(flex_direction: FlexDirection::Row, width: 100pct) {
                View(width: 6) {
                    Text(content: departure.stop.label(), color: Color::Grey)
                }
                View(width: 8) {
                    Text(content: departure.service.clone(), weight: Weight::Bold, color: Color::Cyan)
                }
                View(flex_grow: 1.0) {
                    Text(content: departure.destination.clone(), weight: Weight::Bold)
                }
                View(width: 7) {
                    Text(content: departure.scheduled.clone())
                }
                View(width: 7) {
                    Text(
                        content: departure.expected.clone().unwrap_or_default(),
                        color: expected_color(departure),
                    )
                }
                View(width: 20) {
                    Text(content: departure.operator.clone(), color: Color::Grey)
                }
            }
            #(departure.via.as_ref().map(|via| element! {
                View(padding_left: 14) {
                    Text(content: format!("via {}", via), color: Color::Grey)
                }
            }))
            #(departure.notes.as_ref().map(|notes| element! {
                View(padding_left: 14) {
                    Text(content: notes.clone(), color: Color::DarkYellow)
                }
            }))
        }
    }
}

#[derive(Default, Props)]
struct DepartureRowProps {
    departure: Option<Departure>,
}

/// Board page showing a rendered frame
#[component]
pub fn BoardPage(props: &BoardPageProps) -> impl Into<AnyElement<'static>> {
    let Some(frame) = &props.frame else {
        return element! { View {} };
    };

    element! {
        View(
            key: "board-page",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: frame.title.clone(), weight: Weight::Bold, color: Color::Cyan)
            View(height: 1)

            View(flex_direction: FlexDirection::Row, width: 100pct) {
                View(width: 6) { Text(content: "Stop", color: Color::Grey) }
                View(width: 8) { Text(content: "Route", color: Color::Grey) }
                View(flex_grow: 1.0) { Text(content: "Destination", color: Color::Grey) }
                View(width: 7) { Text(content: "Sch", color: Color::Grey) }
                View(width: 7) { Text(content: "Est", color: Color::Grey) }
                View(width: 20) { Text(content: "Operator", color: Color::Grey) }
            }

            #(frame.notice.as_ref().map(|notice| element! {
                View(padding_top: 1, padding_bottom: 1) {
                    Text(content: notice.clone(), color: Color::Yellow)
                }
            }))

            #(frame.rows.iter().enumerate().map(|(index, departure)| element! {
                DepartureRow(key: index, departure: Some(departure.clone()))
            }))

            View(justify_content: JustifyContent::FlexEnd, width: 100pct) {
                Text(content: frame.footer.clone(), color: Color::DarkGrey)
            }
        }
    }
}
