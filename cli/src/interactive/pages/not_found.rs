//! Fallback page for locations no route matches

use iocraft::prelude::*;

/// Properties for the not-found page
#[derive(Default, Props)]
pub struct NotFoundPageProps {
    /// Location that failed to resolve
    pub location: String,
}

#[component]
pub fn NotFoundPage(props: &NotFoundPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "not-found-page",
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            width: 100pct,
            padding: 2,
        ) {
            Text(
                content: "Route Not Found",
                weight: Weight::Bold,
                color: Color::Red
            )
            Text(
                content: format!("Unknown route: {}", props.location)
            )
            View(height: 1)
            Text(
                content: "Press h for the home board or ← to go back",
                color: Color::Grey
            )
        }
    }
}
