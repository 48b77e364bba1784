//! UI framework integration for the navigator
//!
//! Bridges the core [`Navigator`] with iocraft: a shareable handle the app
//! hands down through context, and a component that draws whatever the
//! current location activates.

use crate::interactive::pages::{BoardPage, NotFoundPage};
use iocraft::prelude::*;
use kiosk_core::{Frame, Navigation, Navigator, RenderContext, RouteError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A shareable, UI-friendly handle to control the navigator
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Navigator>>);

impl RouterHandle {
    /// Create a new router handle
    pub fn new(navigator: Navigator) -> Self {
        Self(Arc::new(Mutex::new(navigator)))
    }

    fn lock(&self) -> MutexGuard<'_, Navigator> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Navigate to a full location
    pub fn navigate(&self, location: impl Into<String>) -> Navigation {
        self.lock().push(location)
    }

    /// Navigate to a route by name
    pub fn navigate_named(&self, name: &str) -> Result<Navigation, RouteError> {
        self.lock().push_named(name)
    }

    /// Get the current location
    pub fn current_location(&self) -> String {
        self.lock().current_location().to_string()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.lock().can_go_back()
    }

    /// Go back to the previous location
    pub fn go_back(&self) -> bool {
        self.lock().go_back()
    }

    /// Render the active view, `None` when the location matched no route
    pub fn render(&self, ctx: &RenderContext<'_>) -> Option<Frame> {
        self.lock().render(ctx)
    }
}

/// Get the router handle provided by an enclosing `ContextProvider`
pub fn use_router_handle(hooks: &mut Hooks) -> RouterHandle {
    hooks.use_context::<RouterHandle>().clone()
}

/// Router view component properties
#[derive(Default, Props)]
pub struct RouterViewProps {
    /// Frame of the active view, `None` when nothing matched
    pub frame: Option<Frame>,
    /// Location being shown
    pub location: String,
}

/// Draws the active view, or a "Route Not Found" page for unmatched locations
#[component]
pub fn RouterView(props: &RouterViewProps) -> impl Into<AnyElement<'static>> {
    let page_element: AnyElement<'static> = match &props.frame {
        Some(frame) => element! {
            BoardPage(frame: Some(frame.clone()))
        }
        .into(),
        None => element! {
            NotFoundPage(location: props.location.clone())
        }
        .into(),
    };

    element! {
        View(
            key: "router-container",
            width: 100pct,
            flex_grow: 1.0,
        ) {
            #(page_element)
        }
    }
}
