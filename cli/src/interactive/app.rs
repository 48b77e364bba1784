//! Interactive departure board
//!
//! The app owns the departure feeds and the key handling; the navigator
//! lives behind a [`RouterHandle`] provided through context.

use super::components::StatusLine;
use super::keys::{handle_key, KeyCommand};
use super::router::{use_router_handle, RouterHandle, RouterView};
use crate::commands::load_routes;
use anyhow::Result;
use chrono::{DateTime, Local};
use iocraft::prelude::*;
use kiosk_core::departures::{refresh_boards, source_from_config, Board, Boards, DepartureSource};
use kiosk_core::{KioskConfig, Navigation, Navigator, RenderContext};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How often the refresh loop checks whether a fetch is due
const REFRESH_POLL: Duration = Duration::from_millis(250);

/// Shared state handed to the app component
#[derive(Clone)]
pub struct AppContext {
    pub config: KioskConfig,
    pub source: Arc<dyn DepartureSource>,
    pub started_at: DateTime<Local>,
}

#[derive(Default, Props)]
pub struct KioskAppProps {
    pub context: Option<AppContext>,
}

/// Run the interactive board until the user quits
pub async fn run_interactive(config: KioskConfig, open: Option<String>) -> Result<()> {
    let table = Arc::new(load_routes()?);
    let navigator = Navigator::new(table, config.base()).with_max_history(config.history_limit);
    let handle = RouterHandle::new(navigator);

    if let Some(location) = open {
        if let Navigation::NotFound { location } = handle.navigate(location) {
            debug!(location = %location, "opening on the not-found page");
        }
    }

    let source: Arc<dyn DepartureSource> = Arc::from(source_from_config(&config)?);
    debug!(source = %source.describe(), "starting interactive board");

    let context = AppContext {
        config,
        source,
        started_at: Local::now(),
    };

    element! {
        ContextProvider(value: Context::owned(handle)) {
            KioskApp(context: Some(context))
        }
    }
    .render_loop()
    .await?;

    Ok(())
}

#[component]
pub fn KioskApp(mut hooks: Hooks, props: &KioskAppProps) -> impl Into<AnyElement<'static>> {
    let Some(context) = props.context.clone() else {
        return element! { View {} };
    };

    let router = use_router_handle(&mut hooks);
    let boards = hooks.use_state(Boards::new);
    let clock_tick = hooks.use_state(|| 0u64);
    let refresh_requested = hooks.use_state(|| false);
    let prompt = hooks.use_state(|| None::<String>);
    let location = hooks.use_state(|| router.current_location());
    let should_exit = hooks.use_state(|| false);

    // Fetch every board on start, then on each interval or on request
    hooks.use_future({
        let source = context.source.clone();
        let interval = context.config.refresh_interval();
        let mut boards = boards;
        let mut refresh_requested = refresh_requested;
        async move {
            let mut last_refresh: Option<Instant> = None;
            loop {
                let due = last_refresh.map_or(true, |at| at.elapsed() >= interval);
                if due || refresh_requested.get() {
                    refresh_requested.set(false);
                    let mut next = boards.read().clone();
                    refresh_boards(source.as_ref(), &Board::ALL, &mut next).await;
                    boards.set(next);
                    last_refresh = Some(Instant::now());
                }
                tokio::time::sleep(REFRESH_POLL).await;
            }
        }
    });

    // Redraw every second for the uptime and the home view's cycling
    hooks.use_future({
        let mut clock_tick = clock_tick;
        async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                clock_tick.set(clock_tick.get() + 1);
            }
        }
    });

    hooks.use_terminal_events({
        let router = router.clone();
        let mut prompt = prompt;
        let mut location = location;
        let mut refresh_requested = refresh_requested;
        let mut should_exit = should_exit;
        move |event| {
            let TerminalEvent::Key(KeyEvent { code, kind, .. }) = event else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }

            let mut input = prompt.read().clone();
            let command = handle_key(code, &mut input);
            if *prompt.read() != input {
                prompt.set(input);
            }

            match command {
                Some(KeyCommand::Named(name)) => {
                    if let Err(e) = router.navigate_named(name) {
                        warn!(error = %e, "navigation failed");
                    }
                }
                Some(KeyCommand::Location(target)) => {
                    router.navigate(target);
                }
                Some(KeyCommand::Back) => {
                    router.go_back();
                }
                Some(KeyCommand::Refresh) => refresh_requested.set(true),
                Some(KeyCommand::Quit) => should_exit.set(true),
                None => return,
            }
            location.set(router.current_location());
        }
    });

    let now = Local::now();
    let (frame, uptime) = {
        let feeds = boards.read();
        let ctx = RenderContext::new(&feeds, now, context.started_at)
            .with_cycle_interval(context.config.cycle_interval())
            .with_limit(context.config.departures_limit);
        (router.render(&ctx), ctx.elapsed())
    };
    let current_location = location.read().clone();

    let mut system = hooks.use_context_mut::<SystemContext>();
    if should_exit.get() {
        system.exit();
    }

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            RouterView(frame: frame, location: current_location.clone())
            StatusLine(
                location: current_location,
                uptime: uptime,
                can_go_back: router.can_go_back(),
                prompt: prompt.read().clone(),
                source: context.source.describe(),
            )
        }
    }
}
