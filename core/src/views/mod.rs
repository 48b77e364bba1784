//! Views routed to by the kiosk
//!
//! A view is anything implementing [`Renderable`] that can be built with no
//! arguments. The route table only stores a [`ViewRef`]; the navigator
//! instantiates the view when its route becomes active. Views produce a
//! UI-agnostic [`Frame`] that the host draws however it likes.

mod board;
mod home;

pub use board::{BusStationView, CathedralQuarterView};
pub use home::HomeView;

use crate::departures::{sort_by_expected, Board, BoardFeed, Boards, Departure, ATTRIBUTION};
use chrono::{DateTime, Local};
use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Capability shared by every routable view
pub trait Renderable: Send + Sync {
    /// Title of the view
    fn title(&self) -> &str;

    /// Produce the view's content for the current moment
    fn render(&self, ctx: &RenderContext<'_>) -> Frame;
}

/// Everything a view may read while rendering
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub boards: &'a Boards,
    pub now: DateTime<Local>,
    pub started_at: DateTime<Local>,
    /// How long the home view shows each board
    pub cycle_interval: Duration,
    /// Maximum rows per board
    pub limit: usize,
}

impl<'a> RenderContext<'a> {
    /// Create a context with default cycling and row limits
    pub fn new(boards: &'a Boards, now: DateTime<Local>, started_at: DateTime<Local>) -> Self {
        Self {
            boards,
            now,
            started_at,
            cycle_interval: Duration::from_secs(15),
            limit: 15,
        }
    }

    /// Set the home view cycle interval
    pub fn with_cycle_interval(mut self, cycle_interval: Duration) -> Self {
        self.cycle_interval = cycle_interval;
        self
    }

    /// Set the row limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Time elapsed since the application started
    pub fn elapsed(&self) -> Duration {
        (self.now - self.started_at).to_std().unwrap_or_default()
    }
}

/// Rendered content of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    pub board: Board,
    pub rows: Vec<Departure>,
    /// Status message shown instead of, or above, the rows
    pub notice: Option<String>,
    pub footer: String,
}

impl Frame {
    /// Frame for one board, built from its current feed
    pub fn for_board(title: impl Into<String>, board: Board, ctx: &RenderContext<'_>) -> Self {
        let (rows, notice, footer) = match ctx.boards.feed(board) {
            BoardFeed::Loading => (
                Vec::new(),
                Some("Loading departures…".to_string()),
                ATTRIBUTION.to_string(),
            ),
            BoardFeed::Failed { message } => (
                Vec::new(),
                Some(format!("Could not fetch departures: {}", message)),
                ATTRIBUTION.to_string(),
            ),
            BoardFeed::Ready {
                departures,
                fetched_at,
            } => {
                let mut rows = departures.clone();
                sort_by_expected(&mut rows, &ctx.now);
                rows.truncate(ctx.limit);
                let notice = rows
                    .is_empty()
                    .then(|| "No departures scheduled".to_string());
                let footer = format!(
                    "{} - Last Updated {}",
                    ATTRIBUTION,
                    fetched_at.format("%Y-%m-%d %X")
                );
                (rows, notice, footer)
            }
        };

        Self {
            title: title.into(),
            board,
            rows,
            notice,
            footer,
        }
    }
}

type ViewFactory = dyn Fn() -> Box<dyn Renderable> + Send + Sync;

/// Shared handle to a view constructor
///
/// Cloning is cheap. Two handles are equal when they build the same view type.
#[derive(Clone)]
pub struct ViewRef {
    type_id: TypeId,
    name: &'static str,
    factory: Arc<ViewFactory>,
}

impl ViewRef {
    /// Handle for a default-constructible view type
    pub fn of<V>() -> Self
    where
        V: Renderable + Default + 'static,
    {
        let full = type_name::<V>();
        Self {
            type_id: TypeId::of::<V>(),
            name: full.rsplit("::").next().unwrap_or(full),
            factory: Arc::new(|| Box::new(V::default()) as Box<dyn Renderable>),
        }
    }

    /// Build a fresh instance of the view
    pub fn instantiate(&self) -> Box<dyn Renderable> {
        (self.factory)()
    }

    /// Short type name of the view, e.g. `BusStationView`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this handle builds views of type `V`
    pub fn is<V: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<V>()
    }
}

impl PartialEq for ViewRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ViewRef {}

impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewRef").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::departures::StopMarker;

    fn departure(service: &str, scheduled: &str) -> Departure {
        Departure {
            stop: StopMarker::default(),
            service: service.to_string(),
            destination: "Mickleover".to_string(),
            via: None,
            notes: None,
            scheduled: scheduled.to_string(),
            expected: None,
            operator: "Arriva Midlands".to_string(),
            debug: None,
        }
    }

    #[test]
    fn test_view_ref_identity() {
        let cq = ViewRef::of::<CathedralQuarterView>();

        assert_eq!(cq, ViewRef::of::<CathedralQuarterView>());
        assert_ne!(cq, ViewRef::of::<BusStationView>());
        assert!(cq.is::<CathedralQuarterView>());
        assert_eq!(cq.name(), "CathedralQuarterView");
        assert_eq!(format!("{:?}", cq), "ViewRef(\"CathedralQuarterView\")");
    }

    #[test]
    fn test_view_ref_instantiates_fresh_views() {
        let view = ViewRef::of::<BusStationView>().instantiate();
        assert_eq!(view.title(), "Bus Station");
    }

    #[test]
    fn test_frame_states() {
        let now = Local::now();
        let mut boards = Boards::new();

        let ctx = RenderContext::new(&boards, now, now);
        let frame = Frame::for_board("Bus Station", Board::BusStation, &ctx);
        assert_eq!(frame.notice.as_deref(), Some("Loading departures…"));
        assert_eq!(frame.footer, ATTRIBUTION);

        boards.set_failed(Board::BusStation, "HTTP error");
        let ctx = RenderContext::new(&boards, now, now);
        let frame = Frame::for_board("Bus Station", Board::BusStation, &ctx);
        assert_eq!(
            frame.notice.as_deref(),
            Some("Could not fetch departures: HTTP error")
        );

        boards.set_ready(Board::BusStation, Vec::new(), now);
        let ctx = RenderContext::new(&boards, now, now);
        let frame = Frame::for_board("Bus Station", Board::BusStation, &ctx);
        assert_eq!(frame.notice.as_deref(), Some("No departures scheduled"));
        assert!(frame.footer.starts_with("Data From bustimes.org - Last Updated "));
    }

    #[test]
    fn test_frame_limits_rows() {
        let now = Local::now();
        let mut boards = Boards::new();
        let rows = (0..5)
            .map(|i| departure(&format!("{}", i), &format!("{:02}:00", i)))
            .collect();
        boards.set_ready(Board::CathedralQuarter, rows, now);

        let ctx = RenderContext::new(&boards, now, now).with_limit(3);
        let frame = Frame::for_board("Cathedral Quarter", Board::CathedralQuarter, &ctx);

        assert_eq!(frame.rows.len(), 3);
        assert!(frame.notice.is_none());
    }
}
