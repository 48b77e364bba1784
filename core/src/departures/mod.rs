//! Departure boards: data model, clock helpers and sources

pub mod clock;
pub mod source;
pub mod types;

pub use clock::{format_uptime, is_clock_time, resolve_clock_time};
pub use source::{
    fetch_all, refresh_boards, source_from_config, DepartureSource, HttpDepartureSource,
    SnapshotDepartureSource,
};
pub use types::{sort_by_expected, Board, BoardFeed, Boards, Departure, StopMarker};

/// Attribution shown under every board
pub const ATTRIBUTION: &str = "Data From bustimes.org";
