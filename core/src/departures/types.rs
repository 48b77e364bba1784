//! Departure board data types
//!
//! Departures arrive as summary rows in the same JSON shape the departures
//! backend serves: one object per departure, already filtered and labelled.

use super::clock::resolve_clock_time;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Departure boards shown by the kiosk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Board {
    /// Stops around the Cathedral Quarter
    CathedralQuarter,
    /// Derby bus station stands
    BusStation,
}

impl Board {
    /// Every board, in display order
    pub const ALL: [Board; 2] = [Board::CathedralQuarter, Board::BusStation];

    /// Human-readable board name
    pub fn display_name(&self) -> &'static str {
        match self {
            Board::CathedralQuarter => "Cathedral Quarter",
            Board::BusStation => "Bus Station",
        }
    }

    /// Key used in configuration and snapshot files
    pub fn key(&self) -> &'static str {
        match self {
            Board::CathedralQuarter => "cathedral_quarter",
            Board::BusStation => "bus_station",
        }
    }

    /// Parse a board from its key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|board| board.key() == key)
    }
}

/// Where a departure leaves from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopMarker {
    #[serde(default)]
    pub indicator: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub bay: Option<String>,
}

impl StopMarker {
    /// Short label for the stop column: icon, then indicator, then bay
    pub fn label(&self) -> &str {
        [&self.icon, &self.indicator, &self.bay]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|label| !label.is_empty())
            .unwrap_or("")
    }
}

/// One row on a departure board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    #[serde(default)]
    pub stop: StopMarker,
    /// Line name, e.g. `6.1` or `The Allestree`
    pub service: String,
    pub destination: String,
    #[serde(default)]
    pub via: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Timetabled departure, `HH:MM`
    pub scheduled: String,
    /// Live estimate, `HH:MM`, when the operator publishes one
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl Departure {
    /// Scheduled departure as an absolute time relative to `now`
    pub fn scheduled_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        resolve_clock_time(&self.scheduled, now)
    }

    /// Expected departure, falling back to the scheduled time
    pub fn expected_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.expected
            .as_deref()
            .and_then(|expected| resolve_clock_time(expected, now))
            .or_else(|| self.scheduled_at(now))
    }

    /// Whether the live estimate differs from the timetable
    pub fn is_late(&self) -> bool {
        matches!(&self.expected, Some(expected) if !expected.is_empty() && *expected != self.scheduled)
    }
}

/// Sort departures by expected time; rows with unreadable times go last
pub fn sort_by_expected<Tz: TimeZone>(departures: &mut [Departure], now: &DateTime<Tz>) {
    departures.sort_by_cached_key(|departure| {
        let at = departure.expected_at(now).map(|at| at.timestamp());
        (at.is_none(), at)
    });
}

/// Load state of one board
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BoardFeed {
    /// Nothing fetched yet
    #[default]
    Loading,
    /// Latest successful fetch
    Ready {
        departures: Vec<Departure>,
        fetched_at: DateTime<Local>,
    },
    /// Latest fetch failed
    Failed { message: String },
}

/// Feeds for every board
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boards {
    feeds: HashMap<Board, BoardFeed>,
}

impl Boards {
    /// Create an empty set where every board is loading
    pub fn new() -> Self {
        Self::default()
    }

    /// Current feed for a board
    pub fn feed(&self, board: Board) -> &BoardFeed {
        static LOADING: BoardFeed = BoardFeed::Loading;
        self.feeds.get(&board).unwrap_or(&LOADING)
    }

    /// Replace the feed for a board
    pub fn set(&mut self, board: Board, feed: BoardFeed) {
        self.feeds.insert(board, feed);
    }

    /// Record a successful fetch
    pub fn set_ready(&mut self, board: Board, departures: Vec<Departure>, fetched_at: DateTime<Local>) {
        self.set(
            board,
            BoardFeed::Ready {
                departures,
                fetched_at,
            },
        );
    }

    /// Record a failed fetch
    ///
    /// A board that already has departures keeps showing them; the failure
    /// only replaces a board that never loaded.
    pub fn set_failed(&mut self, board: Board, message: impl Into<String>) {
        if !matches!(self.feed(board), BoardFeed::Ready { .. }) {
            self.set(
                board,
                BoardFeed::Failed {
                    message: message.into(),
                },
            );
        }
    }
}
