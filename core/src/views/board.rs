//! Single-board views

use super::{Frame, RenderContext, Renderable};
use crate::departures::Board;

/// Departures around the Cathedral Quarter
#[derive(Debug, Default)]
pub struct CathedralQuarterView;

impl Renderable for CathedralQuarterView {
    fn title(&self) -> &str {
        Board::CathedralQuarter.display_name()
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Frame {
        Frame::for_board(self.title(), Board::CathedralQuarter, ctx)
    }
}

/// Departures from the bus station stands
#[derive(Debug, Default)]
pub struct BusStationView;

impl Renderable for BusStationView {
    fn title(&self) -> &str {
        Board::BusStation.display_name()
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Frame {
        Frame::for_board(self.title(), Board::BusStation, ctx)
    }
}
