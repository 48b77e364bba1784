//! Home view cycling between boards

use super::{Frame, RenderContext, Renderable};
use crate::departures::Board;
use std::time::Duration;

/// Default view: alternates between the Cathedral Quarter and Bus Station
/// boards, showing each for one cycle interval.
#[derive(Debug, Default)]
pub struct HomeView;

impl HomeView {
    /// Board on screen after `elapsed` time with the given interval
    pub fn board_at(elapsed: Duration, interval: Duration) -> Board {
        let interval = interval.as_secs().max(1);
        let slot = elapsed.as_secs() / interval;
        Board::ALL[(slot % Board::ALL.len() as u64) as usize]
    }
}

impl Renderable for HomeView {
    fn title(&self) -> &str {
        "Derby Departures"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Frame {
        let board = Self::board_at(ctx.elapsed(), ctx.cycle_interval);
        Frame::for_board(board.display_name(), board, ctx)
    }
}
