//! Hooks into the search's decision points.

use log::{debug, log_enabled, trace, Level};

use crate::game::Breadcrumb;
use crate::totem::{Position, Totem};

/// Receives search events. Every method defaults to doing nothing, and no
/// observer can change the outcome of a search.
pub trait SearchObserver {
    /// A board state was entered and added to the current path.
    fn visited(&mut self, _board: &[Totem]) {}

    /// A board state already on the current path was reached again.
    fn pruned(&mut self, _board: &[Totem]) {}

    /// `puller` is about to pull `pulled` onto `destination`.
    fn pulling(&mut self, _puller: &Totem, _pulled: &Totem, _destination: Position) {}

    /// Pete reached the target by way of `moves`.
    fn solution_found(&mut self, _moves: &[Breadcrumb]) {}

    /// A first-solution search gave up on the remaining branches.
    fn stopped(&mut self, _solutions: &[Vec<Breadcrumb>]) {}
}

/// Default observer, writes every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn visited(&mut self, board: &[Totem]) {
        if log_enabled!(Level::Trace) {
            let totems: Vec<String> = board.iter().map(Totem::to_string).collect();
            trace!("Currently at state: {}", totems.join(" "));
        }
    }

    fn pruned(&mut self, _board: &[Totem]) {
        debug!("Loop detected. Pruning...");
    }

    fn pulling(&mut self, puller: &Totem, pulled: &Totem, destination: Position) {
        debug!("{} can move {} to {}. Playing branch...", puller, pulled, destination);
    }

    fn solution_found(&mut self, moves: &[Breadcrumb]) {
        debug!("Solution found with {} moves", moves.len());
    }

    fn stopped(&mut self, solutions: &[Vec<Breadcrumb>]) {
        debug!("Stopping at first solution ({} found)", solutions.len());
    }
}
