//! Sharing a board between threads.
//!
//! A move transaction passes through states that must never be observed,
//! so [`SharedBoard`] holds its lock for the whole of each `process` call.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Board, Move};
use crate::logging::trace;
use crate::processor::MoveProcessor;

/// A board behind a mutex, cheap to clone and send across threads.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Run `processor` on `mv` with the board locked throughout.
    pub fn process(&self, processor: &MoveProcessor, mv: Move) -> bool {
        let mut board = self.0.lock();
        trace!("processing {mv} under lock");
        processor.process(mv, &mut *board)
    }

    /// A copy of the board between transactions.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().clone()
    }

    /// Read the board without copying it.
    pub fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&self.0.lock())
    }
}
