use serde::{Deserialize, Serialize};

use crate::*;

/// How a mine was classified when it was exposed at the end of a lost round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineVerdict {
    Triggered,
    Flagged,
    Missed,
}

/// State of a single board position.
///
/// Neighbors are not stored here, they are derived from `(row, col)` with
/// [`NeighborIter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: Coord,
    col: Coord,
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mine_count: u8,
    pub(crate) verdict: Option<MineVerdict>,
    pub(crate) wrong_flag: bool,
}

impl Cell {
    pub(crate) const fn new((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            adjacent_mine_count: 0,
            verdict: None,
            wrong_flag: false,
        }
    }

    /// Puts the cell back to its pre-round state, keeping its identity.
    pub(crate) fn clear(&mut self) {
        *self = Self::new(self.coords());
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Number of mines among the neighbors, meaningless for a mine cell.
    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }

    pub const fn verdict(&self) -> Option<MineVerdict> {
        self.verdict
    }

    pub fn visual_state(&self) -> VisualState {
        match (self.is_revealed, self.is_mine) {
            (true, true) => match self.verdict {
                Some(MineVerdict::Flagged) => VisualState::FlaggedMine,
                Some(MineVerdict::Missed) => VisualState::MissedMine,
                Some(MineVerdict::Triggered) | None => VisualState::TriggeredMine,
            },
            (true, false) => VisualState::Revealed(self.adjacent_mine_count),
            (false, _) if self.wrong_flag => VisualState::WrongFlag,
            (false, _) if self.is_flagged => VisualState::Flagged,
            (false, _) => VisualState::Hidden,
        }
    }

    pub(crate) fn change(&self) -> CellChange {
        CellChange {
            row: self.row,
            col: self.col,
            state: self.visual_state(),
        }
    }
}
