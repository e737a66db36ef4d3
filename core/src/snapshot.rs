use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Full board state for an initial render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub mine_count: CellCount,
    pub flagged_count: CellCount,
    pub mines_left: i32,
    pub revealed_count: CellCount,
    pub elapsed_secs: u32,
    pub cells: Array2<VisualState>,
}

impl Snapshot {
    pub fn from_session<S: MineSampler>(session: &GameSession<S>) -> Self {
        let board = session.board();
        Self {
            state: session.state(),
            mine_count: board.mine_count(),
            flagged_count: board.flagged_count(),
            mines_left: session.mines_left(),
            revealed_count: board.revealed_count(),
            elapsed_secs: session.elapsed_secs(),
            cells: board.visual_grid(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<VisualState> {
        let coords = validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// Applies a change list from a move, keeping the grid in sync without a full snapshot.
    ///
    /// The whole list is checked first, an off-board entry leaves the grid untouched.
    pub fn apply(&mut self, changes: &[CellChange]) -> Result<()> {
        for change in changes {
            validate_coords((change.row, change.col))?;
        }
        for change in changes {
            self.cells[(change.row, change.col).to_nd_index()] = change.state;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mines: &[Coord2]) -> GameSession<FixedSampler> {
        let sampler = FixedSampler::from_coords(mines).unwrap();
        GameSession::with_sampler(mines.len() as CellCount, sampler).unwrap()
    }

    #[test]
    fn fresh_session_is_all_hidden() {
        let snapshot = session(&[(4, 4)]).snapshot();

        assert_eq!(snapshot.state, GameState::NotStarted);
        assert_eq!(snapshot.mines_left, 1);
        assert_eq!(snapshot.cells.dim(), (16, 16));
        assert!(snapshot.cells.iter().all(|&s| s == VisualState::Hidden));
    }

    #[test]
    fn snapshot_maps_revealed_and_flagged_cells() {
        let mut game = session(&[(4, 4), (4, 6)]);
        game.reveal(0, 0).unwrap();
        game.toggle_flag(4, 4).unwrap();

        let snapshot = game.snapshot();

        assert_eq!(snapshot.cell_at((0, 0)), Ok(VisualState::Revealed(0)));
        assert_eq!(snapshot.cell_at((3, 4)), Ok(VisualState::Revealed(1)));
        assert_eq!(snapshot.cell_at((4, 4)), Ok(VisualState::Flagged));
        assert_eq!(snapshot.cell_at((4, 5)), Ok(VisualState::Hidden));
        assert_eq!(snapshot.flagged_count, 1);
        assert_eq!(snapshot.mines_left, 1);
    }

    #[test]
    fn applying_changes_matches_a_fresh_snapshot() {
        let mut game = session(&[(4, 4), (4, 6)]);
        let mut view = game.snapshot();

        let report = game.reveal(0, 0).unwrap();
        view.apply(&report.changed).unwrap();
        let report = game.reveal(4, 6).unwrap();
        view.apply(&report.changed).unwrap();

        assert_eq!(view.cells, game.snapshot().cells);
        assert_eq!(view.cell_at((4, 6)), Ok(VisualState::TriggeredMine));
        assert_eq!(view.cell_at((4, 4)), Ok(VisualState::MissedMine));
    }

    #[test]
    fn off_board_lookups_are_errors() {
        let mut view = session(&[(4, 4)]).snapshot();
        let before = view.clone();
        let changes = [
            CellChange {
                row: 0,
                col: 0,
                state: VisualState::Flagged,
            },
            CellChange {
                row: 16,
                col: 0,
                state: VisualState::Flagged,
            },
        ];

        assert_eq!(view.cell_at((16, 0)), Err(GameError::InvalidCoords));
        assert_eq!(view.cell_at((0, 16)), Err(GameError::InvalidCoords));
        assert_eq!(view.apply(&changes), Err(GameError::InvalidCoords));
        assert_eq!(view, before);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut game = session(&[(4, 4)]);
        game.reveal(0, 0).unwrap();
        let snapshot = game.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back.cells, snapshot.cells);
        assert_eq!(back.state, snapshot.state);
    }
}
