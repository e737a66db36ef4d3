use serde::{Deserialize, Serialize};

/// What a front end should draw for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualState {
    Hidden,
    Flagged,
    Revealed(u8),
    /// The mine that ended the round.
    TriggeredMine,
    /// A mine the player had flagged, exposed after a loss.
    FlaggedMine,
    /// A mine the player never flagged, exposed after a loss.
    MissedMine,
    /// A flag left on a safe cell when the round was lost.
    WrongFlag,
}

/// One entry of the change list returned by moves, for incremental redraws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub row: u8,
    pub col: u8,
    pub state: VisualState,
}
