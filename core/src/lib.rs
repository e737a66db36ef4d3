use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod snapshot;
mod tile;
mod types;

/// Mine count used by a fresh game.
pub const DEFAULT_MINES: CellCount = 30;

/// Largest legal mine count, one cell always stays free for the first click.
pub const MAX_MINES: CellCount = TOTAL_CELLS - 1;

/// Density presets for front ends offering a slider.
pub const DENSITY_MIN: CellCount = 20;
pub const DENSITY_MAX: CellCount = 100;
pub const DENSITY_STEP: CellCount = 10;

pub fn validate_mine_count(mines: CellCount) -> Result<CellCount> {
    if (1..=MAX_MINES).contains(&mines) {
        Ok(mines)
    } else {
        Err(GameError::InvalidConfiguration)
    }
}

/// Density presets between [`DENSITY_MIN`] and [`DENSITY_MAX`].
pub fn density_presets() -> impl Iterator<Item = CellCount> {
    (DENSITY_MIN..=DENSITY_MAX).step_by(DENSITY_STEP.into())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mines: CellCount,
    /// Fixed seed for mine placement, random when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(mines: CellCount) -> Result<Self> {
        Ok(Self {
            mines: validate_mine_count(mines)?,
            seed: None,
        })
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn sampler(&self) -> RandomSampler {
        match self.seed {
            Some(seed) => RandomSampler::new(seed),
            None => RandomSampler::from_os_rng(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mines: DEFAULT_MINES,
            seed: None,
        }
    }
}

/// Result of revealing a single cell on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealSignal {
    NoChange,
    Revealed(u8),
    HitMine,
}

/// Outcome of a reveal as seen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continue,
    Won,
    Lost,
    Rejected,
}

impl RevealOutcome {
    /// Whether the round ended with this move
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
