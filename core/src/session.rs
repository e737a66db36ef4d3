use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> NotStarted, on reset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the round has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    /// Cells to redraw, including mines exposed by a loss.
    pub changed: Vec<CellChange>,
}

impl RevealReport {
    const fn empty(outcome: RevealOutcome) -> Self {
        Self {
            outcome,
            changed: Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagReport {
    pub is_flagged: bool,
    pub flagged_count: CellCount,
}

/// One round from first click to win or loss.
///
/// Mines are placed lazily on the first reveal so the clicked cell is never a mine.
#[derive(Clone, Debug)]
pub struct GameSession<S = RandomSampler> {
    board: Board,
    sampler: S,
    state: GameState,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameSession<RandomSampler> {
    pub fn new(config: GameConfig) -> Result<Self> {
        let sampler = config.sampler();
        log::debug!(
            "New session with {} mines, seed: {}",
            config.mines,
            sampler.seed()
        );
        Self::with_sampler(config.mines, sampler)
    }
}

impl<S: MineSampler> GameSession<S> {
    pub fn with_sampler(mines: CellCount, sampler: S) -> Result<Self> {
        Ok(Self {
            board: Board::new(mines)?,
            sampler,
            state: GameState::default(),
            started_at: None,
            ended_at: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.board.flagged_count()
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.board.mine_count()) - i32::from(self.board.flagged_count())
    }

    /// Whole seconds since the first reveal, frozen once the round ends.
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs_at(Instant::now())
    }

    pub fn elapsed_secs_at(&self, now: Instant) -> u32 {
        match self.started_at {
            Some(started_at) => {
                let end = self.ended_at.unwrap_or(now);
                end.saturating_duration_since(started_at)
                    .as_secs()
                    .try_into()
                    .unwrap_or(u32::MAX)
            }
            None => 0,
        }
    }

    pub fn reveal(&mut self, row: Coord, col: Coord) -> Result<RevealReport> {
        let coords = validate_coords((row, col))?;

        if self.state.is_final() {
            log::debug!("Reveal at {:?} rejected, round is over", coords);
            return Ok(RevealReport::empty(RevealOutcome::Rejected));
        }

        if self.state.is_initial() {
            self.start(coords)?;
        }

        let BoardReveal {
            signal,
            mut changed,
        } = self.board.reveal(coords)?;

        let outcome = match signal {
            RevealSignal::HitMine => {
                changed.extend(self.board.reveal_all_mines());
                self.end(GameState::Lost);
                RevealOutcome::Lost
            }
            RevealSignal::Revealed(_) if self.board.is_cleared() => {
                self.board.finish();
                self.end(GameState::Won);
                RevealOutcome::Won
            }
            RevealSignal::Revealed(_) | RevealSignal::NoChange => RevealOutcome::Continue,
        };

        Ok(RevealReport { outcome, changed })
    }

    pub fn toggle_flag(&mut self, row: Coord, col: Coord) -> Result<FlagReport> {
        let coords = validate_coords((row, col))?;

        if self.state.is_final() || self.board.cell(coords)?.is_revealed() {
            return Err(GameError::InvalidState);
        }

        let is_flagged = self.board.toggle_flag(coords)?;
        Ok(FlagReport {
            is_flagged,
            flagged_count: self.board.flagged_count(),
        })
    }

    /// Changes the mine count, only before the first reveal.
    pub fn set_mine_density(&mut self, count: CellCount) -> Result<()> {
        if !self.state.is_initial() {
            return Err(GameError::InvalidState);
        }
        self.board.set_mine_count(count)?;
        log::debug!("Mine density set to {}", count);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::NotStarted;
        self.started_at = None;
        self.ended_at = None;
    }

    /// Starts a new round with a different mine count.
    pub fn reset_with_density(&mut self, count: CellCount) -> Result<()> {
        self.board.reset(Some(count))?;
        self.reset();
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    fn start(&mut self, first: Coord2) -> Result<()> {
        let mines = self.board.mine_count();
        self.board.place_mines(first, mines, &mut self.sampler)?;
        self.board.compute_adjacency();
        self.state = GameState::InProgress;

        let now = Instant::now();
        self.started_at.replace(now);
        log::debug!("Round started at {:?} from {:?}", now, first);
        Ok(())
    }

    fn end(&mut self, state: GameState) {
        self.state = state;
        self.ended_at.replace(Instant::now());
        log::debug!(
            "Round ended {:?} after {}s, {} cells revealed",
            state,
            self.elapsed_secs(),
            self.board.revealed_count()
        );
    }
}
