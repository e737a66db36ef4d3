use core::num::Saturating;
use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells revealed by a single [`Board::reveal`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardReveal {
    pub signal: RevealSignal,
    /// Every cell whose visual state changed, in discovery order.
    pub changed: Vec<CellChange>,
}

impl BoardReveal {
    const fn no_change() -> Self {
        Self {
            signal: RevealSignal::NoChange,
            changed: Vec::new(),
        }
    }
}

/// The 16×16 grid and its reveal/flag state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    mines_placed: bool,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    finished: bool,
}

impl Board {
    pub fn new(mine_count: CellCount) -> Result<Self> {
        validate_mine_count(mine_count).map(Self::with_mine_count)
    }

    fn with_mine_count(mine_count: CellCount) -> Self {
        let size = usize::from(GRID_SIZE);
        Self {
            cells: Array2::from_shape_fn((size, size), |(row, col)| {
                Cell::new((row as Coord, col as Coord))
            }),
            mine_count,
            mines_placed: false,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            finished: false,
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn safe_cell_count(&self) -> CellCount {
        TOTAL_CELLS - self.mine_count
    }

    /// Whether every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.revealed_count == Saturating(self.safe_cell_count())
    }

    /// Whether the round is over and no further moves apply.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn visual_state(&self, coords: Coord2) -> Result<VisualState> {
        self.cell(coords).map(Cell::visual_state)
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn visual_grid(&self) -> Array2<VisualState> {
        self.cells.map(Cell::visual_state)
    }

    /// Changes the mine count for the next placement.
    pub fn set_mine_count(&mut self, mine_count: CellCount) -> Result<()> {
        let mine_count = validate_mine_count(mine_count)?;
        if self.mines_placed {
            return Err(GameError::InvalidState);
        }
        self.mine_count = mine_count;
        Ok(())
    }

    /// Places `count` mines anywhere but `exclude`, using `sampler` to choose the cells.
    ///
    /// The sampler output is checked before the board is touched; a failed placement leaves the
    /// board as it was.
    pub fn place_mines(
        &mut self,
        exclude: Coord2,
        count: CellCount,
        sampler: &mut impl MineSampler,
    ) -> Result<()> {
        let exclude = validate_coords(exclude)?;
        let count = validate_mine_count(count)?;
        if self.mines_placed {
            return Err(GameError::InvalidState);
        }

        let total = usize::from(TOTAL_CELLS);
        let exclude_index = index_of(exclude);
        let picked = sampler.sample(total, exclude_index, count.into());

        let mut seen = [false; TOTAL_CELLS as usize];
        for &index in &picked {
            if index >= total || index == exclude_index || seen[index] {
                log::warn!("Sampler returned unusable mine index {}", index);
                return Err(GameError::InvalidConfiguration);
            }
            seen[index] = true;
        }
        if picked.len() != usize::from(count) {
            log::warn!(
                "Sampler returned {} mines, requested {}",
                picked.len(),
                count
            );
            return Err(GameError::InvalidConfiguration);
        }

        for coords in picked.into_iter().filter_map(coords_of) {
            self.cells[coords.to_nd_index()].is_mine = true;
        }
        self.mine_count = count;
        self.mines_placed = true;
        log::debug!("Placed {} mines, first click at {:?}", count, exclude);
        Ok(())
    }

    /// Recomputes the neighbor mine count of every cell.
    pub fn compute_adjacency(&mut self) {
        for coords in iter_coords() {
            let count = NeighborIter::new(coords)
                .filter(|&pos| self.cells[pos.to_nd_index()].is_mine)
                .count();
            self.cells[coords.to_nd_index()].adjacent_mine_count = count as u8;
        }
    }

    /// Reveals a cell, flooding outwards through cells with no adjacent mines.
    ///
    /// Revealed or flagged cells and finished boards are left alone.
    pub fn reveal(&mut self, coords: Coord2) -> Result<BoardReveal> {
        let coords = validate_coords(coords)?;
        let cell = self.cells[coords.to_nd_index()];

        if self.finished || cell.is_revealed || cell.is_flagged {
            return Ok(BoardReveal::no_change());
        }

        let mut changed = Vec::new();

        if cell.is_mine {
            let cell = &mut self.cells[coords.to_nd_index()];
            cell.is_revealed = true;
            changed.push(cell.change());
            log::debug!("Mine hit at {:?}", coords);
            return Ok(BoardReveal {
                signal: RevealSignal::HitMine,
                changed,
            });
        }

        let count = cell.adjacent_mine_count;
        self.open_cell(coords, &mut changed);

        if count == 0 {
            let mut to_visit: VecDeque<_> = self.hidden_neighbors(coords).collect();
            log::trace!(
                "Starting flood-fill from {:?}, initial neighbors: {:?}",
                coords,
                to_visit
            );

            // the revealed flag doubles as the visited marker
            while let Some(visit_coords) = to_visit.pop_front() {
                let visit = self.cells[visit_coords.to_nd_index()];
                if visit.is_revealed || visit.is_flagged || visit.is_mine {
                    continue;
                }

                self.open_cell(visit_coords, &mut changed);
                log::trace!(
                    "Flood opened cell at {:?}, mine count: {}",
                    visit_coords,
                    visit.adjacent_mine_count
                );

                if visit.adjacent_mine_count == 0 {
                    to_visit.extend(self.hidden_neighbors(visit_coords));
                }
            }
        }

        Ok(BoardReveal {
            signal: RevealSignal::Revealed(count),
            changed,
        })
    }

    /// Flips the flag on a hidden cell and returns the new flag state.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        let coords = validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        if self.finished || cell.is_revealed {
            return Ok(cell.is_flagged);
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(cell.is_flagged)
    }

    /// Exposes every mine after a loss, classifying each against the player's flags.
    ///
    /// Flags on exposed mines are cleared, and flags left on safe cells are marked wrong. The
    /// board is finished afterwards.
    pub fn reveal_all_mines(&mut self) -> Vec<CellChange> {
        let mut changed = Vec::new();

        for cell in self.cells.iter_mut() {
            if cell.is_mine {
                if cell.is_revealed {
                    cell.verdict = Some(MineVerdict::Triggered);
                    continue;
                }
                if cell.is_flagged {
                    cell.is_flagged = false;
                    self.flagged_count -= 1;
                    cell.verdict = Some(MineVerdict::Flagged);
                } else {
                    cell.verdict = Some(MineVerdict::Missed);
                }
                cell.is_revealed = true;
                changed.push(cell.change());
            } else if cell.is_flagged {
                cell.wrong_flag = true;
                changed.push(cell.change());
            }
        }

        self.finished = true;
        changed
    }

    /// Freezes the board once the round is over.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Clears every cell and counter, optionally switching to a new mine count.
    pub fn reset(&mut self, new_mine_count: Option<CellCount>) -> Result<()> {
        let mine_count = match new_mine_count {
            Some(count) => validate_mine_count(count)?,
            None => self.mine_count,
        };

        self.mine_count = mine_count;
        self.clear();
        Ok(())
    }

    /// Clears the round, keeping the mine count.
    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
        self.mines_placed = false;
        self.revealed_count = Saturating(0);
        self.flagged_count = Saturating(0);
        self.finished = false;
        log::debug!("Board reset with {} mines", self.mine_count);
    }

    fn open_cell(&mut self, coords: Coord2, changed: &mut Vec<CellChange>) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_revealed = true;
        self.revealed_count += 1;
        changed.push(cell.change());
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<'_> {
        NeighborIter::new(coords).filter(|&pos| {
            let cell = &self.cells[pos.to_nd_index()];
            !cell.is_revealed && !cell.is_flagged
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_mine_count(DEFAULT_MINES)
    }
}

pub(crate) fn validate_coords(coords: Coord2) -> Result<Coord2> {
    if in_bounds(coords) {
        Ok(coords)
    } else {
        Err(GameError::InvalidCoords)
    }
}
