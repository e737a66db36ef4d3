use super::*;

/// Replays a preset mine layout, for scripted games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedSampler {
    mines: Vec<usize>,
}

impl FixedSampler {
    pub fn new(mines: Vec<usize>) -> Self {
        Self { mines }
    }

    pub fn from_coords(mines: &[Coord2]) -> Result<Self> {
        let mines = mines
            .iter()
            .map(|&coords| {
                if in_bounds(coords) {
                    Ok(index_of(coords))
                } else {
                    Err(GameError::InvalidCoords)
                }
            })
            .collect::<Result<_>>()?;
        Ok(Self { mines })
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }
}

impl MineSampler for FixedSampler {
    fn sample(&mut self, _total: usize, _exclude: usize, _count: usize) -> Vec<usize> {
        self.mines.clone()
    }
}
