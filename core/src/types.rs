/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for mine counts and cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Number of rows and columns on the board.
pub const GRID_SIZE: Coord = 16;

/// Number of cells on the board.
pub const TOTAL_CELLS: CellCount = mult(GRID_SIZE, GRID_SIZE);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `coords` lands on the board.
pub const fn in_bounds((row, col): Coord2) -> bool {
    row < GRID_SIZE && col < GRID_SIZE
}

/// Row-major linear index of `coords`.
pub const fn index_of((row, col): Coord2) -> usize {
    row as usize * GRID_SIZE as usize + col as usize
}

/// Inverse of [`index_of`], `None` past the last cell.
pub fn coords_of(index: usize) -> Option<Coord2> {
    if index >= TOTAL_CELLS as usize {
        return None;
    }
    let size = GRID_SIZE as usize;
    Some(((index / size) as Coord, (index % size) as Coord))
}

/// Every board position in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
fn apply_delta(coords: Coord2, delta: (isize, isize)) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    let next = (next_row, next_col);

    in_bounds(next).then_some(next)
}

/// Iterates over the in-bounds neighbors of a cell, at most eight.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
