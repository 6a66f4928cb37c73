use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    /// Reserved and paid for through the garage account.
    User,
    /// Placed by the background occupancy process.
    Stochastic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Spot {
    #[default]
    Empty,
    Occupied { owner: Owner, remaining_hours: u32 },
}

impl Spot {
    pub fn occupied(owner: Owner, remaining_hours: u32) -> Self {
        Spot::Occupied {
            owner,
            remaining_hours,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Spot::Empty)
    }

    pub fn owner(&self) -> Option<Owner> {
        match self {
            Spot::Empty => None,
            Spot::Occupied { owner, .. } => Some(*owner),
        }
    }

    pub fn remaining_hours(&self) -> Option<u32> {
        match self {
            Spot::Empty => None,
            Spot::Occupied {
                remaining_hours, ..
            } => Some(*remaining_hours),
        }
    }

    /// Burn `hours` off the stay in one step. Returns `true` when this call
    /// emptied the spot.
    pub fn decay(&mut self, hours: u32) -> bool {
        match self {
            Spot::Empty => false,
            Spot::Occupied {
                remaining_hours, ..
            } => {
                if *remaining_hours <= hours {
                    *self = Spot::Empty;
                    true
                } else {
                    *remaining_hours -= hours;
                    false
                }
            }
        }
    }
}

/// Grid coordinate of a spot, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotPos {
    pub row: usize,
    pub col: usize,
}

impl SpotPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Fixed `rows x cols` parking grid stored row-major. Only built through
/// [`ParkingGrid::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkingGrid {
    spots: Vec<Spot>,
    rows: usize,
    cols: usize,
}

impl ParkingGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            spots: vec![Spot::Empty; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[inline]
    fn index(&self, pos: SpotPos) -> usize {
        pos.row * self.cols + pos.col
    }

    #[inline]
    fn pos_of(&self, index: usize) -> SpotPos {
        SpotPos::new(index / self.cols, index % self.cols)
    }

    #[inline]
    pub fn in_bounds(&self, pos: SpotPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: SpotPos) -> Option<&Spot> {
        if self.in_bounds(pos) {
            Some(&self.spots[self.index(pos)])
        } else {
            None
        }
    }

    /// Overwrite a spot. Out-of-bounds positions are ignored and reported
    /// with `false`.
    pub fn set(&mut self, pos: SpotPos, spot: Spot) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.spots[idx] = spot;
        true
    }

    /// Row-major first fit: lowest row, then lowest column.
    pub fn first_empty(&self) -> Option<SpotPos> {
        self.spots
            .iter()
            .position(Spot::is_empty)
            .map(|idx| self.pos_of(idx))
    }

    /// All empty coordinates in row-major order.
    pub fn empty_positions(&self) -> Vec<SpotPos> {
        self.iter()
            .filter(|(_, spot)| spot.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.spots.iter().filter(|s| s.is_empty()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.len() - self.empty_count()
    }

    pub fn count_owned_by(&self, owner: Owner) -> usize {
        self.spots
            .iter()
            .filter(|s| s.owner() == Some(owner))
            .count()
    }

    /// Decay every occupied spot by `hours`. Returns how many spots emptied.
    pub fn decay_all(&mut self, hours: u32) -> usize {
        self.spots
            .iter_mut()
            .map(|spot| spot.decay(hours))
            .filter(|freed| *freed)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpotPos, &Spot)> + '_ {
        self.spots
            .iter()
            .enumerate()
            .map(move |(idx, spot)| (self.pos_of(idx), spot))
    }

    pub fn row(&self, row: usize) -> &[Spot] {
        let start = row * self.cols;
        &self.spots[start..start + self.cols]
    }

    /// Owned copy of the grid as nested rows, for presentation layers.
    pub fn snapshot(&self) -> Vec<Vec<Spot>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}
