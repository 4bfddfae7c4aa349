//! Mancala board representation.
//!
//! A board is one cycle of cells: `field_size` pits on the close player's row,
//! the far store, `field_size` pits on the far player's row, and the close
//! store. The cycle is a flat array with modular successor, so a clone is a
//! plain copy that shares nothing with its source.

use std::fmt;

use crate::constants::{CLOSE_STORE, cycle_len, far_store};
use crate::error::BoardError;

/// A cell on the board, represented as an index into the cycle.
pub type Pit = usize;

/// One of the two players, named after the side of the board they sit on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Close,
    Far,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Close => Player::Far,
            Player::Far => Player::Close,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Close => write!(f, "close"),
            Player::Far => write!(f, "far"),
        }
    }
}

/// A pit (no owner) or a store (owned by exactly one player).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub value: u32,
    pub owner: Option<Player>,
}

impl Cell {
    fn pit(value: u32) -> Self {
        Self { value, owner: None }
    }

    fn store(owner: Player) -> Self {
        Self {
            value: 0,
            owner: Some(owner),
        }
    }

    #[inline]
    pub fn is_store(&self) -> bool {
        self.owner.is_some()
    }
}

/// The circular board.
///
/// Cell count is fixed at construction; sowing only moves seeds between cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    field_size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a fresh board with every pit holding `starting_seeds` and both
    /// stores empty.
    pub fn new(field_size: usize, starting_seeds: u32) -> Result<Self, BoardError> {
        if field_size == 0 {
            return Err(BoardError::EmptyField);
        }
        check_total(starting_seeds as u64 * 2 * field_size as u64)?;
        let len = cycle_len(field_size);
        let far = far_store(field_size);
        let cells = (0..len)
            .map(|i| match i {
                CLOSE_STORE => Cell::store(Player::Close),
                i if i == far => Cell::store(Player::Far),
                _ => Cell::pit(starting_seeds),
            })
            .collect();
        Ok(Self { field_size, cells })
    }

    /// Build a board holding arbitrary values, listed in cycle order starting
    /// at the close store.
    pub fn from_values(field_size: usize, values: &[u32]) -> Result<Self, BoardError> {
        let mut board = Self::new(field_size, 0)?;
        if values.len() != board.cells.len() {
            return Err(BoardError::CycleLength {
                expected: board.cells.len(),
                actual: values.len(),
            });
        }
        check_total(values.iter().map(|&v| v as u64).sum())?;
        for (cell, &v) in board.cells.iter_mut().zip(values) {
            cell.value = v;
        }
        Ok(board)
    }

    #[inline]
    pub fn field_size(&self) -> usize {
        self.field_size
    }

    /// Number of cells in the cycle, stores included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn close_store(&self) -> Pit {
        CLOSE_STORE
    }

    #[inline]
    pub fn far_store(&self) -> Pit {
        far_store(self.field_size)
    }

    pub fn store_of(&self, player: Player) -> Pit {
        match player {
            Player::Close => self.close_store(),
            Player::Far => self.far_store(),
        }
    }

    /// Successor of `pit` in sowing order.
    #[inline]
    pub fn next(&self, pit: Pit) -> Pit {
        (pit + 1) % self.cells.len()
    }

    #[inline]
    pub fn contains(&self, pit: Pit) -> bool {
        pit < self.cells.len()
    }

    /// Panics if `pit` is out of range.
    #[inline]
    pub fn cell(&self, pit: Pit) -> &Cell {
        &self.cells[pit]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, pit: Pit) -> &mut Cell {
        &mut self.cells[pit]
    }

    /// Panics if `pit` is out of range.
    #[inline]
    pub fn value(&self, pit: Pit) -> u32 {
        self.cells[pit].value
    }

    /// Panics if `pit` is out of range.
    #[inline]
    pub fn owner(&self, pit: Pit) -> Option<Player> {
        self.cells[pit].owner
    }

    /// All seed counts in cycle order, starting at the close store.
    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.value).collect()
    }

    /// Seeds on the whole board. Sowing and cloning never change this.
    pub fn total_seeds(&self) -> u64 {
        self.cells.iter().map(|c| c.value as u64).sum()
    }

    /// The pits a player sows from: the row that starts right after their own
    /// store, in sowing order.
    pub fn pits(&self, player: Player) -> impl Iterator<Item = Pit> + use<> {
        let first = self.store_of(player) + 1;
        first..first + self.field_size
    }

    /// Every cell once, in sowing order, beginning at `from`.
    pub fn walk(&self, from: Pit) -> impl Iterator<Item = Pit> + '_ {
        let len = self.cells.len();
        (0..len).map(move |step| (from + step) % len)
    }
}

/// Every seed must fit in one cell, since sowing can gather them all there.
fn check_total(total: u64) -> Result<(), BoardError> {
    if total > u32::MAX as u64 {
        return Err(BoardError::TooManySeeds { total });
    }
    Ok(())
}

impl fmt::Display for Board {
    /// Two rows read in opposite directions: the far store on top, then each
    /// far-row pit beside its mirrored close-row pit, then the close store.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.field_size;
        let width = self
            .cells
            .iter()
            .map(|c| c.value.to_string().len())
            .max()
            .unwrap_or(1);
        let far_row: Vec<Pit> = self.pits(Player::Far).collect();
        let close_row: Vec<Pit> = self.pits(Player::Close).collect();

        writeln!(f, "  {:>width$}", self.value(self.far_store()))?;
        writeln!(f, "{}", "_".repeat(2 * width + 3))?;
        for i in 0..n {
            writeln!(
                f,
                "|{:>width$}|{:>width$}|",
                self.value(far_row[i]),
                self.value(close_row[n - 1 - i])
            )?;
            if i + 1 == n / 2 && n > 1 {
                writeln!(f, "{}", "-".repeat(2 * width + 3))?;
            }
        }
        writeln!(f, "{}", "-".repeat(2 * width + 3))?;
        writeln!(f, "  {:>width$}", self.value(self.close_store()))
    }
}
