//! Error types for board construction and sowing.

use derive_more::{Display, Error};

use crate::board::Pit;

/// A board configuration that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Field size of zero leaves no pits to play.
    #[display("field size must be at least 1")]
    EmptyField,
    /// Explicit cell values do not match the cycle length for the field size.
    #[display("expected {expected} cells for this field size, got {actual}")]
    CycleLength { expected: usize, actual: usize },
    /// More seeds than a single pit can count.
    #[display("{total} seeds do not fit in one cell")]
    TooManySeeds { total: u64 },
}

/// A sow that the engine refuses to perform. Nothing on the board has moved
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SowError {
    /// Origin index is not a cell of the board.
    #[display("pit {pit} is outside a board of {len} cells")]
    OutOfRange { pit: Pit, len: usize },
    /// Sowing never starts from a store.
    #[display("cannot sow from store at {pit}")]
    FromStore { pit: Pit },
    /// An empty pit has nothing to lift.
    #[display("pit {pit} is empty")]
    EmptyPit { pit: Pit },
}
