//! Constants for board geometry and default seeding.
//!
//! The board is a single cycle of cells stored in a flat array. Index 0 is the
//! close player's store; the far player's store sits directly after the close
//! player's row of pits.
//!
//! ```text
//!  index:  0    1 ..= F    F+1    F+2 ..= 2F+1
//!          CS   close row  FS     far row
//! ```
//!
//! where `F` is the field size. Sowing always moves towards higher indices and
//! wraps from the last far-row pit back to the close store.

// =============================================================================
// Board Geometry
// =============================================================================

/// Pits per row in a standard game.
pub const FIELD_SIZE: usize = 6;

/// Number of cells (pits plus both stores) in a standard game.
pub const CYCLE_LEN: usize = cycle_len(FIELD_SIZE);

/// Array index of the close player's store, for every field size.
pub const CLOSE_STORE: usize = 0;

/// Number of cells in a board with `field_size` pits per row.
#[inline]
pub const fn cycle_len(field_size: usize) -> usize {
    2 * field_size + 2
}

/// Array index of the far player's store for a given field size.
#[inline]
pub const fn far_store(field_size: usize) -> usize {
    field_size + 1
}

// =============================================================================
// Seeding
// =============================================================================

/// Seeds placed in every ordinary pit when a game starts.
pub const STARTING_SEEDS: u32 = 3;
