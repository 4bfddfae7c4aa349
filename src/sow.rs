//! Sowing: lifting a pit and dropping its seeds one by one around the board.
//!
//! A sow is a sequence of laps. Each lap lifts every seed from its origin and
//! drops one in each following cell, skipping the opponent's store. Where the
//! last seed lands decides what happens next:
//!
//! - the acting player's store: the player earns an extra turn;
//! - a pit that was empty before the drop: the turn ends ([`SowRule::StopOnEmpty`]);
//! - any other pit: that pit becomes the origin of the next lap.
//!
//! Every chained lap either drops a seed into the acting player's store or
//! moves all of its seeds strictly closer to that store, so a sow always ends.

use tracing::{debug, trace};

use crate::board::{Board, Pit, Player};
use crate::error::SowError;

/// How a sow ends when its last seed lands in a pit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SowRule {
    /// Stop when the last seed lands in a previously empty pit, otherwise chain.
    #[default]
    StopOnEmpty,
    /// Chain from every landing pit; only the own store ends the sow.
    AlwaysChain,
}

/// One lift-and-drop pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lap {
    /// Pit the seeds were lifted from.
    pub origin: Pit,
    /// Seeds lifted (and dropped) in this lap.
    pub lifted: u32,
    /// Cell that received the last seed.
    pub landing: Pit,
}

/// Full account of a sow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SowReport {
    pub laps: Vec<Lap>,
    pub extra_turn: bool,
}

impl SowReport {
    /// Where the final seed ended up.
    pub fn landing(&self) -> Option<Pit> {
        self.laps.last().map(|lap| lap.landing)
    }
}

/// Sow from `origin` for `player` with the default rule.
///
/// Returns `true` when the player earns an extra turn.
pub fn sow(board: &mut Board, origin: Pit, player: Player) -> Result<bool, SowError> {
    sow_traced(board, origin, player, SowRule::default()).map(|report| report.extra_turn)
}

/// Sow from `origin` for `player`, recording every lap.
///
/// An illegal origin is refused before any seed moves.
pub fn sow_traced(
    board: &mut Board,
    origin: Pit,
    player: Player,
    rule: SowRule,
) -> Result<SowReport, SowError> {
    check_origin(board, origin)?;

    let own_store = board.store_of(player);
    let mut laps = Vec::new();
    let mut origin = origin;

    loop {
        let lap = run_lap(board, origin, player);
        debug!(
            origin = lap.origin,
            lifted = lap.lifted,
            landing = lap.landing,
            "lap"
        );
        laps.push(lap);

        if lap.landing == own_store {
            return Ok(SowReport {
                laps,
                extra_turn: true,
            });
        }
        // Landing value includes the seed just dropped.
        if rule == SowRule::StopOnEmpty && board.value(lap.landing) == 1 {
            return Ok(SowReport {
                laps,
                extra_turn: false,
            });
        }
        origin = lap.landing;
    }
}

/// A single lap from `origin` with no chaining.
pub fn distribute(board: &mut Board, origin: Pit, player: Player) -> Result<Lap, SowError> {
    check_origin(board, origin)?;
    Ok(run_lap(board, origin, player))
}

fn check_origin(board: &Board, origin: Pit) -> Result<(), SowError> {
    if !board.contains(origin) {
        return Err(SowError::OutOfRange {
            pit: origin,
            len: board.len(),
        });
    }
    let cell = board.cell(origin);
    if cell.is_store() {
        return Err(SowError::FromStore { pit: origin });
    }
    if cell.value == 0 {
        return Err(SowError::EmptyPit { pit: origin });
    }
    Ok(())
}

/// Lift `origin` and drop one seed per cell after it. `origin` must hold seeds.
fn run_lap(board: &mut Board, origin: Pit, player: Player) -> Lap {
    let skip = board.store_of(player.opponent());
    let lifted = std::mem::take(&mut board.cell_mut(origin).value);
    let mut hand = lifted;
    let mut cur = origin;

    while hand > 0 {
        cur = board.next(cur);
        if cur == skip {
            trace!(pit = cur, "skip opponent store");
            continue;
        }
        board.cell_mut(cur).value += 1;
        hand -= 1;
        trace!(pit = cur, hand, "drop");
    }

    Lap {
        origin,
        lifted,
        landing: cur,
    }
}
