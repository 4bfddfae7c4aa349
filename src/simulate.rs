//! Parallel exploration of every opening sow for one player.
//!
//! Each candidate pit gets its own clone of the board and its own scoped
//! thread. Branches share nothing but the result channel, which is sized to
//! hold every branch's result so no worker ever blocks on send. The thread
//! scope doubles as the completion barrier: when it closes, every branch has
//! either sent its result or panicked.

use crossbeam_channel::bounded;
use tracing::{debug, instrument, warn};

use crate::board::{Board, Pit, Player};
use crate::error::SowError;
use crate::sow::{SowRule, sow_traced};

/// How a single branch ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BranchOutcome {
    ExtraTurn,
    EndTurn,
    /// The sow was refused; the branch board is the untouched clone.
    Rejected(SowError),
    /// The worker died before reporting; the branch board is the untouched clone.
    Aborted,
}

/// The result of sowing from one starting pit on an independent clone.
#[derive(Clone, Debug)]
pub struct Branch {
    /// Starting pit, valid in both the source board and `board`.
    pub origin: Pit,
    /// Final state of this branch's clone.
    pub board: Board,
    pub outcome: BranchOutcome,
}

impl Branch {
    #[inline]
    pub fn extra_turn(&self) -> bool {
        self.outcome == BranchOutcome::ExtraTurn
    }

    /// Whether the sow actually ran.
    #[inline]
    pub fn played(&self) -> bool {
        matches!(
            self.outcome,
            BranchOutcome::ExtraTurn | BranchOutcome::EndTurn
        )
    }
}

/// Sow every one of `player`'s pits on its own clone of `board`, in parallel,
/// with the default rule.
pub fn run_simulations(board: &Board, player: Player) -> Vec<Branch> {
    run_simulations_with(board, player, SowRule::default())
}

/// Like [`run_simulations`] with an explicit rule.
///
/// Blocks until every branch is done. The result holds exactly one branch per
/// pit on `player`'s row, ordered by origin.
#[instrument(skip(board), fields(field_size = board.field_size()))]
pub fn run_simulations_with(board: &Board, player: Player, rule: SowRule) -> Vec<Branch> {
    run_branches(board, player, |clone, origin| {
        match sow_traced(clone, origin, player, rule) {
            Ok(report) if report.extra_turn => BranchOutcome::ExtraTurn,
            Ok(_) => BranchOutcome::EndTurn,
            Err(err) => BranchOutcome::Rejected(err),
        }
    })
}

/// Run `work` on a fresh clone for each of `player`'s pits, one thread each.
fn run_branches<F>(board: &Board, player: Player, work: F) -> Vec<Branch>
where
    F: Fn(&mut Board, Pit) -> BranchOutcome + Sync,
{
    let origins: Vec<Pit> = board.pits(player).collect();
    let (tx, rx) = bounded::<Branch>(origins.len());

    let aborted: Vec<Pit> = std::thread::scope(|s| {
        let workers: Vec<_> = origins
            .iter()
            .map(|&origin| {
                let tx = tx.clone();
                let work = &work;
                let mut clone = board.clone();
                let handle = s.spawn(move || {
                    let outcome = work(&mut clone, origin);
                    tx.send(Branch {
                        origin,
                        board: clone,
                        outcome,
                    })
                    .ok();
                });
                (origin, handle)
            })
            .collect();

        workers
            .into_iter()
            .filter_map(|(origin, handle)| handle.join().is_err().then_some(origin))
            .collect()
    });
    drop(tx);

    let mut branches: Vec<Branch> = rx.iter().collect();
    for origin in aborted {
        warn!(origin, "branch worker panicked");
        branches.push(Branch {
            origin,
            board: board.clone(),
            outcome: BranchOutcome::Aborted,
        });
    }
    for branch in &branches {
        match &branch.outcome {
            BranchOutcome::Rejected(err) => warn!(origin = branch.origin, %err, "branch rejected"),
            outcome => debug!(origin = branch.origin, ?outcome, "branch done"),
        }
    }

    branches.sort_by_key(|b| b.origin);
    branches
}
