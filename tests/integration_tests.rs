//! Integration tests for mancala-rust
//!
//! Randomized checks use `fastrand` with fixed seeds so failures reproduce.

use mancala_rust::board::{Board, Pit, Player};
use mancala_rust::constants::{FIELD_SIZE, STARTING_SEEDS};
use mancala_rust::error::{BoardError, SowError};
use mancala_rust::simulate::{BranchOutcome, run_simulations, run_simulations_with};
use mancala_rust::sow::{SowRule, distribute, sow, sow_traced};

// =============================================================================
// Helper functions
// =============================================================================

fn standard_board() -> Board {
    Board::new(FIELD_SIZE, STARTING_SEEDS).unwrap()
}

/// A board with random seed counts in every cell, stores included.
fn random_board(rng: &mut fastrand::Rng, field_size: usize) -> Board {
    let values: Vec<u32> = (0..2 * field_size + 2).map(|_| rng.u32(0..8)).collect();
    Board::from_values(field_size, &values).unwrap()
}

fn non_empty_pits(board: &Board, player: Player) -> Vec<Pit> {
    board.pits(player).filter(|&p| board.value(p) > 0).collect()
}

const PLAYERS: [Player; 2] = [Player::Close, Player::Far];
const RULES: [SowRule; 2] = [SowRule::StopOnEmpty, SowRule::AlwaysChain];

// =============================================================================
// Board construction
// =============================================================================

#[test]
fn test_construct_rejects_empty_field() {
    assert_eq!(Board::new(0, STARTING_SEEDS), Err(BoardError::EmptyField));
}

#[test]
fn test_cycle_returns_to_each_store() {
    for field_size in 1..=8 {
        let board = Board::new(field_size, STARTING_SEEDS).unwrap();
        let copy = board.clone();
        for b in [&board, &copy] {
            for store in [b.close_store(), b.far_store()] {
                let mut cur = store;
                for _ in 0..2 * field_size + 2 {
                    cur = b.next(cur);
                }
                assert_eq!(cur, store, "field size {field_size}");
            }
        }
    }
}

#[test]
fn test_exactly_one_store_per_player() {
    let board = standard_board();
    let owners: Vec<Player> = (0..board.len()).filter_map(|p| board.owner(p)).collect();
    assert_eq!(owners, vec![Player::Close, Player::Far]);
    assert_eq!(board.owner(board.store_of(Player::Close)), Some(Player::Close));
    assert_eq!(board.owner(board.store_of(Player::Far)), Some(Player::Far));
}

#[test]
fn test_render_standard_board() {
    let board = standard_board();
    let expected = "  0\n_____\n|3|3|\n|3|3|\n|3|3|\n-----\n|3|3|\n|3|3|\n|3|3|\n-----\n  0\n";
    assert_eq!(board.to_string(), expected);
}

// =============================================================================
// Conservation and clone independence
// =============================================================================

#[test]
fn test_sow_conserves_seeds() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        let field_size = rng.usize(1..=7);
        let board = random_board(&mut rng, field_size);
        let total = board.total_seeds();
        for player in PLAYERS {
            for rule in RULES {
                for origin in non_empty_pits(&board, player) {
                    let mut copy = board.clone();
                    assert_eq!(copy.total_seeds(), total);
                    sow_traced(&mut copy, origin, player, rule).unwrap();
                    assert_eq!(copy.total_seeds(), total);
                    assert_eq!(copy.len(), board.len());
                }
            }
        }
    }
}

#[test]
fn test_sowing_clone_leaves_original() {
    let board = standard_board();
    let snapshot = board.values();
    for origin in board.pits(Player::Close) {
        let mut copy = board.clone();
        sow(&mut copy, origin, Player::Close).unwrap();
        assert_ne!(copy.values(), snapshot);
        assert_eq!(board.values(), snapshot);
    }
}

// =============================================================================
// Sow rules
// =============================================================================

#[test]
fn test_opponent_store_never_grows() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..200 {
        let field_size = rng.usize(1..=7);
        let board = random_board(&mut rng, field_size);
        for player in PLAYERS {
            let opponent_store = board.store_of(player.opponent());
            for rule in RULES {
                for origin in non_empty_pits(&board, player) {
                    let mut copy = board.clone();
                    sow_traced(&mut copy, origin, player, rule).unwrap();
                    assert_eq!(copy.value(opponent_store), board.value(opponent_store));
                }
            }
        }
    }
}

#[test]
fn test_exact_count_reaches_own_store() {
    // Single seed in the pit right before each store, everything else empty.
    for player in PLAYERS {
        let empty = Board::new(FIELD_SIZE, 0).unwrap();
        let store = empty.store_of(player);
        let last_pit = (store + empty.len() - 1) % empty.len();
        let mut values = empty.values();
        values[last_pit] = 1;
        let mut board = Board::from_values(FIELD_SIZE, &values).unwrap();

        assert_eq!(sow(&mut board, last_pit, player), Ok(true));
        assert_eq!(board.value(store), 1);
    }
}

#[test]
fn test_one_short_or_past_store_is_no_extra_turn() {
    // Close player on an otherwise empty board; the store is 3 cells after pit 11.
    let mut values = vec![0; 14];
    values[11] = 2;
    let mut short = Board::from_values(FIELD_SIZE, &values).unwrap();
    let report = sow_traced(&mut short, 11, Player::Close, SowRule::StopOnEmpty).unwrap();
    assert_eq!(report.landing(), Some(13));
    assert!(!report.extra_turn);

    values[11] = 4;
    let mut past = Board::from_values(FIELD_SIZE, &values).unwrap();
    let report = sow_traced(&mut past, 11, Player::Close, SowRule::StopOnEmpty).unwrap();
    assert_eq!(report.landing(), Some(1));
    assert!(!report.extra_turn);
    assert_eq!(past.value(0), 1);

    values[11] = 3;
    let mut exact = Board::from_values(FIELD_SIZE, &values).unwrap();
    assert_eq!(sow(&mut exact, 11, Player::Close), Ok(true));
}

#[test]
fn test_landing_in_empty_pit_stops() {
    let mut values = vec![0; 14];
    values[2] = 2;
    values[3] = 5;
    let mut board = Board::from_values(FIELD_SIZE, &values).unwrap();
    let report = sow_traced(&mut board, 2, Player::Close, SowRule::StopOnEmpty).unwrap();
    assert_eq!(report.laps.len(), 1);
    assert_eq!(report.landing(), Some(4));
    assert!(!report.extra_turn);
    assert_eq!(board.value(3), 6);
    assert_eq!(board.value(4), 1);
}

#[test]
fn test_illegal_origins_leave_board_untouched() {
    let mut values = vec![3; 14];
    values[0] = 0;
    values[7] = 0;
    values[5] = 0;
    let board = Board::from_values(FIELD_SIZE, &values).unwrap();

    let cases = [
        (0, SowError::FromStore { pit: 0 }),
        (7, SowError::FromStore { pit: 7 }),
        (5, SowError::EmptyPit { pit: 5 }),
        (14, SowError::OutOfRange { pit: 14, len: 14 }),
    ];
    for (origin, expected) in cases {
        let mut copy = board.clone();
        assert_eq!(sow(&mut copy, origin, Player::Close), Err(expected));
        assert_eq!(copy, board);
    }
}

// =============================================================================
// Concrete scenario: 6 pits of 3 seeds, close player sows the first pit
// =============================================================================

#[test]
fn test_first_lap_from_first_close_pit() {
    let mut board = standard_board();
    let lap = distribute(&mut board, 1, Player::Close).unwrap();
    assert_eq!(lap.landing, 4);
    assert_eq!(board.value(1), 0);
    assert_eq!([board.value(2), board.value(3), board.value(4)], [4, 4, 4]);
    assert_eq!(board.value(board.close_store()), 0);
}

#[test]
fn test_full_chain_from_first_close_pit() {
    let mut board = standard_board();
    let report = sow_traced(&mut board, 1, Player::Close, SowRule::StopOnEmpty).unwrap();

    let path: Vec<(Pit, u32, Pit)> = report
        .laps
        .iter()
        .map(|lap| (lap.origin, lap.lifted, lap.landing))
        .collect();
    assert_eq!(
        path,
        vec![(1, 3, 4), (4, 4, 9), (9, 4, 13), (13, 4, 3), (3, 5, 9)]
    );
    assert!(!report.extra_turn);
    assert_eq!(
        board.values(),
        vec![1, 1, 5, 0, 1, 5, 5, 0, 5, 1, 4, 4, 4, 0]
    );
}

// =============================================================================
// Simulation orchestrator
// =============================================================================

#[test]
fn test_simulation_covers_every_pit() {
    let board = standard_board();
    for player in PLAYERS {
        let branches = run_simulations(&board, player);
        assert_eq!(branches.len(), FIELD_SIZE);
        let origins: Vec<Pit> = branches.iter().map(|b| b.origin).collect();
        assert_eq!(origins, board.pits(player).collect::<Vec<_>>());
        for branch in &branches {
            assert!(branch.played());
            assert_eq!(branch.board.total_seeds(), board.total_seeds());
        }
    }
    assert_eq!(board, standard_board());
}

#[test]
fn test_simulation_matches_sequential_sow() {
    let mut rng = fastrand::Rng::with_seed(23);
    for _ in 0..20 {
        let board = random_board(&mut rng, FIELD_SIZE);
        for rule in RULES {
            for branch in run_simulations_with(&board, Player::Far, rule) {
                let mut copy = board.clone();
                match sow_traced(&mut copy, branch.origin, Player::Far, rule) {
                    Ok(report) => {
                        assert_eq!(branch.extra_turn(), report.extra_turn);
                        assert_eq!(branch.board, copy);
                    }
                    Err(err) => {
                        assert_eq!(branch.outcome, BranchOutcome::Rejected(err));
                        assert_eq!(branch.board, board);
                    }
                }
            }
        }
    }
}

#[test]
fn test_concurrent_orchestrators_do_not_interfere() {
    let board = standard_board();
    let expected = run_simulations(&board, Player::Close);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| run_simulations(&board, Player::Close)))
            .collect();
        for handle in handles {
            let got = handle.join().unwrap();
            assert_eq!(got.len(), expected.len());
            for (a, b) in got.iter().zip(&expected) {
                assert_eq!(a.origin, b.origin);
                assert_eq!(a.outcome, b.outcome);
                assert_eq!(a.board, b.board);
            }
        }
    });
}

#[test]
fn test_overfull_board_is_rejected_before_sowing() {
    let mut values = vec![0; 14];
    values[1] = 1;
    values[2] = u32::MAX;
    assert_eq!(
        Board::from_values(FIELD_SIZE, &values),
        Err(BoardError::TooManySeeds {
            total: u32::MAX as u64 + 1
        })
    );

    // At the limit every seed can pile into one cell without overflow.
    let mut values = vec![0; 14];
    values[0] = u32::MAX - 1;
    values[13] = 1;
    let mut board = Board::from_values(FIELD_SIZE, &values).unwrap();
    assert_eq!(sow(&mut board, 13, Player::Close), Ok(true));
    assert_eq!(board.value(0), u32::MAX);
    assert_eq!(board.total_seeds(), u32::MAX as u64);
}
