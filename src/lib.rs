//! Mancala-Rust: a Mancala sowing engine.
//!
//! This crate models a two-row Mancala board with a store for each player,
//! the chain-sowing move, and a parallel explorer that tries every opening
//! sow for a player on independent copies of the board.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and default seeding
//! - [`board`] - The circular board of pits and stores
//! - [`sow`] - Sowing, chain sowing, and the extra-turn rule
//! - [`simulate`] - One parallel branch per starting pit
//! - [`error`] - Construction and sowing errors
//!
//! ## Example
//!
//! ```
//! use mancala_rust::board::{Board, Player};
//! use mancala_rust::constants::{FIELD_SIZE, STARTING_SEEDS};
//! use mancala_rust::simulate::run_simulations;
//! use mancala_rust::sow::sow;
//!
//! let board = Board::new(FIELD_SIZE, STARTING_SEEDS).unwrap();
//!
//! // Sow the first pit after the close store on a copy
//! let mut copy = board.clone();
//! let extra_turn = sow(&mut copy, 1, Player::Close).unwrap();
//! assert!(!extra_turn);
//!
//! // Try every pit on the far player's row at once
//! for branch in run_simulations(&board, Player::Far) {
//!     println!("pit {}: extra turn = {}", branch.origin, branch.extra_turn());
//! }
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod simulate;
pub mod sow;
