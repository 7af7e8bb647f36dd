//! Texas Hold'em on top of the core types. Dealing a table, finding each
//! player's best hand and deciding who takes the pot.

/// Module for `HoldemGame` that will hold the current state of the game.
mod game;
/// Export `HoldemGame`
pub use self::game::{BOARD_CARDS, HOLE_CARDS, HoldemGame, MAX_PLAYERS, PlayerHand};

/// Winner resolution and tie policies.
mod showdown;
pub use self::showdown::{HoleCardKicker, SplitPot, TieBreaker, best_hands, resolve_winners};
