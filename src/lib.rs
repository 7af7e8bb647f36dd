//! holdem_showdown deals Texas Hold'em and settles the showdown.
//!
//! The hard part is the hand evaluator: every five card subset of a
//! player's cards is classified into one of ten ranks with a tie break key,
//! and the best one wins. Hands that are worth exactly the same compare
//! equal; splitting or breaking such ties is left to the caller.
//!
//! ```
//! use holdem_showdown::core::{Hand, HandRank, Rankable};
//!
//! let cards = Hand::new_from_str("AsKsQsJsTs2d3c").unwrap();
//! assert_eq!(HandRank::RoyalFlush, cards.rank().unwrap().rank());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
