//! This is the core module. It exports the cards, deck and hand
//! ranking code, none of which knows about the flow of a Hold'em game.

/// The error type shared by the whole crate.
mod error;
pub use self::error::PokerError;

/// card.rs has value and suit.
mod card;
/// Re-export Card and Suit
pub use self::card::{ACE_HIGH, Card, Suit, value_label};

/// Code related to cards in hands.
mod hand;
pub use self::hand::Hand;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::{CardIter, combination_count};

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 Card hand classification and ordering.
mod rank;
/// Export the trait and the results.
pub use self::rank::{ClassifiedHand, HandRank, Rankable, classify, compare};

/// Best 5 card hand out of 5 or more cards.
mod evaluate;
pub use self::evaluate::{evaluate_best, evaluate_with_board};

/// Compact set of seats.
mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, PlayerBitSet};
