use thiserror::Error;

use super::{Card, HandRank, Suit};

/// This is the core error type for the
/// holdem_showdown library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, PartialEq, Eq, Hash, Clone)]
pub enum PokerError {
    #[error("Card value {value} of {suit:?} is outside 1..=13")]
    InvalidCard { value: u8, suit: Suit },
    #[error("A hand is classified from exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("At least 5 cards are needed to find the best hand, got {0}")]
    InsufficientCards(usize),
    #[error("No cards left in the deck")]
    EmptyDeck,
    #[error("Card already added {0}")]
    DuplicateCard(Card),
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("A table seats between 1 and 23 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("There is no player in seat {0}")]
    InvalidPlayerIndex(usize),
    #[error("All five community cards are already dealt")]
    BoardComplete,
    #[error("Rank or tie break doesn't match the cards, which make {0:?}")]
    MismatchedClassification(HandRank),
}
