use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use super::card::parse_card;
use super::{Card, CardIter, PokerError};

/// An ordered collection of distinct, valid cards.
///
/// Used both for a player's hole cards and for the full set of cards handed
/// to the evaluator. Insertion order is kept since the combination walk
/// and the classifier's stable sort both depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_showdown::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
        }
    }

    /// Build a hand out of cards, validating each of them.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, PokerError> {
        let mut hand = Self::new();
        hand.extend(cards)?;
        Ok(hand)
    }

    /// Add a card to the end of the hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_showdown::core::{Card, Hand, PokerError, Suit};
    ///
    /// let mut hand = Hand::new();
    /// let card = Card::new(1, Suit::Clubs).unwrap();
    ///
    /// hand.push(card).unwrap();
    /// assert_eq!(Err(PokerError::DuplicateCard(card)), hand.push(card));
    /// assert_eq!(1, hand.len());
    /// ```
    pub fn push(&mut self, c: Card) -> Result<(), PokerError> {
        let c = c.validate()?;
        if self.contains(&c) {
            return Err(PokerError::DuplicateCard(c));
        }
        self.cards.push(c);
        Ok(())
    }

    /// Push every card, stopping at the first one that is rejected.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) -> Result<(), PokerError> {
        for c in cards {
            self.push(c)?;
        }
        Ok(())
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Every `k` card subset of this hand.
    pub fn combinations(&self, k: usize) -> CardIter<'_> {
        CardIter::new(&self.cards, k)
    }

    /// Parse a string of cards, e.g. `"AsKd10h2c"`.
    ///
    /// ```
    /// use holdem_showdown::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AdKdQdJdTd").unwrap();
    /// assert_eq!(5, hand.len());
    /// assert!(Hand::new_from_str("AdAd").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let mut chars = hand_string.chars().peekable();
        let mut hand = Self::new();

        // Keep looping until the chars run out.
        while let Some(c) = parse_card(&mut chars)? {
            hand.push(c)?;
        }

        Ok(hand)
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PokerError;

    fn try_from(value: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new_with_cards(value)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(value: Hand) -> Self {
        value.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}
