use std::slice::Iter;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, PokerError, Suit};

/// An ordered deck of cards.
///
/// Cards are dealt off of the top of the deck, which is the end of the
/// storage. A card that has been drawn is gone from the deck, so one deck
/// never deals the same card twice.
///
/// Serialized as the list of cards in the order they will be drawn.
/// Deserializing goes through `TryFrom<Vec<Card>>`, so duplicate or
/// invalid cards are rejected there too.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create a new empty deck
    ///
    /// ```
    /// use holdem_showdown::core::Deck;
    ///
    /// assert!(Deck::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(52),
        }
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Add a card to the bottom of the deck.
    ///
    /// ```
    /// use holdem_showdown::core::{Card, Deck, PokerError, Suit};
    ///
    /// let mut deck = Deck::new();
    /// let card = Card::new(1, Suit::Clubs).unwrap();
    /// deck.push(card).unwrap();
    ///
    /// assert_eq!(Err(PokerError::DuplicateCard(card)), deck.push(card));
    /// assert!(deck.push(Card { value: 0, suit: Suit::Clubs }).is_err());
    /// assert_eq!(Ok(card), deck.draw());
    /// ```
    pub fn push(&mut self, c: Card) -> Result<(), PokerError> {
        let c = c.validate()?;
        if self.contains(&c) {
            return Err(PokerError::DuplicateCard(c));
        }
        self.cards.insert(0, c);
        Ok(())
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|x| x == c) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Randomly shuffle the deck with the supplied generator.
    ///
    /// The same seed always gives the same order, so tests can pass a
    /// seeded `StdRng` while games hold on to one long lived generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Take the top card off the deck.
    pub fn draw(&mut self) -> Result<Card, PokerError> {
        self.cards.pop().ok_or(PokerError::EmptyDeck)
    }

    /// Look at the cards from the bottom of the deck to the top.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

/// The full 52 card deck.
///
/// Ordered by suit, Spades, Hearts, Diamonds then Clubs, and within
/// a suit from Ace to King. The Ace of Spades is drawn first.
impl Default for Deck {
    fn default() -> Self {
        let mut cards: Vec<Card> = Suit::suits()
            .into_iter()
            .flat_map(|suit| (1..=13).map(move |value| Card { value, suit }))
            .collect();
        // The top of the deck is the end of the vec.
        cards.reverse();
        Self { cards }
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = PokerError;

    /// Stack a deck. Cards are drawn in the order given.
    fn try_from(value: Vec<Card>) -> Result<Self, Self::Error> {
        let mut deck = Self::new();
        for c in value {
            deck.push(c)?;
        }
        Ok(deck)
    }
}

/// The remaining cards in draw order, top card first.
impl From<Deck> for Vec<Card> {
    fn from(value: Deck) -> Self {
        let mut cards = value.cards;
        cards.reverse();
        cards
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
