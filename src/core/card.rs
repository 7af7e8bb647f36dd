use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use super::PokerError;

/// Comparison value of an Ace when it plays high.
pub const ACE_HIGH: u8 = 14;

/// Enum for the four different suits.
/// Suits carry no ranking, only identity.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spades,
    /// Hearts
    Hearts,
    /// Diamonds
    Diamonds,
    /// Clubs
    Clubs,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    /// Provide all the Suit's that there are, in deck order.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Parse the single letter form of a suit.
    ///
    /// ```
    /// use holdem_showdown::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Hearts), Suit::from_char('h'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            's' => Some(Self::Spades),
            'h' => Some(Self::Hearts),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
        }
    }

    /// The symbol used when printing cards to a console.
    pub fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// A playing card.
///
/// `value` is the face value with 1 standing for the Ace, 11 to 13 for
/// Jack, Queen and King. The fields are public so cards can be matched on,
/// which means a card can hold an out of range value. Every boundary that
/// accepts cards (`Card::new`, decks, hands, the classifier) checks
/// `is_valid` and rejects such cards with `PokerError::InvalidCard`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card, Ace is 1.
    pub value: u8,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a card, rejecting values outside of `1..=13`.
    ///
    /// ```
    /// use holdem_showdown::core::{Card, PokerError, Suit};
    ///
    /// let ace = Card::new(1, Suit::Spades).unwrap();
    /// assert_eq!(14, ace.comparison_value());
    ///
    /// assert_eq!(
    ///     Err(PokerError::InvalidCard { value: 14, suit: Suit::Spades }),
    ///     Card::new(14, Suit::Spades)
    /// );
    /// ```
    pub fn new(value: u8, suit: Suit) -> Result<Self, PokerError> {
        Self { value, suit }.validate()
    }

    /// Is the value in `1..=13`?
    pub fn is_valid(&self) -> bool {
        (1..=13).contains(&self.value)
    }

    /// Return the card back if it's valid.
    pub fn validate(self) -> Result<Self, PokerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(PokerError::InvalidCard {
                value: self.value,
                suit: self.suit,
            })
        }
    }

    /// The value used for ranking. Ace plays high (14), everything else
    /// is its face value. The only place the wheel straight treats the
    /// Ace as low is the straight check in the classifier.
    pub fn comparison_value(&self) -> u8 {
        if self.value == 1 { ACE_HIGH } else { self.value }
    }

    pub fn is_ace(&self) -> bool {
        self.value == 1
    }
}

/// Label for a face value or a comparison value.
/// Both 1 and 14 are the Ace.
pub fn value_label(value: u8) -> &'static str {
    match value {
        1 | ACE_HIGH => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Invalid Card");
        }
        write!(f, "{}{}", value_label(self.value), self.suit.symbol())
    }
}

fn value_from_char(c: char) -> Option<u8> {
    match c {
        'A' => Some(1),
        'K' => Some(13),
        'Q' => Some(12),
        'J' => Some(11),
        'T' => Some(10),
        '2'..='9' => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

/// Pull one card off of the front of a char stream.
///
/// Values are a single char (`A K Q J T 9 .. 2`) or the two chars `10`,
/// followed by one suit char (`s h d c`). Returns `Ok(None)` once the stream
/// is exhausted.
pub(crate) fn parse_card(chars: &mut Peekable<Chars<'_>>) -> Result<Option<Card>, PokerError> {
    let Some(vc) = chars.next() else {
        return Ok(None);
    };
    let value = if vc == '1' {
        match chars.next() {
            Some('0') => 10,
            _ => return Err(PokerError::UnexpectedValueChar),
        }
    } else {
        value_from_char(vc).ok_or(PokerError::UnexpectedValueChar)?
    };
    let suit = chars
        .next()
        .and_then(Suit::from_char)
        .ok_or(PokerError::UnexpectedSuitChar)?;
    Ok(Some(Card { value, suit }))
}

impl FromStr for Card {
    type Err = PokerError;

    /// ```
    /// use holdem_showdown::core::{Card, Suit};
    ///
    /// let card: Card = "10h".parse().unwrap();
    /// assert_eq!(Card::new(10, Suit::Hearts).unwrap(), card);
    /// assert_eq!(card, "Th".parse::<Card>().unwrap());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().peekable();
        let card = parse_card(&mut chars)?.ok_or(PokerError::UnexpectedValueChar)?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(card)
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(3, Suit::Spades).unwrap();
        assert_eq!(Suit::Spades, c.suit);
        assert_eq!(3, c.value);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Card::new(0, Suit::Clubs).is_err());
        assert!(Card::new(14, Suit::Clubs).is_err());
        for v in 1..=13 {
            assert!(Card::new(v, Suit::Clubs).is_ok());
        }
    }

    #[test]
    fn test_comparison_value() {
        let ace = Card::new(1, Suit::Hearts).unwrap();
        let king = Card::new(13, Suit::Hearts).unwrap();
        let two = Card::new(2, Suit::Hearts).unwrap();
        assert_eq!(14, ace.comparison_value());
        assert_eq!(13, king.comparison_value());
        assert_eq!(2, two.comparison_value());
        // The stored value is left alone.
        assert_eq!(1, ace.value);
    }

    #[test]
    fn test_structural_equality() {
        let c1 = Card::new(4, Suit::Spades).unwrap();
        let c2 = Card::new(4, Suit::Spades).unwrap();
        let c3 = Card::new(4, Suit::Clubs).unwrap();
        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
    }

    #[test]
    fn test_display() {
        assert_eq!("A♠", Card::new(1, Suit::Spades).unwrap().to_string());
        assert_eq!("10♥", Card::new(10, Suit::Hearts).unwrap().to_string());
        assert_eq!("Q♦", Card::new(12, Suit::Diamonds).unwrap().to_string());
        assert_eq!(
            "Invalid Card",
            Card {
                value: 0,
                suit: Suit::Clubs
            }
            .to_string()
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Card::new(1, Suit::Spades), "As".parse::<Card>());
        assert_eq!(Card::new(2, Suit::Clubs), "2c".parse::<Card>());
        assert_eq!(Card::new(11, Suit::Diamonds), Card::try_from("Jd"));
        assert_eq!(Err(PokerError::UnexpectedValueChar), "Xs".parse::<Card>());
        assert_eq!(Err(PokerError::UnexpectedValueChar), "1s".parse::<Card>());
        assert_eq!(Err(PokerError::UnexpectedSuitChar), "Ax".parse::<Card>());
        assert_eq!(Err(PokerError::UnexpectedSuitChar), "A".parse::<Card>());
        assert_eq!(
            Err(PokerError::UnparsedCharsRemaining),
            "Ask".parse::<Card>()
        );
    }

    #[test]
    fn test_suit_chars() {
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 2);
    }
}
