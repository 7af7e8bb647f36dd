use std::cmp::Ordering;
use std::fmt;

use super::card::{ACE_HIGH, value_label};
use super::{Card, PokerError, evaluate_best};

/// All the different possible hand ranks, weakest first.
///
/// The derived `Ord` follows declaration order, so comparing two ranks
/// never depends on the discriminant values.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandRank {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two diffent pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to Ace all of the same suit.
    RoyalFlush,
}

impl HandRank {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

/// The classification of exactly five cards.
///
/// `cards` are sorted by descending comparison value, equal values staying
/// in the order they were given. `tie_break` holds comparison values, most
/// significant first, with a fixed length per rank:
///
/// | rank | tie_break |
/// |---|---|
/// | RoyalFlush | `[]` |
/// | StraightFlush, Straight | `[high]` (5 for the wheel) |
/// | FourOfAKind | `[quad, kicker]` |
/// | FullHouse | `[trips, pair]` |
/// | Flush, HighCard | all five values |
/// | ThreeOfAKind | `[trips, kicker, kicker]` |
/// | TwoPair | `[high pair, low pair, kicker]` |
/// | Pair | `[pair, kicker, kicker, kicker]` |
///
/// Equality and ordering only look at `rank` and `tie_break`. Two hands built
/// from different cards that are worth the same compare `Equal`.
///
/// Deserializing classifies the cards again and rejects input whose rank or
/// tie break doesn't match what the cards make.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SerializedHand"))]
pub struct ClassifiedHand {
    rank: HandRank,
    cards: [Card; 5],
    tie_break: Vec<u8>,
}

impl ClassifiedHand {
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn tie_break(&self) -> &[u8] {
        &self.tie_break
    }

    /// Human readable name. High card hands name their top card,
    /// e.g. "High Card K".
    pub fn name(&self) -> String {
        match self.rank {
            HandRank::HighCard => format!(
                "{} {}",
                self.rank.name(),
                value_label(self.cards[0].comparison_value())
            ),
            rank => rank.name().to_string(),
        }
    }
}

/// Order two classified hands.
///
/// The rank decides first. Equal ranks fall through to the tie break
/// values, compared in order. `Equal` is a genuine tie.
///
/// ```
/// use std::cmp::Ordering;
/// use holdem_showdown::core::{Hand, Rankable, compare};
///
/// let pair = Hand::new_from_str("9s9d2c3h4s").unwrap().classify_five().unwrap();
/// let high = Hand::new_from_str("AsKdQc7h4s").unwrap().classify_five().unwrap();
/// assert_eq!(Ordering::Greater, compare(&pair, &high));
/// ```
pub fn compare(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    a.rank.cmp(&b.rank).then_with(|| {
        a.tie_break
            .iter()
            .zip(b.tie_break.iter())
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

impl PartialEq for ClassifiedHand {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for ClassifiedHand {}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

/// Same fields as `ClassifiedHand`, taken on trust until they're checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SerializedHand {
    rank: HandRank,
    cards: [Card; 5],
    tie_break: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<SerializedHand> for ClassifiedHand {
    type Error = PokerError;

    fn try_from(value: SerializedHand) -> Result<Self, Self::Error> {
        let hand = classify(&value.cards)?;
        if hand.rank != value.rank || hand.tie_break != value.tie_break {
            return Err(PokerError::MismatchedClassification(hand.rank));
        }
        Ok(hand)
    }
}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name())?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// High card of the straight made by five sorted comparison values, if any.
/// The wheel (A 5 4 3 2) plays the Ace low and reports 5.
fn straight_high(values: &[u8; 5]) -> Option<u8> {
    if values.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(values[0])
    } else if *values == [ACE_HIGH, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

/// Group the values by multiplicity.
/// Returns `(count, value)` pairs, biggest group first then highest value.
fn value_groups(values: &[u8; 5]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; ACE_HIGH as usize + 1];
    for &v in values {
        counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c > 0)
        .map(|(v, &c)| (c, v as u8))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    groups
}

/// Classify exactly five cards.
///
/// ```
/// use holdem_showdown::core::{classify, Hand, HandRank};
///
/// let hand = Hand::new_from_str("2h2d2c5s5h").unwrap();
/// let classified = classify(hand.as_slice()).unwrap();
///
/// assert_eq!(HandRank::FullHouse, classified.rank());
/// assert_eq!(&[2, 5], classified.tie_break());
/// ```
pub fn classify(cards: &[Card]) -> Result<ClassifiedHand, PokerError> {
    let mut sorted: [Card; 5] = cards
        .try_into()
        .map_err(|_| PokerError::InvalidHandSize(cards.len()))?;
    for c in &sorted {
        c.validate()?;
    }
    // sort_by is stable so equal values keep their input order.
    sorted.sort_by(|a, b| b.comparison_value().cmp(&a.comparison_value()));

    let values = sorted.map(|c| c.comparison_value());
    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight = straight_high(&values);
    let groups = value_groups(&values);
    let kickers = || {
        groups
            .iter()
            .filter(|(count, _)| *count == 1)
            .map(|(_, v)| *v)
    };

    let (rank, tie_break) = match (is_flush, straight, groups.as_slice()) {
        (true, Some(ACE_HIGH), _) => (HandRank::RoyalFlush, vec![]),
        (true, Some(high), _) => (HandRank::StraightFlush, vec![high]),
        (_, _, [(4, quad), (1, kicker)]) => (HandRank::FourOfAKind, vec![*quad, *kicker]),
        (_, _, [(3, trips), (2, pair)]) => (HandRank::FullHouse, vec![*trips, *pair]),
        (true, None, _) => (HandRank::Flush, values.to_vec()),
        (false, Some(high), _) => (HandRank::Straight, vec![high]),
        (_, _, [(3, trips), ..]) => {
            let mut tb = vec![*trips];
            tb.extend(kickers());
            (HandRank::ThreeOfAKind, tb)
        }
        (_, _, [(2, high), (2, low), (1, kicker)]) => {
            (HandRank::TwoPair, vec![*high, *low, *kicker])
        }
        (_, _, [(2, pair), ..]) => {
            let mut tb = vec![*pair];
            tb.extend(kickers());
            (HandRank::Pair, tb)
        }
        _ => (HandRank::HighCard, values.to_vec()),
    };

    Ok(ClassifiedHand {
        rank,
        cards: sorted,
        tie_break,
    })
}

/// Something that holds cards that can be ranked.
pub trait Rankable {
    /// The cards to rank, in the order they were collected.
    fn cards(&self) -> &[Card];

    /// Classify the cards as a five card hand.
    /// Errors if there are not exactly five.
    fn classify_five(&self) -> Result<ClassifiedHand, PokerError> {
        classify(self.cards())
    }

    /// Find the best five card hand out of five or more cards.
    fn rank(&self) -> Result<ClassifiedHand, PokerError> {
        evaluate_best(self.cards())
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for super::Hand {
    fn cards(&self) -> &[Card] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use super::*;
    use crate::core::{Hand, Suit};

    fn five(s: &str) -> ClassifiedHand {
        Hand::new_from_str(s).unwrap().classify_five().unwrap()
    }

    #[test]
    fn test_cmp() {
        assert!(HandRank::HighCard < HandRank::RoyalFlush);
        assert!(HandRank::HighCard < HandRank::FourOfAKind);
        assert!(HandRank::HighCard < HandRank::ThreeOfAKind);
        assert!(HandRank::StraightFlush < HandRank::RoyalFlush);
        assert!(HandRank::Flush < HandRank::FullHouse);
        assert!(HandRank::Straight < HandRank::Flush);
    }

    #[test]
    fn test_high_card_hand() {
        let hand = five("Ad8h9cTc5c");
        assert_eq!(HandRank::HighCard, hand.rank());
        assert_eq!(&[14, 10, 9, 8, 5], hand.tie_break());
        assert_eq!("High Card A", hand.name());
    }

    #[test]
    fn test_flush() {
        let hand = five("Ad8d9dTd5d");
        assert_eq!(HandRank::Flush, hand.rank());
        assert_eq!(&[14, 10, 9, 8, 5], hand.tie_break());
    }

    #[test]
    fn test_full_house() {
        let hand = five("AdAc9d9c9s");
        assert_eq!(HandRank::FullHouse, hand.rank());
        assert_eq!(&[9, 14], hand.tie_break());
    }

    #[test]
    fn test_full_house_low_trips() {
        let hand = five("2h2d2c5s5h");
        assert_eq!(HandRank::FullHouse, hand.rank());
        assert_eq!(&[2, 5], hand.tie_break());
    }

    #[test]
    fn test_two_pair() {
        let hand = five("AdAc9d9cTs");
        assert_eq!(HandRank::TwoPair, hand.rank());
        assert_eq!(&[14, 9, 10], hand.tie_break());
    }

    #[test]
    fn test_one_pair() {
        let hand = five("AdAc9d8cTs");
        assert_eq!(HandRank::Pair, hand.rank());
        assert_eq!(&[14, 10, 9, 8], hand.tie_break());
    }

    #[test]
    fn test_three_of_a_kind() {
        let hand = five("2c2s2h5s6d");
        assert_eq!(HandRank::ThreeOfAKind, hand.rank());
        assert_eq!(&[2, 6, 5], hand.tie_break());
    }

    #[test]
    fn test_four_of_a_kind() {
        let hand = five("AdAcAsAhTs");
        assert_eq!(HandRank::FourOfAKind, hand.rank());
        assert_eq!(&[14, 10], hand.tie_break());
    }

    #[test]
    fn test_wheel() {
        let hand = five("Ad2c3s4h5s");
        assert_eq!(HandRank::Straight, hand.rank());
        assert_eq!(&[5], hand.tie_break());
        // Sorted with the Ace on top even though it plays low.
        assert!(hand.cards()[0].is_ace());
    }

    #[test]
    fn test_wheel_loses_to_six_high() {
        let wheel = five("Ad2c3s4h5s");
        let six_high = five("2c3s4h5s6d");
        assert_eq!(&[6], six_high.tie_break());
        assert!(wheel < six_high);
    }

    #[test]
    fn test_straight() {
        let hand = five("Tc9s8h7s6d");
        assert_eq!(HandRank::Straight, hand.rank());
        assert_eq!(&[10], hand.tie_break());
    }

    #[test]
    fn test_broadway_is_a_straight() {
        let hand = five("AcKsQhJsTd");
        assert_eq!(HandRank::Straight, hand.rank());
        assert_eq!(&[14], hand.tie_break());
    }

    #[test]
    fn test_no_wrap_around() {
        let hand = five("QcKsAh2s3d");
        assert_eq!(HandRank::HighCard, hand.rank());
    }

    #[test]
    fn test_straight_flush() {
        let hand = five("9h8h7h6h5h");
        assert_eq!(HandRank::StraightFlush, hand.rank());
        assert_eq!(&[9], hand.tie_break());

        let steel_wheel = five("Ah2h3h4h5h");
        assert_eq!(HandRank::StraightFlush, steel_wheel.rank());
        assert_eq!(&[5], steel_wheel.tie_break());
    }

    #[test]
    fn test_royal_flush() {
        let hand = five("AsKsQsJsTs");
        assert_eq!(HandRank::RoyalFlush, hand.rank());
        assert!(hand.tie_break().is_empty());
        assert_eq!("Royal Flush", hand.name());

        let shuffled = five("TsJsAsQsKs");
        assert_eq!(HandRank::RoyalFlush, shuffled.rank());
    }

    #[test]
    fn test_sorted_cards_stable() {
        let hand = five("9c5d9h5s9s");
        let cards = hand.cards();
        assert_eq!(
            vec![
                (9, Suit::Clubs),
                (9, Suit::Hearts),
                (9, Suit::Spades),
                (5, Suit::Diamonds),
                (5, Suit::Spades)
            ],
            cards.iter().map(|c| (c.value, c.suit)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_wrong_size() {
        let six = Hand::new_from_str("AsKsQsJsTs9s").unwrap();
        assert_eq!(Err(PokerError::InvalidHandSize(6)), six.classify_five());
        let four = Hand::new_from_str("AsKsQsJs").unwrap();
        assert_eq!(Err(PokerError::InvalidHandSize(4)), four.classify_five());
        assert_eq!(Err(PokerError::InvalidHandSize(0)), classify(&[]));
    }

    #[test]
    fn test_invalid_card() {
        let mut cards: Vec<Card> = Hand::new_from_str("AsKsQsJs").unwrap().into();
        cards.push(Card {
            value: 14,
            suit: Suit::Spades,
        });
        assert_eq!(
            Err(PokerError::InvalidCard {
                value: 14,
                suit: Suit::Spades
            }),
            classify(&cards)
        );
    }

    #[test]
    fn test_tie_break_lengths() {
        let expected = [
            ("AsKsQsJsTs", 0),
            ("9h8h7h6h5h", 1),
            ("AdAcAsAhTs", 2),
            ("AdAc9d9c9s", 2),
            ("Ad8d9dTd5d", 5),
            ("Tc9s8h7s6d", 1),
            ("2c2s2h5s6d", 3),
            ("AdAc9d9cTs", 3),
            ("AdAc9d8cTs", 4),
            ("Ad8h9cTc5c", 5),
        ];
        for (s, len) in expected {
            assert_eq!(len, five(s).tie_break().len(), "{s}");
        }
    }

    #[test]
    fn test_permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(420);
        for s in [
            "AdAc9d9cTs",
            "2c2s2h5s6d",
            "Ad2c3s4h5s",
            "AsKsQsJsTs",
            "9c5d9h5s9s",
            "Ad8h9cTc5c",
        ] {
            let base = five(s);
            let mut cards: Vec<Card> = Hand::new_from_str(s).unwrap().into();
            for _ in 0..30 {
                cards.shuffle(&mut rng);
                let other = classify(&cards).unwrap();
                assert_eq!(base.rank(), other.rank());
                assert_eq!(base.tie_break(), other.tie_break());
                let a: HashSet<&Card> = base.cards().iter().collect();
                let b: HashSet<&Card> = other.cards().iter().collect();
                assert_eq!(a, b);
                let values = |h: &ClassifiedHand| {
                    h.cards()
                        .iter()
                        .map(|c| c.comparison_value())
                        .collect::<Vec<_>>()
                };
                assert_eq!(values(&base), values(&other));
            }
        }
    }

    #[test]
    fn test_compare_is_total_preorder() {
        let hands: Vec<ClassifiedHand> = [
            "AsKsQsJsTs",
            "KhQhJhTh9h",
            "5d4d3d2dAd",
            "9s9h9d9c2s",
            "9s9h9d9cAs",
            "3s3h3dKcKs",
            "3s3h3dQcQs",
            "AhJh8h6h2h",
            "AhJh8h6h3h",
            "Kc9c7c5c3c",
            "AcKdQhJsTc",
            "6c5d4h3s2c",
            "5c4d3h2sAc",
            "7c7d7hAsKc",
            "7c7d7hAsQc",
            "JcJdTcTdAh",
            "JcJd9c9dAh",
            "JcJd9c9dKh",
            "8c8dAhKs2c",
            "8c8dAhQs2c",
            "AcKdQh9s7c",
            "AcKdQh9s6c",
            "7c5d4h3s2c",
            "AdKcQsJhTc",
        ]
        .iter()
        .map(|s| five(s))
        .collect();

        for a in &hands {
            assert_eq!(Ordering::Equal, compare(a, a));
            for b in &hands {
                let ab = compare(a, b);
                assert_eq!(ab.reverse(), compare(b, a));
                for c in &hands {
                    if ab.is_le() && compare(b, c).is_le() {
                        assert!(compare(a, c).is_le());
                    }
                }
            }
        }

        // Broadway straights with different suits are a tie.
        assert_eq!(Ordering::Equal, compare(&hands[10], &hands[23]));
        // Kicker decides otherwise equal pairs.
        assert_eq!(Ordering::Greater, compare(&hands[18], &hands[19]));
        // Any higher rank wins whatever the tie break values.
        assert_eq!(Ordering::Greater, compare(&hands[3], &hands[6]));
        assert_eq!(Ordering::Greater, compare(&hands[0], &hands[1]));
        // Trips of the same value go to the second kicker.
        assert_eq!(Ordering::Greater, compare(&hands[13], &hands[14]));
    }

    #[test]
    fn test_rank_beats_tie_break() {
        let low_pair = five("2c2d3h4s6c");
        let ace_high = five("AcKdQhJs9c");
        assert!(low_pair > ace_high);
    }

    #[test]
    fn test_display() {
        let hand = five("Ad2c3s4h5s");
        assert_eq!("Straight [A♦ 5♠ 4♥ 3♠ 2♣]", hand.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_shape() {
        let hand = five("2h2d2c5s5h");
        let json = serde_json::to_value(&hand).unwrap();
        assert_eq!("FullHouse", json["rank"]);
        assert_eq!(serde_json::json!([2, 5]), json["tie_break"]);
        assert_eq!(5, json["cards"].as_array().unwrap().len());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_reclassifies() {
        let hand = five("7c7d7hAsKc");
        let json = serde_json::to_value(&hand).unwrap();
        let back: ClassifiedHand = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(hand, back);
        assert_eq!(hand.cards(), back.cards());

        let mut short_key = json.clone();
        short_key["tie_break"] = serde_json::json!([7]);
        assert!(serde_json::from_value::<ClassifiedHand>(short_key).is_err());

        let mut wrong_rank = json.clone();
        wrong_rank["rank"] = serde_json::json!("Pair");
        assert!(serde_json::from_value::<ClassifiedHand>(wrong_rank).is_err());

        let mut bad_card = json;
        bad_card["cards"][0]["value"] = serde_json::json!(0);
        assert!(serde_json::from_value::<ClassifiedHand>(bad_card).is_err());
    }
}
