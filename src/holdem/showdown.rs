use std::cmp::Ordering;

use crate::core::{PlayerBitSet, PokerError, compare};

use super::PlayerHand;

/// What to do with players whose best hands are worth exactly the same.
///
/// The hand comparator can't tell such hands apart and never tries to.
/// A `TieBreaker` is the caller's explicit policy for those seats. It is
/// only ever asked about hands that already compare `Equal`.
pub trait TieBreaker {
    fn break_tie(&self, a: &PlayerHand, b: &PlayerHand) -> Ordering;
}

/// Standard poker rules: equal hands split the pot.
#[derive(Debug, Default, Clone, Copy)]
pub struct SplitPot;

impl TieBreaker for SplitPot {
    fn break_tie(&self, _a: &PlayerHand, _b: &PlayerHand) -> Ordering {
        Ordering::Equal
    }
}

/// House rule that awards a tied pot by the hole cards.
///
/// Hole cards are compared pairwise in the order they were dealt, by
/// comparison value. The first difference decides. This looks at cards
/// that may not be part of either best hand, so it is not standard poker.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoleCardKicker;

impl TieBreaker for HoleCardKicker {
    fn break_tie(&self, a: &PlayerHand, b: &PlayerHand) -> Ordering {
        a.hole_cards
            .iter()
            .zip(b.hole_cards.iter())
            .map(|(x, y)| x.comparison_value().cmp(&y.comparison_value()))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Fold the hands down to the set of seats that are greatest under `cmp`.
fn greatest<'a, I, F>(hands: I, cmp: F) -> PlayerBitSet
where
    I: IntoIterator<Item = &'a PlayerHand>,
    F: Fn(&PlayerHand, &PlayerHand) -> Ordering,
{
    let (found, _) = hands.into_iter().fold(
        (PlayerBitSet::default(), None::<&PlayerHand>),
        |(mut found, max_hand), hand| match max_hand.map(|m| cmp(hand, m)) {
            // If this is a tie then add the seat.
            Some(Ordering::Equal) => {
                found.enable(hand.seat);
                (found, max_hand)
            }
            // Otherwise keep what we've already found.
            Some(Ordering::Less) => (found, max_hand),
            // New best hand, only this seat wins so far.
            Some(Ordering::Greater) | None => {
                found = PlayerBitSet::default();
                found.enable(hand.seat);
                (found, Some(hand))
            }
        },
    );
    found
}

/// Every seat holding the greatest hand. More than one seat means the pot
/// is split, as far as the hand values are concerned.
///
/// Seats must fit in a `PlayerBitSet`, anything else is `InvalidPlayerIndex`.
pub fn best_hands(hands: &[PlayerHand]) -> Result<PlayerBitSet, PokerError> {
    if let Some(h) = hands.iter().find(|h| h.seat >= PlayerBitSet::MAX_PLAYERS) {
        return Err(PokerError::InvalidPlayerIndex(h.seat));
    }
    Ok(greatest(hands, |a, b| compare(&a.best, &b.best)))
}

/// Pick the winners, handing seats that tie on hand value to `tie_breaker`.
///
/// ```
/// use holdem_showdown::core::{Hand, evaluate_with_board};
/// use holdem_showdown::holdem::{HoleCardKicker, PlayerHand, SplitPot, resolve_winners};
///
/// let board = Hand::new_from_str("AsKsQsJsTs").unwrap();
/// let hands: Vec<PlayerHand> = ["2c3d", "9h8h"]
///     .iter()
///     .enumerate()
///     .map(|(seat, s)| {
///         let hole_cards = Hand::new_from_str(s).unwrap();
///         let best = evaluate_with_board(hole_cards.as_slice(), board.as_slice()).unwrap();
///         PlayerHand { seat, hole_cards, best }
///     })
///     .collect();
///
/// // Both play the royal flush on the board.
/// assert_eq!(2, resolve_winners(&hands, &SplitPot).unwrap().count());
///
/// let house_rule = resolve_winners(&hands, &HoleCardKicker).unwrap();
/// assert_eq!(vec![1], house_rule.ones().collect::<Vec<_>>());
/// ```
pub fn resolve_winners<T: TieBreaker + ?Sized>(
    hands: &[PlayerHand],
    tie_breaker: &T,
) -> Result<PlayerBitSet, PokerError> {
    let tied = best_hands(hands)?;
    if tied.count() <= 1 {
        return Ok(tied);
    }
    Ok(greatest(hands.iter().filter(|h| tied.get(h.seat)), |a, b| {
        tie_breaker.break_tie(a, b)
    }))
}
