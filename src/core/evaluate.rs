use tracing::{Level, event, trace_span};

use super::{Card, CardIter, ClassifiedHand, PokerError, classify};

/// Find the best five card hand that can be made out of `cards`.
///
/// Every five card subset is classified and the greatest one under
/// `compare` is returned. When several subsets tie for best the first one
/// walked is kept; they are all worth the same.
///
/// # Errors
///
/// * `InsufficientCards` with fewer than five cards.
/// * `InvalidCard` if any card is out of range.
/// * `DuplicateCard` if the same card shows up twice.
///
/// ```
/// use holdem_showdown::core::{evaluate_best, Hand, HandRank};
///
/// let cards = Hand::new_from_str("9s9h9d9cKh3c7d").unwrap();
/// let best = evaluate_best(cards.as_slice()).unwrap();
///
/// assert_eq!(HandRank::FourOfAKind, best.rank());
/// assert_eq!(&[9, 13], best.tie_break());
/// ```
pub fn evaluate_best(cards: &[Card]) -> Result<ClassifiedHand, PokerError> {
    if cards.len() < 5 {
        return Err(PokerError::InsufficientCards(cards.len()));
    }
    for (i, c) in cards.iter().enumerate() {
        c.validate()?;
        if cards[..i].contains(c) {
            return Err(PokerError::DuplicateCard(*c));
        }
    }

    let _span = trace_span!("evaluate_best", num_cards = cards.len()).entered();
    let mut best: Option<ClassifiedHand> = None;
    for combo in CardIter::new(cards, 5) {
        let hand = classify(&combo)?;
        event!(Level::TRACE, hand = %hand, "Classified combination");
        if best.as_ref().is_none_or(|b| hand > *b) {
            best = Some(hand);
        }
    }

    let best = best.ok_or(PokerError::InsufficientCards(cards.len()))?;
    event!(Level::DEBUG, best = %best, "Best hand");
    Ok(best)
}

/// Best hand for a player holding `hole` with `board` on the table.
pub fn evaluate_with_board(hole: &[Card], board: &[Card]) -> Result<ClassifiedHand, PokerError> {
    let mut all = Vec::with_capacity(hole.len() + board.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(board);
    evaluate_best(&all)
}
