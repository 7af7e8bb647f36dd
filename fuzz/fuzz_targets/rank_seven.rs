#![no_main]
use std::cmp::Ordering;

use holdem_showdown::core::{Card, CardIter, PokerError, classify, compare, evaluate_best};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|cards: Vec<Card>| {
    let cards = &cards[..cards.len().min(9)];
    match evaluate_best(cards) {
        Ok(best) => {
            let brute = CardIter::new(cards, 5)
                .map(|five| classify(&five).unwrap())
                .max()
                .unwrap();
            assert_eq!(Ordering::Equal, compare(&best, &brute));
            assert_eq!(best.tie_break(), brute.tie_break());
        }
        Err(PokerError::InsufficientCards(n)) => assert!(n < 5),
        Err(PokerError::InvalidCard { value, .. }) => assert!(!(1..=13).contains(&value)),
        Err(PokerError::DuplicateCard(c)) => {
            assert!(cards.iter().filter(|x| **x == c).count() > 1)
        }
        Err(e) => panic!("unexpected error {e}"),
    }
});
