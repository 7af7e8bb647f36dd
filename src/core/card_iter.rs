use super::Card;

/// Number of ways to choose `k` items out of `n`.
///
/// ```
/// use holdem_showdown::core::combination_count;
///
/// assert_eq!(21, combination_count(7, 5));
/// assert_eq!(2_598_960, combination_count(52, 5));
/// assert_eq!(0, combination_count(4, 5));
/// ```
pub fn combination_count(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Lazily walks every `num_cards` sized subset of a slice of cards.
///
/// Subsets come out in lexicographic order of their indices into the
/// source slice, and the cards of each subset keep their relative order
/// from the source. The iterator holds one index per selected card so
/// nothing about the walk is recursive, and `reset` starts it over.
///
/// ```
/// use holdem_showdown::core::{CardIter, Hand};
///
/// let hand = Hand::new_from_str("AsKsQsJsTs9s8s").unwrap();
/// let mut iter = CardIter::new(hand.as_slice(), 5);
/// assert_eq!(21, iter.by_ref().count());
///
/// iter.reset();
/// assert_eq!(Some(hand.as_slice()[..5].to_vec()), iter.next());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],
    // Offsets into `possible_cards` for the subset that was last handed out.
    // `None` until the first call to `next`.
    idx: Option<Vec<usize>>,
    // size of card sets requested.
    num_cards: usize,
    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: None,
            num_cards,
            done: num_cards > possible_cards.len(),
        }
    }

    /// Start the walk over from the first subset.
    pub fn reset(&mut self) {
        self.idx = None;
        self.done = self.num_cards > self.possible_cards.len();
    }

    /// How many subsets a full walk produces.
    pub fn total(&self) -> usize {
        combination_count(self.possible_cards.len(), self.num_cards)
    }

    /// Move `idx` to the next subset. Returns false when there is none.
    fn advance(idx: &mut [usize], n: usize) -> bool {
        let k = idx.len();
        // Find the right most offset that still has room to move forward.
        // The offset at position `i` can go as far as `n - k + i`.
        let Some(level) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            return false;
        };
        idx[level] += 1;
        // Everything after the moved offset packs in right behind it.
        for i in level + 1..k {
            idx[i] = idx[i - 1] + 1;
        }
        true
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        let n = self.possible_cards.len();
        match self.idx.as_mut() {
            None => {
                self.idx = Some((0..self.num_cards).collect());
            }
            Some(idx) => {
                if !Self::advance(idx, n) {
                    self.done = true;
                    return None;
                }
            }
        }

        self.idx
            .as_ref()
            .map(|idx| idx.iter().map(|&i| self.possible_cards[i]).collect())
    }
}

impl std::iter::FusedIterator for CardIter<'_> {}
