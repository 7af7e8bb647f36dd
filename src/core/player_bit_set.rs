use std::fmt;
use std::ops::BitOr;

/// Set of seat indices at a table. Used to report who won a pot.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerBitSet {
    set: u32,
}

impl PlayerBitSet {
    /// Most seats a set can hold.
    pub const MAX_PLAYERS: usize = u32::BITS as usize;

    /// A set with every seat in `0..players` enabled.
    pub fn new(players: usize) -> Self {
        let set = if players >= Self::MAX_PLAYERS {
            u32::MAX
        } else {
            (1 << players) - 1
        };
        Self { set }
    }

    pub fn count(&self) -> usize {
        self.set.count_ones() as usize
    }

    pub fn empty(&self) -> bool {
        self.set == 0
    }

    /// Add a seat. Seats past `MAX_PLAYERS` are ignored.
    pub fn enable(&mut self, idx: usize) {
        if idx < Self::MAX_PLAYERS {
            self.set |= 1 << idx;
        }
    }

    pub fn disable(&mut self, idx: usize) {
        if idx < Self::MAX_PLAYERS {
            self.set &= !(1 << idx);
        }
    }

    pub fn get(&self, idx: usize) -> bool {
        idx < Self::MAX_PLAYERS && (self.set & (1 << idx)) != 0
    }

    /// Iterate over the enabled seats, lowest first.
    pub fn ones(self) -> ActivePlayerBitSetIter {
        ActivePlayerBitSetIter { set: self.set }
    }
}

impl BitOr for PlayerBitSet {
    type Output = PlayerBitSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            set: self.set | rhs.set,
        }
    }
}

impl FromIterator<usize> for PlayerBitSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut s = Self::default();
        for idx in iter {
            s.enable(idx);
        }
        s
    }
}

impl fmt::Debug for PlayerBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}

pub struct ActivePlayerBitSetIter {
    set: u32,
}

impl Iterator for ActivePlayerBitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.set == 0 {
            None
        } else {
            // Find the index of the first non-zero
            let idx = self.set.trailing_zeros() as usize;
            // Then set the first non-zero to zero
            self.set &= !(1 << idx);
            // Then emit the next one
            Some(idx)
        }
    }
}
