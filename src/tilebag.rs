use crate::codec::Label;
use crate::labelset::LabelSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::iter::FromIterator;
use std::ops::Sub;

const NLABELS: usize = 32;

/// A multiset of letters: the number of tiles for each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileBag([u8; NLABELS]);

impl Default for TileBag {
    fn default() -> Self {
        TileBag::new()
    }
}

impl TileBag {
    pub fn new() -> Self {
        TileBag([0; NLABELS])
    }

    /// Add one tile with `label`. Labels past 31 are ignored.
    pub fn insert(&mut self, label: Label) {
        if let Some(count) = self.0.get_mut(label as usize) {
            *count = count.saturating_add(1);
        }
    }

    /// Return the number of tiles with `label`.
    pub fn count_of(&self, label: Label) -> usize {
        self.0.get(label as usize).map_or(0, |&n| n as usize)
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Iterate over (label, count) for the labels present.
    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(label, &n)| (label as Label, n as usize))
    }

    /// The set of labels present.
    pub fn labels(&self) -> LabelSet {
        self.iter().map(|(label, _)| label).collect()
    }
}

/// Per label difference, floored at zero.
impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        let mut bag = self;
        for (n, m) in bag.0.iter_mut().zip(other.0.iter()) {
            *n = n.saturating_sub(*m);
        }
        bag
    }
}

impl FromIterator<Label> for TileBag {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut bag = TileBag::new();
        for label in iter {
            bag.insert(label);
        }
        bag
    }
}

impl From<&[Label]> for TileBag {
    fn from(labels: &[Label]) -> Self {
        labels.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag() {
        let bag = TileBag::from(&[1u8, 2, 2, 29][..]);
        assert_eq!(bag.count_of(2), 2);
        assert_eq!(bag.count_of(3), 0);
        assert_eq!(bag.count_of(200), 0);
        assert_eq!(bag.len(), 4);
        let v: Vec<_> = bag.iter().collect();
        assert_eq!(v, vec![(1, 1), (2, 2), (29, 1)]);
        assert!(bag.labels().contains(29));
    }

    #[test]
    fn test_sub_floors_at_zero() {
        let word = TileBag::from(&[1u8, 1, 2][..]);
        let board = TileBag::from(&[1u8, 2, 2, 3][..]);
        let rest = word - board;
        assert_eq!(rest.count_of(1), 1);
        assert_eq!(rest.count_of(2), 0);
        assert_eq!(rest.count_of(3), 0);
        assert_eq!(rest.len(), 1);
        assert!((board - board).is_empty());
    }
}
