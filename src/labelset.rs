use crate::codec::Label;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// A bitset representing the labels present in a word or rack.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u32);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        label < 32 && self.0 & (1 << label) != 0
    }

    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 32);
        let r = (self.0 & (1 << label)) != 0;
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Return true if every label in `self` is also in `other`.
    pub fn is_subset(&self, other: &LabelSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Return the labels in either set.
    pub fn union(&self, other: &LabelSet) -> LabelSet {
        LabelSet(self.0 | other.0)
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| format!("{}", label))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLabelSet {
    count: u32,
    value: u32,
}

impl IteratorLabelSet {
    pub fn new(value: u32) -> IteratorLabelSet {
        IteratorLabelSet { count: 0, value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        while self.count < 32 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i as Label);
            }
        }
        None
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LabelSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}

impl From<&[Label]> for LabelSet {
    fn from(labels: &[Label]) -> Self {
        labels.iter().copied().collect()
    }
}
