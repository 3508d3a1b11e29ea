use std::fmt::{Debug, Formatter};
use std::iter::Map;

use crate::collections::range_set;
use crate::collections::range_set::RangeSet;
use crate::puzzle::Value;

/// A set of candidate values for one cell, a small abstraction over
/// `RangeSet`
#[derive(Clone, PartialEq)]
pub(crate) struct ValueSet(RangeSet);

impl Debug for ValueSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl ValueSet {
    pub fn new(max: usize) -> Self {
        ValueSet(RangeSet::new(max + 1))
    }

    /// Creates a set holding every value in `1..=max`
    pub fn with_all(max: usize) -> ValueSet {
        let mut set = RangeSet::with_all(max + 1);
        set.remove(0);
        ValueSet(set)
    }

    pub fn single(max: usize, value: Value) -> ValueSet {
        let mut set = ValueSet::new(max);
        set.insert(value);
        set
    }

    pub fn contains(&self, n: Value) -> bool {
        self.0.contains(n as usize)
    }

    pub fn insert(&mut self, n: Value) -> bool {
        self.0.insert(n as usize)
    }

    pub fn remove(&mut self, n: Value) -> bool {
        self.0.remove(n as usize)
    }

    /// Removes every value not contained in `other`. Returns true if the set
    /// changed.
    pub fn retain_all(&mut self, other: &ValueSet) -> bool {
        self.0.retain_all(&other.0)
    }

    pub fn is_subset(&self, other: &ValueSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn single_value(&self) -> Option<Value> {
        self.0.single_value().map(|n| n as Value)
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.into_iter()
    }
}

impl Extend<Value> for ValueSet {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for i in iter {
            self.insert(i);
        }
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = Value;
    type IntoIter = Map<range_set::Iter<'a>, fn(usize) -> Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(|n| n as Value)
    }
}
