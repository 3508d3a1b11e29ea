/// A set of `usize` values with a fixed maximum, backed by a boolean domain
#[derive(Clone, PartialEq)]
pub(crate) struct RangeSet {
    size: usize,
    domain: Vec<bool>,
}

impl RangeSet {
    pub fn new(size: usize) -> RangeSet {
        RangeSet {
            size: 0,
            domain: vec![false; size],
        }
    }

    pub fn with_all(size: usize) -> RangeSet {
        RangeSet {
            size,
            domain: vec![true; size],
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn insert(&mut self, n: usize) -> bool {
        if self.domain[n] {
            return false;
        }
        self.domain[n] = true;
        self.size += 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn remove(&mut self, n: usize) -> bool {
        if !self.domain[n] {
            return false;
        }
        self.domain[n] = false;
        self.size -= 1;
        true
    }

    pub fn contains(&self, n: usize) -> bool {
        self.domain[n]
    }

    /// Removes every element not contained in `other`. Returns true if the
    /// set changed.
    pub fn retain_all(&mut self, other: &RangeSet) -> bool {
        let mut changed = false;
        for n in 0..self.domain.len() {
            if self.domain[n] && !other.contains(n) {
                self.domain[n] = false;
                self.size -= 1;
                changed = true;
            }
        }
        changed
    }

    pub fn is_subset(&self, other: &RangeSet) -> bool {
        self.iter().all(|n| other.contains(n))
    }

    pub fn single_value(&self) -> Option<usize> {
        match self.size {
            1 => self.iter().next(),
            _ => None,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            domain: &self.domain,
            index: 0,
        }
    }
}

pub(crate) struct Iter<'a> {
    domain: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        for i in self.index..self.domain.len() {
            if self.domain[i] {
                self.index = i + 1;
                return Some(i);
            }
        }
        None
    }
}
