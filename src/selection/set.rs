//! A canonical container for the values selected in one field.
//!
//! [`SelectionSet`] wraps a `Vec<u32>` and guarantees the **canonical
//! invariant** at all times: values are sorted ascending with no duplicates.
//!
//! Read access is transparent via `Deref<Target = [u32]>`. Mutation goes
//! through dedicated methods that keep the invariant.

use std::fmt;
use std::ops::Deref;

use crate::error::Result;
use crate::unit::UnitSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sorted, duplicate-free set of field values.
///
/// A set equal to the whole domain of its unit means the same thing as an
/// empty one (the wildcard). Use [`SelectionSet::normalized`] to fold the
/// former onto the latter.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n).
/// - `contains`: O(log n) binary search.
/// - `insert` / `remove`: O(n) worst-case due to the shift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<u32>", into = "Vec<u32>"))]
pub struct SelectionSet(Vec<u32>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl SelectionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a set from values in any order, dropping duplicates.
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        let mut vec: Vec<u32> = values.into_iter().collect();
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }

    /// Wraps a `Vec` that is **already sorted and duplicate-free**.
    ///
    /// In debug builds this asserts the invariant.
    pub fn from_sorted_unchecked(vec: Vec<u32>) -> Self {
        debug_assert!(
            vec.windows(2).all(|w| w[0] < w[1]),
            "SelectionSet::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    /// Every value of `unit`'s domain.
    pub fn full(unit: &UnitSpec) -> Self {
        Self::from_sorted_unchecked(unit.values().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl SelectionSet {
    pub fn contains(&self, value: u32) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    /// Returns true if the set holds every value of `unit`'s domain.
    pub fn is_full(&self, unit: &UnitSpec) -> bool {
        self.0.len() == unit.total() as usize
            && self.0.first() == Some(&unit.min())
            && self.0.last() == Some(&unit.max())
    }

    /// Fails with the first value outside `unit`'s domain, if any.
    pub fn validate(&self, unit: &UnitSpec) -> Result<()> {
        for &value in &self.0 {
            unit.check(value)?;
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation
// ─────────────────────────────────────────────────────────────────────

impl SelectionSet {
    /// Inserts `value`. Returns false if it was already present.
    pub fn insert(&mut self, value: u32) -> bool {
        match self.0.binary_search(&value) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, value);
                true
            }
        }
    }

    /// Removes `value`. Returns false if it was absent.
    pub fn remove(&mut self, value: u32) -> bool {
        match self.0.binary_search(&value) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Folds a full-domain selection onto the empty (wildcard) selection.
    pub fn normalized(mut self, unit: &UnitSpec) -> Self {
        if self.is_full(unit) {
            self.0.clear();
        }
        self
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access and conversions
// ─────────────────────────────────────────────────────────────────────

impl Deref for SelectionSet {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl AsRef<[u32]> for SelectionSet {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for SelectionSet {
    fn from(vec: Vec<u32>) -> Self {
        Self::from_values(vec)
    }
}

impl From<SelectionSet> for Vec<u32> {
    fn from(set: SelectionSet) -> Self {
        set.0
    }
}

impl<const N: usize> From<[u32; N]> for SelectionSet {
    fn from(values: [u32; N]) -> Self {
        Self::from_values(values)
    }
}

impl FromIterator<u32> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl IntoIterator for SelectionSet {
    type Item = u32;
    type IntoIter = std::vec::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}
