//! Itemset and transaction data structures

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Thread-safety bound picked up by [`Item`] when the `parallel` feature
/// is enabled; otherwise empty. Implemented automatically.
#[cfg(feature = "parallel")]
pub trait MaybeParallel: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync> MaybeParallel for T {}

/// Thread-safety bound picked up by [`Item`] when the `parallel` feature
/// is enabled; otherwise empty. Implemented automatically.
#[cfg(not(feature = "parallel"))]
pub trait MaybeParallel {}
#[cfg(not(feature = "parallel"))]
impl<T> MaybeParallel for T {}

/// Marker trait for values usable as items.
///
/// Items must be hashable (for transaction membership tests), equality
/// comparable (for deduplication by value), and orderable (the candidate
/// join compares itemsets in a canonical sorted order). Implemented
/// automatically for any qualifying type.
pub trait Item: Clone + Eq + Ord + Hash + MaybeParallel {}

impl<T: Clone + Eq + Ord + Hash + MaybeParallel> Item for T {}

/// A single transaction: a finite collection of distinct items.
///
/// Order is irrelevant; duplicate transactions in a dataset are each
/// counted independently.
pub type Transaction<I> = HashSet<I>;

/// A set of unique items, compared and deduplicated by value.
///
/// Backed by a `BTreeSet`, so iteration always yields items in their
/// canonical (sorted) order. The candidate generator relies on this when
/// comparing join prefixes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itemset<I: Item> {
    items: BTreeSet<I>,
}

impl<I: Item> Itemset<I> {
    /// Create an itemset from anything yielding items; duplicates collapse
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        Itemset {
            items: items.into_iter().collect(),
        }
    }

    /// Create a size-1 itemset
    pub fn singleton(item: I) -> Self {
        let mut items = BTreeSet::new();
        items.insert(item);
        Itemset { items }
    }

    /// Number of items (the itemset's level k)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the itemset holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in canonical (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.items.iter()
    }

    /// Membership test for a single item
    pub fn contains(&self, item: &I) -> bool {
        self.items.contains(item)
    }

    /// True if every item of `self` appears in the transaction
    pub fn contained_in(&self, transaction: &Transaction<I>) -> bool {
        self.items.iter().all(|item| transaction.contains(item))
    }

    /// True if `self` is a subset of `other`
    pub fn is_subset(&self, other: &Itemset<I>) -> bool {
        self.items.is_subset(&other.items)
    }

    /// Union of two itemsets
    pub fn union(&self, other: &Itemset<I>) -> Itemset<I> {
        Itemset {
            items: self.items.union(&other.items).cloned().collect(),
        }
    }

    /// Items of `self` not present in `other`
    pub fn difference(&self, other: &Itemset<I>) -> Itemset<I> {
        Itemset {
            items: self.items.difference(&other.items).cloned().collect(),
        }
    }
}

impl<I: Item> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Itemset::new(iter)
    }
}

impl<I: Item + fmt::Debug> fmt::Debug for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<I: Item + fmt::Display> fmt::Display for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}
