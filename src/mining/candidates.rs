//! Candidate generation via the canonical-prefix pairwise join

use std::collections::HashSet;

use crate::mining::{Item, Itemset};

/// Generate size-`k` candidate itemsets from the size-(k-1) frequent level.
///
/// Every unordered pair of distinct itemsets in `frequent_level` is
/// compared on the first k-2 items of its canonical (sorted) order; pairs
/// sharing that prefix differ in exactly one trailing item, so their union
/// is a size-`k` itemset and becomes a candidate. The prefix test keeps
/// each union from being produced by more than one pair.
///
/// Deliberately performs no subset pruning: a generated candidate is kept
/// even when one of its size-(k-1) subsets is not frequent, leaving the
/// support evaluator to reject it. Textbook Apriori prunes such candidates
/// up front; this implementation preserves the simpler join-only behavior.
pub fn generate_candidates<I: Item>(
    frequent_level: &HashSet<Itemset<I>>,
    k: usize,
) -> HashSet<Itemset<I>> {
    let level: Vec<&Itemset<I>> = frequent_level.iter().collect();
    let prefix_len = k.saturating_sub(2);
    let mut candidates = HashSet::new();

    for i in 0..level.len() {
        for j in (i + 1)..level.len() {
            let shared_prefix = level[i]
                .iter()
                .take(prefix_len)
                .eq(level[j].iter().take(prefix_len));

            if shared_prefix {
                candidates.insert(level[i].union(level[j]));
            }
        }
    }

    candidates
}
