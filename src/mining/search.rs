//! Level-wise search: the generate/evaluate loop driving the pipeline

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::mining::support::validate_threshold;
use crate::mining::{evaluate_support, generate_candidates, Item, Itemset, SupportTable, Transaction};
use crate::{AprioriError, Result};

/// The accumulated output of a mining run: frequent itemsets grouped by
/// level, together with their supports.
///
/// Level index `k` (zero-based) holds the itemsets of cardinality `k + 1`.
/// Level 1 is always present, possibly empty; no further level is ever
/// empty. Both structures are immutable once returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "I: Serialize",
    deserialize = "I: Deserialize<'de>"
))]
pub struct FrequentItemsets<I: Item> {
    levels: Vec<HashSet<Itemset<I>>>,
    #[serde(with = "support_table_pairs")]
    supports: SupportTable<I>,
}

impl<I: Item> FrequentItemsets<I> {
    /// Frequent itemsets per level, smallest cardinality first
    pub fn levels(&self) -> &[HashSet<Itemset<I>>] {
        &self.levels
    }

    /// Supports of every frequent itemset across all levels
    pub fn supports(&self) -> &SupportTable<I> {
        &self.supports
    }

    /// Support of one itemset, if it was found frequent
    pub fn support(&self, itemset: &Itemset<I>) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    /// Total number of frequent itemsets across all levels
    pub fn count(&self) -> usize {
        self.levels.iter().map(HashSet::len).sum()
    }

    /// Consume into the raw `(levels, supports)` pair
    pub fn into_parts(self) -> (Vec<HashSet<Itemset<I>>>, SupportTable<I>) {
        (self.levels, self.supports)
    }
}

/// Mine frequent itemsets from a transaction collection.
///
/// Seeds level 1 with every distinct item appearing in the transactions,
/// then repeatedly joins the latest level into size-(k+1) candidates and
/// evaluates them, stopping when a level comes back empty or the optional
/// `max_len` cardinality cap is reached. Supports for every frequent
/// itemset are accumulated into a single table.
///
/// # Errors
///
/// Fails fast, before any counting, with [`AprioriError::InvalidParameter`]
/// when `min_support` is outside (0, 1] or `max_len` is `Some(0)`, and with
/// [`AprioriError::EmptyDataset`] when `transactions` is empty.
pub fn mine<I: Item>(
    transactions: &[Transaction<I>],
    min_support: f64,
    max_len: Option<usize>,
) -> Result<FrequentItemsets<I>> {
    validate_threshold(min_support)?;
    if max_len == Some(0) {
        return Err(AprioriError::InvalidParameter(
            "max_len must be a positive integer".to_string(),
        ));
    }
    if transactions.is_empty() {
        return Err(AprioriError::EmptyDataset);
    }
    let max_len = max_len.unwrap_or(usize::MAX);

    // Level-1 seed: one singleton candidate per distinct item
    let seed: HashSet<Itemset<I>> = transactions
        .iter()
        .flat_map(|transaction| transaction.iter().cloned().map(Itemset::singleton))
        .collect();

    let (level_one, mut supports) = evaluate_support(transactions, &seed, min_support)?;
    let mut levels = vec![level_one];

    let mut k = 2;
    while k <= max_len {
        let previous = &levels[levels.len() - 1];
        if previous.is_empty() {
            break;
        }

        let candidates = generate_candidates(previous, k);
        let (frequent, level_supports) = evaluate_support(transactions, &candidates, min_support)?;
        if frequent.is_empty() {
            break;
        }

        supports.extend(level_supports);
        levels.push(frequent);
        k += 1;
    }

    Ok(FrequentItemsets { levels, supports })
}

/// Serializes the support table as a sequence of (itemset, support) pairs,
/// since itemsets are not valid JSON map keys.
mod support_table_pairs {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use crate::mining::{Item, Itemset, SupportTable};

    pub fn serialize<I, S>(table: &SupportTable<I>, serializer: S) -> Result<S::Ok, S::Error>
    where
        I: Item + Serialize,
        S: Serializer,
    {
        let pairs: Vec<(&Itemset<I>, f64)> =
            table.iter().map(|(set, &support)| (set, support)).collect();
        pairs.serialize(serializer)
    }

    pub fn deserialize<'de, I, D>(deserializer: D) -> Result<SupportTable<I>, D::Error>
    where
        I: Item + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs: Vec<(Itemset<I>, f64)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
