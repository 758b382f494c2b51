//! Support evaluation: counting candidate itemsets against transactions

use std::collections::{HashMap, HashSet};

use crate::mining::{Item, Itemset, Transaction};
use crate::{AprioriError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mapping from itemset to its support, the fraction of transactions
/// containing the itemset as a subset. Values lie in [0,1]; only itemsets
/// that passed a support threshold are ever recorded.
pub type SupportTable<I> = HashMap<Itemset<I>, f64>;

/// Evaluate candidate itemsets against a transaction collection.
///
/// Counts, for every candidate, the number of transactions of which it is
/// a subset, and keeps the candidates whose support (count divided by the
/// total transaction count) reaches `min_support`. Returns the surviving
/// candidates together with a support table covering exactly those
/// survivors; rejected candidates leave no trace in the table.
///
/// An empty candidate set yields empty outputs. An empty transaction
/// collection is an error, since support would divide by zero.
///
/// With the `parallel` feature enabled, per-candidate counting runs on a
/// rayon pool; counts are independent, so the outputs are identical to
/// the sequential path.
pub fn evaluate_support<I: Item>(
    transactions: &[Transaction<I>],
    candidates: &HashSet<Itemset<I>>,
    min_support: f64,
) -> Result<(HashSet<Itemset<I>>, SupportTable<I>)> {
    validate_threshold(min_support)?;
    if transactions.is_empty() {
        return Err(AprioriError::EmptyDataset);
    }

    #[cfg(not(feature = "parallel"))]
    let counted: Vec<(Itemset<I>, usize)> = candidates
        .iter()
        .map(|candidate| (candidate.clone(), count_containing(transactions, candidate)))
        .collect();

    #[cfg(feature = "parallel")]
    let counted: Vec<(Itemset<I>, usize)> = candidates
        .par_iter()
        .map(|candidate| (candidate.clone(), count_containing(transactions, candidate)))
        .collect();

    Ok(filter_frequent(counted, transactions.len(), min_support))
}

pub(crate) fn validate_threshold(min_support: f64) -> Result<()> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(AprioriError::InvalidParameter(format!(
            "min_support must be in (0, 1], got {}",
            min_support
        )));
    }
    Ok(())
}

fn count_containing<I: Item>(transactions: &[Transaction<I>], candidate: &Itemset<I>) -> usize {
    transactions
        .iter()
        .filter(|transaction| candidate.contained_in(transaction))
        .count()
}

fn filter_frequent<I: Item>(
    counted: Vec<(Itemset<I>, usize)>,
    total: usize,
    min_support: f64,
) -> (HashSet<Itemset<I>>, SupportTable<I>) {
    let total = total as f64;
    let mut frequent = HashSet::new();
    let mut supports = SupportTable::new();

    for (candidate, count) in counted {
        let support = count as f64 / total;
        if support >= min_support {
            supports.insert(candidate.clone(), support);
            frequent.insert(candidate);
        }
    }

    (frequent, supports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transactions() -> Vec<Transaction<u32>> {
        vec![
            [1, 3, 4].into_iter().collect(),
            [2, 3, 5].into_iter().collect(),
            [1, 2, 3, 5].into_iter().collect(),
            [2, 5].into_iter().collect(),
        ]
    }

    #[test]
    fn test_singleton_supports() {
        let candidates: HashSet<_> = [1, 2, 3, 4, 5].map(Itemset::singleton).into_iter().collect();
        let (frequent, supports) = evaluate_support(&transactions(), &candidates, 0.5).unwrap();

        assert_eq!(frequent.len(), 4);
        assert_eq!(supports[&Itemset::singleton(1)], 0.5);
        assert_eq!(supports[&Itemset::singleton(2)], 0.75);
        assert_eq!(supports[&Itemset::singleton(3)], 0.75);
        assert_eq!(supports[&Itemset::singleton(5)], 0.75);
        // Item 4 appears once (support 0.25) and must leave no trace
        assert!(!frequent.contains(&Itemset::singleton(4)));
        assert!(!supports.contains_key(&Itemset::singleton(4)));
    }

    #[test]
    fn test_empty_candidates_yield_empty_outputs() {
        let candidates: HashSet<Itemset<u32>> = HashSet::new();
        let (frequent, supports) = evaluate_support(&transactions(), &candidates, 0.5).unwrap();
        assert!(frequent.is_empty());
        assert!(supports.is_empty());
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let candidates: HashSet<_> = [Itemset::singleton(1u32)].into_iter().collect();
        let err = evaluate_support(&[], &candidates, 0.5).unwrap_err();
        assert!(matches!(err, AprioriError::EmptyDataset));
    }

    #[test]
    fn test_threshold_bounds() {
        let candidates: HashSet<_> = [Itemset::singleton(1u32)].into_iter().collect();
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            let err = evaluate_support(&transactions(), &candidates, bad).unwrap_err();
            assert!(matches!(err, AprioriError::InvalidParameter(_)));
        }
        // 1.0 is a valid (inclusive) upper bound
        assert!(evaluate_support(&transactions(), &candidates, 1.0).is_ok());
    }

    #[test]
    fn test_empty_transactions_are_tolerated() {
        let mut txns = transactions();
        txns.push(Transaction::new());
        let candidates: HashSet<_> = [Itemset::singleton(2u32)].into_iter().collect();
        let (_, supports) = evaluate_support(&txns, &candidates, 0.1).unwrap();
        // 3 of 5 transactions contain {2}
        assert_eq!(supports[&Itemset::singleton(2)], 0.6);
    }
}
