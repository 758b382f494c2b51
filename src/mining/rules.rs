//! Association rule derivation from mined frequent itemsets

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mining::{FrequentItemsets, Item, Itemset};
use crate::{AprioriError, Result};

/// An association rule `antecedent => consequent` with its confidence.
///
/// Antecedent and consequent are disjoint; confidence is the support of
/// their union divided by the support of the antecedent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "I: Serialize",
    deserialize = "I: Deserialize<'de>"
))]
pub struct AssociationRule<I: Item> {
    /// The "if" side of the rule
    pub antecedent: Itemset<I>,
    /// The "then" side of the rule, disjoint from the antecedent
    pub consequent: Itemset<I>,
    /// Estimated conditional probability of the consequent given the
    /// antecedent, in [0,1]
    pub confidence: f64,
}

impl<I: Item + fmt::Display> fmt::Display for AssociationRule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} (confidence {:.3})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

/// Derive association rules from mined frequent itemsets.
///
/// For every adjacent pair of levels (k, k+1) and every itemset `a` of
/// level k that is a subset of an itemset `b` of level k+1, the rule
/// `a => b - a` is emitted when its confidence `support(b) / support(a)`
/// reaches `min_confidence`. Consequents therefore always hold exactly one
/// more item than was in the antecedent's level; no other antecedent and
/// consequent partitions are enumerated.
///
/// Levels are visited in ascending order and itemsets within a level in
/// their canonical sort order, so the output order is deterministic for a
/// given `FrequentItemsets` value.
///
/// # Errors
///
/// Fails with [`AprioriError::InvalidParameter`] when `min_confidence` is
/// outside [0, 1].
pub fn derive_rules<I: Item>(
    frequent: &FrequentItemsets<I>,
    min_confidence: f64,
) -> Result<Vec<AssociationRule<I>>> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(AprioriError::InvalidParameter(format!(
            "min_confidence must be in [0, 1], got {}",
            min_confidence
        )));
    }

    let levels = frequent.levels();
    let supports = frequent.supports();
    let mut rules = Vec::new();

    for window in levels.windows(2) {
        let mut antecedents: Vec<&Itemset<I>> = window[0].iter().collect();
        antecedents.sort();
        let mut extensions: Vec<&Itemset<I>> = window[1].iter().collect();
        extensions.sort();

        for &antecedent in &antecedents {
            for &extension in &extensions {
                if !antecedent.is_subset(extension) {
                    continue;
                }
                let confidence = supports[extension] / supports[antecedent];
                if confidence >= min_confidence {
                    rules.push(AssociationRule {
                        antecedent: antecedent.clone(),
                        consequent: extension.difference(antecedent),
                        confidence,
                    });
                }
            }
        }
    }

    Ok(rules)
}
