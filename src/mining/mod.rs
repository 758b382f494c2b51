//! Core Apriori mining pipeline

mod candidates;
mod itemset;
mod rules;
mod search;
mod support;

pub use candidates::generate_candidates;
pub use itemset::{Item, Itemset, MaybeParallel, Transaction};
pub use rules::{derive_rules, AssociationRule};
pub use search::{mine, FrequentItemsets};
pub use support::{evaluate_support, SupportTable};
