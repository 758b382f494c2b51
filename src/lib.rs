//! # Apriori: frequent itemset mining and association rules
//!
//! This library implements the classic Apriori market-basket algorithm:
//! level-wise discovery of frequent itemsets in a transaction collection,
//! followed by derivation of association rules above a confidence threshold.
//!
//! ## Features
//!
//! - **Mining pipeline**: support evaluation, prefix-join candidate
//!   generation, level-wise search
//! - **Rule derivation**: adjacent-level association rules with confidence
//!   filtering
//! - **Generic items**: anything hashable, comparable, and orderable
//! - **Optional parallelism**: support counting with `rayon` behind the
//!   `parallel` feature
//!
//! ## Example
//!
//! ```
//! use apriori::prelude::*;
//!
//! let transactions: Vec<Transaction<u32>> = vec![
//!     [1, 3, 4].into_iter().collect(),
//!     [2, 3, 5].into_iter().collect(),
//!     [1, 2, 3, 5].into_iter().collect(),
//!     [2, 5].into_iter().collect(),
//! ];
//!
//! let frequent = mine(&transactions, 0.5, None).unwrap();
//! let rules = derive_rules(&frequent, 0.7).unwrap();
//! assert!(!rules.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// The mining pipeline: itemsets, support evaluation, candidate
/// generation, level-wise search, and rule derivation
pub mod mining;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use mining::{
    derive_rules, evaluate_support, generate_candidates, mine, AssociationRule,
    FrequentItemsets, Item, Itemset, SupportTable, Transaction,
};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    /// A threshold or cap argument is outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The transaction collection is empty, so support is undefined
    #[error("Empty dataset: support requires at least one transaction")]
    EmptyDataset,

    /// IO error while saving or loading data
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, AprioriError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::mining::{
        derive_rules, evaluate_support, generate_candidates, mine, AssociationRule,
        FrequentItemsets, Item, Itemset, SupportTable, Transaction,
    };
    pub use crate::{AprioriError, Result};
}
