//! Utility functions: JSON persistence helpers and dataset generation

use std::fs::File;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::mining::Transaction;
use crate::Result;

/// Save object to JSON file
pub fn save_json<T: Serialize>(obj: &T, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let obj = serde_json::from_str(&contents)?;
    Ok(obj)
}

/// Generate a random transaction collection for benchmarks and stress
/// tests: `count` transactions, each holding between 1 and `max_items`
/// distinct items drawn from `0..universe`.
pub fn random_transactions(count: usize, universe: u32, max_items: usize) -> Vec<Transaction<u32>> {
    use rand::Rng;

    if universe == 0 {
        panic!("Cannot draw items from an empty universe");
    }
    let max_items = max_items.min(universe as usize).max(1);

    let mut rng = rand::thread_rng();
    let mut transactions = Vec::with_capacity(count);

    for _ in 0..count {
        let len = rng.gen_range(1..=max_items);
        let mut transaction = Transaction::new();
        while transaction.len() < len {
            transaction.insert(rng.gen_range(0..universe));
        }
        transactions.push(transaction);
    }

    transactions
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Simple timer
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }

        /// Print elapsed time
        pub fn print(&self) {
            println!("{}: {:.3}s", self.name, self.elapsed());
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            self.print();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::{mine, FrequentItemsets};

    #[test]
    fn test_random_transactions_shape() {
        let transactions = random_transactions(20, 10, 5);
        assert_eq!(transactions.len(), 20);
        for transaction in &transactions {
            assert!((1..=5).contains(&transaction.len()));
            assert!(transaction.iter().all(|&item| item < 10));
        }
    }

    #[test]
    fn test_json_round_trip() {
        let transactions = random_transactions(15, 6, 4);
        let result = mine(&transactions, 0.1, None).unwrap();

        let path = std::env::temp_dir().join("apriori_utils_test.json");
        let path = path.to_str().unwrap();
        save_json(&result, path).unwrap();
        let back: FrequentItemsets<u32> = load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(result, back);
    }
}
