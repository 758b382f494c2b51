//! Basic example of mining frequent itemsets and association rules

use apriori::prelude::*;
use apriori::utils::timing::Timer;

fn main() {
    let data = vec![vec![1, 3, 4], vec![2, 3, 5], vec![1, 2, 3, 5], vec![2, 5]];
    let transactions: Vec<Transaction<u32>> = data
        .into_iter()
        .map(|items| items.into_iter().collect())
        .collect();

    let frequent = {
        let _timer = Timer::new("Mining");
        mine(&transactions, 0.5, None).expect("mining failed")
    };

    println!("{}", "=".repeat(50));
    println!("frequent \t\tsupport");
    println!("{}", "=".repeat(50));
    for level in frequent.levels() {
        for itemset in level {
            println!(
                "{} \t\t{}",
                itemset,
                frequent.support(itemset).expect("missing support")
            );
        }
    }

    let rules = derive_rules(&frequent, 0.7).expect("rule derivation failed");

    println!();
    println!("{}", "=".repeat(50));
    println!("antecedent consequent \t\tconf");
    println!("{}", "=".repeat(50));
    for rule in &rules {
        println!(
            "{}  =>  {}\t\t{}",
            rule.antecedent, rule.consequent, rule.confidence
        );
    }
}
