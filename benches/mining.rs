use criterion::{criterion_group, criterion_main, Criterion};
use apriori::mining::{derive_rules, mine};
use apriori::utils::random_transactions;

fn bench_mine(c: &mut Criterion) {
    let transactions = random_transactions(500, 20, 8);

    c.bench_function("mine_500x20", |b| {
        b.iter(|| mine(&transactions, 0.05, None).unwrap())
    });
}

fn bench_derive_rules(c: &mut Criterion) {
    let transactions = random_transactions(500, 20, 8);
    let frequent = mine(&transactions, 0.05, None).unwrap();

    c.bench_function("derive_rules_500x20", |b| {
        b.iter(|| derive_rules(&frequent, 0.5).unwrap())
    });
}

criterion_group!(benches, bench_mine, bench_derive_rules);
criterion_main!(benches);
