use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use rand::{rngs::StdRng, SeedableRng};
use threshold_elgamal::{elgamal, threshold, Group};

fn benchmark_generate_shares(c: &mut Criterion) {
    let group = Group::by_bits(2048).unwrap();
    for (n, t) in [(3u32, 2u32), (5, 3), (10, 7)] {
        c.bench_function(&format!("{}/generate_shares n={} t={}", module_path!(), n, t), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(0),
                |mut rng| threshold::generate_shares(&mut rng, group, n, t).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
}

fn benchmark_encrypt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let group = Group::by_bits(2048).unwrap();
    let shares = threshold::generate_shares(&mut rng, group, 3, 3).unwrap();
    let key = threshold::combine_public_keys(shares.iter().map(|s| &s.public), &group.prime);
    let message = BigUint::from(859u32);
    c.bench_function(&format!("{}/encrypt bits=2048", module_path!()), |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(1),
            |mut rng| elgamal::encrypt(&mut rng, &message, group, &key).unwrap(),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn benchmark_partial_decrypt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let group = Group::by_bits(2048).unwrap();
    let shares = threshold::generate_shares(&mut rng, group, 3, 3).unwrap();
    let key = threshold::combine_public_keys(shares.iter().map(|s| &s.public), &group.prime);
    let message = BigUint::from(859u32);
    let ciphertext = elgamal::encrypt(&mut rng, &message, group, &key).unwrap();
    c.bench_function(&format!("{}/partial_decrypt bits=2048", module_path!()), |b| {
        b.iter(|| threshold::partial_decrypt(&ciphertext, &shares[0].private, &group.prime));
    });
}

criterion_group!(
    benches,
    benchmark_generate_shares,
    benchmark_encrypt,
    benchmark_partial_decrypt
);
criterion_main!(benches);
