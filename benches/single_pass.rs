use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use onepass::{
    cmp::{Max, Min},
    iter::Count,
    num::{Average, Sum},
    prelude::*,
};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn single_pass(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(-10_000..=10_000))
        .take(500_000)
        .collect();

    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("five_reductions");
    bench_fn!(group.hand_fold(&nums));
    bench_fn!(group.five_passes(&nums));
    bench_fn!(group.one_request(&nums));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(15))
        .sample_size(300);
    targets = single_pass
}
criterion_main!(benches);

type Stats = (usize, i64, i64, i64, f64);

fn hand_fold(nums: &[i64]) -> Stats {
    let (count, sum, min, max) = nums.iter().fold(
        (0, 0, i64::MAX, i64::MIN),
        |(count, sum, min, max), &num| (count + 1, sum + num, min.min(num), max.max(num)),
    );

    (count, sum, min, max, sum as f64 / count as f64)
}

// What a re-iterable source allows, and a single-use one doesn't.
fn five_passes(nums: &[i64]) -> Stats {
    let count = nums.iter().count();
    let sum = nums.iter().sum::<i64>();
    let min = nums.iter().copied().min().unwrap_or_default();
    let max = nums.iter().copied().max().unwrap_or_default();
    let average = nums.iter().map(|&num| num as f64).sum::<f64>() / count as f64;

    (count, sum, min, max, average)
}

fn one_request(nums: &[i64]) -> Stats {
    nums.iter()
        .copied()
        .request(Count::new())
        .and(Sum::<i64>::new())
        .and(Min::new())
        .and(Max::new())
        .and(Average::<i64>::new())
        .finalize()
        .unwrap_or_default()
}
