use std::{hint::black_box, time::Duration};

use better_stream::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn pipeline(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let nums: Vec<_> = std::iter::repeat_with(|| rng.random_range(-1_000..=1_000))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);
    let mut group = criterion.benchmark_group("filter_map_limit");
    bench_fn!(group.iter_filter_map_limit(&nums));
    bench_fn!(group.pipeline_filter_map_limit(&nums));
    group.finish();

    let mut nums = nums;
    // A single even number, late.
    for num in &mut nums {
        *num |= 1;
    }
    nums[400_000] = 0;
    let mut group = criterion.benchmark_group("any_even_found_late");
    bench_fn!(group.iter_any_even(&nums));
    bench_fn!(group.pipeline_any_even(&nums));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(30))
        .sample_size(300);
    targets = pipeline
}
criterion_main!(benches);

fn iter_filter_map_limit(nums: &[i32]) -> Vec<i64> {
    nums.iter()
        .filter(|&&num| num > 0)
        .map(|&num| i64::from(num) * 3)
        .take(100_000)
        .collect()
}

// Every step rebuilds a `Vec`, unlike the fused iterator above.
fn pipeline_filter_map_limit(nums: &[i32]) -> Option<Vec<i64>> {
    Pipeline::of(nums.to_vec())
        .filter(|&num| num > 0)
        .and_then(|pipeline| pipeline.map(|num| i64::from(num) * 3))
        .and_then(|pipeline| pipeline.limit(100_000))
        .map(|pipeline| pipeline.collect(Collector::to_list()))
        .ok()
}

fn iter_any_even(nums: &[i32]) -> bool {
    nums.iter().any(|&num| num % 2 == 0)
}

fn pipeline_any_even(nums: &[i32]) -> bool {
    Pipeline::of(nums.to_vec()).any_match(|&num| num % 2 == 0)
}
