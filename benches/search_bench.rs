use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textscan::harness::{Algorithm, MISSING_PATTERN};
use textscan::{binary_search, boyer_moore_search, kmp_search, rabin_karp_search};

fn generate_text(size: usize) -> Vec<u8> {
    let words = [
        "the ", "quick ", "brown ", "fox ", "jumps ", "over ", "lazy ", "dog ",
        "pattern ", "window ", "prefix ", "suffix ", "shift ", "hash ", "probe ",
        "table ", "match ", "search ", "offset ", "scan ",
    ];
    let mut text = Vec::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        let word = words[i % words.len()].as_bytes();
        text.extend_from_slice(word);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_search_hit(c: &mut Criterion) {
    let text = generate_text(100_000);
    let mut group = c.benchmark_group("search_hit");

    for pattern in ["fox", "prefix suffix shift", "the quick brown fox jumps"] {
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), pattern),
                pattern.as_bytes(),
                |b, pat| b.iter(|| algorithm.search(black_box(&text), black_box(pat))),
            );
        }
    }
    group.finish();
}

fn bench_search_miss(c: &mut Criterion) {
    let text = generate_text(100_000);
    let mut group = c.benchmark_group("search_miss");

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.search(black_box(&text), black_box(MISSING_PATTERN)))
        });
    }
    group.finish();
}

fn bench_direct_calls(c: &mut Criterion) {
    // Same searches without the enum dispatch, as library callers see them
    let text = generate_text(100_000);

    c.bench_function("kmp_direct", |b| {
        b.iter(|| kmp_search(black_box(&text), black_box(b"lazy dog")))
    });
    c.bench_function("rabin_karp_direct", |b| {
        b.iter(|| rabin_karp_search(black_box(&text), black_box(b"lazy dog")))
    });
    c.bench_function("boyer_moore_direct", |b| {
        b.iter(|| boyer_moore_search(black_box(&text), black_box(b"lazy dog")))
    });
}

fn bench_binary_search(c: &mut Criterion) {
    let values: Vec<f64> = (0..100_000).map(|i| i as f64 * 1.5).collect();

    c.bench_function("binary_search_hit", |b| {
        b.iter(|| binary_search(black_box(&values), black_box(75_000.0)))
    });
    c.bench_function("binary_search_upper_bound", |b| {
        b.iter(|| binary_search(black_box(&values), black_box(75_000.25)))
    });
}

criterion_group!(
    benches,
    bench_search_hit,
    bench_search_miss,
    bench_direct_calls,
    bench_binary_search,
);
criterion_main!(benches);
