use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trie_search::{NaiveScanner, PatternIndex};

const TEXT: &[u8] = b"asldjfasfoiausaslfjaksjiuqerjfqwcsncmanxzcl";
const PATTERN: &[u8] = b"zc";

fn generate_text(size: usize) -> Vec<u8> {
    let words = [
        "the ", "quick ", "brown ", "fox ", "jumps ", "over ", "lazy ", "dog ",
        "alice ", "bob ", "server ", "request ", "response ", "error ", "data ",
        "cache ", "index ", "search ", "query ", "result ",
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

/// Patterns that never occur in `generate_text` output (digits only appear here).
fn generate_patterns(count: usize) -> Vec<Vec<u8>> {
    (0..count).map(|i| format!("k{i}y").into_bytes()).collect()
}

fn bench_fixed_text(c: &mut Criterion) {
    let mut index = PatternIndex::new();
    index.insert(PATTERN).unwrap();

    let mut group = c.benchmark_group("fixed_text");
    group.bench_function("trie_search", |b| {
        b.iter(|| index.contains_substring(black_box(TEXT)))
    });
    group.bench_function("naive_scan", |b| {
        b.iter(|| NaiveScanner::contains(black_box(TEXT), black_box(PATTERN)))
    });
    group.finish();
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");

    for count in [10, 100, 1_000] {
        let patterns = generate_patterns(count);
        group.bench_with_input(
            BenchmarkId::new("patterns", count),
            &patterns,
            |b, patterns| {
                b.iter(|| PatternIndex::try_from_patterns(black_box(patterns)).unwrap())
            },
        );
    }
    group.finish();
}

fn bench_many_patterns(c: &mut Criterion) {
    let text = generate_text(10_000);
    let mut group = c.benchmark_group("many_patterns_miss");

    for count in [1, 10, 100] {
        let patterns = generate_patterns(count);
        let index = PatternIndex::try_from_patterns(&patterns).unwrap();

        group.bench_with_input(BenchmarkId::new("trie", count), &text, |b, text| {
            b.iter(|| index.contains_substring(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("naive", count), &text, |b, text| {
            b.iter(|| NaiveScanner::contains_any(black_box(text), &patterns))
        });
    }
    group.finish();
}

fn bench_find_iter(c: &mut Criterion) {
    let text = generate_text(10_000);
    let index = PatternIndex::try_from_patterns(["fox", "the quick", "server"]).unwrap();

    c.bench_function("count_matches", |b| {
        b.iter(|| index.count_matches(black_box(&text)))
    });

    c.bench_function("find_iter_first_10", |b| {
        b.iter(|| {
            let count = index.find_iter(black_box(&text)).take(10).count();
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_fixed_text,
    bench_build_index,
    bench_many_patterns,
    bench_find_iter,
);
criterion_main!(benches);
