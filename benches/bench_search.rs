use criterion::{criterion_group, criterion_main, Criterion};
use ordfinder::{codec, Filters, Finder, LengthFilter, Pattern, SortBy};

const WORDFILE: &str = "wordlists/words-da.txt";

fn bench_search(c: &mut Criterion, name: &str, rack: &str, filters: Filters) {
    let finder = Finder::default()
        .with_dictionary_from_file(WORDFILE)
        .unwrap();

    c.bench_function(&format!("search.{}", name), |b| {
        b.iter(|| finder.search(rack, &filters).unwrap())
    });
}

fn bench_pattern(c: &mut Criterion) {
    let codec = codec::danish();
    let word = codec.encode("MANDAGSTRÆNING").unwrap();
    c.bench_function("pattern.compile", |b| {
        b.iter(|| Pattern::compile("m.n*g*ni.g", codec).unwrap())
    });
    let pattern = Pattern::compile("m*a*a*g", codec).unwrap();
    c.bench_function("pattern.is_match", |b| b.iter(|| pattern.is_match(&word)));
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_pattern(c);
    bench_search(c, "plain", "træon", Filters::new());
    bench_search(
        c,
        "pattern",
        "kte?e",
        Filters::new()
            .with_board_pattern("..a*")
            .with_length(LengthFilter::Range {
                min_length: 3,
                max_length: 6,
            }),
    );
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_search(c, "wildcards", "ma???", Filters::new());
    bench_search(
        c,
        "wildcards_sorted",
        "ab??ø??",
        Filters::new().with_sort(SortBy::Length),
    );
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default().sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
