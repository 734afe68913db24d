use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ib_regex_builder::{AnchorMode, PatternBuilder};

fn date() -> PatternBuilder {
    let mut re = PatternBuilder::new();
    re.match_start()
        .capturing_group(PatternBuilder::new().digit().exactly(4))
        .concat('-')
        .capturing_group(PatternBuilder::new().digit().exactly(2))
        .concat('-')
        .capturing_group(PatternBuilder::new().digit().exactly(2))
        .match_end();
    re
}

pub fn criterion_benchmark(c: &mut Criterion) {
    assert_eq!(date().regex(), r"^(\d{4})-(\d{2})-(\d{2})$");
    c.bench_function("build_date", |b| b.iter(|| black_box(date())));

    let re = date();
    c.bench_function("regex", |b| b.iter(|| black_box(&re).regex()));
    c.bench_function("into_regex", |b| {
        b.iter(|| black_box(re.clone()).into_regex())
    });

    c.bench_function("concat_tuple", |b| {
        b.iter(|| {
            let mut re = PatternBuilder::new();
            re.concat(black_box(("a-z", 0, '_', "-9")));
            re
        })
    });

    c.bench_function("or_8", |b| {
        b.iter(|| {
            let mut re = PatternBuilder::new();
            re.or(black_box(["a", "b", "c", "d", "e", "f", "g", "h"]))
                .map(|re| re.as_str().len())
        })
    });

    c.bench_function("parse_strip", |b| {
        b.iter(|| {
            PatternBuilder::parse(black_box(r"^(\d{4})-(\d{2})-(\d{2})$"))
                .anchors(AnchorMode::Strip)
                .call()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
