use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mnr_matcher::{PatternSet, compile};
use rand::{SeedableRng as _, rngs::StdRng};
use tests::{random_notation, sample_candidate};

const NOTATIONS: &[&str] = &[
    "*DD2B080ACV3",
    "G(*)(T,X,M)(*)B(*)",
    "AB/CD/EF123*(*)(C,D,E)F-9,10",
    "58PH*090-(A,C,E)--0**14",
    "C(A,C,D,E)36B34+TDR",
    "L85UF1V104/118F14",
    "CR33-30/36A+TDR+TXV",
];

pub fn compile_notations(c: &mut Criterion) {
    c.bench_function("compile notations", |b| {
        b.iter(|| {
            for raw in NOTATIONS {
                black_box(compile(black_box(raw))).unwrap();
            }
        });
    });
}

pub fn partial_match(c: &mut Criterion) {
    let pattern = compile("58PH*090-(A,C,E)--0**14").unwrap();
    c.bench_function("partial match", |b| {
        b.iter(|| black_box(pattern.matches(black_box("58PHX090C--0X"))));
    });
}

pub fn filter_1000_patterns(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1000);
    let mut set = PatternSet::new();
    while set.len() < 1000 {
        let raw = random_notation(&mut rng);
        _ = set.insert(&raw);
    }
    let candidates = set
        .iter()
        .take(20)
        .map(|pattern| sample_candidate(pattern, &mut rng))
        .collect::<Vec<_>>();

    c.bench_function("filter 1000 patterns", |b| {
        b.iter(|| {
            for candidate in &candidates {
                black_box(set.matching(candidate).count());
            }
        });
    });
}

criterion_group!(benches, compile_notations, partial_match, filter_1000_patterns);
criterion_main!(benches);
