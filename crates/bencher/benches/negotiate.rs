use bencher::negotiation_cases;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use micro_negotiate::parse_accept;
use std::hint::black_box;

fn benchmark_parse_accept(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("parse_accept");

    for case in negotiation_cases() {
        group.throughput(Throughput::Bytes(case.header().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter(|| black_box(parse_accept(black_box(case.header()))));
        });
    }

    group.finish();
}

fn benchmark_negotiate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("negotiate");

    for case in negotiation_cases() {
        assert!(case.is_expected(&case.negotiate()), "case {} negotiated an unexpected outcome", case.name());

        group.throughput(Throughput::Bytes(case.header().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter(|| black_box(case.negotiate().is_ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse_accept, benchmark_negotiate);
criterion_main!(benches);
