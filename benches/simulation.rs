use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fleetpulse::sim::{simulate_security, simulate_service_metrics, simulate_system};

fn criterion_benchmark(c: &mut Criterion) {
    let now = Utc::now();

    c.bench_function("simulate_system", |b| {
        b.iter(|| black_box(simulate_system(black_box(now))))
    });

    c.bench_function("simulate_service_metrics", |b| {
        b.iter(|| black_box(simulate_service_metrics(black_box("svc-auth"), black_box(now))))
    });

    c.bench_function("simulate_security", |b| {
        b.iter(|| black_box(simulate_security(black_box(now))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
