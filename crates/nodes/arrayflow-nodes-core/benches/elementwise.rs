use arrayflow_api_core::NdArray;
use arrayflow_nodes_core::eval::evaluate;
use arrayflow_nodes_core::types::OpKind;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    let left = NdArray::from_vec((0..4096).map(|i| i as f32).collect());
    let right = NdArray::from_vec((0..4096).map(|i| (i % 17) as f32 + 1.0).collect());

    c.bench_function("divide_4096", |b| {
        b.iter(|| {
            evaluate(
                OpKind::Divide,
                Some(black_box(&left)),
                Some(black_box(&right)),
                0.0,
                true,
            )
        })
    });

    c.bench_function("greater_scalar_4096", |b| {
        b.iter(|| evaluate(OpKind::Greater, Some(black_box(&left)), None, 2048.0, true))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
