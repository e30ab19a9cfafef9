use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_animation::{Easing, Tween};

fn bench_easing_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");
    for (name, easing) in [
        ("linear", Easing::Linear),
        ("ease_out_cubic", Easing::EaseOutCubic),
        ("ease_in_out_cubic", Easing::EaseInOutCubic),
        ("ease_out_bounce", Easing::EaseOutBounce),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..=100 {
                    acc += easing.apply(black_box(i as f64 / 100.0));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_tween_sampling(c: &mut Criterion) {
    let tween = Tween::new(0.0, 1_000_000.0, 1000.0, Easing::EaseOutCubic).unwrap();
    c.bench_function("tween_value_at", |b| {
        b.iter(|| tween.value_at(black_box(633.0)))
    });
}

criterion_group!(benches, bench_easing_curves, bench_tween_sampling);
criterion_main!(benches);
