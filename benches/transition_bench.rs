use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vantage::camera::{CameraRig, OrbitControls};
use vantage::transition::{TransitionController, FIXED_DURATION};
use vantage::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn transition_tick_benchmark(c: &mut Criterion) {
    let mut rig = CameraRig::with_controls(
        Vec3::new(0.0, 0.0, 5.0),
        OrbitControls::new(Vec3::ZERO),
    );
    let mut controller = TransitionController::new();

    c.bench_function("transition_full_flight", |b| {
        b.iter(|| {
            let _ = controller
                .request_transition(
                    &rig,
                    black_box(Vec3::new(0.0, 1.0, 2.0)),
                    Vec3::ZERO,
                    2.5,
                    FIXED_DURATION,
                )
                .ok();
            while controller.is_animating() {
                let _ = black_box(
                    controller.tick(Duration::from_millis(16), &mut rig),
                );
            }
        })
    });
}

criterion_group!(benches, easing_benchmark, transition_tick_benchmark);
criterion_main!(benches);
