use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use physics::{PointerEvent, RigSim, Unproject, Vec3, ViewportBounds};

struct Flat;

impl Unproject for Flat {
    fn unproject(&self, ndc: Vec2) -> Vec3 {
        Vec3::new(ndc.x * 4.0, ndc.y * 3.0, 0.0)
    }
}

fn bench_tick(c: &mut Criterion) {
    let bounds = ViewportBounds::from_window(800, 600, 0.005);
    let mut sim = RigSim::default();
    c.bench_function("rig_tick", |b| {
        b.iter(|| black_box(sim.tick(black_box(1.0 / 60.0), &bounds)));
    });
}

fn bench_drag(c: &mut Criterion) {
    let bounds = ViewportBounds::from_window(800, 600, 0.005);
    let mut sim = RigSim::default();
    sim.handle_pointer(PointerEvent::Down(Vec2::new(0.0, 1.0)), &Flat);
    let mut t = 0.0_f32;
    c.bench_function("rig_drag_tick", |b| {
        b.iter(|| {
            t += 0.01;
            let ndc = Vec2::new(t.sin() * 0.5, 0.5);
            sim.handle_pointer(PointerEvent::Move(ndc), &Flat);
            black_box(sim.tick(1.0 / 60.0, &bounds))
        });
    });
}

criterion_group!(benches, bench_tick, bench_drag);
criterion_main!(benches);
