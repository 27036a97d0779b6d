use physics::constraint::{relax, residual, DEFAULT_SOLVER_ITERATIONS};
use physics::Vec3;

const STARTS: [(Vec3, Vec3); 5] = [
    (Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
    (Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, -3.0, 0.0)),
    (Vec3::new(-1.5, 2.0, 0.0), Vec3::new(-1.4, 2.1, 0.0)),
    (Vec3::new(1.0, 1.0, 1.0), Vec3::new(-2.0, 5.0, 3.0)),
    (Vec3::new(0.3, -0.7, 0.0), Vec3::new(0.3, -0.7001, 0.0)),
];

#[test]
fn converges_within_default_iterations() {
    for rest_length in [0.5_f32, 1.0, 1.67, 3.0] {
        for (anchor, free_end) in STARTS {
            let relaxed = relax(anchor, free_end, rest_length, DEFAULT_SOLVER_ITERATIONS);
            let err = residual(anchor, relaxed, rest_length);
            assert!(
                err < 1e-5,
                "anchor={anchor:?} free_end={free_end:?} L={rest_length} residual={err}"
            );
        }
    }
}

#[test]
fn more_iterations_never_hurt() {
    for (anchor, free_end) in STARTS {
        let mut previous = residual(anchor, free_end, 1.67);
        for iterations in 1..=50 {
            let err = residual(anchor, relax(anchor, free_end, 1.67, iterations), 1.67);
            assert!(err <= previous + 1e-6, "{iterations}: {err} > {previous}");
            previous = err;
        }
        assert!(previous < 1e-5);
    }
}

#[test]
fn correction_is_along_the_stick() {
    let anchor = Vec3::new(1.0, 2.0, 0.0);
    let free_end = Vec3::new(4.0, 6.0, 0.0);
    let relaxed = relax(anchor, free_end, 1.0, 1);
    let before = (free_end - anchor).normalize();
    let after = (relaxed - anchor).normalize();
    assert!((before - after).length() < 1e-6);
    assert!((relaxed - Vec3::new(1.6, 2.8, 0.0)).length() < 1e-5);
}

#[test]
fn coincident_particles_never_produce_nan() {
    let p = Vec3::new(0.0, 3.0, 0.0);
    for iterations in [1, 50, 500] {
        let relaxed = relax(p, p, 1.67, iterations);
        assert!(relaxed.is_finite());
    }
}
