use glam::Vec2;
use physics::{
    BoundaryMonitor, Gravity, ParticleState, ParticleSystem, PointerEvent, RigConfig, RigSim,
    Unproject, Vec3, ViewportBounds, ANCHOR, FREE_END,
};

/// Orthographic stand-in: NDC maps linearly onto an 8 x 6 world window.
struct TestCamera;

impl Unproject for TestCamera {
    fn unproject(&self, ndc: Vec2) -> Vec3 {
        Vec3::new(ndc.x * 4.0, ndc.y * 3.0, 1.0)
    }
}

fn ndc_for(world: Vec3) -> Vec2 {
    Vec2::new(world.x / 4.0, world.y / 3.0)
}

fn bounds() -> ViewportBounds {
    ViewportBounds::from_window(800, 600, 0.005)
}

#[test]
fn end_to_end_single_tick() {
    let mut sim = RigSim::new(Vec3::new(0.0, 3.0, 0.0), 1.67, 50, Gravity::new(0.42));
    assert!((sim.particles.position(FREE_END).y - 1.33).abs() < 1e-6);

    // Integration alone would drop the free end by 0.042.
    let mut unrelaxed = ParticleSystem::new(Vec3::new(0.0, 3.0, 0.0), 1.67, 0);
    unrelaxed.step(0.1, 0.42);
    assert!((unrelaxed.position(FREE_END).y - (1.33 - 0.042)).abs() < 1e-6);

    // Relaxation pulls it back onto the stick.
    let pose = sim.tick(0.1, &bounds());
    assert!((pose.anchor.distance(pose.free_end) - 1.67).abs() < 1e-5);
    assert!((pose.free_end.y - 1.33).abs() < 1e-5);
    assert!(pose.rotation.abs() < 1e-5);
    assert!(!pose.frozen);
}

#[test]
fn grab_then_release() {
    let mut sim = RigSim::default();
    sim.particles.release_anchor();
    sim.particles.set_state(FREE_END, ParticleState::Frozen);

    let near_anchor = ndc_for(Vec3::new(0.5, 3.0, 0.0));
    assert!(sim.handle_pointer(PointerEvent::Down(near_anchor), &TestCamera));
    assert!(sim.controller.is_holding());
    assert_eq!(sim.particles.particle(ANCHOR).state, ParticleState::Pinned);
    assert_eq!(sim.particles.particle(FREE_END).state, ParticleState::Free);

    assert!(sim.handle_pointer(PointerEvent::Up, &TestCamera));
    assert!(!sim.controller.is_holding());
    assert!(sim.particles.particle(ANCHOR).state.is_simulated());
    assert_eq!(sim.particles.particle(FREE_END).state, ParticleState::Free);
}

#[test]
fn press_out_of_reach_is_ignored() {
    let mut sim = RigSim::default();
    let far = ndc_for(Vec3::new(3.0, -2.0, 0.0));
    assert!(!sim.handle_pointer(PointerEvent::Down(far), &TestCamera));
    assert!(!sim.controller.is_holding());
    assert!(!sim.handle_pointer(PointerEvent::Move(far), &TestCamera));
    assert_eq!(sim.particles.position(ANCHOR), Vec3::new(0.0, 3.0, 0.0));
}

#[test]
fn drag_moves_anchor_onto_working_plane() {
    let mut sim = RigSim::default();
    sim.handle_pointer(PointerEvent::Down(ndc_for(Vec3::new(0.0, 2.5, 0.0))), &TestCamera);
    let target = Vec3::new(-1.0, 1.5, 0.0);
    assert!(sim.handle_pointer(PointerEvent::Move(ndc_for(target)), &TestCamera));
    let anchor = sim.particles.position(ANCHOR);
    assert!((anchor - target).length() < 1e-6);
    assert_eq!(anchor.z, 0.0);

    let pose = sim.tick(1.0 / 60.0, &bounds());
    assert!((pose.anchor - target).length() < 1e-6);
}

#[test]
fn flung_rig_freezes_in_place() {
    let mut sim = RigSim::default();
    let bounds = bounds();
    sim.handle_pointer(PointerEvent::Down(ndc_for(Vec3::new(0.0, 3.0, 0.0))), &TestCamera);
    sim.tick(1.0 / 60.0, &bounds);
    // Yank the anchor hard to the right and let go.
    sim.handle_pointer(PointerEvent::Move(ndc_for(Vec3::new(1.0, 2.0, 0.0))), &TestCamera);
    sim.handle_pointer(PointerEvent::Up, &TestCamera);

    let mut frozen = false;
    for _ in 0..600 {
        if sim.tick(1.0 / 60.0, &bounds).frozen {
            frozen = true;
            break;
        }
    }
    assert!(frozen, "rig never left the viewport");
    assert!(!bounds.contains(sim.particles.midpoint()));

    let resting = sim.pose();
    for _ in 0..10 {
        let pose = sim.tick(1.0 / 60.0, &bounds);
        assert_eq!(pose.anchor, resting.anchor);
        assert_eq!(pose.free_end, resting.free_end);
    }
}

#[test]
fn rig_frozen_while_held_keeps_its_length_after_release() {
    let mut sim = RigSim::default();
    let bounds = bounds();
    let hilt = ndc_for(Vec3::new(0.0, 3.0, 0.0));
    assert!(sim.handle_pointer(PointerEvent::Down(hilt), &TestCamera));
    // Lift the hilt until the midpoint sits above the top edge.
    sim.handle_pointer(PointerEvent::Move(ndc_for(Vec3::new(0.0, 4.5, 0.0))), &TestCamera);
    for _ in 0..30 {
        sim.tick(1.0 / 60.0, &bounds);
    }
    assert!(sim.pose().frozen);
    assert!(sim.controller.is_holding());

    assert!(sim.handle_pointer(PointerEvent::Up, &TestCamera));
    for _ in 0..600 {
        sim.tick(1.0 / 60.0, &bounds);
        let info = sim.get_debug_info();
        assert!(
            (info.separation - info.rest_length).abs() < 1e-4,
            "stick stretched: {info:?}"
        );
    }
}

#[test]
fn pointer_rearms_frozen_rig() {
    let mut sim = RigSim::default();
    sim.particles.freeze();
    let press = ndc_for(Vec3::new(0.0, 2.8, 0.0));
    assert!(sim.handle_pointer(PointerEvent::Down(press), &TestCamera));
    assert!(!sim.particles.is_frozen());
    assert_eq!(sim.particles.particle(ANCHOR).state, ParticleState::Pinned);
    assert_eq!(sim.particles.particle(FREE_END).state, ParticleState::Free);
    assert!(!sim.tick(1.0 / 60.0, &bounds()).frozen);
}

#[test]
fn boundary_check_outside_each_edge() {
    let bounds = ViewportBounds { left: -1.0, right: 1.0, top: 1.0, bottom: -1.0 };
    let outside = [
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, -2.0, 0.0),
    ];
    for midpoint in outside {
        // Anchor placed so the stick's midpoint lands on `midpoint`.
        let mut rig = ParticleSystem::new(midpoint + Vec3::new(0.0, 0.25, 0.0), 0.5, 50);
        assert!((rig.midpoint() - midpoint).length() < 1e-6);
        assert!(BoundaryMonitor::check(&mut rig, &bounds));
        for index in [ANCHOR, FREE_END] {
            let state = rig.particle(index).state;
            assert_eq!(state, ParticleState::Frozen);
            assert!(state.is_locked());
            assert!(!state.is_simulated());
        }
    }
}

#[test]
fn boundary_check_inside_leaves_flags() {
    let bounds = ViewportBounds { left: -1.0, right: 1.0, top: 1.0, bottom: -1.0 };
    let mut rig = ParticleSystem::new(Vec3::new(0.0, 0.25, 0.0), 0.5, 50);
    assert!(!BoundaryMonitor::check(&mut rig, &bounds));
    assert_eq!(rig.particle(ANCHOR).state, ParticleState::Pinned);
    assert_eq!(rig.particle(FREE_END).state, ParticleState::Free);
}

#[test]
fn config_round_trips_through_sim() -> anyhow::Result<()> {
    let config = RigConfig::from_json_str(r#"{ "anchor": [1.0, 2.0, 0.0], "rest_length": 0.8 }"#)?;
    let sim = RigSim::from_config(&config)?;
    assert_eq!(sim.particles.position(ANCHOR), Vec3::new(1.0, 2.0, 0.0));
    assert!((sim.particles.separation() - 0.8).abs() < 1e-6);
    assert!((sim.gravity.get() - 0.42).abs() < 1e-6);
    Ok(())
}

#[test]
fn invalid_config_is_rejected() {
    let config = RigConfig { rest_length: -1.0, ..RigConfig::default() };
    assert!(RigSim::from_config(&config).is_err());
}
