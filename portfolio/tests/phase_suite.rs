//! Behavior tests for the phase cycle and per-phase particle dynamics.
//! All use a scaled-down particle budget so debug runs stay fast.

use glam::Vec3;
use portfolio::simulation::{MeshVisuals, Phase, SimConfig, Simulation};

const DT: f32 = 1.0 / 60.0;

fn small_config() -> SimConfig {
    SimConfig {
        star_count: 300,
        backdrop_count: 100,
        jet_count: 50,
        ..SimConfig::default()
    }
}

fn small_sim() -> Simulation {
    Simulation::new(small_config())
}

/// Run until the phase changes, returning the phase time just before the
/// transition fired.
fn run_to_transition(sim: &mut Simulation) -> f32 {
    let start = sim.phase;
    let mut last = 0.0;
    for _ in 0..100_000 {
        last = sim.phase_time;
        sim.update(DT);
        if sim.phase != start {
            return last;
        }
    }
    panic!("phase {start:?} never transitioned");
}

#[test]
fn cycle_is_closed_and_ordered() {
    let order = [
        Phase::Galaxy,
        Phase::Collapse,
        Phase::Burst,
        Phase::Hole,
        Phase::Reform,
    ];
    for (i, phase) in order.iter().enumerate() {
        assert_eq!(phase.next(), order[(i + 1) % order.len()]);
        assert!(phase.duration() > 0.0);
    }
}

#[test]
fn transitions_fire_within_one_frame_of_duration() {
    let mut sim = small_sim();
    for expected in [
        Phase::Collapse,
        Phase::Burst,
        Phase::Hole,
        Phase::Reform,
        Phase::Galaxy,
    ] {
        let before = sim.phase;
        let last = run_to_transition(&mut sim);
        assert_eq!(sim.phase, expected);
        assert_eq!(sim.phase_time, 0.0);
        // phase_time was still within budget on the frame before the switch
        assert!(
            last <= before.duration() + 1e-4,
            "{before:?} overshot: {last} > {}",
            before.duration()
        );
    }
}

#[test]
fn burst_entry_assigns_speeds_in_configured_range() {
    let mut sim = small_sim();
    // Force the Collapse -> Burst transition on the next update
    sim.phase = Phase::Collapse;
    sim.phase_time = Phase::Collapse.duration() + 1.0;
    sim.update(DT);

    assert_eq!(sim.phase, Phase::Burst);
    assert!(sim.burst_primed);
    // Unit-vector normalization carries a little rounding, so the bounds
    // get a small slack
    let range = sim.config.burst_speed_min - 1e-3..=sim.config.burst_speed_max + 1e-3;
    for v in &sim.galaxy.velocities {
        let speed = v.length();
        assert!(range.contains(&speed), "burst speed {speed} out of range");
    }
    // Shockwave starts fresh
    assert!((sim.visuals.shock_scale - 1.0).abs() < 1e-5);
    assert!((sim.visuals.shock_opacity - 1.0).abs() < 1e-5);
}

#[test]
fn burst_drag_decays_speeds_monotonically() {
    let mut sim = small_sim();
    sim.phase = Phase::Burst;
    sim.update(DT);

    let mean_speed = |sim: &Simulation| {
        sim.galaxy.velocities.iter().map(|v| v.length()).sum::<f32>()
            / sim.galaxy.len() as f32
    };

    let mut previous = mean_speed(&sim);
    for _ in 0..30 {
        sim.update(DT);
        let current = mean_speed(&sim);
        assert!(current < previous, "speeds must decay under drag");
        previous = current;
    }
}

#[test]
fn shockwave_expands_fades_and_clears_on_exit() {
    let mut sim = small_sim();
    sim.phase = Phase::Burst;
    sim.update(DT);

    let early = (sim.visuals.shock_scale, sim.visuals.shock_opacity);
    for _ in 0..60 {
        sim.update(DT);
    }
    assert!(sim.visuals.shock_scale > early.0);
    assert!(sim.visuals.shock_opacity < early.1);

    // Leaving Burst zeroes the shock so no stale ring survives
    sim.phase_time = Phase::Burst.duration() + 1.0;
    sim.update(DT);
    assert_eq!(sim.phase, Phase::Hole);
    assert_eq!(sim.visuals.shock_opacity, 0.0);
}

#[test]
fn hole_consumes_particles_inside_capture_radius() {
    let mut sim = small_sim();
    sim.phase = Phase::Hole;
    sim.galaxy.positions[0] = Vec3::new(1.0, 0.5, 0.2);
    sim.galaxy.velocities[0] = Vec3::new(30.0, 0.0, 0.0);

    sim.update(DT);
    assert_eq!(sim.galaxy.positions[0], Vec3::ZERO);

    // Parked particles stay parked for the rest of the phase
    for _ in 0..30 {
        sim.update(DT);
    }
    assert_eq!(sim.galaxy.positions[0], Vec3::ZERO);
}

#[test]
fn hole_accretes_debris_outside_capture_radius() {
    let mut sim = small_sim();
    sim.phase = Phase::Hole;
    sim.galaxy.positions[0] = Vec3::new(20.0, 0.0, 0.0);
    sim.galaxy.velocities[0] = Vec3::ZERO;

    sim.update(DT);
    let p = sim.galaxy.positions[0];
    assert!(p != Vec3::new(20.0, 0.0, 0.0), "pull must move the particle");
    // Tangential component gives the infall a swirl
    assert!(p.z.abs() > 0.0);

    // Ember grading: red-dominant, no blue
    let c = sim.galaxy.colors[0];
    assert!(c.x >= c.y);
    assert_eq!(c.z, 0.0);
}

#[test]
fn hole_visuals_fade_in_to_their_targets() {
    let mut sim = small_sim();
    sim.phase = Phase::Hole;
    for _ in 0..240 {
        sim.update(DT);
    }

    assert!(sim.visuals.hole_scale > 0.95);
    assert!((sim.visuals.photon_opacity - 0.8).abs() < 1e-5);
    assert!((sim.visuals.jet_opacity - 0.6).abs() < 1e-5);
    for k in 0..3 {
        assert!(
            (sim.visuals.disk_opacity[k] - MeshVisuals::DISK_OPACITY_TARGETS[k]).abs() < 1e-5
        );
    }
    // Disks spin at distinct rates, fastest innermost
    assert!(sim.visuals.disk_angle[0] < sim.visuals.disk_angle[1]);
    assert!(sim.visuals.disk_angle[1] < sim.visuals.disk_angle[2]);
}

#[test]
fn lensing_pushes_aligned_backdrop_stars_outward() {
    let mut sim = small_sim();
    sim.phase = Phase::Hole;
    // Behind the hole and near the view axis: gets lensed
    sim.backdrop.base_positions[0] = Vec3::new(5.0, 0.0, 500.0);
    sim.backdrop.positions[0] = sim.backdrop.base_positions[0];
    // Far off-axis: untouched
    sim.backdrop.base_positions[1] = Vec3::new(300.0, 0.0, 500.0);
    sim.backdrop.positions[1] = sim.backdrop.base_positions[1];

    sim.update(DT);

    let lensed = sim.backdrop.positions[0];
    let expected_push = (sim.config.lens_radius - 5.0) * sim.config.lens_strength;
    assert!((lensed.x - (5.0 + expected_push)).abs() < 1e-3);
    assert_eq!(lensed.z, 500.0);

    let untouched = sim.backdrop.positions[1];
    assert!((untouched.x - 300.0).abs() < 1e-3);
}

#[test]
fn reform_restores_backdrop_and_spiral() {
    let mut sim = small_sim();
    sim.phase = Phase::Hole;
    for _ in 0..120 {
        sim.update(DT);
    }

    sim.phase = Phase::Reform;
    sim.phase_time = 0.0;
    for _ in 0..600 {
        sim.update(DT);
    }

    // Backdrop has relaxed to its base positions
    for i in 0..sim.backdrop.positions.len() {
        let d = (sim.backdrop.positions[i] - sim.backdrop.base_positions[i]).length();
        assert!(d < 1.0, "backdrop star {i} still displaced by {d}");
    }

    // Spiral particles are close to home (the Galaxy wave adds a small
    // vertical drift, so the tolerance is loose)
    for i in 0..sim.galaxy.len() {
        let d = (sim.galaxy.positions[i] - sim.galaxy.homes[i]).length();
        assert!(d < 1.0, "galaxy star {i} still displaced by {d}");
    }

    // Hole-phase visuals have faded out
    assert!(sim.visuals.photon_opacity < 1e-3);
    assert!(sim.visuals.jet_opacity < 1e-3);
    assert!(sim.visuals.disk_opacity.iter().all(|o| *o < 1e-3));
}

#[test]
fn jets_stay_within_extent_and_respawn() {
    let mut sim = small_sim();
    sim.phase = Phase::Hole;
    for _ in 0..600 {
        sim.update(DT);
        for (i, p) in sim.jets.positions.iter().enumerate() {
            assert!(
                p.y.abs() <= sim.config.jet_extent + 50.0 * DT + 1e-3,
                "jet {i} escaped to {}",
                p.y
            );
        }
    }
    // After ten seconds of Hole time every jet has launched
    assert!(sim.jets.positions.iter().all(|p| p.y != 0.0));
}

#[test]
fn large_frame_gaps_are_clamped() {
    let mut sim = small_sim();
    sim.update(10.0);
    assert!(sim.phase_time <= 0.05 + 1e-6);
    assert_eq!(sim.phase, Phase::Galaxy);
}

#[test]
fn spawn_respects_configured_counts() {
    let cfg = small_config();
    let sim = Simulation::new(cfg.clone());
    assert_eq!(sim.galaxy.len(), cfg.star_count);
    assert_eq!(sim.galaxy.homes.len(), cfg.star_count);
    assert_eq!(sim.backdrop.positions.len(), cfg.backdrop_count);
    assert_eq!(sim.jets.positions.len(), cfg.jet_count);

    // Spiral stays inside a loose bound of the configured radius
    for p in &sim.galaxy.homes {
        assert!(p.length() < cfg.galaxy_radius * 1.3);
    }
}
