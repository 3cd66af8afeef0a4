//! Phase-driven galaxy / black hole particle simulation
//!
//! Drives the animated hero background through a fixed cycle of five
//! time-boxed phases: a drifting spiral galaxy collapses into a white-hot
//! core, bursts outward behind a shockwave, settles into a black hole with
//! an accretion disk, lensed background stars and polar jets, then reforms
//! back into the spiral. All particle buffers are allocated once and
//! mutated in place; consumed particles are parked at the origin rather
//! than removed.

use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// One stage of the looping visual sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Galaxy,
    Collapse,
    Burst,
    Hole,
    Reform,
}

impl Phase {
    /// Fixed duration of the phase in seconds
    pub fn duration(self) -> f32 {
        match self {
            Phase::Galaxy => 15.0,
            Phase::Collapse => 3.5,
            Phase::Burst => 4.0,
            Phase::Hole => 10.0,
            Phase::Reform => 4.0,
        }
    }

    /// Successor in the fixed cycle
    pub fn next(self) -> Phase {
        match self {
            Phase::Galaxy => Phase::Collapse,
            Phase::Collapse => Phase::Burst,
            Phase::Burst => Phase::Hole,
            Phase::Hole => Phase::Reform,
            Phase::Reform => Phase::Galaxy,
        }
    }
}

// Galaxy palette: core white, inner cyan, outer purple, star-forming pink.
pub const COLOR_CORE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const COLOR_INNER: Vec3 = Vec3::new(0.404, 0.909, 0.976);
pub const COLOR_OUTER: Vec3 = Vec3::new(0.576, 0.200, 0.918);
pub const COLOR_NEBULA: Vec3 = Vec3::new(0.957, 0.447, 0.714);

/// Visual tuning constants. These are look parameters, not a physical
/// model; thresholds like the lens and capture radii were chosen by eye.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub star_count: usize,
    pub backdrop_count: usize,
    pub jet_count: usize,
    pub galaxy_radius: f32,
    pub arm_count: usize,
    /// Radius of the event horizon sphere
    pub hole_radius: f32,
    /// Burst speeds are sampled uniformly from this range
    pub burst_speed_min: f32,
    pub burst_speed_max: f32,
    /// Exponential velocity decay during the burst (per second)
    pub burst_drag_rate: f32,
    /// Seconds after the burst before colors start cooling
    pub cooling_delay: f32,
    /// Exponential decay of green/blue channels once cooling (per second)
    pub cooling_rate: f32,
    /// Backdrop stars closer than this (cylindrical) get lensed outward
    pub lens_radius: f32,
    /// ... but only when farther than this along the view axis
    pub lens_depth: f32,
    pub lens_strength: f32,
    /// Galaxy particles inside this radius are consumed by the hole
    pub capture_radius: f32,
    /// Inverse-square pull strength of the accretion flow
    pub accretion_strength: f32,
    pub accretion_drag_rate: f32,
    /// Jets respawn near the origin once they travel this far
    pub jet_extent: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            star_count: 20_000,
            backdrop_count: 5_000,
            jet_count: 2_000,
            galaxy_radius: 70.0,
            arm_count: 3,
            hole_radius: 4.0,
            burst_speed_min: 60.0,
            burst_speed_max: 160.0,
            burst_drag_rate: 5.0,
            cooling_delay: 0.5,
            cooling_rate: 6.0,
            lens_radius: 15.0,
            lens_depth: 10.0,
            lens_strength: 0.5,
            capture_radius: 4.5,
            accretion_strength: 80.0,
            accretion_drag_rate: 3.0,
            jet_extent: 40.0,
        }
    }
}

/// The main spiral-galaxy point set: dense parallel arrays, fixed length
#[derive(Debug, Clone)]
pub struct GalaxyField {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
    /// Spiral-formation positions the Reform phase eases back toward
    pub homes: Vec<Vec3>,
    pub home_colors: Vec<Vec3>,
}

impl GalaxyField {
    fn spawn(config: &SimConfig) -> Self {
        let mut rng = rand::thread_rng();
        let n = config.star_count;

        let mut positions = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        let mut sizes = Vec::with_capacity(n);

        for i in 0..n {
            // Logarithmic-ish spiral arms, denser toward the core
            let r = rng.gen::<f32>().powf(1.5) * config.galaxy_radius;
            let spin = r * 0.5;
            let arm = (i % config.arm_count) as f32 * (TAU / config.arm_count as f32);

            let scatter = Vec3::new(
                cubed_scatter(&mut rng) * (2.0 + r * 0.15),
                cubed_scatter(&mut rng) * (1.0 + r * 0.1) * 0.5,
                cubed_scatter(&mut rng) * (2.0 + r * 0.15),
            );

            let pos = Vec3::new((arm + spin).cos() * r, 0.0, (arm + spin).sin() * r) + scatter;

            let nebula = r > 15.0 && rng.gen::<f32>() < 0.05;
            let size = if r < 5.0 {
                0.6
            } else if nebula {
                rng.gen::<f32>() * 2.0 + 1.0
            } else {
                rng.gen::<f32>() * 0.8 + 0.2
            };

            positions.push(pos);
            sizes.push(size);
            colors.push(spiral_color(r, nebula, config.galaxy_radius));
        }

        Self {
            homes: positions.clone(),
            home_colors: colors.clone(),
            positions,
            velocities: vec![Vec3::ZERO; n],
            colors,
            sizes,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Distant starfield with remembered base positions for lensing restore
#[derive(Debug, Clone)]
pub struct Backdrop {
    pub positions: Vec<Vec3>,
    pub base_positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

impl Backdrop {
    fn spawn(config: &SimConfig) -> Self {
        let mut rng = rand::thread_rng();
        let n = config.backdrop_count;

        let mut positions = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);

        for _ in 0..n {
            let r = 400.0 + rng.gen::<f32>() * 600.0;
            positions.push(unit_sphere(&mut rng) * r);

            // Star temperatures: mostly white, some red giants and blue stars
            let roll = rng.gen::<f32>();
            colors.push(if roll > 0.9 {
                Vec3::new(1.0, 0.667, 0.667)
            } else if roll > 0.7 {
                Vec3::new(0.667, 0.667, 1.0)
            } else {
                Vec3::ONE
            });
        }

        Self {
            base_positions: positions.clone(),
            positions,
            colors,
        }
    }
}

/// Polar jet particles emitted from the hole along the y axis
#[derive(Debug, Clone)]
pub struct JetField {
    pub positions: Vec<Vec3>,
    pub speeds: Vec<f32>,
}

impl JetField {
    fn spawn(config: &SimConfig) -> Self {
        let mut rng = rand::thread_rng();
        let n = config.jet_count;
        Self {
            // Parked at the origin; the Hole phase respawns them on demand
            positions: vec![Vec3::ZERO; n],
            speeds: (0..n).map(|_| rng.gen::<f32>() * 2.0 + 1.0).collect(),
        }
    }
}

/// Opacity / scale / spin state of the single-mesh scene objects
#[derive(Debug, Clone)]
pub struct MeshVisuals {
    pub hole_scale: f32,
    pub photon_opacity: f32,
    pub jet_opacity: f32,
    pub disk_opacity: [f32; 3],
    pub disk_angle: [f32; 3],
    pub shock_scale: f32,
    pub shock_opacity: f32,
    /// Spin of the whole galaxy point set around y
    pub galaxy_angle: f32,
}

impl MeshVisuals {
    pub const DISK_OPACITY_TARGETS: [f32; 3] = [0.8, 0.5, 0.2];
    pub const DISK_SPIN_RATES: [f32; 3] = [5.0, 3.0, 1.5];

    fn new() -> Self {
        Self {
            hole_scale: 0.0,
            photon_opacity: 0.0,
            jet_opacity: 0.0,
            disk_opacity: [0.0; 3],
            disk_angle: [0.0; 3],
            shock_scale: 0.0,
            shock_opacity: 0.0,
            galaxy_angle: 0.0,
        }
    }
}

/// The whole animation state, owned by whoever mounts the effect and fed
/// a delta time once per frame. No ambient globals.
pub struct Simulation {
    pub config: SimConfig,
    pub phase: Phase,
    /// Elapsed time within the current phase, reset on every transition
    pub phase_time: f32,
    /// Continuous elapsed time since creation
    pub time: f32,
    /// One-shot guard: burst velocities assigned for the current cycle
    pub burst_primed: bool,
    pub galaxy: GalaxyField,
    pub backdrop: Backdrop,
    pub jets: JetField,
    pub visuals: MeshVisuals,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            galaxy: GalaxyField::spawn(&config),
            backdrop: Backdrop::spawn(&config),
            jets: JetField::spawn(&config),
            visuals: MeshVisuals::new(),
            phase: Phase::Galaxy,
            phase_time: 0.0,
            time: 0.0,
            burst_primed: false,
            config,
        }
    }

    /// Advance the simulation by `dt` seconds: run the active phase's
    /// in-place mutation, then transition once its duration is exceeded.
    pub fn update(&mut self, dt: f32) {
        // Clamp pathological frame gaps (tab-switch style stalls)
        let dt = dt.min(0.05);
        self.time += dt;
        self.phase_time += dt;

        match self.phase {
            Phase::Galaxy => self.step_galaxy(dt),
            Phase::Collapse => self.step_collapse(dt),
            Phase::Burst => self.step_burst(dt),
            Phase::Hole => self.step_hole(dt),
            Phase::Reform => self.step_reform(dt),
        }

        if self.phase_time > self.phase.duration() {
            self.advance();
        }
    }

    /// Move to the next phase, resetting the counter and one-shot flags
    fn advance(&mut self) {
        if self.phase == Phase::Burst {
            self.visuals.shock_opacity = 0.0;
        }

        self.phase = self.phase.next();
        self.phase_time = 0.0;
        self.burst_primed = false;

        if self.phase == Phase::Burst {
            self.prime_burst();
        }
    }

    /// Gentle spiral drift and color settling toward the home shape
    fn step_galaxy(&mut self, dt: f32) {
        self.visuals.galaxy_angle -= 0.05 * dt;

        for i in 0..self.galaxy.len() {
            let home = self.galaxy.homes[i];
            let wave = (self.time + home.x * 0.05).sin() * 0.2;
            let target = home + Vec3::new(0.0, wave, 0.0);

            let p = self.galaxy.positions[i];
            self.galaxy.positions[i] = p + (target - p) * dt;
            let c = self.galaxy.colors[i];
            self.galaxy.colors[i] = c + (self.galaxy.home_colors[i] - c) * dt;
        }
    }

    /// Accelerating inward pull; colors heat toward white
    fn step_collapse(&mut self, dt: f32) {
        self.visuals.galaxy_angle -= (0.2 + self.phase_time) * dt;
        let pull = 1.0 + self.phase_time * 2.0;

        for i in 0..self.galaxy.len() {
            let p = self.galaxy.positions[i];
            self.galaxy.positions[i] = p - p * pull * dt;
            let c = self.galaxy.colors[i];
            self.galaxy.colors[i] = c + (Vec3::ONE - c) * 2.0 * dt;
        }
    }

    /// One-shot burst setup: every particle gets an outward velocity
    /// sampled uniformly over the sphere, and starts near the center.
    fn prime_burst(&mut self) {
        let mut rng = rand::thread_rng();

        for i in 0..self.galaxy.len() {
            let speed = rng.gen_range(self.config.burst_speed_min..self.config.burst_speed_max);
            self.galaxy.velocities[i] = unit_sphere(&mut rng) * speed;
            self.galaxy.positions[i] = Vec3::new(
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
            ) * 2.0;
        }

        self.visuals.shock_scale = 1.0;
        self.visuals.shock_opacity = 1.0;
        self.burst_primed = true;
    }

    /// Outward integration with exponential drag; cooling after a delay
    fn step_burst(&mut self, dt: f32) {
        if !self.burst_primed {
            self.prime_burst();
        }

        self.visuals.shock_scale = 1.0 + self.phase_time * 100.0;
        self.visuals.shock_opacity = (1.0 - self.phase_time * 0.5).max(0.0);

        let drag = (-self.config.burst_drag_rate * dt).exp();
        let cool = (-self.config.cooling_rate * dt).exp();
        let cooling = self.phase_time > self.config.cooling_delay;

        for i in 0..self.galaxy.len() {
            let vel = self.galaxy.velocities[i];
            self.galaxy.positions[i] += vel * dt;
            self.galaxy.velocities[i] = vel * drag;

            if cooling {
                // Green and blue decay first, leaving embers
                self.galaxy.colors[i].y *= cool;
                self.galaxy.colors[i].z *= cool;
            }
        }
    }

    /// Black hole: fade in the meshes, lens the backdrop, let debris
    /// spiral in, consume whatever crosses the capture radius, run jets.
    fn step_hole(&mut self, dt: f32) {
        let v = &mut self.visuals;
        v.hole_scale += (1.0 - v.hole_scale) * 2.0 * dt;
        v.photon_opacity = (v.photon_opacity + dt).min(0.8);
        v.jet_opacity = (v.jet_opacity + dt).min(0.6);
        for k in 0..3 {
            v.disk_opacity[k] = (v.disk_opacity[k] + dt).min(MeshVisuals::DISK_OPACITY_TARGETS[k]);
            v.disk_angle[k] -= MeshVisuals::DISK_SPIN_RATES[k] * dt;
        }

        self.lens_backdrop(dt);
        self.step_jets(dt);

        let cfg = &self.config;
        for i in 0..self.galaxy.positions.len() {
            let p = self.galaxy.positions[i];
            let d = p.length();

            if d > cfg.capture_radius {
                // Inward inverse-square pull with a tangential component,
                // so debris orbits as it falls
                let force = cfg.accretion_strength / (d * d);
                let mut vel = self.galaxy.velocities[i];
                vel.x += (-p.x - p.z) * force * dt;
                vel.y += -p.y * force * dt;
                vel.z += (-p.z + p.x) * force * dt;

                self.galaxy.positions[i] += vel * dt;
                self.galaxy.velocities[i] = vel * (-cfg.accretion_drag_rate * dt).exp();

                // Ember gradient fading toward the horizon
                let alpha = ((d - 5.0) / 5.0).clamp(0.0, 1.0);
                self.galaxy.colors[i] = Vec3::new(alpha, alpha * 0.3, 0.0);
            } else {
                // Consumed: parked at the origin sentinel
                self.galaxy.positions[i] = Vec3::ZERO;
            }
        }
    }

    /// Stylized lensing: backdrop stars near the view axis are pushed
    /// radially outward; stars outside the threshold relax back.
    fn lens_backdrop(&mut self, dt: f32) {
        let cfg = &self.config;
        for i in 0..self.backdrop.positions.len() {
            let base = self.backdrop.base_positions[i];
            let planar = Vec2::new(base.x, base.y);
            let d2 = planar.length();

            if d2 < cfg.lens_radius && base.z.abs() > cfg.lens_depth {
                let push = (cfg.lens_radius - d2) * cfg.lens_strength;
                let ang = base.y.atan2(base.x);
                self.backdrop.positions[i].x = base.x + ang.cos() * push;
                self.backdrop.positions[i].y = base.y + ang.sin() * push;
            } else {
                let p = self.backdrop.positions[i];
                self.backdrop.positions[i].x += (base.x - p.x) * 5.0 * dt;
                self.backdrop.positions[i].y += (base.y - p.y) * 5.0 * dt;
            }
        }
    }

    /// Respawn jets near the origin and march them out along the poles
    /// with a slight spiral perturbation.
    fn step_jets(&mut self, dt: f32) {
        let mut rng = rand::thread_rng();
        let extent = self.config.jet_extent;

        for i in 0..self.jets.positions.len() {
            let p = &mut self.jets.positions[i];
            if p.y.abs() > extent || p.y == 0.0 {
                *p = Vec3::new(
                    rng.gen::<f32>() - 0.5,
                    if rng.gen::<bool>() { 3.0 } else { -3.0 },
                    rng.gen::<f32>() - 0.5,
                );
                self.jets.speeds[i] = 20.0 + rng.gen::<f32>() * 20.0;
            }

            p.y += p.y.signum() * self.jets.speeds[i] * dt;
            let jitter = self.time * 20.0 + i as f32;
            p.x += jitter.cos() * 6.0 * dt;
            p.z += jitter.sin() * 6.0 * dt;
        }
    }

    /// Everything fades out; particles ease back to the spiral
    fn step_reform(&mut self, dt: f32) {
        let v = &mut self.visuals;
        v.hole_scale += (0.0 - v.hole_scale) * 2.0 * dt;
        v.photon_opacity = (v.photon_opacity - dt).max(0.0);
        v.jet_opacity = (v.jet_opacity - dt).max(0.0);
        for k in 0..3 {
            v.disk_opacity[k] = (v.disk_opacity[k] - dt).max(0.0);
        }

        for i in 0..self.backdrop.positions.len() {
            let base = self.backdrop.base_positions[i];
            let p = self.backdrop.positions[i];
            self.backdrop.positions[i].x += (base.x - p.x) * 2.0 * dt;
            self.backdrop.positions[i].y += (base.y - p.y) * 2.0 * dt;
        }

        for i in 0..self.galaxy.len() {
            let home = self.galaxy.homes[i];
            let p = self.galaxy.positions[i];
            self.galaxy.positions[i] = p + (home - p) * 2.0 * dt;
            let c = self.galaxy.colors[i];
            self.galaxy.colors[i] = c + (self.galaxy.home_colors[i] - c) * 2.0 * dt;
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

/// Color grading of the spiral by radius
fn spiral_color(r: f32, nebula: bool, galaxy_radius: f32) -> Vec3 {
    if r < 5.0 {
        COLOR_CORE.lerp(COLOR_INNER, r / 5.0)
    } else if nebula {
        COLOR_NEBULA
    } else {
        COLOR_INNER.lerp(COLOR_OUTER, (r - 5.0) / (galaxy_radius - 5.0))
    }
}

/// Heavily center-biased scatter in [-max, max]
fn cubed_scatter(rng: &mut impl Rng) -> f32 {
    let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
    rng.gen::<f32>().powi(3) * sign
}

/// Uniformly distributed direction on the unit sphere
fn unit_sphere(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}
