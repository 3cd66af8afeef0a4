//! Camera system for the animated background
//!
//! The camera is fully recomputed every frame: a slow Lissajous orbit of
//! elapsed time looks at the origin, and a scene tilt eases toward a
//! pointer-derived target independently of the animation phases.

use glam::{Mat4, Vec2, Vec3};

/// 3D perspective camera aimed at a look-at target
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera3D {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 30.0, 50.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 55.0f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 3000.0,
        }
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Get the combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Cinematic orbit: a fixed trigonometric path over elapsed time.
///
/// The camera floats around the origin on three decoupled sine tracks,
/// which never closes into an obvious loop.
#[derive(Debug, Clone, Copy)]
pub struct OrbitPath {
    pub rate: f32,
    pub radius_x: f32,
    pub radius_y: f32,
    pub radius_z: f32,
    pub lift: Vec3,
}

impl OrbitPath {
    pub fn position_at(&self, time: f32) -> Vec3 {
        let t = time * self.rate;
        Vec3::new(
            t.sin() * self.radius_x,
            (t * 0.7).cos() * self.radius_y,
            (t * 0.5).cos() * self.radius_z,
        ) + self.lift
    }
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            rate: 0.1,
            radius_x: 30.0,
            radius_y: 20.0,
            radius_z: 40.0,
            lift: Vec3::new(0.0, 10.0, 10.0),
        }
    }
}

/// Scene tilt driven by smoothed pointer position.
///
/// `smoothed += (pointer * gain - smoothed) * dt` each frame, so the tilt
/// trails the pointer instead of snapping to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTilt {
    pointer: Vec2,
    smoothed: Vec2,
}

impl PointerTilt {
    const GAIN: Vec2 = Vec2::new(0.5, 0.3);
    const SCALE: f32 = 0.2;

    /// Record the pointer position in normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc;
    }

    pub fn update(&mut self, dt: f32) {
        self.smoothed += (self.pointer * Self::GAIN - self.smoothed) * dt;
    }

    /// Tilt angles (around x then y) to apply to the whole scene.
    pub fn angles(&self) -> Vec2 {
        self.smoothed * Self::SCALE
    }

    /// Rotation matrix for the scene root.
    pub fn scene_rotation(&self) -> Mat4 {
        let a = self.angles();
        Mat4::from_rotation_y(a.x) * Mat4::from_rotation_x(a.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_eases_toward_pointer() {
        let mut tilt = PointerTilt::default();
        tilt.set_pointer(Vec2::new(1.0, 1.0));

        let mut last = 0.0;
        for _ in 0..120 {
            tilt.update(1.0 / 60.0);
            let mag = tilt.angles().length();
            assert!(mag >= last, "tilt should approach the target monotonically");
            last = mag;
        }
        // Never overshoots the pointer-derived target.
        let target = Vec2::new(1.0, 1.0) * PointerTilt::GAIN * PointerTilt::SCALE;
        assert!(tilt.angles().length() <= target.length() + 1e-6);
    }

    #[test]
    fn orbit_path_is_bounded() {
        let path = OrbitPath::default();
        for i in 0..1000 {
            let p = path.position_at(i as f32 * 0.31);
            assert!(p.length() < 120.0);
        }
    }
}
