//! Procedural sprite textures
//!
//! Small radial-gradient RGBA images used to draw each point as a soft
//! sprite. Pure functions: size in, pixel bytes out.

/// Default sprite resolution
pub const SPRITE_SIZE: u32 = 128;

/// Bright star: hard white core, soft halo, faint horizontal
/// diffraction streak for an anamorphic-flare look.
pub fn star_sprite(size: u32) -> Vec<u8> {
    render(size, |d, x, y| {
        let mut a = if d < 0.1 {
            1.0 - d * 2.0
        } else if d < 0.5 {
            0.8 - (d - 0.1) / 0.4 * 0.75
        } else {
            0.05 * (1.0 - (d - 0.5) / 0.5).max(0.0)
        };

        // Diffraction streak: one row through the center
        let half = size as f32 / 2.0;
        if (y as f32 - half).abs() < 1.0 && x != 0 {
            a = (a + 0.1).min(1.0);
        }

        [255, 255, 255, to_byte(a)]
    })
}

/// Smoky gas puff: very dim, wide falloff, slight blue cast at the edge.
pub fn gas_sprite(size: u32) -> Vec<u8> {
    render(size, |d, _, _| {
        let a = if d < 0.6 {
            0.1 - d / 0.6 * 0.08
        } else {
            0.02 * (1.0 - (d - 0.6) / 0.4).max(0.0)
        };
        let tint = if d < 0.6 { 255 } else { 220 };
        [255, tint, 255, to_byte(a)]
    })
}

/// Sharp annulus peaking halfway between 60% and 100% of the radius.
pub fn ring_sprite(size: u32) -> Vec<u8> {
    render(size, |d, _, _| {
        let a = if d < 0.3 || d > 0.5 {
            0.0
        } else {
            1.0 - ((d - 0.4) / 0.1).abs()
        };
        [255, 255, 255, to_byte(a)]
    })
}

/// Run a per-pixel shader over a size x size canvas. The closure gets the
/// normalized distance from the center (0 at center, 1 at the corner-free
/// edge) plus the raw pixel coordinates.
fn render(size: u32, shade: impl Fn(f32, u32, u32) -> [u8; 4]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    let half = size as f32 / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - half;
            let dy = y as f32 + 0.5 - half;
            let d = (dx * dx + dy * dy).sqrt() / half;
            rgba.extend_from_slice(&shade(d.min(1.0), x, y));
        }
    }

    rgba
}

fn to_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprites_have_expected_length() {
        for gen in [star_sprite, gas_sprite, ring_sprite] {
            assert_eq!(gen(64).len(), 64 * 64 * 4);
        }
    }

    #[test]
    fn star_is_brightest_at_center() {
        let size = 64;
        let px = star_sprite(size);
        let center = ((size / 2 * size + size / 2) * 4 + 3) as usize;
        let corner = 3;
        assert!(px[center] > px[corner]);
    }

    #[test]
    fn ring_is_transparent_at_center() {
        let size = 64;
        let px = ring_sprite(size);
        let center = ((size / 2 * size + size / 2) * 4 + 3) as usize;
        assert_eq!(px[center], 0);
    }
}
