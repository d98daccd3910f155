use kurbo::Point;

/// Deterministic unit-interval hash of a scalar seed.
///
/// The classic trigonometric hash: no entropy, no generator state, the same
/// seed always yields the same value. Layouts derived from it are therefore
/// identical between the first static render and every re-render, which is
/// what keeps decorative elements from jumping on hydration.
pub fn seeded_unit(seed: f64) -> f64 {
    unit_fract(seed.sin() * 43_758.545_312_3)
}

/// Wrap into `[0, 1)`. `rem_euclid(1.0)` alone rounds up to exactly 1.0 for
/// tiny negative inputs.
fn unit_fract(x: f64) -> f64 {
    let v = x.rem_euclid(1.0);
    if v >= 1.0 { 0.0 } else { v }
}

/// Stride between per-element seed offsets. Any value that keeps neighboring
/// elements off the sine wave's period works.
const ELEMENT_SEED_STRIDE: f64 = 7.13;

/// Page palette for decorative elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Hue {
    SoftPink,
    Peach,
    Lavender,
    Rose,
}

const HUES: [Hue; 4] = [Hue::SoftPink, Hue::Peach, Hue::Lavender, Hue::Rose];

fn pick_hue(r: f64) -> Hue {
    HUES[((r * HUES.len() as f64) as usize).min(HUES.len() - 1)]
}

/// One floating decorative element (heart, dot, petal).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    /// Horizontal position as a percentage of the container width.
    pub x_pct: f64,
    /// Vertical position as a percentage of the container height.
    pub y_pct: f64,
    pub size_px: f64,
    pub hue: Hue,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Generate `count` floating particles from `seed`.
///
/// Pure function of the seed; invoked once per mount and treated as immutable
/// for the component's lifetime.
pub fn particle_field(seed: u64, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let base = seed as f64 + i as f64 * ELEMENT_SEED_STRIDE;
            Particle {
                x_pct: seeded_unit(base) * 100.0,
                y_pct: seeded_unit(base + 1.0) * 100.0,
                size_px: 8.0 + seeded_unit(base + 2.0) * 16.0,
                hue: pick_hue(seeded_unit(base + 3.0)),
                delay_s: seeded_unit(base + 4.0) * 6.0,
                duration_s: 4.0 + seeded_unit(base + 5.0) * 4.0,
            }
        })
        .collect()
}

/// One heart in the celebration explosion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BurstHeart {
    /// Offset from the explosion center in pixels.
    pub position: Point,
    pub angle_deg: f64,
    pub rotation_deg: f64,
    pub size_px: f64,
    pub hue: Hue,
    pub delay_s: f64,
}

/// Radial explosion layout for the celebration overlay.
///
/// Hearts are spread evenly around the circle; distance, rotation, size, hue
/// and stagger delay are seeded per heart. Computed once when the overlay
/// mounts, never recomputed.
pub fn heart_burst(seed: u64, count: usize) -> Vec<BurstHeart> {
    (0..count)
        .map(|i| {
            let base = seed as f64 + i as f64 * ELEMENT_SEED_STRIDE + 0.5;
            let angle_deg = (i as f64 / count as f64) * 360.0;
            let distance = 80.0 + seeded_unit(base) * 140.0;
            let rad = angle_deg.to_radians();
            BurstHeart {
                position: Point::new(distance * rad.cos(), distance * rad.sin()),
                angle_deg,
                rotation_deg: -45.0 + seeded_unit(base + 1.0) * 90.0,
                size_px: 12.0 + seeded_unit(base + 2.0) * 20.0,
                hue: pick_hue(seeded_unit(base + 3.0)),
                delay_s: i as f64 * 0.03 + seeded_unit(base + 4.0) * 0.2,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_unit_is_in_unit_interval() {
        for i in 0..500 {
            let v = seeded_unit(i as f64 * 0.77 - 100.0);
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn unit_fract_never_reaches_one() {
        // A tiny negative remainder plus 1.0 rounds to exactly 1.0.
        assert_eq!((-1e-17f64).rem_euclid(1.0), 1.0);
        assert_eq!(unit_fract(-1e-17), 0.0);
        assert!(unit_fract(0.999_999) < 1.0);
    }

    #[test]
    fn same_seed_is_bit_identical() {
        assert_eq!(particle_field(42, 24), particle_field(42, 24));
        assert_eq!(heart_burst(42, 36), heart_burst(42, 36));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(particle_field(1, 24), particle_field(2, 24));
    }

    #[test]
    fn field_attributes_are_in_range() {
        for p in particle_field(7, 64) {
            assert!((0.0..100.0).contains(&p.x_pct));
            assert!((0.0..100.0).contains(&p.y_pct));
            assert!((8.0..24.0).contains(&p.size_px));
            assert!((0.0..6.0).contains(&p.delay_s));
            assert!((4.0..8.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn burst_angles_cover_the_circle_evenly() {
        let hearts = heart_burst(9, 12);
        for (i, h) in hearts.iter().enumerate() {
            assert_eq!(h.angle_deg, i as f64 / 12.0 * 360.0);
            let r = h.position.to_vec2().hypot();
            assert!((80.0..220.0).contains(&r));
        }
    }

    #[test]
    fn burst_delays_stagger_by_index() {
        let hearts = heart_burst(3, 20);
        // Jitter is bounded by 0.2s and the stagger step is 0.03s, so a heart
        // seven indices later always starts later.
        for w in hearts.windows(8) {
            assert!(w[7].delay_s > w[0].delay_s);
        }
    }

    #[test]
    fn zero_count_yields_empty_layouts() {
        assert!(particle_field(5, 0).is_empty());
        assert!(heart_burst(5, 0).is_empty());
    }
}
