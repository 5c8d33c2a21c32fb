use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::motion::{Drift, Ease, Pose};

pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_COLORS: [&str; 2] = ["#06b6d4", "#8b5cf6"];

/// One decorative dot in the hero background.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Edge length in pixels.
    pub size: f64,
    /// Position as a percentage of the container.
    pub left: f64,
    pub top: f64,
    pub color: &'static str,
    pub drift: Drift,
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        let size = rng.gen_range(1.0..5.0);
        let left = rng.gen_range(0.0..100.0);
        let top = rng.gen_range(0.0..100.0);
        let color = if rng.gen_bool(0.5) {
            PARTICLE_COLORS[0]
        } else {
            PARTICLE_COLORS[1]
        };
        let to = Pose::REST
            .x(rng.gen_range(-100.0..100.0))
            .y(rng.gen_range(-100.0..100.0))
            .opacity(rng.gen_range(0.2..0.7));
        Self {
            size,
            left,
            top,
            color,
            drift: Drift {
                to,
                duration: rng.gen_range(2.0..5.0),
                ease: Ease::SineInOut,
            },
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; top: {top:.2}%; background: {color}; {drift}",
            size = self.size,
            left = self.left,
            top = self.top,
            color = self.color,
            drift = self.drift.style(),
        )
    }
}

/// Generates the hero's particle field. The same seed yields the same field.
pub fn particle_field(seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..PARTICLE_COUNT)
        .map(|_| Particle::random(&mut rng))
        .collect()
}

/// Seed for a fresh field on each mount.
pub fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_has_fixed_count() {
        assert_eq!(particle_field(0).len(), PARTICLE_COUNT);
        assert_eq!(particle_field(u64::MAX).len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_particles_within_ranges() {
        for seed in 0..20 {
            for p in particle_field(seed) {
                assert!((1.0..5.0).contains(&p.size), "size {}", p.size);
                assert!((0.0..100.0).contains(&p.left));
                assert!((0.0..100.0).contains(&p.top));
                assert!(PARTICLE_COLORS.contains(&p.color));
                assert!((-100.0..100.0).contains(&p.drift.to.x));
                assert!((-100.0..100.0).contains(&p.drift.to.y));
                assert!((0.2..0.7).contains(&p.drift.to.opacity));
                assert!((2.0..5.0).contains(&p.drift.duration));
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(particle_field(1234), particle_field(1234));
        assert_ne!(particle_field(1234), particle_field(4321));
    }

    #[test]
    fn test_both_colors_used() {
        let field = particle_field(7);
        assert!(field.iter().any(|p| p.color == PARTICLE_COLORS[0]));
        assert!(field.iter().any(|p| p.color == PARTICLE_COLORS[1]));
    }

    #[test]
    fn test_style_is_inline_css() {
        let p = &particle_field(42)[0];
        let style = p.style();
        assert!(style.starts_with("width: "));
        assert!(style.contains(&format!("background: {};", p.color)));
        assert!(style.contains("animation: drift"));
    }
}
