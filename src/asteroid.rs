//! Asteroids and their two destruction paths.
//!
//! ## Destruction rules by radius
//!
//! | Radius `r`                 | `split()` (shot)              | `destroy_for_orbs()` (vaporize) |
//! |----------------------------|-------------------------------|---------------------------------|
//! | `r ≤ MIN`                  | 1 orb                         | 1 orb                           |
//! | `MIN < r ≤ 2·MIN`          | 2 children of `r − MIN`       | 3 orbs                          |
//! | `r > 2·MIN`                | 2 children of `r − MIN`       | 7 orbs                          |
//!
//! Both methods take `self` by value: the asteroid is gone once either
//! returns, and the caller inserts whatever came out.

use crate::body::{rotate_degrees, Body, Circular};
use crate::config::GameConfig;
use crate::orb::GoldOrb;
use bevy::math::Vec2;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    body: Body,
}

impl Circular for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// What a shot asteroid breaks into.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    Fragments([Asteroid; 2]),
    Orb(GoldOrb),
}

/// Vaporize tiers.  See the table in the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidTier {
    Small,
    Medium,
    Large,
}

impl AsteroidTier {
    pub fn of_radius(radius: f32, min_radius: f32) -> Self {
        if radius <= min_radius {
            Self::Small
        } else if radius <= min_radius * 2.0 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    #[inline]
    pub fn orb_count(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Medium => 3,
            Self::Large => 7,
        }
    }
}

impl Asteroid {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(position, radius),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.body.velocity = velocity;
        self
    }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
    }

    /// `true` once the asteroid has drifted `asteroid_cull_margin` past the screen.
    pub fn is_lost(&self, config: &GameConfig) -> bool {
        self.body.is_beyond_viewport(
            config.screen_width,
            config.screen_height,
            config.asteroid_cull_margin,
        )
    }

    pub fn tier(&self, config: &GameConfig) -> AsteroidTier {
        AsteroidTier::of_radius(self.body.radius, config.asteroid_min_radius)
    }

    /// Break apart after a shot hit.
    pub fn split(self, config: &GameConfig, rng: &mut impl Rng) -> SplitOutcome {
        let min_radius = config.asteroid_min_radius;
        if self.body.radius <= min_radius {
            return SplitOutcome::Orb(GoldOrb::new(self.body.position, config, rng));
        }

        let angle = rng.gen_range(
            config.asteroid_split_min_angle_deg..=config.asteroid_split_max_angle_deg,
        );
        let speedup = config.asteroid_split_speedup;
        let radius = self.body.radius - min_radius;
        let position = self.body.position;
        let velocity = self.body.velocity;

        SplitOutcome::Fragments([
            Asteroid::new(position, radius).with_velocity(rotate_degrees(velocity, angle) * speedup),
            Asteroid::new(position, radius)
                .with_velocity(rotate_degrees(velocity, -angle) * speedup),
        ])
    }

    /// Vaporize into a size-tiered handful of orbs.  Never returns an empty list.
    pub fn destroy_for_orbs(self, config: &GameConfig, rng: &mut impl Rng) -> Vec<GoldOrb> {
        let count = self.tier(config).orb_count();
        (0..count)
            .map(|_| GoldOrb::new(self.body.position, config, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (GameConfig, StdRng) {
        (GameConfig::default(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn large_asteroid_splits_into_two_smaller_children() {
        let (config, mut rng) = setup();
        let min = config.asteroid_min_radius;
        let parent = Asteroid::new(Vec2::new(100.0, 100.0), min * 3.0)
            .with_velocity(Vec2::new(50.0, 0.0));

        let SplitOutcome::Fragments(children) = parent.split(&config, &mut rng) else {
            panic!("radius 3·MIN must split into fragments");
        };
        for child in &children {
            assert_eq!(child.radius(), min * 2.0);
            assert_eq!(child.position(), Vec2::new(100.0, 100.0));
            let speed = child.body().velocity.length();
            assert!((speed - 50.0 * config.asteroid_split_speedup).abs() < 1e-3);
        }
    }

    #[test]
    fn split_deflects_children_symmetrically_within_range() {
        let (config, mut rng) = setup();
        for _ in 0..50 {
            let parent = Asteroid::new(Vec2::ZERO, config.asteroid_min_radius * 2.0)
                .with_velocity(Vec2::new(0.0, 80.0));
            let SplitOutcome::Fragments([a, b]) = parent.split(&config, &mut rng) else {
                panic!("expected fragments");
            };
            let angle_a = Vec2::Y.angle_to(a.body().velocity).to_degrees();
            let angle_b = Vec2::Y.angle_to(b.body().velocity).to_degrees();
            assert!((angle_a + angle_b).abs() < 1e-2, "mirrored: {angle_a} vs {angle_b}");
            assert!(angle_a.abs() >= config.asteroid_split_min_angle_deg - 1e-2);
            assert!(angle_a.abs() <= config.asteroid_split_max_angle_deg + 1e-2);
        }
    }

    #[test]
    fn minimum_asteroid_drops_one_orb() {
        let (config, mut rng) = setup();
        let asteroid = Asteroid::new(Vec2::new(7.0, 8.0), config.asteroid_min_radius);
        match asteroid.split(&config, &mut rng) {
            SplitOutcome::Orb(orb) => assert_eq!(orb.position(), Vec2::new(7.0, 8.0)),
            SplitOutcome::Fragments(_) => panic!("MIN radius must never fragment"),
        }
    }

    #[test]
    fn split_chain_ends_in_orbs_without_degenerate_radii() {
        let (config, mut rng) = setup();
        let min = config.asteroid_min_radius;
        let mut pending = vec![Asteroid::new(Vec2::ZERO, min + 1.0)];
        let mut orbs = 0;
        let mut rounds = 0;
        while let Some(asteroid) = pending.pop() {
            rounds += 1;
            assert!(rounds < 100, "split chain must terminate");
            match asteroid.split(&config, &mut rng) {
                SplitOutcome::Fragments(children) => {
                    for child in children {
                        assert!(child.radius() > 0.0);
                        pending.push(child);
                    }
                }
                SplitOutcome::Orb(_) => orbs += 1,
            }
        }
        // MIN + 1 → two children of radius 1 → one orb each.
        assert_eq!(orbs, 2);
        assert_eq!(rounds, 3);
    }

    #[test]
    fn vaporize_orb_counts_by_tier() {
        let (config, mut rng) = setup();
        let min = config.asteroid_min_radius;
        let cases = [
            (min * 0.5, 1),
            (min, 1),
            (min + 0.1, 3),
            (min * 2.0, 3),
            (min * 2.0 + 0.1, 7),
            (min * 3.0, 7),
        ];
        for (radius, expected) in cases {
            let orbs = Asteroid::new(Vec2::new(1.0, 2.0), radius).destroy_for_orbs(&config, &mut rng);
            assert_eq!(orbs.len(), expected, "radius {radius}");
            assert!(orbs.iter().all(|orb| orb.position() == Vec2::new(1.0, 2.0)));
        }
    }

    #[test]
    fn lost_asteroid_is_far_outside_the_screen() {
        let config = GameConfig::default();
        let spawned = Asteroid::new(Vec2::new(-config.asteroid_max_radius(), 100.0), 60.0);
        assert!(!spawned.is_lost(&config));
        let far = Asteroid::new(Vec2::new(-config.asteroid_cull_margin - 61.0, 100.0), 60.0);
        assert!(far.is_lost(&config));
    }
}
