//! Meteorites: fast cross-screen hazards that turn into a star when shot.
//!
//! Meteorites enter from a random edge (see [`MeteoriteShower`]) or, from
//! the debug layer, appear at an arbitrary point with a random heading.  They
//! never interact with the player directly; leaving the screen removes them
//! without effect.

use crate::body::{rotate_degrees, Body, Circular};
use crate::config::GameConfig;
use crate::field::random_edge_point;
use crate::star::Star;
use bevy::math::Vec2;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Meteorite {
    body: Body,
}

impl Circular for Meteorite {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl Meteorite {
    /// A meteorite at `position` heading in a uniformly random direction.
    pub fn new(position: Vec2, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let heading = rotate_degrees(Vec2::Y, rng.gen_range(0.0..360.0));
        Self::with_heading(position, heading, config)
    }

    /// A meteorite at `position` travelling along `heading` at the configured speed.
    pub fn with_heading(position: Vec2, heading: Vec2, config: &GameConfig) -> Self {
        let velocity = heading.normalize_or_zero() * config.meteorite_speed;
        Self {
            body: Body::new(position, config.meteorite_radius).with_velocity(velocity),
        }
    }

    /// A meteorite just outside a random edge, aimed at a random point in the
    /// middle half of the screen so it crosses to the far side.
    pub fn from_edge(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let (start, _) = random_edge_point(config.meteorite_radius, config, rng);
        let (w, h) = (config.screen_width, config.screen_height);
        let aim = Vec2::new(
            rng.gen_range(w * 0.25..w * 0.75),
            rng.gen_range(h * 0.25..h * 0.75),
        );
        Self::with_heading(start, aim - start, config)
    }

    /// Move in a straight line.  Returns `false` once fully off-screen.
    pub fn update(&mut self, dt: f32, config: &GameConfig) -> bool {
        self.body.integrate(dt);
        !self
            .body
            .is_beyond_viewport(config.screen_width, config.screen_height, 0.0)
    }

    /// Shot down: consume the meteorite and release a blinking star.
    pub fn destroy(self, config: &GameConfig, rng: &mut impl Rng) -> Star {
        let mut star = Star::new(self.body.position, config, rng);
        star.start_blink_animation();
        star
    }
}

/// Timer that feeds meteorites into the field.
#[derive(Debug, Clone, Default)]
pub struct MeteoriteShower {
    timer: f32,
}

impl MeteoriteShower {
    pub fn update(
        &mut self,
        dt: f32,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Option<Meteorite> {
        self.timer += dt;
        if self.timer <= config.meteorite_spawn_interval {
            return None;
        }
        self.timer = 0.0;
        Some(Meteorite::from_edge(config, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::StarAnimation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn travels_at_fixed_speed() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let meteorite = Meteorite::new(Vec2::new(300.0, 300.0), &config, &mut rng);
        assert!((meteorite.body().velocity.length() - config.meteorite_speed).abs() < 1e-3);
    }

    #[test]
    fn edge_meteorite_survives_first_frame_and_eventually_leaves() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let mut meteorite = Meteorite::from_edge(&config, &mut rng);
            assert!(meteorite.update(1.0 / 60.0, &config), "spawned at edge, heading in");

            let mut alive = true;
            for _ in 0..2000 {
                alive = meteorite.update(1.0 / 60.0, &config);
                if !alive {
                    break;
                }
            }
            assert!(!alive, "meteorite should cross the screen and leave");
        }
    }

    #[test]
    fn destroy_yields_blinking_star_in_place() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let meteorite = Meteorite::with_heading(Vec2::new(80.0, 90.0), Vec2::X, &config);
        let star = meteorite.destroy(&config, &mut rng);
        assert_eq!(star.position(), Vec2::new(80.0, 90.0));
        assert!(matches!(star.animation(), StarAnimation::Blinking { .. }));
        assert!(star.is_visible());
    }

    #[test]
    fn shower_spawns_after_interval() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut shower = MeteoriteShower::default();
        assert!(shower
            .update(config.meteorite_spawn_interval * 0.5, &config, &mut rng)
            .is_none());
        assert!(shower
            .update(config.meteorite_spawn_interval * 0.6, &config, &mut rng)
            .is_some());
        assert!(shower.update(0.1, &config, &mut rng).is_none(), "timer resets");
    }
}
