//! Asteroid field: the timer-driven spawner that feeds asteroids in from the
//! screen edges.
//!
//! Every `asteroid_spawn_rate` seconds one asteroid appears just outside a
//! random edge, moving inward with its heading jittered by up to
//! `asteroid_spawn_cone_deg` either way.  Its radius is one of
//! `asteroid_kinds` multiples of the minimum radius.  The spawner never caps
//! the live count; shooting them down is the only limit.

use crate::asteroid::Asteroid;
use crate::body::rotate_degrees;
use crate::config::GameConfig;
use bevy::math::Vec2;
use rand::Rng;

/// Pick a point `offset` pixels outside a random viewport edge.
///
/// Returns the point and the unit inward normal of the chosen edge.
pub fn random_edge_point(offset: f32, config: &GameConfig, rng: &mut impl Rng) -> (Vec2, Vec2) {
    let (w, h) = (config.screen_width, config.screen_height);
    let t: f32 = rng.gen_range(0.0..=1.0);
    match rng.gen_range(0..4) {
        0 => (Vec2::new(-offset, t * h), Vec2::X),
        1 => (Vec2::new(w + offset, t * h), Vec2::NEG_X),
        2 => (Vec2::new(t * w, -offset), Vec2::Y),
        _ => (Vec2::new(t * w, h + offset), Vec2::NEG_Y),
    }
}

#[derive(Debug, Clone, Default)]
pub struct AsteroidField {
    spawn_timer: f32,
}

impl AsteroidField {
    /// Accumulate `dt`; once the spawn interval is exceeded, reset and
    /// return a new asteroid.
    pub fn update(&mut self, dt: f32, config: &GameConfig, rng: &mut impl Rng) -> Option<Asteroid> {
        self.spawn_timer += dt;
        if self.spawn_timer <= config.asteroid_spawn_rate {
            return None;
        }
        self.spawn_timer = 0.0;
        Some(Self::spawn(config, rng))
    }

    fn spawn(config: &GameConfig, rng: &mut impl Rng) -> Asteroid {
        let (position, inward) = random_edge_point(config.asteroid_max_radius(), config, rng);

        let speed = rng.gen_range(config.asteroid_min_speed..=config.asteroid_max_speed);
        let cone = config.asteroid_spawn_cone_deg;
        let velocity = rotate_degrees(inward * speed, rng.gen_range(-cone..=cone));

        let kind = rng.gen_range(1..=config.asteroid_kinds.max(1));
        Asteroid::new(position, config.asteroid_min_radius * kind as f32).with_velocity(velocity)
    }
}
