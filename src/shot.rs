//! Player shots.

use crate::body::{Body, Circular};
use crate::config::GameConfig;
use bevy::math::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    body: Body,
}

impl Circular for Shot {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl Shot {
    pub fn new(position: Vec2, velocity: Vec2, config: &GameConfig) -> Self {
        Self {
            body: Body::new(position, config.shot_radius).with_velocity(velocity),
        }
    }

    /// Move in a straight line.  Returns `false` once the shot has left the
    /// screen and should be discarded.
    pub fn update(&mut self, dt: f32, config: &GameConfig) -> bool {
        self.body.integrate(dt);
        !self
            .body
            .is_beyond_viewport(config.screen_width, config.screen_height, 0.0)
    }
}
