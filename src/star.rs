//! Stars: the rare power-up dropped by meteorites.
//!
//! A star either drifts (`Normal`) or sits still and blinks (`Blinking`).
//! Blinking never ends on its own; the star stays until the player picks it
//! up or the session is torn down.

use crate::body::{Body, Circular};
use crate::config::GameConfig;
use bevy::math::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarAnimation {
    Normal,
    /// `timer` counts up to `star_blink_rate`, then visibility flips.
    Blinking { timer: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    body: Body,
    animation: StarAnimation,
    visible: bool,
}

impl Circular for Star {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl Star {
    /// A drifting star at `position`.
    pub fn new(position: Vec2, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let drift = config.star_drift;
        let velocity = if drift > 0.0 {
            Vec2::new(rng.gen_range(-drift..=drift), rng.gen_range(-drift..=drift))
        } else {
            Vec2::ZERO
        };
        Self {
            body: Body::new(position, config.star_radius).with_velocity(velocity),
            animation: StarAnimation::Normal,
            visible: true,
        }
    }

    #[inline]
    pub fn animation(&self) -> StarAnimation {
        self.animation
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn update(&mut self, dt: f32, config: &GameConfig) {
        match self.animation {
            StarAnimation::Normal => self.body.drift(dt, config.drift_friction),
            StarAnimation::Blinking { timer } => {
                let timer = timer + dt;
                if timer >= config.star_blink_rate {
                    self.visible = !self.visible;
                    self.animation = StarAnimation::Blinking { timer: 0.0 };
                } else {
                    self.animation = StarAnimation::Blinking { timer };
                }
            }
        }
    }

    pub fn start_blink_animation(&mut self) {
        self.animation = StarAnimation::Blinking { timer: 0.0 };
        self.visible = true;
    }

    pub fn is_collected_by(&self, collector: &impl Circular, config: &GameConfig) -> bool {
        self.body.position.distance(collector.position()) <= config.star_collection_distance
    }
}
