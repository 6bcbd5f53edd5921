//! Player ship state and per-frame intent.
//!
//! [`Player`] owns everything that can change the score or star inventory;
//! nothing else in the crate writes `points` or `stars_collected`.

use crate::body::{rotate_degrees, Body, Circular};
use crate::config::GameConfig;
use crate::orb::GoldOrb;
use crate::shot::Shot;
use crate::star::Star;
use bevy::prelude::*;

/// Aggregated player intent for the current frame, derived from the keyboard.
///
/// [`super::control::keyboard_to_intent_system`] rewrites this each frame;
/// the session step reads it.  Tests populate it directly to
/// drive the ship without a real input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIntent {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub forward: bool,
    pub backward: bool,
    /// Held: fire whenever the cooldown allows.
    pub shoot: bool,
    /// Edge-triggered: spend a held star this frame.
    pub star_power: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    body: Body,
    /// Heading in degrees; 0 points along +Y (down the screen).
    pub rotation: f32,
    /// Seconds until the next shot is allowed.  May go negative.
    pub shoot_cooldown: f32,
    points: u32,
    stars_collected: u32,
    has_star_power: bool,
}

impl Circular for Player {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl Player {
    pub fn new(position: Vec2, config: &GameConfig) -> Self {
        Self {
            body: Body::new(position, config.player_radius),
            rotation: 0.0,
            shoot_cooldown: 0.0,
            points: 0,
            stars_collected: 0,
            has_star_power: false,
        }
    }

    #[inline]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[inline]
    pub fn stars_collected(&self) -> u32 {
        self.stars_collected
    }

    #[inline]
    pub fn has_star_power(&self) -> bool {
        self.has_star_power
    }

    /// Unit vector the ship is facing.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        rotate_degrees(Vec2::Y, self.rotation)
    }

    /// Apply turning and thrust from `intent`, then tick the shot cooldown.
    pub fn update(&mut self, dt: f32, intent: &PlayerIntent, config: &GameConfig) {
        self.shoot_cooldown -= dt;

        if intent.rotate_left {
            self.rotation -= config.player_turn_speed * dt;
        }
        if intent.rotate_right {
            self.rotation += config.player_turn_speed * dt;
        }
        if intent.forward {
            self.body.position += self.forward() * config.player_speed * dt;
        }
        if intent.backward {
            self.body.position -= self.forward() * config.player_speed * dt;
        }
    }

    /// Fire along the heading unless still cooling down.
    pub fn shoot(&mut self, config: &GameConfig) -> Option<Shot> {
        if self.shoot_cooldown > 0.0 {
            return None;
        }
        self.shoot_cooldown = config.player_shoot_cooldown;
        Some(Shot::new(
            self.body.position,
            self.forward() * config.player_shoot_speed,
            config,
        ))
    }

    /// Credit `orb` if it has not paid out yet.  Returns the points added.
    pub fn award_orb(&mut self, orb: &mut GoldOrb, config: &GameConfig) -> u32 {
        if orb.mark_scored() {
            self.add_points(config.points_per_orb);
            config.points_per_orb
        } else {
            0
        }
    }

    /// Pick up a drifting orb.  The orb is consumed.
    pub fn collect_orb(&mut self, mut orb: GoldOrb, config: &GameConfig) -> u32 {
        self.award_orb(&mut orb, config)
    }

    /// Stow `star` if there is room; otherwise hand it back untouched.
    pub fn collect_star(&mut self, star: Star, config: &GameConfig) -> Result<(), Star> {
        if !self.can_hold_star(config) {
            return Err(star);
        }
        self.stars_collected += 1;
        Ok(())
    }

    #[inline]
    pub fn can_hold_star(&self, config: &GameConfig) -> bool {
        self.stars_collected < config.player_star_capacity
    }

    /// Spend a held star.  Arms star power and returns `true` if one was held.
    pub fn consume_star(&mut self) -> bool {
        if self.stars_collected == 0 {
            return false;
        }
        self.stars_collected -= 1;
        self.has_star_power = true;
        true
    }

    /// Disarm star power once its effect has been applied.
    pub fn use_star_power(&mut self) {
        self.has_star_power = false;
    }

    pub fn add_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}
