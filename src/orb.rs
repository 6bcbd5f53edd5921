//! Gold orbs: the score collectible dropped by asteroids.
//!
//! ## Animation
//!
//! ```text
//!   Normal ──start_blink_animation──▶ Blinking ──(blink done)──▶ Pulling ──(pull done)──▶ gone
//!     │                                                            ▲
//!     └──────────────────start_pull_animation──────────────────────┘
//! ```
//!
//! | State      | Motion                          | Visibility              |
//! |------------|---------------------------------|-------------------------|
//! | `Normal`   | friction drift                  | always                  |
//! | `Blinking` | frozen                          | once progress > 0.5     |
//! | `Pulling`  | lerp from `origin` to `target`  | always                  |
//!
//! A pulling orb without a target holds position and its timer stands still.
//! Scoring is gated by [`GoldOrb::mark_scored`], which returns `true` exactly
//! once per orb no matter which code path asks first.

use crate::body::{Body, Circular};
use crate::config::GameConfig;
use bevy::math::Vec2;
use rand::Rng;

/// Per-state payload of the orb animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbAnimation {
    Normal,
    Blinking { elapsed: f32 },
    Pulling { elapsed: f32, origin: Vec2 },
}

/// Result of advancing an orb by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbProgress {
    Active,
    /// The pull finished this frame; the owner must remove the orb.
    PullComplete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoldOrb {
    body: Body,
    animation: OrbAnimation,
    target: Option<Vec2>,
    visible: bool,
    scored: bool,
}

impl Circular for GoldOrb {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl GoldOrb {
    /// A fresh orb at `position` with a small random drift.
    pub fn new(position: Vec2, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let drift = config.gold_orb_drift;
        let velocity = if drift > 0.0 {
            Vec2::new(rng.gen_range(-drift..=drift), rng.gen_range(-drift..=drift))
        } else {
            Vec2::ZERO
        };
        Self::at_rest(position, config).with_velocity(velocity)
    }

    /// A motionless orb; used by tests and deterministic spawns.
    pub fn at_rest(position: Vec2, config: &GameConfig) -> Self {
        Self {
            body: Body::new(position, config.gold_orb_radius),
            animation: OrbAnimation::Normal,
            target: None,
            visible: true,
            scored: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.body.velocity = velocity;
        self
    }

    #[inline]
    pub fn animation(&self) -> OrbAnimation {
        self.animation
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_scored(&self) -> bool {
        self.scored
    }

    #[inline]
    pub fn pull_target(&self) -> Option<Vec2> {
        self.target
    }

    #[inline]
    pub fn is_drifting(&self) -> bool {
        matches!(self.animation, OrbAnimation::Normal)
    }

    /// Advance motion and animation by `dt` seconds.
    pub fn update(&mut self, dt: f32, config: &GameConfig) -> OrbProgress {
        match self.animation {
            OrbAnimation::Normal => {
                self.body.drift(dt, config.drift_friction);
                OrbProgress::Active
            }
            OrbAnimation::Blinking { elapsed } => {
                let elapsed = elapsed + dt;
                let progress = elapsed / config.gold_orb_blink_duration;
                if progress >= 1.0 {
                    self.enter_pull();
                } else {
                    self.visible = progress > 0.5;
                    self.animation = OrbAnimation::Blinking { elapsed };
                }
                OrbProgress::Active
            }
            OrbAnimation::Pulling { elapsed, origin } => {
                let Some(target) = self.target else {
                    return OrbProgress::Active;
                };
                let elapsed = elapsed + dt;
                let progress = (elapsed / config.gold_orb_pull_duration).min(1.0);
                self.body.position = origin.lerp(target, progress);
                self.animation = OrbAnimation::Pulling { elapsed, origin };
                if progress >= 1.0 {
                    OrbProgress::PullComplete
                } else {
                    OrbProgress::Active
                }
            }
        }
    }

    /// Begin the fade-in that precedes a pull.  Visibility starts off.
    pub fn start_blink_animation(&mut self) {
        self.animation = OrbAnimation::Blinking { elapsed: 0.0 };
        self.body.velocity = Vec2::ZERO;
        self.visible = false;
    }

    /// Skip the blink and fly straight to `target`.
    pub fn start_pull_animation(&mut self, target: Vec2) {
        self.target = Some(target);
        self.enter_pull();
    }

    /// Set or move the pull destination.  Valid in any state; a drifting orb
    /// remembers it for when its pull begins.
    pub fn set_pull_target(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Proximity pickup test used for drifting orbs.
    pub fn is_collected_by(&self, collector: &impl Circular, config: &GameConfig) -> bool {
        self.body.position.distance(collector.position()) <= config.gold_orb_collection_distance
    }

    /// Claim this orb's score.  Returns `true` the first time only.
    pub fn mark_scored(&mut self) -> bool {
        !std::mem::replace(&mut self.scored, true)
    }

    fn enter_pull(&mut self) {
        self.animation = OrbAnimation::Pulling {
            elapsed: 0.0,
            origin: self.body.position,
        };
        self.body.velocity = Vec2::ZERO;
        self.visible = true;
    }
}
