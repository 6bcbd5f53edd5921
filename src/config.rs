//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  Before the first frame, [`load_game_config`]
//! reads `assets/game.toml` and overwrites the defaults with any values
//! present in the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! Core entity code never reads `constants` directly; it takes a
//! `&GameConfig` so tests can tune values without touching globals.

use crate::constants::*;
use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Viewport ─────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_min_radius: f32,
    pub asteroid_kinds: u32,
    pub asteroid_spawn_rate: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    pub asteroid_spawn_cone_deg: f32,
    pub asteroid_split_min_angle_deg: f32,
    pub asteroid_split_max_angle_deg: f32,
    pub asteroid_split_speedup: f32,
    pub asteroid_cull_margin: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_radius: f32,
    pub player_turn_speed: f32,
    pub player_speed: f32,
    pub player_shoot_cooldown: f32,
    pub player_shoot_speed: f32,
    pub player_star_capacity: u32,

    // ── Shots ────────────────────────────────────────────────────────────────
    pub shot_radius: f32,

    // ── Gold orbs ────────────────────────────────────────────────────────────
    pub gold_orb_radius: f32,
    pub gold_orb_collection_distance: f32,
    pub gold_orb_drift: f32,
    pub gold_orb_blink_duration: f32,
    pub gold_orb_pull_duration: f32,
    pub points_per_orb: u32,
    pub drift_friction: f32,

    // ── Stars ────────────────────────────────────────────────────────────────
    pub star_radius: f32,
    pub star_collection_distance: f32,
    pub star_drift: f32,
    pub star_blink_rate: f32,

    // ── Meteorites ───────────────────────────────────────────────────────────
    pub meteorite_radius: f32,
    pub meteorite_speed: f32,
    pub meteorite_spawn_interval: f32,

    // ── High scores ──────────────────────────────────────────────────────────
    pub top_scores_count: usize,
    pub max_name_length: usize,
    pub high_score_file: String,

    // ── Debug ────────────────────────────────────────────────────────────────
    pub debug_bonus_points: u32,

    // ── Rendering ────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
    pub explosion_duration: f32,
    pub star_flash_duration: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Viewport
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            // Asteroids
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_kinds: ASTEROID_KINDS,
            asteroid_spawn_rate: ASTEROID_SPAWN_RATE,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_spawn_cone_deg: ASTEROID_SPAWN_CONE_DEG,
            asteroid_split_min_angle_deg: ASTEROID_SPLIT_MIN_ANGLE_DEG,
            asteroid_split_max_angle_deg: ASTEROID_SPLIT_MAX_ANGLE_DEG,
            asteroid_split_speedup: ASTEROID_SPLIT_SPEEDUP,
            asteroid_cull_margin: ASTEROID_CULL_MARGIN,
            // Player
            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_speed: PLAYER_SPEED,
            player_shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            player_shoot_speed: PLAYER_SHOOT_SPEED,
            player_star_capacity: PLAYER_STAR_CAPACITY,
            // Shots
            shot_radius: SHOT_RADIUS,
            // Gold orbs
            gold_orb_radius: GOLD_ORB_RADIUS,
            gold_orb_collection_distance: GOLD_ORB_COLLECTION_DISTANCE,
            gold_orb_drift: GOLD_ORB_DRIFT,
            gold_orb_blink_duration: GOLD_ORB_BLINK_DURATION,
            gold_orb_pull_duration: GOLD_ORB_PULL_DURATION,
            points_per_orb: POINTS_PER_ORB,
            drift_friction: DRIFT_FRICTION,
            // Stars
            star_radius: STAR_RADIUS,
            star_collection_distance: STAR_COLLECTION_DISTANCE,
            star_drift: STAR_DRIFT,
            star_blink_rate: STAR_BLINK_RATE,
            // Meteorites
            meteorite_radius: METEORITE_RADIUS,
            meteorite_speed: METEORITE_SPEED,
            meteorite_spawn_interval: METEORITE_SPAWN_INTERVAL,
            // High scores
            top_scores_count: TOP_SCORES_COUNT,
            max_name_length: MAX_NAME_LENGTH,
            high_score_file: HIGH_SCORE_FILE.to_string(),
            // Debug
            debug_bonus_points: DEBUG_BONUS_POINTS,
            // Rendering
            hud_font_size: HUD_FONT_SIZE,
            explosion_duration: EXPLOSION_DURATION,
            star_flash_duration: STAR_FLASH_DURATION,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) TOML document over the compiled defaults.
    ///
    /// Inverted ranges and non-positive screen sizes are repaired with a
    /// warning; the random spawners cannot sample from an empty range.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        toml::from_str::<GameConfig>(contents)
            .map(GameConfig::normalized)
            .map_err(|err| GameError::ConfigParse {
                reason: err.to_string(),
            })
    }

    fn normalized(mut self) -> Self {
        if self.screen_width < 1.0 || self.screen_height < 1.0 {
            warn!(
                "Screen size {}x{} is too small; using {}x{}",
                self.screen_width, self.screen_height, SCREEN_WIDTH, SCREEN_HEIGHT
            );
            self.screen_width = SCREEN_WIDTH;
            self.screen_height = SCREEN_HEIGHT;
        }
        if self.asteroid_min_speed > self.asteroid_max_speed {
            warn!("asteroid_min_speed exceeds asteroid_max_speed; swapping");
            std::mem::swap(&mut self.asteroid_min_speed, &mut self.asteroid_max_speed);
        }
        if self.asteroid_split_min_angle_deg > self.asteroid_split_max_angle_deg {
            warn!("asteroid_split_min_angle_deg exceeds asteroid_split_max_angle_deg; swapping");
            std::mem::swap(
                &mut self.asteroid_split_min_angle_deg,
                &mut self.asteroid_split_max_angle_deg,
            );
        }
        if self.asteroid_spawn_cone_deg < 0.0 {
            warn!("asteroid_spawn_cone_deg is negative; using its magnitude");
            self.asteroid_spawn_cone_deg = -self.asteroid_spawn_cone_deg;
        }
        self
    }

    /// Largest radius the asteroid field spawns.
    #[inline]
    pub fn asteroid_max_radius(&self) -> f32 {
        self.asteroid_min_radius * self.asteroid_kinds as f32
    }
}

/// Read `assets/game.toml` over the compiled defaults.
///
/// TOML parse errors are logged but do not abort the game.  A missing file is
/// not an error.  Called from `main` once logging is up but before any
/// schedule runs, so the first session already sees the final values.
pub fn load_game_config() -> GameConfig {
    load_game_config_from(Path::new(CONFIG_PATH))
}

pub fn load_game_config_from(path: &Path) -> GameConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match GameConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                info!("Loaded game config from {}", path.display());
                loaded
            }
            Err(err) => {
                warn!("{err} ({}); using defaults", path.display());
                GameConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("No {} found; using compiled defaults", path.display());
            GameConfig::default()
        }
        Err(err) => {
            warn!("Could not read {}: {err}; using defaults", path.display());
            GameConfig::default()
        }
    }
}
