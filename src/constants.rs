//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//!
//! These are the compiled defaults behind [`crate::config::GameConfig`];
//! `assets/game.toml` can override any of them at startup.

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Width of the playfield in pixels.  Spawners and off-screen checks use this.
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Height of the playfield in pixels.
pub const SCREEN_HEIGHT: f32 = 720.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Radius of the smallest asteroid, and the step removed on every split.
///
/// An asteroid at or below this radius never splits further; it drops an orb.
pub const ASTEROID_MIN_RADIUS: f32 = 20.0;

/// Number of discrete starting sizes the field spawner chooses from.
pub const ASTEROID_KINDS: u32 = 3;

/// Largest asteroid the field spawner produces.
pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;

/// Seconds between asteroid spawns.
pub const ASTEROID_SPAWN_RATE: f32 = 0.8;

/// Spawn speed range (px/s) for new field asteroids.
pub const ASTEROID_MIN_SPEED: f32 = 40.0;
pub const ASTEROID_MAX_SPEED: f32 = 100.0;

/// Half-angle (degrees) of the inward cone a field asteroid may travel in.
pub const ASTEROID_SPAWN_CONE_DEG: f32 = 30.0;

/// Split deflection range (degrees).  Children rotate by +θ and −θ.
pub const ASTEROID_SPLIT_MIN_ANGLE_DEG: f32 = 20.0;
pub const ASTEROID_SPLIT_MAX_ANGLE_DEG: f32 = 50.0;

/// Speed multiplier applied to both children of a split.
pub const ASTEROID_SPLIT_SPEEDUP: f32 = 1.2;

/// Distance past the viewport edge at which a drifting asteroid is culled.
///
/// Must stay larger than `ASTEROID_MAX_RADIUS` or fresh spawns would be
/// removed before entering the screen.
pub const ASTEROID_CULL_MARGIN: f32 = ASTEROID_MAX_RADIUS * 3.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_RADIUS: f32 = 20.0;

/// Degrees per second.
pub const PLAYER_TURN_SPEED: f32 = 300.0;

/// Pixels per second along the heading.
pub const PLAYER_SPEED: f32 = 200.0;

/// Minimum seconds between two shots.
pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;

pub const PLAYER_SHOOT_SPEED: f32 = 500.0;

/// Star inventory capacity.
pub const PLAYER_STAR_CAPACITY: u32 = 1;

// ── Shots ─────────────────────────────────────────────────────────────────────

pub const SHOT_RADIUS: f32 = 5.0;

// ── Gold orbs ─────────────────────────────────────────────────────────────────

pub const GOLD_ORB_RADIUS: f32 = 8.0;

/// Player-to-orb distance at which a drifting orb is picked up.
pub const GOLD_ORB_COLLECTION_DISTANCE: f32 = 30.0;

/// Maximum initial drift speed per axis (px/s).
pub const GOLD_ORB_DRIFT: f32 = 20.0;

/// Seconds spent fading in before the pull starts.
pub const GOLD_ORB_BLINK_DURATION: f32 = 0.5;

/// Seconds an orb takes to fly to its pull target.
pub const GOLD_ORB_PULL_DURATION: f32 = 0.5;

pub const POINTS_PER_ORB: u32 = 10;

/// Per-update velocity multiplier for drifting orbs and stars.
pub const DRIFT_FRICTION: f32 = 0.98;

// ── Stars ─────────────────────────────────────────────────────────────────────

pub const STAR_RADIUS: f32 = 15.0;

pub const STAR_COLLECTION_DISTANCE: f32 = 30.0;

/// Maximum initial drift speed per axis (px/s).
pub const STAR_DRIFT: f32 = 30.0;

/// Seconds between visibility flips of a blinking star.
pub const STAR_BLINK_RATE: f32 = 0.2;

// ── Meteorites ────────────────────────────────────────────────────────────────

pub const METEORITE_RADIUS: f32 = 25.0;

pub const METEORITE_SPEED: f32 = 150.0;

/// Seconds between meteorites entering the field.
pub const METEORITE_SPAWN_INTERVAL: f32 = 12.0;

// ── High scores ───────────────────────────────────────────────────────────────

pub const TOP_SCORES_COUNT: usize = 3;

pub const MAX_NAME_LENGTH: usize = 10;

pub const HIGH_SCORE_FILE: &str = "highscores.txt";

// ── Debug commands ────────────────────────────────────────────────────────────

/// Points granted by the debug "add points" command.
pub const DEBUG_BONUS_POINTS: u32 = 1000;

// ── Rendering ─────────────────────────────────────────────────────────────────

pub const HUD_FONT_SIZE: f32 = 20.0;

/// Seconds an explosion ring stays on screen.
pub const EXPLOSION_DURATION: f32 = 0.35;

/// Seconds the full-screen flash lasts after star power fires.
pub const STAR_FLASH_DURATION: f32 = 0.4;
