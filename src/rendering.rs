//! Rendering: gizmo drawing for every entity kind, the score HUD, and the
//! short-lived explosion/flash effects.
//!
//! ## System Responsibilities
//!
//! | System                    | Schedule | Purpose                                  |
//! |---------------------------|----------|------------------------------------------|
//! | `setup_hud`               | Startup  | Spawn the score / stars / debug HUD      |
//! | `clear_effects`           | `OnEnter(Playing)` | Drop effects from the last session |
//! | `record_effects_system`   | Update   | Turn [`GameEvent`]s into effects, age them |
//! | `draw_session_system`     | Update   | Draw the player and every live entity    |
//! | `draw_effects_system`     | Update   | Draw explosions and star flashes         |
//! | `hud_display_system`      | Update   | Refresh HUD text                         |
//!
//! Everything is drawn with immediate-mode [`Gizmos`]; no meshes or sprites
//! are retained between frames.

use crate::asteroid::Asteroid;
use crate::body::{rotate_degrees, Circular};
use crate::config::GameConfig;
use crate::debug_commands::DebugCommands;
use crate::graphics::{dir_to_world, to_world};
use crate::menu::GameState;
use crate::meteorite::Meteorite;
use crate::orb::GoldOrb;
use crate::player::Player;
use crate::registry::Actor;
use crate::session::{GameEvent, GameSession};
use crate::shot::Shot;
use crate::star::Star;
use bevy::prelude::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EffectState>()
            .add_systems(Startup, setup_hud)
            .add_systems(OnEnter(GameState::Playing), clear_effects)
            .add_systems(
                Update,
                (
                    record_effects_system.after(crate::simulation::session_step_system),
                    draw_session_system,
                    draw_effects_system.after(record_effects_system),
                    hud_display_system.after(crate::simulation::session_step_system),
                ),
            );
    }
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn ship_color() -> Color {
    Color::srgb(0.85, 0.90, 1.0)
}
fn asteroid_color() -> Color {
    Color::srgb(0.70, 0.62, 0.55)
}
fn shot_color() -> Color {
    Color::srgb(1.0, 1.0, 0.6)
}
fn orb_color() -> Color {
    Color::srgb(1.0, 0.82, 0.20)
}
fn star_color() -> Color {
    Color::srgb(1.0, 0.95, 0.45)
}
fn meteorite_color() -> Color {
    Color::srgb(1.0, 0.45, 0.15)
}
fn hud_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
fn debug_hud_color() -> Color {
    Color::srgb(0.55, 0.85, 0.55)
}

// ── Drawing ───────────────────────────────────────────────────────────────────

/// Something that knows how to draw itself with gizmos.
pub trait Draw {
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig);
}

impl Draw for Player {
    /// Triangle pointing along the heading.
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig) {
        let forward = self.forward();
        let right = rotate_degrees(forward, 90.0);
        let r = self.radius();
        let nose = self.position() + forward * r;
        let left_wing = self.position() - forward * r - right * r / 1.5;
        let right_wing = self.position() - forward * r + right * r / 1.5;
        let points = [nose, left_wing, right_wing, nose].map(|p| to_world(p, config));
        gizmos.linestrip_2d(points, ship_color());
    }
}

impl Draw for Asteroid {
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig) {
        gizmos.circle_2d(to_world(self.position(), config), self.radius(), asteroid_color());
    }
}

impl Draw for Shot {
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig) {
        gizmos.circle_2d(to_world(self.position(), config), self.radius(), shot_color());
    }
}

impl Draw for GoldOrb {
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig) {
        if !self.is_visible() {
            return;
        }
        let center = to_world(self.position(), config);
        gizmos.circle_2d(center, self.radius(), orb_color());
        gizmos.circle_2d(center, self.radius() * 0.5, orb_color());
    }
}

impl Draw for Star {
    /// Five-pointed outline.
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig) {
        if !self.is_visible() {
            return;
        }
        let outer = self.radius();
        let inner = outer * 0.45;
        let points: Vec<Vec2> = (0..=10)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                let tip = rotate_degrees(Vec2::new(0.0, -r), i as f32 * 36.0);
                to_world(self.position() + tip, config)
            })
            .collect();
        gizmos.linestrip_2d(points, star_color());
    }
}

impl Draw for Meteorite {
    /// Body plus a short tail opposite the direction of travel.
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig) {
        let center = to_world(self.position(), config);
        gizmos.circle_2d(center, self.radius(), meteorite_color());
        let velocity = self.body().velocity;
        if velocity.length_squared() > 0.0 {
            let tail = dir_to_world(-velocity.normalize()) * self.radius() * 2.0;
            gizmos.line_2d(center, center + tail, meteorite_color());
        }
    }
}

impl Draw for Actor {
    fn draw(&self, gizmos: &mut Gizmos, config: &GameConfig) {
        match self {
            Actor::Asteroid(asteroid) => asteroid.draw(gizmos, config),
            Actor::Shot(shot) => shot.draw(gizmos, config),
            Actor::GoldOrb(orb) => orb.draw(gizmos, config),
            Actor::Star(star) => star.draw(gizmos, config),
            Actor::Meteorite(meteorite) => meteorite.draw(gizmos, config),
        }
    }
}

pub fn draw_session_system(
    mut gizmos: Gizmos,
    session: Option<Res<GameSession>>,
    config: Res<GameConfig>,
) {
    let Some(session) = session else {
        return;
    };
    for (_, actor) in session.registry().iter_all() {
        actor.draw(&mut gizmos, &config);
    }
    if !session.is_over() {
        session.player().draw(&mut gizmos, &config);
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Explosion,
    StarFlash,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub position: Vec2,
    pub radius: f32,
    pub age: f32,
    pub duration: f32,
}

impl Effect {
    /// 0.0 when spawned, 1.0 when expired.
    pub fn progress(&self) -> f32 {
        (self.age / self.duration).clamp(0.0, 1.0)
    }
}

/// Presentation-only effects, fed by [`GameEvent`]s.  Never read by the
/// session.
#[derive(Resource, Debug, Clone, Default)]
pub struct EffectState {
    effects: Vec<Effect>,
}

impl EffectState {
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn record(&mut self, event: &GameEvent, player_position: Vec2, config: &GameConfig) {
        let explosion = |position, radius| Effect {
            kind: EffectKind::Explosion,
            position,
            radius,
            age: 0.0,
            duration: config.explosion_duration,
        };
        match *event {
            GameEvent::AsteroidShot { position, radius } => {
                self.effects.push(explosion(position, radius));
            }
            GameEvent::MeteoriteShot { position } => {
                self.effects.push(explosion(position, config.meteorite_radius));
            }
            GameEvent::PlayerHit { position } => {
                self.effects.push(explosion(position, config.player_radius * 3.0));
            }
            GameEvent::StarPower { .. } => self.effects.push(Effect {
                kind: EffectKind::StarFlash,
                position: player_position,
                radius: config.screen_width.max(config.screen_height),
                age: 0.0,
                duration: config.star_flash_duration,
            }),
            GameEvent::OrbCollected { .. } | GameEvent::StarCollected { .. } => {}
        }
    }

    /// Age every effect and drop the finished ones.
    pub fn tick(&mut self, dt: f32) {
        for effect in &mut self.effects {
            effect.age += dt;
        }
        self.effects.retain(|effect| effect.age < effect.duration);
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

fn clear_effects(mut effects: ResMut<EffectState>) {
    effects.clear();
}

pub fn record_effects_system(
    mut events: MessageReader<GameEvent>,
    mut effects: ResMut<EffectState>,
    session: Option<Res<GameSession>>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    effects.tick(time.delta_secs());
    let player_position = session
        .map(|session| session.player().position())
        .unwrap_or_default();
    for event in events.read() {
        effects.record(event, player_position, &config);
    }
}

pub fn draw_effects_system(mut gizmos: Gizmos, effects: Res<EffectState>, config: Res<GameConfig>) {
    for effect in effects.effects() {
        let t = effect.progress();
        let center = to_world(effect.position, &config);
        match effect.kind {
            EffectKind::Explosion => {
                let color = Color::srgba(1.0, 0.6, 0.2, 1.0 - t);
                gizmos.circle_2d(center, effect.radius * (0.5 + t), color);
                gizmos.circle_2d(center, effect.radius * (0.25 + t * 0.5), color);
            }
            EffectKind::StarFlash => {
                let color = Color::srgba(1.0, 0.95, 0.6, 1.0 - t);
                gizmos.circle_2d(center, effect.radius * t, color);
            }
        }
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Marker for the score line.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Marker for the debug-mode line.
#[derive(Component)]
pub struct HudDebugDisplay;

/// Spawn the top-left HUD: score and stars, with the debug hint underneath.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Points: 0   Stars: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(hud_color()),
                HudScoreDisplay,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.hud_font_size * 0.7,
                    ..default()
                },
                TextColor(debug_hud_color()),
                HudDebugDisplay,
            ));
        });
}

pub fn hud_text(player: &Player) -> String {
    let mut text = format!(
        "Points: {}   Stars: {}",
        player.points(),
        player.stars_collected()
    );
    if player.stars_collected() > 0 {
        text.push_str("   [F] star power");
    }
    text
}

pub fn hud_display_system(
    session: Option<Res<GameSession>>,
    debug: Res<DebugCommands>,
    mut score_query: Query<&mut Text, (With<HudScoreDisplay>, Without<HudDebugDisplay>)>,
    mut debug_query: Query<&mut Text, (With<HudDebugDisplay>, Without<HudScoreDisplay>)>,
) {
    if let Some(session) = session {
        if session.is_changed() {
            for mut text in score_query.iter_mut() {
                *text = Text::new(hud_text(session.player()));
            }
        }
    }
    if debug.is_changed() {
        let line = if debug.enabled {
            "DEBUG  E vaporize  G orb  M meteorite  A asteroid  P points  C clear  U off"
        } else {
            ""
        };
        for mut text in debug_query.iter_mut() {
            *text = Text::new(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shots_and_hits_spawn_explosions() {
        let config = GameConfig::default();
        let mut effects = EffectState::default();
        effects.record(
            &GameEvent::AsteroidShot {
                position: Vec2::new(10.0, 10.0),
                radius: 40.0,
            },
            Vec2::ZERO,
            &config,
        );
        effects.record(
            &GameEvent::OrbCollected {
                position: Vec2::ZERO,
                points: 10,
            },
            Vec2::ZERO,
            &config,
        );
        assert_eq!(effects.effects().len(), 1);
        assert_eq!(effects.effects()[0].kind, EffectKind::Explosion);
        assert_eq!(effects.effects()[0].radius, 40.0);
    }

    #[test]
    fn star_power_flashes_from_the_player() {
        let config = GameConfig::default();
        let mut effects = EffectState::default();
        let player = Vec2::new(300.0, 200.0);
        effects.record(&GameEvent::StarPower { asteroids: 2, orbs: 4 }, player, &config);
        assert_eq!(effects.effects()[0].kind, EffectKind::StarFlash);
        assert_eq!(effects.effects()[0].position, player);
    }

    #[test]
    fn effects_expire_after_their_duration() {
        let config = GameConfig::default();
        let mut effects = EffectState::default();
        effects.record(&GameEvent::MeteoriteShot { position: Vec2::ZERO }, Vec2::ZERO, &config);

        effects.tick(config.explosion_duration * 0.5);
        assert_eq!(effects.effects().len(), 1);
        assert!((effects.effects()[0].progress() - 0.5).abs() < 1e-4);

        effects.tick(config.explosion_duration);
        assert!(effects.effects().is_empty());
    }

    #[test]
    fn hud_mentions_star_power_only_when_held() {
        let config = GameConfig::default();
        let mut player = Player::new(Vec2::ZERO, &config);
        assert_eq!(hud_text(&player), "Points: 0   Stars: 0");

        let mut rng = StdRng::seed_from_u64(8);
        player
            .collect_star(Star::new(Vec2::ZERO, &config, &mut rng), &config)
            .expect("room for one star");
        assert_eq!(hud_text(&player), "Points: 0   Stars: 1   [F] star power");
    }
}
