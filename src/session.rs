//! Game session: the player, the entity registry, the spawners, and the
//! per-frame collision/interaction resolver.
//!
//! ## Frame order
//!
//! [`GameSession::step`] runs two phases that never overlap:
//!
//! 1. **Motion**: spawners tick, the player moves and fires, every entity
//!    integrates its motion and animation.  Shots and meteorites that left
//!    the screen, and asteroids far outside it, are dropped.  Orbs whose pull
//!    finished pay out and are removed.
//! 2. **Resolve**: against post-move positions, in this order:
//!
//! | Step | Test                  | Effect                                                   |
//! |------|-----------------------|----------------------------------------------------------|
//! | a    | asteroid × player     | session over                                             |
//! | b    | shot × asteroid       | shot gone, asteroid splits into children or an orb       |
//! | c    | shot × meteorite      | shot gone, meteorite becomes a blinking star             |
//! | d    | drifting orb × player | orb collected                                            |
//! | e    | star × player         | star stowed (if room); star power fires on request       |
//!
//! Each test iterates a snapshot of ids taken when that test begins, so it
//! never revisits entities it created itself.

use crate::asteroid::{Asteroid, SplitOutcome};
use crate::body::Circular;
use crate::config::GameConfig;
use crate::field::AsteroidField;
use crate::meteorite::{Meteorite, MeteoriteShower};
use crate::orb::{GoldOrb, OrbAnimation, OrbProgress};
use crate::player::{Player, PlayerIntent};
use crate::registry::{Actor, EntityId, Registry};
use crate::shot::Shot;
use crate::star::Star;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Notable things that happened during a frame.  The presentation layer
/// turns these into explosions, flashes and state transitions.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    AsteroidShot { position: Vec2, radius: f32 },
    MeteoriteShot { position: Vec2 },
    OrbCollected { position: Vec2, points: u32 },
    StarCollected { position: Vec2 },
    StarPower { asteroids: usize, orbs: usize },
    PlayerHit { position: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Over,
}

/// Outcome of a vaporize sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VaporizeReport {
    pub asteroids_destroyed: usize,
    pub orbs_created: usize,
}

#[derive(Resource, Debug, Clone)]
pub struct GameSession {
    player: Player,
    registry: Registry,
    field: AsteroidField,
    shower: MeteoriteShower,
    rng: StdRng,
    status: SessionStatus,
}

impl GameSession {
    /// A new session with the player centred and a deterministic RNG.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// A new session seeded from OS entropy.
    pub fn from_entropy(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let center = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);
        Self {
            player: Player::new(center, config),
            registry: Registry::default(),
            field: AsteroidField::default(),
            shower: MeteoriteShower::default(),
            rng,
            status: SessionStatus::Running,
        }
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Over
    }

    /// Insert an entity directly.
    pub fn spawn(&mut self, actor: impl Into<Actor>) -> EntityId {
        self.registry.spawn(actor)
    }

    /// Advance one frame.  Does nothing once the session is over.
    pub fn step(&mut self, dt: f32, intent: &PlayerIntent, config: &GameConfig) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        self.advance(dt, intent, config, &mut events);
        self.resolve(intent, config, &mut events);
        events
    }

    // ── Motion phase ──────────────────────────────────────────────────────────

    fn advance(
        &mut self,
        dt: f32,
        intent: &PlayerIntent,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) {
        if let Some(asteroid) = self.field.update(dt, config, &mut self.rng) {
            self.registry.spawn(asteroid);
        }
        if let Some(meteorite) = self.shower.update(dt, config, &mut self.rng) {
            self.registry.spawn(meteorite);
        }

        self.player.update(dt, intent, config);
        if intent.shoot {
            if let Some(shot) = self.player.shoot(config) {
                self.registry.spawn(shot);
            }
        }

        let player_position = self.player.position();
        let mut expired = Vec::new();
        let mut pulled_in = Vec::new();
        for (id, actor) in self.registry.iter_all_mut() {
            match actor {
                Actor::Asteroid(asteroid) => {
                    asteroid.update(dt);
                    if asteroid.is_lost(config) {
                        expired.push(id);
                    }
                }
                Actor::Shot(shot) => {
                    if !shot.update(dt, config) {
                        expired.push(id);
                    }
                }
                Actor::Meteorite(meteorite) => {
                    if !meteorite.update(dt, config) {
                        expired.push(id);
                    }
                }
                Actor::Star(star) => star.update(dt, config),
                Actor::GoldOrb(orb) => {
                    // Pull targets follow the ship.
                    if orb.pull_target().is_some() {
                        orb.set_pull_target(player_position);
                    }
                    if orb.update(dt, config) == OrbProgress::PullComplete {
                        pulled_in.push(id);
                    }
                }
            }
        }

        for id in expired {
            self.registry.despawn(id);
        }
        for id in pulled_in {
            if let Some(mut orb) = self.registry.take::<GoldOrb>(id) {
                let points = self.player.award_orb(&mut orb, config);
                events.push(GameEvent::OrbCollected {
                    position: orb.position(),
                    points,
                });
            }
        }
    }

    // ── Resolve phase ─────────────────────────────────────────────────────────

    fn resolve(&mut self, intent: &PlayerIntent, config: &GameConfig, events: &mut Vec<GameEvent>) {
        if self.resolve_player_hit(events) {
            return;
        }
        self.resolve_shots_vs_asteroids(config, events);
        self.resolve_shots_vs_meteorites(config, events);
        self.resolve_orb_pickups(config, events);
        self.resolve_star_pickups(config, events);

        if intent.star_power && self.player.consume_star() {
            let report = self.vaporize(config);
            self.player.use_star_power();
            info!(
                "Star power: vaporized {} asteroids into {} orbs",
                report.asteroids_destroyed, report.orbs_created
            );
            events.push(GameEvent::StarPower {
                asteroids: report.asteroids_destroyed,
                orbs: report.orbs_created,
            });
        }
    }

    fn resolve_player_hit(&mut self, events: &mut Vec<GameEvent>) -> bool {
        let hit = self
            .registry
            .iter::<Asteroid>()
            .any(|(_, asteroid)| asteroid.collides_with(&self.player));
        if hit {
            self.status = SessionStatus::Over;
            info!("Game over! Final score: {}", self.player.points());
            events.push(GameEvent::PlayerHit {
                position: self.player.position(),
            });
        }
        hit
    }

    fn resolve_shots_vs_asteroids(&mut self, config: &GameConfig, events: &mut Vec<GameEvent>) {
        let shots = self.registry.ids::<Shot>();
        for asteroid_id in self.registry.ids::<Asteroid>() {
            let Some(shot_id) = self.first_shot_hitting::<Asteroid>(asteroid_id, &shots) else {
                continue;
            };
            self.registry.despawn(shot_id);
            let Some(asteroid) = self.registry.take::<Asteroid>(asteroid_id) else {
                continue;
            };
            events.push(GameEvent::AsteroidShot {
                position: asteroid.position(),
                radius: asteroid.radius(),
            });
            match asteroid.split(config, &mut self.rng) {
                SplitOutcome::Fragments(children) => {
                    for child in children {
                        self.registry.spawn(child);
                    }
                }
                SplitOutcome::Orb(orb) => {
                    self.registry.spawn(orb);
                }
            }
        }
    }

    fn resolve_shots_vs_meteorites(&mut self, config: &GameConfig, events: &mut Vec<GameEvent>) {
        let shots = self.registry.ids::<Shot>();
        for meteorite_id in self.registry.ids::<Meteorite>() {
            let Some(shot_id) = self.first_shot_hitting::<Meteorite>(meteorite_id, &shots) else {
                continue;
            };
            self.registry.despawn(shot_id);
            let Some(meteorite) = self.registry.take::<Meteorite>(meteorite_id) else {
                continue;
            };
            events.push(GameEvent::MeteoriteShot {
                position: meteorite.position(),
            });
            let star = meteorite.destroy(config, &mut self.rng);
            self.registry.spawn(star);
        }
    }

    /// First still-live shot in `shots` overlapping the `T` at `target`.
    fn first_shot_hitting<T>(&self, target: EntityId, shots: &[EntityId]) -> Option<EntityId>
    where
        T: crate::registry::ActorKind + Circular,
    {
        let target = self.registry.get::<T>(target)?;
        shots.iter().copied().find(|&shot_id| {
            self.registry
                .get::<Shot>(shot_id)
                .is_some_and(|shot| shot.collides_with(target))
        })
    }

    fn resolve_orb_pickups(&mut self, config: &GameConfig, events: &mut Vec<GameEvent>) {
        let collected: Vec<EntityId> = self
            .registry
            .iter::<GoldOrb>()
            .filter(|(_, orb)| orb.is_drifting() && orb.is_collected_by(&self.player, config))
            .map(|(id, _)| id)
            .collect();

        for id in collected {
            if let Some(orb) = self.registry.take::<GoldOrb>(id) {
                let position = orb.position();
                let points = self.player.collect_orb(orb, config);
                events.push(GameEvent::OrbCollected { position, points });
            }
        }
    }

    fn resolve_star_pickups(&mut self, config: &GameConfig, events: &mut Vec<GameEvent>) {
        let reachable: Vec<EntityId> = self
            .registry
            .iter::<Star>()
            .filter(|(_, star)| star.is_collected_by(&self.player, config))
            .map(|(id, _)| id)
            .collect();

        for id in reachable {
            // A full inventory leaves the star where it is.
            if !self.player.can_hold_star(config) {
                break;
            }
            let Some(star) = self.registry.take::<Star>(id) else {
                continue;
            };
            let position = star.position();
            match self.player.collect_star(star, config) {
                Ok(()) => events.push(GameEvent::StarCollected { position }),
                Err(star) => {
                    self.registry.spawn(star);
                }
            }
        }
    }

    // ── Star power / debug surface ────────────────────────────────────────────

    /// Destroy every asteroid for orbs and pull every orb to the player.
    ///
    /// New orbs blink in first; orbs that were already drifting skip straight
    /// to the pull; orbs already blinking get the player as their target.
    pub fn vaporize(&mut self, config: &GameConfig) -> VaporizeReport {
        let target = self.player.position();

        for (_, orb) in self.registry.iter_mut::<GoldOrb>() {
            match orb.animation() {
                OrbAnimation::Normal => orb.start_pull_animation(target),
                OrbAnimation::Blinking { .. } | OrbAnimation::Pulling { .. } => {
                    orb.set_pull_target(target)
                }
            }
        }

        let mut report = VaporizeReport::default();
        for id in self.registry.ids::<Asteroid>() {
            let Some(asteroid) = self.registry.take::<Asteroid>(id) else {
                continue;
            };
            report.asteroids_destroyed += 1;
            for mut orb in asteroid.destroy_for_orbs(config, &mut self.rng) {
                orb.start_blink_animation();
                orb.set_pull_target(target);
                self.registry.spawn(orb);
                report.orbs_created += 1;
            }
        }
        report
    }

    pub fn spawn_orb_at_player(&mut self, config: &GameConfig) -> EntityId {
        let orb = GoldOrb::new(self.player.position(), config, &mut self.rng);
        self.registry.spawn(orb)
    }

    pub fn spawn_meteorite_at_player(&mut self, config: &GameConfig) -> EntityId {
        let meteorite = Meteorite::new(self.player.position(), config, &mut self.rng);
        self.registry.spawn(meteorite)
    }

    /// Spawn a stationary medium asteroid on top of the player.
    pub fn spawn_asteroid_at_player(&mut self, config: &GameConfig) -> EntityId {
        let asteroid = Asteroid::new(self.player.position(), config.asteroid_min_radius * 2.0);
        self.registry.spawn(asteroid)
    }

    pub fn add_points(&mut self, points: u32) {
        self.player.add_points(points);
    }

    /// Remove every entity except the player.
    pub fn clear_entities(&mut self) {
        self.registry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (GameSession, GameConfig) {
        let config = GameConfig::default();
        (GameSession::new(&config, 11), config)
    }

    fn idle() -> PlayerIntent {
        PlayerIntent::default()
    }

    #[test]
    fn shooting_a_small_asteroid_leaves_an_orb() {
        let (mut session, config) = session();
        let spot = Vec2::new(100.0, 100.0);
        session.spawn(Asteroid::new(spot, config.asteroid_min_radius));
        session.spawn(Shot::new(spot, Vec2::ZERO, &config));

        let events = session.step(0.0, &idle(), &config);

        assert_eq!(
            events,
            vec![GameEvent::AsteroidShot {
                position: spot,
                radius: config.asteroid_min_radius
            }]
        );
        assert_eq!(session.registry().count::<Asteroid>(), 0);
        assert_eq!(session.registry().count::<Shot>(), 0);
        assert_eq!(session.registry().count::<GoldOrb>(), 1);
    }

    #[test]
    fn one_shot_destroys_one_asteroid() {
        let (mut session, config) = session();
        let spot = Vec2::new(100.0, 100.0);
        session.spawn(Asteroid::new(spot, config.asteroid_min_radius));
        session.spawn(Asteroid::new(spot, config.asteroid_min_radius));
        session.spawn(Shot::new(spot, Vec2::ZERO, &config));

        session.step(0.0, &idle(), &config);

        assert_eq!(session.registry().count::<Asteroid>(), 1);
        assert_eq!(session.registry().count::<GoldOrb>(), 1);
    }

    #[test]
    fn shot_meteorite_becomes_a_blinking_star() {
        let (mut session, config) = session();
        let spot = Vec2::new(200.0, 150.0);
        session.spawn(Meteorite::with_heading(spot, Vec2::X, &config));
        session.spawn(Shot::new(spot, Vec2::ZERO, &config));

        let events = session.step(0.0, &idle(), &config);

        assert!(matches!(events[..], [GameEvent::MeteoriteShot { .. }]));
        let (_, star) = session
            .registry()
            .iter::<Star>()
            .next()
            .expect("meteorite leaves a star");
        assert!(matches!(
            star.animation(),
            crate::star::StarAnimation::Blinking { .. }
        ));
    }

    #[test]
    fn asteroid_touching_player_ends_the_session() {
        let (mut session, config) = session();
        let at = session.player().position();
        session.spawn(Asteroid::new(at, config.asteroid_min_radius));

        let events = session.step(0.0, &idle(), &config);

        assert!(session.is_over());
        assert_eq!(events, vec![GameEvent::PlayerHit { position: at }]);
        assert!(session.step(0.1, &idle(), &config).is_empty());
    }

    #[test]
    fn drifting_orb_near_player_is_collected() {
        let (mut session, config) = session();
        let at = session.player().position();
        session.spawn(GoldOrb::at_rest(at + Vec2::new(10.0, 0.0), &config));

        let events = session.step(0.0, &idle(), &config);

        assert_eq!(session.player().points(), config.points_per_orb);
        assert_eq!(session.registry().count::<GoldOrb>(), 0);
        assert!(matches!(events[..], [GameEvent::OrbCollected { points, .. }] if points == config.points_per_orb));
    }

    #[test]
    fn star_stays_put_when_inventory_is_full() {
        let (mut session, config) = session();
        let at = session.player().position();
        session.spawn(Star::new(at, &config, &mut StdRng::seed_from_u64(1)));
        session.spawn(Star::new(at, &config, &mut StdRng::seed_from_u64(2)));

        let events = session.step(0.0, &idle(), &config);

        assert_eq!(session.player().stars_collected(), 1);
        assert_eq!(session.registry().count::<Star>(), 1);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::StarCollected { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn star_power_without_a_star_does_nothing() {
        let (mut session, config) = session();
        session.spawn(Asteroid::new(Vec2::new(100.0, 100.0), 60.0));
        let intent = PlayerIntent {
            star_power: true,
            ..Default::default()
        };

        let events = session.step(0.0, &intent, &config);

        assert!(events.is_empty());
        assert_eq!(session.registry().count::<Asteroid>(), 1);
    }

    #[test]
    fn star_power_turns_every_asteroid_into_incoming_orbs() {
        let (mut session, config) = session();
        let at = session.player().position();
        session.spawn(Star::new(at, &config, &mut StdRng::seed_from_u64(3)));
        session.step(0.0, &idle(), &config);
        assert_eq!(session.player().stars_collected(), 1);

        let large = config.asteroid_min_radius * 3.0;
        session.spawn(Asteroid::new(Vec2::new(100.0, 100.0), large));
        session.spawn(GoldOrb::at_rest(Vec2::new(1100.0, 600.0), &config));

        let intent = PlayerIntent {
            star_power: true,
            ..Default::default()
        };
        let events = session.step(0.0, &intent, &config);

        assert_eq!(
            events,
            vec![GameEvent::StarPower {
                asteroids: 1,
                orbs: 7
            }]
        );
        assert!(!session.player().has_star_power());
        assert_eq!(session.player().stars_collected(), 0);
        assert_eq!(session.registry().count::<Asteroid>(), 0);
        assert_eq!(session.registry().count::<GoldOrb>(), 8);
        assert!(session
            .registry()
            .iter::<GoldOrb>()
            .all(|(_, orb)| orb.pull_target() == Some(at)));

        for _ in 0..15 {
            session.step(0.1, &idle(), &config);
        }
        assert_eq!(session.registry().count::<GoldOrb>(), 0);
        assert_eq!(session.player().points(), 8 * config.points_per_orb);
    }

    #[test]
    fn vaporize_keeps_animations_already_running() {
        let (mut session, config) = session();
        let at = session.player().position();

        let mut blinking = GoldOrb::at_rest(Vec2::new(200.0, 150.0), &config);
        blinking.start_blink_animation();
        blinking.update(0.1, &config);
        let blinking = session.spawn(blinking);

        let mut pulling = GoldOrb::at_rest(Vec2::new(900.0, 500.0), &config);
        pulling.start_pull_animation(Vec2::new(1000.0, 600.0));
        pulling.update(0.1, &config);
        let pulling = session.spawn(pulling);

        let report = session.vaporize(&config);
        assert_eq!(report, VaporizeReport::default());

        let orb = session.registry().get::<GoldOrb>(blinking).unwrap();
        assert!(matches!(orb.animation(), OrbAnimation::Blinking { elapsed } if elapsed > 0.0));
        assert_eq!(orb.pull_target(), Some(at));

        let orb = session.registry().get::<GoldOrb>(pulling).unwrap();
        assert!(matches!(
            orb.animation(),
            OrbAnimation::Pulling { elapsed, origin }
                if elapsed > 0.0 && origin == Vec2::new(900.0, 500.0)
        ));
        assert_eq!(orb.pull_target(), Some(at));

        let quiet = GameConfig {
            asteroid_spawn_rate: f32::MAX,
            meteorite_spawn_interval: f32::MAX,
            ..config.clone()
        };
        for _ in 0..20 {
            session.step(0.1, &idle(), &quiet);
        }
        assert_eq!(session.registry().count::<GoldOrb>(), 0);
        assert_eq!(session.player().points(), 2 * config.points_per_orb);
    }

    #[test]
    fn pull_target_follows_the_moving_player() {
        let (mut session, config) = session();
        let mut orb = GoldOrb::at_rest(Vec2::new(100.0, 100.0), &config);
        orb.start_pull_animation(session.player().position());
        let id = session.spawn(orb);

        let intent = PlayerIntent {
            forward: true,
            ..Default::default()
        };
        session.step(0.1, &intent, &config);

        let target = session
            .registry()
            .get::<GoldOrb>(id)
            .and_then(GoldOrb::pull_target)
            .expect("still pulling");
        assert_eq!(target, session.player().position());
    }

    #[test]
    fn debug_spawns_and_clear() {
        let (mut session, config) = session();
        session.spawn_orb_at_player(&config);
        session.spawn_meteorite_at_player(&config);
        let id = session.spawn_asteroid_at_player(&config);
        assert_eq!(
            session.registry().get::<Asteroid>(id).map(|asteroid| asteroid.radius()),
            Some(config.asteroid_min_radius * 2.0)
        );
        session.add_points(1000);
        assert_eq!(session.player().points(), 1000);

        session.clear_entities();
        assert!(session.registry().is_empty());
    }
}
