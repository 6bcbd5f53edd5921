//! Headless tests for the [`GameState`] machine and the session wiring.
//!
//! These tests use [`MinimalPlugins`] (no window, no rendering) so they run
//! fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `Playing`, and entering it starts a session.
//! 2. A hit with a qualifying score moves to `NameEntry`.
//! 3. A hit below the table moves to `GameOver`.
//! 4. `GameOver` → `Playing` starts a fresh session.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use starfall::asteroid::Asteroid;
use starfall::body::Circular;
use starfall::config::GameConfig;
use starfall::highscore::HighScores;
use starfall::menu::{FinalScore, GameState};
use starfall::session::GameSession;
use starfall::simulation::SimulationPlugin;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Minimal headless app with the state machine and the simulation plugin.
///
/// `ButtonInput<KeyCode>` is normally provided by `InputPlugin`; an empty one
/// is enough here because no keys are pressed.  `GameState` and `FinalScore`
/// belong to `MenuPlugin`, which needs a UI, so they are registered by hand.
fn app_with_scores(scores: &[(&str, u32)]) -> App {
    let config = GameConfig::default();
    let mut table = HighScores::empty(
        std::env::temp_dir().join("starfall-state-tests-unused.txt"),
        &config,
    );
    for (name, score) in scores {
        table.insert(name, *score);
    }

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.init_resource::<FinalScore>();
    app.insert_resource(config);
    app.insert_resource(table);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(SimulationPlugin);
    app
}

fn state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

/// Drop an asteroid on top of the ship so the next frame ends the session.
fn crash(app: &mut App) {
    let mut session = app.world_mut().resource_mut::<GameSession>();
    let at = session.player().position();
    session.spawn(Asteroid::new(at, 20.0));
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn starts_playing_with_a_session() {
    let mut app = app_with_scores(&[]);
    app.update();

    assert_eq!(state(&app), GameState::Playing);
    let session = app.world().resource::<GameSession>();
    assert!(!session.is_over());
    assert_eq!(session.player().points(), 0);
}

#[test]
fn qualifying_score_goes_to_name_entry() {
    let mut app = app_with_scores(&[("Ann", 500)]);
    app.update();

    app.world_mut().resource_mut::<GameSession>().add_points(40);
    crash(&mut app);
    app.update(); // session ends, next state requested
    app.update(); // StateTransition applies it

    assert_eq!(state(&app), GameState::NameEntry);
    assert_eq!(app.world().resource::<FinalScore>().0, 40);
}

#[test]
fn low_score_goes_to_game_over() {
    let mut app = app_with_scores(&[("Ann", 500), ("Bob", 450), ("Cara", 300)]);
    app.update();

    crash(&mut app);
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::GameOver);
    assert_eq!(app.world().resource::<FinalScore>().0, 0);
}

#[test]
fn restarting_builds_a_fresh_session() {
    let mut app = app_with_scores(&[("Ann", 500), ("Bob", 450), ("Cara", 300)]);
    app.update();
    crash(&mut app);
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::GameOver);
    assert!(app.world().resource::<GameSession>().is_over());

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();

    assert_eq!(state(&app), GameState::Playing);
    let session = app.world().resource::<GameSession>();
    assert!(!session.is_over());
    assert!(session.registry().is_empty(), "the crash site is gone");
}

#[test]
fn game_over_persists_without_input() {
    let mut app = app_with_scores(&[("Ann", 500), ("Bob", 450), ("Cara", 300)]);
    app.update();
    crash(&mut app);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(state(&app), GameState::GameOver);
}
