//! Simulation plugin: drives [`GameSession`] from Bevy's frame loop.
//!
//! | System                       | Schedule                | Purpose                                  |
//! |------------------------------|-------------------------|------------------------------------------|
//! | `start_session`              | `OnEnter(Playing)`      | Fresh session with the player centred    |
//! | `keyboard_to_intent_system`  | `Update / in Playing`   | Keys → [`PlayerIntent`]                  |
//! | `debug_command_system`       | `Update / in Playing`   | Debug keys (when enabled)                |
//! | `session_step_system`        | `Update / in Playing`   | Advance one frame, forward [`GameEvent`]s|
//! | `session_over_system`        | `Update / in Playing`   | Leave `Playing` once the ship is hit     |
//!
//! The plugin needs no window or renderer, so headless tests can add it on
//! top of `MinimalPlugins`.

use crate::config::GameConfig;
use crate::debug_commands::{debug_command_system, DebugCommands};
use crate::highscore::HighScores;
use crate::menu::{FinalScore, GameState};
use crate::player::{keyboard_to_intent_system, PlayerIntent};
use crate::session::{GameEvent, GameSession};
use bevy::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerIntent>()
            .init_resource::<DebugCommands>()
            .add_message::<GameEvent>()
            .add_systems(OnEnter(GameState::Playing), start_session)
            .add_systems(
                Update,
                (
                    keyboard_to_intent_system,
                    debug_command_system,
                    session_step_system,
                    session_over_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Replace whatever session came before with a fresh one.
pub fn start_session(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut intent: ResMut<PlayerIntent>,
) {
    *intent = PlayerIntent::default();
    commands.insert_resource(GameSession::from_entropy(&config));
    info!("New session started");
}

pub fn session_step_system(
    time: Res<Time>,
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
    mut session: ResMut<GameSession>,
    mut events: MessageWriter<GameEvent>,
) {
    for event in session.step(time.delta_secs(), &intent, &config) {
        events.write(event);
    }
}

/// Once the ship is hit, record the score and pick the next screen.
pub fn session_over_system(
    session: Res<GameSession>,
    scores: Res<HighScores>,
    mut final_score: ResMut<FinalScore>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !session.is_over() {
        return;
    }
    let points = session.player().points();
    final_score.0 = points;
    next_state.set(next_state_after(points, &scores));
}

/// `NameEntry` for a qualifying score, `GameOver` otherwise.
pub fn next_state_after(points: u32, scores: &HighScores) -> GameState {
    if scores.is_high_score(points) {
        GameState::NameEntry
    } else {
        GameState::GameOver
    }
}
