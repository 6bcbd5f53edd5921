//! Debug command layer.
//!
//! Off by default; **U** toggles it.  While enabled:
//!
//! | Key     | Command                                  |
//! |---------|------------------------------------------|
//! | E       | vaporize every asteroid into pulled orbs |
//! | G / 1   | spawn a gold orb on the ship             |
//! | M / 2   | spawn a meteorite on the ship            |
//! | A / 4   | spawn a medium asteroid on the ship      |
//! | P / 5   | add bonus points                         |
//! | C / 6   | clear every non-player entity            |

use crate::config::GameConfig;
use crate::session::GameSession;
use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugCommands {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCommand {
    Vaporize,
    SpawnOrb,
    SpawnMeteorite,
    SpawnAsteroid,
    AddPoints,
    ClearEntities,
}

impl DebugCommand {
    const BINDINGS: [(DebugCommand, &'static [KeyCode]); 6] = [
        (DebugCommand::Vaporize, &[KeyCode::KeyE]),
        (DebugCommand::SpawnOrb, &[KeyCode::KeyG, KeyCode::Digit1]),
        (DebugCommand::SpawnMeteorite, &[KeyCode::KeyM, KeyCode::Digit2]),
        (DebugCommand::SpawnAsteroid, &[KeyCode::KeyA, KeyCode::Digit4]),
        (DebugCommand::AddPoints, &[KeyCode::KeyP, KeyCode::Digit5]),
        (DebugCommand::ClearEntities, &[KeyCode::KeyC, KeyCode::Digit6]),
    ];

    /// Commands whose key went down this frame.
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Vec<DebugCommand> {
        Self::BINDINGS
            .iter()
            .filter(|(_, codes)| keys.any_just_pressed(codes.iter().copied()))
            .map(|(command, _)| *command)
            .collect()
    }
}

/// Run one command against the session.
pub fn apply(session: &mut GameSession, command: DebugCommand, config: &GameConfig) {
    match command {
        DebugCommand::Vaporize => {
            let report = session.vaporize(config);
            info!(
                "Debug: vaporized {} asteroids into {} orbs",
                report.asteroids_destroyed, report.orbs_created
            );
        }
        DebugCommand::SpawnOrb => {
            session.spawn_orb_at_player(config);
        }
        DebugCommand::SpawnMeteorite => {
            session.spawn_meteorite_at_player(config);
        }
        DebugCommand::SpawnAsteroid => {
            session.spawn_asteroid_at_player(config);
        }
        DebugCommand::AddPoints => session.add_points(config.debug_bonus_points),
        DebugCommand::ClearEntities => {
            session.clear_entities();
            info!("Debug: cleared all entities");
        }
    }
}

pub fn debug_command_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut debug: ResMut<DebugCommands>,
    mut session: ResMut<GameSession>,
    config: Res<GameConfig>,
) {
    if keys.just_pressed(KeyCode::KeyU) {
        debug.enabled = !debug.enabled;
        let state = if debug.enabled { "enabled" } else { "disabled" };
        info!("Debug commands {}", state);
    }
    if !debug.enabled {
        return;
    }
    for command in DebugCommand::from_keys(&keys) {
        apply(&mut session, command, &config);
    }
}
