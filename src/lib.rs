//! Starfall: a single-screen arcade game.
//!
//! The ship survives asteroid waves, shoots asteroids into gold orbs and
//! meteorites into stars, and spends stars to vaporize the whole field.
//!
//! The game rules live in plain Rust types ([`session::GameSession`] and the
//! entity modules) with no Bevy ECS involvement, so they can be stepped and
//! tested directly.  Bevy supplies the frame loop, input, drawing and UI
//! through the plugins collected in [`GamePlugin`].

pub mod asteroid;
pub mod body;
pub mod config;
pub mod constants;
pub mod debug_commands;
pub mod error;
pub mod field;
pub mod graphics;
pub mod highscore;
pub mod menu;
pub mod meteorite;
pub mod orb;
pub mod player;
pub mod registry;
pub mod rendering;
pub mod session;
pub mod shot;
pub mod simulation;
pub mod star;

use bevy::prelude::*;

/// Everything the game adds on top of `DefaultPlugins`.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // MenuPlugin registers GameState; it must come first.
        app.add_plugins(menu::MenuPlugin)
            .add_plugins(simulation::SimulationPlugin)
            .add_plugins(rendering::RenderingPlugin);
    }
}
