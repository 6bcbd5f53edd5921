//! End-of-game screens: `GameState` definition and `MenuPlugin`.
//!
//! ## States
//!
//! | State       | Description                                         |
//! |-------------|-----------------------------------------------------|
//! | `Playing`   | Initial state; the session steps every frame        |
//! | `NameEntry` | Session over with a new high score; typing a name   |
//! | `GameOver`  | Top scores shown; Enter starts a fresh session      |
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                   | Schedule               | Purpose                       |
//! |--------------------------|------------------------|-------------------------------|
//! | `setup_name_entry`       | `OnEnter(NameEntry)`   | Spawn the name prompt         |
//! | `name_entry_input_system`| `Update / in NameEntry`| Edit, save or skip the name   |
//! | `setup_game_over`        | `OnEnter(GameOver)`    | Spawn the high-score table    |
//! | `game_over_input_system` | `Update / in GameOver` | Enter restarts, Esc quits     |
//!
//! Both overlays are despawned on exit from their state.

use bevy::prelude::*;

mod cleanup;
mod common;
mod game_over;
mod name_entry;
mod types;

use cleanup::*;
use common::*;
use game_over::*;
use name_entry::*;

pub use name_entry::{apply_name_key, NameEntryAction};
pub use types::*;

/// Registers `GameState` and both end-of-game overlays.
///
/// Must be added before any plugin that calls
/// `.run_if(in_state(GameState::Playing))`.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<PendingName>()
            .init_resource::<FinalScore>()
            .add_systems(OnEnter(GameState::NameEntry), setup_name_entry)
            .add_systems(OnExit(GameState::NameEntry), cleanup_name_entry)
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over)
            .add_systems(
                Update,
                (
                    name_entry_input_system.run_if(in_state(GameState::NameEntry)),
                    name_entry_display_system.run_if(in_state(GameState::NameEntry)),
                    game_over_input_system.run_if(in_state(GameState::GameOver)),
                ),
            );
    }
}
