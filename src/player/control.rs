//! Keyboard → [`PlayerIntent`] translation.
//!
//! [`keyboard_to_intent_system`] rewrites the whole intent every frame, then
//! `session_step_system` (in [`crate::simulation`]) consumes it.

use super::state::PlayerIntent;
use bevy::prelude::*;

/// Translate held keys into [`PlayerIntent`].
///
/// - **A / ←** rotate left, **D / →** rotate right
/// - **W / ↑** forward, **S / ↓** backward
/// - **Space** shoot (held)
/// - **F** spend a star (on press)
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<PlayerIntent>) {
    *intent = intent_from_keys(&keys);
}

pub fn intent_from_keys(keys: &ButtonInput<KeyCode>) -> PlayerIntent {
    let any = |codes: [KeyCode; 2]| keys.any_pressed(codes);
    PlayerIntent {
        rotate_left: any([KeyCode::KeyA, KeyCode::ArrowLeft]),
        rotate_right: any([KeyCode::KeyD, KeyCode::ArrowRight]),
        forward: any([KeyCode::KeyW, KeyCode::ArrowUp]),
        backward: any([KeyCode::KeyS, KeyCode::ArrowDown]),
        shoot: keys.pressed(KeyCode::Space),
        star_power: keys.just_pressed(KeyCode::KeyF),
    }
}
