//! Camera and coordinate mapping.
//!
//! The session works in screen space: origin at the top-left corner, y
//! growing downward.  Bevy's 2D camera is centred on the origin with y
//! growing upward, so everything drawn goes through [`to_world`].

use crate::config::GameConfig;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("Camera spawned");
}

/// Match the primary window to the configured playfield size.
pub fn apply_window_size(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
) {
    if let Ok(mut window) = windows.single_mut() {
        window
            .resolution
            .set(config.screen_width, config.screen_height);
    }
}

/// Screen-space point → Bevy world point.
#[inline]
pub fn to_world(screen: Vec2, config: &GameConfig) -> Vec2 {
    Vec2::new(
        screen.x - config.screen_width / 2.0,
        config.screen_height / 2.0 - screen.y,
    )
}

/// Screen-space direction → Bevy world direction.
#[inline]
pub fn dir_to_world(dir: Vec2) -> Vec2 {
    Vec2::new(dir.x, -dir.y)
}
