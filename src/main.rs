use bevy::prelude::*;
use bevy::window::WindowResolution;

use starfall::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use starfall::highscore::HighScores;
use starfall::{config, graphics, GamePlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Starfall".into(),
            resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }));

    // Read after DefaultPlugins so LogPlugin is already capturing, and before
    // the first frame so the initial OnEnter(Playing) sees the final values.
    let config = config::load_game_config();
    let high_scores = HighScores::load(config.high_score_file.as_str(), &config);

    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config)
        .insert_resource(high_scores)
        .add_systems(
            Startup,
            (graphics::setup_camera, graphics::apply_window_size),
        )
        .add_plugins(GamePlugin)
        .run();
}
