use super::*;
use crate::highscore::HighScores;

/// Spawn the game-over overlay centred over the frozen field.
///
/// Shows the final score, the high-score table, and the restart hint.
pub(super) fn setup_game_over(
    mut commands: Commands,
    final_score: Res<FinalScore>,
    scores: Res<HighScores>,
) {
    let lines = scores.display_lines();
    let filled = scores.entries().len();
    spawn_overlay(&mut commands, GameOverRoot, |card| {
        spawn_label(card, "GAME OVER", 46.0, title_color());
        spawn_label(card, format!("Score: {}", final_score.0), 20.0, subtitle_color());
        spawn_label(card, "HIGH SCORES", 24.0, entry_color());
        for (i, line) in lines.into_iter().enumerate() {
            let color = if i < filled {
                Color::WHITE
            } else {
                subtitle_color()
            };
            spawn_label(card, line, 18.0, color);
        }
        spawn_label(card, "Enter to play again  ·  Esc to quit", 12.0, hint_color());
    });
}

pub(super) fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    despawn_all(&mut commands, &query);
}

/// Enter starts a fresh session; Escape quits.
pub(super) fn game_over_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
    } else if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
