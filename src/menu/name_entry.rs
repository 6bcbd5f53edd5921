use super::*;
use crate::config::GameConfig;
use crate::highscore::HighScores;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;

/// What a key press did to the name being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEntryAction {
    Editing,
    Submit,
    Skip,
}

/// Apply one logical key to `name`.
///
/// Printable characters append up to `max_len`, Backspace deletes, Enter
/// submits a name with at least one visible character, Escape skips saving.
pub fn apply_name_key(name: &mut String, key: &Key, max_len: usize) -> NameEntryAction {
    match key {
        Key::Enter if !name.trim().is_empty() => NameEntryAction::Submit,
        Key::Escape => NameEntryAction::Skip,
        Key::Backspace => {
            name.pop();
            NameEntryAction::Editing
        }
        Key::Space => {
            push_printable(name, ' ', max_len);
            NameEntryAction::Editing
        }
        Key::Character(text) => {
            for c in text.chars() {
                push_printable(name, c, max_len);
            }
            NameEntryAction::Editing
        }
        _ => NameEntryAction::Editing,
    }
}

fn push_printable(name: &mut String, c: char, max_len: usize) {
    if !c.is_control() && c != ',' && name.chars().count() < max_len {
        name.push(c);
    }
}

pub(super) fn setup_name_entry(
    mut commands: Commands,
    final_score: Res<FinalScore>,
    mut pending: ResMut<PendingName>,
) {
    pending.0.clear();
    spawn_overlay(&mut commands, NameEntryRoot, |card| {
        spawn_label(card, "NEW HIGH SCORE!", 46.0, entry_color());
        spawn_label(card, format!("Score: {}", final_score.0), 20.0, subtitle_color());
        spawn_label(card, "Enter your name:", 18.0, subtitle_color());
        card.spawn((
            Text::new("_"),
            TextFont {
                font_size: 32.0,
                ..default()
            },
            TextColor(entry_color()),
            NameEntryText,
        ));
        spawn_label(card, "Enter to save  ·  Esc to skip", 12.0, hint_color());
    });
}

pub(super) fn cleanup_name_entry(
    mut commands: Commands,
    query: Query<Entity, With<NameEntryRoot>>,
) {
    despawn_all(&mut commands, &query);
}

pub(super) fn name_entry_input_system(
    mut keyboard: MessageReader<KeyboardInput>,
    mut pending: ResMut<PendingName>,
    final_score: Res<FinalScore>,
    mut scores: ResMut<HighScores>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for input in keyboard.read() {
        if input.state != ButtonState::Pressed {
            continue;
        }
        match apply_name_key(&mut pending.0, &input.logical_key, config.max_name_length) {
            NameEntryAction::Editing => {}
            NameEntryAction::Submit => {
                scores.add_score(&pending.0, final_score.0);
                next_state.set(GameState::GameOver);
                return;
            }
            NameEntryAction::Skip => {
                info!("High score entry skipped");
                next_state.set(GameState::GameOver);
                return;
            }
        }
    }
}

pub(super) fn name_entry_display_system(
    pending: Res<PendingName>,
    mut query: Query<&mut Text, With<NameEntryText>>,
) {
    if !pending.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        *text = Text::new(format!("{}_", pending.0));
    }
}
