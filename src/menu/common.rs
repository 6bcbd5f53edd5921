use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

pub(super) fn title_color() -> Color {
    Color::srgb(1.0, 0.22, 0.22)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn entry_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}
pub(super) fn card_bg() -> Color {
    Color::srgb(0.06, 0.02, 0.02)
}
pub(super) fn card_border() -> Color {
    Color::srgb(0.55, 0.10, 0.10)
}

/// Full-screen dimmed overlay with a centred bordered card.  `content` fills
/// the card.
pub(super) fn spawn_overlay(
    commands: &mut Commands,
    root: impl Bundle,
    content: impl FnOnce(&mut ChildSpawnerCommands),
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            root,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(card_bg()),
                    BorderColor::all(card_border()),
                ))
                .with_children(content);
        });
}

pub(super) fn spawn_label(
    parent: &mut ChildSpawnerCommands,
    text: impl Into<String>,
    font_size: f32,
    color: Color,
) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    ));
}
