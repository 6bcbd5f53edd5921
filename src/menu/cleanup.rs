use super::*;

/// Despawn every overlay root matched by `query`, children included.
pub(super) fn despawn_all<F: bevy::ecs::query::QueryFilter>(
    commands: &mut Commands,
    query: &Query<Entity, F>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
