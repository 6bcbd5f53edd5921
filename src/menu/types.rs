use bevy::prelude::*;

/// Top-level application state machine.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Active session; shown on startup.
    #[default]
    Playing,
    /// Session over with a qualifying score; the player types a name.
    NameEntry,
    /// Session over; high-score table shown.
    GameOver,
}

/// Points the last session ended with.  Written when the session ends, read
/// by both end-of-game screens.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinalScore(pub u32);

/// Name being typed on the name-entry screen.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingName(pub String);

/// Root node of the name-entry overlay; despawned on `OnExit(NameEntry)`.
#[derive(Component)]
pub struct NameEntryRoot;

/// Tags the text node echoing [`PendingName`].
#[derive(Component)]
pub struct NameEntryText;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;
