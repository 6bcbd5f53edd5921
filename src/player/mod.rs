//! Player module: ship state and keyboard input.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | [`Player`] (position, heading, cooldown, score, star inventory) and the [`PlayerIntent`] resource |
//! | [`control`] | Keyboard → `PlayerIntent` translation |
//!
//! Drawing the ship lives with the other entity renderers in
//! [`crate::rendering`].

pub mod control;
pub mod state;

pub use control::{intent_from_keys, keyboard_to_intent_system};
pub use state::{Player, PlayerIntent};
