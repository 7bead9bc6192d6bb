//! Deck lists and the editor seam used to commit imports.

pub mod card;
pub mod editor;

pub use card::{Deck, DeckCard};
pub use editor::{DeckEditor, InMemoryDeckEditor};
