//! Deck size and copy limits.

/// Exact size of a legal main deck.
pub const MAIN_DECK_SIZE: usize = 40;

/// Maximum size of a legal LRIG deck.
pub const LRIG_DECK_MAX: usize = 10;

/// Main deck size an editor or import will hold.
pub const MAIN_DECK_SOFT_CAP: usize = 50;

/// LRIG deck size an editor or import will hold.
pub const LRIG_DECK_SOFT_CAP: usize = 20;

/// Copies allowed per canonical card.
pub const MAX_COPIES: usize = 4;

/// Life burst cards required in a legal main deck.
pub const BURST_COUNT: usize = 20;
