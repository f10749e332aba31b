//! Core types: cards, symbols, deterministic RNG, and the clock capability.
//!
//! These are the building blocks the engine is assembled from. Games
//! configure the symbol set via `SymbolRegistry` rather than modifying the
//! core.

pub mod card;
pub mod clock;
pub mod rng;
pub mod symbol;

pub use card::{Card, CardFace, CardId};
pub use clock::{Clock, ManualClock, SystemClock};
pub use rng::{GameRng, GameRngState};
pub use symbol::{dinosaur_set, SymbolDefinition, SymbolId, SymbolRegistry};
