//! # memory-match
//!
//! A memory-matching (concentration) card game engine. A fixed set of paired
//! symbols is shuffled into a face-down deck; the player reveals two cards at
//! a time; matches stay revealed, mismatches flip back after a delay, and
//! revealing every pair wins.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the rules, collaborators own the surfaces.** Rendering
//!    and time are constructor-injected traits (`View`, `Clock`). The engine
//!    never touches a UI or the wall clock directly, so it runs headless in
//!    tests and simulations.
//!
//! 2. **Deferred work is state, not callbacks.** The mismatch reveal delay
//!    is an explicit deadline drained by `process_pending`, which keeps the
//!    engine single-threaded and deterministic under a test clock.
//!
//! 3. **Configuration over convention.** The symbol set, reveal delay, and
//!    seed come from `GameBuilder`; nothing beyond the defaults is
//!    hardcoded.
//!
//! ## Modules
//!
//! - `core`: cards, symbols, deterministic RNG, clock capability
//! - `engine`: builder and the game state machine
//! - `view`: the render/win notification contract and stock implementations
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameBuilder, NullView};
//!
//! let mut game = GameBuilder::new().seed(7).build(NullView);
//! assert_eq!(game.cards().len(), 8); // four symbols, two cards each
//!
//! let first = game.cards()[0].id;
//! assert!(game.flip(first));
//! assert_eq!(game.selection(), &[first]);
//! assert!(!game.flip(first)); // already face-up: ignored
//! ```

pub mod core;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    dinosaur_set, Card, CardFace, CardId, Clock, GameRng, GameRngState, ManualClock,
    SymbolDefinition, SymbolId, SymbolRegistry, SystemClock,
};

pub use crate::engine::{GameBuilder, GameEngine, Phase, ResolutionRecord};

pub use crate::view::{NullView, RecordingView, View};
