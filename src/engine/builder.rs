//! Game configuration.
//!
//! `GameBuilder` collects the symbol set, the mismatch reveal delay, and the
//! RNG seed, then builds a shuffled, already-rendered engine around the
//! caller's view and clock.

use std::time::Duration;

use crate::core::clock::{Clock, SystemClock};
use crate::core::rng::GameRng;
use crate::core::symbol::{dinosaur_set, SymbolRegistry};
use crate::engine::game::GameEngine;
use crate::view::View;

/// Builder for creating a [`GameEngine`].
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::{GameBuilder, NullView, SymbolRegistry};
///
/// let mut symbols = SymbolRegistry::new();
/// symbols.register("Sun", "\u{2600}");
/// symbols.register("Moon", "\u{263D}");
///
/// let game = GameBuilder::new()
///     .symbols(symbols)
///     .mismatch_delay(Duration::from_millis(500))
///     .seed(7)
///     .build(NullView);
///
/// assert_eq!(game.cards().len(), 4);
/// ```
pub struct GameBuilder {
    symbols: SymbolRegistry,
    mismatch_delay: Duration,
    seed: Option<u64>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            symbols: dinosaur_set(),
            mismatch_delay: Duration::from_millis(1000),
            seed: None,
        }
    }
}

impl GameBuilder {
    /// Start from the defaults: the dinosaur set, a one-second reveal delay,
    /// and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom symbol set. The deck holds two cards per symbol.
    #[must_use]
    pub fn symbols(mut self, symbols: SymbolRegistry) -> Self {
        assert!(!symbols.is_empty(), "Symbol set must not be empty");
        self.symbols = symbols;
        self
    }

    /// How long a mismatched pair stays revealed before flipping back.
    #[must_use]
    pub fn mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Seed the shuffle RNG for reproducible decks.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine on the wall clock.
    pub fn build<V: View>(self, view: V) -> GameEngine<V> {
        self.build_with_clock(view, SystemClock)
    }

    /// Build the engine on a caller-supplied clock.
    pub fn build_with_clock<V: View, C: Clock>(self, view: V, clock: C) -> GameEngine<V, C> {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        GameEngine::from_parts(self.symbols, self.mismatch_delay, rng, view, clock)
    }
}
