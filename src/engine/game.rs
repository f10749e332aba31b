//! The game state machine.
//!
//! `GameEngine` owns the deck, the current selection, the pending mismatch
//! revert, and the matched-pair count. It accepts input as [`flip`] calls,
//! resolves completed pairs synchronously, and reports every state change to
//! its injected [`View`].
//!
//! ## Turn cycle
//!
//! `Idle` -> `OneSelected` -> `Resolving` -> `Idle`, or `Won` once the last
//! pair matches. A matched pair resolves synchronously inside the second
//! `flip`. A mismatched pair stays face-up and locks the board until the
//! reveal delay elapses; the host drains the revert with
//! [`process_pending`], typically from its event loop or a timer scheduled
//! at [`pending_deadline`].
//!
//! [`flip`]: GameEngine::flip
//! [`process_pending`]: GameEngine::process_pending
//! [`pending_deadline`]: GameEngine::pending_deadline

use std::time::{Duration, Instant};

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, CardId};
use crate::core::clock::{Clock, SystemClock};
use crate::core::rng::GameRng;
use crate::core::symbol::{SymbolId, SymbolRegistry};
use crate::engine::builder::GameBuilder;
use crate::view::View;

/// Where the engine sits in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No cards selected.
    Idle,
    /// One card face-up, awaiting its partner.
    OneSelected,
    /// A mismatched pair is face-up, waiting out the reveal delay.
    Resolving,
    /// Every pair is matched. Only `reset` leaves this phase.
    Won,
}

/// A resolved selection pair, recorded at comparison time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    /// The two selected cards, in flip order.
    pub cards: [CardId; 2],

    /// Their symbols, in the same order.
    pub symbols: [SymbolId; 2],

    /// Whether the symbols were equal.
    pub matched: bool,
}

/// A mismatched pair waiting to be flipped back down.
#[derive(Clone, Copy, Debug)]
struct PendingRevert {
    cards: [CardId; 2],
    deadline: Instant,
}

/// The authoritative game state machine.
///
/// Generic over its two collaborators: the `View` that draws the board and
/// the `Clock` that times the mismatch reveal. Construct through
/// [`GameBuilder`], or [`GameEngine::new`] for the stock configuration.
pub struct GameEngine<V: View, C: Clock = SystemClock> {
    symbols: SymbolRegistry,
    deck: Vec<Card>,
    /// Card id -> deck position, rebuilt after every shuffle.
    index: FxHashMap<CardId, usize>,
    /// Face-up, unresolved cards. At most two.
    selection: SmallVec<[CardId; 2]>,
    /// Present exactly while a mismatched pair waits out the reveal delay.
    /// Doubles as the flip lock.
    pending: Option<PendingRevert>,
    matched_pairs: usize,
    history: Vector<ResolutionRecord>,
    mismatch_delay: Duration,
    rng: GameRng,
    view: V,
    clock: C,
}

impl<V: View> GameEngine<V, SystemClock> {
    /// Create an engine with the stock dinosaur set, the wall clock, an
    /// entropy seed, and the standard one-second reveal delay.
    #[must_use]
    pub fn new(view: V) -> Self {
        GameBuilder::new().build(view)
    }
}

impl<V: View, C: Clock> GameEngine<V, C> {
    pub(crate) fn from_parts(
        symbols: SymbolRegistry,
        mismatch_delay: Duration,
        rng: GameRng,
        view: V,
        clock: C,
    ) -> Self {
        let mut engine = Self {
            symbols,
            deck: Vec::new(),
            index: FxHashMap::default(),
            selection: SmallVec::new(),
            pending: None,
            matched_pairs: 0,
            history: Vector::new(),
            mismatch_delay,
            rng,
            view,
            clock,
        };
        engine.initialize();
        engine
    }

    /// Build a fresh shuffled deck and notify the view.
    ///
    /// Two cards per symbol, ids assigned sequentially before the shuffle so
    /// a card's id says nothing about its position.
    fn initialize(&mut self) {
        self.deck.clear();
        for def in self.symbols.iter() {
            for _ in 0..2 {
                let id = CardId::new(self.deck.len() as u32);
                self.deck.push(Card::new(id, def.id));
            }
        }
        self.rng.shuffle(&mut self.deck);

        self.index.clear();
        for (pos, card) in self.deck.iter().enumerate() {
            self.index.insert(card.id, pos);
        }

        self.selection.clear();
        self.pending = None;
        self.matched_pairs = 0;
        self.history.clear();
        self.view.render(&self.deck, &self.symbols);
    }

    /// Reveal a card.
    ///
    /// Returns `true` if the flip was accepted. Rejected flips are silent
    /// no-ops: while a mismatch revert is pending, for ids the deck does not
    /// contain, and for cards already face-up or matched. Completing a pair
    /// resolves it before this call returns.
    pub fn flip(&mut self, card: CardId) -> bool {
        if self.pending.is_some() {
            log::debug!("{card} flip ignored: resolution in progress");
            return false;
        }
        if self.selection.len() >= 2 {
            log::debug!("{card} flip ignored: selection full");
            return false;
        }
        let pos = match self.index.get(&card) {
            Some(&pos) => pos,
            None => {
                log::debug!("{card} flip ignored: no such card");
                return false;
            }
        };
        if self.deck[pos].face_up || self.deck[pos].matched {
            log::debug!("{card} flip ignored: already revealed");
            return false;
        }

        self.deck[pos].face_up = true;
        self.selection.push(card);
        self.view.render(&self.deck, &self.symbols);

        if self.selection.len() == 2 {
            self.resolve();
        }
        true
    }

    /// Compare the completed selection pair.
    ///
    /// A match resolves here and now; a mismatch arms the pending revert and
    /// leaves both cards face-up until [`process_pending`] drains it.
    ///
    /// [`process_pending`]: GameEngine::process_pending
    fn resolve(&mut self) {
        let (first, second) = (self.selection[0], self.selection[1]);
        let (a, b) = (self.index[&first], self.index[&second]);
        let matched = self.deck[a].symbol == self.deck[b].symbol;

        self.history.push_back(ResolutionRecord {
            cards: [first, second],
            symbols: [self.deck[a].symbol, self.deck[b].symbol],
            matched,
        });

        if matched {
            self.deck[a].matched = true;
            self.deck[b].matched = true;
            self.matched_pairs += 1;
            self.selection.clear();
            self.view.render(&self.deck, &self.symbols);

            if self.matched_pairs == self.symbols.len() {
                self.view.announce_win();
            }
        } else {
            self.pending = Some(PendingRevert {
                cards: [first, second],
                deadline: self.clock.now() + self.mismatch_delay,
            });
        }
    }

    /// Drain an elapsed mismatch revert.
    ///
    /// Flips the mismatched pair back down once the reveal delay has passed,
    /// then unlocks and re-renders. Returns `true` when a revert ran. Safe
    /// to call at any time; does nothing before the deadline or when no
    /// revert is pending.
    pub fn process_pending(&mut self) -> bool {
        let pending = match self.pending {
            Some(p) if self.clock.now() >= p.deadline => p,
            _ => return false,
        };

        for card in pending.cards {
            let pos = self.index[&card];
            self.deck[pos].face_up = false;
        }
        self.selection.clear();
        self.pending = None;
        self.view.render(&self.deck, &self.symbols);
        true
    }

    /// Start a fresh game: new shuffled deck, cleared counters.
    ///
    /// A pending mismatch revert is cancelled outright, so a stale revert
    /// can never flip cards of the new deck. The view is told to clear any
    /// win indicator before the fresh board is rendered.
    pub fn reset(&mut self) {
        self.view.clear_win();
        self.initialize();
    }

    // === State access ===

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&pos| &self.deck[pos])
    }

    /// The face-up, unresolved cards in flip order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Whether flips are currently rejected pending a mismatch revert.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// Pairs matched so far this game.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Whether every pair has been matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.symbols.len()
    }

    /// Current position in the turn cycle.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else if self.pending.is_some() {
            Phase::Resolving
        } else if self.selection.len() == 1 {
            Phase::OneSelected
        } else {
            Phase::Idle
        }
    }

    /// When the pending mismatch revert is due, if one is armed.
    ///
    /// Hosts can schedule a one-shot timer for this instant instead of
    /// polling [`process_pending`](GameEngine::process_pending).
    #[must_use]
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Resolved pairs this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ResolutionRecord> {
        &self.history
    }

    /// The symbol set this game was built with.
    #[must_use]
    pub fn symbols(&self) -> &SymbolRegistry {
        &self.symbols
    }

    /// The reveal delay for mismatched pairs.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    /// The injected view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The injected view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The injected clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
