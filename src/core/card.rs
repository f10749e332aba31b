//! Cards: per-deck flip state.
//!
//! A `Card` pairs a stable id with a symbol and the two flags that drive the
//! game: `face_up` and `matched`. Cards are rebuilt wholesale on every
//! shuffle; ids are dense and only meaningful within one deck generation.

use serde::{Deserialize, Serialize};

use super::symbol::SymbolId;

/// Unique identifier for a card within one deck generation.
///
/// Ids are allocated sequentially from zero when the deck is built, so they
/// are dense. A reshuffle rebuilds the deck and reassigns ids.
///
/// ```
/// use memory_match::CardId;
///
/// let id = CardId::new(3);
/// assert_eq!(id.raw(), 3);
/// assert_eq!(format!("{}", id), "Card(3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The visible face of a card, as a view should draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// Face-down. Draw the blank back.
    Down,
    /// Revealed. Draw the symbol's glyph.
    Up(SymbolId),
}

/// A card in the deck.
///
/// Matched cards keep `face_up == true`. The engine maintains that invariant;
/// `face()` nonetheless checks both flags so a view can never draw a matched
/// card face-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable id for this deck generation.
    pub id: CardId,

    /// The matching criterion shared with exactly one other card.
    pub symbol: SymbolId,

    /// Face-up, as part of the current selection or because matched.
    pub face_up: bool,

    /// Resolved as half of a matched pair.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// The face a view should draw.
    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.face_up || self.matched {
            CardFace::Up(self.symbol)
        } else {
            CardFace::Down
        }
    }

    /// Check whether the card is still in play (not yet matched).
    #[must_use]
    pub fn in_play(&self) -> bool {
        !self.matched
    }
}
