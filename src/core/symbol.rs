//! Symbols: the matching criterion shared by exactly two cards.
//!
//! The engine never interprets symbols; it only compares them. Names and
//! display glyphs exist for views. Games supply their own set through
//! `SymbolRegistry` or use the stock [`dinosaur_set`].

use serde::{Deserialize, Serialize};

/// Identifier for a symbol in a [`SymbolRegistry`].
///
/// Ids are dense: the registry allocates them sequentially from zero, so a
/// `SymbolId` doubles as an index into the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Registry index for this id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Static data for one symbol: a name and the glyph a view draws for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    /// Registry-assigned identifier.
    pub id: SymbolId,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// What a view draws on the card front.
    pub glyph: String,
}

/// Registry of symbol definitions with id-indexed lookup.
///
/// Backed by a `Vec` because ids are dense and allocated by the registry
/// itself. Iteration order is id order, which keeps deck construction
/// deterministic for a given seed.
///
/// ## Example
///
/// ```
/// use memory_match::SymbolRegistry;
///
/// let mut symbols = SymbolRegistry::new();
/// let sun = symbols.register("Sun", "\u{2600}");
/// let moon = symbols.register("Moon", "\u{263D}");
///
/// assert_eq!(symbols.len(), 2);
/// assert_eq!(symbols.get(sun).unwrap().name, "Sun");
/// assert_eq!(symbols.glyph(moon), Some("\u{263D}"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRegistry {
    symbols: Vec<SymbolDefinition>,
}

impl SymbolRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol and return its assigned id.
    ///
    /// Panics if the registry is full (ids are `u8`).
    pub fn register(&mut self, name: impl Into<String>, glyph: impl Into<String>) -> SymbolId {
        assert!(
            self.symbols.len() <= usize::from(u8::MAX),
            "Symbol registry is full"
        );
        let id = SymbolId::new(self.symbols.len() as u8);
        self.symbols.push(SymbolDefinition {
            id,
            name: name.into(),
            glyph: glyph.into(),
        });
        id
    }

    /// Get a symbol definition by id.
    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&SymbolDefinition> {
        self.symbols.get(id.index())
    }

    /// Get a symbol's glyph by id.
    #[must_use]
    pub fn glyph(&self, id: SymbolId) -> Option<&str> {
        self.get(id).map(|def| def.glyph.as_str())
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: SymbolId) -> bool {
        id.index() < self.symbols.len()
    }

    /// Number of registered symbols. One pair of cards exists per symbol.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over all definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolDefinition> {
        self.symbols.iter()
    }

    /// Iterate over all ids in order.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().map(|def| def.id)
    }
}

/// The stock four-species dinosaur set.
#[must_use]
pub fn dinosaur_set() -> SymbolRegistry {
    let mut symbols = SymbolRegistry::new();
    symbols.register("T-Rex", "\u{1F996}");
    symbols.register("Sauropod", "\u{1F995}");
    symbols.register("Triceratops", "\u{1F98E}");
    symbols.register("Pterodactyl", "\u{1F985}");
    symbols
}
