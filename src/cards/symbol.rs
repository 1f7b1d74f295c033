//! Symbols and the alphabet they are drawn from.
//!
//! A `Symbol` is an opaque identifier: the engine only ever compares two
//! symbols for equality. The `Alphabet` gives hosts a name and display
//! label for each one.

use serde::{Deserialize, Serialize};

/// Opaque matchable icon identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// One entry of an alphabet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub symbol: Symbol,
    /// Stable asset-friendly name (e.g. `"green_apple"`).
    pub name: String,
    /// What a host shows on the card face.
    pub label: String,
}

/// The finite set of symbols a board is dealt from.
///
/// Symbols are numbered densely from zero in insertion order.
///
/// ```
/// use stacked_onet::cards::Alphabet;
///
/// let alphabet = Alphabet::new()
///     .with_symbol("sun", "S")
///     .with_symbol("moon", "M");
///
/// assert_eq!(alphabet.len(), 2);
/// let moon = alphabet.find("moon").unwrap();
/// assert_eq!(alphabet.label(moon), Some("M"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    entries: Vec<SymbolInfo>,
}

impl Alphabet {
    /// Create an empty alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most symbols one alphabet can hold.
    pub const CAPACITY: usize = u16::MAX as usize + 1;

    /// Append a symbol. Ignored once the alphabet is full.
    #[must_use]
    pub fn with_symbol(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.push(name, label);
        self
    }

    /// Append a symbol and return its id.
    ///
    /// Returns `None`, leaving the alphabet unchanged, once it already holds
    /// [`Self::CAPACITY`] symbols.
    pub fn push(&mut self, name: impl Into<String>, label: impl Into<String>) -> Option<Symbol> {
        let symbol = Symbol::new(u16::try_from(self.entries.len()).ok()?);
        self.entries.push(SymbolInfo {
            symbol,
            name: name.into(),
            label: label.into(),
        });
        Some(symbol)
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the alphabet has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All symbol ids, in order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|e| e.symbol)
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<&SymbolInfo> {
        self.entries.get(symbol.0 as usize)
    }

    /// Name of a symbol.
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.get(symbol).map(|e| e.name.as_str())
    }

    /// Display label of a symbol.
    #[must_use]
    pub fn label(&self, symbol: Symbol) -> Option<&str> {
        self.get(symbol).map(|e| e.label.as_str())
    }

    /// Find a symbol by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Symbol> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_dense() {
        let mut alphabet = Alphabet::new();
        let a = alphabet.push("a", "A").unwrap();
        let b = alphabet.push("b", "B").unwrap();

        assert_eq!(a, Symbol::new(0));
        assert_eq!(b, Symbol::new(1));
        assert_eq!(alphabet.symbols().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_full_alphabet_rejects_more() {
        let mut alphabet = Alphabet::new();
        for i in 0..Alphabet::CAPACITY {
            assert!(alphabet.push(i.to_string(), "").is_some());
        }
        assert_eq!(alphabet.symbols().last(), Some(Symbol::new(u16::MAX)));

        assert_eq!(alphabet.push("extra", "X"), None);
        let alphabet = alphabet.with_symbol("extra", "X");
        assert_eq!(alphabet.len(), Alphabet::CAPACITY);
        assert!(alphabet.find("extra").is_none());
    }

    #[test]
    fn test_lookup() {
        let alphabet = Alphabet::new().with_symbol("pear", "P");

        assert_eq!(alphabet.name(Symbol::new(0)), Some("pear"));
        assert_eq!(alphabet.label(Symbol::new(0)), Some("P"));
        assert!(alphabet.get(Symbol::new(1)).is_none());
        assert!(alphabet.find("plum").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Symbol::new(4)), "Symbol(4)");
    }
}
