//! Card system: symbols, card entities and the registry.
//!
//! ## Key Types
//!
//! - `Symbol`: Opaque matchable icon id
//! - `Alphabet`: The finite set of symbols a board is dealt from
//! - `Card`: Position, symbol, layer and visibility of one card
//! - `CardRegistry`: Owner of every card in a round

pub mod card;
pub mod registry;
pub mod symbol;

pub use card::{Card, CardId};
pub use registry::CardRegistry;
pub use symbol::{Alphabet, Symbol, SymbolInfo};
