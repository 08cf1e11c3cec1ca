use rand::Rng;
use std::fmt;

/// Every printable ASCII punctuation character.
const STANDARD_SYMBOLS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.',
    '/', ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`',
    '{', '|', '}', '~',
];

/// Symbols that are easy to type on most keyboard layouts.
const REDUCED_SYMBOLS: &[char] = &['!', '-', '/', '#', '.', ',', '\'', '+'];

/// Punctuation characters available for symbol placements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolAlphabet {
    /// All printable ASCII punctuation.
    #[default]
    Standard,
    /// Small set of common punctuation.
    Reduced,
}

impl SymbolAlphabet {
    /// Characters in this alphabet, in a fixed order.
    pub fn symbols(&self) -> &'static [char] {
        match self {
            Self::Standard => STANDARD_SYMBOLS,
            Self::Reduced => REDUCED_SYMBOLS,
        }
    }

    /// Pick a symbol uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let symbols = self.symbols();
        symbols[rng.gen_range(0..symbols.len())]
    }

    /// Determine if a character belongs to this alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols().contains(&c)
    }
}

impl fmt::Display for SymbolAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.symbols() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
