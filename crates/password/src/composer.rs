//! Adaptive composition of words, digits and symbols.
use crate::{Error, Result, SymbolAlphabet, WordCatalog, DIGITS};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Kind of element placed in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Dictionary word from the catalog.
    Word,
    /// Decimal digit.
    Digit,
    /// Punctuation symbol from the alphabet.
    Symbol,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Word => "word",
                Self::Digit => "digit",
                Self::Symbol => "symbol",
            }
        )
    }
}

/// Constraints for a single composed password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionRequest {
    /// Minimum number of words.
    pub min_words: usize,
    /// Minimum number of digits.
    pub min_digits: usize,
    /// Minimum number of symbols.
    pub min_symbols: usize,
    /// Upper case the first character of every word.
    pub capitalize: bool,
    /// Minimum length in characters.
    pub min_length: usize,
}

impl Default for CompositionRequest {
    fn default() -> Self {
        Self {
            min_words: 2,
            min_digits: 1,
            min_symbols: 1,
            capitalize: true,
            min_length: 8,
        }
    }
}

/// Bounds that turn unsatisfiable requests into errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionLimits {
    max_attempts: usize,
    max_placements: usize,
    max_total_placements: usize,
}

impl CompositionLimits {
    /// Default number of attempts before giving up.
    pub const MAX_ATTEMPTS: usize = 10_000;

    /// Default number of placements allowed in one attempt.
    pub const MAX_PLACEMENTS: usize = 10_000;

    /// Default number of placements allowed across every
    /// attempt for one password.
    pub const MAX_TOTAL_PLACEMENTS: usize = 1_000_000;

    /// Create composition limits.
    ///
    /// Both limits must be greater than zero.
    pub fn new(max_attempts: usize, max_placements: usize) -> Result<Self> {
        if max_attempts == 0 || max_placements == 0 {
            return Err(Error::InvalidLimits);
        }
        Ok(Self {
            max_attempts,
            max_placements,
            max_total_placements: Self::MAX_TOTAL_PLACEMENTS,
        })
    }

    /// Set the placement budget shared by every attempt.
    ///
    /// Must be greater than zero.
    pub fn with_max_total_placements(
        mut self,
        max_total_placements: usize,
    ) -> Result<Self> {
        if max_total_placements == 0 {
            return Err(Error::InvalidLimits);
        }
        self.max_total_placements = max_total_placements;
        Ok(self)
    }

    /// Maximum attempts for one password.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Maximum placements within a single attempt.
    pub fn max_placements(&self) -> usize {
        self.max_placements
    }

    /// Maximum placements across every attempt.
    pub fn max_total_placements(&self) -> usize {
        self.max_total_placements
    }
}

impl Default for CompositionLimits {
    fn default() -> Self {
        Self {
            max_attempts: Self::MAX_ATTEMPTS,
            max_placements: Self::MAX_PLACEMENTS,
            max_total_placements: Self::MAX_TOTAL_PLACEMENTS,
        }
    }
}

/// Password produced by a composer.
#[derive(Debug)]
pub struct ComposedPassword {
    password: SecretString,
    placements: Vec<Category>,
    length: usize,
}

impl ComposedPassword {
    /// Category of every element in placement order.
    pub fn placements(&self) -> &[Category] {
        &self.placements
    }

    /// Number of words.
    pub fn words(&self) -> usize {
        self.count(Category::Word)
    }

    /// Number of digits.
    pub fn digits(&self) -> usize {
        self.count(Category::Digit)
    }

    /// Number of symbols.
    pub fn symbols(&self) -> usize {
        self.count(Category::Symbol)
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if the password is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn count(&self, category: Category) -> usize {
        self.placements.iter().filter(|c| **c == category).count()
    }
}

impl ExposeSecret<str> for ComposedPassword {
    fn expose_secret(&self) -> &str {
        self.password.expose_secret()
    }
}

/// Composes passwords from a word catalog and symbol alphabet.
#[derive(Debug, Clone)]
pub struct PasswordComposer<'a> {
    catalog: &'a WordCatalog,
    alphabet: SymbolAlphabet,
    limits: CompositionLimits,
}

impl<'a> PasswordComposer<'a> {
    /// Create a composer with the default limits.
    pub fn new(catalog: &'a WordCatalog, alphabet: SymbolAlphabet) -> Self {
        Self {
            catalog,
            alphabet,
            limits: Default::default(),
        }
    }

    /// Set the composition limits.
    pub fn with_limits(mut self, limits: CompositionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Switch the symbol alphabet.
    pub fn set_alphabet(&mut self, alphabet: SymbolAlphabet) {
        self.alphabet = alphabet;
    }

    /// Symbol alphabet in use.
    pub fn alphabet(&self) -> SymbolAlphabet {
        self.alphabet
    }

    /// Compose a password.
    ///
    /// Each attempt places elements until every minimum count
    /// is met; an attempt shorter than the minimum length is
    /// discarded and composition starts again from nothing.
    ///
    /// Fails with [Error::PlacementLimit] when one attempt needs
    /// more placements than allowed and [Error::CompositionTimeout]
    /// when the attempts or the shared placement budget run out.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &CompositionRequest,
    ) -> Result<ComposedPassword> {
        let mut spent = 0;
        for attempt in 1..=self.limits.max_attempts {
            let remaining = self.limits.max_total_placements - spent;
            let limit = self.limits.max_placements.min(remaining);
            let (password, placements) =
                match self.attempt(rng, request, limit) {
                    Ok(result) => result,
                    Err(Error::PlacementLimit { .. })
                        if limit < self.limits.max_placements =>
                    {
                        tracing::debug!(
                            attempt,
                            spent,
                            "compose::budget_exhausted",
                        );
                        return Err(Error::CompositionTimeout {
                            attempts: attempt,
                        });
                    }
                    Err(e) => return Err(e),
                };
            spent += placements.len();

            let length = password.chars().count();
            if length >= request.min_length {
                return Ok(ComposedPassword {
                    password: password.into(),
                    placements,
                    length,
                });
            }
            tracing::debug!(
                attempt,
                length,
                min_length = request.min_length,
                "compose::restart",
            );
        }

        Err(Error::CompositionTimeout {
            attempts: self.limits.max_attempts,
        })
    }

    /// Compose multiple passwords.
    pub fn compose_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &CompositionRequest,
        count: usize,
    ) -> Result<Vec<ComposedPassword>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.compose(rng, request)?);
        }
        Ok(results)
    }

    fn attempt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &CompositionRequest,
        limit: usize,
    ) -> Result<(String, Vec<Category>)> {
        let mut password = String::new();
        let mut placements = Vec::new();
        let mut last: Option<Category> = None;
        let (mut words, mut digits, mut symbols) = (0, 0, 0);

        while words < request.min_words
            || digits < request.min_digits
            || symbols < request.min_symbols
        {
            if placements.len() == limit {
                return Err(Error::PlacementLimit { limit });
            }

            let bias_symbol = bias(request.min_symbols, symbols);
            let bias_digit = bias(request.min_digits, digits);
            let bias_word = bias(request.min_words, words);
            let total = bias_symbol + bias_digit + bias_word;

            let p_symbol = bias_symbol / total;
            let p_digit = bias_digit / total;

            // Symbol is tried before digit and word is the fallback.
            // Only words may be placed twice in a row.
            let category = if request.min_symbols > 0
                && last != Some(Category::Symbol)
                && rng.gen::<f64>() < p_symbol
            {
                Category::Symbol
            } else if request.min_digits > 0
                && last != Some(Category::Digit)
                && rng.gen::<f64>() < p_digit
            {
                Category::Digit
            } else {
                Category::Word
            };

            match category {
                Category::Word => {
                    let word = self.catalog.sample(rng);
                    if request.capitalize {
                        push_capitalized(&mut password, word);
                    } else {
                        password.push_str(word);
                    }
                    words += 1;
                }
                Category::Digit => {
                    password.push(DIGITS[rng.gen_range(0..DIGITS.len())]);
                    digits += 1;
                }
                Category::Symbol => {
                    password.push(self.alphabet.sample(rng));
                    symbols += 1;
                }
            }

            placements.push(category);
            last = Some(category);
        }

        Ok((password, placements))
    }
}

/// Weight for a category, never less than one so a satisfied
/// category can still be chosen.
fn bias(required: usize, placed: usize) -> f64 {
    required.saturating_sub(placed).saturating_add(1) as f64
}

fn push_capitalized(password: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        password.extend(first.to_uppercase());
        password.push_str(chars.as_str());
    }
}
