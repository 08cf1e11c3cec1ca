#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Memorable password composition.
//!
//! Passwords are assembled from dictionary words drawn from a
//! [WordCatalog], decimal digits and punctuation symbols from a
//! [SymbolAlphabet]. The [PasswordComposer] skews each random
//! choice towards whichever category still falls short of its
//! requested minimum so the output satisfies every constraint
//! without settling into a fixed order.
//!
//! All randomness is supplied by the caller:
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use wordy_password::{
//!     CompositionRequest, PasswordComposer, SymbolAlphabet, WordCatalog,
//! };
//!
//! let catalog = WordCatalog::build(["ash", "elm", "oak", "fig"], 3, 3)?;
//! let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced);
//! let mut rng = StdRng::seed_from_u64(7);
//! let password = composer.compose(&mut rng, &CompositionRequest::default())?;
//! assert!(password.len() >= 8);
//! # Ok::<(), wordy_password::Error>(())
//! ```
//!
//! A composer borrows its catalog immutably and keeps no mutable
//! state of its own; sharing one across threads only requires that
//! each thread brings its own random source, or that callers
//! serialize access to a shared one.

mod alphabet;
mod catalog;
mod composer;
mod error;

pub use alphabet::SymbolAlphabet;
pub use catalog::WordCatalog;
pub use composer::{
    Category, ComposedPassword, CompositionLimits, CompositionRequest,
    PasswordComposer,
};
pub use error::Error;

pub use secrecy;

/// Default cryptographically secure RNG.
pub fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
