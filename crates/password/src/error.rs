use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the minimum word length exceeds
    /// the maximum word length.
    #[error(
        "minimum word length {min} is greater than maximum word length {max}"
    )]
    InvalidWordLength {
        /// Minimum word length.
        min: usize,
        /// Maximum word length.
        max: usize,
    },

    /// Error generated when no words remain after filtering
    /// the word source.
    #[error("no words of length {min} to {max} available in the word list")]
    EmptyCatalog {
        /// Minimum word length.
        min: usize,
        /// Maximum word length.
        max: usize,
    },

    /// Error generated when composition attempts keep falling
    /// short of the minimum length.
    #[error("unable to compose a password after {attempts} attempt(s)")]
    CompositionTimeout {
        /// Number of attempts made.
        attempts: usize,
    },

    /// Error generated when a single composition attempt places
    /// too many elements.
    #[error("composition exceeded the limit of {limit} placements")]
    PlacementLimit {
        /// Maximum placements for a single attempt.
        limit: usize,
    },

    /// Error generated when a composition limit is zero.
    #[error("composition limits must be greater than zero")]
    InvalidLimits,
}
