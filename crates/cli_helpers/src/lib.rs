//! Helper functions for the `wordy` command line executables.

pub mod messages;
