//! Write composed passwords to standard output.
use crate::Result;
use rand::Rng;
use std::io::{self, Write};
use wordy_password::{
    secrecy::ExposeSecret, CompositionRequest, PasswordComposer,
};

/// Compose `count` passwords and print one per line.
///
/// Each password is written as soon as it is composed so an
/// error never leaves a partial password on the output.
pub fn run<R: Rng + ?Sized>(
    composer: &PasswordComposer<'_>,
    request: &CompositionRequest,
    count: u64,
    rng: &mut R,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_passwords(&mut out, composer, request, count, rng)
}

pub(crate) fn write_passwords<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    composer: &PasswordComposer<'_>,
    request: &CompositionRequest,
    count: u64,
    rng: &mut R,
) -> Result<()> {
    for _ in 0..count {
        let password = composer.compose(rng, request)?;
        writeln!(out, "{}", password.expose_secret())?;
    }
    out.flush()?;
    tracing::debug!(count, "generate::done");
    Ok(())
}
