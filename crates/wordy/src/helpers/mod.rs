use crate::{Error, Result};
use std::{io, path::Path};

pub use wordy_cli_helpers::messages;

/// Read a word list file.
///
/// Invalid UTF-8 sequences are replaced rather than
/// rejecting the entire file.
pub(crate) async fn read_word_list(path: &Path) -> Result<String> {
    match tokio::fs::read(path).await {
        Ok(buffer) => Ok(String::from_utf8_lossy(&buffer).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::NoWordList(path.to_owned()))
        }
        Err(e) => Err(e.into()),
    }
}
