use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum Error {
    #[error("word list {0} not found, use --download to fetch one")]
    NoWordList(PathBuf),

    #[error("download from {url} failed with status {status}")]
    UnexpectedStatus { url: Url, status: StatusCode },

    #[error(transparent)]
    Password(#[from] wordy_password::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
