//! Fetch a word list over HTTP(S).
use crate::{
    helpers::messages::{info, success},
    Error, Result,
};
use std::path::{Path, PathBuf};
use url::Url;

/// Download a word list and save it to `path`.
///
/// The response is written to a temporary file next to
/// `path` which is then renamed so an interrupted download
/// never replaces an existing word list.
pub async fn run(url: Url, path: &Path) -> Result<()> {
    info(format!("Downloading {}", url));
    tracing::debug!(url = %url, path = %path.display(), "download::start");

    let response = reqwest::get(url.clone()).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::UnexpectedStatus { url, status });
    }
    let body = response.bytes().await?;

    let temp = temp_path(path);
    tokio::fs::write(&temp, &body).await?;
    tokio::fs::rename(&temp, path).await?;

    tracing::debug!(bytes = body.len(), "download::done");
    success(format!("Saved {} to {}", url, path.display()));
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
