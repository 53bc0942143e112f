//! Streaming fetch of the Chemical Component Dictionary archive.
//!
//! Unlike assembly downloads, the dictionary is one large file: its body
//! is written to disk chunk by chunk as it arrives instead of being
//! buffered in memory.

use std::path::Path;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::info;

use super::client::HttpClient;
use super::error::DownloadError;

/// Downloads `url` to `dest`, streaming chunks straight to disk.
///
/// `on_progress` observes `(bytes written so far, declared total)` after
/// every chunk; the total comes from the Content-Length header and is 0
/// when absent. Returns the number of bytes written.
///
/// # Errors
///
/// Any request, status, or filesystem failure ends the download. There
/// is no retry; a mid-stream failure leaves whatever was written so far.
pub async fn fetch_dictionary<F>(
    client: &HttpClient,
    url: &str,
    dest: &Path,
    mut on_progress: F,
) -> Result<u64, DownloadError>
where
    F: FnMut(u64, u64),
{
    let response = client.get_checked(url).await?;
    let total = response.content_length().unwrap_or(0);

    let mut file = File::create(dest)
        .await
        .map_err(|e| DownloadError::io(dest.to_path_buf(), e))?;

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| DownloadError::from_request(url, e))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(dest.to_path_buf(), e))?;
        downloaded += chunk.len() as u64;
        on_progress(downloaded, total);
    }

    file.flush()
        .await
        .map_err(|e| DownloadError::io(dest.to_path_buf(), e))?;

    info!(path = %dest.display(), bytes = downloaded, "dictionary download complete");
    Ok(downloaded)
}
