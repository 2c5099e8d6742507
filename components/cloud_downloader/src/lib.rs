// components/cloud_downloader/src/lib.rs
mod options;
mod types;
mod ytdlp;

use std::sync::Arc;
use url::Url;

pub use options::{AudioExtraction, DownloadOptions};
pub use types::DownloadError;
use ytdlp::{Downloader, YtDlp};

pub struct CloudDownloader {
    options: DownloadOptions,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl std::fmt::Debug for CloudDownloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudDownloader")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl CloudDownloader {
    /// Acquire a downloader with the given options, checking that the
    /// yt-dlp collaborator is present.
    pub async fn new(options: DownloadOptions) -> Result<Self, DownloadError> {
        Self::new_with_downloader(options, Arc::new(YtDlp)).await
    }

    /// Acquire a downloader with a specific collaborator implementation
    pub async fn new_with_downloader(
        options: DownloadOptions,
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Result<Self, DownloadError> {
        downloader.check_available().await?;

        Ok(Self {
            options,
            downloader,
        })
    }

    /// Download every URL in the sequence, in order, stopping at the
    /// first failure. One attempt per URL, no retries.
    pub async fn download(&self, urls: &[String]) -> Result<(), DownloadError> {
        for raw in urls {
            let url =
                Url::parse(raw).map_err(|e| DownloadError::InvalidUrl(e.to_string()))?;

            self.downloader.download_url(&url, &self.options).await?;
        }

        Ok(())
    }
}
