// components/cloud_downloader/src/ytdlp.rs
use crate::options::DownloadOptions;
use crate::types::DownloadError;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;
use url::Url;

#[async_trait]
pub trait Downloader {
    async fn check_available(&self) -> Result<(), DownloadError>;
    async fn download_url(&self, url: &Url, options: &DownloadOptions)
        -> Result<(), DownloadError>;
}

pub struct YtDlp;

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which("yt-dlp")
            .map(|_| ())
            .map_err(|_| DownloadError::YtDlpNotFound)
    }

    async fn download_url(
        &self,
        url: &Url,
        options: &DownloadOptions,
    ) -> Result<(), DownloadError> {
        let args = options.cli_args();
        debug!("running yt-dlp {} {}", args.join(" "), url);

        // Stdio is inherited, so yt-dlp's own progress output is the
        // user's feedback for the transfer.
        let status = Command::new("yt-dlp")
            .args(&args)
            .arg(url.as_str())
            .status()
            .await?;

        if !status.success() {
            return Err(DownloadError::DownloadFailed(format!(
                "yt-dlp exited with status: {status}"
            )));
        }

        Ok(())
    }
}
