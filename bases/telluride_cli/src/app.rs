// bases/telluride_cli/src/app.rs
use color_eyre::Result;
use cloud_downloader::{CloudDownloader, DownloadOptions};
use crate::args::Args;
use crate::output::OutputHandler;

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        Self {
            args,
            output: OutputHandler::new(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.output.print_banner();
        self.output
            .print_invocation(&self.args.page_url, self.args.audio_only);

        let options = download_options(self.args.audio_only);

        let downloader = CloudDownloader::new(options).await?;
        downloader
            .download(std::slice::from_ref(&self.args.page_url))
            .await?;

        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}

/// Options for one run. Identical for both values of `audio_only`: the
/// fixed mapping already selects the best audio stream and extracts it
/// to MP3.
fn download_options(_audio_only: bool) -> DownloadOptions {
    DownloadOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_do_not_depend_on_the_audio_only_flag() {
        assert_eq!(download_options(true), download_options(false));
    }

    #[test]
    fn options_are_the_fixed_mapping() {
        assert_eq!(download_options(false), DownloadOptions::default());
    }
}
