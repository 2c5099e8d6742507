// components/cloud_downloader/src/options.rs

/// Post-processing stage: extract the downloaded stream to an audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioExtraction {
    pub codec: &'static str,
    pub quality: &'static str,
}

/// Options handed to yt-dlp for one run.
///
/// `default()` is the mapping used for every invocation: best available
/// audio stream, extracted to MP3 at 192 kbps, restricted filenames,
/// certificate checks off, non-silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    pub no_check_certificate: bool,
    pub format: &'static str,
    pub extract_audio: AudioExtraction,
    pub quiet: bool,
    pub restrict_filenames: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            no_check_certificate: true,
            format: "bestaudio/best",
            extract_audio: AudioExtraction {
                codec: "mp3",
                quality: "192K",
            },
            quiet: false,
            restrict_filenames: true,
        }
    }
}

impl DownloadOptions {
    /// Render the options as yt-dlp command-line arguments. The target
    /// URL is appended separately by the caller.
    pub fn cli_args(&self) -> Vec<&'static str> {
        let mut args = Vec::new();

        if self.no_check_certificate {
            args.push("--no-check-certificates");
        }

        args.push("-f");
        args.push(self.format);

        args.push("-x");
        args.push("--audio-format");
        args.push(self.extract_audio.codec);
        args.push("--audio-quality");
        args.push(self.extract_audio.quality);

        if self.quiet {
            args.push("-q");
        }

        if self.restrict_filenames {
            args.push("--restrict-filenames");
        }

        args
    }
}
