// bases/telluride_cli/src/args.rs
use clap::Parser;

/// Download media from a web page, extracting the best audio stream
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Page URL to download from
    pub page_url: String,

    /// Download the audio track only
    #[arg(short = 'a', long)]
    pub audio_only: bool,

    /// Extra tokens are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_alone_parses_with_audio_only_off() {
        let args = Args::try_parse_from(["telluride", "https://example.com/video"]).unwrap();

        assert_eq!(args.page_url, "https://example.com/video");
        assert!(!args.audio_only);
    }

    #[test]
    fn short_and_long_audio_only_forms_parse() {
        for flag in ["-a", "--audio-only"] {
            let args =
                Args::try_parse_from(["telluride", flag, "https://example.com/video"]).unwrap();

            assert!(args.audio_only, "flag {flag} did not set audio_only");
            assert_eq!(args.page_url, "https://example.com/video");
        }
    }

    #[test]
    fn missing_url_is_a_usage_error() {
        assert!(Args::try_parse_from(["telluride"]).is_err());
    }

    #[test]
    fn extra_tokens_are_accepted_and_ignored() {
        let args = Args::try_parse_from([
            "telluride",
            "https://example.com/video",
            "leftover",
            "--unknown",
        ])
        .unwrap();

        assert_eq!(args.page_url, "https://example.com/video");
        assert!(!args.audio_only);
        assert_eq!(args.extra, ["leftover", "--unknown"]);
    }
}
