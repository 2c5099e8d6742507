// bases/telluride_cli/src/output.rs

const BUILD: u32 = 1;

pub struct OutputHandler;

impl OutputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self) {
        println!();
        println!("Telluride Cloud Downloader b{BUILD}");
        println!("Copyright FrostWire LLC 2020");
        println!();
    }

    pub fn print_invocation(&self, page_url: &str, audio_only: bool) {
        println!("Page URL: <{page_url}>");
        if audio_only {
            println!("Audio only download.");
        }
        println!();
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        error.chain().skip(1).for_each(|cause| {
            eprintln!("  caused by: {}", cause);
        });
    }
}
