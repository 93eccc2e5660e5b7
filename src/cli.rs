use clap::Parser;
use serde_json::json;

pub const USAGE: &str = "Usage: yt-transcript <youtube_url> [language_codes...]";

#[derive(Parser, Debug)]
#[command(name = "yt-transcript")]
#[command(about = "Extract a YouTube video's transcript as JSON")]
#[command(version)]
pub struct Cli {
    /// YouTube video URL or 11-character video ID
    #[arg(value_name = "URL_OR_ID", allow_hyphen_values = true)]
    pub video: Option<String>,

    /// Preferred language codes, tried in order (default: ko en)
    #[arg(value_name = "LANG", allow_hyphen_values = true)]
    pub languages: Vec<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Pretty-printed JSON with two-space indentation. Non-ASCII text is kept
/// as-is.
pub fn render<T: serde::Serialize>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn usage_error() -> serde_json::Value {
    json!({ "error": USAGE })
}
