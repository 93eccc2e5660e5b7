//! Manual check of which transcripts a video exposes.

use clap::Parser;
use yt_transcript::core::join_text;
use yt_transcript::{Result, YoutubeSource, fetch_exact};

const DEFAULT_VIDEO_ID: &str = "0h6gfMqpx_0";
const DEFAULT_LANGUAGE: &str = "en";
const PROBE_LANGUAGES: &[&str] = &["ko", "en", "ja", "es", "fr"];
const PREVIEW_CHARS: usize = 500;

#[derive(Parser)]
#[command(name = "debug-transcript")]
#[command(about = "Probe transcript availability for one video")]
struct Args {
    /// Video ID to probe
    #[arg(default_value = DEFAULT_VIDEO_ID, allow_hyphen_values = true)]
    video_id: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    yt_transcript::logging::init(args.verbose);

    let source = YoutubeSource::new()?;
    let video_id = args.video_id.as_str();

    println!("Checking video ID: {video_id}\n");
    println!("Attempting to fetch transcript...");

    match fetch_exact(&source, video_id, DEFAULT_LANGUAGE).await {
        Ok(entries) => {
            println!("✓ Success! Found {} entries", entries.len());
            if let Some(first) = entries.first() {
                println!("\nFirst entry: {}", serde_json::to_string(first)?);
            }
            println!("\nFirst {PREVIEW_CHARS} chars of transcript:");
            let preview: String = join_text(&entries).chars().take(PREVIEW_CHARS).collect();
            println!("{preview}");
        }
        Err(kind) => println!("✗ {kind}"),
    }

    println!("\n{}", "=".repeat(50));
    println!("Trying different languages...");

    for lang in PROBE_LANGUAGES {
        match fetch_exact(&source, video_id, lang).await {
            Ok(entries) => println!("✓ {lang}: Found {} entries", entries.len()),
            Err(kind) => println!("✗ {lang}: {}", kind.label()),
        }
    }

    Ok(())
}
