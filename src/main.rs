use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use yt_transcript::cli::{self, Cli};
use yt_transcript::{Result, TranscriptResult, YoutubeSource, get_transcript_with};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    yt_transcript::logging::init(args.verbose);

    let Some(video) = args.video else {
        print_json(&cli::render(&cli::usage_error())?)?;
        return Ok(ExitCode::FAILURE);
    };

    let result = run(&video, &args.languages).await;
    print_json(&cli::render(&result)?)?;

    Ok(ExitCode::SUCCESS)
}

async fn run(video: &str, languages: &[String]) -> TranscriptResult {
    let result = get_transcript_with(YoutubeSource::new, video, languages).await;

    if let TranscriptResult::Failure { error, video_id } = &result {
        tracing::info!(?video_id, %error, "transcript request failed");
    }

    result
}

fn print_json(json: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;
    Ok(())
}
