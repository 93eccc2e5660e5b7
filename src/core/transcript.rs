use super::language::{DEFAULT_LANGUAGES, resolve_track};
use super::source::{TranscriptEntry, TranscriptSource};
use super::video_id::extract_video_id;
use derive_more::Display;
use serde::Serialize;

/// Every way a transcript request can fail. These are reported to the caller
/// as data, never as a process failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TranscriptErrorKind {
    #[display("Invalid YouTube URL")]
    InvalidInput,
    #[display("Transcripts are disabled for this video")]
    TranscriptsDisabled,
    #[display("No transcript found for this video")]
    NoTranscriptFound,
    #[display("No transcript available")]
    NoTranscriptAvailable,
    /// Any other upstream failure. `reason` names the upstream cause
    /// (e.g. `VideoUnavailable`).
    #[display("Error fetching transcript: {message}")]
    UpstreamError { reason: String, message: String },
}

impl TranscriptErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInput",
            Self::TranscriptsDisabled => "TranscriptsDisabled",
            Self::NoTranscriptFound => "NoTranscriptFound",
            Self::NoTranscriptAvailable => "NoTranscriptAvailable",
            Self::UpstreamError { .. } => "UpstreamError",
        }
    }

    pub fn upstream(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamError {
            reason: reason.into(),
            message: message.into(),
        }
    }

    /// Like [`name`](Self::name), but reports the upstream cause for
    /// catch-all errors.
    pub fn label(&self) -> &str {
        match self {
            Self::UpstreamError { reason, .. } => reason,
            other => other.name(),
        }
    }
}

impl std::error::Error for TranscriptErrorKind {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranscriptResult {
    Success {
        video_id: String,
        language: String,
        transcript: String,
        timestamped_entries: Vec<TranscriptEntry>,
    },
    Failure {
        error: String,
        video_id: Option<String>,
    },
}

impl TranscriptResult {
    pub fn failure(kind: &TranscriptErrorKind, video_id: Option<String>) -> Self {
        Self::Failure {
            error: kind.to_string(),
            video_id,
        }
    }

    pub fn video_id(&self) -> Option<&str> {
        match self {
            Self::Success { video_id, .. } => Some(video_id),
            Self::Failure { video_id, .. } => video_id.as_deref(),
        }
    }
}

pub fn join_text(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve `input` to a video, pick a track by `languages` (or the defaults
/// when empty) and fetch it.
pub async fn get_transcript<S: TranscriptSource>(
    source: &S,
    input: &str,
    languages: &[String],
) -> TranscriptResult {
    let Some(video_id) = parse_input(input) else {
        return TranscriptResult::failure(&TranscriptErrorKind::InvalidInput, None);
    };

    let outcome = fetch_preferred(source, &video_id, languages).await;
    into_result(video_id, outcome)
}

/// Same as [`get_transcript`], but the source is only built once `input` has
/// parsed to a video id.
pub async fn get_transcript_with<S, F>(
    connect: F,
    input: &str,
    languages: &[String],
) -> TranscriptResult
where
    S: TranscriptSource,
    F: FnOnce() -> Result<S, TranscriptErrorKind>,
{
    let Some(video_id) = parse_input(input) else {
        return TranscriptResult::failure(&TranscriptErrorKind::InvalidInput, None);
    };

    let outcome = match connect() {
        Ok(source) => fetch_preferred(&source, &video_id, languages).await,
        Err(kind) => Err(kind),
    };
    into_result(video_id, outcome)
}

fn parse_input(input: &str) -> Option<String> {
    let video_id = extract_video_id(input);
    if video_id.is_none() {
        tracing::debug!(input, "could not extract a video id");
    }
    video_id
}

fn into_result(
    video_id: String,
    outcome: Result<(String, Vec<TranscriptEntry>), TranscriptErrorKind>,
) -> TranscriptResult {
    match outcome {
        Ok((language, entries)) => TranscriptResult::Success {
            transcript: join_text(&entries),
            video_id,
            language,
            timestamped_entries: entries,
        },
        Err(kind) => TranscriptResult::failure(&kind, Some(video_id)),
    }
}

async fn fetch_preferred<S: TranscriptSource>(
    source: &S,
    video_id: &str,
    languages: &[String],
) -> Result<(String, Vec<TranscriptEntry>), TranscriptErrorKind> {
    let tracks = source.list(video_id).await?;
    tracing::debug!(video_id, count = tracks.len(), "transcript tracks listed");

    let resolved = if languages.is_empty() {
        resolve_track(&tracks, DEFAULT_LANGUAGES)?
    } else {
        resolve_track(&tracks, languages)?
    };
    let language = resolved.language.to_string();

    let entries = source.fetch(video_id, resolved.track).await?;
    Ok((language, entries))
}

/// Fetch the track whose language code is exactly `language`, without any
/// fallback.
pub async fn fetch_exact<S: TranscriptSource>(
    source: &S,
    video_id: &str,
    language: &str,
) -> Result<Vec<TranscriptEntry>, TranscriptErrorKind> {
    let tracks = source.list(video_id).await?;
    let track = tracks
        .iter()
        .find(|t| t.language_code == language)
        .ok_or(TranscriptErrorKind::NoTranscriptFound)?;
    source.fetch(video_id, track).await
}
