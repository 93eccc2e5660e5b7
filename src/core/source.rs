use crate::core::transcript::TranscriptErrorKind;
use serde::{Deserialize, Serialize};
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

/// One caption track available for a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptTrack {
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
}

impl TranscriptTrack {
    pub fn new(language_code: impl Into<String>) -> Self {
        let language_code = language_code.into();
        Self {
            language: language_code.clone(),
            language_code,
            is_generated: false,
        }
    }
}

/// One timed caption unit. `start` and `duration` are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Where tracks and their entries come from.
pub trait TranscriptSource {
    fn list(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptTrack>, TranscriptErrorKind>>;

    fn fetch(
        &self,
        video_id: &str,
        track: &TranscriptTrack,
    ) -> impl Future<Output = Result<Vec<TranscriptEntry>, TranscriptErrorKind>>;
}

#[derive(Clone)]
pub struct YoutubeSource {
    api: YouTubeTranscriptApi,
}

impl YoutubeSource {
    pub fn new() -> Result<Self, TranscriptErrorKind> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptErrorKind::upstream("CookieError", e.to_string()))?;
        Ok(Self { api })
    }
}

impl TranscriptSource for YoutubeSource {
    async fn list(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptTrack>, TranscriptErrorKind> {
        tracing::debug!(video_id, "listing transcripts");

        let list = self
            .api
            .list_transcripts(video_id)
            .await
            .map_err(classify)?;

        let mut tracks = Vec::new();
        for t in list.transcripts() {
            tracks.push(TranscriptTrack {
                language_code: t.language_code().to_string(),
                language: t.language().to_string(),
                is_generated: t.is_generated(),
            });
        }

        Ok(tracks)
    }

    async fn fetch(
        &self,
        video_id: &str,
        track: &TranscriptTrack,
    ) -> Result<Vec<TranscriptEntry>, TranscriptErrorKind> {
        tracing::debug!(video_id, language_code = %track.language_code, "fetching transcript");

        let fetched = self
            .api
            .fetch_transcript(video_id, &[track.language_code.as_str()], false)
            .await
            .map_err(classify)?;

        Ok(fetched
            .snippets
            .into_iter()
            .map(|snippet| TranscriptEntry {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}

fn classify(err: CouldNotRetrieveTranscript) -> TranscriptErrorKind {
    match &err.reason {
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled { .. }) => {
            TranscriptErrorKind::TranscriptsDisabled
        }
        Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
            TranscriptErrorKind::NoTranscriptFound
        }
        other => {
            let reason = reason_name(other.as_ref());
            tracing::warn!(error = %err, reason = %reason, "transcript service error");
            TranscriptErrorKind::upstream(reason, err.to_string())
        }
    }
}

// Variant name of the upstream reason, taken from its Debug form.
fn reason_name(reason: Option<&CouldNotRetrieveTranscriptReason>) -> String {
    match reason {
        Some(reason) => variant_name(&format!("{reason:?}")).to_string(),
        None => "CouldNotRetrieveTranscript".to_string(),
    }
}

fn variant_name(debug: &str) -> &str {
    debug
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_error(reason: Option<CouldNotRetrieveTranscriptReason>) -> CouldNotRetrieveTranscript {
        CouldNotRetrieveTranscript {
            video_id: "ABCDEFGHIJK".to_string(),
            reason,
        }
    }

    #[test]
    fn disabled_maps_to_transcripts_disabled() {
        let kind = classify(upstream_error(Some(
            CouldNotRetrieveTranscriptReason::TranscriptsDisabled,
        )));
        assert_eq!(kind, TranscriptErrorKind::TranscriptsDisabled);
    }

    #[test]
    fn other_reasons_keep_upstream_message_and_name() {
        let err = upstream_error(Some(CouldNotRetrieveTranscriptReason::VideoUnavailable));
        let message = err.to_string();

        let kind = classify(err);
        assert_eq!(kind, TranscriptErrorKind::upstream("VideoUnavailable", message.clone()));
        assert_eq!(kind.label(), "VideoUnavailable");
        assert_eq!(kind.to_string(), format!("Error fetching transcript: {message}"));
    }

    #[test]
    fn missing_reason_is_a_generic_upstream_error() {
        let err = upstream_error(None);
        let message = err.to_string();

        match classify(err) {
            TranscriptErrorKind::UpstreamError { reason, message: got } => {
                assert_eq!(reason, "CouldNotRetrieveTranscript");
                assert_eq!(got, message);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn variant_name_strips_payload() {
        assert_eq!(variant_name("YouTubeRequestFailed(\"HTTP 429\")"), "YouTubeRequestFailed");
        assert_eq!(variant_name("VideoUnplayable { reason: None }"), "VideoUnplayable");
        assert_eq!(variant_name("AgeRestricted"), "AgeRestricted");
    }
}
