use super::source::TranscriptTrack;
use super::transcript::TranscriptErrorKind;

pub const DEFAULT_LANGUAGES: &[&str] = &["ko", "en"];

/// A track picked for fetching, along with the language label reported back
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTrack<'a> {
    pub track: &'a TranscriptTrack,
    pub language: &'a str,
}

/// Pick one track by preference order, matching language codes by prefix
/// (`en` matches `en-US`). When no preference matches, the first listed track
/// is used whatever its language.
pub fn resolve_track<'a, S: AsRef<str>>(
    tracks: &'a [TranscriptTrack],
    preferred: &'a [S],
) -> Result<ResolvedTrack<'a>, TranscriptErrorKind> {
    let matched = preferred.iter().find_map(|lang| {
        let lang = lang.as_ref();
        tracks
            .iter()
            .find(|t| t.language_code.starts_with(lang))
            .map(|track| ResolvedTrack {
                track,
                language: lang,
            })
    });

    if let Some(resolved) = matched {
        return Ok(resolved);
    }

    tracks
        .first()
        .map(|track| {
            tracing::debug!(
                language_code = %track.language_code,
                "no preferred language available, falling back to first track"
            );
            ResolvedTrack {
                track,
                language: &track.language_code,
            }
        })
        .ok_or(TranscriptErrorKind::NoTranscriptAvailable)
}
