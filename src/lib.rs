//! Fetch a YouTube video's transcript in a preferred language and shape it
//! as JSON-ready data.

pub mod cli;
pub mod core;
pub mod error;
pub mod logging;

pub use crate::core::{
    TranscriptEntry, TranscriptErrorKind, TranscriptResult, TranscriptSource, TranscriptTrack,
    YoutubeSource, extract_video_id, fetch_exact, get_transcript, get_transcript_with,
    resolve_track,
};
pub use crate::error::{Error, Result};
