use crate::core::TranscriptErrorKind;
use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display("{_0}")]
    Custom(String),

    #[from]
    #[display("io error: {_0}")]
    Io(std::io::Error),

    #[from]
    #[display("json error: {_0}")]
    Json(serde_json::Error),

    #[from]
    #[display("{_0}")]
    Transcript(TranscriptErrorKind),
}

impl Error {
    pub fn custom(val: impl std::fmt::Display) -> Self {
        Self::Custom(val.to_string())
    }
}

impl std::error::Error for Error {}
