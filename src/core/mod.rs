pub mod language;
pub mod source;
pub mod transcript;
pub mod video_id;

pub use language::*;
pub use source::*;
pub use transcript::*;
pub use video_id::*;
