//! Application use cases.

mod load_embed_use_case;
mod play_video_use_case;

pub use load_embed_use_case::{LoadEmbedUseCase, LoadReport, SizeProbe, SizeSource};
pub use play_video_use_case::{
    PLAYBACK_ERROR_TITLE, PlayVideoUseCase, PlaybackOutcome, playback_error_description,
};
