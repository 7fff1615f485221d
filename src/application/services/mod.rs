pub mod embed_policy;
pub mod image_preview;
pub mod link_classifier;
pub mod youtube_time;

pub use embed_policy::EmbedPolicy;
pub use image_preview::{ImagePreviewService, PreviewFile};
pub use link_classifier::LinkClassifier;
pub use youtube_time::YouTubeTimeParser;
