//! Domain entity definitions.

mod embed;
mod link;
mod load_state;
mod metadata;
mod viewport;

pub use embed::{Embed, ImageEmbed, OpenGraphPreview, YouTubeEmbed};
pub use link::Link;
pub use load_state::{LoadPhase, LoadState};
pub use metadata::{
    AttachmentField, ImageMetadata, MessageAttachment, OpenGraphData, OpenGraphImage,
    PostMetadata, PostProps,
};
pub use viewport::{DeviceDimensions, Dimensions};
