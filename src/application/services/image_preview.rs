use serde::Serialize;

use crate::domain::entities::{Link, LoadState};

/// File handed to the full-screen image viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewFile {
    /// File name shown under the image.
    pub caption: String,
    /// Image source.
    pub uri: String,
    /// Path the viewer reads from; the loaded URI for remote images.
    pub local_path: String,
    /// Natural width.
    pub width: u32,
    /// Natural height.
    pub height: u32,
}

pub struct ImagePreviewService;

impl ImagePreviewService {
    /// Builds the viewer file for a loaded image embed. Returns `None` until
    /// the image size has been loaded.
    pub fn preview_file(link: &Link, state: &LoadState) -> Option<PreviewFile> {
        let uri = state.uri.clone()?;

        Some(PreviewFile {
            caption: Self::caption(link.effective()).to_string(),
            local_path: uri.clone(),
            uri,
            width: state.original_width,
            height: state.original_height,
        })
    }

    /// Last path segment of a link, without its query string.
    pub fn caption(link: &str) -> &str {
        let path = link.split('?').next().unwrap_or(link);
        path.rsplit('/').next().unwrap_or(path)
    }
}
