use crate::domain::entities::{DeviceDimensions, Dimensions};

/// Tallest an inline image may be drawn.
pub const IMAGE_MAX_HEIGHT: f64 = 350.0;
/// Smallest side an inline image is scaled up to.
pub const IMAGE_MIN_DIMENSION: f64 = 50.0;
/// Horizontal space taken by the avatar column and margins.
pub const VIEWPORT_IMAGE_OFFSET: f64 = 70.0;
/// Extra indentation of posts inside a reply thread.
pub const VIEWPORT_IMAGE_REPLY_OFFSET: f64 = 11.0;
/// Width of the permanent sidebar on tablets.
pub const TABLET_SIDEBAR_WIDTH: f64 = 250.0;

pub struct DimensionCalculator;

impl DimensionCalculator {
    /// Fits an image of natural `width` x `height` into the viewport.
    ///
    /// Images wider than the viewport shrink to it, tiny images grow to
    /// [`IMAGE_MIN_DIMENSION`], and the height is clamped to
    /// [`IMAGE_MAX_HEIGHT`] (or `viewport_height` when given). The aspect ratio
    /// is kept throughout. Zero on either side yields zero dimensions.
    #[must_use]
    pub fn calculate(
        height: f64,
        width: f64,
        viewport_width: f64,
        viewport_height: Option<f64>,
    ) -> Dimensions {
        if height <= 0.0 || width <= 0.0 {
            return Dimensions::ZERO;
        }

        let ratio = height / width;
        let height_ratio = width / height;
        let viewport_height = viewport_height.filter(|h| *h > 0.0);

        let mut image_width = width;
        let mut image_height = height;

        if width >= viewport_width {
            image_width = viewport_width;
            image_height = image_width * ratio;
        } else if width < IMAGE_MIN_DIMENSION {
            image_width = IMAGE_MIN_DIMENSION;
            image_height = image_width * ratio;
        }

        let exceeds_viewport = viewport_height.is_some_and(|h| image_height > h);

        if (image_height > IMAGE_MAX_HEIGHT || exceeds_viewport)
            && viewport_height.unwrap_or(0.0) <= IMAGE_MAX_HEIGHT
        {
            image_height = viewport_height.unwrap_or(IMAGE_MAX_HEIGHT);
            image_width = image_height * height_ratio;
        } else if image_height < IMAGE_MIN_DIMENSION
            && IMAGE_MIN_DIMENSION * height_ratio <= viewport_width
        {
            image_height = IMAGE_MIN_DIMENSION;
            image_width = image_height * height_ratio;
        } else if let Some(h) = viewport_height
            && image_height > h
        {
            image_height = h;
            image_width = image_height * height_ratio;
        }

        Dimensions::new(image_width, image_height)
    }

    /// Width available to inline content in a post.
    ///
    /// Measured against the portrait width so rotating the device does not
    /// resize embeds.
    #[must_use]
    pub fn viewport_width(device: &DeviceDimensions, is_reply_post: bool) -> f64 {
        let mut width = device.width.min(device.height) - VIEWPORT_IMAGE_OFFSET;

        if device.permanent_sidebar {
            width -= TABLET_SIDEBAR_WIDTH;
        }

        if is_reply_post {
            width -= VIEWPORT_IMAGE_REPLY_OFFSET;
        }

        width.max(0.0)
    }
}
