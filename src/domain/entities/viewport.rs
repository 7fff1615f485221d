use serde::{Deserialize, Serialize};

/// Display size of an embed in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
}

impl Dimensions {
    /// Zero-sized dimensions.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates new dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if either side is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Window size of the device the post is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceDimensions {
    /// Window width.
    pub width: f64,
    /// Window height.
    pub height: f64,
    /// Tablet layout with a permanently visible sidebar.
    #[serde(default)]
    pub permanent_sidebar: bool,
}

impl DeviceDimensions {
    /// Creates device dimensions without a permanent sidebar.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            permanent_sidebar: false,
        }
    }

    /// Sets the permanent sidebar flag.
    #[must_use]
    pub const fn with_permanent_sidebar(mut self, permanent_sidebar: bool) -> Self {
        self.permanent_sidebar = permanent_sidebar;
        self
    }
}

impl Default for DeviceDimensions {
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}
