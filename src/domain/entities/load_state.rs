use serde::Serialize;

use super::Dimensions;

/// Phase of the embed's size-loading state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    /// No size known yet.
    #[default]
    NotLoaded,
    /// Size resolved and display dimensions computed.
    Loaded,
    /// Image or size fetch failed.
    Error,
}

/// Transient load state owned by a post embed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadState {
    /// Image or size fetch failed.
    pub link_load_error: bool,
    /// Size has been resolved.
    pub link_loaded: bool,
    /// URI the size was resolved for.
    pub uri: Option<String>,
    /// Natural width.
    pub original_width: u32,
    /// Natural height.
    pub original_height: u32,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
}

impl LoadState {
    /// Creates a fresh state with pre-computed display dimensions.
    #[must_use]
    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            width: dimensions.width,
            height: dimensions.height,
            ..Self::default()
        }
    }

    /// Current phase. An error wins over a completed load.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        if self.link_load_error {
            LoadPhase::Error
        } else if self.link_loaded {
            LoadPhase::Loaded
        } else {
            LoadPhase::NotLoaded
        }
    }

    /// Display dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Flags a load error.
    pub fn mark_error(&mut self) {
        self.link_load_error = true;
    }

    /// Records a resolved size.
    pub fn mark_loaded(
        &mut self,
        uri: impl Into<String>,
        original_width: u32,
        original_height: u32,
        dimensions: Dimensions,
    ) {
        self.uri = Some(uri.into());
        self.original_width = original_width;
        self.original_height = original_height;
        self.width = dimensions.width;
        self.height = dimensions.height;
        self.link_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut state = LoadState::default();
        assert_eq!(state.phase(), LoadPhase::NotLoaded);

        state.mark_loaded("https://a.com/x.png", 100, 50, Dimensions::new(100.0, 50.0));
        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(state.uri.as_deref(), Some("https://a.com/x.png"));

        state.mark_error();
        assert_eq!(state.phase(), LoadPhase::Error);
    }
}
