//! View state store owned by the application root
//!
//! Every field is private; components read through getters and mutate only
//! through the setters below.

use crate::config::ViewConfig;
use crate::photo::PhotoId;
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// Rendering strategy of the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[serde(rename = "grid")]
    Grid,
    #[serde(rename = "list")]
    List,
    #[serde(rename = "detail")]
    Detail,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::List, ViewMode::Detail];

    /// Localization key of the full name ("网格视图")
    pub fn name_key(self) -> &'static str {
        match self {
            ViewMode::Grid => "view-mode-grid",
            ViewMode::List => "view-mode-list",
            ViewMode::Detail => "view-mode-detail",
        }
    }

    /// Localization key of the short segment label ("网格")
    pub fn short_key(self) -> &'static str {
        match self {
            ViewMode::Grid => "view-short-grid",
            ViewMode::List => "view-short-list",
            ViewMode::Detail => "view-short-detail",
        }
    }
}

/// Thumbnail edge length in pixels, always within bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ThumbnailSize(u32);

impl ThumbnailSize {
    pub const MIN: u32 = 50;
    pub const MAX: u32 = 300;
    pub const DEFAULT: u32 = 150;

    pub fn new(px: u32) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Move by a signed step, clamped
    pub fn stepped(self, delta: i32) -> Self {
        let px = (self.0 as i64 + delta as i64).clamp(Self::MIN as i64, Self::MAX as i64);
        Self(px as u32)
    }
}

impl Default for ThumbnailSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Aggregate counts shown in the status bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub total: usize,
    pub selected: usize,
}

/// Shared view state
#[derive(Debug, Clone)]
pub struct ViewState {
    view_mode: ViewMode,
    thumbnail_size: ThumbnailSize,
    left_panel_collapsed: bool,
    right_panel_visible: bool,
    current_path: String,
    selection: SelectionState,
    collection_len: usize,
}

impl ViewState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            view_mode: config.view_mode,
            thumbnail_size: ThumbnailSize::new(config.thumbnail_size),
            left_panel_collapsed: config.left_panel_collapsed,
            right_panel_visible: config.right_panel_visible,
            current_path: config.current_path.clone(),
            selection: SelectionState::new(),
            collection_len: 0,
        }
    }

    // ===== Getters =====

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn thumbnail_size(&self) -> ThumbnailSize {
        self.thumbnail_size
    }

    pub fn left_panel_collapsed(&self) -> bool {
        self.left_panel_collapsed
    }

    pub fn right_panel_visible(&self) -> bool {
        self.right_panel_visible
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Derived from the collection length and the selection
    pub fn file_stats(&self) -> FileStats {
        FileStats {
            total: self.collection_len,
            selected: self.selection.len(),
        }
    }

    // ===== Setters =====

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            tracing::debug!("View mode: {:?} -> {:?}", self.view_mode, mode);
            self.view_mode = mode;
        }
    }

    /// Store a clamped thumbnail size and return what was stored
    pub fn set_thumbnail_size(&mut self, px: u32) -> ThumbnailSize {
        self.thumbnail_size = ThumbnailSize::new(px);
        self.thumbnail_size
    }

    pub fn step_thumbnail_size(&mut self, delta: i32) -> ThumbnailSize {
        self.thumbnail_size = self.thumbnail_size.stepped(delta);
        self.thumbnail_size
    }

    pub fn set_left_panel_collapsed(&mut self, collapsed: bool) {
        self.left_panel_collapsed = collapsed;
    }

    pub fn toggle_left_panel(&mut self) -> bool {
        self.left_panel_collapsed = !self.left_panel_collapsed;
        self.left_panel_collapsed
    }

    pub fn set_right_panel_visible(&mut self, visible: bool) {
        self.right_panel_visible = visible;
    }

    pub fn toggle_right_panel(&mut self) -> bool {
        self.right_panel_visible = !self.right_panel_visible;
        self.right_panel_visible
    }

    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    pub fn toggle_selection(&mut self, id: PhotoId) {
        self.selection.toggle(id);
        tracing::trace!("Selection toggled {}: {} selected", id, self.selection.len());
    }

    pub fn replace_selection(&mut self, ids: impl IntoIterator<Item = PhotoId>) {
        self.selection.replace(ids);
    }

    pub fn select_all(&mut self, ids: impl IntoIterator<Item = PhotoId>) {
        self.selection.select_all(ids);
    }

    pub fn deselect_all(&mut self, ids: impl IntoIterator<Item = PhotoId>) {
        self.selection.deselect_all(ids);
    }

    /// Reported by the catalog when a load completes
    pub fn set_collection_len(&mut self, len: usize) {
        self.collection_len = len;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_size_clamps() {
        let mut state = ViewState::default();
        assert_eq!(state.thumbnail_size().get(), 150);

        assert_eq!(state.set_thumbnail_size(10).get(), ThumbnailSize::MIN);
        assert_eq!(state.set_thumbnail_size(49).get(), 50);
        assert_eq!(state.set_thumbnail_size(301).get(), ThumbnailSize::MAX);
        assert_eq!(state.set_thumbnail_size(500).get(), 300);
        assert_eq!(state.set_thumbnail_size(220).get(), 220);
    }

    #[test]
    fn test_thumbnail_step_clamps() {
        let size = ThumbnailSize::new(290);
        assert_eq!(size.stepped(25).get(), 300);
        assert_eq!(ThumbnailSize::new(60).stepped(-25).get(), 50);
        assert_eq!(ThumbnailSize::new(100).stepped(25).get(), 125);
    }

    #[test]
    fn test_config_values_are_clamped() {
        let config = ViewConfig { thumbnail_size: 9000, ..Default::default() };
        assert_eq!(ViewState::new(&config).thumbnail_size().get(), 300);
    }

    #[test]
    fn test_file_stats_follow_selection() {
        let mut state = ViewState::default();
        state.set_collection_len(24);

        for id in [1, 5, 9, 5, 12, 1] {
            state.toggle_selection(PhotoId(id));
            let stats = state.file_stats();
            assert_eq!(stats.total, 24);
            assert_eq!(stats.selected, state.selection().len());
        }
        assert_eq!(state.file_stats().selected, 2);
    }

    #[test]
    fn test_view_mode_switch_keeps_selection() {
        let mut state = ViewState::default();
        state.set_collection_len(24);
        state.toggle_selection(PhotoId(2));
        state.toggle_selection(PhotoId(8));
        let before = state.selection().clone();

        for mode in [ViewMode::List, ViewMode::Detail, ViewMode::Grid, ViewMode::Detail] {
            state.set_view_mode(mode);
            assert_eq!(state.view_mode(), mode);
            assert_eq!(state.selection(), &before);
            assert_eq!(state.file_stats().total, 24);
        }
    }

    #[test]
    fn test_panels_are_independent() {
        let mut state = ViewState::default();
        assert!(!state.left_panel_collapsed());
        assert!(state.right_panel_visible());

        assert!(state.toggle_left_panel());
        assert!(state.right_panel_visible());

        assert!(!state.toggle_right_panel());
        assert!(state.left_panel_collapsed());
    }

    #[test]
    fn test_replace_selection_updates_stats() {
        let mut state = ViewState::default();
        state.set_collection_len(24);
        state.toggle_selection(PhotoId(1));

        state.replace_selection([PhotoId(9), PhotoId(4), PhotoId(9)]);
        assert_eq!(state.selection().ids(), &[PhotoId(9), PhotoId(4)]);
        assert_eq!(state.file_stats().selected, 2);
    }
}
