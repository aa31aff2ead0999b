//! Command system for menu items, toolbar buttons and key bindings
//!
//! Every visible affordance is registered here with a label and an optional
//! shortcut. Commands without a feature behind them use [`Unimplemented`].

use crate::{AppError, ViewMode, ViewState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Command identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub String);

impl CommandId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Command that switches to `mode`
    pub fn for_view_mode(mode: ViewMode) -> &'static str {
        match mode {
            ViewMode::Grid => Self::VIEW_GRID,
            ViewMode::List => Self::VIEW_LIST,
            ViewMode::Detail => Self::VIEW_DETAIL,
        }
    }

    // File menu
    pub const FILE_NEW_FOLDER: &'static str = "file.new_folder";
    pub const FILE_IMPORT: &'static str = "file.import";
    pub const FILE_EXPORT: &'static str = "file.export";
    pub const FILE_BATCH_RENAME: &'static str = "file.batch_rename";

    // Edit menu
    pub const EDIT_COPY: &'static str = "edit.copy";
    pub const EDIT_PASTE: &'static str = "edit.paste";
    pub const EDIT_BATCH_EDIT: &'static str = "edit.batch_edit";
    pub const EDIT_PREFERENCES: &'static str = "edit.preferences";

    // View menu
    pub const VIEW_GRID: &'static str = "view.grid";
    pub const VIEW_LIST: &'static str = "view.list";
    pub const VIEW_DETAIL: &'static str = "view.detail";
    pub const VIEW_ZOOM_IN: &'static str = "view.zoom_in";
    pub const VIEW_ZOOM_OUT: &'static str = "view.zoom_out";
    pub const VIEW_TOGGLE_LEFT_PANEL: &'static str = "view.toggle_left_panel";
    pub const VIEW_TOGGLE_RIGHT_PANEL: &'static str = "view.toggle_right_panel";

    // Filter menu
    pub const FILTER_BY_TYPE: &'static str = "filter.by_type";
    pub const FILTER_BY_DATE: &'static str = "filter.by_date";
    pub const FILTER_BY_SIZE: &'static str = "filter.by_size";
    pub const FILTER_BY_TAG: &'static str = "filter.by_tag";

    // Tools menu
    pub const TOOLS_BATCH_PROCESS: &'static str = "tools.batch_process";
    pub const TOOLS_METADATA_EDIT: &'static str = "tools.metadata_edit";
    pub const TOOLS_PLUGINS: &'static str = "tools.plugins";

    // Help menu
    pub const HELP_TUTORIAL: &'static str = "help.tutorial";
    pub const HELP_ABOUT: &'static str = "help.about";
    pub const HELP_CHECK_UPDATE: &'static str = "help.check_update";

    // Toolbar
    pub const NAV_BACK: &'static str = "nav.back";
    pub const NAV_FORWARD: &'static str = "nav.forward";
    pub const NAV_REFRESH: &'static str = "nav.refresh";
    pub const TOOLBAR_SORT: &'static str = "toolbar.sort";
    pub const TOOLBAR_FILTER: &'static str = "toolbar.filter";

    // Right panel quick edit
    pub const PHOTO_ROTATE_LEFT: &'static str = "photo.rotate_left";
    pub const PHOTO_ROTATE_RIGHT: &'static str = "photo.rotate_right";
    pub const PHOTO_CROP_PREVIEW: &'static str = "photo.crop_preview";
}

/// Command with optional parameters
#[derive(Debug, Clone)]
pub struct Command {
    pub id: CommandId,
    pub params: CommandParams,
}

/// Command parameters
#[derive(Debug, Clone, Default)]
pub struct CommandParams {
    pub int_value: Option<i64>,
}

impl Command {
    pub fn new(id: &str) -> Self {
        Self {
            id: CommandId::new(id),
            params: CommandParams::default(),
        }
    }

    pub fn with_int(mut self, value: i64) -> Self {
        self.params.int_value = Some(value);
        self
    }
}

/// Result of running a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The view state changed
    Applied,
    /// Nothing happened
    Ignored,
}

/// Command handler trait
pub trait CommandHandler: Send + Sync {
    fn execute(&self, cmd: &Command, state: &mut ViewState) -> Result<CommandOutcome, AppError>;

    fn can_execute(&self, _state: &ViewState) -> bool {
        true
    }
}

/// Registration data shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    /// Localization key of the label
    pub label_key: &'static str,
    /// Shortcut hint shown next to the label
    pub shortcut: Option<&'static str>,
}

/// Placeholder for affordances that have no feature yet
pub struct Unimplemented;

impl CommandHandler for Unimplemented {
    fn execute(&self, cmd: &Command, _state: &mut ViewState) -> Result<CommandOutcome, AppError> {
        tracing::debug!("Command {} has no implementation", cmd.id.as_str());
        Ok(CommandOutcome::Ignored)
    }
}

/// Switch the content area rendering strategy
pub struct SetViewMode(pub ViewMode);

impl CommandHandler for SetViewMode {
    fn execute(&self, _cmd: &Command, state: &mut ViewState) -> Result<CommandOutcome, AppError> {
        if state.view_mode() == self.0 {
            return Ok(CommandOutcome::Ignored);
        }
        state.set_view_mode(self.0);
        Ok(CommandOutcome::Applied)
    }
}

/// Grow or shrink the thumbnails; the command's int param overrides the step
pub struct ZoomThumbnails(pub i32);

impl ZoomThumbnails {
    pub const STEP: i32 = 25;
}

impl CommandHandler for ZoomThumbnails {
    fn execute(&self, cmd: &Command, state: &mut ViewState) -> Result<CommandOutcome, AppError> {
        let delta = cmd
            .params
            .int_value
            .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .unwrap_or(self.0);
        let before = state.thumbnail_size();
        let after = state.step_thumbnail_size(delta);
        Ok(if before == after {
            CommandOutcome::Ignored
        } else {
            CommandOutcome::Applied
        })
    }
}

/// Side panels that can be toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Left,
    Right,
}

pub struct TogglePanel(pub PanelSide);

impl CommandHandler for TogglePanel {
    fn execute(&self, _cmd: &Command, state: &mut ViewState) -> Result<CommandOutcome, AppError> {
        match self.0 {
            PanelSide::Left => {
                state.toggle_left_panel();
            }
            PanelSide::Right => {
                state.toggle_right_panel();
            }
        }
        Ok(CommandOutcome::Applied)
    }
}

struct Entry {
    spec: CommandSpec,
    handler: Box<dyn CommandHandler>,
}

/// Command registry
pub struct CommandRegistry {
    entries: HashMap<&'static str, Entry>,
}

impl CommandRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry with every menu, toolbar and panel command
    pub fn with_defaults() -> Self {
        use CommandId as C;

        let mut reg = Self::new();

        // ========================================
        // Implemented
        // ========================================

        reg.register(spec(C::VIEW_GRID, "cmd-view-grid", Some("Ctrl+1")), SetViewMode(ViewMode::Grid));
        reg.register(spec(C::VIEW_LIST, "cmd-view-list", Some("Ctrl+2")), SetViewMode(ViewMode::List));
        reg.register(spec(C::VIEW_DETAIL, "cmd-view-detail", Some("Ctrl+3")), SetViewMode(ViewMode::Detail));
        reg.register(
            spec(C::VIEW_ZOOM_IN, "cmd-view-zoom-in", Some("Ctrl+Plus")),
            ZoomThumbnails(ZoomThumbnails::STEP),
        );
        reg.register(
            spec(C::VIEW_ZOOM_OUT, "cmd-view-zoom-out", Some("Ctrl+Minus")),
            ZoomThumbnails(-ZoomThumbnails::STEP),
        );
        reg.register(
            spec(C::VIEW_TOGGLE_LEFT_PANEL, "cmd-view-toggle-left-panel", Some("F3")),
            TogglePanel(PanelSide::Left),
        );
        reg.register(
            spec(C::VIEW_TOGGLE_RIGHT_PANEL, "cmd-view-toggle-right-panel", Some("F4")),
            TogglePanel(PanelSide::Right),
        );

        // ========================================
        // Placeholders
        // ========================================

        let placeholders = [
            spec(C::FILE_NEW_FOLDER, "cmd-file-new-folder", None),
            spec(C::FILE_IMPORT, "cmd-file-import", None),
            spec(C::FILE_EXPORT, "cmd-file-export", None),
            spec(C::FILE_BATCH_RENAME, "cmd-file-batch-rename", None),
            spec(C::EDIT_COPY, "cmd-edit-copy", None),
            spec(C::EDIT_PASTE, "cmd-edit-paste", None),
            spec(C::EDIT_BATCH_EDIT, "cmd-edit-batch-edit", None),
            spec(C::EDIT_PREFERENCES, "cmd-edit-preferences", None),
            spec(C::FILTER_BY_TYPE, "cmd-filter-by-type", None),
            spec(C::FILTER_BY_DATE, "cmd-filter-by-date", None),
            spec(C::FILTER_BY_SIZE, "cmd-filter-by-size", None),
            spec(C::FILTER_BY_TAG, "cmd-filter-by-tag", None),
            spec(C::TOOLS_BATCH_PROCESS, "cmd-tools-batch-process", Some("Ctrl+B")),
            spec(C::TOOLS_METADATA_EDIT, "cmd-tools-metadata-edit", None),
            spec(C::TOOLS_PLUGINS, "cmd-tools-plugins", None),
            spec(C::HELP_TUTORIAL, "cmd-help-tutorial", None),
            spec(C::HELP_ABOUT, "cmd-help-about", None),
            spec(C::HELP_CHECK_UPDATE, "cmd-help-check-update", None),
            spec(C::NAV_BACK, "cmd-nav-back", Some("Alt+←")),
            spec(C::NAV_FORWARD, "cmd-nav-forward", Some("Alt+→")),
            spec(C::NAV_REFRESH, "cmd-nav-refresh", Some("F5")),
            spec(C::TOOLBAR_SORT, "cmd-toolbar-sort", Some("Ctrl+S")),
            spec(C::TOOLBAR_FILTER, "cmd-toolbar-filter", Some("Ctrl+F")),
            spec(C::PHOTO_ROTATE_LEFT, "cmd-photo-rotate-left", None),
            spec(C::PHOTO_ROTATE_RIGHT, "cmd-photo-rotate-right", None),
            spec(C::PHOTO_CROP_PREVIEW, "cmd-photo-crop-preview", None),
        ];

        for placeholder in placeholders {
            reg.register(placeholder, Unimplemented);
        }

        reg
    }

    pub fn register<H: CommandHandler + 'static>(&mut self, spec: CommandSpec, handler: H) {
        self.entries.insert(
            spec.id,
            Entry {
                spec,
                handler: Box::new(handler),
            },
        );
    }

    pub fn spec(&self, id: &str) -> Option<&CommandSpec> {
        self.entries.get(id).map(|entry| &entry.spec)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dispatch(&self, cmd: &Command, state: &mut ViewState) -> Result<CommandOutcome, AppError> {
        let entry = self
            .entries
            .get(cmd.id.as_str())
            .ok_or_else(|| AppError::UnknownCommand(cmd.id.as_str().to_string()))?;

        if !entry.handler.can_execute(state) {
            tracing::debug!("Command {} cannot be executed in current context", cmd.id.as_str());
            return Ok(CommandOutcome::Ignored);
        }

        let outcome = entry.handler.execute(cmd, state)?;
        tracing::debug!("Command {} -> {:?}", cmd.id.as_str(), outcome);
        Ok(outcome)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn spec(id: &'static str, label_key: &'static str, shortcut: Option<&'static str>) -> CommandSpec {
    CommandSpec {
        id,
        label_key,
        shortcut,
    }
}
