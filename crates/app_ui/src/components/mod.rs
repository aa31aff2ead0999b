//! UI Components

pub mod content_area;
pub mod left_panel;
pub mod menu_bar;
pub mod right_panel;
pub mod status_bar;
pub mod toolbar;
pub mod widgets;

pub use content_area::{ContentAction, ContentArea};
pub use left_panel::{LeftPanel, LeftPanelAction};
pub use menu_bar::MenuBar;
pub use right_panel::{RightPanel, RightPanelAction};
pub use status_bar::StatusBar;
pub use toolbar::{Toolbar, ToolbarAction};

use app_core::{CommandSpec, I18n};

/// Label plus shortcut hint, e.g. `刷新 (F5)`
pub fn tooltip(spec: &CommandSpec, i18n: &I18n) -> String {
    let label = i18n.get(spec.label_key);
    match spec.shortcut {
        Some(shortcut) => format!("{} ({})", label, shortcut),
        None => label,
    }
}
