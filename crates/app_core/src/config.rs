//! Application configuration

use crate::{AppError, ViewMode};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub view: ViewConfig,
    pub content: ContentConfig,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            view: ViewConfig::default(),
            content: ContentConfig::default(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub language: String,
    pub theme: String,
    /// Font file with CJK coverage, tried before the system fonts
    pub ui_font: Option<PathBuf>,
    /// Extra translations, one subdirectory per locale
    pub locale_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: "zh-CN".to_string(),
            theme: "light".to_string(),
            ui_font: None,
            locale_dir: None,
        }
    }
}

/// Initial values of the view-state store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub view_mode: ViewMode,
    pub thumbnail_size: u32,
    pub left_panel_collapsed: bool,
    pub right_panel_visible: bool,
    pub current_path: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grid,
            thumbnail_size: 150,
            left_panel_collapsed: false,
            right_panel_visible: true,
            current_path: "桌面 > 图片 > 旅行".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Number of generated photos
    pub photo_count: u32,
    /// Simulated load delay on content mount
    pub load_delay_ms: u64,
    /// Rows per page in list view
    pub page_size: usize,
    /// Fixed seed for the generated collection
    pub seed: Option<u64>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            photo_count: crate::repository::DEFAULT_PHOTO_COUNT,
            load_delay_ms: 1000,
            page_size: crate::listing::DEFAULT_PAGE_SIZE,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::from_toml_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no component can work with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.content.page_size == 0 {
            return Err(AppError::Config("content.page_size must be positive".into()));
        }
        if self.content.photo_count > 999 {
            return Err(AppError::Config(format!(
                "content.photo_count {} exceeds 999",
                self.content.photo_count
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "PhotoDesk", "PhotoDesk")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }
}

fn default_keybindings() -> HashMap<String, Vec<String>> {
    use crate::CommandId;

    let mut kb = HashMap::new();

    // ========================================
    // View (view.*)
    // ========================================

    kb.insert(CommandId::VIEW_GRID.into(), vec!["Ctrl+1".into()]);
    kb.insert(CommandId::VIEW_LIST.into(), vec!["Ctrl+2".into()]);
    kb.insert(CommandId::VIEW_DETAIL.into(), vec!["Ctrl+3".into()]);
    kb.insert(CommandId::VIEW_ZOOM_IN.into(), vec!["Ctrl+Plus".into(), "Ctrl+=".into()]);
    kb.insert(CommandId::VIEW_ZOOM_OUT.into(), vec!["Ctrl+Minus".into(), "Ctrl+-".into()]);
    kb.insert(CommandId::VIEW_TOGGLE_LEFT_PANEL.into(), vec!["F3".into()]);
    kb.insert(CommandId::VIEW_TOGGLE_RIGHT_PANEL.into(), vec!["F4".into()]);

    // ========================================
    // Navigation (nav.*)
    // ========================================

    kb.insert(CommandId::NAV_BACK.into(), vec!["Alt+Left".into()]);
    kb.insert(CommandId::NAV_FORWARD.into(), vec!["Alt+Right".into()]);
    kb.insert(CommandId::NAV_REFRESH.into(), vec!["F5".into()]);

    // ========================================
    // Toolbar
    // ========================================

    kb.insert(CommandId::TOOLBAR_SORT.into(), vec!["Ctrl+s".into()]);
    kb.insert(CommandId::TOOLBAR_FILTER.into(), vec!["Ctrl+f".into()]);
    kb.insert(CommandId::TOOLS_BATCH_PROCESS.into(), vec!["Ctrl+b".into()]);

    kb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.general.language, "zh-CN");
        assert_eq!(config.view.view_mode, ViewMode::Grid);
        assert_eq!(config.view.thumbnail_size, 150);
        assert!(config.view.right_panel_visible);
        assert_eq!(config.content.photo_count, 24);
        assert_eq!(config.content.page_size, 20);
        assert!(config.keybindings.contains_key("view.toggle_right_panel"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [view]
            view_mode = "list"
            thumbnail_size = 220

            [content]
            load_delay_ms = 0
            seed = 11
            "#,
        )
        .unwrap();

        assert_eq!(config.view.view_mode, ViewMode::List);
        assert_eq!(config.view.thumbnail_size, 220);
        assert_eq!(config.content.load_delay_ms, 0);
        assert_eq!(config.content.seed, Some(11));
        assert_eq!(config.content.photo_count, 24);
        assert_eq!(config.general.theme, "light");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = AppConfig::from_toml_str("[view\nview_mode = ");
        assert!(matches!(result, Err(AppError::ConfigParse(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = AppConfig::from_toml_str("[content]\npage_size = 0");
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = AppConfig::from_toml_str("[content]\nphoto_count = 5000");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let missing = AppConfig::load_from(&path).unwrap();
        assert_eq!(missing.view.thumbnail_size, 150);

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[general]\ntheme = \"dark\"").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.general.theme, "dark");
    }
}
