//! Application theming

use app_core::{ColorTag, IssueSeverity, PhotoStatus};
use egui::{Color32, FontData, FontDefinitions, FontFamily, Rounding, Visuals};
use std::path::{Path, PathBuf};

/// Fixed bar heights and panel widths in points
pub mod layout {
    pub const MENU_HEIGHT: f32 = 32.0;
    pub const TOOLBAR_HEIGHT: f32 = 40.0;
    pub const STATUS_BAR_HEIGHT: f32 = 24.0;
    pub const LEFT_PANEL_WIDTH: f32 = 200.0;
    pub const RIGHT_PANEL_WIDTH: f32 = 300.0;
    pub const CARD_RADIUS: f32 = 6.0;
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Content area background
    pub background: Color32,
    /// Bars and side panels
    pub panel: Color32,
    /// Tiles and cards
    pub surface: Color32,
    pub divider: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_tertiary: Color32,
    pub primary: Color32,
    pub selection_fill: Color32,
    pub placeholder: Color32,
    pub star_active: Color32,
    pub star_inactive: Color32,
    pub issue_red: Color32,
    pub issue_orange: Color32,
}

impl Theme {
    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(245, 245, 245),
            panel: Color32::from_rgb(255, 255, 255),
            surface: Color32::from_rgb(255, 255, 255),
            divider: Color32::from_rgb(232, 232, 232),
            text_primary: Color32::from_rgb(38, 38, 38),
            text_secondary: Color32::from_rgb(89, 89, 89),
            text_tertiary: Color32::from_rgb(140, 140, 140),
            primary: Color32::from_rgb(24, 144, 255), // #1890ff
            selection_fill: Color32::from_rgb(230, 247, 255),
            placeholder: Color32::from_rgb(217, 217, 217),
            star_active: Color32::from_rgb(250, 173, 20),
            star_inactive: Color32::from_rgb(217, 217, 217),
            issue_red: Color32::from_rgb(245, 34, 45),
            issue_orange: Color32::from_rgb(250, 140, 22),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(20, 20, 20),
            panel: Color32::from_rgb(31, 31, 31),
            surface: Color32::from_rgb(38, 38, 38),
            divider: Color32::from_rgb(48, 48, 48),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(176, 176, 176),
            text_tertiary: Color32::from_rgb(125, 125, 125),
            primary: Color32::from_rgb(23, 125, 220),
            selection_fill: Color32::from_rgb(17, 29, 44),
            placeholder: Color32::from_rgb(67, 67, 67),
            star_active: Color32::from_rgb(216, 189, 20),
            star_inactive: Color32::from_rgb(67, 67, 67),
            issue_red: Color32::from_rgb(220, 68, 70),
            issue_orange: Color32::from_rgb(216, 123, 24),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    /// Apply theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_theme(if self.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let mut style = (*ctx.style()).clone();
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.panel;
        visuals.window_fill = self.panel;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.background;
        visuals.override_text_color = Some(self.text_primary);

        visuals.widgets.noninteractive.bg_stroke.color = self.divider;
        visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        visuals.widgets.hovered.bg_fill = self.primary.linear_multiply(0.15);
        visuals.widgets.active.bg_fill = self.primary.linear_multiply(0.3);

        visuals.selection.bg_fill = self.primary;
        visuals.selection.stroke.color = self.primary;

        visuals.window_rounding = Rounding::same(layout::CARD_RADIUS);

        style.visuals = visuals;
        ctx.set_style(style);
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn status_color(status: PhotoStatus) -> Color32 {
        let [r, g, b] = status.color();
        Color32::from_rgb(r, g, b)
    }

    pub fn tag_color(tag: ColorTag) -> Color32 {
        let [r, g, b] = tag.color();
        Color32::from_rgb(r, g, b)
    }

    pub fn issue_color(&self, severity: IssueSeverity) -> Color32 {
        match severity {
            IssueSeverity::Red => self.issue_red,
            IssueSeverity::Orange => self.issue_orange,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// System fonts with CJK coverage, tried in order
const CJK_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

/// Install a CJK-capable font; returns the file that was used
pub fn install_fonts(ctx: &egui::Context, configured: Option<&Path>) -> Option<PathBuf> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(CJK_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        match std::fs::read(&path) {
            Ok(data) => {
                ctx.set_fonts(font_definitions(data));
                tracing::info!("UI font: {:?}", path);
                return Some(path);
            }
            Err(e) => tracing::trace!("Font {:?} not usable: {}", path, e),
        }
    }

    tracing::warn!("No CJK font found, Chinese text will not render; set general.ui_font");
    None
}

fn font_definitions(data: Vec<u8>) -> FontDefinitions {
    const NAME: &str = "ui_cjk";

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(NAME.to_owned(), FontData::from_owned(data));

    if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
        family.insert(0, NAME.to_owned());
    }
    if let Some(family) = fonts.families.get_mut(&FontFamily::Monospace) {
        family.push(NAME.to_owned());
    }

    fonts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert!(Theme::by_name("Dark").is_dark());
        assert!(!Theme::by_name("light").is_dark());
        assert!(!Theme::by_name("solarized").is_dark());
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(Theme::status_color(PhotoStatus::Good), Color32::from_rgb(0x52, 0xc4, 0x1a));
        assert_eq!(Theme::status_color(PhotoStatus::Bad), Color32::from_rgb(0xff, 0x4d, 0x4f));
    }

    #[test]
    fn test_missing_font_keeps_defaults() {
        let ctx = egui::Context::default();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.ttf");
        let used = install_fonts(&ctx, Some(&missing));
        assert_ne!(used.as_deref(), Some(missing.as_path()));
    }
}
