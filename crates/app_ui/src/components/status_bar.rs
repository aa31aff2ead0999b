//! Status bar component

use crate::theme::Theme;
use app_core::{t, Command, CommandId, FileStats, I18n, ViewState};
use egui::{RichText, Ui};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar; the panel toggle returns a command
    pub fn ui(ui: &mut Ui, state: &ViewState, i18n: &I18n, theme: &Theme) -> Option<Command> {
        let mut action = None;
        let small = |text: String| RichText::new(text).size(12.0).color(theme.text_secondary);

        ui.horizontal_centered(|ui| {
            // Path
            ui.label(small(format!("{} {}", i18n.get("statusbar-path"), state.current_path())));

            ui.separator();

            // File counts
            ui.label(small(stats_text(state.file_stats(), i18n)));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let visible = state.right_panel_visible();
                let (icon, hint) = if visible {
                    ("▶", "statusbar-hide-panel")
                } else {
                    ("◀", "statusbar-show-panel")
                };
                if ui.small_button(icon).on_hover_text(i18n.get(hint)).clicked() {
                    action = Some(Command::new(CommandId::VIEW_TOGGLE_RIGHT_PANEL));
                }

                ui.separator();
                ui.label(small(t!(i18n, "statusbar-thumbnail", size = state.thumbnail_size().get())));

                ui.separator();
                ui.label(small(i18n.get(state.view_mode().name_key())));
            });
        });

        action
    }
}

/// `共 N 个文件`, plus the selected count when anything is selected
pub fn stats_text(stats: FileStats, i18n: &I18n) -> String {
    let mut text = t!(i18n, "statusbar-total", total = stats.total);
    if stats.selected > 0 {
        text.push_str(&t!(i18n, "statusbar-selected", count = stats.selected));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{i18n, run_frame};
    use app_core::{PhotoId, ViewMode};

    #[test]
    fn test_stats_text() {
        let i18n = i18n();
        assert_eq!(stats_text(FileStats { total: 24, selected: 0 }, &i18n), "共 24 个文件");
        assert_eq!(stats_text(FileStats { total: 24, selected: 2 }, &i18n), "共 24 个文件, 选中 2 个");
    }

    #[test]
    fn test_stats_follow_view_state() {
        let i18n = i18n();
        let mut state = ViewState::default();
        state.set_collection_len(24);
        state.toggle_selection(PhotoId(5));
        assert_eq!(stats_text(state.file_stats(), &i18n), "共 24 个文件, 选中 1 个");

        state.toggle_selection(PhotoId(5));
        assert_eq!(stats_text(state.file_stats(), &i18n), "共 24 个文件");
    }

    #[test]
    fn test_renders_in_every_mode() {
        let i18n = i18n();
        let theme = Theme::dark();
        let mut state = ViewState::default();

        for mode in ViewMode::ALL {
            state.set_view_mode(mode);
            let mut action = None;
            run_frame(|ctx| {
                egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                    action = StatusBar::ui(ui, &state, &i18n, &theme);
                });
            });
            assert!(action.is_none());
        }
    }
}
