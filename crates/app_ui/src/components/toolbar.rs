//! Toolbar component with navigation, view switch, thumbnail size and batch tools

use super::tooltip;
use crate::theme::{layout, Theme};
use app_core::{Command, CommandId, CommandRegistry, I18n, ThumbnailSize, ViewMode, ViewState};
use egui::{Button, RichText, Slider, Ui, Vec2};

/// Toolbar actions
#[derive(Debug, Clone)]
pub enum ToolbarAction {
    Command(Command),
    SetThumbnailSize(u32),
}

/// Toolbar component
pub struct Toolbar;

impl Toolbar {
    pub fn ui(
        ui: &mut Ui,
        state: &ViewState,
        registry: &CommandRegistry,
        i18n: &I18n,
        theme: &Theme,
    ) -> Option<ToolbarAction> {
        let mut action = None;

        ui.horizontal_centered(|ui| {
            ui.set_height(layout::TOOLBAR_HEIGHT);

            // === Navigation (no-ops) ===
            for (icon, id) in [
                ("⬅", CommandId::NAV_BACK),
                ("➡", CommandId::NAV_FORWARD),
                ("🔄", CommandId::NAV_REFRESH),
            ] {
                let mut response = ui.add(Button::new(icon).min_size(Vec2::splat(28.0)));
                if let Some(spec) = registry.spec(id) {
                    response = response.on_hover_text(tooltip(spec, i18n));
                }
                if response.clicked() {
                    action = Some(ToolbarAction::Command(Command::new(id)));
                }
            }

            ui.separator();

            // === View mode segments ===
            ui.scope(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for mode in ViewMode::ALL {
                    let selected = state.view_mode() == mode;
                    let label = format!("{} {}", mode_icon(mode), i18n.get(mode.short_key()));
                    if ui.selectable_label(selected, label).clicked() && !selected {
                        action = Some(ToolbarAction::Command(Command::new(
                            CommandId::for_view_mode(mode),
                        )));
                    }
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right to left: primary button first
                let batch = Button::new(
                    RichText::new(format!("⚡ {}", label_of(registry, i18n, CommandId::TOOLS_BATCH_PROCESS)))
                        .color(egui::Color32::WHITE),
                )
                .fill(theme.primary);
                if Self::command_button(ui, batch, registry, i18n, CommandId::TOOLS_BATCH_PROCESS) {
                    action = Some(ToolbarAction::Command(Command::new(CommandId::TOOLS_BATCH_PROCESS)));
                }

                for (icon, id) in [("⛃", CommandId::TOOLBAR_FILTER), ("⇅", CommandId::TOOLBAR_SORT)] {
                    let button = Button::new(format!("{} {}", icon, label_of(registry, i18n, id)));
                    if Self::command_button(ui, button, registry, i18n, id) {
                        action = Some(ToolbarAction::Command(Command::new(id)));
                    }
                }

                ui.separator();

                // === Thumbnail size ===
                let mut px = state.thumbnail_size().get();
                let slider = Slider::new(&mut px, ThumbnailSize::MIN..=ThumbnailSize::MAX)
                    .suffix("px")
                    .show_value(false);
                let response = ui
                    .add_sized([120.0, 18.0], slider)
                    .on_hover_text(format!("{}px", px));
                if response.changed() {
                    action = Some(ToolbarAction::SetThumbnailSize(px));
                }

                ui.label(
                    RichText::new(i18n.get("toolbar-thumbnail-size"))
                        .size(11.0)
                        .color(theme.text_secondary),
                );
            });
        });

        action
    }

    fn command_button(
        ui: &mut Ui,
        button: Button<'_>,
        registry: &CommandRegistry,
        i18n: &I18n,
        id: &str,
    ) -> bool {
        let mut response = ui.add(button);
        if let Some(spec) = registry.spec(id) {
            response = response.on_hover_text(tooltip(spec, i18n));
        }
        response.clicked()
    }
}

fn mode_icon(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "▦",
        ViewMode::List => "☰",
        ViewMode::Detail => "ℹ",
    }
}

fn label_of(registry: &CommandRegistry, i18n: &I18n, id: &str) -> String {
    registry
        .spec(id)
        .map(|spec| i18n.get(spec.label_key))
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{i18n, run_frame};

    #[test]
    fn test_idle_frame_has_no_action() {
        let registry = CommandRegistry::with_defaults();
        let i18n = i18n();
        let theme = Theme::light();
        let state = ViewState::default();
        let mut action = None;

        run_frame(|ctx| {
            egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
                action = Toolbar::ui(ui, &state, &registry, &i18n, &theme);
            });
        });

        assert!(action.is_none());
    }

    #[test]
    fn test_tooltips_carry_shortcuts() {
        let registry = CommandRegistry::with_defaults();
        let i18n = i18n();
        let spec = registry.spec(CommandId::NAV_REFRESH).unwrap();
        assert_eq!(tooltip(spec, &i18n), "刷新 (F5)");
        let spec = registry.spec(CommandId::TOOLS_BATCH_PROCESS).unwrap();
        assert_eq!(tooltip(spec, &i18n), "批量处理 (Ctrl+B)");
        assert_eq!(label_of(&registry, &i18n, CommandId::TOOLBAR_SORT), "排序");
    }
}
