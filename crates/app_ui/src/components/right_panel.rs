//! Right panel: properties of the current selection
//!
//! The panel is rebuilt whenever it is shown again, so rating and note
//! edits live only as long as the panel stays visible.

use super::widgets::{color_tag_chip, field, rating_input, tag};
use crate::theme::Theme;
use app_core::{
    t, Command, CommandId, CommandRegistry, I18n, Inspector, InspectorEdits, PhotoDetail, PhotoRecord, ViewState,
};
use egui::{CollapsingHeader, RichText, Ui};

/// Right panel actions
#[derive(Debug, Clone)]
pub enum RightPanelAction {
    Command(Command),
}

/// Right panel component
#[derive(Debug, Default)]
pub struct RightPanel {
    edits: InspectorEdits,
}

impl RightPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edits(&self) -> &InspectorEdits {
        &self.edits
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        state: &ViewState,
        records: &[PhotoRecord],
        registry: &CommandRegistry,
        i18n: &I18n,
        theme: &Theme,
    ) -> Option<RightPanelAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.strong(i18n.get("panel-properties"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("✕")
                    .on_hover_text(i18n.get("panel-close"))
                    .clicked()
                {
                    action = Some(RightPanelAction::Command(Command::new(
                        CommandId::VIEW_TOGGLE_RIGHT_PANEL,
                    )));
                }
            });
        });
        ui.separator();

        match Inspector::for_selection(state.selection(), records) {
            Inspector::Empty => placeholder(ui, i18n.get("inspector-empty"), theme),
            Inspector::Multiple(count) => placeholder(ui, t!(i18n, "inspector-multiple", count = count), theme),
            Inspector::Single(detail) => {
                self.edits.follow(state.selection().single());
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if let Some(command) = self.single_ui(ui, detail.as_ref(), registry, i18n, theme) {
                            action = Some(RightPanelAction::Command(command));
                        }
                    });
            }
        }

        action
    }

    /// Form for one photo; an unknown record leaves every field blank
    fn single_ui(
        &mut self,
        ui: &mut Ui,
        detail: Option<&PhotoDetail>,
        registry: &CommandRegistry,
        i18n: &I18n,
        theme: &Theme,
    ) -> Option<Command> {
        let mut command = None;

        CollapsingHeader::new(i18n.get("section-basic"))
            .default_open(true)
            .show(ui, |ui| {
                field(ui, &i18n.get("field-name"), text_of(detail, |d| &d.name), theme);
                field(ui, &i18n.get("field-size"), text_of(detail, |d| &d.size), theme);
                field(ui, &i18n.get("field-format"), text_of(detail, |d| &d.kind), theme);
                field(ui, &i18n.get("field-resolution"), text_of(detail, |d| &d.resolution), theme);
                field(ui, &i18n.get("field-modified"), text_of(detail, |d| &d.modified), theme);
            });

        CollapsingHeader::new(i18n.get("section-metadata"))
            .default_open(true)
            .show(ui, |ui| {
                field(ui, &i18n.get("field-camera"), text_of(detail, |d| d.camera.camera), theme);
                field(ui, &i18n.get("field-lens"), text_of(detail, |d| d.camera.lens), theme);
                field(ui, &i18n.get("field-shutter"), text_of(detail, |d| d.camera.shutter), theme);
                field(ui, &i18n.get("field-aperture"), text_of(detail, |d| d.camera.aperture), theme);
                field(ui, &i18n.get("field-iso"), text_of(detail, |d| d.camera.iso), theme);
                field(ui, &i18n.get("field-gps"), text_of(detail, |d| d.camera.gps), theme);
            });

        CollapsingHeader::new(i18n.get("section-tags"))
            .default_open(true)
            .show(ui, |ui| {
                caption(ui, &i18n.get("field-rating"), theme);
                if let Some(rating) = rating_input(ui, self.edits.rating(detail), 18.0, theme) {
                    self.edits.set_rating(rating);
                }

                ui.add_space(4.0);
                caption(ui, &i18n.get("field-tags"), theme);
                ui.horizontal_wrapped(|ui| {
                    if let Some(detail) = detail {
                        color_tag_chip(ui, detail.tag, true, i18n);
                    }
                    tag(ui, i18n.get("tag-add"), theme.background, theme.text_secondary);
                });
            });

        CollapsingHeader::new(i18n.get("section-quick-edit"))
            .default_open(true)
            .show(ui, |ui| {
                caption(ui, &i18n.get("quick-rotate"), theme);
                ui.horizontal(|ui| {
                    for (icon, id) in [
                        ("↺", CommandId::PHOTO_ROTATE_LEFT),
                        ("↻", CommandId::PHOTO_ROTATE_RIGHT),
                    ] {
                        if command_button(ui, icon, id, registry, i18n) {
                            command = Some(Command::new(id));
                        }
                    }
                });

                caption(ui, &i18n.get("quick-crop"), theme);
                if command_button(ui, "✂", CommandId::PHOTO_CROP_PREVIEW, registry, i18n) {
                    command = Some(Command::new(CommandId::PHOTO_CROP_PREVIEW));
                }

                caption(ui, &i18n.get("quick-note"), theme);
                ui.add(
                    egui::TextEdit::multiline(&mut self.edits.note)
                        .hint_text(i18n.get("note-placeholder"))
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
            });

        command
    }
}

fn text_of(detail: Option<&PhotoDetail>, value: impl FnOnce(&PhotoDetail) -> &str) -> &str {
    detail.map(value).unwrap_or_default()
}

fn command_button(ui: &mut Ui, icon: &str, id: &str, registry: &CommandRegistry, i18n: &I18n) -> bool {
    let label = registry
        .spec(id)
        .map(|spec| i18n.get(spec.label_key))
        .unwrap_or_else(|| id.to_string());
    ui.button(format!("{} {}", icon, label)).clicked()
}

fn caption(ui: &mut Ui, text: &str, theme: &Theme) {
    ui.label(RichText::new(text).size(11.0).color(theme.text_secondary));
}

fn placeholder(ui: &mut Ui, text: String, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new(text).color(theme.text_tertiary));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{i18n, run_frame};
    use app_core::{MockPhotoRepository, PhotoId, PhotoRepository};

    fn render(panel: &mut RightPanel, state: &ViewState, records: &[PhotoRecord]) -> Option<RightPanelAction> {
        let registry = CommandRegistry::with_defaults();
        let i18n = i18n();
        let theme = Theme::light();
        let mut action = None;

        run_frame(|ctx| {
            egui::SidePanel::right("right").show(ctx, |ui| {
                action = panel.ui(ui, state, records, &registry, &i18n, &theme);
            });
        });

        action
    }

    #[test]
    fn test_renders_every_arity() {
        let records = MockPhotoRepository::new(24, Some(2)).list_records().unwrap();
        let mut panel = RightPanel::new();
        let mut state = ViewState::default();

        assert!(render(&mut panel, &state, &records).is_none());

        state.toggle_selection(PhotoId(4));
        assert!(render(&mut panel, &state, &records).is_none());

        state.toggle_selection(PhotoId(6));
        assert!(render(&mut panel, &state, &records).is_none());
    }

    #[test]
    fn test_edits_follow_selected_record() {
        let records = MockPhotoRepository::new(24, Some(2)).list_records().unwrap();
        let mut panel = RightPanel::new();
        let mut state = ViewState::default();

        state.toggle_selection(PhotoId(4));
        render(&mut panel, &state, &records);
        panel.edits.note.push_str("client pick");
        render(&mut panel, &state, &records);
        assert_eq!(panel.edits().note, "client pick");

        state.toggle_selection(PhotoId(4));
        state.toggle_selection(PhotoId(8));
        render(&mut panel, &state, &records);
        assert!(panel.edits().note.is_empty());
    }

    #[test]
    fn test_unknown_record_renders_blank() {
        let mut panel = RightPanel::new();
        let mut state = ViewState::default();
        state.toggle_selection(PhotoId(99));
        assert!(render(&mut panel, &state, &[]).is_none());
    }
}
