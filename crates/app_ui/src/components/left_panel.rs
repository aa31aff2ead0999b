//! Left panel: navigation tree, filters and preview size
//!
//! Navigation and filter widgets only keep local UI state. The preview
//! slider edits the shared thumbnail size through [`LeftPanelAction`].

use super::widgets::color_tag_chip;
use crate::theme::Theme;
use app_core::{t, ColorTag, I18n, ThumbnailSize, ViewState};
use egui::{CollapsingHeader, RichText, Slider, Ui};
use std::collections::HashSet;

/// Left panel actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftPanelAction {
    SetThumbnailSize(u32),
}

/// A group of the static navigation tree
struct NavGroup {
    title_key: &'static str,
    icon: &'static str,
    children: &'static [(&'static str, &'static str)],
}

const NAV_TREE: [NavGroup; 3] = [
    NavGroup {
        title_key: "nav-quick-access",
        icon: "⭐",
        children: &[
            ("nav-desktop", "🖥"),
            ("nav-documents", "📄"),
            ("nav-pictures", "🖼"),
            ("nav-downloads", "📥"),
        ],
    },
    NavGroup {
        title_key: "nav-recent",
        icon: "🕒",
        children: &[
            ("nav-travel", "📁"),
            ("nav-portrait", "📁"),
            ("nav-wedding", "📁"),
        ],
    },
    NavGroup {
        title_key: "nav-favorites",
        icon: "❤",
        children: &[("nav-featured", "📁"), ("nav-clients", "📁")],
    },
];

/// File type radio choices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileTypeFilter {
    #[default]
    All,
    Images,
    Raw,
}

impl FileTypeFilter {
    const ALL: [FileTypeFilter; 3] = [FileTypeFilter::All, FileTypeFilter::Images, FileTypeFilter::Raw];

    fn label_key(self) -> &'static str {
        match self {
            FileTypeFilter::All => "filter-all",
            FileTypeFilter::Images => "filter-images",
            FileTypeFilter::Raw => "filter-raw",
        }
    }
}

const DATE_CHIPS: [&str; 4] = [
    "filter-today",
    "filter-yesterday",
    "filter-this-week",
    "filter-this-month",
];

/// Left panel with local filter state
#[derive(Debug, Default)]
pub struct LeftPanel {
    /// Highlighted navigation node (label key)
    nav_selected: Option<&'static str>,
    file_type: FileTypeFilter,
    dates: HashSet<&'static str>,
    tags: HashSet<ColorTag>,
}

impl LeftPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_type(&self) -> FileTypeFilter {
        self.file_type
    }

    pub fn nav_selected(&self) -> Option<&'static str> {
        self.nav_selected
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        state: &ViewState,
        i18n: &I18n,
        theme: &Theme,
    ) -> Option<LeftPanelAction> {
        let mut action = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                CollapsingHeader::new(RichText::new(i18n.get("nav-title")).strong())
                    .id_salt("left_nav")
                    .default_open(true)
                    .show(ui, |ui| self.nav_ui(ui, i18n));

                CollapsingHeader::new(RichText::new(i18n.get("filter-title")).strong())
                    .id_salt("left_filter")
                    .default_open(true)
                    .show(ui, |ui| self.filter_ui(ui, i18n, theme));

                CollapsingHeader::new(RichText::new(i18n.get("preview-title")).strong())
                    .id_salt("left_preview")
                    .default_open(true)
                    .show(ui, |ui| {
                        let mut px = state.thumbnail_size().get();
                        let slider =
                            Slider::new(&mut px, ThumbnailSize::MIN..=ThumbnailSize::MAX).show_value(false);
                        if ui.add(slider).changed() {
                            action = Some(LeftPanelAction::SetThumbnailSize(px));
                        }
                        ui.label(
                            RichText::new(t!(i18n, "preview-current", size = px))
                                .size(11.0)
                                .color(theme.text_secondary),
                        );
                    });
            });

        action
    }

    fn nav_ui(&mut self, ui: &mut Ui, i18n: &I18n) {
        for group in NAV_TREE.iter() {
            CollapsingHeader::new(format!("{} {}", group.icon, i18n.get(group.title_key)))
                .id_salt(group.title_key)
                .default_open(true)
                .show(ui, |ui| {
                    for &(key, icon) in group.children {
                        let selected = self.nav_selected == Some(key);
                        if ui
                            .selectable_label(selected, format!("{} {}", icon, i18n.get(key)))
                            .clicked()
                        {
                            self.nav_selected = Some(key);
                        }
                    }
                });
        }
    }

    fn filter_ui(&mut self, ui: &mut Ui, i18n: &I18n, theme: &Theme) {
        let caption = |ui: &mut Ui, key: &str| {
            ui.label(RichText::new(i18n.get(key)).size(12.0).color(theme.text_secondary));
        };

        caption(ui, "filter-file-type");
        for choice in FileTypeFilter::ALL {
            ui.radio_value(&mut self.file_type, choice, i18n.get(choice.label_key()));
        }

        ui.add_space(6.0);
        caption(ui, "filter-date");
        ui.horizontal_wrapped(|ui| {
            for key in DATE_CHIPS {
                let selected = self.dates.contains(key);
                if ui.selectable_label(selected, i18n.get(key)).clicked() {
                    toggle(&mut self.dates, key);
                }
            }
        });

        ui.add_space(6.0);
        caption(ui, "filter-tags");
        ui.horizontal_wrapped(|ui| {
            for tag in ColorTag::ALL {
                let selected = self.tags.contains(&tag);
                if color_tag_chip(ui, tag, selected, i18n).clicked() {
                    toggle(&mut self.tags, tag);
                }
            }
        });
    }
}

fn toggle<T: Eq + std::hash::Hash>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
