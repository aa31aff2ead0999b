//! Content area: loading indicator, then the grid, list or detail view
//!
//! Every view renders the same collection and selection. Clicking a tile or
//! card toggles that photo; the click is consumed by the tile, the area
//! background has no click behavior. Sorting and pagination of the list view
//! are local to this component.

use super::widgets::{
    field, issue_tag, paint_issue_marks, paint_placeholder, paint_stars, selection_checkbox, star_rating,
    status_tag, tag,
};
use crate::theme::{layout, Theme};
use app_core::{
    t, I18n, ListView, PhotoId, PhotoRecord, PhotoStatus, SelectionState, SortDirection, SortKey, ViewMode,
    ViewState, PAGE_SIZE_OPTIONS,
};
use egui::{Align2, Color32, FontId, Id, Rect, Response, RichText, Sense, Stroke, Ui, Vec2};

/// Gap between grid tiles
const GUTTER: f32 = 10.0;
/// Caption strip below a grid tile
const NAME_HEIGHT: f32 = 22.0;
const DETAIL_PREVIEW: Vec2 = Vec2::new(400.0, 300.0);
const LIST_THUMB: f32 = 40.0;

/// Selection changes requested by the content area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAction {
    Toggle(PhotoId),
    /// Header checkbox on: add the visible page
    SelectAll(Vec<PhotoId>),
    /// Header checkbox off: remove the visible page
    DeselectAll(Vec<PhotoId>),
}

/// Widget id of the clickable area that toggles `photo` in `mode`
pub fn photo_hit_id(mode: ViewMode, photo: PhotoId) -> Id {
    Id::new(("photo_hit", mode, photo.0))
}

/// Content area component
#[derive(Debug, Default)]
pub struct ContentArea {
    list: ListView,
}

impl ContentArea {
    pub fn new(page_size: usize) -> Self {
        Self {
            list: ListView::new(page_size),
        }
    }

    pub fn list_view(&self) -> &ListView {
        &self.list
    }

    /// Render the area; `records` is `None` while the collection is loading
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        state: &ViewState,
        records: Option<&[PhotoRecord]>,
        i18n: &I18n,
        theme: &Theme,
    ) -> Option<ContentAction> {
        let Some(records) = records else {
            Self::loading_ui(ui, i18n, theme);
            return None;
        };

        let selection = state.selection();

        match state.view_mode() {
            ViewMode::Grid => {
                grid_ui(ui, records, selection, state.thumbnail_size().get() as f32, i18n, theme)
            }
            ViewMode::List => self.list_ui(ui, records, selection, i18n, theme),
            ViewMode::Detail => detail_ui(ui, records, selection, i18n, theme),
        }
    }

    fn loading_ui(ui: &mut Ui, i18n: &I18n, theme: &Theme) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.add(egui::Spinner::new().size(32.0).color(theme.primary));
            ui.add_space(8.0);
            ui.label(RichText::new(i18n.get("content-loading")).color(theme.text_secondary));
        });
    }

    // === List view ===

    fn list_ui(
        &mut self,
        ui: &mut Ui,
        records: &[PhotoRecord],
        selection: &SelectionState,
        i18n: &I18n,
        theme: &Theme,
    ) -> Option<ContentAction> {
        let mut action = None;
        let total = records.len();
        self.list.pagination.clamp(total);
        let rows = self.list.rows(records);
        let page_ids: Vec<PhotoId> = rows.iter().map(|r| r.id).collect();

        let footer_height = 36.0;
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - footer_height).max(0.0))
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("photo_list")
                    .striped(true)
                    .num_columns(8)
                    .spacing([16.0, 6.0])
                    .min_row_height(LIST_THUMB)
                    .show(ui, |ui| {
                        // Header
                        let mut all = page_checked(&page_ids, selection);
                        if ui.checkbox(&mut all, "").changed() {
                            action = Some(if all {
                                ContentAction::SelectAll(page_ids.clone())
                            } else {
                                ContentAction::DeselectAll(page_ids.clone())
                            });
                        }
                        ui.strong(i18n.get("list-col-thumbnail"));
                        self.sort_header(ui, i18n.get("list-col-name"), SortKey::Name);
                        self.sort_header(ui, i18n.get("field-size"), SortKey::Size);
                        ui.strong(i18n.get("field-type"));
                        ui.strong(i18n.get("field-resolution"));
                        self.sort_header(ui, i18n.get("field-modified"), SortKey::Modified);
                        ui.strong(i18n.get("field-status"));
                        ui.end_row();

                        for record in &rows {
                            let checked = selection.contains(record.id);
                            if selection_checkbox(ui, photo_hit_id(ViewMode::List, record.id), checked).clicked() {
                                action = Some(ContentAction::Toggle(record.id));
                            }
                            let (rect, _) = ui.allocate_exact_size(Vec2::splat(LIST_THUMB), Sense::hover());
                            paint_placeholder(ui, rect, theme, 16.0);
                            ui.label(&record.name);
                            ui.label(record.size.to_string());
                            ui.label(&record.kind);
                            ui.label(&record.resolution);
                            ui.label(record.modified_display());
                            status_tag(ui, record.status, i18n);
                            ui.end_row();
                        }
                    });
            });

        ui.separator();
        self.pagination_ui(ui, total, i18n, theme);

        action
    }

    fn sort_header(&mut self, ui: &mut Ui, label: String, key: SortKey) {
        let text = sort_header_text(&label, self.list.sort.direction_of(key));
        if ui
            .add(egui::Button::new(RichText::new(text).strong()).frame(false))
            .clicked()
        {
            self.list.sort.cycle(key);
            tracing::debug!("List sort: {:?}", self.list.sort.active());
        }
    }

    fn pagination_ui(&mut self, ui: &mut Ui, total: usize, i18n: &I18n, theme: &Theme) {
        let pagination = &mut self.list.pagination;
        let pages = pagination.page_count(total);

        ui.horizontal(|ui| {
            ui.label(RichText::new(t!(i18n, "list-total", total = total)).color(theme.text_secondary));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut page_size = pagination.page_size();
                egui::ComboBox::from_id_salt("list_page_size")
                    .selected_text(t!(i18n, "list-page-size", size = page_size))
                    .show_ui(ui, |ui| {
                        for option in PAGE_SIZE_OPTIONS {
                            ui.selectable_value(&mut page_size, option, t!(i18n, "list-page-size", size = option));
                        }
                    });
                pagination.set_page_size(page_size);

                if ui
                    .add_enabled(pagination.page() + 1 < pages, egui::Button::new(i18n.get("list-next")))
                    .clicked()
                {
                    pagination.next(total);
                }
                ui.label(t!(i18n, "list-page", page = pagination.page() + 1, pages = pages));
                if ui
                    .add_enabled(pagination.page() > 0, egui::Button::new(i18n.get("list-prev")))
                    .clicked()
                {
                    pagination.prev();
                }
            });
        });
    }
}

// === Grid view ===

fn grid_ui(
    ui: &mut Ui,
    records: &[PhotoRecord],
    selection: &SelectionState,
    px: f32,
    i18n: &I18n,
    theme: &Theme,
) -> Option<ContentAction> {
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(GUTTER);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(GUTTER);
                for record in records {
                    let selected = selection.contains(record.id);
                    if grid_tile(ui, record, selected, px, i18n, theme).clicked() {
                        action = Some(ContentAction::Toggle(record.id));
                    }
                }
            });
        });

    action
}

fn grid_tile(ui: &mut Ui, record: &PhotoRecord, selected: bool, px: f32, i18n: &I18n, theme: &Theme) -> Response {
    let (_, rect) = ui.allocate_space(Vec2::new(px, px + NAME_HEIGHT));
    let response = ui.interact(rect, photo_hit_id(ViewMode::Grid, record.id), Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let fill = if selected { theme.selection_fill } else { theme.surface };
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, layout::CARD_RADIUS, fill);

    let image = Rect::from_min_size(rect.min, Vec2::splat(px)).shrink(4.0);
    paint_placeholder(ui, image, theme, (px * 0.3).max(14.0));

    paint_status_badge(ui, image, record.status, i18n);
    let marks = paint_issue_marks(ui, image, record, theme, i18n);

    let star = (px / 12.0).clamp(6.0, 12.0);
    paint_stars(ui, image.left_bottom() + Vec2::new(4.0, -star), record.rating, star, theme);

    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - NAME_HEIGHT / 2.0),
        Align2::CENTER_CENTER,
        &record.name,
        FontId::proportional(12.0),
        theme.text_primary,
    );

    let stroke = if selected {
        Stroke::new(2.0, theme.primary)
    } else {
        Stroke::new(1.0, theme.divider)
    };
    ui.painter().rect_stroke(rect, layout::CARD_RADIUS, stroke);

    for (i, (mark, label)) in marks.into_iter().enumerate() {
        ui.interact(mark, response.id.with(i), Sense::hover())
            .on_hover_text(label);
    }

    response.on_hover_text(&record.name)
}

/// Status label in the top-right corner of `image`
fn paint_status_badge(ui: &Ui, image: Rect, status: PhotoStatus, i18n: &I18n) {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(i18n.get(status.label_key()), FontId::proportional(10.0), Color32::WHITE);
    let size = galley.size() + Vec2::new(8.0, 2.0);
    let badge = Rect::from_min_size(image.right_top() + Vec2::new(-size.x - 4.0, 4.0), size);

    painter.rect_filled(badge, 3.0, Theme::status_color(status));
    painter.galley(badge.min + Vec2::new(4.0, 1.0), galley, Color32::WHITE);
}

// === Detail view ===

fn detail_ui(
    ui: &mut Ui,
    records: &[PhotoRecord],
    selection: &SelectionState,
    i18n: &I18n,
    theme: &Theme,
) -> Option<ContentAction> {
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for record in records {
                let selected = selection.contains(record.id);
                if detail_card(ui, record, selected, i18n, theme).clicked() {
                    action = Some(ContentAction::Toggle(record.id));
                }
                ui.add_space(GUTTER);
            }
        });

    action
}

fn detail_card(ui: &mut Ui, record: &PhotoRecord, selected: bool, i18n: &I18n, theme: &Theme) -> Response {
    let stroke = if selected {
        Stroke::new(2.0, theme.primary)
    } else {
        Stroke::new(1.0, theme.divider)
    };

    let frame = egui::Frame::none()
        .fill(if selected { theme.selection_fill } else { theme.surface })
        .stroke(stroke)
        .rounding(layout::CARD_RADIUS)
        .inner_margin(16.0)
        .show(ui, |ui| {
            // Text in the card must not take the click away from the card
            ui.style_mut().interaction.selectable_labels = false;
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                let preview = DETAIL_PREVIEW * (ui.available_width() * 0.45 / DETAIL_PREVIEW.x).min(1.0);
                let (rect, _) = ui.allocate_exact_size(preview, Sense::hover());
                paint_placeholder(ui, rect, theme, preview.y * 0.2);

                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.heading(&record.name);
                    ui.add_space(8.0);

                    egui::Grid::new(("detail_fields", record.id.0))
                        .num_columns(2)
                        .spacing([24.0, 8.0])
                        .show(ui, |ui| {
                            ui.vertical(|ui| field(ui, &i18n.get("field-size"), &record.size.to_string(), theme));
                            ui.vertical(|ui| field(ui, &i18n.get("field-type"), &record.kind, theme));
                            ui.end_row();
                            ui.vertical(|ui| field(ui, &i18n.get("field-resolution"), &record.resolution, theme));
                            ui.vertical(|ui| field(ui, &i18n.get("field-modified"), &record.modified_display(), theme));
                            ui.end_row();
                            ui.vertical(|ui| {
                                caption(ui, &i18n.get("field-status"), theme);
                                status_tag(ui, record.status, i18n);
                            });
                            ui.vertical(|ui| {
                                caption(ui, &i18n.get("field-rating"), theme);
                                star_rating(ui, record.rating, 16.0, theme);
                            });
                            ui.end_row();
                            ui.vertical(|ui| {
                                caption(ui, &i18n.get("field-tags"), theme);
                                let color = Theme::tag_color(record.tag);
                                tag(ui, i18n.get(record.tag.label_key()), color, Color32::WHITE);
                            });
                            ui.end_row();
                        });

                    let issues = record.issues.active();
                    if !issues.is_empty() {
                        ui.add_space(8.0);
                        caption(ui, &i18n.get("field-issues"), theme);
                        ui.horizontal_wrapped(|ui| {
                            for issue in issues {
                                issue_tag(ui, issue, theme, i18n);
                            }
                        });
                    }
                });
            });
        });

    ui.interact(frame.response.rect, photo_hit_id(ViewMode::Detail, record.id), Sense::click())
}

fn caption(ui: &mut Ui, text: &str, theme: &Theme) {
    ui.label(RichText::new(text).size(11.0).color(theme.text_secondary));
}

/// Header label with the active sort arrow
fn sort_header_text(label: &str, direction: Option<SortDirection>) -> String {
    match direction {
        Some(SortDirection::Ascending) => format!("{} ▲", label),
        Some(SortDirection::Descending) => format!("{} ▼", label),
        None => format!("{} ⇅", label),
    }
}

/// Header checkbox is on when every row of the page is selected
fn page_checked(page_ids: &[PhotoId], selection: &SelectionState) -> bool {
    !page_ids.is_empty() && page_ids.iter().all(|id| selection.contains(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{i18n, run_frame};
    use app_core::{MockPhotoRepository, PhotoRepository};

    fn records() -> Vec<PhotoRecord> {
        MockPhotoRepository::new(24, Some(5)).list_records().unwrap()
    }

    fn render(area: &mut ContentArea, state: &ViewState, records: Option<&[PhotoRecord]>) -> Option<ContentAction> {
        let i18n = i18n();
        let theme = Theme::light();
        let mut action = None;

        run_frame(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = area.ui(ui, state, records, &i18n, &theme);
            });
        });

        action
    }

    #[test]
    fn test_sort_header_text() {
        assert_eq!(sort_header_text("名称", None), "名称 ⇅");
        assert_eq!(sort_header_text("名称", Some(SortDirection::Ascending)), "名称 ▲");
        assert_eq!(sort_header_text("大小", Some(SortDirection::Descending)), "大小 ▼");
    }

    #[test]
    fn test_page_checked() {
        let mut selection = SelectionState::new();
        let page = vec![PhotoId(1), PhotoId(2)];
        assert!(!page_checked(&page, &selection));

        selection.toggle(PhotoId(1));
        assert!(!page_checked(&page, &selection));

        selection.toggle(PhotoId(2));
        assert!(page_checked(&page, &selection));
        assert!(!page_checked(&[], &selection));
    }

    #[test]
    fn test_loading_renders_without_action() {
        let mut area = ContentArea::new(20);
        let state = ViewState::default();
        assert!(render(&mut area, &state, None).is_none());
    }

    #[test]
    fn test_every_view_mode_renders() {
        let records = records();
        let mut area = ContentArea::new(20);
        let mut state = ViewState::default();
        state.set_collection_len(records.len());
        state.toggle_selection(PhotoId(5));

        for mode in ViewMode::ALL {
            state.set_view_mode(mode);
            assert!(render(&mut area, &state, Some(&records)).is_none());
        }

        assert_eq!(state.selection().ids(), &[PhotoId(5)]);
    }

    /// Lay out one frame, then press and release the pointer over `photo`
    fn click_photo(
        ctx: &egui::Context,
        area: &mut ContentArea,
        state: &ViewState,
        records: &[PhotoRecord],
        photo: PhotoId,
    ) -> Option<ContentAction> {
        let i18n = i18n();
        let theme = Theme::light();
        let mut action = None;

        let mut frame = |input: egui::RawInput, area: &mut ContentArea| {
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(a) = area.ui(ui, state, Some(records), &i18n, &theme) {
                        action = Some(a);
                    }
                });
            });
        };

        frame(tall_input(Vec::new()), area);
        let rect = ctx
            .read_response(photo_hit_id(state.view_mode(), photo))
            .map(|response| response.rect)
            .expect("photo laid out");
        let pos = rect.center();

        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        frame(tall_input(vec![egui::Event::PointerMoved(pos), button(true)]), area);
        frame(tall_input(vec![button(false)]), area);
        frame(tall_input(Vec::new()), area);

        action
    }

    /// Screen tall enough that the first detail cards are all on screen
    fn tall_input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 2400.0))),
            events,
            ..Default::default()
        }
    }

    #[test]
    fn test_click_toggles_photo_in_every_view_mode() {
        let records = records();

        for mode in ViewMode::ALL {
            let ctx = egui::Context::default();
            let mut area = ContentArea::new(20);
            let mut state = ViewState::default();
            state.set_collection_len(records.len());
            state.set_view_mode(mode);

            let action = click_photo(&ctx, &mut area, &state, &records, PhotoId(5));
            assert_eq!(action, Some(ContentAction::Toggle(PhotoId(5))), "{:?}", mode);
            state.toggle_selection(PhotoId(5));
            assert_eq!(state.selection().ids(), &[PhotoId(5)]);

            let action = click_photo(&ctx, &mut area, &state, &records, PhotoId(5));
            assert_eq!(action, Some(ContentAction::Toggle(PhotoId(5))), "{:?}", mode);
            state.toggle_selection(PhotoId(5));
            assert!(state.selection().is_empty());
        }
    }

    #[test]
    fn test_list_page_is_clamped_to_collection() {
        let records = records();
        let mut area = ContentArea::new(10);
        area.list.pagination.set_page(2, records.len());
        assert_eq!(area.list_view().pagination.page(), 2);

        let mut state = ViewState::default();
        state.set_view_mode(ViewMode::List);
        render(&mut area, &state, Some(&records[..5]));

        assert_eq!(area.list_view().pagination.page(), 0);
    }
}
