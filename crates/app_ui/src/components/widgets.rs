//! Small painted widgets shared by the content area and the side panels

use crate::theme::Theme;
use app_core::{ColorTag, I18n, Issue, PhotoRecord, PhotoStatus};
use egui::{Align2, Color32, FontId, Pos2, Rect, Response, RichText, Sense, Shape, Stroke, Ui, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};

/// Grey box with a picture glyph where the image would be
pub fn paint_placeholder(ui: &Ui, rect: Rect, theme: &Theme, glyph_size: f32) {
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, theme.placeholder);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "🖼",
        FontId::proportional(glyph_size),
        theme.text_tertiary,
    );
}

/// Filled five-point star made of convex pieces
pub fn paint_star(ui: &Ui, center: Pos2, radius: f32, color: Color32) {
    let inner_radius = radius * 0.4;
    let point = |r: f32, i: usize| {
        let angle = -FRAC_PI_2 + i as f32 * PI / 5.0;
        center + Vec2::angled(angle) * r
    };

    let inner: Vec<Pos2> = (0..5).map(|i| point(inner_radius, 2 * i + 1)).collect();
    let painter = ui.painter();
    painter.add(Shape::convex_polygon(inner.clone(), color, Stroke::NONE));

    for i in 0..5 {
        let tip = point(radius, 2 * i);
        let left = inner[(i + 4) % 5];
        let right = inner[i];
        painter.add(Shape::convex_polygon(vec![left, tip, right], color, Stroke::NONE));
    }
}

/// Row of five stars at `origin` (left center)
pub fn paint_stars(ui: &Ui, origin: Pos2, rating: u8, size: f32, theme: &Theme) {
    for i in 0..PhotoRecord::MAX_RATING {
        let center = origin + Vec2::new(size * (i as f32 + 0.5), 0.0);
        let color = if i < rating { theme.star_active } else { theme.star_inactive };
        paint_star(ui, center, size * 0.45, color);
    }
}

/// Read-only star rating laid out as a widget
pub fn star_rating(ui: &mut Ui, rating: u8, size: f32, theme: &Theme) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(size * PhotoRecord::MAX_RATING as f32, size),
        Sense::hover(),
    );
    paint_stars(ui, rect.left_center(), rating, size, theme);
    response
}

/// Clickable rating; returns the picked value
pub fn rating_input(ui: &mut Ui, rating: u8, size: f32, theme: &Theme) -> Option<u8> {
    let mut picked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for i in 1..=PhotoRecord::MAX_RATING {
            let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::click());
            let lit = i <= rating || response.hovered();
            let color = if lit { theme.star_active } else { theme.star_inactive };
            paint_star(ui, rect.center(), size * 0.45, color);

            if response.clicked() {
                picked = Some(i);
            }
        }
    });

    picked
}

/// Checkbox under a caller-chosen id so a row keeps its widget across frames
pub fn selection_checkbox(ui: &mut Ui, id: egui::Id, checked: bool) -> Response {
    let (_, rect) = ui.allocate_space(Vec2::splat(ui.spacing().icon_width));
    let response = ui.interact(rect, id, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let (small, big) = ui.spacing().icon_rectangles(rect);
        let painter = ui.painter();
        painter.rect(big.expand(visuals.expansion), visuals.rounding, visuals.bg_fill, visuals.bg_stroke);
        if checked {
            painter.add(Shape::line(
                vec![
                    Pos2::new(small.left(), small.center().y),
                    Pos2::new(small.center().x, small.bottom()),
                    Pos2::new(small.right(), small.top()),
                ],
                visuals.fg_stroke,
            ));
        }
    }

    response
}

/// Rounded colored label
pub fn tag(ui: &mut Ui, text: impl Into<String>, fill: Color32, text_color: Color32) -> Response {
    egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(text_color));
        })
        .response
}

pub fn status_tag(ui: &mut Ui, status: PhotoStatus, i18n: &I18n) -> Response {
    tag(ui, i18n.get(status.label_key()), Theme::status_color(status), Color32::WHITE)
}

pub fn issue_tag(ui: &mut Ui, issue: Issue, theme: &Theme, i18n: &I18n) -> Response {
    let color = theme.issue_color(issue.severity());
    tag(ui, i18n.get(issue.label_key()), color.linear_multiply(0.15), color)
}

/// Selectable color tag chip
pub fn color_tag_chip(ui: &mut Ui, color_tag: ColorTag, selected: bool, i18n: &I18n) -> Response {
    let color = Theme::tag_color(color_tag);
    let (fill, text) = if selected {
        (color, Color32::WHITE)
    } else {
        (color.linear_multiply(0.15), color)
    };
    tag(ui, i18n.get(color_tag.label_key()), fill, text).interact(Sense::click())
}

/// Caption above a value, as used by the detail card and the right panel
pub fn field(ui: &mut Ui, label: &str, value: &str, theme: &Theme) {
    ui.label(RichText::new(label).size(11.0).color(theme.text_secondary));
    ui.label(RichText::new(value).size(12.0).color(theme.text_primary));
}

/// Short red marks in the tile corner for blur and closed eyes
pub fn paint_issue_marks(
    ui: &Ui,
    rect: Rect,
    record: &PhotoRecord,
    theme: &Theme,
    i18n: &I18n,
) -> Vec<(Rect, String)> {
    let mut marks = Vec::new();
    let mut x = rect.left() + 4.0;

    for issue in record.issues.active() {
        if !matches!(issue, Issue::Blur | Issue::ClosedEyes) {
            continue;
        }
        let mark = Rect::from_min_size(Pos2::new(x, rect.top() + 4.0), Vec2::splat(14.0));
        ui.painter().circle_filled(mark.center(), 7.0, theme.issue_color(issue.severity()));
        ui.painter().text(
            mark.center(),
            Align2::CENTER_CENTER,
            "×",
            FontId::proportional(11.0),
            Color32::WHITE,
        );
        marks.push((mark, i18n.get(issue.label_key())));
        x += 16.0;
    }

    marks
}
