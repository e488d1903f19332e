use agenda_core::SessionView;
use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke};

use crate::ui::theme::{self, SessionStyle};

pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(theme::BLUE_600)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(Color32::WHITE));
        });
}

pub fn pill_button(text: &str, fill: Color32, text_color: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).strong().color(text_color))
        .fill(fill)
        .corner_radius(CornerRadius::same(18))
        .min_size(egui::vec2(96.0, 34.0))
}

/// Session row in the day list (`Now` badge) or card in the day view (`Happening now`).
pub fn session_entry(ui: &mut egui::Ui, session: &SessionView, detailed: bool) {
    let style = SessionStyle::for_status(session.status);
    let title_size = if detailed { 22.0 } else { 16.0 };

    let response = egui::Frame::new()
        .fill(style.fill)
        .stroke(Stroke::new(1.0, theme::BLUE_100))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(if detailed { 18 } else { 12 }))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&session.time_range)
                        .size(if detailed { 17.0 } else { 15.0 })
                        .color(theme::GRAY_700),
                );
                if session.is_current() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(ui, if detailed { "Happening now" } else { "Now" });
                    });
                }
            });
            ui.label(
                RichText::new(&session.title)
                    .size(title_size)
                    .strong()
                    .color(style.title),
            );
            if !session.speakers.is_empty() {
                ui.label(RichText::new(&session.speakers).color(style.speakers));
            }
        })
        .response;

    if style.accent_width > 0.0 {
        let rect = response.rect;
        let bar = egui::Rect::from_min_max(
            rect.left_top(),
            egui::pos2(rect.left() + style.accent_width, rect.bottom()),
        );
        ui.painter().rect_filled(bar, CornerRadius::same(3), theme::BLUE_600);
    }
}
