//! Panels for the agenda window. Rendering only collects actions; the app applies them.

use agenda_core::{AgendaView, DayView, HeaderView};
use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke};

use crate::{
    controller::{
        actions::{day_header_actions, UiAction},
        events::day_header_key_events,
    },
    ui::{
        theme,
        widgets::{pill_button, session_entry},
    },
};

pub struct AddressBarState<'a> {
    pub input: &'a mut String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

pub enum AddressBarRequest {
    Action(UiAction),
    CopyLink,
}

pub fn address_bar(ui: &mut egui::Ui, mut state: AddressBarState<'_>) -> Vec<AddressBarRequest> {
    let mut requests = Vec::new();
    ui.horizontal(|ui| {
        if ui.add_enabled(state.can_go_back, egui::Button::new("←")).clicked() {
            requests.push(AddressBarRequest::Action(UiAction::Back));
        }
        if ui
            .add_enabled(state.can_go_forward, egui::Button::new("→"))
            .clicked()
        {
            requests.push(AddressBarRequest::Action(UiAction::Forward));
        }

        let copy_width = 90.0;
        let field = ui.add(
            egui::TextEdit::singleline(&mut *state.input)
                .hint_text("#day=YYYY-MM-DD")
                .desired_width(ui.available_width() - copy_width),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            requests.push(AddressBarRequest::Action(UiAction::FollowLink(
                state.input.clone(),
            )));
        }
        if ui.button("Copy link").clicked() {
            requests.push(AddressBarRequest::CopyLink);
        }
    });
    requests
}

/// Returns true when "Agenda ↓" was pressed.
pub fn program_header(ui: &mut egui::Ui, header: &HeaderView) -> bool {
    let mut jump = false;
    egui::Frame::new()
        .fill(theme::BLUE_700)
        .inner_margin(Margin::same(28))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if let Some(organization) = &header.organization {
                    ui.label(RichText::new(organization).size(22.0).color(theme::BLUE_200));
                    ui.add_space(8.0);
                }
                ui.label(
                    RichText::new(&header.program_name)
                        .size(36.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                if let Some(label) = &header.program_label {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(label)
                            .size(19.0)
                            .italics()
                            .color(theme::BLUE_200),
                    );
                }
                ui.add_space(14.0);
                ui.label(
                    RichText::new(format!("Date: {}", header.date_range))
                        .size(17.0)
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new(format!("Location: {}", header.venue))
                        .size(17.0)
                        .color(Color32::WHITE),
                );
                ui.add_space(18.0);
                jump = ui
                    .add(pill_button("Agenda ↓", theme::YELLOW_400, Color32::BLACK))
                    .clicked();
            });
        });
    jump
}

fn day_header(ui: &mut egui::Ui, index: usize, day: &DayView, actions: &mut Vec<UiAction>) {
    let frame = egui::Frame::new()
        .fill(theme::BLUE_200)
        .stroke(Stroke::new(1.0, theme::BLUE_300))
        .corner_radius(CornerRadius::same(14))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&day.heading)
                            .size(22.0)
                            .strong()
                            .color(theme::BLUE_900),
                    );
                    ui.label(RichText::new(&day.short_date).color(theme::BLUE_700));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("Click to view full-day").small().color(theme::BLUE_600));
                });
            });
        });

    let response = ui
        .interact(
            frame.response.rect,
            ui.id().with(("day_header", &day.date)),
            egui::Sense::click(),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let mut key_events = Vec::new();
    if response.has_focus() {
        ui.painter().rect_stroke(
            frame.response.rect,
            CornerRadius::same(14),
            Stroke::new(2.0, theme::BLUE_600),
            egui::StrokeKind::Outside,
        );
        key_events = ui.input(|input| day_header_key_events(input, &day.date));
    }
    actions.extend(day_header_actions(index, key_events, response.clicked()));
}

/// Day list; returns the response of the section anchor used by "Agenda ↓".
pub fn day_list(ui: &mut egui::Ui, view: &AgendaView, actions: &mut Vec<UiAction>) -> egui::Response {
    let anchor = ui.label(RichText::new("Agenda").size(26.0).strong().color(theme::BLUE_900));
    ui.add_space(8.0);
    for (index, day) in view.days.iter().enumerate() {
        day_header(ui, index, day, actions);
        ui.add_space(10.0);
        for session in &day.sessions {
            session_entry(ui, session, false);
            ui.add_space(6.0);
        }
        ui.add_space(22.0);
    }
    anchor
}

pub fn day_detail(ui: &mut egui::Ui, day: &DayView, actions: &mut Vec<UiAction>) {
    egui::Frame::new()
        .fill(theme::BLUE_50)
        .inner_margin(Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&day.heading)
                        .size(30.0)
                        .strong()
                        .color(theme::BLUE_900),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(pill_button("Close", theme::BLUE_600, Color32::WHITE))
                        .clicked()
                    {
                        actions.push(UiAction::CloseDay);
                    }
                });
            });
            ui.add_space(16.0);
            if day.sessions.is_empty() {
                ui.label(RichText::new("No sessions scheduled.").color(theme::GRAY_500));
            }
            for session in &day.sessions {
                session_entry(ui, session, true);
                ui.add_space(10.0);
            }
        });
}

pub fn footer(ui: &mut egui::Ui, text: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).small().color(theme::GRAY_500));
    });
}
