//! Translation of egui input into host events for the agenda engine.

use agenda_core::{HostEvent, Key, KeyPress};
use eframe::egui;

pub fn host_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::Enter => Key::Enter,
        egui::Key::Space => Key::Space,
        other => Key::Other(other.name().to_string()),
    }
}

/// Window-level keys. Only Escape matters without a focused day header.
pub fn global_key_events(input: &egui::InputState) -> Vec<HostEvent> {
    if input.key_pressed(egui::Key::Escape) {
        vec![HostEvent::KeyDown(KeyPress::new(host_key(egui::Key::Escape)))]
    } else {
        Vec::new()
    }
}

/// Activation keys pressed while the header for `date` holds focus.
pub fn day_header_key_events(input: &egui::InputState, date: &str) -> Vec<HostEvent> {
    [egui::Key::Enter, egui::Key::Space]
        .into_iter()
        .filter(|key| input.key_pressed(*key))
        .map(|key| HostEvent::KeyDown(KeyPress::on_day(host_key(key), date)))
        .collect()
}
