//! Blue agenda palette and per-status session styling.

use eframe::egui::{self, Color32};
use shared::domain::SessionStatus;

pub const BLUE_100: Color32 = Color32::from_rgb(219, 234, 254);
pub const BLUE_200: Color32 = Color32::from_rgb(191, 219, 254);
pub const BLUE_300: Color32 = Color32::from_rgb(147, 197, 253);
pub const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);
pub const BLUE_700: Color32 = Color32::from_rgb(29, 78, 216);
pub const BLUE_800: Color32 = Color32::from_rgb(30, 64, 175);
pub const BLUE_900: Color32 = Color32::from_rgb(30, 58, 138);
pub const BLUE_50: Color32 = Color32::from_rgb(239, 246, 255);
pub const GRAY_50: Color32 = Color32::from_rgb(249, 250, 251);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);
pub const GRAY_500: Color32 = Color32::from_rgb(107, 114, 128);
pub const GRAY_600: Color32 = Color32::from_rgb(75, 85, 99);
pub const GRAY_700: Color32 = Color32::from_rgb(55, 65, 81);
pub const YELLOW_400: Color32 = Color32::from_rgb(250, 204, 21);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStyle {
    pub fill: Color32,
    pub title: Color32,
    pub speakers: Color32,
    /// Left accent bar width; zero for no accent.
    pub accent_width: f32,
}

impl SessionStyle {
    pub fn for_status(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Current => Self {
                fill: BLUE_100,
                title: BLUE_900,
                speakers: GRAY_600,
                accent_width: 6.0,
            },
            SessionStatus::Finished => Self {
                fill: GRAY_50,
                title: GRAY_500,
                speakers: GRAY_400,
                accent_width: 0.0,
            },
            SessionStatus::Upcoming => Self {
                fill: Color32::WHITE,
                title: BLUE_900,
                speakers: GRAY_600,
                accent_width: 0.0,
            },
        }
    }
}

pub fn light_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = Color32::WHITE;
    visuals.selection.bg_fill = BLUE_600;
    visuals.hyperlink_color = BLUE_600;
    visuals
}
