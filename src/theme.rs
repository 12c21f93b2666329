//! Colours and icons shared by the panels

use egui::Color32;
use inspector_types::ConfidenceLevel;

pub const ACCENT: Color32 = Color32::from_rgb(212, 175, 55);
pub const SECONDARY: Color32 = Color32::from_rgb(167, 139, 250);
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 150);
pub const TEXT: Color32 = Color32::from_rgb(220, 220, 220);
pub const PANEL_FILL: Color32 = Color32::from_rgb(25, 25, 30);
pub const CARD_FILL: Color32 = Color32::from_rgb(34, 34, 42);
pub const CARD_BORDER: Color32 = Color32::from_rgb(60, 60, 72);
pub const RULE: Color32 = Color32::from_rgb(70, 70, 80);

/// Semantic colouring for badges and list icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Affirmative,
    Warning,
    Negative,
    Neutral,
}

impl Tone {
    pub fn icon(self) -> &'static str {
        match self {
            Tone::Affirmative => "✔",
            Tone::Warning => "⚠",
            Tone::Negative => "✖",
            Tone::Neutral => "🛡",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Tone::Affirmative => Color32::from_rgb(74, 222, 128),
            Tone::Warning => Color32::from_rgb(251, 191, 36),
            Tone::Negative => Color32::from_rgb(248, 113, 113),
            Tone::Neutral => MUTED,
        }
    }
}

pub fn confidence_tone(level: &ConfidenceLevel) -> Tone {
    match level {
        ConfidenceLevel::High => Tone::Affirmative,
        ConfidenceLevel::Medium => Tone::Warning,
        ConfidenceLevel::Low => Tone::Negative,
        ConfidenceLevel::Other(_) => Tone::Neutral,
    }
}
