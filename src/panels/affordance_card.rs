//! Affordance Card
//!
//! Collapsible card for one affordance record. Open/closed state is kept in
//! [`CardStates`], owned by the result panel and cleared with each new result,
//! so every card toggles independently and starts closed.

use std::collections::HashSet;

use egui::{Align, Frame, Id, Layout, Margin, Rect, Response, RichText, Sense, Stroke, Ui};
use inspector_types::Affordance;

use crate::theme::{self, confidence_tone, Tone};
use crate::view::title_case;

/// Open cards of the result on screen
#[derive(Debug, Default)]
pub struct CardStates {
    open: HashSet<Id>,
}

impl CardStates {
    pub fn is_open(&self, id: Id) -> bool {
        self.open.contains(&id)
    }

    pub fn toggle(&mut self, id: Id) {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
    }

    /// Collapse everything
    pub fn clear(&mut self) {
        self.open.clear();
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// Where a card was painted
pub struct CardResponse {
    pub id: Id,
    pub header: Response,
    pub title: Rect,
    pub chevron: Rect,
}

pub fn affordance_card(
    ui: &mut Ui,
    affordance: &Affordance,
    index: usize,
    cards: &mut CardStates,
) -> CardResponse {
    let id = ui.make_persistent_id(("affordance_card", index));
    let open = cards.is_open(id);
    let confidence = affordance.confidence();
    let tone = confidence_tone(&confidence);
    let mut title = Rect::NOTHING;
    let mut chevron = Rect::NOTHING;

    let header = Frame::none()
        .fill(theme::CARD_FILL)
        .stroke(Stroke::new(1.0, theme::CARD_BORDER))
        .rounding(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            let header = ui
                .horizontal(|ui| {
                    // The whole header is the toggle; labels must not eat the click
                    ui.style_mut().interaction.selectable_labels = false;

                    ui.label(RichText::new("⚡").size(18.0).color(theme::ACCENT));
                    ui.vertical(|ui| {
                        title = ui
                            .label(
                                RichText::new(&affordance.action)
                                    .strong()
                                    .size(16.0)
                                    .color(theme::TEXT),
                            )
                            .rect;
                        ui.label(
                            RichText::new(format!("🎯 {}", affordance.target))
                                .small()
                                .color(theme::MUTED),
                        );
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let icon = if open { "⏶" } else { "⏷" };
                        chevron = ui.label(RichText::new(icon).color(theme::MUTED)).rect;
                        confidence_badge(ui, confidence.as_str(), tone);
                    });
                })
                .response
                .interact(Sense::click());

            if header.clicked() {
                cards.toggle(id);
            }

            if cards.is_open(id) {
                ui.add_space(8.0);
                card_body(ui, affordance);
            }

            header
        })
        .inner;

    CardResponse {
        id,
        header,
        title,
        chevron,
    }
}

fn confidence_badge(ui: &mut Ui, level: &str, tone: Tone) {
    Frame::none()
        .fill(tone.color().gamma_multiply(0.2))
        .stroke(Stroke::new(1.0, tone.color().gamma_multiply(0.5)))
        .rounding(8.0)
        .inner_margin(Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{} {}", tone.icon(), title_case(level)))
                    .small()
                    .color(tone.color()),
            );
        });
}

fn card_body(ui: &mut Ui, affordance: &Affordance) {
    Frame::none()
        .fill(theme::ACCENT.gamma_multiply(0.08))
        .stroke(Stroke::new(1.0, theme::ACCENT.gamma_multiply(0.3)))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Outcome:").strong().color(theme::ACCENT));
                ui.label(RichText::new(&affordance.expected_outcome).color(theme::TEXT));
            });
        });

    section_title(ui, "Required Capabilities");
    ui.horizontal_wrapped(|ui| {
        for capability in &affordance.required_capabilities {
            Frame::none()
                .fill(theme::CARD_BORDER)
                .rounding(8.0)
                .inner_margin(Margin::symmetric(6.0, 2.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(capability).small().color(theme::TEXT));
                });
        }
    });

    icon_list(ui, "Preconditions", &affordance.preconditions, Tone::Affirmative);
    icon_list(ui, "Constraints", &affordance.constraints, Tone::Warning);
    icon_list(
        ui,
        "Possible Failure Modes",
        &affordance.possible_failure_modes,
        Tone::Negative,
    );
}

fn section_title(ui: &mut Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(
        RichText::new(title.to_uppercase())
            .small()
            .strong()
            .color(theme::MUTED),
    );
    ui.add_space(2.0);
}

fn icon_list(ui: &mut Ui, title: &str, items: &[String], tone: Tone) {
    section_title(ui, title);
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(tone.icon()).small().color(tone.color()));
            ui.label(RichText::new(item).small().color(theme::MUTED));
        });
    }
}
