//! Result Panel
//!
//! Paints a [`ResultView`]. The view model is rebuilt only when the
//! inspection state changes revision; card open state is dropped with it.

use egui::{Frame, Margin, RichText, ScrollArea, Stroke, Ui};
use inspector_types::InspectQuery;

use crate::panels::affordance_card::{affordance_card, CardStates};
use crate::state::InspectState;
use crate::theme::{self, Tone};
use crate::view::{title_case, Body, Field, FieldValue, ListItem, ResultView};

const RESULT_HEIGHT: f32 = 400.0;
const INDENT: f32 = 12.0;

/// Actions that can be triggered from the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    /// Clear data, error and query
    Clear,
}

#[derive(Default)]
pub struct ResultPanel {
    cached: Option<(u64, ResultView)>,
    cards: CardStates,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// View model for `state`, rebuilt only when `revision` moves
    pub fn view(&mut self, state: &InspectState, revision: u64) -> &ResultView {
        if self.cached.as_ref().map(|(cached, _)| *cached) != Some(revision) {
            self.cached = None;
            self.cards.clear();
        }
        &self
            .cached
            .get_or_insert_with(|| (revision, ResultView::from_state(state)))
            .1
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &InspectState, revision: u64) -> Option<ResultAction> {
        let mut action = None;

        self.view(state, revision);
        let Some((_, view)) = &self.cached else {
            return None;
        };
        let cards = &mut self.cards;

        match view {
            ResultView::Error(error) => {
                render_error(ui, error);
                if clear_button(ui) {
                    action = Some(ResultAction::Clear);
                }
            }
            ResultView::Idle => render_idle(ui),
            ResultView::Result { query, body } => {
                if render_header(ui, query) {
                    action = Some(ResultAction::Clear);
                }
                ScrollArea::vertical()
                    .max_height(RESULT_HEIGHT)
                    .auto_shrink([false, true])
                    .show(ui, |ui| render_body(ui, body, cards));
            }
        }

        action
    }
}

fn clear_button(ui: &mut Ui) -> bool {
    ui.add_space(8.0);
    ui.small_button("Clear").on_hover_text("Clear the result").clicked()
}

fn render_error(ui: &mut Ui, error: &str) {
    let negative = Tone::Negative.color();
    Frame::none()
        .fill(negative.gamma_multiply(0.1))
        .stroke(Stroke::new(1.0, negative.gamma_multiply(0.5)))
        .rounding(6.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").size(18.0).color(negative));
                ui.label(RichText::new("Divination Failed").size(18.0).color(negative));
            });
            ui.add_space(6.0);
            ui.label(RichText::new(error).color(theme::MUTED));
        });
}

fn render_idle(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("📜").size(48.0).color(theme::MUTED.gamma_multiply(0.4)));
        ui.add_space(12.0);
        ui.label(
            RichText::new("The oracle awaits your query...")
                .italics()
                .size(16.0)
                .color(theme::MUTED),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new("Enter an object name and invoke the inspection ritual")
                .small()
                .color(theme::MUTED.gamma_multiply(0.7)),
        );
        ui.add_space(48.0);
    });
}

/// Returns true when Clear was clicked
fn render_header(ui: &mut Ui, query: &InspectQuery) -> bool {
    let mut clear = false;

    ui.horizontal(|ui| {
        ui.heading(RichText::new(title_case(&query.obj)).color(theme::ACCENT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clear = ui.small_button("Clear").on_hover_text("Clear the result").clicked();
        });
    });
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label(RichText::new("Viewed as").color(theme::MUTED));
        ui.label(RichText::new(&query.perspective).color(theme::SECONDARY));
        ui.label(RichText::new("in").color(theme::MUTED));
        ui.label(RichText::new(title_case(&query.context)).color(theme::SECONDARY));
        ui.label(RichText::new("context").color(theme::MUTED));
    });
    ui.separator();

    clear
}

fn render_body(ui: &mut Ui, body: &Body, cards: &mut CardStates) {
    match body {
        Body::Fields(fields) => render_fields(ui, fields, cards),
        Body::Text(text) => {
            ui.label(RichText::new(text).color(theme::TEXT));
        }
    }
}

fn render_fields(ui: &mut Ui, fields: &[Field], cards: &mut CardStates) {
    for (index, field) in fields.iter().enumerate() {
        ui.push_id(index, |ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new(field.label.to_uppercase())
                    .small()
                    .strong()
                    .color(theme::ACCENT.gamma_multiply(0.8)),
            );
            ui.add_space(2.0);
            render_value(ui, &field.value, cards);
        });
    }
}

fn render_value(ui: &mut Ui, value: &FieldValue, cards: &mut CardStates) {
    match value {
        FieldValue::Affordances(affordances) => {
            ui.add_space(4.0);
            for (index, affordance) in affordances.iter().enumerate() {
                affordance_card(ui, affordance, index, cards);
                ui.add_space(6.0);
            }
        }
        FieldValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                ui.push_id(index, |ui| match item {
                    ListItem::Text(text) => {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new("•").color(theme::MUTED));
                            ui.label(RichText::new(text).color(theme::TEXT));
                        });
                    }
                    ListItem::Nested(fields) => {
                        ui.label(RichText::new("•").color(theme::MUTED));
                        nested(ui, fields, cards);
                    }
                });
            }
        }
        FieldValue::Object(fields) => nested(ui, fields, cards),
        FieldValue::Text(text) => {
            ui.label(RichText::new(text).color(theme::TEXT));
        }
    }
}

/// One level deeper: indented, with a rule down the left edge
fn nested(ui: &mut Ui, fields: &[Field], cards: &mut CardStates) {
    let response = Frame::none()
        .inner_margin(Margin {
            left: INDENT,
            ..Default::default()
        })
        .show(ui, |ui| render_fields(ui, fields, cards))
        .response;

    let rect = response.rect;
    ui.painter()
        .vline(rect.left() + 2.0, rect.y_range(), Stroke::new(1.0, theme::RULE));
}
