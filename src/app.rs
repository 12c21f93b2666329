//! Gaia Object Inspector - 2-Panel Layout
//!
//! Layout:
//! ┌──────────────────────────────────────┐
//! │            Title / tagline           │
//! ├──────────────────┬───────────────────┤
//! │  Inspection      │  Oracle's         │
//! │  Parameters      │  Revelation       │
//! │  (form)          │  (result)         │
//! ├──────────────────┴───────────────────┤
//! │            Footer link               │
//! └──────────────────────────────────────┘

use eframe::egui;
use egui::{Frame, RichText, Ui};

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::inspect::InspectClient;
use crate::panels::{InspectForm, ResultAction, ResultPanel};
use crate::spawn::Spawner;
use crate::theme;
use crate::worlds::WorldCatalog;

pub struct InspectorApp {
    client: InspectClient,
    catalog: WorldCatalog,
    form: InspectForm,
    result_panel: ResultPanel,
    api_base: String,
}

impl InspectorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, spawner: Spawner) -> Self {
        let api = ApiClient::new(&config.api_base);
        let catalog = WorldCatalog::fetch(&api, &spawner);

        tracing::info!(api_base = %api.base_url(), "inspector started");

        Self {
            api_base: api.base_url().to_string(),
            client: InspectClient::new(api, spawner),
            catalog,
            form: InspectForm::new(&config.default_world),
            result_panel: ResultPanel::new(),
        }
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.client.poll();
        if self.catalog.poll() {
            self.form.set_worlds(self.catalog.worlds());
        }

        // Futures don't wake egui, keep painting until they land
        if self.client.has_pending() || self.catalog.is_loading() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(
                    RichText::new("✨ Gaia Object Inspector ✨")
                        .size(28.0)
                        .color(theme::TEXT),
                );
                ui.label(
                    RichText::new(
                        "Peer through the veil and discover the secrets of any object within the fantasy realms.",
                    )
                    .color(theme::MUTED),
                );
                ui.label(
                    RichText::new(
                        "Choose your perspective to see how different beings perceive the world around them.",
                    )
                    .color(theme::MUTED),
                );
                ui.add_space(12.0);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Powered by").small().color(theme::MUTED));
                    ui.hyperlink_to(
                        RichText::new("Gaia World Server API").small(),
                        &self.api_base,
                    );
                });
            });
        });

        let loading = self.client.is_loading();
        let mut submission = None;
        let mut result_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                panel_frame(&mut columns[0], "Inspection Parameters", |ui| {
                    submission = self.form.ui(ui, loading);
                });
                panel_frame(&mut columns[1], "Oracle's Revelation", |ui| {
                    result_action =
                        self.result_panel
                            .ui(ui, self.client.state(), self.client.revision());
                });
            });
        });

        if let Some(params) = submission {
            self.client.inspect(params);
            ctx.request_repaint();
        }
        if let Some(ResultAction::Clear) = result_action {
            self.client.reset();
        }
    }
}

fn panel_frame(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    Frame::none()
        .fill(theme::PANEL_FILL)
        .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
        .rounding(10.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("──").color(theme::ACCENT.gamma_multiply(0.5)));
                ui.label(RichText::new(title).size(18.0).color(theme::TEXT));
                ui.label(RichText::new("──").color(theme::ACCENT.gamma_multiply(0.5)));
            });
            ui.add_space(16.0);
            add_contents(ui);
        });
}
