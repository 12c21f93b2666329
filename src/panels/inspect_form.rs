//! Query Parameters Form
//!
//! Collects world, object, perspective and context. Returns a
//! [`QueryParams`] from `ui()` when the user submits - no callbacks.

use egui::{Button, ComboBox, Key, RichText, TextEdit, Ui};
use inspector_types::{QueryParams, World};

use crate::theme;
use crate::view::title_case;

/// Perspectives offered when the selected world declares no presets
pub const DEFAULT_PERSPECTIVES: [&str; 10] = [
    "Human adult",
    "Human child",
    "Elf",
    "Dwarf",
    "Halfling",
    "Orc",
    "Wizard",
    "Scholar",
    "Warrior",
    "Merchant",
];

pub const CONTEXTS: [&str; 8] = [
    "generic",
    "combat",
    "exploration",
    "trade",
    "research",
    "survival",
    "stealth",
    "social",
];

pub struct InspectForm {
    pub world: String,
    pub obj: String,
    pub perspective: String,
    pub context: String,
    /// Catalog entries; empty means free-text world input
    worlds: Vec<World>,
}

impl InspectForm {
    pub fn new(default_world: &str) -> Self {
        Self {
            world: default_world.to_string(),
            obj: String::new(),
            perspective: DEFAULT_PERSPECTIVES[0].to_string(),
            context: CONTEXTS[0].to_string(),
            worlds: Vec::new(),
        }
    }

    /// Switch to the world selector and pick the first entry
    pub fn set_worlds(&mut self, worlds: &[World]) {
        self.worlds = worlds.to_vec();
        if let Some(first) = self.worlds.first() {
            self.world = first.slug.clone();
        }
        self.sync_perspective();
    }

    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn select_world(&mut self, slug: &str) {
        self.world = slug.to_string();
        self.sync_perspective();
    }

    fn selected_world(&self) -> Option<&World> {
        self.worlds.iter().find(|w| w.slug == self.world)
    }

    /// Presets of the selected world, else the default archetypes
    pub fn perspective_options(&self) -> Vec<String> {
        match self.selected_world().and_then(World::perspectives) {
            Some(presets) => presets.to_vec(),
            None => DEFAULT_PERSPECTIVES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Keep the selected perspective inside the active option list
    pub fn sync_perspective(&mut self) {
        let options = self.perspective_options();
        if !options.contains(&self.perspective) {
            if let Some(first) = options.into_iter().next() {
                self.perspective = first;
            }
        }
    }

    pub fn has_required_fields(&self) -> bool {
        !self.world.trim().is_empty() && !self.obj.trim().is_empty()
    }

    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && self.has_required_fields()
    }

    /// Trimmed parameters, or `None` when world or object is blank.
    /// Inputs are left as typed.
    pub fn submit(&self) -> Option<QueryParams> {
        if !self.has_required_fields() {
            return None;
        }

        Some(QueryParams {
            world: self.world.trim().to_string(),
            obj: self.obj.trim().to_string(),
            perspective: self.perspective.clone(),
            context: self.context.clone(),
        })
    }

    pub fn ui(&mut self, ui: &mut Ui, loading: bool) -> Option<QueryParams> {
        let mut submitted = false;
        let full_width = ui.available_width();

        // World
        field_label(ui, "🧭", "World");
        if self.worlds.is_empty() {
            let response = ui.add(
                TextEdit::singleline(&mut self.world)
                    .hint_text("Enter world name...")
                    .desired_width(full_width),
            );
            if response.changed() {
                self.sync_perspective();
            }
        } else {
            let mut picked: Option<String> = None;
            let selected_text = self
                .selected_world()
                .map(|w| w.name.clone())
                .unwrap_or_else(|| self.world.clone());

            ComboBox::from_id_salt("world_selector")
                .selected_text(selected_text)
                .width(full_width)
                .show_ui(ui, |ui| {
                    for world in &self.worlds {
                        if ui
                            .selectable_label(self.world == world.slug, world.name.as_str())
                            .clicked()
                        {
                            picked = Some(world.slug.clone());
                        }
                    }
                });

            if let Some(slug) = picked {
                self.select_world(&slug);
            }
        }
        ui.add_space(12.0);

        // Object
        field_label(ui, "🔍", "Object to Inspect");
        let response = ui.add(
            TextEdit::singleline(&mut self.obj)
                .hint_text("Ancient sword, mysterious potion, enchanted tome...")
                .desired_width(full_width),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submitted = true;
        }
        ui.add_space(12.0);

        // Perspective
        field_label(ui, "👁", "Perspective");
        let options = self.perspective_options();
        ComboBox::from_id_salt("perspective_selector")
            .selected_text(self.perspective.clone())
            .width(full_width)
            .show_ui(ui, |ui| {
                for option in options {
                    let text = option.clone();
                    ui.selectable_value(&mut self.perspective, option, text);
                }
            });
        ui.add_space(12.0);

        // Context
        field_label(ui, "✨", "Context");
        ComboBox::from_id_salt("context_selector")
            .selected_text(title_case(&self.context))
            .width(full_width)
            .show_ui(ui, |ui| {
                for context in CONTEXTS {
                    ui.selectable_value(&mut self.context, context.to_string(), title_case(context));
                }
            });
        ui.add_space(20.0);

        // Submit
        let label = if loading {
            RichText::new("⏳ Divining...").strong()
        } else {
            RichText::new("👁 Inspect Object").strong()
        };
        ui.horizontal(|ui| {
            let button = Button::new(label).min_size(egui::vec2(full_width - 24.0, 36.0));
            if ui.add_enabled(self.can_submit(loading), button).clicked() {
                submitted = true;
            }
            if loading {
                ui.spinner();
            }
        });

        if submitted && self.can_submit(loading) {
            self.submit()
        } else {
            None
        }
    }
}

fn field_label(ui: &mut Ui, icon: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).color(theme::ACCENT));
        ui.label(RichText::new(text).strong());
    });
    ui.add_space(2.0);
}
