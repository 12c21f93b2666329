//! Gaia Object Inspector
//!
//! egui front-end for the Gaia world inspection API: a query form, one
//! request per submission, and a recursive renderer for whatever JSON the
//! API answers with.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod inspect;
pub mod panels;
pub mod spawn;
pub mod state;
pub mod theme;
pub mod view;
pub mod worlds;

pub use app::InspectorApp;
pub use config::AppConfig;
pub use error::{AppError, InspectError};
pub use inspect::InspectClient;
pub use state::InspectState;

/// Canvas element the browser build attaches to
pub const CANVAS_ID: &str = "inspector_canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("gaia inspector wasm loaded");

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = find_canvas(CANVAS_ID) else {
            tracing::error!(canvas = CANVAS_ID, "canvas element not found");
            return;
        };

        let spawner = match spawn::Spawner::new() {
            Ok(spawner) => spawner,
            Err(err) => {
                tracing::error!(error = %err, "failed to create spawner");
                return;
            }
        };
        let config = AppConfig::default();

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(InspectorApp::new(cc, config, spawner)))),
            )
            .await;

        if let Err(err) = started {
            tracing::error!(error = ?err, "failed to start eframe");
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> Option<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}
