//! Native desktop entry point

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use gaia_inspector::spawn::Spawner;
    use gaia_inspector::{AppConfig, InspectorApp};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gaia_inspector=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let spawner = Spawner::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Gaia Object Inspector")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gaia Object Inspector",
        options,
        Box::new(move |cc| Ok(Box::new(InspectorApp::new(cc, config, spawner)))),
    )?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
