#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use halo_sketch::SurfaceConfig;

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let [width, height] = config.size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Halo Sketch")
            .with_inner_size([width + 260.0, height + 40.0])
            .with_min_inner_size([width + 220.0, height + 20.0]),
        ..Default::default()
    };
    eframe::run_native(
        "halo_sketch",
        native_options,
        Box::new(|cc| Ok(Box::new(halo_sketch::SketchApp::new(cc, config)))),
    )
}

/// Reads the config named by `HALO_SKETCH_CONFIG`, falling back to defaults.
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> SurfaceConfig {
    let Some(path) = std::env::var_os("HALO_SKETCH_CONFIG") else {
        return SurfaceConfig::default();
    };
    match SurfaceConfig::from_file(&path) {
        Ok(config) => {
            log::info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            log::warn!("Ignoring config {:?}: {}", path, err);
            SurfaceConfig::default()
        }
    }
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    Ok(Box::new(halo_sketch::SketchApp::new(
                        cc,
                        SurfaceConfig::default(),
                    )))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
