//! Tileslide sliding-puzzle application using egui/eframe.
//!
//! Runs natively as a desktop window or in the browser as a WASM canvas app.

use tileslide_app::TileslideApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.tileslide";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Tileslide, version={}",
        tileslide_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((820.0, 580.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Tileslide",
        options,
        Box::new(|cc| Ok(Box::new(TileslideApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!(
        "Starting Tileslide WASM application, version={}",
        tileslide_app::version::build_version()
    );

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
                Box::new(|cc| Ok(Box::new(TileslideApp::new(cc)))),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(()) => {
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
