//! NutriAI web app entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser adapters and hands them to the egui views.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "nutri_canvas";

/// Called by the wasm-bindgen glue once index.html loads the module
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("NutriAI WASM starting...");

    let canvas = match find_canvas() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Cannot start UI: {}", e);
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(app::NutriApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

fn find_canvas() -> Result<web_sys::HtmlCanvasElement, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| format!("no canvas element with id '{}'", CANVAS_ID))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("element '{}' is not a canvas", CANVAS_ID))
}
