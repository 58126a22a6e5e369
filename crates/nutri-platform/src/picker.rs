//! Browser file picker.
//!
//! Opens a transient `<input type="file" accept="image/*">`, reads the chosen
//! file into memory, and publishes the outcome on the event bus:
//! `FilePicked` with the file, `FileReadFailed` when its bytes cannot be read,
//! or `FilePicked { file: None }` where the browser reports a `cancel` event.
//! `wake` runs after each publish so the UI redraws without polling.

use std::rc::Rc;

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use nutri_core::event_bus::EventBus;
use nutri_types::{NutriError, Result, event::AppEvent, upload::SelectedFile};

pub fn open_image_picker(bus: EventBus, wake: Rc<dyn Fn()>) -> Result<()> {
    let document = gloo_utils::document();
    let input: HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e: web_sys::Element| js_err(e.into()))?;
    input.set_type("file");
    input.set_accept("image/*");

    let change_bus = bus.clone();
    let change_wake = wake.clone();
    let change_input = input.clone();
    let onchange = Closure::once(move |_event: web_sys::Event| {
        let file = change_input.files().and_then(|list| list.get(0));
        wasm_bindgen_futures::spawn_local(async move {
            change_bus.emit(picked_event(file).await);
            change_wake();
        });
    });
    input
        .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())
        .map_err(js_err)?;
    onchange.forget();

    let oncancel = Closure::once(move |_event: web_sys::Event| {
        bus.emit(AppEvent::FilePicked { file: None });
        wake();
    });
    input
        .add_event_listener_with_callback("cancel", oncancel.as_ref().unchecked_ref())
        .map_err(js_err)?;
    oncancel.forget();

    input.click();
    Ok(())
}

async fn picked_event(file: Option<File>) -> AppEvent {
    let Some(file) = file else {
        return AppEvent::FilePicked { file: None };
    };
    match read_file(&file).await {
        Ok(selected) => AppEvent::FilePicked { file: Some(selected) },
        Err(e) => {
            log::error!("Could not read selected file {}: {}", file.name(), e);
            AppEvent::FileReadFailed { message: e.detail() }
        }
    }
}

async fn read_file(file: &File) -> Result<SelectedFile> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_err)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}

fn js_err(e: JsValue) -> NutriError {
    NutriError::JsInterop(format!("{:?}", e))
}
