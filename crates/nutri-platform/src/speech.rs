//! Speech dictation adapter.
//!
//! Bridges to the browser's `SpeechRecognition` (or the prefixed
//! `webkitSpeechRecognition`) through `js_sys::Reflect`, since the bindings are
//! not part of stable web-sys. Recognition callbacks publish `AppEvent`s on the
//! event bus; the chat controller consumes them on the next frame.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use nutri_core::event_bus::EventBus;
use nutri_core::ports::DictationPort;
use nutri_types::{NutriError, Result, event::AppEvent};

const CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

struct Recognizer {
    handle: JsValue,
    _onresult: Closure<dyn FnMut(JsValue)>,
    _onend: Closure<dyn FnMut(JsValue)>,
    _onerror: Closure<dyn FnMut(JsValue)>,
}

/// `None` inside means the platform has no speech recognition.
pub struct SpeechDictation {
    recognizer: Option<Recognizer>,
}

impl SpeechDictation {
    pub fn new(bus: EventBus) -> Self {
        let recognizer = match Self::create(bus) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Speech recognition setup failed: {}", e);
                None
            }
        };
        if recognizer.is_none() {
            log::info!("Speech recognition not available; dictation disabled");
        }
        Self { recognizer }
    }

    /// A dictation source that is never available
    pub fn unsupported() -> Self {
        Self { recognizer: None }
    }

    fn create(bus: EventBus) -> Result<Option<Recognizer>> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };

        let ctor = CONSTRUCTORS
            .iter()
            .filter_map(|name| Reflect::get(&window, &JsValue::from_str(name)).ok())
            .find_map(|v| v.dyn_into::<Function>().ok());
        let Some(ctor) = ctor else {
            return Ok(None);
        };

        let handle = Reflect::construct(&ctor, &Array::new()).map_err(js_err)?;
        set(&handle, "continuous", &JsValue::FALSE)?;
        set(&handle, "interimResults", &JsValue::TRUE)?;

        let result_bus = bus.clone();
        let onresult = Closure::wrap(Box::new(move |event: JsValue| {
            let results = Reflect::get(&event, &JsValue::from_str("results"))
                .unwrap_or(JsValue::UNDEFINED);
            result_bus.emit(AppEvent::DictationTranscript {
                text: joined_transcript(&results),
            });
        }) as Box<dyn FnMut(JsValue)>);

        let end_bus = bus.clone();
        let onend = Closure::wrap(Box::new(move |_event: JsValue| {
            end_bus.emit(AppEvent::DictationEnded);
        }) as Box<dyn FnMut(JsValue)>);

        let onerror = Closure::wrap(Box::new(move |event: JsValue| {
            let message = Reflect::get(&event, &JsValue::from_str("error"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "unknown".to_string());
            bus.emit(AppEvent::DictationError { message });
        }) as Box<dyn FnMut(JsValue)>);

        set(&handle, "onresult", onresult.as_ref())?;
        set(&handle, "onend", onend.as_ref())?;
        set(&handle, "onerror", onerror.as_ref())?;

        Ok(Some(Recognizer {
            handle,
            _onresult: onresult,
            _onend: onend,
            _onerror: onerror,
        }))
    }

    fn call(&self, method: &str) -> Result<()> {
        let Some(r) = &self.recognizer else {
            return Err(NutriError::Other("speech recognition unavailable".to_string()));
        };
        let func: Function = Reflect::get(&r.handle, &JsValue::from_str(method))
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        func.call0(&r.handle).map_err(js_err)?;
        Ok(())
    }
}

impl DictationPort for SpeechDictation {
    fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    fn start(&self) -> Result<()> {
        self.call("start")
    }

    fn stop(&self) {
        if let Err(e) = self.call("stop") {
            log::warn!("Failed to stop speech recognition: {}", e);
        }
    }
}

/// Concatenate `results[i][0].transcript` over the whole result list
pub fn joined_transcript(results: &JsValue) -> String {
    let len = Reflect::get(results, &JsValue::from_str("length"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;

    (0..len)
        .filter_map(|i| Reflect::get_u32(results, i).ok())
        .filter_map(|result| Reflect::get_u32(&result, 0).ok())
        .filter_map(|alt| Reflect::get(&alt, &JsValue::from_str("transcript")).ok())
        .filter_map(|t| t.as_string())
        .collect()
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_err)
}

fn js_err(e: JsValue) -> NutriError {
    NutriError::JsInterop(format!("{:?}", e))
}
