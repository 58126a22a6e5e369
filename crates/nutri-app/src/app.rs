//! The NutriAI egui application. Owns the controllers and routes panel actions and queued events to them.

use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use nutri_core::chat::ChatSession;
use nutri_core::event_bus::EventBus;
use nutri_core::ports::{
    DictationPort, GenerateRequest, GenerativePort, ImageHostPort, PasswordResetPort,
    ResetRequest, SummaryPort, SummaryRequest, UploadRequest,
};
use nutri_core::reset::ResetForm;
use nutri_core::scan::{ScanPipeline, TOAST_DURATION_MS};
use nutri_platform::{browser, picker};
use nutri_platform::{CloudinaryUploader, GeminiProvider, HttpPasswordReset, HttpSummary, SpeechDictation};
use nutri_types::config::AppConfig;
use nutri_types::event::AppEvent;
use nutri_types::upload::SelectedFile;
use nutri_ui::panels::chat::{self, ChatAction};
use nutri_ui::panels::scan::{self, ScanAction};
use nutri_ui::panels::{reset, toast};
use nutri_ui::state::{self, Screen, UiState};
use nutri_ui::theme;

/// Repaint cadence while dictation or a toast is live
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct NutriApp {
    ui_state: UiState,
    event_bus: EventBus,
    chat: ChatSession,
    reset: ResetForm,
    scan: ScanPipeline,
    /// `None` when no API key was configured; the chat is then unavailable
    llm: Option<Rc<dyn GenerativePort>>,
    password_reset: Rc<dyn PasswordResetPort>,
    image_host: Rc<dyn ImageHostPort>,
    summarizer: Rc<dyn SummaryPort>,
    dictation: Rc<dyn DictationPort>,
    scheduled_toast: Option<u64>,
    first_frame: bool,
}

impl NutriApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = AppConfig::from_build_env();
        match serde_json::to_string(&config) {
            Ok(summary) => log::info!("Configuration: {}", summary),
            Err(e) => log::warn!("Could not summarize configuration: {}", e),
        }
        log::info!(
            "Credentials: generative={} image-host={}",
            config.gemini_api_key.is_some(),
            config.upload.is_some()
        );

        let event_bus = EventBus::new();
        let chat_config = Rc::new(config.chat.clone());

        let (chat, llm) = match GeminiProvider::new(config.gemini_api_key.clone()) {
            Ok(provider) => {
                let user_name = browser::current_user_name();
                let llm: Rc<dyn GenerativePort> = Rc::new(provider);
                (ChatSession::new(chat_config, user_name.as_deref()), Some(llm))
            }
            Err(e) => {
                log::error!("Chat unavailable: {}", e);
                (ChatSession::unavailable(chat_config, e.detail()), None)
            }
        };

        Self {
            ui_state: UiState::new(),
            chat,
            reset: ResetForm::new(),
            scan: ScanPipeline::new(config.upload.clone()),
            llm,
            password_reset: Rc::new(HttpPasswordReset::new(config.reset_endpoint())),
            image_host: Rc::new(CloudinaryUploader::new()),
            summarizer: Rc::new(HttpSummary::new(config.summary_url.clone())),
            dictation: Rc::new(SpeechDictation::new(event_bus.clone())),
            event_bus,
            scheduled_toast: None,
            first_frame: true,
        }
    }

    /// Feed one completed-work event to the controller that owns it
    fn handle_event(&mut self, event: AppEvent, ctx: &egui::Context) {
        match event {
            AppEvent::GenerationFinished { result } => self.chat.finish_submit(result),
            AppEvent::ResetFinished { result } => self.reset.finish_request(result),
            AppEvent::UploadFinished { result } => {
                if let Some(req) = self.scan.finish_upload(result) {
                    self.dispatch_summary(req, ctx);
                }
            }
            AppEvent::SummaryFinished { result } => self.scan.finish_summary(result),
            AppEvent::FilePicked { file } => {
                self.scan.select_file(file);
            }
            AppEvent::FileReadFailed { message } => {
                self.scan.file_read_failed(&message);
            }
            AppEvent::DictationTranscript { text } => self.chat.apply_transcript(text),
            AppEvent::DictationEnded => self.chat.dictation_ended(),
            AppEvent::DictationError { message } => {
                log::warn!("Dictation error: {}", message);
                self.chat.dictation_ended();
            }
            AppEvent::ToastExpired { id } => {
                self.scan.expire_toast(id);
                if self.scheduled_toast == Some(id) {
                    self.scheduled_toast = None;
                }
            }
        }
    }

    /// Arm the expiry timer once per toast id
    fn schedule_toast(&mut self, ctx: &egui::Context) {
        let Some(id) = self.scan.toast().map(|t| t.id) else {
            return;
        };
        if self.scheduled_toast == Some(id) {
            return;
        }
        self.scheduled_toast = Some(id);
        browser::schedule_toast_expiry(self.event_bus.clone(), id, TOAST_DURATION_MS);
        ctx.request_repaint_after(Duration::from_millis(u64::from(TOAST_DURATION_MS)));
    }

    /// Files dropped onto the canvas go through the same path as the picker
    fn take_dropped_file(ctx: &egui::Context) -> Option<SelectedFile> {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned())?;
        let Some(bytes) = dropped.bytes else {
            log::warn!("Dropped file {} has no contents", dropped.name);
            return None;
        };
        Some(SelectedFile::new(dropped.name, dropped.mime, bytes.to_vec()))
    }

    fn open_link(url: &str) {
        if let Err(e) = browser::open_external(url) {
            log::warn!("Could not open link: {}", e);
        }
    }
}

impl eframe::App for NutriApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        for event in self.event_bus.drain() {
            self.handle_event(event, ctx);
            ctx.request_repaint();
        }
        self.schedule_toast(ctx);

        if let Some(file) = Self::take_dropped_file(ctx) {
            self.ui_state.screen = Screen::Scan;
            self.scan.select_file(Some(file));
        }

        if state::needs_polling(&self.chat, &self.reset, &self.scan) {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🥗 NutriAI").strong().color(theme::ACCENT).size(16.0));
                ui.separator();
                for screen in Screen::all() {
                    if ui
                        .selectable_label(self.ui_state.screen == screen, screen.title())
                        .clicked()
                    {
                        self.ui_state.screen = screen;
                    }
                }
            });
        });

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.ui_state.screen {
            Screen::Chat => {
                let available = self.dictation.is_available();
                match chat::chat_panel(ui, &mut self.chat, &mut self.ui_state.chat, available) {
                    ChatAction::None => {}
                    ChatAction::Send => {
                        if let Some(req) = self.chat.begin_submit_input() {
                            self.dispatch_generation(req, ctx);
                        }
                    }
                    ChatAction::ToggleDictation => self.chat.toggle_dictation(self.dictation.as_ref()),
                    ChatAction::OpenLink(url) => Self::open_link(&url),
                }
            }
            Screen::Scan => match scan::scan_panel(ui, &self.scan) {
                ScanAction::None => {}
                ScanAction::PickFile => {
                    let repaint = ctx.clone();
                    let wake: Rc<dyn Fn()> = Rc::new(move || repaint.request_repaint());
                    if let Err(e) = picker::open_image_picker(self.event_bus.clone(), wake) {
                        log::error!("Could not open file picker: {}", e);
                    }
                }
                ScanAction::Upload => {
                    if let Some(req) = self.scan.begin_upload() {
                        self.dispatch_upload(req, ctx);
                    }
                }
                ScanAction::OpenLink(url) => Self::open_link(&url),
            },
            Screen::ResetPassword => {
                if reset::reset_panel(ui, &mut self.reset) {
                    if let Some(req) = self.reset.begin_request() {
                        self.dispatch_reset(req, ctx);
                    }
                }
            }
        });

        toast::toast_overlay(ctx, self.scan.toast());
    }
}

impl NutriApp {
    fn dispatch_generation(&self, req: GenerateRequest, ctx: &egui::Context) {
        let Some(llm) = self.llm.clone() else {
            return;
        };
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = llm.generate(req).await;
            bus.emit(AppEvent::GenerationFinished { result });
            ctx.request_repaint();
        });
    }

    fn dispatch_reset(&self, req: ResetRequest, ctx: &egui::Context) {
        let port = self.password_reset.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = port.request_reset(req).await;
            bus.emit(AppEvent::ResetFinished { result });
            ctx.request_repaint();
        });
    }

    fn dispatch_upload(&self, req: UploadRequest, ctx: &egui::Context) {
        let host = self.image_host.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = host.upload(req).await;
            bus.emit(AppEvent::UploadFinished { result });
            ctx.request_repaint();
        });
    }

    fn dispatch_summary(&self, req: SummaryRequest, ctx: &egui::Context) {
        let summarizer = self.summarizer.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = summarizer.summarize(req).await;
            bus.emit(AppEvent::SummaryFinished { result });
            ctx.request_repaint();
        });
    }
}
