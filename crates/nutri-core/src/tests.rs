#[cfg(test)]
mod tests {
    use crate::event_bus::EventBus;
    use crate::chat::{Availability, ChatSession, FALLBACK_REPLY};
    use crate::reset::{ResetForm, DEFAULT_FAILURE, DEFAULT_SUCCESS, EMAIL_REQUIRED};
    use crate::scan::*;
    use crate::ports::*;
    use nutri_types::NutriError;
    use nutri_types::config::{ChatConfig, HarmBlockThreshold, UploadCredentials};
    use nutri_types::event::AppEvent;
    use nutri_types::message::{MessageKind, Sender};
    use nutri_types::upload::SelectedFile;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    // Use a minimal executor for sync tests (since we're not in WASM here)
    fn block_on<F: std::future::Future<Output = T>, T>(f: F) -> T {
        use std::task::{Context, Poll, Wake, Waker};
        use std::sync::Arc;

        struct NoopWaker;
        impl Wake for NoopWaker {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(val) => return val,
                // Mocks complete immediately, so this shouldn't spin
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    fn config() -> Rc<ChatConfig> {
        Rc::new(ChatConfig::default())
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_pending());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_emit_and_drain_in_order() {
        let bus = EventBus::new();
        bus.emit(AppEvent::DictationTranscript { text: "app".to_string() });
        bus.emit(AppEvent::DictationTranscript { text: "apple".to_string() });
        bus.emit(AppEvent::DictationEnded);

        let events = bus.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[1], AppEvent::DictationTranscript { text } if text == "apple"));
        assert!(matches!(events[2], AppEvent::DictationEnded));
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();
        bus1.emit(AppEvent::ToastExpired { id: 1 });
        assert!(bus2.has_pending());
        assert_eq!(bus2.drain().len(), 1);
        assert!(!bus1.has_pending());
    }

    // ─── Mock Ports ──────────────────────────────────────────

    struct MockLlm {
        reply: Result<String, NutriError>,
        requests: RefCell<Vec<GenerateRequest>>,
    }

    impl MockLlm {
        fn replying(text: &str) -> Self {
            Self { reply: Ok(text.to_string()), requests: RefCell::new(Vec::new()) }
        }

        fn failing(err: NutriError) -> Self {
            Self { reply: Err(err), requests: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl GenerativePort for MockLlm {
        async fn generate(&self, req: GenerateRequest) -> nutri_types::Result<String> {
            self.requests.borrow_mut().push(req);
            self.reply.clone()
        }
    }

    struct MockReset {
        reply: Result<Option<String>, NutriError>,
        calls: RefCell<Vec<ResetRequest>>,
    }

    #[async_trait(?Send)]
    impl PasswordResetPort for MockReset {
        async fn request_reset(&self, req: ResetRequest) -> nutri_types::Result<Option<String>> {
            self.calls.borrow_mut().push(req);
            self.reply.clone()
        }
    }

    struct MockHost {
        reply: Result<String, NutriError>,
        calls: Cell<usize>,
    }

    impl MockHost {
        fn ok(url: &str) -> Self {
            Self { reply: Ok(url.to_string()), calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl ImageHostPort for MockHost {
        async fn upload(&self, _req: UploadRequest) -> nutri_types::Result<String> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    struct MockSummary {
        reply: Result<String, NutriError>,
        links: RefCell<Vec<String>>,
    }

    impl MockSummary {
        fn ok(text: &str) -> Self {
            Self { reply: Ok(text.to_string()), links: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl SummaryPort for MockSummary {
        async fn summarize(&self, req: SummaryRequest) -> nutri_types::Result<String> {
            self.links.borrow_mut().push(req.link);
            self.reply.clone()
        }
    }

    struct MockDictation {
        available: bool,
        fail_start: bool,
        running: Cell<bool>,
    }

    impl DictationPort for MockDictation {
        fn is_available(&self) -> bool {
            self.available
        }

        fn start(&self) -> nutri_types::Result<()> {
            if self.fail_start {
                return Err(NutriError::JsInterop("not-allowed".to_string()));
            }
            self.running.set(true);
            Ok(())
        }

        fn stop(&self) {
            self.running.set(false);
        }
    }

    // ─── ChatSession Tests ───────────────────────────────────

    #[test]
    fn test_chat_initial_greeting() {
        let session = ChatSession::new(config(), Some("Jane"));
        assert_eq!(session.transcript().len(), 1);
        let greeting = &session.transcript()[0];
        assert_eq!(greeting.kind, MessageKind::Greeting);
        assert_eq!(greeting.sender, Sender::Assistant);
        assert!(greeting.text.contains("Jane"));
        assert!(!session.is_loading());
        assert!(session.is_ready());
    }

    #[test]
    fn test_chat_greeting_without_name() {
        let session = ChatSession::new(config(), None);
        assert!(session.transcript()[0].text.contains("friend"));
    }

    #[test]
    fn test_chat_submit_success_appends_two() {
        let mut session = ChatSession::new(config(), None);
        let llm = MockLlm::replying("An apple has about 52 kcal.");

        assert!(block_on(session.submit("How many calories in an apple?", &llm)));

        let t = session.transcript();
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].sender, Sender::User);
        assert_eq!(t[1].text, "How many calories in an apple?");
        assert_eq!(t[2].sender, Sender::Assistant);
        assert_eq!(t[2].kind, MessageKind::Reply);
        assert_eq!(t[2].text, "An apple has about 52 kcal.");
        assert!(!session.is_loading());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_chat_request_carries_fixed_config_and_single_turn() {
        let mut session = ChatSession::new(config(), None);
        let llm = MockLlm::replying("first");
        block_on(session.submit("one", &llm));
        block_on(session.submit("two", &llm));

        let requests = llm.requests.borrow();
        assert_eq!(requests.len(), 2);
        let req = &requests[1];
        assert_eq!(req.prompt, "two");
        assert_eq!(req.generation.temperature, 0.9);
        assert_eq!(req.generation.max_output_tokens, 2048);
        assert_eq!(req.safety.len(), 4);
        assert!(req
            .safety
            .iter()
            .all(|s| s.threshold == HarmBlockThreshold::BlockMediumAndAbove));
        assert!(req.system_instruction.contains("NutriAI Assistant"));
    }

    #[test]
    fn test_chat_submit_failure_appends_fallback() {
        let mut session = ChatSession::new(config(), None);
        let llm = MockLlm::failing(NutriError::Network("Failed to fetch".to_string()));

        assert!(block_on(session.submit("hello", &llm)));

        let t = session.transcript();
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].sender, Sender::User);
        assert_eq!(t[2].kind, MessageKind::Fallback);
        assert_eq!(t[2].text, FALLBACK_REPLY);
        assert!(!session.is_loading());
        assert!(session.last_error().unwrap().contains("Failed to fetch"));
    }

    #[test]
    fn test_chat_empty_reply_takes_fallback_path() {
        let mut empty = ChatSession::new(config(), None);
        block_on(empty.submit("hi", &MockLlm::replying("")));

        let mut failed = ChatSession::new(config(), None);
        block_on(failed.submit("hi", &MockLlm::failing(NutriError::Network("x".to_string()))));

        assert_eq!(empty.transcript().len(), failed.transcript().len());
        assert_eq!(empty.transcript()[2].text, failed.transcript()[2].text);
        assert_eq!(empty.transcript()[2].kind, MessageKind::Fallback);
        assert_eq!(empty.last_error(), Some("No response text from AI."));
        assert!(!empty.is_loading());
    }

    #[test]
    fn test_chat_whitespace_reply_is_failure() {
        let mut session = ChatSession::new(config(), None);
        block_on(session.submit("hi", &MockLlm::replying("  \n ")));
        assert_eq!(session.transcript()[2].kind, MessageKind::Fallback);
    }

    #[test]
    fn test_chat_blank_utterance_ignored() {
        let mut session = ChatSession::new(config(), None);
        let llm = MockLlm::replying("never");
        assert!(!block_on(session.submit("   ", &llm)));
        assert_eq!(session.transcript().len(), 1);
        assert!(llm.requests.borrow().is_empty());
    }

    #[test]
    fn test_chat_submit_while_pending_is_noop() {
        let mut session = ChatSession::new(config(), None);
        let first = session.begin_submit("first");
        assert!(first.is_some());
        assert!(session.is_loading());
        let len = session.transcript().len();

        assert!(session.begin_submit("second").is_none());
        assert_eq!(session.transcript().len(), len);

        session.finish_submit(Ok("answer".to_string()));
        assert_eq!(session.transcript().len(), len + 1);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_chat_stray_result_ignored() {
        let mut session = ChatSession::new(config(), None);
        session.finish_submit(Ok("unexpected".to_string()));
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_chat_begin_submit_clears_input() {
        let mut session = ChatSession::new(config(), None);
        session.set_input("  Suggest a low-carb meal ");
        assert!(session.can_send());
        let req = session.begin_submit_input().unwrap();
        assert_eq!(req.prompt, "Suggest a low-carb meal");
        assert!(session.input.is_empty());
        assert!(!session.can_send());
    }

    #[test]
    fn test_chat_rejected_input_is_kept() {
        let mut session = ChatSession::new(config(), None);
        session.begin_submit("first");
        session.set_input("queued");
        assert!(session.begin_submit_input().is_none());
        assert_eq!(session.input, "queued");
    }

    #[test]
    fn test_chat_unavailable_is_terminal() {
        let mut session = ChatSession::unavailable(config(), "missing API key");
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].kind, MessageKind::Error);
        assert_eq!(session.transcript()[0].text, "Error: missing API key");
        assert_eq!(
            session.availability(),
            &Availability::Unavailable("missing API key".to_string())
        );

        session.set_input("hello");
        assert!(!session.can_send());
        let llm = MockLlm::replying("never");
        assert!(!block_on(session.submit("hello", &llm)));
        assert_eq!(session.transcript().len(), 1);
        assert!(llm.requests.borrow().is_empty());
    }

    // ─── Dictation Tests ─────────────────────────────────────

    #[test]
    fn test_dictation_toggle_on_and_off() {
        let mut session = ChatSession::new(config(), None);
        let mic = MockDictation { available: true, fail_start: false, running: Cell::new(false) };

        session.toggle_dictation(&mic);
        assert!(session.is_dictating());
        assert!(mic.running.get());

        session.toggle_dictation(&mic);
        assert!(!session.is_dictating());
        assert!(!mic.running.get());
    }

    #[test]
    fn test_dictation_transcript_replaces_input() {
        let mut session = ChatSession::new(config(), None);
        let mic = MockDictation { available: true, fail_start: false, running: Cell::new(false) };
        session.set_input("typed text");
        session.toggle_dictation(&mic);

        session.apply_transcript("how many");
        session.apply_transcript("how many calories");
        assert_eq!(session.input, "how many calories");

        session.dictation_ended();
        assert!(!session.is_dictating());
        session.apply_transcript("late result");
        assert_eq!(session.input, "how many calories");
    }

    #[test]
    fn test_dictation_unavailable_is_noop() {
        let mut session = ChatSession::new(config(), None);
        let mic = MockDictation { available: false, fail_start: false, running: Cell::new(false) };
        session.toggle_dictation(&mic);
        assert!(!session.is_dictating());
        assert!(!mic.running.get());
    }

    #[test]
    fn test_dictation_start_failure() {
        let mut session = ChatSession::new(config(), None);
        let mic = MockDictation { available: true, fail_start: true, running: Cell::new(false) };
        session.toggle_dictation(&mic);
        assert!(!session.is_dictating());
    }

    // ─── ResetForm Tests ─────────────────────────────────────

    fn reset_port(reply: Result<Option<String>, NutriError>) -> MockReset {
        MockReset { reply, calls: RefCell::new(Vec::new()) }
    }

    #[test]
    fn test_reset_success_shows_server_message_and_clears_email() {
        let mut form = ResetForm::new();
        form.email = "a@b.com".to_string();
        let port = reset_port(Ok(Some("sent".to_string())));

        assert!(block_on(form.submit(&port)));

        assert_eq!(form.message(), Some("sent"));
        assert!(form.error().is_none());
        assert!(form.email.is_empty());
        assert!(!form.is_pending());
        assert_eq!(port.calls.borrow()[0].email, "a@b.com");
    }

    #[test]
    fn test_reset_success_default_message() {
        let mut form = ResetForm::new();
        form.email = "a@b.com".to_string();
        block_on(form.submit(&reset_port(Ok(None))));
        assert_eq!(form.message(), Some(DEFAULT_SUCCESS));
    }

    #[test]
    fn test_reset_failure_keeps_email() {
        let mut form = ResetForm::new();
        form.email = "a@b.com".to_string();
        let port = reset_port(Err(NutriError::Http {
            status: 404,
            message: Some("No account with that email".to_string()),
        }));

        block_on(form.submit(&port));

        assert_eq!(form.error(), Some("No account with that email"));
        assert!(form.message().is_none());
        assert_eq!(form.email, "a@b.com");
        assert!(!form.is_pending());
    }

    #[test]
    fn test_reset_failure_default_message() {
        let mut form = ResetForm::new();
        form.email = "a@b.com".to_string();
        block_on(form.submit(&reset_port(Err(NutriError::Network("offline".to_string())))));
        assert_eq!(form.error(), Some(DEFAULT_FAILURE));
    }

    #[test]
    fn test_reset_empty_email_no_request() {
        let mut form = ResetForm::new();
        form.email = "   ".to_string();
        let port = reset_port(Ok(None));
        assert!(!block_on(form.submit(&port)));
        assert_eq!(form.error(), Some(EMAIL_REQUIRED));
        assert!(port.calls.borrow().is_empty());
    }

    #[test]
    fn test_reset_clears_previous_messages() {
        let mut form = ResetForm::new();
        form.email = "a@b.com".to_string();
        form.finish_request(Err(NutriError::Network("x".to_string())));
        assert!(form.error().is_some());

        assert!(form.begin_request().is_some());
        assert!(form.error().is_none());
        assert!(form.message().is_none());
        assert!(form.is_pending());
        assert!(form.begin_request().is_none());
    }

    // ─── ScanPipeline Tests ──────────────────────────────────

    fn creds() -> Option<UploadCredentials> {
        Some(UploadCredentials {
            cloud_name: "demo".to_string(),
            upload_preset: "unsigned".to_string(),
        })
    }

    fn image() -> SelectedFile {
        SelectedFile::new("apple.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    fn summarized_pipeline() -> ScanPipeline {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        block_on(p.upload(&MockHost::ok("https://cdn/x.jpg"), &MockSummary::ok("Fresh apple")));
        p
    }

    #[test]
    fn test_scan_initial_state() {
        let p = ScanPipeline::new(creds());
        assert_eq!(p.phase(), &ScanPhase::Idle);
        assert!(p.image_url().is_none());
        assert!(p.summary().is_none());
        assert!(p.error().is_none());
        assert!(!p.can_upload());
    }

    #[test]
    fn test_scan_select_valid_image_clears_previous() {
        let mut p = summarized_pipeline();
        assert!(p.image_url().is_some());
        assert!(p.summary().is_some());

        assert!(p.select_file(Some(image())));
        assert_eq!(p.phase(), &ScanPhase::FileSelected);
        assert!(p.image_url().is_none());
        assert!(p.summary().is_none());
        assert!(p.error().is_none());
        assert!(p.toast().is_none());
        assert!(p.can_upload());
    }

    #[test]
    fn test_scan_select_non_image_keeps_results() {
        let mut p = summarized_pipeline();
        p.select_file(Some(SelectedFile::new("notes.pdf", "application/pdf", vec![1])));

        assert_eq!(p.phase(), &ScanPhase::Errored);
        assert_eq!(p.error(), Some(INVALID_FILE));
        assert_eq!(p.image_url(), Some("https://cdn/x.jpg"));
        assert_eq!(p.summary(), Some("Fresh apple"));
        assert!(p.file().is_none());
    }

    #[test]
    fn test_scan_file_read_failure_reports_error() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));

        assert!(p.file_read_failed("NotReadableError"));
        assert_eq!(p.phase(), &ScanPhase::Errored);
        assert_eq!(
            p.error(),
            Some("Could not read the selected file: NotReadableError")
        );
        assert!(p.file().is_none());
        assert!(!p.can_upload());
    }

    #[test]
    fn test_scan_file_read_failure_keeps_results() {
        let mut p = summarized_pipeline();
        p.file_read_failed("denied");

        assert!(p.error().is_some_and(|e| e.starts_with(FILE_READ_FAILED)));
        assert_eq!(p.image_url(), Some("https://cdn/x.jpg"));
        assert_eq!(p.summary(), Some("Fresh apple"));
    }

    #[test]
    fn test_scan_file_read_failure_ignored_while_uploading() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        p.begin_upload().unwrap();

        assert!(!p.file_read_failed("late"));
        assert_eq!(p.phase(), &ScanPhase::Uploading);
        assert!(p.error().is_none());
    }

    #[test]
    fn test_scan_cancel_selection() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        p.select_file(None);
        assert!(p.file().is_none());
        assert_eq!(p.phase(), &ScanPhase::Idle);

        let mut done = summarized_pipeline();
        done.select_file(None);
        assert_eq!(done.phase(), &ScanPhase::Summarized);
        assert_eq!(done.summary(), Some("Fresh apple"));
    }

    #[test]
    fn test_scan_upload_success_triggers_summary() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));

        let req = p.begin_upload().unwrap();
        assert_eq!(req.file.name, "apple.jpg");
        assert_eq!(req.credentials.cloud_name, "demo");
        assert_eq!(p.phase(), &ScanPhase::Uploading);
        assert!(p.is_busy());

        let summary_req = p.finish_upload(Ok("https://cdn/u.jpg".to_string())).unwrap();
        assert_eq!(summary_req.link, "https://cdn/u.jpg");
        assert_eq!(p.phase(), &ScanPhase::Summarizing);
        assert_eq!(p.image_url(), Some("https://cdn/u.jpg"));
        assert!(p.file().is_none());
        assert_eq!(p.toast().map(|t| t.text.as_str()), Some(UPLOAD_TOAST));

        p.finish_summary(Ok("Looks like a red apple".to_string()));
        assert_eq!(p.phase(), &ScanPhase::Summarized);
        assert_eq!(p.summary(), Some("Looks like a red apple"));
        assert_eq!(p.toast().map(|t| t.text.as_str()), Some(SUMMARY_TOAST));
        assert!(!p.is_busy());
    }

    #[test]
    fn test_scan_upload_issues_summary_for_returned_url() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        let host = MockHost::ok("https://cdn/U.png");
        let summarizer = MockSummary::ok("ok");

        assert!(block_on(p.upload(&host, &summarizer)));

        assert_eq!(host.calls.get(), 1);
        assert_eq!(*summarizer.links.borrow(), vec!["https://cdn/U.png".to_string()]);
        assert_eq!(p.phase(), &ScanPhase::Summarized);
    }

    #[test]
    fn test_scan_missing_credentials_no_network() {
        let mut p = ScanPipeline::new(None);
        p.select_file(Some(image()));
        let host = MockHost::ok("https://cdn/x.jpg");
        let summarizer = MockSummary::ok("never");

        assert!(!block_on(p.upload(&host, &summarizer)));

        assert_eq!(host.calls.get(), 0);
        assert!(summarizer.links.borrow().is_empty());
        assert_eq!(p.phase(), &ScanPhase::Errored);
        assert_eq!(p.error(), Some(MISSING_CREDENTIALS));
    }

    #[test]
    fn test_scan_upload_without_file() {
        let mut p = ScanPipeline::new(creds());
        assert!(p.begin_upload().is_none());
        assert_eq!(p.error(), Some(NO_FILE));
        assert_eq!(p.phase(), &ScanPhase::Errored);
    }

    #[test]
    fn test_scan_upload_failure() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        let host = MockHost {
            reply: Err(NutriError::Http {
                status: 400,
                message: Some("Upload preset not found".to_string()),
            }),
            calls: Cell::new(0),
        };
        let summarizer = MockSummary::ok("never");

        block_on(p.upload(&host, &summarizer));

        assert_eq!(p.phase(), &ScanPhase::Errored);
        assert_eq!(p.error(), Some("Failed to upload image: Upload preset not found"));
        assert!(p.image_url().is_none());
        assert!(p.summary().is_none());
        assert!(summarizer.links.borrow().is_empty());
        // The selection survives so the user can retry manually
        assert!(p.can_upload());
    }

    #[test]
    fn test_scan_summary_failure_keeps_image() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        let summarizer = MockSummary {
            reply: Err(NutriError::MalformedResponse("missing analysis".to_string())),
            links: RefCell::new(Vec::new()),
        };

        block_on(p.upload(&MockHost::ok("https://cdn/kept.jpg"), &summarizer));

        assert_eq!(p.phase(), &ScanPhase::Errored);
        assert_eq!(p.image_url(), Some("https://cdn/kept.jpg"));
        assert!(p.summary().is_none());
        assert_eq!(p.error(), Some("Failed to generate AI summary: missing analysis"));
    }

    #[test]
    fn test_scan_selection_ignored_while_busy() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        p.begin_upload().unwrap();

        assert!(!p.select_file(Some(SelectedFile::new("b.png", "image/png", vec![]))));
        assert_eq!(p.phase(), &ScanPhase::Uploading);
        assert_eq!(p.file().map(|f| f.name.as_str()), Some("apple.jpg"));
        assert!(p.begin_upload().is_none());
    }

    #[test]
    fn test_scan_stray_results_ignored() {
        let mut p = ScanPipeline::new(creds());
        assert!(p.finish_upload(Ok("https://cdn/x.jpg".to_string())).is_none());
        p.finish_summary(Ok("text".to_string()));
        assert_eq!(p.phase(), &ScanPhase::Idle);
        assert!(p.image_url().is_none());
        assert!(p.summary().is_none());
    }

    #[test]
    fn test_scan_toast_expiry_matches_id() {
        let mut p = ScanPipeline::new(creds());
        p.select_file(Some(image()));
        p.begin_upload();
        p.finish_upload(Ok("https://cdn/x.jpg".to_string()));
        let upload_toast = p.toast().unwrap().id;

        p.finish_summary(Ok("done".to_string()));
        let summary_toast = p.toast().unwrap().id;
        assert_ne!(upload_toast, summary_toast);

        // The first timer firing must not hide the newer toast
        p.expire_toast(upload_toast);
        assert!(p.toast().is_some());
        p.expire_toast(summary_toast);
        assert!(p.toast().is_none());
    }

    #[test]
    fn test_scan_phase_busy() {
        assert!(ScanPhase::Uploading.is_busy());
        assert!(ScanPhase::Summarizing.is_busy());
        assert!(ScanPhase::Uploaded("u".to_string()).is_busy());
        assert!(!ScanPhase::Idle.is_busy());
        assert!(!ScanPhase::Errored.is_busy());
        assert!(!ScanPhase::Summarized.is_busy());
    }
}
