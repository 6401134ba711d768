//! Edit session: selection, busy state and the submission state machine.
//!
//! A session owns the currently selected image and prompt, drives a
//! [`Surface`], and turns a submission into exactly one provider call:
//!
//! ```text
//! Idle -> Validating -> Encoding -> AwaitingResponse -> Success | Failure -> Idle
//! ```
//!
//! Validation failures never show the busy indicator and never reach the
//! provider. Once busy state is entered it is cleared exactly once, whatever
//! the outcome. A submission started while another is running is rejected
//! with [`GenEditError::Busy`].

use crate::error::{GenEditError, Result};
use crate::image::{
    encode_image, GeneratedImage, GenerationRequest, ImageProvider, SelectedImage,
};
use crate::surface::Surface;
use std::sync::{Mutex, MutexGuard};

/// Instruction the prompt field starts out with.
pub const DEFAULT_PROMPT: &str =
    "Turn this photo into a watercolor painting with soft edges and warm, vibrant colors.";

/// Where a submission currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Ready to accept a submission.
    Idle,
    /// Checking image and prompt.
    Validating,
    /// Reading and encoding the captured image.
    Encoding,
    /// Waiting on the provider.
    AwaitingResponse,
    /// A result image is being presented.
    Success,
    /// A failure message is being presented.
    Failure,
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Encoding => "encoding",
            Self::AwaitingResponse => "awaiting_response",
            Self::Success => "success",
            Self::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// How a submission ended.
#[derive(Debug)]
#[must_use]
pub enum SubmissionOutcome {
    /// The first inline image of the response, as displayed.
    Success(GeneratedImage),
    /// The error whose message was displayed (or, for [`GenEditError::Busy`],
    /// the rejection of an overlapping submission).
    Failure(GenEditError),
}

impl SubmissionOutcome {
    /// Returns true if an image was produced.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the produced image, if any.
    pub fn image(&self) -> Option<&GeneratedImage> {
        match self {
            Self::Success(image) => Some(image),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&GenEditError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<GeneratedImage> {
        match self {
            Self::Success(image) => Ok(image),
            Self::Failure(err) => Err(err),
        }
    }
}

#[derive(Debug)]
struct SessionState {
    selected: Option<SelectedImage>,
    prompt: String,
    submission: SubmissionState,
    busy: bool,
}

/// One editing front-end instance.
///
/// All methods take `&self`, so a session can be shared (e.g. in an `Arc`)
/// between event handlers. Independent sessions share nothing.
pub struct EditSession<P, S> {
    provider: P,
    surface: S,
    state: Mutex<SessionState>,
}

impl<P: ImageProvider, S: Surface> EditSession<P, S> {
    /// Creates a session with the default prompt and an empty result area.
    pub fn new(provider: P, surface: S) -> Self {
        surface.show_placeholder();
        surface.set_progress_visible(false);
        surface.set_prompt_enabled(true);
        surface.set_file_input_enabled(true);
        surface.set_submit_enabled(false);

        Self {
            provider,
            surface,
            state: Mutex::new(SessionState {
                selected: None,
                prompt: DEFAULT_PROMPT.to_string(),
                submission: SubmissionState::Idle,
                busy: false,
            }),
        }
    }

    /// The provider requests are sent to.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The surface this session drives.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current prompt text, untrimmed.
    pub fn prompt(&self) -> String {
        self.lock().prompt.clone()
    }

    /// Replaces the prompt text.
    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.lock().prompt = prompt.into();
    }

    /// The current selection, if any.
    pub fn selected_image(&self) -> Option<SelectedImage> {
        self.lock().selected.clone()
    }

    /// Current submission state.
    pub fn submission_state(&self) -> SubmissionState {
        self.lock().submission
    }

    /// Whether the busy indicator is showing.
    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    /// Replaces the selection and shows a preview of it.
    ///
    /// The new selection takes effect even if the preview cannot be
    /// rendered; in that case the error is returned, and shown unless a
    /// submission is in flight (the result area belongs to that submission).
    /// A submission already in flight keeps using the image it captured.
    pub async fn select_image(&self, image: SelectedImage) -> Result<()> {
        let busy = {
            let mut state = self.lock();
            state.selected = Some(image.clone());
            state.busy
        };
        if !busy {
            self.surface.set_submit_enabled(true);
        }

        tracing::debug!(name = image.name(), "image selected");

        match encode_image(&image).await {
            Ok(encoded) => {
                self.surface.show_preview(&encoded.to_data_url());
                Ok(())
            }
            Err(err) => {
                if self.is_busy() {
                    tracing::debug!(error = %err, "preview failed during submission");
                } else {
                    self.show_error(&err.user_message());
                }
                Err(err)
            }
        }
    }

    /// Drops the current selection.
    pub fn clear_selection(&self) {
        let busy = {
            let mut state = self.lock();
            state.selected = None;
            state.busy
        };
        if !busy {
            self.surface.set_submit_enabled(false);
        }
    }

    /// Enters or leaves busy state.
    ///
    /// Entering disables every input and shows the progress indicator.
    /// Leaving re-enables prompt and file input, and re-enables submit only
    /// while an image is selected. Repeating the current value is a no-op.
    pub fn set_busy(&self, busy: bool) {
        let has_image = {
            let mut state = self.lock();
            if state.busy == busy {
                return;
            }
            state.busy = busy;
            state.selected.is_some()
        };

        self.surface.set_progress_visible(busy);
        if busy {
            self.surface.set_submit_enabled(false);
            self.surface.set_prompt_enabled(false);
            self.surface.set_file_input_enabled(false);
        } else {
            self.surface.set_prompt_enabled(true);
            self.surface.set_file_input_enabled(true);
            self.surface.set_submit_enabled(has_image);
        }
    }

    /// Shows a failure message in place of any result.
    pub fn show_error(&self, message: &str) {
        tracing::warn!(error = message, "showing error");
        self.surface.show_error(message);
    }

    /// Runs one submission to completion.
    ///
    /// The selection and prompt are captured at the start; later changes do
    /// not affect this submission. Every failure except an overlapping
    /// submission is presented through [`show_error`](Self::show_error)
    /// exactly once.
    pub async fn submit(&self) -> SubmissionOutcome {
        let captured = {
            let mut state = self.lock();
            if state.submission != SubmissionState::Idle {
                tracing::debug!(
                    state = %state.submission,
                    "submission rejected, already in progress"
                );
                return SubmissionOutcome::Failure(GenEditError::Busy);
            }
            Self::transition(&mut state, SubmissionState::Validating);
            let captured = validate(state.selected.as_ref(), &state.prompt);
            if captured.is_err() {
                Self::transition(&mut state, SubmissionState::Failure);
            }
            captured
        };

        let (image, prompt) = match captured {
            Ok(captured) => captured,
            Err(err) => {
                self.show_error(&err.user_message());
                self.set_state(SubmissionState::Idle);
                return SubmissionOutcome::Failure(err);
            }
        };

        self.set_busy(true);
        let guard = BusyGuard { session: self };

        let result = self.run(&image, prompt).await;

        let outcome = match result {
            Ok(generated) => {
                self.set_state(SubmissionState::Success);
                tracing::debug!(
                    mime_type = generated.mime_type(),
                    model = ?generated.metadata.model,
                    "showing result image"
                );
                self.surface.show_result(&generated);
                SubmissionOutcome::Success(generated)
            }
            Err(err) => {
                self.set_state(SubmissionState::Failure);
                self.show_error(&err.user_message());
                SubmissionOutcome::Failure(err)
            }
        };

        drop(guard);
        outcome
    }

    async fn run(&self, image: &SelectedImage, prompt: String) -> Result<GeneratedImage> {
        self.set_state(SubmissionState::Encoding);
        let encoded = encode_image(image).await?;

        self.set_state(SubmissionState::AwaitingResponse);
        let request = GenerationRequest::edit(encoded, prompt);
        tracing::debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            "submitting edit request"
        );
        let response = self.provider.generate(&request).await?;

        response.into_image()
    }

    fn set_state(&self, next: SubmissionState) {
        Self::transition(&mut self.lock(), next);
    }

    fn transition(state: &mut SessionState, next: SubmissionState) {
        tracing::debug!(from = %state.submission, to = %next, "submission state");
        state.submission = next;
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Clears busy state and returns the session to idle when dropped, including
/// when the submission future is cancelled mid-flight.
struct BusyGuard<'a, P: ImageProvider, S: Surface> {
    session: &'a EditSession<P, S>,
}

impl<P: ImageProvider, S: Surface> Drop for BusyGuard<'_, P, S> {
    fn drop(&mut self) {
        self.session.set_busy(false);
        self.session.set_state(SubmissionState::Idle);
    }
}

fn validate(selected: Option<&SelectedImage>, prompt: &str) -> Result<(SelectedImage, String)> {
    let image = selected.ok_or(GenEditError::MissingImage)?;
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(GenEditError::EmptyPrompt);
    }
    Ok((image.clone(), prompt.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{EncodedImage, GenerationResponse, Part};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Preview(String),
        Placeholder,
        Error(String),
        Result(String),
        Progress(bool),
        Submit(bool),
        Prompt(bool),
        FileInput(bool),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingSurface {
        fn push(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }

        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn clear(&self) {
            self.events.lock().unwrap().clear();
        }

        fn count(&self, f: impl Fn(&Event) -> bool) -> usize {
            self.events().into_iter().filter(|e| f(e)).count()
        }

        fn errors(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Error(msg) => Some(msg),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn show_preview(&self, data_url: &str) {
            self.push(Event::Preview(data_url.to_string()));
        }
        fn show_placeholder(&self) {
            self.push(Event::Placeholder);
        }
        fn show_error(&self, message: &str) {
            self.push(Event::Error(message.to_string()));
        }
        fn show_result(&self, image: &GeneratedImage) {
            self.push(Event::Result(image.to_data_url()));
        }
        fn set_progress_visible(&self, visible: bool) {
            self.push(Event::Progress(visible));
        }
        fn set_submit_enabled(&self, enabled: bool) {
            self.push(Event::Submit(enabled));
        }
        fn set_prompt_enabled(&self, enabled: bool) {
            self.push(Event::Prompt(enabled));
        }
        fn set_file_input_enabled(&self, enabled: bool) {
            self.push(Event::FileInput(enabled));
        }
    }

    /// Provider returning a scripted response, optionally held until released.
    struct FakeProvider {
        response: Mutex<Option<Result<GenerationResponse>>>,
        requests: Mutex<Vec<GenerationRequest>>,
        calls: AtomicUsize,
        gate: Option<(Arc<Notify>, Arc<Notify>)>,
    }

    impl FakeProvider {
        fn returning(response: Result<GenerationResponse>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn gated(
            response: Result<GenerationResponse>,
            entered: Arc<Notify>,
            release: Arc<Notify>,
        ) -> Self {
            Self {
                gate: Some((entered, release)),
                ..Self::returning(response)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageProvider for FakeProvider {
        async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            if let Some((entered, release)) = &self.gate {
                entered.notify_one();
                release.notified().await;
            }
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(GenEditError::Unknown))
        }

        fn name(&self) -> &str {
            "fake"
        }

        fn model(&self) -> &str {
            "fake-model"
        }

        async fn health_check(&self) -> Result<()> {
            Ok(())
        }
    }

    fn image_response() -> Result<GenerationResponse> {
        Ok(GenerationResponse::from_parts(vec![
            Part::Text("desc".into()),
            Part::InlineData(EncodedImage::new("AAAA", "image/png")),
        ]))
    }

    fn selected(bytes: &[u8]) -> SelectedImage {
        SelectedImage::from_bytes("photo.png", bytes.to_vec()).with_mime_type("image/png")
    }

    fn session(provider: FakeProvider) -> EditSession<Arc<FakeProvider>, Arc<RecordingSurface>> {
        EditSession::new(Arc::new(provider), Arc::new(RecordingSurface::default()))
    }

    #[test]
    fn test_new_session_defaults() {
        let session = session(FakeProvider::returning(image_response()));

        assert_eq!(session.prompt(), DEFAULT_PROMPT);
        assert_eq!(session.submission_state(), SubmissionState::Idle);
        assert!(!session.is_busy());
        assert!(session.selected_image().is_none());

        let events = session.surface().events();
        assert!(events.contains(&Event::Placeholder));
        assert_eq!(events.last(), Some(&Event::Submit(false)));
    }

    #[tokio::test]
    async fn test_submit_without_image() {
        let session = session(FakeProvider::returning(image_response()));
        session.surface().clear();

        let outcome = session.submit().await;

        assert!(matches!(outcome.error(), Some(GenEditError::MissingImage)));
        assert_eq!(session.provider().calls(), 0);
        assert_eq!(
            session.surface().errors(),
            vec!["Please upload an image first.".to_string()]
        );
        assert_eq!(
            session.surface().count(|e| matches!(e, Event::Progress(_))),
            0
        );
        assert_eq!(session.submission_state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_submit_with_blank_prompt() {
        let session = session(FakeProvider::returning(image_response()));
        session.select_image(selected(b"pixels")).await.unwrap();
        session.set_prompt("   \n\t ");
        session.surface().clear();

        let outcome = session.submit().await;

        assert!(matches!(outcome.error(), Some(GenEditError::EmptyPrompt)));
        assert_eq!(session.provider().calls(), 0);
        assert_eq!(
            session.surface().errors(),
            vec!["Please enter a prompt.".to_string()]
        );
        assert_eq!(
            session.surface().count(|e| matches!(e, Event::Progress(_))),
            0
        );
    }

    #[tokio::test]
    async fn test_submit_success_shows_first_inline_image() {
        let session = session(FakeProvider::returning(image_response()));
        session.select_image(selected(b"pixels")).await.unwrap();
        session.set_prompt("  Make it blue  ");
        session.surface().clear();

        let outcome = session.submit().await;

        let image = outcome.image().expect("expected an image");
        assert_eq!(image.to_data_url(), "data:image/png;base64,AAAA");
        assert_eq!(
            session.surface().events(),
            vec![
                Event::Progress(true),
                Event::Submit(false),
                Event::Prompt(false),
                Event::FileInput(false),
                Event::Result("data:image/png;base64,AAAA".into()),
                Event::Progress(false),
                Event::Prompt(true),
                Event::FileInput(true),
                Event::Submit(true),
            ]
        );

        let requests = session.provider().requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.image().unwrap().data, "cGl4ZWxz");
        assert_eq!(request.image().unwrap().mime_type, "image/png");
        assert_eq!(request.prompt(), Some("Make it blue"));
        assert_eq!(session.submission_state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_submit_without_returned_image() {
        let session = session(FakeProvider::returning(Ok(GenerationResponse::from_parts(
            vec![Part::Text("no image available".into())],
        ))));
        session.select_image(selected(b"pixels")).await.unwrap();
        session.surface().clear();

        let outcome = session.submit().await;

        assert!(matches!(outcome.error(), Some(GenEditError::NoImage)));
        assert_eq!(
            session.surface().errors(),
            vec!["The model did not return an image. Please try a different prompt.".to_string()]
        );
        assert_eq!(
            session.surface().count(|e| matches!(e, Event::Result(_))),
            0
        );
    }

    #[tokio::test]
    async fn test_busy_cleared_once_on_provider_error() {
        let session = session(FakeProvider::returning(Err(GenEditError::Api {
            status: 500,
            message: "backend unavailable".into(),
        })));
        session.select_image(selected(b"pixels")).await.unwrap();
        session.surface().clear();

        let outcome = session.submit().await;

        assert!(!outcome.is_success());
        let surface = session.surface();
        assert_eq!(surface.count(|e| *e == Event::Progress(true)), 1);
        assert_eq!(surface.count(|e| *e == Event::Progress(false)), 1);
        assert_eq!(
            surface.errors(),
            vec!["API error: 500 - backend unavailable".to_string()]
        );
        assert!(!session.is_busy());
        assert_eq!(surface.events().last(), Some(&Event::Submit(true)));
    }

    #[tokio::test]
    async fn test_encoding_failure_is_presented() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(FakeProvider::returning(image_response()));
        let missing = SelectedImage::from_path(dir.path().join("vanished.png"));
        assert!(session.select_image(missing).await.is_err());
        session.surface().clear();

        let outcome = session.submit().await;

        assert!(outcome.error().unwrap().is_encoding());
        assert_eq!(session.provider().calls(), 0);
        assert_eq!(session.surface().errors().len(), 1);
        assert_eq!(session.surface().count(|e| *e == Event::Progress(false)), 1);
    }

    #[tokio::test]
    async fn test_unknown_error_uses_generic_message() {
        let session = session(FakeProvider::returning(Err(GenEditError::Unknown)));
        session.select_image(selected(b"pixels")).await.unwrap();
        session.surface().clear();

        let _ = session.submit().await;

        assert_eq!(
            session.surface().errors(),
            vec![crate::error::UNKNOWN_ERROR_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_set_busy_is_idempotent() {
        let session = session(FakeProvider::returning(image_response()));
        session.surface().clear();

        session.set_busy(true);
        session.set_busy(true);
        assert_eq!(session.surface().events().len(), 4);

        session.set_busy(false);
        session.set_busy(false);
        assert_eq!(session.surface().events().len(), 8);
    }

    #[test]
    fn test_leaving_busy_without_image_keeps_submit_disabled() {
        let session = session(FakeProvider::returning(image_response()));
        session.set_busy(true);
        session.surface().clear();

        session.set_busy(false);

        assert_eq!(
            session.surface().events(),
            vec![
                Event::Progress(false),
                Event::Prompt(true),
                Event::FileInput(true),
                Event::Submit(false),
            ]
        );
    }

    #[tokio::test]
    async fn test_select_image_shows_preview() {
        let session = session(FakeProvider::returning(image_response()));
        session.surface().clear();

        session.select_image(selected(b"pixels")).await.unwrap();

        assert_eq!(
            session.surface().events(),
            vec![
                Event::Submit(true),
                Event::Preview("data:image/png;base64,cGl4ZWxz".into()),
            ]
        );

        session.clear_selection();
        assert!(session.selected_image().is_none());
        assert_eq!(
            session.surface().events().last(),
            Some(&Event::Submit(false))
        );
    }

    #[tokio::test]
    async fn test_overlapping_submission_is_rejected() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let session = Arc::new(session(FakeProvider::gated(
            image_response(),
            entered.clone(),
            release.clone(),
        )));
        session.select_image(selected(b"original")).await.unwrap();

        let in_flight = tokio::spawn({
            let session = session.clone();
            async move { session.submit().await }
        });
        entered.notified().await;

        assert_eq!(
            session.submission_state(),
            SubmissionState::AwaitingResponse
        );
        assert!(session.is_busy());

        let errors_before = session.surface().errors().len();
        let second = session.submit().await;
        assert!(matches!(second.error(), Some(GenEditError::Busy)));
        assert_eq!(session.surface().errors().len(), errors_before);

        // A new selection does not leak into the in-flight request.
        session.select_image(selected(b"replacement")).await.unwrap();

        release.notify_one();
        let first = in_flight.await.unwrap();
        assert!(first.is_success());

        assert_eq!(session.provider().calls(), 1);
        let requests = session.provider().requests();
        assert_eq!(requests[0].image().unwrap().data, "b3JpZ2luYWw=");
        assert_eq!(session.submission_state(), SubmissionState::Idle);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_preview_failure_while_busy_keeps_result_area() {
        let dir = tempfile::tempdir().unwrap();
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let session = Arc::new(session(FakeProvider::gated(
            image_response(),
            entered.clone(),
            release.clone(),
        )));
        session.select_image(selected(b"original")).await.unwrap();

        let in_flight = tokio::spawn({
            let session = session.clone();
            async move { session.submit().await }
        });
        entered.notified().await;
        session.surface().clear();

        let missing = SelectedImage::from_path(dir.path().join("vanished.png"));
        let err = session.select_image(missing).await.unwrap_err();
        assert!(err.is_encoding());
        assert!(session.surface().errors().is_empty());

        release.notify_one();
        assert!(in_flight.await.unwrap().is_success());
        assert!(session.surface().errors().is_empty());
        assert_eq!(
            session.surface().count(|e| matches!(e, Event::Result(_))),
            1
        );
    }

    #[tokio::test]
    async fn test_dropped_submission_clears_busy_state() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let session = session(FakeProvider::gated(image_response(), entered, release.clone()));
        session.select_image(selected(b"pixels")).await.unwrap();
        session.surface().clear();

        let limit = std::time::Duration::from_millis(50);
        let timed_out = tokio::time::timeout(limit, session.submit()).await;
        assert!(timed_out.is_err());

        assert!(!session.is_busy());
        assert_eq!(session.submission_state(), SubmissionState::Idle);
        assert_eq!(session.provider().calls(), 1);
        assert_eq!(session.surface().count(|e| *e == Event::Progress(true)), 1);
        assert_eq!(session.surface().count(|e| *e == Event::Progress(false)), 1);
        assert_eq!(
            session.surface().events().last(),
            Some(&Event::Submit(true))
        );
        assert!(session.surface().errors().is_empty());

        release.notify_one();
        assert!(session.submit().await.is_success());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let first = session(FakeProvider::returning(image_response()));
        let second = session(FakeProvider::returning(image_response()));

        first.select_image(selected(b"pixels")).await.unwrap();
        first.set_prompt("first");

        assert!(second.selected_image().is_none());
        assert_eq!(second.prompt(), DEFAULT_PROMPT);
    }
}
