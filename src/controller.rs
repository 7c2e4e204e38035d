//! Upload lifecycle state machine
//!
//! The controller owns the selected file and the single-flight busy
//! flag, and expresses everything it wants done to the page as
//! [`UiEffect`] values. It never touches a DOM, so the whole lifecycle
//! is testable natively.
//!
//! States: `Empty` (no file), `Ready` (file held, idle) and
//! `Submitting` (exactly one request outstanding). Every submission
//! ends back in `Ready` through [`UploadController::finish_submit`],
//! whatever the outcome; the held file survives so the user can retry.

use crate::model::AnalysisResult;
use crate::render::{self, RenderPass};

/// Fixed address of the analysis service.
pub const ANALYZE_ENDPOINT: &str = "http://127.0.0.1:5000/api/analyze";

/// Multipart field name the service expects the file under.
pub const UPLOAD_FIELD: &str = "file";

pub const INVALID_FILE_MSG: &str = "Please select a valid CSV file.";
pub const GENERIC_FAILURE_MSG: &str = "Something went wrong. Please try again.";
pub const UNREACHABLE_MSG: &str =
    "Could not connect to the backend server. Make sure it is running on port 5000.";

/// Where the controller currently sits in the upload lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Ready,
    Submitting,
}

/// A user-chosen file: display name plus an opaque handle the DOM
/// adapter needs to build the request body (`web_sys::File` in the
/// browser, anything in tests).
#[derive(Debug, Clone)]
pub struct Selected<F> {
    pub name: String,
    pub handle: F,
}

/// Instructions for the thin DOM adapter. The controller and renderer
/// only ever describe the page; applying these is the adapter's job.
#[derive(Debug, PartialEq)]
pub enum UiEffect {
    /// Reveal the file-info chip with this name and hide the drop zone.
    ShowFileInfo(String),
    /// Hide the file-info chip and restore the drop zone.
    ClearFileInfo,
    SetSubmitEnabled(bool),
    /// Swap the submit label for the loading indicator (or back).
    SetLoading(bool),
    ShowError(String),
    HideError,
    HideResults,
    /// Inject the fragments, reveal the results region, scroll to it.
    ShowResults(Box<RenderPass>),
}

/// Parameters for the one outbound request of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: &'static str,
    pub field: &'static str,
}

/// Terminal outcome of one submission. Exactly one of these is fed to
/// [`UploadController::finish_submit`] per request.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// HTTP ok and the body decoded as a full [`AnalysisResult`].
    Success(Box<AnalysisResult>),
    /// Non-ok status; `message` is the body's `error` field if present.
    Rejected { message: Option<String> },
    /// No usable response at all: network failure, or an ok status
    /// whose body did not decode.
    Unreachable,
}

/// Owns the selection state for one upload form.
#[derive(Debug)]
pub struct UploadController<F> {
    file: Option<Selected<F>>,
    busy: bool,
}

impl<F> Default for UploadController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> UploadController<F> {
    pub fn new() -> Self {
        UploadController { file: None, busy: false }
    }

    pub fn phase(&self) -> Phase {
        if self.busy {
            Phase::Submitting
        } else if self.file.is_some() {
            Phase::Ready
        } else {
            Phase::Empty
        }
    }

    pub fn selected(&self) -> Option<&Selected<F>> {
        self.file.as_ref()
    }

    /// Validate and hold a candidate file from the picker or a drop.
    ///
    /// Only the name is inspected: anything not ending in `.csv`
    /// (case-insensitive) is rejected with an error banner and the
    /// current state is left untouched. Content validation is the
    /// service's job.
    pub fn select_file(&mut self, name: &str, handle: F) -> Vec<UiEffect> {
        if !name.to_lowercase().ends_with(".csv") {
            return vec![UiEffect::ShowError(INVALID_FILE_MSG.to_string())];
        }

        self.file = Some(Selected { name: name.to_string(), handle });
        vec![
            UiEffect::ShowFileInfo(name.to_string()),
            UiEffect::SetSubmitEnabled(true),
            UiEffect::HideError,
        ]
    }

    /// Explicit "remove file" action. The only way the held file is
    /// ever dropped.
    pub fn clear_file(&mut self) -> Vec<UiEffect> {
        self.file = None;
        vec![UiEffect::ClearFileInfo, UiEffect::SetSubmitEnabled(false)]
    }

    /// Enter `Submitting` if legal. Returns `None` (and changes
    /// nothing) when no file is held or a request is already in
    /// flight; the adapter simply does not issue a request then.
    pub fn begin_submit(&mut self) -> Option<(SubmitRequest, Vec<UiEffect>)> {
        if self.busy || self.file.is_none() {
            return None;
        }

        self.busy = true;
        let request = SubmitRequest { endpoint: ANALYZE_ENDPOINT, field: UPLOAD_FIELD };
        let effects = vec![
            UiEffect::SetSubmitEnabled(false),
            UiEffect::SetLoading(true),
            UiEffect::HideError,
            UiEffect::HideResults,
        ];
        Some((request, effects))
    }

    /// Single completion path for all three outcome classes. Busy
    /// indicators always clear and the held file is preserved; only
    /// the surfaced message (or render pass) differs.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Vec<UiEffect> {
        self.busy = false;

        let mut effects = vec![
            UiEffect::SetLoading(false),
            UiEffect::SetSubmitEnabled(self.file.is_some()),
        ];

        match outcome {
            SubmitOutcome::Success(result) => {
                effects.push(UiEffect::ShowResults(Box::new(render::render(&result))));
            }
            SubmitOutcome::Rejected { message } => {
                let message = message.unwrap_or_else(|| GENERIC_FAILURE_MSG.to_string());
                effects.push(UiEffect::ShowError(message));
            }
            SubmitOutcome::Unreachable => {
                effects.push(UiEffect::ShowError(UNREACHABLE_MSG.to_string()));
            }
        }

        effects
    }
}
