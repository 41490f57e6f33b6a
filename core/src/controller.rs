use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

use crate::classifier;
use crate::engine::ExplanationEngine;
use crate::model::{InputType, ModeId, Request, RequestStatus};

/// Why a `submit` was refused without touching the request record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A request is already in flight; at most one generation runs at a
    /// time per controller instance.
    InFlight,
    /// Trimmed input was empty; the engine is never consulted.
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request ran to completion; the snapshot is the final record,
    /// either `succeeded` with a result or `failed` with an error kind.
    Completed(Request),
    Rejected(RejectReason),
}

/// Orchestrates one explanation request end-to-end and is the sole mutator
/// of the request record.
///
/// Cloning is cheap and shares the same record, so the presentation layer
/// can hold as many handles as it likes while single-instance-per-session
/// semantics are preserved.
#[derive(Clone)]
pub struct RequestController {
    engine: Arc<dyn ExplanationEngine>,
    state: Arc<Mutex<Request>>,
}

impl RequestController {
    pub fn new(engine: Arc<dyn ExplanationEngine>) -> Self {
        Self {
            engine,
            state: Arc::new(Mutex::new(Request::default())),
        }
    }

    /// Current state of the live request, for rendering.
    pub async fn snapshot(&self) -> Request {
        self.state.lock().await.clone()
    }

    pub async fn set_input(&self, text: impl Into<String>) -> Request {
        let mut req = self.state.lock().await;
        req.raw_input = text.into();
        invalidate_output(&mut req);
        req.clone()
    }

    pub async fn set_input_type(&self, input_type: InputType) -> Request {
        let mut req = self.state.lock().await;
        req.input_type = input_type;
        invalidate_output(&mut req);
        req.clone()
    }

    pub async fn set_mode(&self, mode: ModeId) -> Request {
        let mut req = self.state.lock().await;
        req.selected_mode = mode;
        invalidate_output(&mut req);
        req.clone()
    }

    /// Run one explanation request to completion.
    ///
    /// Rejections are no-ops: the record is left exactly as it was. The
    /// input and mode are snapshotted under the lock before the engine
    /// runs, so edits made while the request is pending never leak into it.
    pub async fn submit(&self) -> SubmitOutcome {
        let (raw_input, input_type, mode) = {
            let mut req = self.state.lock().await;
            if req.status == RequestStatus::Pending {
                info!("submit rejected: a request is already in flight");
                return SubmitOutcome::Rejected(RejectReason::InFlight);
            }
            if req.raw_input.trim().is_empty() {
                info!("submit rejected: input is empty");
                return SubmitOutcome::Rejected(RejectReason::EmptyInput);
            }
            req.status = RequestStatus::Pending;
            req.result = None;
            req.error = None;
            (
                req.raw_input.clone(),
                classifier::classify(&req.raw_input),
                req.selected_mode,
            )
        };

        info!(mode = mode.as_str(), ?input_type, "explanation request started");

        // Lock released across the only suspension point in the pipeline.
        let outcome = self.engine.explain(&raw_input, input_type, mode).await;

        let mut req = self.state.lock().await;
        match outcome {
            Ok(text) => {
                req.status = RequestStatus::Succeeded;
                req.result = Some(text);
                req.error = None;
            }
            Err(e) => {
                error!(error = %e, "explanation engine failed");
                req.status = RequestStatus::Failed;
                req.result = None;
                req.error = Some(e.kind());
            }
        }
        SubmitOutcome::Completed(req.clone())
    }
}

/// New edits invalidate stale output. While a request is pending the edit
/// still lands, but the pending status (and the in-flight snapshot) stays.
fn invalidate_output(req: &mut Request) {
    req.result = None;
    req.error = None;
    if req.status != RequestStatus::Pending {
        req.status = RequestStatus::Idle;
    }
}
