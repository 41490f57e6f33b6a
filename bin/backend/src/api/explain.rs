use crate::api::{errors::Error, state::AppState};
use crate::model::{SetInputRequest, SetInputTypeRequest, SetModeRequest};
use axum::{
    Router,
    extract::{Json, State},
    routing::{get, post},
};
use simplr_core::controller::{RejectReason, SubmitOutcome};
use simplr_core::model::{Mode, Request};
use simplr_core::modes;
use tracing::instrument;

pub fn routes() -> Router<AppState> {
    Router::new()
        // mode picker
        .route("/modes", get(list_modes_handler))
        // request lifecycle
        .route("/request", get(request_handler))
        .route("/input", post(set_input_handler))
        .route("/input-type", post(set_input_type_handler))
        .route("/mode", post(set_mode_handler))
        .route("/submit", post(submit_handler))
}

/// Mode catalog in picker order.
async fn list_modes_handler() -> Json<&'static [Mode]> {
    Json(modes::list_modes())
}

/// Current request snapshot, for rendering.
#[instrument(skip(state))]
async fn request_handler(State(state): State<AppState>) -> Json<Request> {
    Json(state.controller.snapshot().await)
}

#[instrument(skip(state, req))]
async fn set_input_handler(
    State(state): State<AppState>,
    Json(req): Json<SetInputRequest>,
) -> Json<Request> {
    Json(state.controller.set_input(req.text).await)
}

#[instrument(skip(state, req))]
async fn set_input_type_handler(
    State(state): State<AppState>,
    Json(req): Json<SetInputTypeRequest>,
) -> Json<Request> {
    Json(state.controller.set_input_type(req.input_type).await)
}

#[instrument(skip(state, req))]
async fn set_mode_handler(
    State(state): State<AppState>,
    Json(req): Json<SetModeRequest>,
) -> Json<Request> {
    Json(state.controller.set_mode(req.mode).await)
}

/// Run one explanation request to completion.
///
/// Engine failures are part of the lifecycle and come back as a `failed`
/// snapshot with 200; only the controller's rejections map to error codes.
#[instrument(skip(state))]
async fn submit_handler(State(state): State<AppState>) -> Result<Json<Request>, Error> {
    match state.controller.submit().await {
        SubmitOutcome::Completed(snapshot) => Ok(Json(snapshot)),
        SubmitOutcome::Rejected(RejectReason::InFlight) => Err(Error::InFlight),
        SubmitOutcome::Rejected(RejectReason::EmptyInput) => {
            Err(Error::InvalidInput("input is empty".to_string()))
        }
    }
}
