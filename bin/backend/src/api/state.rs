use axum::extract::FromRef;
use simplr_core::RequestController;

/// One controller per process: single-session semantics, matching the
/// single-page frontend this serves.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub controller: RequestController,
}

impl AppState {
    pub fn new(controller: RequestController) -> Self {
        Self { controller }
    }
}
