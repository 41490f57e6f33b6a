pub mod errors;
pub mod explain;
pub mod state;

use crate::opts::HttpOpts;

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, Request, StatusCode, header},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_app(opts: &HttpOpts, state: state::AppState) -> anyhow::Result<Router> {
    let mut allowed_origins = Vec::with_capacity(opts.origins.len());
    for origin in &opts.origins {
        allowed_origins.push(origin.parse::<HeaderValue>()?);
    }

    Ok(Router::new()
        .route("/healthz", get(|| async { StatusCode::OK }))
        .merge(explain::routes())
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
                .max_age(Duration::from_secs(3600)),
        )
        .layer(tower::ServiceBuilder::new().layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        ))
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use simplr_core::{RequestController, TemplateEngine};
    use tower::ServiceExt;

    fn test_app_with(controller: RequestController) -> Router {
        let opts = HttpOpts {
            host: "127.0.0.1:0".to_string(),
            origins: vec!["http://localhost:3000".to_string()],
        };
        build_app(&opts, state::AppState::new(controller)).unwrap()
    }

    fn test_app() -> Router {
        test_app_with(RequestController::new(Arc::new(TemplateEngine::with_delay(
            Duration::ZERO,
        ))))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = test_app().oneshot(get("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_modes_lists_the_three_modes_in_order() {
        let response = test_app().oneshot(get("/modes")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["simple", "detailed", "eli5"]);
    }

    #[tokio::test]
    async fn test_submit_without_input_is_unprocessable() {
        let app = test_app();

        let response = app.clone().oneshot(post_empty("/submit")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // The record is untouched by the rejection.
        let snapshot = body_json(app.oneshot(get("/request")).await.unwrap()).await;
        assert_eq!(snapshot["status"], "idle");
    }

    #[tokio::test]
    async fn test_submit_text_input_succeeds() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_json("/input", json!({ "text": "Quantum entanglement" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(post_json("/mode", json!({ "mode": "eli5" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(post_empty("/submit")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let snapshot = body_json(response).await;
        assert_eq!(snapshot["status"], "succeeded");
        assert!(snapshot["result"].as_str().unwrap().contains("this thing"));
        assert!(snapshot["error"].is_null());
    }

    #[tokio::test]
    async fn test_submit_url_input_gets_url_phrasing() {
        let app = test_app();

        app.clone()
            .oneshot(post_json(
                "/input",
                json!({ "text": "https://example.com/article" }),
            ))
            .await
            .unwrap();

        let snapshot = body_json(app.oneshot(post_empty("/submit")).await.unwrap()).await;
        assert_eq!(snapshot["status"], "succeeded");
        assert!(
            snapshot["result"]
                .as_str()
                .unwrap()
                .contains("This webpage discusses")
        );
    }

    #[tokio::test]
    async fn test_overlapping_submit_is_a_conflict() {
        let app = test_app_with(RequestController::new(Arc::new(
            TemplateEngine::with_delay(Duration::from_millis(200)),
        )));

        app.clone()
            .oneshot(post_json("/input", json!({ "text": "gravity" })))
            .await
            .unwrap();

        let first = {
            let app = app.clone();
            tokio::spawn(async move { app.oneshot(post_empty("/submit")).await.unwrap() })
        };

        // Let the first submit claim the pending slot.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let second = app.clone().oneshot(post_empty("/submit")).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let first = first.await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let snapshot = body_json(first).await;
        assert_eq!(snapshot["status"], "succeeded");
    }

    #[tokio::test]
    async fn test_unknown_mode_is_rejected_at_the_boundary() {
        let response = test_app()
            .oneshot(post_json("/mode", json!({ "mode": "sarcastic" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_input_type_toggle_round_trips() {
        let app = test_app();
        let snapshot = body_json(
            app.oneshot(post_json("/input-type", json!({ "input_type": "url" })))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(snapshot["input_type"], "url");
        assert_eq!(snapshot["status"], "idle");
    }
}
