use crate::{
    api,
    opts::{EngineOpts, HttpOpts},
};

use simplr_core::RequestController;
use tokio::net::TcpListener;

pub async fn run(http_opts: HttpOpts, engine_opts: EngineOpts) -> anyhow::Result<()> {
    let controller = RequestController::new(engine_opts.build_engine());
    start_http(controller, http_opts).await
}

pub async fn start_http(
    controller: RequestController,
    http_opts: HttpOpts,
) -> anyhow::Result<()> {
    let app_state = api::state::AppState::new(controller);

    tracing::info!("http listening on {}", http_opts.host);
    let app = api::build_app(&http_opts, app_state)?;
    let listener = TcpListener::bind(&http_opts.host).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("ctrl_c handler installs. qed");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("signal handler installs. qed")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
