use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::routes::{dispatch, AppState, HttpBody};
use crate::store::FeedbackStore;
use http_body_util::{BodyExt, Limited};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use bytes::Bytes;
use hyper::{Method, Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use survey_metrics::SurveyMetrics;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

async fn handle_request(
    state: AppState,
    max_body_bytes: usize,
    req: Request<hyper::body::Incoming>,
) -> Result<Response<HttpBody>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let body = match Limited::new(req.into_body(), max_body_bytes).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            let err = if e.is::<http_body_util::LengthLimitError>() {
                ApiError::PayloadTooLarge
            } else {
                ApiError::MalformedPayload(format!("unreadable body: {e}"))
            };
            return Ok(err.into_response());
        }
    };

    Ok(respond(state, method, path, body).await)
}

/// Runs `dispatch` on the blocking pool. Inserts append to the data file
/// while holding the table lock.
pub async fn respond(state: AppState, method: Method, path: String, body: Bytes) -> Response<HttpBody> {
    let joined =
        tokio::task::spawn_blocking(move || dispatch(&state, &method, &path, &body)).await;
    match joined {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "request handler panicked");
            ApiError::Internal("request handler failed".into()).into_response()
        }
    }
}

pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let store = FeedbackStore::open(&config.data_file)?;
    let state = AppState::new(store, SurveyMetrics::new()?);

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, data_file = %config.data_file.display(), "survey-service listening");

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!(error = %e, "accept failed");
                        continue;
                    }
                };
                let state = state.clone();
                let max_body_bytes = config.max_body_bytes;
                tokio::spawn(async move {
                    let service = service_fn(move |req| handle_request(state.clone(), max_body_bytes, req));
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        warn!(%peer, error = %e, "connection error");
                    }
                });
            }
            _ = &mut shutdown => break,
        }
    }

    info!("survey-service shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("received terminate signal");
            }
            Err(e) => {
                warn!(error = %e, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
