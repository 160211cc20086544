// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP surface of the badge service.
//!
//! * `GET /` reports liveness.
//! * `GET /badge/{agent}?secondary={github_username}` renders a badge.
//!
//! Primary lookup failures become `404`/`500` responses with a JSON `detail`
//! field through [`FetchError`]'s `IntoResponse` implementation.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    config::ServiceConfig,
    error::{self, Error, FetchError},
    github::GitHubClient,
    moltbook::MoltbookClient,
    orchestrator::{BadgeResponse, BadgeService},
};

const WELCOME_MESSAGE: &str =
    "Welcome to BotCred. Call /badge/{agent}?secondary={github_username} to get your stats.";

/// Query string accepted by the badge route.
#[derive(Debug, Default, Deserialize,)]
pub struct BadgeQuery
{
    /// Optional GitHub username used to enrich the badge.
    #[serde(default)]
    pub secondary: Option<String,>,
}

/// Builds the upstream clients described by `config`.
///
/// # Errors
///
/// Returns [`Error::Client`](Error::Client) when either client cannot be
/// constructed.
pub fn badge_service(config: &ServiceConfig,) -> Result<BadgeService, Error,>
{
    let github = GitHubClient::new(&config.github_api_url,)?;
    let moltbook = MoltbookClient::new(config.moltbook_api_url.as_str(), config.moltbook_api_key.as_str(),)?;
    Ok(BadgeService::new(github, moltbook,),)
}

/// Builds the application router around `service`.
pub fn router(service: BadgeService,) -> Router
{
    Router::new()
        .route("/", get(handle_root,),)
        .route("/badge/{agent}", get(handle_badge,),)
        .with_state(service,)
}

async fn handle_root() -> Json<Value,>
{
    Json(json!({
        "status": "online",
        "message": WELCOME_MESSAGE,
    }),)
}

async fn handle_badge(
    State(service,): State<BadgeService,>,
    Path(agent,): Path<String,>,
    Query(query,): Query<BadgeQuery,>,
) -> Result<Json<BadgeResponse,>, FetchError,>
{
    match service.build(&agent, query.secondary.as_deref(),).await {
        Ok(response,) => Ok(Json(response,),),
        Err(error,) => {
            warn!("Badge request for agent {} failed: {}", agent, error);
            Err(error,)
        }
    }
}

/// Binds the listener from `config` and serves until Ctrl+C or SIGTERM.
///
/// In-flight requests complete before the function returns.
///
/// # Errors
///
/// Returns [`Error::Client`](Error::Client) when the upstream clients cannot
/// be built and [`Error::Io`](Error::Io) when binding or serving fails.
pub async fn serve(config: ServiceConfig,) -> Result<(), Error,>
{
    let app = router(badge_service(&config,)?,);
    let listener =
        TcpListener::bind(config.bind,).await.map_err(|source| error::io_error(config.bind, source,),)?;

    info!(
        "BotCred listening on {} (moltbook={}, github={})",
        config.bind, config.moltbook_api_url, config.github_api_url
    );

    axum::serve(listener, app,)
        .with_graceful_shutdown(shutdown_signal(),)
        .await
        .map_err(|source| error::io_error(config.bind, source,),)?;

    info!("BotCred stopped");
    Ok((),)
}

async fn shutdown_signal()
{
    let ctrl_c = async {
        if let Err(error,) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", error);
            std::future::pending::<(),>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate(),) {
            Ok(mut sigterm,) => {
                sigterm.recv().await;
            }
            Err(error,) => {
                warn!("failed to listen for SIGTERM: {}", error);
                std::future::pending::<(),>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<(),>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
