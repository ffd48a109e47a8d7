use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    routing::get,
    Router,
};
use cascade::{
    compose, last_path_segment, reconstruct, render_all, ComboAction, ComboRequest, Interaction,
};
use clap::Parser;
use serde::Deserialize;
use shared::domain::{EntityId, OwnerId, ShowUsers};
use tokio::signal;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{debug, info};

mod app_state;
mod config;
mod fault;
mod render;

use app_state::AppState;
use config::{load_settings, DEFAULT_SETTINGS_FILE};
use fault::ServerFault;
use render::AskamaRenderer;

#[derive(Parser, Debug)]
#[command(about = "Serves the service browser and its partial updates")]
struct Cli {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[arg(long)]
    bind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ShowUsersQuery {
    #[serde(rename = "showUsers", default)]
    show_users: String,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceQuery {
    #[serde(default)]
    service: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct ComboQuery {
    name: String,
    active_item: String,
    search: String,
}

impl ComboQuery {
    fn into_request(self, action: ComboAction) -> ComboRequest {
        ComboRequest {
            action,
            name: self.name,
            active_item: self.active_item,
            search: self.search,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config);
    if let Some(bind) = cli.bind {
        settings.server_bind = bind;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let state = AppState {
        catalog: settings.catalog(),
        renderer: Arc::new(AskamaRenderer::new(settings.htmx_src.clone())),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, config = %cli.config.display(), "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

/// Handlers read their path parameter with `last_path_segment`, so a
/// segment that is not valid UTF-8 still gets a response.
fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/services/:service_type", get(update_services))
        .route("/serviceList/:service_type", get(update_services))
        .route("/details/:service", get(update_details))
        .route("/showUsers/:state", get(show_users))
        .route("/admins/:owner", get(update_admins))
        .route("/showMenu", get(show_menu))
        .route("/hideMenu", get(hide_menu))
        .route("/setCombo/:selected", get(set_combo))
        .route("/resetCombo", get(reset_combo))
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Reconstructs, composes and renders one interaction. Every fragment is
/// rendered before the body is handed to axum.
fn respond(state: &AppState, interaction: Interaction) -> Result<Html<String>, ServerFault> {
    let kind = interaction.kind();
    let plan = reconstruct(&state.catalog, interaction);
    let fragments = compose(&plan);
    let body = render_all(state.renderer.as_ref(), &fragments)?;
    debug!(
        interaction = kind.as_str(),
        fragments = fragments.len(),
        bytes = body.len(),
        "composed response"
    );
    Ok(Html(body))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerFault> {
    respond(&state, Interaction::InitialLoad)
}

async fn update_services(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(q): Query<ShowUsersQuery>,
) -> Result<Html<String>, ServerFault> {
    let service_type = last_path_segment(uri.path());
    let request_uri = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    debug!(%service_type, "category change");
    respond(
        &state,
        Interaction::CategoryChange {
            service_type,
            show_users: ShowUsers::parse(&q.show_users),
            request_uri,
        },
    )
}

async fn update_details(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(q): Query<ShowUsersQuery>,
) -> Result<Html<String>, ServerFault> {
    let service = last_path_segment(uri.path());
    debug!(%service, "entity selection");
    respond(
        &state,
        Interaction::EntitySelection {
            entity: EntityId(service),
            show_users: ShowUsers::parse(&q.show_users),
        },
    )
}

async fn show_users(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(q): Query<ServiceQuery>,
) -> Result<Html<String>, ServerFault> {
    let toggle = last_path_segment(uri.path());
    debug!(service = %q.service, state = %toggle, "visibility toggle");
    respond(
        &state,
        Interaction::VisibilityToggle {
            state: ShowUsers::parse(&toggle),
            entity: EntityId(q.service),
        },
    )
}

async fn update_admins(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, ServerFault> {
    let owner = last_path_segment(uri.path());
    debug!(%owner, "admin expansion");
    respond(
        &state,
        Interaction::AdminExpansion {
            owner: OwnerId(owner),
        },
    )
}

async fn show_menu(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ComboQuery>,
) -> Result<Html<String>, ServerFault> {
    respond(
        &state,
        Interaction::Combo(q.into_request(ComboAction::ShowMenu)),
    )
}

async fn hide_menu(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ComboQuery>,
) -> Result<Html<String>, ServerFault> {
    respond(
        &state,
        Interaction::Combo(q.into_request(ComboAction::HideMenu)),
    )
}

async fn set_combo(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(q): Query<ComboQuery>,
) -> Result<Html<String>, ServerFault> {
    let selected = last_path_segment(uri.path());
    respond(
        &state,
        Interaction::Combo(q.into_request(ComboAction::Set { selected })),
    )
}

async fn reset_combo(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ComboQuery>,
) -> Result<Html<String>, ServerFault> {
    respond(&state, Interaction::Combo(q.into_request(ComboAction::Reset)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
