use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use profile_cut_planner::config::AppConfig;
use profile_cut_planner::input::{parse_lengths, validate_capacity};
use profile_cut_planner::profiles;
use profile_cut_planner::report::{PlanDocument, ProfileGroups, build_plan, timestamp_now};
use profile_cut_planner::types::{Item, ProjectInfo};
use profile_cut_planner::wizard::WallEntry;
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct PlanRequest {
    #[serde(default)]
    project: ProjectInfo,
    capacity: Option<i64>,
    walls: Vec<WallEntry>,
}

#[derive(Serialize)]
struct ProfileResponse {
    code: &'static str,
    name: &'static str,
}

type ApiError = (StatusCode, String);

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, message)
}

fn group_walls(walls: &[WallEntry], capacity: u32) -> Result<ProfileGroups, String> {
    let mut groups = ProfileGroups::new();
    for wall in walls {
        for (i, row) in wall.rows.iter().enumerate() {
            let Some(profile) = &row.profile else {
                continue;
            };
            if row.lengths.trim().is_empty() {
                continue;
            }
            let Some(profile) = profiles::resolve(profile) else {
                return Err(format!(
                    "{}, profile {}: unknown profile '{}'",
                    wall.name,
                    i + 1,
                    profile
                ));
            };
            let lengths = parse_lengths(&row.lengths, capacity)
                .map_err(|e| format!("{}, profile {}: {}", wall.name, i + 1, e))?;
            groups.extend(
                profile,
                lengths.into_iter().map(|l| Item::new(l, &wall.name)),
            );
        }
    }
    Ok(groups)
}

async fn plan(
    State(config): State<Arc<AppConfig>>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanDocument>, ApiError> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /plan"
    );

    let capacity = match req.capacity {
        Some(value) => validate_capacity(value).map_err(|e| bad_request(e.to_string()))?,
        None => config.default_capacity,
    };

    let groups = group_walls(&req.walls, capacity).map_err(bad_request)?;
    if groups.is_empty() {
        return Err(bad_request(
            "no profile data found, select at least one profile and enter its lengths".to_string(),
        ));
    }

    let plan = build_plan(&groups, capacity).map_err(|e| {
        tracing::error!(error = %e, "packing rejected validated input");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(PlanDocument::new(req.project, timestamp_now(), plan)))
}

async fn list_profiles() -> Json<Vec<ProfileResponse>> {
    Json(
        profiles::PROFILES
            .iter()
            .map(|&(code, name)| ProfileResponse { code, name })
            .collect(),
    )
}

fn app(config: AppConfig) -> Router {
    Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/profiles", get(list_profiles))
        .route("/plan", post(plan))
        .with_state(Arc::new(config))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to open {}: {}", config.log_file, e);
            std::process::exit(1);
        });

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });
    eprintln!("Listening on {addr}");
    if let Err(e) = axum::serve(listener, app(config)).await {
        eprintln!("Error: server stopped: {}", e);
        std::process::exit(1);
    }
}
