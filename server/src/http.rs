use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{self, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
};
use entity::employees;
use platform_api::{ApiError, ApiResult};
use platform_db::{self, DbPool, NewEmployee};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<DbPool>,
    pub config: Arc<AppConfig>,
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, "ems server listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(allow_origin)
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config.cors_allowed_origins)),
        )
        .with_state(state)
}

/// Employee fields accepted in request bodies. An `id` in the body is
/// ignored; identity comes from the path on update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeePayload {
    first_name: String,
    last_name: String,
    email: String,
}

impl From<EmployeePayload> for NewEmployee {
    fn from(value: EmployeePayload) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeResponse {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<employees::Model> for EmployeeResponse {
    fn from(value: employees::Model) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)> {
    let saved = platform_db::save_employee(state.pool.as_ref(), payload.into())
        .await
        .map_err(|err| ApiError::internal(err.into()))?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let listed = platform_db::all_employees(state.pool.as_ref())
        .await
        .map_err(|err| ApiError::internal(err.into()))?;
    Ok(Json(listed.into_iter().map(Into::into).collect()))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = platform_db::find_employee(state.pool.as_ref(), id)
        .await
        .map_err(|err| ApiError::internal(err.into()))?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(employee.into()))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<Json<EmployeeResponse>> {
    let Some(existing) = platform_db::find_employee(state.pool.as_ref(), id)
        .await
        .map_err(|err| ApiError::internal(err.into()))?
    else {
        return Err(ApiError::NotFound);
    };
    let updated = platform_db::update_employee(
        state.pool.as_ref(),
        employees::Model {
            id: existing.id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        },
    )
    .await
    .map_err(|err| ApiError::internal(err.into()))?;
    Ok(Json(updated.into()))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    platform_db::delete_employee(state.pool.as_ref(), id)
        .await
        .map_err(|err| ApiError::internal(err.into()))?;
    Ok(StatusCode::OK)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = state.pool.ping().await.is_ok();
    Json(HealthResponse {
        ok: db_ok,
        db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    db_ok: bool,
    version: &'static str,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}
