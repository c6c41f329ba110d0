use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    clients::{database::DatabaseClient, fcm::FcmClient},
    config::Config,
    models::{
        request::{SendRequest, normalize_body},
        response::{
            DeliveredResponse, DispatchOutcome, ServerErrorResponse, StatusResponse,
            ValidationErrorResponse,
        },
    },
    utils::process_notification,
};

pub struct AppState {
    database_client: DatabaseClient,
    fcm_client: FcmClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            database_client: DatabaseClient::new(config)?,
            fcm_client: FcmClient::new(config)?,
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/send", post(send_notification))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(&config)?);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Push gateway server started");

    axum::serve(listener, app).await?;

    Ok(())
}

/// POST /api/send. The body is taken as raw bytes and normalized before
/// validation, so object bodies, string-wrapped JSON and garbage all take the
/// same path through the handler.
async fn send_notification(State(state): State<Arc<AppState>>, raw_body: Bytes) -> Response {
    let body = normalize_body(&raw_body);

    let Some(request) = SendRequest::parse(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse {
                error: "Missing data in request body",
                received: body,
            }),
        )
            .into_response();
    };

    info!(
        sender_id = %request.sender_id,
        receiver_id = %request.receiver_id,
        notification_type = %request.notification_type,
        "Processing send request"
    );

    match process_notification(&request, &state.database_client, &state.fcm_client).await {
        Ok(DispatchOutcome::ReceiverNotFound) => {
            status_response("User not found").into_response()
        }
        Ok(DispatchOutcome::NoToken) => status_response("No token").into_response(),
        Ok(DispatchOutcome::SkippedOnline) => {
            status_response("User is online, push skipped").into_response()
        }
        Ok(DispatchOutcome::Delivered { message_id }) => (
            StatusCode::OK,
            Json(DeliveredResponse {
                success: true,
                id: message_id,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn status_response(status: &'static str) -> (StatusCode, Json<StatusResponse>) {
    (StatusCode::OK, Json(StatusResponse { status }))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
