use axum::{
	Json, Router,
	extract::{State, rejection::JsonRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;

use angle_service::{
	Action, Error as ServiceError, GenerateAnglesRequest, GenerateAnglesResponse,
	GenerateScriptRequest, GenerateVariationRequest, ScriptResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/angles", post(generate_angles))
		.route("/api/generate", post(generate_script))
		.route("/api/variation", post(generate_variation))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn generate_angles(
	State(state): State<AppState>,
	payload: Result<Json<GenerateAnglesRequest>, JsonRejection>,
) -> Result<Json<GenerateAnglesResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.generate_angles(payload).await?;
	Ok(Json(response))
}

async fn generate_script(
	State(state): State<AppState>,
	payload: Result<Json<GenerateScriptRequest>, JsonRejection>,
) -> Result<Json<ScriptResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.generate_script(payload).await?;
	Ok(Json(response))
}

async fn generate_variation(
	State(state): State<AppState>,
	payload: Result<Json<GenerateVariationRequest>, JsonRejection>,
) -> Result<Json<ScriptResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.generate_variation(payload).await?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	details: Option<Value>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error: String,
	details: Option<Value>,
}
impl ApiError {
	fn new(status: StatusCode, error: impl Into<String>, details: Option<Value>) -> Self {
		Self { status, error: error.into(), details }
	}
}
impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		ApiError::new(
			StatusCode::BAD_REQUEST,
			"Invalid request body",
			Some(Value::String(rejection.body_text())),
		)
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::MissingField { message, .. } =>
				ApiError::new(StatusCode::BAD_REQUEST, message, None),
			ServiceError::MissingApiKey =>
				ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), None),
			ServiceError::Upstream { action, status, body, .. } => ApiError::new(
				StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
				upstream_message(action),
				Some(Value::String(body)),
			),
			ServiceError::Parse { raw, .. } => ApiError::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"Failed to parse angles response",
				Some(Value::String(raw)),
			),
			ServiceError::Provider { message, .. } => ApiError::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"Internal server error",
				Some(Value::String(message)),
			),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.error, details: self.details };
		(self.status, Json(body)).into_response()
	}
}

fn upstream_message(action: Action) -> &'static str {
	match action {
		Action::Angles => "Failed to analyze angles",
		Action::Script => "Failed to generate script",
		Action::Variation => "Failed to generate variation",
	}
}
