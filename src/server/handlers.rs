use super::types::{
    ErrorResponse, GENERATE_NAME_ERROR, GenerateNameResponse, INTERPRET_BEHAVIOR_ERROR,
    InterpretBehaviorRequest, InterpretBehaviorResponse, MISSING_BEHAVIOR_ERROR,
};
use crate::companion::Companion;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub companion: Arc<Companion>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn generate_name(
    State(state): State<AppState>,
) -> Result<Json<GenerateNameResponse>, ApiError> {
    info!("Received generate-name request");

    match state.companion.generate_name().await {
        Ok(result) => Ok(Json(result.into())),
        Err(e) => {
            error!("Failed to generate name: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATE_NAME_ERROR,
            ))
        }
    }
}

pub async fn interpret_behavior(
    State(state): State<AppState>,
    payload: Result<Json<InterpretBehaviorRequest>, JsonRejection>,
) -> Result<Json<InterpretBehaviorResponse>, ApiError> {
    let behavior = match payload {
        Ok(Json(request)) => request.behavior.unwrap_or_default(),
        Err(rejection) => {
            warn!("Rejected interpret-behavior body: {}", rejection);
            String::new()
        }
    };

    info!("Received interpret-behavior request for: {}", behavior);

    match state.companion.interpret_behavior(&behavior).await {
        Ok(interpretation) => Ok(Json(InterpretBehaviorResponse { interpretation })),
        Err(e) if e.is_validation() => {
            warn!("Invalid interpret-behavior request: {}", e);
            Err(api_error(StatusCode::BAD_REQUEST, MISSING_BEHAVIOR_ERROR))
        }
        Err(e) => {
            error!("Failed to interpret behavior '{}': {}", behavior, e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERPRET_BEHAVIOR_ERROR,
            ))
        }
    }
}
