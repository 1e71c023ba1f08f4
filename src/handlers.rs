use crate::errors::AppError;
use crate::interaction::PressOutcome;
use crate::models::{Button, LogResponse, WalkingQuery, WalkingStatus};
use crate::state::AppState;
use crate::timestamp::display_timestamp;
use crate::ui::{render_index, render_medication, render_walking};
use crate::validate::validate_health_data;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::Value;
use tracing::{error, warn};

const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Content-Type, Authorization, X-Requested-With",
    ),
];

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(main_page(&state, None).await)
}

pub async fn medication_page() -> Html<String> {
    Html(render_medication(&display_timestamp()))
}

pub async fn walking_page(Query(query): Query<WalkingQuery>) -> Html<String> {
    let status = query
        .status
        .as_deref()
        .and_then(WalkingStatus::parse)
        .unwrap_or(WalkingStatus::Good);
    Html(render_walking(status, &display_timestamp()))
}

pub async fn press_medication(State(state): State<AppState>) -> Response {
    press(&state, Button::Medication).await
}

pub async fn press_walking(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Response, AppError> {
    let status = WalkingStatus::parse(&status)
        .ok_or_else(|| AppError::bad_request("status must be 'difficult', 'okay' or 'good'"))?;
    Ok(press(&state, Button::Walking(status)).await)
}

async fn press(state: &AppState, button: Button) -> Response {
    match state.interaction.press(button).await {
        PressOutcome::Armed(_) => Html(main_page(state, None).await).into_response(),
        PressOutcome::Navigate(target) => Redirect::to(&format!("/{target}")).into_response(),
        PressOutcome::Failed(err) => {
            let page = main_page(state, Some(&err.alert_text())).await;
            (StatusCode::BAD_GATEWAY, Html(page)).into_response()
        }
    }
}

async fn main_page(state: &AppState, alert: Option<&str>) -> String {
    let buttons = state.interaction.appearances().await;
    render_index(&display_timestamp(), &buttons, &state.page_endpoint, alert)
}

pub async fn log_preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        CORS_HEADERS,
        [(header::ACCESS_CONTROL_MAX_AGE, "3600")],
    )
}

pub async fn log_health(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let json: Option<Value> = if is_json(&headers) {
        serde_json::from_slice(&body).ok()
    } else {
        None
    };

    let record = match validate_health_data(json.as_ref()) {
        Ok(record) => record,
        Err(message) => {
            warn!("rejected health log: {message}");
            return (
                StatusCode::BAD_REQUEST,
                CORS_HEADERS,
                Json(LogResponse::error(message)),
            );
        }
    };

    match state.store.append(&record).await {
        Ok(message) => (StatusCode::OK, CORS_HEADERS, Json(LogResponse::success(message))),
        Err(err) => {
            error!("error in log endpoint: {}", err.message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CORS_HEADERS,
                Json(LogResponse::error("Internal server error")),
            )
        }
    }
}

/// `application/json` or any `application/*+json` media type.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_type(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn json_content_types_are_recognised() {
        assert!(is_json(&with_type("application/json")));
        assert!(is_json(&with_type("application/json; charset=utf-8")));
        assert!(is_json(&with_type("application/vnd.health+json")));
    }

    #[test]
    fn other_content_types_are_not_json() {
        assert!(!is_json(&HeaderMap::new()));
        assert!(!is_json(&with_type("text/plain")));
        assert!(!is_json(&with_type("application/x-www-form-urlencoded")));
    }
}
