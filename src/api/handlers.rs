use axum::{Json, extract::State};

use super::AppState;
use super::error::ApiError;
use super::models::{AskRequest, AskResponse};

/// POST /ask: generate an explanation for the question and collect
/// related links, then return both in one payload.
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Question text cannot be empty".to_string(),
        ));
    }

    log::info!("answering question: {}", request.text);

    // The two backends do not depend on each other, so call them concurrently.
    let (answer, resources) = tokio::join!(
        state.answer.generate(&request.text),
        state.search.lookup(&request.text),
    );

    // Both backends fail soft. A broken answer backend is reported inside
    // the answer text, a broken search backend just means no resources.
    let answer = answer.unwrap_or_else(|e| {
        log::error!("error generating answer, error: {e:#}");
        format!("Error generating response: {e:#}")
    });

    let resources = resources.unwrap_or_else(|e| {
        log::warn!("error fetching resources, error: {e:#}");
        Vec::new()
    });

    Ok(Json(AskResponse { answer, resources }))
}
