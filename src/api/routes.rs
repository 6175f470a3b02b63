use axum::{
    routing::post,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;

use crate::error::{Result, AppError};
use crate::api::models::{SummarizeRequest, SummaryResponse};
use crate::llm::{build_prompt, request_summary, truncate_chars};
use crate::youtube::extract_video_id;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/summarize-youtube", post(summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>> {
    let summary = process_summarize_request(&state, &req).await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn process_summarize_request(state: &AppState, req: &SummarizeRequest) -> Result<String> {
    let video_id = extract_video_id(&req.video_url).ok_or(AppError::InvalidUrl)?;
    tracing::info!(video_id, language = %req.language_code, "processing summarize request");

    let languages: Vec<&str> = state
        .config
        .transcript_languages
        .iter()
        .map(String::as_str)
        .collect();
    let transcript = state.transcripts.fetch_text(video_id, &languages).await?;

    let text = truncate_chars(&transcript, state.config.max_transcript_chars);
    if text.len() < transcript.len() {
        tracing::warn!(
            original_chars = transcript.chars().count(),
            kept_chars = state.config.max_transcript_chars,
            "transcript over limit, truncated before prompting"
        );
    }

    let prompt = build_prompt(&req.language_code, text);
    tracing::info!(prompt_chars = prompt.chars().count(), "calling completion API");

    let summary = request_summary(&state.http, &state.config, &prompt).await?;
    tracing::info!(summary_chars = summary.chars().count(), "summary generated");

    Ok(summary)
}
