use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no 11-character video id found in URL")]
    InvalidUrl,

    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,

    #[error("no transcript available in the preferred languages")]
    NoTranscriptFound,

    #[error("video is unavailable")]
    VideoUnavailable,

    #[error("completion API returned status {0}")]
    Upstream(u16),

    #[error("completion API returned no summary content")]
    EmptySummary,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message returned to the caller. Internal detail never leaves the server.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidUrl => "유효한 YouTube URL이 아닙니다.".to_string(),
            AppError::TranscriptsDisabled => "자막이 없는 영상입니다".to_string(),
            AppError::NoTranscriptFound => "요청한 언어의 자막을 찾을 수 없습니다.".to_string(),
            AppError::VideoUnavailable => "존재하지 않는 영상입니다.".to_string(),
            AppError::Upstream(status) => format!("OpenRouter 오류: {}", status),
            AppError::EmptySummary => "DeepSeek API에서 요약을 받지 못했습니다.".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "서버 내부 오류가 발생했습니다.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let body = Json(ErrorResponse {
            error: self.user_message(),
        });

        // Error paths answer 200 with the error shape; the handler never
        // produces a non-200 status itself.
        (StatusCode::OK, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<CouldNotRetrieveTranscript> for AppError {
    fn from(err: CouldNotRetrieveTranscript) -> Self {
        match &err.reason {
            Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled) => AppError::TranscriptsDisabled,
            Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => AppError::NoTranscriptFound,
            Some(CouldNotRetrieveTranscriptReason::VideoUnavailable) => AppError::VideoUnavailable,
            _ => AppError::Internal(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
