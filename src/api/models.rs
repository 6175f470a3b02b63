use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    // Required: the summary language the prompt asks the model for.
    #[serde(rename = "languageCode")]
    pub language_code: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
