use once_cell::sync::Lazy;
use regex::Regex;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::error::{AppError, Result};

// Matches the watch-page `v=` query parameter and the youtu.be short form.
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|youtu\.be/)([A-Za-z0-9_-]{11})").expect("Failed to compile video id regex")
});

/// Pull the 11-character video id out of a YouTube URL.
///
/// Absence is a normal outcome: the caller turns `None` into the
/// invalid-URL response without touching the network.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1).map(|m| m.as_str()))
}

/// Caption client, built once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct TranscriptFetcher {
    api: YouTubeTranscriptApi,
}

impl TranscriptFetcher {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| AppError::Config(format!("Failed to build transcript client: {}", e)))?;
        Ok(TranscriptFetcher { api })
    }

    /// Fetch the caption track for `video_id` in the first available of
    /// `languages` and join the snippet texts into one string, in order,
    /// separated by single spaces.
    pub async fn fetch_text(&self, video_id: &str, languages: &[&str]) -> Result<String> {
        let transcript = self.api.fetch_transcript(video_id, languages, false).await?;

        tracing::info!(
            video_id,
            language = %transcript.language_code,
            snippets = transcript.snippets.len(),
            "fetched transcript"
        );

        let text = transcript
            .snippets
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(extract_video_id(url), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_from_short_url() {
        let url = "https://youtu.be/dQw4w9WgXcQ";
        assert_eq!(extract_video_id(url), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_ignores_surrounding_query_params() {
        let url = "https://www.youtube.com/watch?t=42&v=abcDEF123-_&list=PLxyz";
        assert_eq!(extract_video_id(url), Some("abcDEF123-_"));

        let url = "https://youtu.be/abcDEF123-_?feature=shared";
        assert_eq!(extract_video_id(url), Some("abcDEF123-_"));
    }

    #[test]
    fn test_extract_takes_first_match() {
        let url = "https://www.youtube.com/watch?v=AAAAAAAAAAA&v=BBBBBBBBBBB";
        assert_eq!(extract_video_id(url), Some("AAAAAAAAAAA"));
    }

    #[test]
    fn test_extract_no_match() {
        assert_eq!(extract_video_id("https://example.com/watch"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
        // Too short to be a video id
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_video_id(""), None);
    }
}
