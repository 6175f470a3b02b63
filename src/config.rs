use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub openrouter_api_key: String,
    pub model: String,
    /// Preferred caption languages, tried in order by the transcript fetch.
    pub transcript_languages: Vec<String>,
    /// Transcripts longer than this (in chars) are cut before prompting.
    pub max_transcript_chars: usize,
    pub site_url: String,
    pub site_name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load OpenRouter API key
        let openrouter_api_key = env::var("OPENROUTER_API_KEY")?;

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let model = env::var("OPENROUTER_MODEL")
            .unwrap_or_else(|_| "deepseek/deepseek-r1:free".to_string());

        let transcript_languages = env::var("TRANSCRIPT_LANGUAGES")
            .unwrap_or_else(|_| "ko".to_string())
            .split(',')
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty())
            .collect::<Vec<_>>();
        if transcript_languages.is_empty() {
            return Err(AppError::Config("TRANSCRIPT_LANGUAGES must name at least one language".to_string()));
        }

        let max_transcript_chars = env::var("MAX_TRANSCRIPT_CHARS")
            .unwrap_or_else(|_| "100000".to_string())
            .parse::<usize>()
            .map_err(|e| AppError::Config(format!("Invalid MAX_TRANSCRIPT_CHARS: {}", e)))?;

        let site_url = env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "youtube-summarizer".to_string());

        Ok(Config {
            server_addr,
            openrouter_api_key,
            model,
            transcript_languages,
            max_transcript_chars,
            site_url,
            site_name,
        })
    }
}
