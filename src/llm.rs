use serde::Serialize;
use reqwest::{Client, StatusCode};
use crate::config::Config;
use crate::error::{Result, AppError};

const CHAT_COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

/// Cut `text` to at most `max_chars` characters, on a char boundary.
/// Keeps the head of the transcript; the tail is dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_prompt(language_code: &str, transcript: &str) -> String {
    let mut prompt = String::with_capacity(transcript.len() + 400);
    prompt.push_str("다음은 유튜브 영상 자막입니다. 이 자막을 ");
    prompt.push_str(language_code);
    prompt.push_str(" 플러터 Markdown 형식으로 활용 하게 요약해주세요.\n");
    prompt.push_str("- html 형식으로 요약해주세요.\n");
    prompt.push_str("- 핵심 내용이나 강조할 키워드는 <Strong> 을 입혀줘.\n");
    prompt.push_str("- 꼭 10문장 이내로 부탁하고, 핵심이 명확하면 됩니다.\n");
    prompt.push_str("- 정보의 흐름에 따라 **소제목과 항목을 구분**해주세요.\n");
    prompt.push_str("- 중복 표현은 제거하고, 문장은 간결하고 명확하게 작성해주세요.\n");
    prompt.push_str("자막:\n");
    prompt.push_str(transcript);
    prompt
}

/// Remove one surrounding markdown code fence (``` optionally tagged `html`)
/// from the model output. Interior backticks stay as they are.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("html").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    match rest.trim_end().strip_suffix("```") {
        Some(inner) => inner,
        None => rest,
    }
}

/// Single-turn chat completion against OpenRouter. Non-200 is a hard
/// failure; empty content after fence stripping is an error, never an
/// empty-string success.
pub async fn request_summary(client: &Client, config: &Config, prompt: &str) -> Result<String> {
    let body = ChatRequest {
        model: config.model.clone(),
        messages: vec![
            Message {
                role: "user".into(),
                content: prompt.into(),
            }
        ],
    };

    let res = client
        .post(CHAT_COMPLETIONS_URL)
        .bearer_auth(&config.openrouter_api_key)
        .header("HTTP-Referer", &config.site_url)
        .header("X-Title", &config.site_name)
        .json(&body)
        .send()
        .await?;

    let status = res.status();
    if status != StatusCode::OK {
        return Err(AppError::Upstream(status.as_u16()));
    }

    let json: serde_json::Value = res.json().await?;
    tracing::debug!(response = %json, "completion API response");

    let content = json["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default();

    let summary = strip_code_fence(content);
    if summary.is_empty() {
        tracing::error!("completion API returned no summary content");
        return Err(AppError::EmptySummary);
    }

    Ok(summary.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fence_with_html_tag() {
        assert_eq!(strip_code_fence("```html\n<p>Hi</p>\n```"), "<p>Hi</p>\n");
    }

    #[test]
    fn test_strip_fence_without_tag() {
        assert_eq!(strip_code_fence("```\n<h2>제목</h2>\n```"), "<h2>제목</h2>\n");
    }

    #[test]
    fn test_strip_fence_keeps_inner_backticks() {
        assert_eq!(
            strip_code_fence("```html\n<p>use `let` here</p>\n```"),
            "<p>use `let` here</p>\n"
        );
    }

    #[test]
    fn test_strip_fence_removed_once() {
        // Nested fence markers inside the body survive
        assert_eq!(
            strip_code_fence("```html\n<pre>```js\nx\n```</pre>\n```"),
            "<pre>```js\nx\n```</pre>\n"
        );
    }

    #[test]
    fn test_strip_fence_unfenced_passthrough() {
        assert_eq!(strip_code_fence("<p>Hi</p>"), "<p>Hi</p>");
        assert_eq!(strip_code_fence(""), "");
    }

    #[test]
    fn test_strip_fence_trailing_newline_after_close() {
        assert_eq!(strip_code_fence("```html\n<p>Hi</p>\n```\n"), "<p>Hi</p>\n");
    }

    #[test]
    fn test_strip_fence_empty_body() {
        assert_eq!(strip_code_fence("```html\n```"), "");
        assert_eq!(strip_code_fence("```"), "");
    }

    #[test]
    fn test_truncate_under_limit_unchanged() {
        assert_eq!(truncate_chars("짧은 자막", 100), "짧은 자막");
    }

    #[test]
    fn test_truncate_cuts_on_char_boundary() {
        let text = "가나다라마";
        let cut = truncate_chars(text, 3);
        assert_eq!(cut, "가나다");
        assert_eq!(cut.chars().count(), 3);
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn test_build_prompt_embeds_language_and_transcript() {
        let prompt = build_prompt("en", "안녕하세요 여러분");
        assert!(prompt.contains("이 자막을 en 플러터"));
        assert!(prompt.contains("html 형식으로"));
        assert!(prompt.ends_with("자막:\n안녕하세요 여러분"));
    }
}
