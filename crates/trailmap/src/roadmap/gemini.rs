//! Gemini `generateContent` client.
//!
//! A single blocking request per roadmap: no retries, no streaming.

use std::{env, fmt, time::Duration};

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{GeneratorError, RoadmapGenerator};
use crate::config::GeneratorConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_ERROR_BODY: usize = 512;

/// Roadmap generator backed by the Gemini API.
pub struct GeminiClient {
    client: Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingApiKey`] for a blank key and
    /// [`GeneratorError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        config: &GeneratorConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, GeneratorError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeneratorError::MissingApiKey(
                config.api_key_env().to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;

        let url = generate_url(config.endpoint(), config.model());
        debug!(url = url.as_str(); "Gemini client ready");

        Ok(Self {
            client,
            url,
            api_key,
        })
    }

    /// Creates a client reading the API key from the environment variable
    /// named by [`GeneratorConfig::api_key_env`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingApiKey`] if the variable is unset or
    /// blank.
    pub fn from_env(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        let api_key = env::var(config.api_key_env())
            .map_err(|_| GeneratorError::MissingApiKey(config.api_key_env().to_string()))?;
        Self::new(config, api_key)
    }

    /// Returns the request URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RoadmapGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateRequest::new(prompt))
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            warn!(status = status.as_u16(); "Gemini request failed");
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body: truncate(body, MAX_ERROR_BODY),
            });
        }

        extract_text(&body)
    }
}

fn generate_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    )
}

/// Concatenates the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String, GeneratorError> {
    let response: GenerateResponse = serde_json::from_str(body)?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }
    Ok(text.to_string())
}

fn truncate(mut body: String, max: usize) -> String {
    if body.len() > max {
        let mut cut = max;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
