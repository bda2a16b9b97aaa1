// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Advice, AdvisorGateway};
use crate::config::Config;
use crate::error::AdvisorError;
use crate::summary::{analysis_prompt, question_prompt};
use crate::utils::http_client;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Tried in order until one answers.
pub const CANDIDATE_MODELS: &[&str] = &["gemini-2.0-flash", "gemini-1.5-flash", "gemini-1.5-pro"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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

struct Connection {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Gemini-backed [`AdvisorGateway`]. Unavailable unless a key is configured
/// and one of the candidate models answered during [`GeminiAdvisor::connect`].
pub struct GeminiAdvisor {
    connection: Option<Connection>,
}

impl GeminiAdvisor {
    pub fn unavailable() -> Self {
        Self { connection: None }
    }

    pub fn connect(config: &Config) -> Self {
        Self::connect_to(GEMINI_BASE_URL, config)
    }

    pub fn connect_to(base_url: &str, config: &Config) -> Self {
        let api_key = config.api_key();
        if api_key.is_empty() {
            debug!("no Gemini API key configured");
            return Self::unavailable();
        }
        let client = match http_client(REQUEST_TIMEOUT) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "could not build HTTP client");
                return Self::unavailable();
            }
        };
        let candidates: Vec<String> = match &config.model {
            Some(m) if !m.trim().is_empty() => vec![normalize_model(m)],
            _ => CANDIDATE_MODELS.iter().map(|m| m.to_string()).collect(),
        };
        for model in candidates {
            let conn = Connection {
                client: client.clone(),
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key: api_key.clone(),
                model,
            };
            match conn.probe() {
                Ok(()) => {
                    info!(model = %conn.model, "connected to Gemini");
                    return Self {
                        connection: Some(conn),
                    };
                }
                Err(e) => debug!(model = %conn.model, error = %e, "model unavailable"),
            }
        }
        warn!("no Gemini model responded");
        Self::unavailable()
    }

    pub fn model(&self) -> Option<&str> {
        self.connection.as_ref().map(|c| c.model.as_str())
    }

    fn run(&self, prompt: String) -> Advice {
        let Some(conn) = &self.connection else {
            return Advice::Unavailable;
        };
        match conn.generate(&prompt) {
            Ok(text) => Advice::Narrative(text),
            Err(e) => {
                warn!(model = %conn.model, error = %e, "Gemini request failed");
                Advice::Failed(e.to_string())
            }
        }
    }
}

impl AdvisorGateway for GeminiAdvisor {
    fn is_available(&self) -> bool {
        self.connection.is_some()
    }

    fn analyze(&self, summary: &str) -> Advice {
        self.run(analysis_prompt(summary))
    }

    fn answer(&self, summary: &str, question: &str) -> Advice {
        self.run(question_prompt(summary, question))
    }
}

impl Connection {
    fn probe(&self) -> Result<(), AdvisorError> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let res = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(AdvisorError::Api {
                status,
                body: res.text()?,
            });
        }
        Ok(())
    }

    fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        let res = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(AdvisorError::Api {
                status,
                body: res.text()?,
            });
        }
        let body: GenerateContentResponse = res.json()?;
        extract_text(body)
    }
}

fn normalize_model(name: &str) -> String {
    name.trim().trim_start_matches("models/").to_string()
}

fn extract_text(body: GenerateContentResponse) -> Result<String, AdvisorError> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AdvisorError::Response("no candidates returned".to_string()))?;
    let parts = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default();
    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        return Err(AdvisorError::Response("model returned no text".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let body = parse(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Save "},{"text":"more."}]}},
                              {"content":{"parts":[{"text":"ignored"}]}}]}"#,
        );
        assert_eq!(extract_text(body).unwrap(), "Save more.");
    }

    #[test]
    fn empty_candidates_is_a_response_error() {
        let err = extract_text(parse(r#"{"candidates":[]}"#)).unwrap_err();
        assert!(matches!(err, AdvisorError::Response(_)));
        let err = extract_text(parse(r#"{}"#)).unwrap_err();
        assert!(matches!(err, AdvisorError::Response(_)));
    }

    #[test]
    fn blocked_candidate_without_content_is_an_error() {
        let body = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert!(extract_text(body).is_err());
    }

    #[test]
    fn model_prefix_is_stripped() {
        assert_eq!(normalize_model("models/gemini-1.5-pro"), "gemini-1.5-pro");
        assert_eq!(normalize_model(" gemini-2.0-flash "), "gemini-2.0-flash");
    }

    #[test]
    fn disconnected_advisor_reports_unavailable() {
        let advisor = GeminiAdvisor::unavailable();
        assert!(!advisor.is_available());
        assert_eq!(advisor.analyze("summary"), Advice::Unavailable);
        assert_eq!(advisor.answer("summary", "why?"), Advice::Unavailable);
        assert!(advisor.model().is_none());
    }
}
