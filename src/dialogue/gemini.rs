//! # Gemini Backend
//!
//! Dialogue generation over the `generateContent` HTTP API, asking for a
//! JSON reply shaped like [`DialogueLine`].

use crate::dialogue::{DialogueLine, DialogueRequest, DialogueService};
use crate::game::DayTime;
use crate::settings::DialogueSettings;
use crate::{IslandError, IslandResult};
use serde::Deserialize;
use serde_json::{json, Value};

/// HTTP client for a Gemini-style model.
pub struct GeminiDialogue {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiDialogue {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds a client if the configured key variable is set and non-empty.
    pub fn from_settings(settings: &DialogueSettings) -> Option<Self> {
        let key = std::env::var(&settings.api_key_env).ok()?;
        if key.trim().is_empty() {
            return None;
        }
        Some(Self::new(&settings.endpoint, &settings.model, key))
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    fn generate_text(&self, body: Value) -> IslandResult<String> {
        let response = self
            .agent
            .post(&self.url())
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| IslandError::Dialogue(format!("request failed: {}", e)))?;
        let parsed: GenerateResponse = response.into_json()?;
        first_text(parsed)
    }
}

/// Pulls the first text part out of a generation response.
fn first_text(response: GenerateResponse) -> IslandResult<String> {
    response
        .candidates
        .into_iter()
        .flat_map(|c| c.content.parts)
        .find_map(|p| p.text)
        .ok_or_else(|| IslandError::Dialogue("response had no text".to_string()))
}

/// Request body asking for a `{text, emotion}` JSON object.
fn dialogue_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "text": { "type": "STRING" },
                    "emotion": {
                        "type": "STRING",
                        "description": "One word emotion: happy, surprised, neutral, sleepy, grumpy"
                    }
                },
                "required": ["text", "emotion"]
            }
        }
    })
}

fn greeting_prompt(day_time: DayTime) -> String {
    format!(
        "Write a short, cozy greeting for a cozy island life game. Current time: {}. Max 15 words.",
        day_time.as_str()
    )
}

impl DialogueService for GeminiDialogue {
    fn generate(&self, request: &DialogueRequest) -> IslandResult<DialogueLine> {
        log::debug!("Requesting dialogue for {} from {}", request.name, self.model);
        let text = self.generate_text(dialogue_body(&request.prompt()))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn greeting(&self, day_time: DayTime) -> IslandResult<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": greeting_prompt(day_time) }] }]
        });
        Ok(self.generate_text(body)?.trim().to_string())
    }
}
