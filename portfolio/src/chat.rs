//! Chat service boundary
//!
//! Forwards a user message plus the prior conversation to the Gemini
//! `generateContent` REST endpoint and maps every outcome to a
//! conversation turn: a normal model reply, a fixed "unavailable" reply
//! when no credential is configured (no call attempted), or a fixed error
//! turn when the call fails. No retry, no streaming, no timeout.

use anyhow::{anyhow, Context as _, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shown when no API key is configured; no network call is made.
pub const UNAVAILABLE_REPLY: &str = "I'm sorry, but the AI service is currently unavailable \
     (API key missing). Please try contacting the developer directly.";

/// Shown when the service call fails for any reason.
pub const ERROR_REPLY: &str = "Something went wrong.";

/// Shown when the service answers with no text at all.
pub const EMPTY_REPLY: &str = "I didn't get a response. Please try again.";

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

/// One turn of the conversation, rendered in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            is_error: false,
        }
    }
}

// Wire types for the generateContent API

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub system_instruction: WireContent,
    pub contents: Vec<WireContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePart {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<WireContent>,
}

/// Seam between the client and the wire, so the error mapping can be
/// exercised without a network.
pub trait ChatTransport: Send + Sync {
    fn generate(&self, api_key: &str, request: &GenerateRequest) -> Result<GenerateResponse>;
}

/// Production transport: one blocking POST per exchange
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTransport for HttpTransport {
    fn generate(&self, api_key: &str, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}/{}:generateContent", ENDPOINT, MODEL);
        let response = self
            .agent
            .post(&url)
            .set("x-goog-api-key", api_key)
            .send_json(serde_json::to_value(request)?)
            .map_err(|e| anyhow!("generateContent request failed: {e}"))?;

        response
            .into_json::<GenerateResponse>()
            .context("malformed generateContent response")
    }
}

/// Chat client: holds the credential, the persona instruction and the
/// transport. Cheap to clone so the widget can hand it to worker threads.
#[derive(Clone)]
pub struct ChatClient {
    api_key: Option<String>,
    system_instruction: &'static str,
    transport: Arc<dyn ChatTransport>,
}

impl ChatClient {
    /// Read the credential from `GEMINI_API_KEY`; an absent or empty
    /// variable puts the client in unavailable mode.
    pub fn from_env(system_instruction: &'static str) -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        Self::new(api_key, system_instruction, Arc::new(HttpTransport::new()))
    }

    pub fn new(
        api_key: Option<String>,
        system_instruction: &'static str,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            api_key,
            system_instruction,
            transport,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send `message` with the prior exchanges and fold the outcome into
    /// a single model turn. Never fails: failures become the fixed error
    /// turn, and a missing credential short-circuits without any call.
    pub fn reply(&self, message: &str, history: &[ChatMessage]) -> ChatMessage {
        let Some(api_key) = &self.api_key else {
            return ChatMessage::model(UNAVAILABLE_REPLY);
        };

        let request = self.build_request(message, history);
        match self.transport.generate(api_key, &request) {
            Ok(response) => {
                let text = extract_text(&response);
                if text.is_empty() {
                    ChatMessage::model(EMPTY_REPLY)
                } else {
                    ChatMessage::model(text)
                }
            }
            Err(err) => {
                log::error!("chat request failed: {err:#}");
                ChatMessage {
                    role: Role::Model,
                    text: ERROR_REPLY.to_string(),
                    is_error: true,
                }
            }
        }
    }

    fn build_request(&self, message: &str, history: &[ChatMessage]) -> GenerateRequest {
        let mut contents: Vec<WireContent> = history
            .iter()
            .map(|msg| WireContent {
                role: Some(
                    match msg.role {
                        Role::User => "user",
                        Role::Model => "model",
                    }
                    .to_string(),
                ),
                parts: vec![WirePart {
                    text: msg.text.clone(),
                }],
            })
            .collect();

        contents.push(WireContent {
            role: Some("user".to_string()),
            parts: vec![WirePart {
                text: message.to_string(),
            }],
        });

        GenerateRequest {
            system_instruction: WireContent {
                role: None,
                parts: vec![WirePart {
                    text: self.system_instruction.to_string(),
                }],
            },
            contents,
        }
    }
}

/// In-memory conversation: a client plus the ordered log of turns
pub struct ChatSession {
    pub client: ChatClient,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(client: ChatClient, greeting: &str) -> Self {
        Self {
            client,
            messages: vec![ChatMessage::model(greeting)],
        }
    }

    /// Append the user's turn, obtain exactly one reply turn (model text,
    /// unavailable text, or error turn) and append it.
    pub fn send(&mut self, text: &str) -> &ChatMessage {
        let reply = self.client.reply(text, &self.messages);
        self.messages.push(ChatMessage::user(text));
        self.messages.push(reply);
        self.messages.last().expect("log cannot be empty here")
    }
}

fn extract_text(response: &GenerateResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}
