//! Chat client contract tests using in-memory transports: credential
//! gating, error folding, and the session log shape.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::bail;
use portfolio::chat::{
    Candidate, ChatClient, ChatMessage, ChatSession, ChatTransport, GenerateRequest,
    GenerateResponse, Role, WireContent, WirePart, EMPTY_REPLY, ERROR_REPLY, UNAVAILABLE_REPLY,
};

const INSTRUCTION: &str = "You are a test persona.";

/// Records every request and answers with a fixed text
struct ScriptedTransport {
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateRequest>>,
    reply: &'static str,
}

impl ScriptedTransport {
    fn new(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            reply,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChatTransport for ScriptedTransport {
    fn generate(&self, _api_key: &str, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(GenerateResponse {
            candidates: vec![Candidate {
                content: Some(WireContent {
                    role: Some("model".to_string()),
                    parts: vec![WirePart {
                        text: self.reply.to_string(),
                    }],
                }),
            }],
        })
    }
}

struct FailingTransport;

impl ChatTransport for FailingTransport {
    fn generate(&self, _api_key: &str, _request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        bail!("connection refused")
    }
}

struct EmptyTransport;

impl ChatTransport for EmptyTransport {
    fn generate(&self, _api_key: &str, _request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        Ok(GenerateResponse { candidates: vec![] })
    }
}

fn keyed_client(transport: Arc<dyn ChatTransport>) -> ChatClient {
    ChatClient::new(Some("test-key".to_string()), INSTRUCTION, transport)
}

#[test]
fn missing_credential_short_circuits_without_any_call() {
    let transport = ScriptedTransport::new("never sent");
    let client = ChatClient::new(None, INSTRUCTION, transport.clone());

    assert!(!client.has_credential());
    let reply = client.reply("hello", &[]);

    assert_eq!(reply.role, Role::Model);
    assert_eq!(reply.text, UNAVAILABLE_REPLY);
    assert!(!reply.is_error);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn successful_reply_carries_the_model_text() {
    let transport = ScriptedTransport::new("All about the projects.");
    let client = keyed_client(transport.clone());

    let reply = client.reply("tell me about the projects", &[]);
    assert_eq!(reply.text, "All about the projects.");
    assert!(!reply.is_error);
    assert_eq!(transport.calls(), 1);
}

#[test]
fn request_contains_persona_history_and_new_turn() {
    let transport = ScriptedTransport::new("ok");
    let client = keyed_client(transport.clone());

    let history = vec![
        ChatMessage::model("Hi, ask me anything!"),
        ChatMessage::user("what skills?"),
        ChatMessage::model("Python, mostly."),
    ];
    client.reply("and databases?", &history);

    let request = transport.last_request.lock().unwrap().take().unwrap();
    assert_eq!(request.system_instruction.parts[0].text, INSTRUCTION);
    assert_eq!(request.system_instruction.role, None);

    let roles: Vec<Option<String>> = request.contents.iter().map(|c| c.role.clone()).collect();
    assert_eq!(
        roles,
        vec![
            Some("model".to_string()),
            Some("user".to_string()),
            Some("model".to_string()),
            Some("user".to_string()),
        ]
    );
    assert_eq!(request.contents.last().unwrap().parts[0].text, "and databases?");
}

#[test]
fn transport_failure_folds_into_the_error_turn() {
    let client = keyed_client(Arc::new(FailingTransport));
    let reply = client.reply("hello", &[]);

    assert_eq!(reply.text, ERROR_REPLY);
    assert!(reply.is_error);
    assert_eq!(reply.role, Role::Model);
}

#[test]
fn empty_candidates_fold_into_the_empty_reply() {
    let client = keyed_client(Arc::new(EmptyTransport));
    let reply = client.reply("hello", &[]);

    assert_eq!(reply.text, EMPTY_REPLY);
    assert!(!reply.is_error);
}

#[test]
fn session_starts_with_one_greeting() {
    let session = ChatSession::new(keyed_client(ScriptedTransport::new("ok")), "Welcome!");
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.messages[0].role, Role::Model);
    assert_eq!(session.messages[0].text, "Welcome!");
}

#[test]
fn each_send_appends_exactly_two_turns() {
    let transport = ScriptedTransport::new("reply one");
    let mut session = ChatSession::new(keyed_client(transport.clone()), "Welcome!");

    session.send("first question");
    assert_eq!(session.messages.len(), 3);
    assert_eq!(session.messages[1].role, Role::User);
    assert_eq!(session.messages[1].text, "first question");
    assert_eq!(session.messages[2].role, Role::Model);
    assert_eq!(session.messages[2].text, "reply one");

    // The wire request saw the greeting but not the in-flight user turn
    let request = transport.last_request.lock().unwrap().take().unwrap();
    assert_eq!(request.contents.len(), 2);
    assert_eq!(request.contents[0].parts[0].text, "Welcome!");
}

#[test]
fn failed_sends_still_keep_the_log_append_only() {
    let mut session = ChatSession::new(keyed_client(Arc::new(FailingTransport)), "Welcome!");

    session.send("one");
    session.send("two");

    assert_eq!(session.messages.len(), 5);
    let errors: Vec<&ChatMessage> = session.messages.iter().filter(|m| m.is_error).collect();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|m| m.text == ERROR_REPLY));
}
