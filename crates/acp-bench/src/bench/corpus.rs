//! Sample ACP messages and response shapes

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;

pub const INITIALIZE_REQUEST: &str = r#"{"jsonrpc":"2.0","method":"initialize","params":{"protocolVersion":1,"clientCapabilities":{"fs":{"readTextFile":true,"writeTextFile":true},"terminal":true},"clientInfo":{"name":"benchmark","version":"1.0.0"}},"id":1}"#;

pub const SESSION_NEW_REQUEST: &str = r#"{"jsonrpc":"2.0","method":"session/new","params":{"cwd":"/tmp","mcpServers":[]},"id":1}"#;

pub const SESSION_UPDATE_NOTIFICATION: &str = r#"{"jsonrpc":"2.0","method":"session/update","params":{"sessionId":"sess-001","update":{"sessionUpdate":"agent_message_chunk","content":{"type":"text","text":"Hello, this is a test message."}}}}"#;

pub const PROMPT_REQUEST: &str = r#"{"jsonrpc":"2.0","method":"session/prompt","params":{"sessionId":"sess-001","prompt":[{"type":"text","text":"What is 2+2?"}]},"id":2}"#;

/// Messages cycled by the throughput and codec modes, in order
pub const CORPUS: [&str; 4] = [
    INITIALIZE_REQUEST,
    SESSION_NEW_REQUEST,
    SESSION_UPDATE_NOTIFICATION,
    PROMPT_REQUEST,
];

const SESSION_ID: &str = "sess-001";
const TOKEN_WORD: &str = "word ";

/// Yield `count` corpus messages, wrapping around the corpus
pub fn cycle(count: usize) -> impl Iterator<Item = &'static str> {
    (0..count).map(|i| CORPUS[i % CORPUS.len()])
}

/// Build a session/update notification carrying `tokens` words of text
pub fn token_update(tokens: i64) -> Result<String> {
    let text = TOKEN_WORD.repeat(usize::try_from(tokens).unwrap_or(0));
    let message = json!({
        "jsonrpc": "2.0",
        "method": "session/update",
        "params": {
            "sessionId": SESSION_ID,
            "update": {
                "sessionUpdate": "agent_message_chunk",
                "content": {"type": "text", "text": text}
            }
        }
    });
    Ok(serde_json::to_string(&message)?)
}

/// Decode a message into an untyped JSON value
pub fn decode(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Encode a value as compact JSON text
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// JSON-RPC 2.0 success response
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse<R> {
    pub jsonrpc: &'static str,
    pub result: R,
    pub id: Value,
}

impl<R: Serialize> JsonRpcResponse<R> {
    pub fn new(result: R, id: impl Into<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            result,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionResult {
    pub session_id: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method_of(text: &str) -> String {
        let value = decode(text).unwrap();
        value["method"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_corpus_messages_are_jsonrpc() {
        for text in CORPUS {
            let value = decode(text).unwrap();
            assert_eq!(value["jsonrpc"], "2.0");
            assert!(value["method"].is_string());
        }
    }

    #[test]
    fn test_cycle_visits_corpus_in_order() {
        let methods: Vec<String> = cycle(4).map(method_of).collect();
        assert_eq!(
            methods,
            vec!["initialize", "session/new", "session/update", "session/prompt"]
        );
    }

    #[test]
    fn test_cycle_wraps_around() {
        let messages: Vec<&str> = cycle(6).collect();
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[4], INITIALIZE_REQUEST);
        assert_eq!(messages[5], SESSION_NEW_REQUEST);
        assert_eq!(cycle(0).count(), 0);
    }

    #[test]
    fn test_token_update_text() {
        let message = token_update(3).unwrap();
        let value = decode(&message).unwrap();
        assert_eq!(value["method"], "session/update");
        assert_eq!(value["params"]["sessionId"], "sess-001");
        assert_eq!(value["params"]["update"]["content"]["text"], "word word word ");
    }

    #[test]
    fn test_token_update_non_positive_is_empty() {
        for tokens in [0, -4] {
            let value = decode(&token_update(tokens).unwrap()).unwrap();
            assert_eq!(value["params"]["update"]["content"]["text"], "");
        }
    }

    #[test]
    fn test_response_shape() {
        let request = decode(INITIALIZE_REQUEST).unwrap();
        let response = JsonRpcResponse::new(
            InitializeResult { protocol_version: 1 },
            request["id"].clone(),
        );
        assert_eq!(
            encode(&response).unwrap(),
            r#"{"jsonrpc":"2.0","result":{"protocolVersion":1},"id":1}"#
        );

        let response = JsonRpcResponse::new(NewSessionResult { session_id: "sess-bench" }, 7u64);
        assert_eq!(
            encode(&response).unwrap(),
            r#"{"jsonrpc":"2.0","result":{"sessionId":"sess-bench"},"id":7}"#
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("{\"jsonrpc\":").is_err());
    }
}
