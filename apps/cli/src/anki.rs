//! Client for the local flashcard service (AnkiConnect wire protocol).
//!
//! Requests are JSON-RPC style: `{action, params, version}` POSTed to one
//! endpoint. Responses carry exactly a `result` and an `error` field; any
//! other shape is a protocol violation.

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

const PROTOCOL_VERSION: u32 = 6;
const NOTE_MODEL: &str = "Basic";

/// Flashcard service errors.
#[derive(Debug, thiserror::Error)]
pub enum AnkiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("protocol violation: {0}")]
    Protocol(String),

    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Serialize)]
struct RpcRequest<P: Serialize> {
    action: &'static str,
    params: P,
    version: u32,
}

#[derive(Debug, Serialize)]
struct AddNoteParams {
    note: Note,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Note {
    deck_name: String,
    model_name: &'static str,
    fields: NoteFields,
    options: NoteOptions,
    tags: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NoteFields {
    #[serde(rename = "Front")]
    front: String,
    #[serde(rename = "Back")]
    back: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteOptions {
    allow_duplicate: bool,
    duplicate_scope: &'static str,
    duplicate_scope_options: DuplicateScopeOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DuplicateScopeOptions {
    deck_name: String,
    check_children: bool,
    check_all_models: bool,
}

/// Blocking client for the flashcard service endpoint.
pub struct AnkiClient {
    client: Client,
    base_url: String,
}

impl AnkiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Whether the service answers at all on its endpoint. Any response
    /// counts as reachable; only a transport failure does not.
    pub fn is_available(&self) -> bool {
        self.client.get(&self.base_url).send().is_ok()
    }

    /// Create a note for an answered entry in the given deck.
    pub fn add_note(
        &self,
        question: &str,
        answer: &str,
        deck: &str,
        tags: &[String],
    ) -> Result<Value, AnkiError> {
        tracing::info!(question, "adding note");
        let params = AddNoteParams {
            note: Note {
                deck_name: deck.to_string(),
                model_name: NOTE_MODEL,
                fields: NoteFields {
                    front: question.to_string(),
                    back: answer.to_string(),
                },
                options: NoteOptions {
                    allow_duplicate: false,
                    duplicate_scope: "deck",
                    duplicate_scope_options: DuplicateScopeOptions {
                        deck_name: deck.to_string(),
                        check_children: false,
                        check_all_models: false,
                    },
                },
                tags: tags.to_vec(),
            },
        };
        self.invoke("addNote", params)
    }

    fn invoke<P: Serialize>(&self, action: &'static str, params: P) -> Result<Value, AnkiError> {
        let request = RpcRequest {
            action,
            params,
            version: PROTOCOL_VERSION,
        };
        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .map_err(|e| AnkiError::Network(e.to_string()))?;
        let body: Value = response
            .json()
            .map_err(|e| AnkiError::Parse(e.to_string()))?;
        validate_response(body)
    }
}

/// Enforce the two-field `{result, error}` response contract and return the
/// result. A non-null error field is logged but does not fail the call.
fn validate_response(body: Value) -> Result<Value, AnkiError> {
    let Value::Object(mut fields) = body else {
        return Err(AnkiError::Protocol("response is not a JSON object".into()));
    };
    if fields.len() != 2 {
        return Err(AnkiError::Protocol(format!(
            "response has an unexpected number of fields: {}",
            fields.len()
        )));
    }
    if !fields.contains_key("error") {
        return Err(AnkiError::Protocol(
            "response is missing required error field".into(),
        ));
    }
    let Some(result) = fields.remove("result") else {
        return Err(AnkiError::Protocol(
            "response is missing required result field".into(),
        ));
    };
    if let Some(error) = fields.get("error") {
        if !error.is_null() {
            tracing::error!(%error, "flashcard service reported an error");
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_response_returns_result() {
        let result = validate_response(json!({"result": 1496198395707u64, "error": null}));
        assert_eq!(result.unwrap(), json!(1496198395707u64));
    }

    #[test]
    fn test_service_error_is_tolerated() {
        let result = validate_response(json!({"result": null, "error": "cannot create note"}));
        assert_eq!(result.unwrap(), Value::Null);
    }

    #[test]
    fn test_extra_fields_are_a_protocol_violation() {
        let result = validate_response(json!({"result": 1, "error": null, "extra": true}));
        assert!(matches!(result, Err(AnkiError::Protocol(_))));
    }

    #[test]
    fn test_missing_error_field_is_a_protocol_violation() {
        let result = validate_response(json!({"result": 1, "other": null}));
        assert!(matches!(result, Err(AnkiError::Protocol(_))));
    }

    #[test]
    fn test_missing_result_field_is_a_protocol_violation() {
        let result = validate_response(json!({"error": null, "other": null}));
        assert!(matches!(result, Err(AnkiError::Protocol(_))));
    }

    #[test]
    fn test_non_object_response_is_a_protocol_violation() {
        let result = validate_response(json!([1, 2]));
        assert!(matches!(result, Err(AnkiError::Protocol(_))));
    }

    #[test]
    fn test_request_wire_shape() {
        let request = RpcRequest {
            action: "addNote",
            params: AddNoteParams {
                note: Note {
                    deck_name: "Default".to_string(),
                    model_name: NOTE_MODEL,
                    fields: NoteFields {
                        front: "q".to_string(),
                        back: "a".to_string(),
                    },
                    options: NoteOptions {
                        allow_duplicate: false,
                        duplicate_scope: "deck",
                        duplicate_scope_options: DuplicateScopeOptions {
                            deck_name: "Default".to_string(),
                            check_children: false,
                            check_all_models: false,
                        },
                    },
                    tags: vec!["#rust".to_string()],
                },
            },
            version: PROTOCOL_VERSION,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["action"], "addNote");
        assert_eq!(value["version"], 6);
        let note = &value["params"]["note"];
        assert_eq!(note["deckName"], "Default");
        assert_eq!(note["modelName"], "Basic");
        assert_eq!(note["fields"]["Front"], "q");
        assert_eq!(note["fields"]["Back"], "a");
        assert_eq!(note["options"]["allowDuplicate"], false);
        assert_eq!(
            note["options"]["duplicateScopeOptions"]["deckName"],
            "Default"
        );
        assert_eq!(note["tags"], json!(["#rust"]));
    }
}
