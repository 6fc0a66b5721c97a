use crate::domain::models::ItemRecord;
use crate::errors::FetchFailure;
use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the data service on a failed query
#[derive(Debug, Deserialize)]
pub struct ServiceErrorPayload {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl ServiceErrorPayload {
    pub fn describe(&self) -> String {
        let mut text = self.message.clone();
        if let Some(code) = &self.code {
            text.push_str(&format!(" (code {})", code));
        }
        if let Some(details) = &self.details {
            text.push_str(&format!(": {}", details));
        }
        if let Some(hint) = &self.hint {
            text.push_str(&format!(" [hint: {}]", hint));
        }
        text
    }
}

/// Turn a service response into the full item sequence, in service order
pub fn parse_items_response(status: u16, body: &str) -> Result<Vec<ItemRecord>, FetchFailure> {
    if !is_success(status) {
        return Err(FetchFailure::service(status, error_message(body)));
    }

    let data: Value = serde_json::from_str(body)?;

    if let Some(payload) = extract_error_payload(&data) {
        return Err(FetchFailure::service(status, payload.describe()));
    }

    let items: Vec<ItemRecord> = serde_json::from_value(data)?;
    Ok(items)
}

/// Best-effort message for a non-success response
fn error_message(body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ServiceErrorPayload>(body) {
        return payload.describe();
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

fn extract_error_payload(data: &Value) -> Option<ServiceErrorPayload> {
    if !data.is_object() {
        return None;
    }
    data.get("message")?;
    serde_json::from_value(data.clone()).ok()
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
