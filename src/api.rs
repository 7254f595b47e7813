//! Clients for the backend HTTP endpoints.
//!
//! Both endpoints are opaque services: the chat endpoint answers free-form
//! agriculture questions, the prediction endpoint scores an uploaded image.
//! Failures are mapped into [`ApiError`] and handled by the callers; nothing
//! here surfaces as an unhandled rejection.

use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

use crate::config::{CHAT_ENDPOINT, PREDICT_ENDPOINT};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

/// Prediction for one uploaded image.
///
/// `score` is the raw probability that the sample is affected; the caller
/// derives the displayed verdict and confidence from it. Treatment and
/// prevention advice may be absent for healthy samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictReply {
    pub label: String,
    pub score: f32,
    #[serde(default)]
    pub treatment: Vec<String>,
    #[serde(default)]
    pub prevention: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    Network(String),
    /// The server answered with a non-OK status.
    Status(u16),
    /// The response body could not be parsed into the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "Request failed: {}", detail),
            ApiError::Status(code) => write!(f, "Server responded with status {}", code),
            ApiError::Decode(detail) => write!(f, "Could not decode response: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn fetch_json<T>(request: Request) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let promise = gloo_utils::window().fetch_with_request(&request);
    let response: Response = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Network(js_detail(e)))?
        .dyn_into()
        .map_err(|e| ApiError::Decode(js_detail(e)))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body = JsFuture::from(response.json().map_err(|e| ApiError::Decode(js_detail(e)))?)
        .await
        .map_err(|e| ApiError::Decode(js_detail(e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one chat message; resolves to the assistant's reply text.
pub async fn send_chat(message: &str) -> Result<String, ApiError> {
    let body = serde_json::to_string(&ChatRequest { message })
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(CHAT_ENDPOINT, &init)
        .map_err(|e| ApiError::Network(js_detail(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_detail(e)))?;

    let reply: ChatReply = fetch_json(request).await?;
    Ok(reply.response)
}

/// Upload an image for analysis.
pub async fn predict(file: &File) -> Result<PredictReply, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(js_detail(e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(js_detail(e)))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());
    let request = Request::new_with_str_and_init(PREDICT_ENDPOINT, &init)
        .map_err(|e| ApiError::Network(js_detail(e)))?;

    fetch_json(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_format() {
        let json = serde_json::to_string(&ChatRequest { message: "hello" }).unwrap();
        assert_eq!(json, r#"{"message":"hello"}"#);
    }

    #[test]
    fn chat_reply_wire_format() {
        let reply: ChatReply = serde_json::from_str(r#"{"response":"use neem oil"}"#).unwrap();
        assert_eq!(reply.response, "use neem oil");
    }

    #[test]
    fn predict_reply_defaults_optional_advice() {
        let reply: PredictReply =
            serde_json::from_str(r#"{"label":"Healthy","score":0.12}"#).unwrap();
        assert!(reply.treatment.is_empty());
        assert!(reply.prevention.is_empty());

        let reply: PredictReply = serde_json::from_str(
            r#"{"label":"Leaf Blight","score":0.93,"treatment":["Remove affected leaves"],"prevention":["Rotate crops"]}"#,
        )
        .unwrap();
        assert_eq!(reply.treatment.len(), 1);
        assert_eq!(reply.prevention.len(), 1);
    }
}
