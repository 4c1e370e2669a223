use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::error::AnalysisError;
use crate::pipeline::stage1_validate::ValidatedText;
use crate::remote::AnalyzerConfig;
use crate::remote::config::MODEL_ID_HEADER;

const BODY_PREVIEW_CHARS: usize = 300;

#[derive(Debug, Serialize)]
struct RawDocumentRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteReply {
    /// The service refused the payload (HTTP 400).
    Rejected,
    Body(String),
}

pub async fn run_stage2(
    client: &Client,
    config: &AnalyzerConfig,
    text: &ValidatedText,
) -> Result<RemoteReply, AnalysisError> {
    let payload = RawDocumentRequest {
        raw_document: RawDocument {
            text: text.as_str(),
        },
    };

    tracing::debug!(
        endpoint = %config.endpoint,
        model_id = %config.model_id,
        chars = text.as_str().chars().count(),
        "sending text to emotion service"
    );

    let response = client
        .post(config.endpoint.clone())
        .header(MODEL_ID_HEADER, &config.model_id)
        .json(&payload)
        .send()
        .await
        .map_err(|e| unavailable(config, describe_transport_error(&e, config)))?;

    let status = response.status();
    if status == StatusCode::BAD_REQUEST {
        tracing::warn!(status = status.as_u16(), "emotion service rejected the text");
        return Ok(RemoteReply::Rejected);
    }

    let body = response
        .text()
        .await
        .map_err(|e| unavailable(config, format!("failed to read response body: {e}")))?;

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            endpoint = %config.endpoint,
            "emotion service returned an error status"
        );
        return Err(unavailable(
            config,
            format!("HTTP {}: {}", status, preview(&body)),
        ));
    }

    Ok(RemoteReply::Body(body))
}

fn describe_transport_error(err: &reqwest::Error, config: &AnalyzerConfig) -> String {
    if err.is_timeout() {
        format!("request timed out after {:?}", config.timeout)
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        format!("request failed: {err}")
    }
}

fn unavailable(config: &AnalyzerConfig, reason: String) -> AnalysisError {
    AnalysisError::Unavailable {
        endpoint: config.endpoint.to_string(),
        reason,
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_request.rs"]
mod tests;
