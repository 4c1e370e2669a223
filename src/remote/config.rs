use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;

use crate::error::ConfigError;
use crate::remote::schema::ResponseSchema;

pub const DEFAULT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header the remote runtime uses to pick the model variant.
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub endpoint: Url,
    pub model_id: String,
    pub schema: ResponseSchema,
    pub timeout: Duration,
}

impl AnalyzerConfig {
    pub fn new(
        endpoint: &str,
        model_id: &str,
        schema: ResponseSchema,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ConfigError::InvalidValue {
            key: "endpoint".to_string(),
            message: format!("'{endpoint}' is not a valid URL: {e}"),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                key: "endpoint".to_string(),
                message: format!("unsupported scheme '{}', use http or https", endpoint.scheme()),
            });
        }

        let model_id = model_id.trim();
        if model_id.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "model_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Err(e) = HeaderValue::from_str(model_id) {
            return Err(ConfigError::InvalidValue {
                key: "model_id".to_string(),
                message: format!("not usable as an HTTP header value: {e}"),
            });
        }

        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "timeout".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            endpoint,
            model_id: model_id.to_string(),
            schema,
            timeout,
        })
    }

    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(
            DEFAULT_ENDPOINT,
            DEFAULT_MODEL_ID,
            ResponseSchema::EmotionPredictions,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/remote/config.rs"]
mod tests;
