use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{AnalysisError, ConfigError};

/// Where the per-document emotion object sits in a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSchema {
    /// `documentSentiment.emotion`
    DocumentSentiment,
    /// `emotionPredictions[0].emotion`
    EmotionPredictions,
    /// Any RFC 6901 pointer, e.g. `/result/emotion`.
    Pointer(String),
}

impl ResponseSchema {
    pub fn locate<'a>(&self, body: &'a Value) -> Result<&'a Map<String, Value>, AnalysisError> {
        match self {
            ResponseSchema::DocumentSentiment => {
                let document = body
                    .get("documentSentiment")
                    .ok_or_else(|| AnalysisError::malformed("missing 'documentSentiment'"))?;
                let emotion = document.get("emotion").ok_or_else(|| {
                    AnalysisError::malformed("missing 'documentSentiment.emotion'")
                })?;
                as_emotion_object(emotion, "documentSentiment.emotion")
            }
            ResponseSchema::EmotionPredictions => {
                let predictions = body
                    .get("emotionPredictions")
                    .ok_or_else(|| AnalysisError::malformed("missing 'emotionPredictions'"))?
                    .as_array()
                    .ok_or_else(|| AnalysisError::malformed("'emotionPredictions' is not a list"))?;
                let first = predictions
                    .first()
                    .ok_or_else(|| AnalysisError::malformed("'emotionPredictions' is empty"))?;
                let emotion = first.get("emotion").ok_or_else(|| {
                    AnalysisError::malformed("missing 'emotionPredictions[0].emotion'")
                })?;
                as_emotion_object(emotion, "emotionPredictions[0].emotion")
            }
            ResponseSchema::Pointer(pointer) => {
                let emotion = body.pointer(pointer).ok_or_else(|| {
                    AnalysisError::malformed(format!("nothing at pointer '{pointer}'"))
                })?;
                as_emotion_object(emotion, pointer)
            }
        }
    }
}

fn as_emotion_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, AnalysisError> {
    value
        .as_object()
        .ok_or_else(|| AnalysisError::malformed(format!("'{path}' is not an object")))
}

impl FromStr for ResponseSchema {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document-sentiment" => Ok(ResponseSchema::DocumentSentiment),
            "emotion-predictions" => Ok(ResponseSchema::EmotionPredictions),
            other => match other.strip_prefix("pointer:") {
                Some(pointer) if pointer.starts_with('/') => {
                    Ok(ResponseSchema::Pointer(pointer.to_string()))
                }
                Some(pointer) => Err(ConfigError::InvalidValue {
                    key: "schema".to_string(),
                    message: format!("JSON pointer '{pointer}' must start with '/'"),
                }),
                None => Err(ConfigError::InvalidValue {
                    key: "schema".to_string(),
                    message: format!(
                        "unknown schema '{other}' (use document-sentiment|emotion-predictions|pointer:/path)"
                    ),
                }),
            },
        }
    }
}

impl fmt::Display for ResponseSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseSchema::DocumentSentiment => f.write_str("document-sentiment"),
            ResponseSchema::EmotionPredictions => f.write_str("emotion-predictions"),
            ResponseSchema::Pointer(pointer) => write!(f, "pointer:{pointer}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/remote/schema.rs"]
mod tests;
