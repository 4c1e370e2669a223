use serde_json::{Map, Value};

use crate::error::AnalysisError;
use crate::model::emotion::emotion_order;
use crate::model::scores::EmotionScores;
use crate::remote::ResponseSchema;

pub fn run_stage3(body: &str, schema: &ResponseSchema) -> Result<EmotionScores, AnalysisError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AnalysisError::malformed(format!("response is not valid JSON: {e}")))?;
    let emotion = schema.locate(&value)?;
    extract_scores(emotion)
}

/// Missing or null fields score 0.0; a present non-numeric field is a contract violation.
pub fn extract_scores(emotion: &Map<String, Value>) -> Result<EmotionScores, AnalysisError> {
    let mut scores = EmotionScores::default();
    for &e in emotion_order() {
        let value = match emotion.get(e.label()) {
            None | Some(Value::Null) => {
                tracing::debug!(emotion = %e, "emotion score missing, using 0.0");
                0.0
            }
            Some(v) => v.as_f64().ok_or_else(|| {
                AnalysisError::malformed(format!("score for '{}' is not a number: {}", e, v))
            })?,
        };
        scores.set(e, value);
    }
    Ok(scores)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_parse.rs"]
mod tests;
