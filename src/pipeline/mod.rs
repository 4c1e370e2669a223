pub mod stage1_validate;
pub mod stage2_request;
pub mod stage3_parse;
pub mod stage4_dominant;
pub mod stage5_report;

use reqwest::Client;

use crate::error::{AnalysisError, ConfigError};
use crate::model::profile::{AnalysisResult, EmotionProfile, NoResultReason};
use crate::pipeline::stage1_validate::{Rejected, ValidatedText, validate};
use crate::pipeline::stage2_request::{RemoteReply, run_stage2};
use crate::pipeline::stage3_parse::run_stage3;
use crate::remote::AnalyzerConfig;

/// Holds only configuration and a pooled HTTP client; safe to share across tasks.
#[derive(Debug, Clone)]
pub struct EmotionAnalyzer {
    client: Client,
    config: AnalyzerConfig,
}

impl EmotionAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// One outbound call. A 400 from the service is a no-result, not an error.
    pub async fn analyze(&self, text: &ValidatedText) -> Result<AnalysisResult, AnalysisError> {
        let body = match run_stage2(&self.client, &self.config, text).await? {
            RemoteReply::Rejected => {
                return Ok(AnalysisResult::NoResult(NoResultReason::RemoteRejected));
            }
            RemoteReply::Body(body) => body,
        };

        let scores = run_stage3(&body, &self.config.schema).inspect_err(|e| {
            tracing::warn!(
                schema = %self.config.schema,
                model_id = %self.config.model_id,
                error = %e,
                "emotion service response did not match the expected schema"
            );
        })?;

        let profile = EmotionProfile::from_scores(scores);
        tracing::debug!(dominant = %profile.dominant(), "emotion analysis complete");
        Ok(AnalysisResult::Scored(profile))
    }
}

/// Validate, then analyze. Blank or absent text never reaches the network.
pub async fn run_pipeline(
    analyzer: &EmotionAnalyzer,
    text: Option<&str>,
) -> Result<AnalysisResult, AnalysisError> {
    match validate(text) {
        Ok(validated) => analyzer.analyze(&validated).await,
        Err(Rejected::BlankInput) => {
            tracing::debug!("blank input, skipping emotion service");
            Ok(AnalysisResult::NoResult(NoResultReason::BlankInput))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
