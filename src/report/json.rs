use crate::model::profile::AnalysisResult;

pub fn render_result_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
