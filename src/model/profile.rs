use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::model::emotion::{Emotion, emotion_order};
use crate::model::scores::EmotionScores;
use crate::pipeline::stage4_dominant::select_dominant;

/// Scores together with the emotion derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionProfile {
    scores: EmotionScores,
    dominant: Emotion,
}

impl EmotionProfile {
    pub fn from_scores(scores: EmotionScores) -> Self {
        let dominant = select_dominant(&scores);
        Self { scores, dominant }
    }

    pub fn scores(&self) -> &EmotionScores {
        &self.scores
    }

    pub fn dominant(&self) -> Emotion {
        self.dominant
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoResultReason {
    BlankInput,
    RemoteRejected,
}

impl NoResultReason {
    pub fn describe(self) -> &'static str {
        match self {
            NoResultReason::BlankInput => "input text is blank",
            NoResultReason::RemoteRejected => "remote service rejected the text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisResult {
    Scored(EmotionProfile),
    NoResult(NoResultReason),
}

impl AnalysisResult {
    pub fn profile(&self) -> Option<&EmotionProfile> {
        match self {
            AnalysisResult::Scored(profile) => Some(profile),
            AnalysisResult::NoResult(_) => None,
        }
    }

    pub fn dominant(&self) -> Option<Emotion> {
        self.profile().map(EmotionProfile::dominant)
    }
}

// Flat `{anger, disgust, fear, joy, sadness, dominant_emotion}` object; all null without a result.
impl Serialize for EmotionProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        for &emotion in emotion_order() {
            map.serialize_entry(emotion.label(), &self.scores.get(emotion))?;
        }
        map.serialize_entry("dominant_emotion", &self.dominant)?;
        map.end()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnalysisResult::Scored(profile) => profile.serialize(serializer),
            AnalysisResult::NoResult(_) => {
                let mut map = serializer.serialize_map(Some(6))?;
                for &emotion in emotion_order() {
                    map.serialize_entry(emotion.label(), &Option::<f64>::None)?;
                }
                map.serialize_entry("dominant_emotion", &Option::<Emotion>::None)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
