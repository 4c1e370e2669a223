use crate::model::emotion::{Emotion, emotion_order};
use crate::model::scores::EmotionScores;

pub fn select_dominant(scores: &EmotionScores) -> Emotion {
    let order = emotion_order();
    let mut best = order[0];
    let mut best_score = scores.get(best);
    // strict comparison keeps the earliest category on ties
    for &emotion in &order[1..] {
        let score = scores.get(emotion);
        if score > best_score {
            best = emotion;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_dominant.rs"]
mod tests;
