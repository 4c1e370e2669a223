use crate::model::profile::EmotionProfile;
use crate::report::format_score;

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";
pub const UNAVAILABLE_MESSAGE: &str =
    "Emotion analysis is currently unavailable. Please try again later.";

pub fn render_summary_text(profile: &EmotionProfile) -> String {
    let scores = profile.scores();
    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        format_score(scores.anger),
        format_score(scores.disgust),
        format_score(scores.fear),
        format_score(scores.joy),
        format_score(scores.sadness),
        profile.dominant()
    )
}
