/// Text that passed the blank check. Carries the caller's text untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedText(String);

impl ValidatedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    BlankInput,
}

pub fn validate(text: Option<&str>) -> Result<ValidatedText, Rejected> {
    match text {
        Some(raw) if !raw.trim().is_empty() => Ok(ValidatedText(raw.to_string())),
        _ => Err(Rejected::BlankInput),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
