use crate::instructions::build_instructions;
use crate::sanitize::clean;
use crate::vibe::VibeStyle;

pub const DEFAULT_EVENT: &str = "chosen life event";
pub const DEFAULT_VIBE: &str = "old_friend";

/// The sanitized inputs of one `/session` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub event: String,
    pub vibe: String,
}

impl SessionRequest {
    pub fn new(event: Option<&str>, vibe: Option<&str>) -> Self {
        Self {
            event: clean(event, DEFAULT_EVENT),
            vibe: clean(vibe, DEFAULT_VIBE),
        }
    }

    pub fn vibe_style(&self) -> VibeStyle {
        VibeStyle::resolve(&self.vibe)
    }

    pub fn instructions(&self) -> String {
        build_instructions(&self.event, self.vibe_style().phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_given() {
        let request = SessionRequest::new(None, None);

        assert_eq!(request.event, "chosen life event");
        assert_eq!(request.vibe, "old_friend");
        assert_eq!(request.vibe_style(), VibeStyle::OldFriend);
        assert!(request.instructions().contains("chosen life event"));
        assert!(request.instructions().contains("warm, familiar, lightly playful"));
    }

    #[test]
    fn test_sanitizes_before_resolving() {
        let request = SessionRequest::new(Some("wedding!!"), Some("documentarian"));

        assert_eq!(request.event, "wedding");
        assert_eq!(request.vibe_style(), VibeStyle::Documentarian);
        assert!(request.instructions().contains("precise, calm, neutral"));
        assert!(!request.instructions().contains("!!"));
    }

    #[test]
    fn test_punctuation_around_a_known_vibe_still_matches() {
        let request = SessionRequest::new(Some(""), Some("coach!"));

        assert_eq!(request.event, "chosen life event");
        assert_eq!(request.vibe, "coach");
        assert_eq!(request.vibe_style(), VibeStyle::Coach);
    }
}
