/// Conversational tone selected by the `vibe` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibeStyle {
    Documentarian,
    Coach,
    /// Used for `old_friend` and for any label that is not recognized.
    OldFriend,
}

impl VibeStyle {
    /// Resolves a sanitized vibe label. Matching is exact and case-sensitive.
    pub fn resolve(vibe: &str) -> Self {
        match vibe {
            "documentarian" => VibeStyle::Documentarian,
            "coach" => VibeStyle::Coach,
            _ => VibeStyle::OldFriend,
        }
    }

    /// The phrase injected into the instructions.
    pub fn phrase(self) -> &'static str {
        match self {
            VibeStyle::Documentarian => "precise, calm, neutral",
            VibeStyle::Coach => "gentle, upbeat, encouraging",
            VibeStyle::OldFriend => "warm, familiar, lightly playful",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vibes() {
        assert_eq!(VibeStyle::resolve("documentarian").phrase(), "precise, calm, neutral");
        assert_eq!(VibeStyle::resolve("coach").phrase(), "gentle, upbeat, encouraging");
        assert_eq!(
            VibeStyle::resolve("old_friend").phrase(),
            "warm, familiar, lightly playful"
        );
    }

    #[test]
    fn test_everything_else_is_old_friend() {
        for vibe in ["", "Coach", "documentarian ", "pirate", "coach-ish"] {
            assert_eq!(VibeStyle::resolve(vibe), VibeStyle::OldFriend, "vibe {vibe:?}");
        }
    }
}
