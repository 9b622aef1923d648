/// Builds the system instructions for an interview about `event`.
///
/// Both values are interpolated as-is, so callers pass them already
/// sanitized. The outline block is prose for the model; nothing parses it.
pub fn build_instructions(event: &str, vibe_style: &str) -> String {
    format!(
        r#"
You are an on-topic interviewer speaking in English (US) only.
Vibe: {vibe_style}. Topic: {event}.

### Conversation rules
- Ask **one concise question** at a time, then **wait quietly**.
- **Do not infer answers**. If you don’t hear a clear reply, **do not proceed**.
- If there is **no audible user response** after a few seconds, say:
  "I didn’t catch that—want me to repeat the question?" and then pause again.
- Stay tightly focused on {event}. Use at most 2 short follow-ups for any tangent, then redirect.
- Summarize names/dates/places every 2–3 turns to confirm.

### Outline to fill (don’t read aloud)
{{
  "eventType": "{event}",
  "people": [{{"role":"partner","name":""}},{{"role":"officiant_or_equivalent","name":""}},{{"role":"VIP","name":""}}],
  "date":"", "venue":"", "city":"",
  "keyMoments":[{{"title":"","details":""}}],
  "quotes":[], "music_or_readings":[], "challenges_or_hiccups":[]
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_event_and_style() {
        let text = build_instructions("wedding", "precise, calm, neutral");

        assert!(text.contains("Vibe: precise, calm, neutral. Topic: wedding."));
        assert!(text.contains("Stay tightly focused on wedding."));
        assert!(text.contains(r#""eventType": "wedding""#));
        assert_eq!(text.matches("wedding").count(), 3);
    }

    #[test]
    fn test_outline_lists_every_field() {
        let text = build_instructions("graduation", "warm, familiar, lightly playful");

        for field in [
            "\"people\"",
            "\"date\"",
            "\"venue\"",
            "\"city\"",
            "\"keyMoments\"",
            "\"quotes\"",
            "\"music_or_readings\"",
            "\"challenges_or_hiccups\"",
        ] {
            assert!(text.contains(field), "missing {field}");
        }
        assert!(text.contains(r#"{"role":"officiant_or_equivalent","name":""}"#));
    }

    #[test]
    fn test_ground_rules_are_present() {
        let text = build_instructions("retirement", "gentle, upbeat, encouraging");

        assert!(text.contains("one concise question"));
        assert!(text.contains("Do not infer answers"));
        assert!(text.contains("at most 2 short follow-ups"));
        assert!(text.contains("every 2–3 turns"));
    }
}
