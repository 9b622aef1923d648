use openai_realtime_types::{ServerVadTurnDetection, SessionConfig, TurnDetection, Voice};

/// Fixed upstream parameters for a session, kept as data so a tuning change
/// is a new constant rather than a second handler.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPreset {
    pub model: &'static str,
    pub voice: Voice,
    pub temperature: f64,
    pub turn_detection: ServerVadTurnDetection,
}

impl SessionPreset {
    /// Interviewer tuning: a higher VAD threshold to ignore small noises,
    /// a longer silence before replying, and no barge-in so the model
    /// finishes its thought before listening again.
    pub const INTERVIEWER: SessionPreset = SessionPreset {
        model: "gpt-4o-realtime-preview",
        voice: Voice::Verse,
        // Lowest temperature the realtime endpoint accepts.
        temperature: 0.6,
        turn_detection: ServerVadTurnDetection::new()
            .with_threshold(0.75)
            .with_prefix_padding_ms(400)
            .with_silence_duration_ms(650)
            .with_create_response(true)
            .with_interrupt_response(false),
    };

    /// Builds the outbound body for this preset with the given instructions.
    pub fn session_config(&self, instructions: &str) -> SessionConfig {
        SessionConfig::builder()
            .with_model(self.model)
            .with_voice(self.voice.clone())
            .with_temperature(self.temperature)
            .with_turn_detection_enable(TurnDetection::ServerVad(self.turn_detection))
            .with_instructions(instructions)
            .build()
    }
}

impl Default for SessionPreset {
    fn default() -> Self {
        Self::INTERVIEWER
    }
}
