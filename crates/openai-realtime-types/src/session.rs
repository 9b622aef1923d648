use crate::audio::{TurnDetection, Voice};

/// Body of a `POST /v1/realtime/sessions` request.
///
/// Field order matches the order the fields are written to the wire.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    /// The realtime model used for the session.
    /// ex: "gpt-4o-realtime-preview"
    model: String,

    /// The voice the model uses to respond. Cannot be changed once the model has responded with audio at least once.
    voice: Voice,

    /// Sampling temperature for the model. The upstream accepts [0.6, 1.2].
    temperature: f64,

    /// Configuration for turn detection. Serialized as null to turn it off.
    turn_detection: Option<TurnDetection>,

    /// The default system instructions prepended to model calls.
    instructions: String,
}

impl SessionConfig {
    pub fn builder() -> SessionConfigurator {
        SessionConfigurator::new()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn turn_detection(&self) -> Option<&TurnDetection> {
        self.turn_detection.as_ref()
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

pub struct SessionConfigurator {
    session: SessionConfig,
}

impl Default for SessionConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfigurator {
    pub fn new() -> Self {
        Self {
            session: SessionConfig {
                model: "gpt-4o-realtime-preview".to_string(),
                voice: Voice::Alloy,
                temperature: 0.8,
                turn_detection: Some(TurnDetection::default()),
                instructions: String::new(),
            },
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.session.model = model.to_string();
        self
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.session.voice = voice;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.session.temperature = temperature;
        self
    }

    pub fn with_turn_detection_enable(mut self, turn_detection: TurnDetection) -> Self {
        self.session.turn_detection = Some(turn_detection);
        self
    }

    pub fn with_turn_detection_disable(mut self) -> Self {
        self.session.turn_detection = None;
        self
    }

    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.session.instructions = instructions.to_string();
        self
    }

    pub fn build(self) -> SessionConfig {
        self.session
    }
}
