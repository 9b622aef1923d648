#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum TurnDetection {
    #[serde(rename = "server_vad")]
    ServerVad(ServerVadTurnDetection),
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ServerVadTurnDetection {
    /// Activation threshold for VAD(0.0 to 1.0).
    threshold: f64,

    /// Amount of audio to include before speech starts, in milliseconds
    prefix_padding_ms: u32,

    /// Duration of silence to detect speech stop, in milliseconds
    silence_duration_ms: u32,

    /// Whether the server answers on its own once speech stops.
    create_response: bool,

    /// Whether new user speech cuts off a response that is still playing.
    interrupt_response: bool,
}

impl Default for TurnDetection {
    fn default() -> Self {
        Self::ServerVad(ServerVadTurnDetection::default())
    }
}

impl Default for ServerVadTurnDetection {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerVadTurnDetection {
    /// Upstream defaults. `const` so presets can be declared as constants.
    pub const fn new() -> Self {
        Self {
            threshold: 0.5,
            prefix_padding_ms: 300,
            silence_duration_ms: 200,
            create_response: true,
            interrupt_response: true,
        }
    }

    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub const fn with_prefix_padding_ms(mut self, prefix_padding_ms: u32) -> Self {
        self.prefix_padding_ms = prefix_padding_ms;
        self
    }

    pub const fn with_silence_duration_ms(mut self, silence_duration_ms: u32) -> Self {
        self.silence_duration_ms = silence_duration_ms;
        self
    }

    pub const fn with_create_response(mut self, create_response: bool) -> Self {
        self.create_response = create_response;
        self
    }

    pub const fn with_interrupt_response(mut self, interrupt_response: bool) -> Self {
        self.interrupt_response = interrupt_response;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn prefix_padding_ms(&self) -> u32 {
        self.prefix_padding_ms
    }

    pub fn silence_duration_ms(&self) -> u32 {
        self.silence_duration_ms
    }

    pub fn create_response(&self) -> bool {
        self.create_response
    }

    pub fn interrupt_response(&self) -> bool {
        self.interrupt_response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_vad_is_tagged_with_type() {
        let turn_detection = TurnDetection::ServerVad(
            ServerVadTurnDetection::new()
                .with_threshold(0.75)
                .with_prefix_padding_ms(400)
                .with_silence_duration_ms(650)
                .with_interrupt_response(false),
        );

        let json = serde_json::to_value(&turn_detection).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "server_vad",
                "threshold": 0.75,
                "prefix_padding_ms": 400,
                "silence_duration_ms": 650,
                "create_response": true,
                "interrupt_response": false
            })
        );
    }
}
