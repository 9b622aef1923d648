//! Wire types for the OpenAI realtime session-creation endpoint.

pub mod audio;
pub mod session;

pub use audio::{ServerVadTurnDetection, TurnDetection, Voice};
pub use session::{SessionConfig, SessionConfigurator};
