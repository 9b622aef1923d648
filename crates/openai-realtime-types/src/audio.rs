mod turn_detection;
mod voice;

pub use turn_detection::{ServerVadTurnDetection, TurnDetection};
pub use voice::Voice;
