pub mod error;
pub mod instructions;
pub mod preset;
pub mod proxy;
pub mod request;
pub mod sanitize;
pub mod upstream;
pub mod vibe;

pub use error::SessionError;
pub use openai_realtime_types as types;
pub use preset::SessionPreset;
pub use proxy::open_session;
pub use request::SessionRequest;
pub use upstream::{OpenAISessionClient, SessionCreator};
