use std::error::Error as StdError;

/// Failures while creating an upstream session.
///
/// Callers outside the crate treat both kinds the same and only show the
/// message.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The upstream answered with a non-success status. Holds its body text unchanged.
    #[error("OpenAI API error: {0}")]
    Upstream(String),
    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        SessionError::Transport(describe(&err))
    }
}

/// Joins an error and all of its sources, outermost first.
///
/// reqwest keeps the OS-level cause (e.g. a reset connection) in the source
/// chain, not in its own message.
pub(crate) fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
