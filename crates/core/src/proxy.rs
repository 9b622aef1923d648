use crate::error::SessionError;
use crate::preset::SessionPreset;
use crate::request::SessionRequest;
use crate::upstream::SessionCreator;
use serde_json::Value;

/// Runs one `/session` call: builds the interviewer session body for
/// `request` and hands it to `creator`. Nothing is retried.
pub async fn open_session(
    creator: &dyn SessionCreator,
    preset: &SessionPreset,
    request: &SessionRequest,
) -> Result<Value, SessionError> {
    let style = request.vibe_style();
    tracing::info!(
        life_event = %request.event,
        vibe = %request.vibe,
        style = style.phrase(),
        "creating realtime session"
    );

    let config = preset.session_config(&request.instructions());

    match creator.create_session(&config).await {
        Ok(session) => Ok(session),
        Err(e) => {
            tracing::error!("Error creating session: {}", e);
            Err(e)
        }
    }
}
