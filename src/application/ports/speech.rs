//! Speech recognition port interface

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Speech recognition errors
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("Speech recognition is not authorized")]
    Unauthorized,

    #[error("Failed to start recognition session: {0}")]
    SessionFailed(String),
}

/// Authorization status reported by the platform speech engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined,
    Authorized,
    Denied,
    Restricted,
}

/// One recognition callback from the engine: a partial or final transcript,
/// or a mid-session failure.
#[derive(Debug, Clone)]
pub enum SpeechEvent {
    Transcript { text: String, is_final: bool },
    Error(String),
}

/// Port for the platform speech engine. The engine is a black box that
/// produces text plus a finality flag and an error signal.
#[async_trait]
pub trait SpeechSource: Send + Sync {
    /// Ask the platform for recognition permission.
    async fn request_authorization(&self) -> AuthorizationStatus;

    /// Start a listening session; recognition events arrive on the
    /// returned receiver.
    async fn start_session(
        &self,
    ) -> Result<mpsc::UnboundedReceiver<SpeechEvent>, SpeechError>;

    /// Release audio and recognition resources. Must be a no-op when no
    /// session is running.
    async fn stop_session(&self);
}
