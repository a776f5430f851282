//! Stdin speech adapter
//!
//! Stands in for the platform speech engine: one line read from standard
//! input becomes a single final transcript. The session holds no audio
//! resources, so stopping has nothing to release.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::application::ports::{AuthorizationStatus, SpeechError, SpeechEvent, SpeechSource};

pub struct StdinSpeech;

impl StdinSpeech {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSource for StdinSpeech {
    async fn request_authorization(&self) -> AuthorizationStatus {
        AuthorizationStatus::Authorized
    }

    async fn start_session(
        &self,
    ) -> Result<mpsc::UnboundedReceiver<SpeechEvent>, SpeechError> {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let event = match lines.next_line().await {
                Ok(Some(line)) => SpeechEvent::Transcript {
                    text: line.trim().to_string(),
                    is_final: true,
                },
                Ok(None) => SpeechEvent::Error("input closed".to_string()),
                Err(e) => SpeechEvent::Error(e.to_string()),
            };
            let _ = tx.send(event);
        });
        Ok(rx)
    }

    async fn stop_session(&self) {}
}
