//! Voice input use case: bridges the speech engine to the validator
//!
//! Consumes partial and final transcripts from an injected [`SpeechSource`],
//! validates each against the coordinate grammar, and holds the last valid
//! text as the current command. Sessions are one-shot: the first final
//! result or the first error tears the session down.

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::coordinate;

use super::ports::{AuthorizationStatus, SpeechError, SpeechEvent, SpeechSource};

/// Errors from the voice input use case
#[derive(Debug, Clone, Error)]
pub enum ListenError {
    #[error("Speech recognition permission not granted")]
    Unauthorized,

    #[error(transparent)]
    Speech(#[from] SpeechError),
}

/// Recognition bridge with a single logical owner; speech events are
/// consumed by one task, never concurrently.
pub struct VoiceInput<S: SpeechSource> {
    source: S,
    session: Option<mpsc::UnboundedReceiver<SpeechEvent>>,
    recognized: String,
    is_valid: bool,
    status: String,
}

impl<S: SpeechSource> VoiceInput<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            session: None,
            recognized: String::new(),
            is_valid: false,
            status: "idle".to_string(),
        }
    }

    /// The last valid recognized text. Persists until overwritten by a
    /// newer valid transcript or cleared.
    pub fn recognized_text(&self) -> &str {
        &self.recognized
    }

    pub fn is_input_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_listening(&self) -> bool {
        self.session.is_some()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The held command, when one has been recognized
    pub fn valid_text(&self) -> Option<String> {
        self.is_valid.then(|| self.recognized.clone())
    }

    pub fn clear(&mut self) {
        self.recognized.clear();
        self.is_valid = false;
    }

    /// Start a listening session. Refused when the platform denies
    /// recognition permission. Any prior session is torn down first.
    pub async fn start_listening(&mut self) -> Result<(), ListenError> {
        self.stop_listening().await;

        match self.source.request_authorization().await {
            AuthorizationStatus::Authorized => {}
            status => {
                debug!(?status, "speech recognition refused");
                self.status = "Speech recognition permission not granted".to_string();
                return Err(ListenError::Unauthorized);
            }
        }

        let events = self.source.start_session().await?;
        self.session = Some(events);
        self.status = "Listening...".to_string();
        Ok(())
    }

    /// Stop the listening session and release recognition resources.
    /// A no-op when no session is running.
    pub async fn stop_listening(&mut self) {
        if self.session.take().is_some() {
            self.source.stop_session().await;
        }
    }

    /// Consume one speech event. Returns `true` when the event ended the
    /// session (final result or error).
    pub async fn handle_event(&mut self, event: SpeechEvent) -> bool {
        match event {
            SpeechEvent::Transcript { text, is_final } => {
                let verdict = coordinate::validate(&text);
                if verdict.is_valid {
                    // Invalid partials are discarded; the last valid text
                    // stays on display until something valid replaces it
                    self.recognized = verdict.normalized_text;
                    self.is_valid = true;
                }
                if is_final {
                    self.stop_listening().await;
                    self.status = "Done listening".to_string();
                    true
                } else {
                    false
                }
            }
            SpeechEvent::Error(message) => {
                debug!(message, "recognition error, tearing session down");
                self.stop_listening().await;
                self.status = format!("Recognition error: {message}");
                true
            }
        }
    }

    /// Drive one full listening session to completion and return the held
    /// valid text, if any. Errors never propagate beyond the status string
    /// once the session has started.
    pub async fn run_session(&mut self) -> Result<Option<String>, ListenError> {
        self.start_listening().await?;

        loop {
            let event = {
                let Some(events) = self.session.as_mut() else {
                    break;
                };
                events.recv().await
            };

            match event {
                Some(event) => {
                    if self.handle_event(event).await {
                        break;
                    }
                }
                None => {
                    // Source hung up without a final result
                    self.stop_listening().await;
                    break;
                }
            }
        }

        Ok(self.valid_text())
    }
}
