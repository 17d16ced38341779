//! Driven port for the language-model completion provider.
//!
//! Two capabilities share the dependency but differ on the missing-credential
//! contract: creation-time advice degrades to `None`, interactive Q&A
//! surfaces the failure.

use async_trait::async_trait;

use crate::domain::advice::{AdvicePrompt, QuestionPrompt};

/// Errors surfaced while requesting a completion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdviceSourceError {
    /// No API credential is configured.
    #[error("language-model credential is not configured")]
    MissingCredential,

    /// Network transport failed before a response arrived.
    #[error("completion transport failed: {message}")]
    Transport { message: String },

    /// The provider answered with a non-success status.
    #[error("completion upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("completion response decode failed: {message}")]
    Decode { message: String },
}

impl AdviceSourceError {
    /// Create a transport error with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a status error for a non-success upstream response.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the external completion provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdviceSource: Send + Sync {
    /// Request creation-time travel advice.
    ///
    /// Returns `Ok(None)` when no credential is configured: advice is
    /// optional and must never fail the creation flow on its own.
    async fn travel_advice(&self, prompt: &AdvicePrompt)
    -> Result<Option<String>, AdviceSourceError>;

    /// Answer a free-text question against a weather context.
    ///
    /// Unlike [`AdviceSource::travel_advice`] this path requires the
    /// credential and fails with [`AdviceSourceError::MissingCredential`]
    /// without one. `Ok(None)` means the provider returned an empty result.
    async fn answer(&self, prompt: &QuestionPrompt) -> Result<Option<String>, AdviceSourceError>;
}

/// Fixture advice source with a switchable credential.
///
/// With a "credential" it produces canned completions; without one it
/// mirrors the real adapter's contract (advice degrades to `None`, answering
/// fails).
#[derive(Debug, Clone, Copy)]
pub struct FixtureAdviceSource {
    credential: bool,
}

impl FixtureAdviceSource {
    /// Fixture that behaves as if a credential were configured.
    pub fn new() -> Self {
        Self { credential: true }
    }

    /// Fixture that behaves as if no credential were configured.
    pub fn without_credential() -> Self {
        Self { credential: false }
    }
}

impl Default for FixtureAdviceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdviceSource for FixtureAdviceSource {
    async fn travel_advice(
        &self,
        _prompt: &AdvicePrompt,
    ) -> Result<Option<String>, AdviceSourceError> {
        if !self.credential {
            return Ok(None);
        }
        Ok(Some(
            "- Mild and dry: a light jacket is enough.".to_owned(),
        ))
    }

    async fn answer(&self, _prompt: &QuestionPrompt) -> Result<Option<String>, AdviceSourceError> {
        if !self.credential {
            return Err(AdviceSourceError::MissingCredential);
        }
        Ok(Some("The first day looks warmer.".to_owned()))
    }
}
