//! The per-channel sending capability.

use super::channel::Channel;
use super::outcome::Outcome;
use super::payload::Payload;
use crate::error::AppResult;
use async_trait::async_trait;

/// Capability to send a payload on channel `C`
///
/// `Sender<Email>` and `Sender<Sms>` are separate contracts: an email sender
/// implements the first and is never asked for SMS behaviour. Uses
/// `async_trait` so senders can be boxed as `dyn Sender<C>` when chosen from
/// configuration.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct PagerSender;
///
/// #[async_trait]
/// impl Sender<Pager> for PagerSender {
///     async fn send(&self, payload: &Payload) -> AppResult<Outcome> {
///         // Implementation here
///     }
///
///     fn name(&self) -> &'static str {
///         "pager"
///     }
/// }
/// ```
#[async_trait]
pub trait Sender<C: Channel>: Send + Sync {
    /// Deliver `payload`
    ///
    /// # Returns
    /// An `Outcome` on delivery; `AppError::Transport` when the transport is
    /// unreachable or rejects the payload.
    async fn send(&self, payload: &Payload) -> AppResult<Outcome>;

    /// Provider name for logging (e.g. "http", "bark")
    fn name(&self) -> &'static str;

    /// Check provider configuration before use (default no-op)
    async fn validate_config(&self) -> AppResult<()> {
        Ok(())
    }
}
