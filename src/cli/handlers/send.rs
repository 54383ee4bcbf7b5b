//! Send command handler
//!
//! Composition root for a single notification: builds the payload, resolves
//! the configured sender for the channel and hands both to the notifier.

use crate::cli::parser::{ChannelKind, SendArgs};
use crate::config::Settings;
use crate::error::AppResult;
use crate::notifications::{Channel, Notifier, Outcome, Payload, Sender, SenderFactory, keys};

/// Handler for the send command
pub struct SendCommandHandler {
    config: Settings,
    notifier: Notifier,
}

impl SendCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self {
            config,
            notifier: Notifier::new(),
        }
    }

    /// Deliver one notification as described by `args`
    ///
    /// # Errors
    /// - `Validation` for invalid payloads or sender configuration
    /// - `ContractViolation` when the configured provider serves another channel
    /// - `Transport` when delivery fails
    pub async fn execute(&self, args: &SendArgs) -> AppResult<Outcome> {
        let payload = build_payload(args);
        let factory = SenderFactory::new(&self.config.notifications);

        let outcome = match args.channel {
            ChannelKind::Email => self.dispatch(&payload, &*factory.email()?).await?,
            ChannelKind::Sms => self.dispatch(&payload, &*factory.sms()?).await?,
            ChannelKind::Push => self.dispatch(&payload, &*factory.push()?).await?,
        };

        tracing::info!(
            channel = %outcome.channel,
            provider = %outcome.provider,
            message_id = ?outcome.message_id,
            duration_ms = outcome.duration_ms,
            "notification delivered"
        );

        Ok(outcome)
    }

    async fn dispatch<C: Channel>(
        &self,
        payload: &Payload,
        sender: &dyn Sender<C>,
    ) -> AppResult<Outcome> {
        sender.validate_config().await?;
        self.notifier.notify(payload, sender).await
    }
}

/// Payload from CLI arguments; `--field` entries never override named flags
pub fn build_payload(args: &SendArgs) -> Payload {
    let mut payload: Payload = args.fields.iter().cloned().collect();

    payload.insert(keys::BODY, args.body.clone());

    let named = [
        (keys::TO, &args.to),
        (keys::SUBJECT, &args.subject),
        (keys::TITLE, &args.title),
    ];
    for (key, value) in named {
        if let Some(value) = value {
            payload.insert(key, value.clone());
        }
    }

    payload
}
