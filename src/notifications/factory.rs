//! Builds the configured sender for each channel.
//!
//! This is wiring, not dispatch: the notifier never sees provider names.

use super::bark_sender::BarkSender;
use super::channel::{Channel, Email, Push, Sms};
use super::console_sender::ConsoleSender;
use super::email_sender::HttpEmailSender;
use super::sender::Sender;
use super::sms_sender::HttpSmsSender;
use crate::config::NotificationsConfig;
use crate::error::{AppError, AppResult};

/// Channels each provider implements
///
/// Also the list of provider names accepted when configuration is loaded.
pub const PROVIDER_CHANNELS: &[(&str, &[&str])] = &[
    ("http", &[Email::NAME, Sms::NAME]),
    ("bark", &[Push::NAME]),
    ("console", &[Email::NAME, Sms::NAME, Push::NAME]),
];

/// Resolves `notifications.<channel>.provider` to a boxed sender
///
/// With `dry_run` set every channel resolves to a [`ConsoleSender`].
#[derive(Debug, Clone, Copy)]
pub struct SenderFactory<'a> {
    config: &'a NotificationsConfig,
}

impl<'a> SenderFactory<'a> {
    pub fn new(config: &'a NotificationsConfig) -> Self {
        Self { config }
    }

    pub fn email(&self) -> AppResult<Box<dyn Sender<Email>>> {
        if self.config.dry_run {
            return Ok(Box::new(ConsoleSender::<Email>::new()));
        }

        match self.config.email.provider.as_str() {
            "http" => Ok(Box::new(HttpEmailSender::new(self.config.email.clone()))),
            "console" => Ok(Box::new(ConsoleSender::<Email>::new())),
            other => Err(unsupported::<Email>(other)),
        }
    }

    pub fn sms(&self) -> AppResult<Box<dyn Sender<Sms>>> {
        if self.config.dry_run {
            return Ok(Box::new(ConsoleSender::<Sms>::new()));
        }

        match self.config.sms.provider.as_str() {
            "http" => Ok(Box::new(HttpSmsSender::new(self.config.sms.clone()))),
            "console" => Ok(Box::new(ConsoleSender::<Sms>::new())),
            other => Err(unsupported::<Sms>(other)),
        }
    }

    pub fn push(&self) -> AppResult<Box<dyn Sender<Push>>> {
        if self.config.dry_run {
            return Ok(Box::new(ConsoleSender::<Push>::new()));
        }

        match self.config.push.provider.as_str() {
            "bark" => Ok(Box::new(BarkSender::new(self.config.push.clone()))),
            "console" => Ok(Box::new(ConsoleSender::<Push>::new())),
            other => Err(unsupported::<Push>(other)),
        }
    }
}

/// Error for a provider that cannot serve channel `C`
///
/// A known provider bound to other channels is a contract violation; an
/// unknown name is plain bad input.
fn unsupported<C: Channel>(provider: &str) -> AppError {
    match PROVIDER_CHANNELS.iter().find(|(name, _)| *name == provider) {
        Some((name, channels)) => AppError::ContractViolation {
            expected: C::NAME.to_string(),
            actual: format!("{} ({})", name, channels.join(", ")),
        },
        None => AppError::validation(
            format!("notifications.{}.provider", C::NAME),
            format!("Unknown provider '{}'", provider),
        ),
    }
}
