//! Notification dispatch with segregated per-channel capabilities.
//!
//! Every channel gets its own contract, [`Sender<C>`], instantiated with a
//! channel marker type ([`Email`], [`Sms`], [`Push`]). A sender implements
//! exactly the contract of the channel it can deliver on and nothing else.
//! The [`Notifier`] is generic over that contract and forwards a payload to
//! whichever sender the caller hands it, so adding a channel means adding a
//! marker type and a sender, never touching the notifier.

mod bark_sender;
mod channel;
mod console_sender;
mod email_sender;
mod http;
mod notifier;
mod outcome;
mod payload;
mod sender;
mod sms_sender;

pub mod factory;

pub use bark_sender::BarkSender;
pub use channel::{Channel, Email, Push, Sms};
pub use console_sender::ConsoleSender;
pub use email_sender::HttpEmailSender;
pub use factory::SenderFactory;
pub use notifier::Notifier;
pub use outcome::Outcome;
pub use payload::{Payload, keys};
pub use sender::Sender;
pub use sms_sender::HttpSmsSender;
