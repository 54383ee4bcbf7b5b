//! Channel marker types.
//!
//! Markers are uninhabited; they only exist at the type level to give each
//! channel a distinct `Sender<C>` contract.

/// A delivery channel a sender can be bound to
pub trait Channel: Send + Sync + 'static {
    /// Stable lowercase identifier used in logs, outcomes and config keys
    const NAME: &'static str;
}

/// Email delivery
#[derive(Debug)]
pub enum Email {}

/// SMS delivery
#[derive(Debug)]
pub enum Sms {}

/// Mobile push delivery
#[derive(Debug)]
pub enum Push {}

impl Channel for Email {
    const NAME: &'static str = "email";
}

impl Channel for Sms {
    const NAME: &'static str = "sms";
}

impl Channel for Push {
    const NAME: &'static str = "push";
}
