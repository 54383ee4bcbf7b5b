//! Dispatch behaviour of the notifier against stub senders.

use async_trait::async_trait;
use isp_notify::error::{AppError, AppResult, TransportError};
use isp_notify::notifications::{
    BarkSender, Channel, ConsoleSender, Email, HttpEmailSender, HttpSmsSender, Notifier, Outcome,
    Payload, Push, Sender, Sms,
};
use proptest::prelude::*;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

// ============================================================================
// Stub senders
// ============================================================================

/// Records every payload and answers with a fixed outcome
struct RecordingSender<C> {
    received: Mutex<Vec<Payload>>,
    reply: Outcome,
    _channel: PhantomData<fn() -> C>,
}

impl<C: Channel> RecordingSender<C> {
    fn new() -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            reply: Outcome::new(C::NAME, "recording").with_message_id(Some("stub-1".to_string())),
            _channel: PhantomData,
        }
    }

    fn received(&self) -> Vec<Payload> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl<C: Channel> Sender<C> for RecordingSender<C> {
    async fn send(&self, payload: &Payload) -> AppResult<Outcome> {
        self.received.lock().unwrap().push(payload.clone());
        Ok(self.reply.clone())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// SMS sender whose transport always fails
struct FailingSmsSender {
    error: TransportError,
    calls: AtomicUsize,
}

#[async_trait]
impl Sender<Sms> for FailingSmsSender {
    async fn send(&self, _payload: &Payload) -> AppResult<Outcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone().into())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A channel the library knows nothing about
#[derive(Debug)]
enum Pager {}

impl Channel for Pager {
    const NAME: &'static str = "pager";
}

struct PagerSender {
    pages: AtomicUsize,
}

#[async_trait]
impl Sender<Pager> for PagerSender {
    async fn send(&self, payload: &Payload) -> AppResult<Outcome> {
        payload.require_str("body")?;
        self.pages.fetch_add(1, Ordering::SeqCst);
        Ok(Outcome::new(Pager::NAME, self.name()))
    }

    fn name(&self) -> &'static str {
        "pager"
    }
}

/// Never completes; flags when its future is dropped
struct HangingSender {
    dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Sender<Email> for HangingSender {
    async fn send(&self, _payload: &Payload) -> AppResult<Outcome> {
        let _flag = DropFlag(self.dropped.clone());
        std::future::pending::<()>().await;
        unreachable!("pending never resolves")
    }

    fn name(&self) -> &'static str {
        "hanging"
    }
}

fn email_payload() -> Payload {
    Payload::new()
        .with("to", "a@b.com")
        .with("subject", "Hi")
        .with("body", "Hello")
}

// ============================================================================
// Capability check
// ============================================================================

/// `ImplCheck::<T, C>::IMPLEMENTS` resolves to the inherent constant only when
/// `T: Sender<C>`; otherwise the trait default (`false`) is picked.
#[allow(dead_code)]
struct ImplCheck<T: ?Sized, C>(PhantomData<T>, PhantomData<C>);

trait Fallback {
    const IMPLEMENTS: bool = false;
}

impl<T: ?Sized, C> Fallback for ImplCheck<T, C> {}

#[allow(dead_code)]
impl<T: ?Sized + Sender<C>, C: Channel> ImplCheck<T, C> {
    const IMPLEMENTS: bool = true;
}

macro_rules! implements {
    ($sender:ty, $channel:ty) => {
        ImplCheck::<$sender, $channel>::IMPLEMENTS
    };
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_email_notify_records_exactly_one_payload() {
    let sender = RecordingSender::<Email>::new();
    let payload = email_payload();

    let outcome = Notifier::new().notify(&payload, &sender).await.unwrap();

    assert_eq!(sender.received(), vec![payload]);
    assert_eq!(outcome, sender.reply);
    assert_eq!(outcome.channel, "email");
}

#[tokio::test]
async fn test_failing_sms_error_surfaces_unaltered() {
    let error = TransportError::new("sms", "failing", "carrier rejected number").with_status(422);
    let sender = FailingSmsSender {
        error: error.clone(),
        calls: AtomicUsize::new(0),
    };
    let payload = Payload::new().with("to", "+15551234567").with("body", "Code 1234");

    let result = Notifier::new().notify(&payload, &sender).await;

    match result {
        Err(AppError::Transport(surfaced)) => assert_eq!(surfaced, error),
        other => panic!("Expected the sender's TransportError, got {other:?}"),
    }
    assert_eq!(sender.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_repeated_notify_is_not_deduplicated() {
    let sender = RecordingSender::<Sms>::new();
    let payload = Payload::new().with("to", "+15551234567").with("body", "Hello");
    let notifier = Notifier::new();

    notifier.notify(&payload, &sender).await.unwrap();
    notifier.notify(&payload, &sender).await.unwrap();

    assert_eq!(sender.received(), vec![payload.clone(), payload]);
}

#[tokio::test]
async fn test_new_channel_dispatches_through_notifier() {
    let sender = PagerSender {
        pages: AtomicUsize::new(0),
    };
    let payload = Payload::new().with("body", "disk full on db-1");

    let outcome = Notifier::new().notify(&payload, &sender).await.unwrap();

    assert_eq!(outcome.channel, "pager");
    assert_eq!(outcome.provider, "pager");
    assert_eq!(sender.pages.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_new_channel_sender_errors_pass_through() {
    let sender = PagerSender {
        pages: AtomicUsize::new(0),
    };

    let result = Notifier::new().notify(&Payload::new(), &sender).await;

    assert!(matches!(
        result,
        Err(AppError::Validation { ref field, .. }) if field == "body"
    ));
    assert_eq!(sender.pages.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_boxed_sender_dispatch() {
    let sender: Box<dyn Sender<Push>> = Box::new(ConsoleSender::<Push>::new());
    let payload = Payload::new().with("body", "ping");

    let outcome = Notifier::new()
        .notify(&payload, &*sender)
        .await
        .unwrap();

    assert_eq!(outcome.channel, "push");
    assert_eq!(outcome.provider, "console");
}

#[tokio::test]
async fn test_dropping_notify_drops_in_flight_send() {
    let dropped = Arc::new(AtomicBool::new(false));
    let sender = HangingSender {
        dropped: dropped.clone(),
    };
    let payload = email_payload();

    let result = tokio::time::timeout(
        Duration::from_millis(20),
        Notifier::new().notify(&payload, &sender),
    )
    .await;

    assert!(result.is_err(), "notify must not resolve before send");
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn test_senders_implement_only_their_own_channel() {
    assert!(implements!(HttpEmailSender, Email));
    assert!(!implements!(HttpEmailSender, Sms));
    assert!(!implements!(HttpEmailSender, Push));

    assert!(implements!(HttpSmsSender, Sms));
    assert!(!implements!(HttpSmsSender, Email));
    assert!(!implements!(HttpSmsSender, Push));

    assert!(implements!(BarkSender, Push));
    assert!(!implements!(BarkSender, Email));
    assert!(!implements!(BarkSender, Sms));

    assert!(implements!(ConsoleSender<Email>, Email));
    assert!(!implements!(ConsoleSender<Email>, Sms));

    assert!(implements!(FailingSmsSender, Sms));
    assert!(!implements!(FailingSmsSender, Email));
}

fn arbitrary_payload() -> impl Strategy<Value = Payload> {
    prop::collection::btree_map("[a-z]{1,8}", "[ -~]{0,24}", 0..6)
        .prop_map(|fields| fields.into_iter().collect::<Payload>())
}

proptest! {
    #[test]
    fn property_notify_forwards_once_and_returns_unchanged(payload in arbitrary_payload()) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let sender = RecordingSender::<Email>::new();
        let outcome = runtime
            .block_on(Notifier::new().notify(&payload, &sender))
            .unwrap();

        prop_assert_eq!(sender.received(), vec![payload]);
        prop_assert_eq!(outcome, sender.reply.clone());
    }
}
