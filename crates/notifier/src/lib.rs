//! Notification delivery.
//!
//! The relay speaks to exactly one chat. `Notifier` is the transport seam
//! (Telegram in production, in-memory fakes in tests), and
//! `NotificationDispatcher` is the boundary that turns delivery failures into
//! a log line and a `false` return so they never reach the poll loop.

pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a delivery transport.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Delivery request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Delivery rejected with status {status}: {description}")]
    Rejected { status: u16, description: String },
}

/// A transport able to send a text message to its configured chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Identifier of the destination chat, for logging.
    fn chat_id(&self) -> &str;

    /// Send `text` to the configured chat.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Delivers rendered messages and swallows delivery failures.
pub struct NotificationDispatcher<N> {
    notifier: N,
}

impl<N: Notifier> NotificationDispatcher<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Deliver `message`. Returns `true` on success.
    ///
    /// Failed messages are logged and dropped, never retried.
    pub async fn deliver(&self, message: &str) -> bool {
        match self.notifier.send(message).await {
            Ok(()) => {
                tracing::info!(
                    chat_id = self.notifier.chat_id(),
                    text = message,
                    "Message delivered"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    chat_id = self.notifier.chat_id(),
                    error = %e,
                    "Failed to deliver message"
                );
                false
            }
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing::instrument::WithSubscriber;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct RecordingNotifier {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        fn chat_id(&self) -> &str {
            "42"
        }

        async fn send(&self, text: &str) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(text.to_string());
            if self.fail {
                return Err(NotifyError::Rejected {
                    status: 403,
                    description: "Forbidden: bot was blocked by the user".into(),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_deliver_success() {
        let dispatcher = NotificationDispatcher::new(RecordingNotifier {
            fail: false,
            sent: Mutex::new(Vec::new()),
        });
        assert!(dispatcher.deliver("hello").await);
        assert_eq!(*dispatcher.notifier().sent.lock().unwrap(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_delivered_text_logged_as_own_field() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();
        let dispatcher = NotificationDispatcher::new(RecordingNotifier {
            fail: false,
            sent: Mutex::new(Vec::new()),
        });

        assert!(
            dispatcher
                .deliver("Status changed for hw1")
                .with_subscriber(subscriber)
                .await
        );

        let output = String::from_utf8_lossy(&logs.0.lock().unwrap()).into_owned();
        assert_eq!(output.matches(r#""message":"#).count(), 1, "logs: {output}");
        assert!(output.contains(r#""message":"Message delivered""#), "logs: {output}");
        assert!(output.contains(r#""text":"Status changed for hw1""#), "logs: {output}");
    }

    #[tokio::test]
    async fn test_deliver_failure_is_swallowed() {
        let dispatcher = NotificationDispatcher::new(RecordingNotifier {
            fail: true,
            sent: Mutex::new(Vec::new()),
        });
        assert!(!dispatcher.deliver("hello").await);
        // Attempted exactly once, no retry.
        assert_eq!(dispatcher.notifier().sent.lock().unwrap().len(), 1);
    }
}
