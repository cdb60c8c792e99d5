use std::time::Duration;

use relay_common::error::CycleError;
use relay_notifier::{NotificationDispatcher, Notifier};

use crate::api::StatusSource;
use crate::dedup::FailureDedup;
use crate::translator::render;
use crate::validator::{next_cursor, validate};

/// Prefix of every failure report sent to the chat.
pub const FAILURE_PREFIX: &str = "Program failure";

/// What a single poll cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was rendered and handed to the dispatcher.
    Notified { delivered: bool },
    /// The response carried no work items.
    NoNewStatus,
    /// A stage failed. `reported` is false when the failure was a repeat.
    Failed { reported: bool },
}

/// The poll/notify loop.
///
/// Owns the cursor and the failure signature. Each cycle runs
/// poll → validate → translate → dispatch to completion before pausing for
/// the fixed poll interval.
pub struct RelayLoop<S, N> {
    source: S,
    dispatcher: NotificationDispatcher<N>,
    cursor: i64,
    dedup: FailureDedup,
    poll_interval: Duration,
}

impl<S: StatusSource, N: Notifier> RelayLoop<S, N> {
    pub fn new(
        source: S,
        dispatcher: NotificationDispatcher<N>,
        start_cursor: i64,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            dispatcher,
            cursor: start_cursor,
            dedup: FailureDedup::new(),
            poll_interval,
        }
    }

    /// Run cycles forever. Stops only when the task is dropped.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor,
            poll_interval_secs = self.poll_interval.as_secs(),
            chat_id = self.dispatcher.notifier().chat_id(),
            "Status relay started"
        );

        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!(?outcome, cursor = self.cursor, "Cycle finished");
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Run one cycle without the trailing sleep.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(Some(message)) => {
                self.dedup.clear();
                let delivered = self.dispatcher.deliver(&message).await;
                CycleOutcome::Notified { delivered }
            }
            Ok(None) => {
                self.dedup.clear();
                tracing::info!(cursor = self.cursor, "No new statuses in response");
                CycleOutcome::NoNewStatus
            }
            Err(e) => {
                let message = format!("{FAILURE_PREFIX}: {e}");
                tracing::error!(stage = e.stage(), error = %e, cursor = self.cursor, "Poll cycle failed");

                if self.dedup.check_and_set(&message) {
                    self.dispatcher.deliver(&message).await;
                    CycleOutcome::Failed { reported: true }
                } else {
                    CycleOutcome::Failed { reported: false }
                }
            }
        }
    }

    /// Poll, validate and render the newest item; advance the cursor.
    ///
    /// The cursor only moves once the whole response was processed, so a
    /// response that fails translation is polled again next cycle.
    async fn poll_once(&mut self) -> Result<Option<String>, CycleError> {
        let response = self.source.poll(self.cursor).await?;
        let items = validate(&response)?;

        if items.len() > 1 {
            tracing::debug!(
                dropped = items.len() - 1,
                "Only the most recent work item is reported"
            );
        }

        let message = items.first().map(render).transpose()?;

        if let Some(next) = next_cursor(&response) {
            self.cursor = next;
        }

        Ok(message)
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_reported_failure(&self) -> Option<&str> {
        self.dedup.last_reported()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn dispatcher(&self) -> &NotificationDispatcher<N> {
        &self.dispatcher
    }
}
