// src/pipeline/poll.rs

//! The poll loop.
//!
//! Each cycle fetches updates since the watermark, validates the body,
//! turns the newest homework record into a message and delivers it unless it
//! repeats the previous one. Any fault ends the cycle, is logged once and is
//! reported to the chat on a best-effort basis. The loop then sleeps for the
//! fixed retry period and starts over.

use std::time::Duration;

use chrono::Utc;

use crate::config::Credentials;
use crate::error::{AppError, FaultKind, Result};
use crate::models::{ApiResponse, Config, PollerConfig, VerdictTable, current_date_of};
use crate::services::{HomeworkApi, Notifier, PracticumClient, TelegramNotifier};

use super::state::LoopState;
use super::status::parse_status;
use super::validate::check_response;

/// Result of a single poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing new, or the message repeated the previous one
    NoChange,
    /// A status message was delivered
    Notified(String),
    /// The cycle stopped on a recoverable fault
    Faulted { kind: FaultKind, cause: String },
}

/// Everything the loop owns between cycles.
#[derive(Debug, Clone)]
pub struct PollContext {
    pub state: LoopState,
    pub verdicts: VerdictTable,
    pub retry_period: Duration,
}

impl PollContext {
    pub fn new(config: &PollerConfig) -> Self {
        let watermark = config
            .initial_watermark
            .unwrap_or_else(|| Utc::now().timestamp());
        Self {
            state: LoopState::new(watermark),
            verdicts: VerdictTable,
            retry_period: config.retry_period(),
        }
    }
}

/// Drives the fetch → validate → map → deliver cycle.
pub struct Poller<A, N> {
    api: A,
    notifier: N,
    context: PollContext,
}

impl Poller<PracticumClient, TelegramNotifier> {
    /// Wire up the HTTP collaborators from settings and credentials.
    pub fn from_config(config: &Config, credentials: &Credentials) -> Result<Self> {
        let api = PracticumClient::new(&config.api, &credentials.practicum_token)?;
        let notifier = TelegramNotifier::new(
            &config.telegram,
            &config.api.user_agent,
            &credentials.telegram_token,
            &credentials.telegram_chat_id,
        )?;
        Ok(Self::new(api, notifier, PollContext::new(&config.poller)))
    }
}

impl<A: HomeworkApi, N: Notifier> Poller<A, N> {
    pub fn new(api: A, notifier: N, context: PollContext) -> Self {
        Self {
            api,
            notifier,
            context,
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.context.state
    }

    /// Poll forever, sleeping the retry period after every cycle.
    pub async fn run(&mut self) {
        log::info!(
            "Watching homework statuses from {} every {}s",
            self.context.state.watermark(),
            self.context.retry_period.as_secs()
        );

        loop {
            let outcome = self.run_cycle().await;
            log::debug!(
                "Cycle finished: {:?}. Sleeping {}s",
                outcome,
                self.context.retry_period.as_secs()
            );
            tokio::time::sleep(self.context.retry_period).await;
        }
    }

    /// Run one cycle without sleeping. Never fails.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let mut current_date = None;
        let result = self.poll(&mut current_date).await;

        if self.context.state.advance_watermark(current_date) {
            log::debug!("Watermark advanced to {}", self.context.state.watermark());
        }

        match result {
            Ok(outcome) => outcome,
            Err(error) => self.report_fault(error).await,
        }
    }

    /// `current_date` is filled in as soon as a JSON body is available, so
    /// the watermark moves even when a later step faults.
    async fn poll(&mut self, current_date: &mut Option<i64>) -> Result<CycleOutcome> {
        let body = self.api.fetch(self.context.state.watermark()).await?;
        *current_date = current_date_of(&body);

        check_response(&body)?;
        let response = ApiResponse::from_checked(&body)?;

        let Some(record) = response.first_record() else {
            log::debug!("No homework updates");
            return Ok(CycleOutcome::NoChange);
        };
        let message = parse_status(&record?, &self.context.verdicts)?;

        if self.deliver(&message).await? {
            Ok(CycleOutcome::Notified(message))
        } else {
            Ok(CycleOutcome::NoChange)
        }
    }

    /// Send `message` unless it repeats the last delivered one.
    ///
    /// Returns whether a message went out.
    async fn deliver(&mut self, message: &str) -> Result<bool> {
        if self.context.state.is_duplicate(message) {
            log::debug!("Duplicate message suppressed: {}", message);
            return Ok(false);
        }

        self.notifier.send(message).await?;
        log::info!("Message sent: {}", message);
        self.context.state.record_sent(message);
        Ok(true)
    }

    async fn report_fault(&mut self, error: AppError) -> CycleOutcome {
        let kind = error.kind();
        let cause = error.to_string();
        log::error!("Poll cycle failed [{}]: {}", kind, cause);

        let report = format!("Program failure: {cause}");
        if let Err(e) = self.deliver(&report).await {
            log::warn!("Could not report failure to chat: {}", e);
        }

        CycleOutcome::Faulted { kind, cause }
    }
}
