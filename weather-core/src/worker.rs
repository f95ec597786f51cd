//! Background lookups kept off the UI thread.
//!
//! [`FetchWorker`] owns a small tokio runtime. Each call to
//! [`FetchWorker::spawn`] starts one lookup task and hands back a
//! [`FetchHandle`] the UI polls once per frame. Dropping or cancelling the
//! handle aborts the task, so a superseded lookup never reports back.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use tokio::{
    runtime::Runtime,
    sync::oneshot::{self, error::TryRecvError},
    task::JoinHandle,
};

use crate::{
    Condition, FetchError, WeatherProvider, WeatherQuery, WeatherReading, provider::lookup,
};

pub type FetchOutcome = Result<WeatherReading, FetchError>;

/// Called from the worker thread after a result has been sent, e.g. to request a repaint.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

pub struct FetchWorker {
    runtime: Runtime,
    provider: Arc<dyn WeatherProvider>,
    notifier: Option<Notifier>,
    next_id: u64,
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker")
            .field("provider", &self.provider)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl FetchWorker {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("weather-fetch")
            .enable_all()
            .build()
            .context("Failed to start background runtime")?;

        Ok(Self {
            runtime,
            provider,
            notifier: None,
            next_id: 0,
        })
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Start a lookup for `query` and return a handle for polling its outcome.
    pub fn spawn(&mut self, query: WeatherQuery) -> FetchHandle {
        self.next_id += 1;
        let id = self.next_id;

        let (tx, rx) = oneshot::channel();
        let provider = Arc::clone(&self.provider);
        let notifier = self.notifier.clone();
        let task_query = query.clone();

        tracing::info!(
            id,
            city = %query.city,
            country = %query.country_code,
            "dispatching lookup"
        );

        let task = self.runtime.spawn(async move {
            let outcome = lookup(provider.as_ref(), &task_query).await;
            match &outcome {
                Ok(reading) => tracing::info!(
                    id,
                    location = %reading.location_name,
                    code = reading.condition_code,
                    condition = ?Condition::from_code(reading.condition_code),
                    "lookup succeeded"
                ),
                Err(FetchError::LocationNotFound) => {
                    tracing::info!(id, city = %task_query.city, "location not found")
                }
                Err(FetchError::Failed(cause)) => {
                    tracing::warn!(id, city = %task_query.city, "lookup failed: {cause:#}")
                }
            }

            if tx.send(outcome).is_ok()
                && let Some(notify) = notifier
            {
                notify();
            }
        });

        FetchHandle { id, query, receiver: rx, task }
    }
}

/// An in-flight lookup. Dropping it aborts the task.
#[derive(Debug)]
pub struct FetchHandle {
    id: u64,
    query: WeatherQuery,
    receiver: oneshot::Receiver<FetchOutcome>,
    task: JoinHandle<()>,
}

impl FetchHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn query(&self) -> &WeatherQuery {
        &self.query
    }

    /// Returns the outcome once the task has finished; never blocks.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                Some(Err(FetchError::Failed(anyhow!("lookup task ended without a result"))))
            }
        }
    }

    pub fn cancel(&self) {
        if !self.task.is_finished() {
            tracing::debug!(id = self.id, city = %self.query.city, "cancelling lookup");
        }
        self.task.abort();
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
