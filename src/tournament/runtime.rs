// src/tournament/runtime.rs
//! Актор зала: единственный писатель состояния.
//!
//! Действия из очереди и секундные тики часов проходят через один цикл,
//! поэтому тик и пользовательское действие никогда не применяются
//! к одному снимку параллельно.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant};

use crate::api::errors::ApiError;
use crate::api::queries::{handle_query, Query, QueryResponse};
use crate::config::FloorConfig;
use crate::engine::actions::Action;
use crate::engine::store::FloorStore;
use crate::infra::persistence::{self, SnapshotSlot};
use crate::infra::time::TimeSource;
use crate::state::TournamentState;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("floor runtime is closed")]
    Closed,
}

impl From<RuntimeError> for ApiError {
    fn from(err: RuntimeError) -> Self {
        ApiError::Unavailable(err.to_string())
    }
}

/// Сообщения актору.
#[derive(Debug)]
pub enum FloorMessage {
    Dispatch {
        action: Action,
        response: oneshot::Sender<bool>,
    },
    Snapshot {
        response: oneshot::Sender<TournamentState>,
    },
    Query {
        query: Query,
        response: oneshot::Sender<Result<QueryResponse, ApiError>>,
    },
    Shutdown,
}

/// Ручка для отправки сообщений актору.
#[derive(Clone, Debug)]
pub struct FloorHandle {
    sender: mpsc::Sender<FloorMessage>,
}

impl FloorHandle {
    /// Применить действие. `Ok(true)` – состояние изменилось.
    pub async fn dispatch(&self, action: Action) -> Result<bool, RuntimeError> {
        let (response, rx) = oneshot::channel();
        self.send(FloorMessage::Dispatch { action, response }).await?;
        rx.await.map_err(|_| RuntimeError::Closed)
    }

    pub async fn snapshot(&self) -> Result<TournamentState, RuntimeError> {
        let (response, rx) = oneshot::channel();
        self.send(FloorMessage::Snapshot { response }).await?;
        rx.await.map_err(|_| RuntimeError::Closed)
    }

    pub async fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        let (response, rx) = oneshot::channel();
        self.send(FloorMessage::Query { query, response }).await?;
        rx.await.map_err(|_| RuntimeError::Closed)?
    }

    /// Остановить актор. Повторный вызов после остановки – `Closed`.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.send(FloorMessage::Shutdown).await
    }

    async fn send(&self, message: FloorMessage) -> Result<(), RuntimeError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| RuntimeError::Closed)
    }
}

/// Актор зала.
pub struct FloorRuntime {
    store: FloorStore,
    slot: Box<dyn SnapshotSlot>,
    inbox: mpsc::Receiver<FloorMessage>,
    tick_period: Duration,
    /// Сид стеков для сброса, если действие не задаёт свой.
    seed: Option<u64>,
}

impl FloorRuntime {
    pub fn new(store: FloorStore, slot: Box<dyn SnapshotSlot>, config: &FloorConfig) -> (Self, FloorHandle) {
        let (sender, inbox) = mpsc::channel(config.inbox_capacity.max(1));

        let runtime = Self {
            store,
            slot,
            inbox,
            tick_period: Duration::from_millis(config.tick_interval_ms.max(1)),
            seed: config.seed,
        };

        (runtime, FloorHandle { sender })
    }

    /// Поднять актор из слота: снимок, а при его отсутствии сид-данные.
    pub fn from_slot(
        config: &FloorConfig,
        slot: Box<dyn SnapshotSlot>,
        time: Arc<dyn TimeSource>,
    ) -> (Self, FloorHandle) {
        let state = persistence::load_or_seed(slot.as_ref(), config.seed, time.now_ms());
        Self::new(FloorStore::with_time(state, time), slot, config)
    }

    /// Запустить актор на текущем рантайме tokio.
    pub fn spawn(self) -> JoinHandle<TournamentState> {
        tokio::spawn(self.run())
    }

    /// Цикл актора. Возвращает финальное состояние после остановки.
    pub async fn run(mut self) -> TournamentState {
        log::info!(
            "Floor runtime starting: {} tournaments, tick every {:?}",
            self.store.state().tournaments.len(),
            self.tick_period
        );

        // Первый тик через полный период, а не сразу.
        let mut ticker = interval_at(Instant::now() + self.tick_period, self.tick_period);

        loop {
            tokio::select! {
                message = self.inbox.recv() => {
                    match message {
                        Some(FloorMessage::Shutdown) | None => break,
                        Some(message) => self.handle_message(message),
                    }
                }

                _ = ticker.tick() => {
                    self.tick_all();
                }
            }
        }

        log::info!("Floor runtime stopped");
        self.store.into_state()
    }

    fn handle_message(&mut self, message: FloorMessage) {
        match message {
            FloorMessage::Dispatch {
                action: Action::ResetToInitial { seed },
                response,
            } => {
                let _ = response.send(self.reset(seed));
            }
            FloorMessage::Dispatch { action, response } => {
                let changed = self.store.dispatch(action);
                if changed {
                    self.persist();
                }
                let _ = response.send(changed);
            }
            FloorMessage::Snapshot { response } => {
                let _ = response.send(self.store.snapshot());
            }
            FloorMessage::Query { query, response } => {
                let now = self.store.now_ms();
                let _ = response.send(handle_query(self.store.state(), query, now));
            }
            FloorMessage::Shutdown => {}
        }
    }

    /// Один тик для каждого турнира с идущими часами и без пересадки.
    fn tick_all(&mut self) {
        let mut changed = false;
        for tournament_id in self.store.state().tickable_tournament_ids() {
            changed |= self.store.dispatch(Action::TickClock { tournament_id });
        }
        if changed {
            self.persist();
        }
    }

    /// Сброс к сид-данным: слот очищается, свежее состояние сразу сохраняется.
    fn reset(&mut self, seed: Option<u64>) -> bool {
        let seed = seed.or(self.seed);
        let now = self.store.now_ms();
        match persistence::reset(self.slot.as_mut(), seed, now) {
            Ok(state) => {
                log::info!("Floor reset to seed data (seed: {:?})", seed);
                let changed = self.store.replace(state);
                self.persist();
                changed
            }
            Err(e) => {
                log::error!("Failed to clear floor snapshot on reset: {}", e);
                false
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = persistence::save(self.slot.as_mut(), self.store.state()) {
            log::error!("Failed to save floor snapshot: {}", e);
        }
    }
}
