//! Снимки состояния зала: слоты хранения, кодирование, загрузка со сбросом на сид.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::domain::tournament::TournamentError;
use crate::domain::TimestampMs;
use crate::infra::rng::DeterministicRng;
use crate::infra::seed;
use crate::state::TournamentState;

/// Ошибки слоя хранения снимков.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot is not valid JSON state: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("snapshot violates invariants: {0}")]
    Invalid(#[from] TournamentError),

    #[error("snapshot slot lock poisoned")]
    Poisoned,
}

/// Один слот "ключ → байты" для снимка состояния зала.
///
/// Хранилище ничего не знает о формате: кодирование и проверка
/// делаются в `encode_state` / `decode_state`.
pub trait SnapshotSlot: Send {
    /// Прочитать снимок. `Ok(None)` – слот пуст.
    fn read(&self) -> Result<Option<Vec<u8>>, PersistenceError>;

    /// Перезаписать слот.
    fn write(&mut self, bytes: &[u8]) -> Result<(), PersistenceError>;

    /// Очистить слот.
    fn clear(&mut self) -> Result<(), PersistenceError>;
}

/// In-memory слот для тестов и локального запуска.
///
/// Клоны делят одно содержимое: тест может держать копию и смотреть,
/// что записал рантайм.
#[derive(Clone, Debug, Default)]
pub struct InMemorySlot {
    bytes: Arc<Mutex<Option<Vec<u8>>>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::new(Mutex::new(Some(bytes.into()))),
        }
    }
}

impl SnapshotSlot for InMemorySlot {
    fn read(&self) -> Result<Option<Vec<u8>>, PersistenceError> {
        let guard = self.bytes.lock().map_err(|_| PersistenceError::Poisoned)?;
        Ok(guard.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        let mut guard = self.bytes.lock().map_err(|_| PersistenceError::Poisoned)?;
        *guard = Some(bytes.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        let mut guard = self.bytes.lock().map_err(|_| PersistenceError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}

/// Слот в файле. Запись идёт через временный файл + rename,
/// чтобы оборванная запись не оставила полуснимок.
#[derive(Clone, Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl SnapshotSlot for FileSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, PersistenceError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Снимок состояния в JSON.
pub fn encode_state(state: &TournamentState) -> Result<Vec<u8>, PersistenceError> {
    Ok(serde_json::to_vec(state)?)
}

/// Разобрать снимок и проверить инварианты.
pub fn decode_state(bytes: &[u8]) -> Result<TournamentState, PersistenceError> {
    let state: TournamentState = serde_json::from_slice(bytes)?;
    state.validate()?;
    Ok(state)
}

/// Сохранить состояние в слот.
pub fn save(slot: &mut dyn SnapshotSlot, state: &TournamentState) -> Result<(), PersistenceError> {
    let bytes = encode_state(state)?;
    slot.write(&bytes)
}

/// Состояние на старте: снимок из слота или сид-данные.
///
/// Пустой слот, битый JSON или нарушенные инварианты – всё это
/// приводит к сид-данным, без ошибки наружу.
pub fn load_or_seed(slot: &dyn SnapshotSlot, rng_seed: Option<u64>, now: TimestampMs) -> TournamentState {
    let loaded = slot
        .read()
        .and_then(|bytes| bytes.map(|b| decode_state(&b)).transpose());

    match loaded {
        Ok(Some(state)) => {
            log::info!(
                "Loaded floor snapshot: {} tournaments, {} notifications",
                state.tournaments.len(),
                state.notifications.len()
            );
            state
        }
        Ok(None) => {
            log::info!("No floor snapshot found, starting from seed data");
            seed_state(rng_seed, now)
        }
        Err(e) => {
            log::warn!("Discarding floor snapshot ({}), starting from seed data", e);
            seed_state(rng_seed, now)
        }
    }
}

/// Сброс: слот очищается, возвращаются свежие сид-данные.
pub fn reset(
    slot: &mut dyn SnapshotSlot,
    rng_seed: Option<u64>,
    now: TimestampMs,
) -> Result<TournamentState, PersistenceError> {
    slot.clear()?;
    Ok(seed_state(rng_seed, now))
}

fn seed_state(rng_seed: Option<u64>, now: TimestampMs) -> TournamentState {
    match rng_seed {
        Some(s) => seed::initial_state_with(&mut DeterministicRng::from_seed(s), now),
        None => seed::initial_state(now),
    }
}
