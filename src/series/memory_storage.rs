use std::sync::{Arc, Mutex, MutexGuard};

use papaya::HashMap;
use tracing::debug;

use crate::error::{TsdbError, TsdbResult};
use crate::error_consts;
use crate::series::series_storage::SeriesStorage;
use crate::series::TimeSeries;

type SeriesRef = Arc<Mutex<TimeSeries>>;

/// In-process series store. Lookups are lock-free; each series is guarded by its own mutex,
/// so ingestion into different series runs in parallel.
pub struct MemorySeriesStorage {
    series: HashMap<String, SeriesRef>,
}

impl Default for MemorySeriesStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySeriesStorage {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.series.pin().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.series.pin().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<SeriesRef> {
        self.series.pin().get(key).cloned()
    }
}

fn lock(series: &SeriesRef) -> TsdbResult<MutexGuard<'_, TimeSeries>> {
    series
        .lock()
        .map_err(|_| TsdbError::General(error_consts::SERIES_LOCKED.to_string()))
}

impl SeriesStorage for MemorySeriesStorage {
    fn create_series(&self, key: &str, series: TimeSeries) -> TsdbResult<()> {
        let inserted = self
            .series
            .pin()
            .try_insert(key.to_string(), Arc::new(Mutex::new(series)))
            .is_ok();
        if !inserted {
            return Err(TsdbError::SeriesExists(key.to_string()));
        }
        debug!(key, "series created");
        Ok(())
    }

    fn delete_series(&self, key: &str) -> bool {
        self.series.pin().remove(key).is_some()
    }

    fn with_series<R, F>(&self, key: &str, f: F) -> TsdbResult<R>
    where
        F: FnOnce(&TimeSeries) -> TsdbResult<R>,
    {
        let series = self
            .get(key)
            .ok_or_else(|| TsdbError::UnknownSeries(key.to_string()))?;
        let guard = lock(&series)?;
        f(&guard)
    }

    fn with_series_mut<R, F>(&self, key: &str, f: F) -> TsdbResult<R>
    where
        F: FnOnce(&mut TimeSeries) -> TsdbResult<R>,
    {
        let series = self
            .get(key)
            .ok_or_else(|| TsdbError::UnknownSeries(key.to_string()))?;
        let mut guard = lock(&series)?;
        f(&mut guard)
    }

    fn with_series_or_create<R, I, F>(&self, key: &str, init: I, f: F) -> TsdbResult<R>
    where
        I: FnOnce() -> TsdbResult<TimeSeries>,
        F: FnOnce(&mut TimeSeries) -> TsdbResult<R>,
    {
        let series = match self.get(key) {
            Some(series) => series,
            None => {
                let created = Arc::new(Mutex::new(init()?));
                // another caller may have created the key in the meantime; theirs wins
                self.series.pin().get_or_insert(key.to_string(), created).clone()
            }
        };
        let mut guard = lock(&series)?;
        f(&mut guard)
    }
}
