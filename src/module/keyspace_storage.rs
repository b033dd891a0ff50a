use valkey_module::{Context, ValkeyError};

use super::VKM_SERIES_TYPE;
use crate::error::{TsdbError, TsdbResult};
use crate::series::{SeriesStorage, TimeSeries};

/// Series stored as values of the module data type in the server keyspace.
///
/// Commands run on the server's main thread, which gives each command exclusive
/// access to the keys it opens.
pub struct KeyspaceStorage<'a> {
    ctx: &'a Context,
}

impl<'a> KeyspaceStorage<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

fn to_tsdb_error(e: ValkeyError) -> TsdbError {
    TsdbError::General(e.to_string())
}

impl SeriesStorage for KeyspaceStorage<'_> {
    fn create_series(&self, key: &str, series: TimeSeries) -> TsdbResult<()> {
        let key_name = self.ctx.create_string(key);
        let valkey_key = self.ctx.open_key_writable(&key_name);
        if !valkey_key.is_empty() {
            return Err(TsdbError::SeriesExists(key.to_string()));
        }
        valkey_key
            .set_value(&VKM_SERIES_TYPE, series)
            .map_err(to_tsdb_error)
    }

    fn delete_series(&self, key: &str) -> bool {
        let key_name = self.ctx.create_string(key);
        let valkey_key = self.ctx.open_key_writable(&key_name);
        !valkey_key.is_empty() && valkey_key.delete().is_ok()
    }

    fn with_series<R, F>(&self, key: &str, f: F) -> TsdbResult<R>
    where
        F: FnOnce(&TimeSeries) -> TsdbResult<R>,
    {
        let key_name = self.ctx.create_string(key);
        let valkey_key = self.ctx.open_key(&key_name);
        match valkey_key.get_value::<TimeSeries>(&VKM_SERIES_TYPE) {
            Ok(Some(series)) => f(series),
            Ok(None) => Err(TsdbError::UnknownSeries(key.to_string())),
            Err(e) => Err(to_tsdb_error(e)),
        }
    }

    fn with_series_mut<R, F>(&self, key: &str, f: F) -> TsdbResult<R>
    where
        F: FnOnce(&mut TimeSeries) -> TsdbResult<R>,
    {
        let key_name = self.ctx.create_string(key);
        let valkey_key = self.ctx.open_key_writable(&key_name);
        match valkey_key.get_value::<TimeSeries>(&VKM_SERIES_TYPE) {
            Ok(Some(series)) => f(series),
            Ok(None) => Err(TsdbError::UnknownSeries(key.to_string())),
            Err(e) => Err(to_tsdb_error(e)),
        }
    }

    fn with_series_or_create<R, I, F>(&self, key: &str, init: I, f: F) -> TsdbResult<R>
    where
        I: FnOnce() -> TsdbResult<TimeSeries>,
        F: FnOnce(&mut TimeSeries) -> TsdbResult<R>,
    {
        let key_name = self.ctx.create_string(key);
        let valkey_key = self.ctx.open_key_writable(&key_name);
        if let Some(series) = valkey_key
            .get_value::<TimeSeries>(&VKM_SERIES_TYPE)
            .map_err(to_tsdb_error)?
        {
            return f(series);
        }

        // the key is only written once the first sample went in
        let mut series = init()?;
        let res = f(&mut series)?;
        valkey_key
            .set_value(&VKM_SERIES_TYPE, series)
            .map_err(to_tsdb_error)?;
        self.ctx.log_verbose("series created");
        Ok(res)
    }
}
