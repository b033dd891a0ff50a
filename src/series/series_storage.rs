use crate::error::TsdbResult;
use crate::series::TimeSeries;

/// Keyed access to series. Implementations must hand out at most one mutable borrow of a
/// given series at a time; the closure passed to the `with_*` methods runs while that
/// exclusive access is held and it is released on every return path.
pub trait SeriesStorage {
    /// Store a new series. Fails with `SeriesExists` if the key is taken.
    fn create_series(&self, key: &str, series: TimeSeries) -> TsdbResult<()>;

    /// Remove a series and its configuration. Returns false if the key did not exist.
    fn delete_series(&self, key: &str) -> bool;

    fn with_series<R, F>(&self, key: &str, f: F) -> TsdbResult<R>
    where
        F: FnOnce(&TimeSeries) -> TsdbResult<R>;

    /// Run `f` with exclusive access to an existing series. Fails with `UnknownSeries`.
    fn with_series_mut<R, F>(&self, key: &str, f: F) -> TsdbResult<R>
    where
        F: FnOnce(&mut TimeSeries) -> TsdbResult<R>;

    /// Like [`SeriesStorage::with_series_mut`], but creates the series with `init` if the key
    /// does not exist yet.
    fn with_series_or_create<R, I, F>(&self, key: &str, init: I, f: F) -> TsdbResult<R>
    where
        I: FnOnce() -> TsdbResult<TimeSeries>,
        F: FnOnce(&mut TimeSeries) -> TsdbResult<R>;

    fn dump(&self, key: &str) -> TsdbResult<String> {
        self.with_series(key, |series| series.to_snapshot())
    }

    fn restore(&self, key: &str, data: &str) -> TsdbResult<()> {
        let series = TimeSeries::from_snapshot(data)?;
        self.create_series(key, series)
    }
}
