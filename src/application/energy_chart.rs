// Energy chart controller - fetch, filter, build on every range change
use crate::application::chart_state::{ChartCell, ChartState};
use crate::application::reading_repository::{FetchError, ReadingRepository};
use crate::domain::series::{build_series, date_label, ENERGY_COLOR, ENERGY_SERIES_NAME};
use crate::domain::time_range::{filter_by_time, TimeRange};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owns the energy pipeline: the selected time range and the most recently
/// built payload. The pipeline re-runs on mount and on every range change.
pub struct EnergyChartController {
    repository: Arc<dyn ReadingRepository>,
    range: Mutex<TimeRange>,
    cell: ChartCell,
}

impl EnergyChartController {
    pub fn new(repository: Arc<dyn ReadingRepository>) -> Self {
        Self {
            repository,
            range: Mutex::new(TimeRange::default()),
            cell: ChartCell::new(),
        }
    }

    /// Change the range and re-run the pipeline.
    pub async fn set_range(&self, range: TimeRange) -> ChartState {
        *self.range.lock().await = range;
        self.refresh().await
    }

    /// Re-run fetch -> filter -> build with the current range.
    pub async fn refresh(&self) -> ChartState {
        let token = self.cell.issue();
        let range = *self.range.lock().await;

        match self.repository.fetch_energy().await {
            Ok(readings) => {
                let now = chrono::Utc::now().timestamp();
                let filtered = filter_by_time(readings, range, now);
                let payload = build_series(
                    &filtered,
                    |r| date_label(r.time),
                    |r| r.energy,
                    ENERGY_SERIES_NAME,
                    ENERGY_COLOR,
                );
                self.cell.commit(token, payload).await;
            }
            Err(error) => {
                tracing::error!("error fetching energy data: {error}");
                self.cell.fail(token, error).await;
            }
        }

        self.cell.snapshot().await
    }

    pub async fn snapshot(&self) -> ChartState {
        self.cell.snapshot().await
    }

    pub async fn last_error(&self) -> Option<FetchError> {
        self.cell.last_error().await
    }
}
