// Consumption chart controller - range plus series selection
use crate::application::chart_state::{ChartCell, ChartState};
use crate::application::reading_repository::{FetchError, ReadingRepository};
use crate::domain::series::{
    build_multi_series, build_series, time_label, ChartVariant, ConsumptionSeries,
    SeriesSelection, LOAD_SERIES_NAME,
};
use crate::domain::time_range::{filter_by_time, TimeRange};
use crate::infrastructure::config::ConsumptionSettings;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owns the consumption pipeline: the selected time range, the visible
/// series set, and the most recently built payload.
///
/// Which builder runs is a deployment choice (`ChartVariant`): the minimal
/// form renders a single load dataset labeled by clock time, the extended
/// form renders the selected series labeled by position.
pub struct ConsumptionChartController {
    repository: Arc<dyn ReadingRepository>,
    settings: ConsumptionSettings,
    range: Mutex<TimeRange>,
    selection: Mutex<SeriesSelection>,
    cell: ChartCell,
}

impl ConsumptionChartController {
    pub fn new(repository: Arc<dyn ReadingRepository>, settings: ConsumptionSettings) -> Self {
        Self {
            repository,
            settings,
            range: Mutex::new(TimeRange::default()),
            selection: Mutex::new(SeriesSelection::from([ConsumptionSeries::Load])),
            cell: ChartCell::new(),
        }
    }

    /// Apply any changed selections, then re-run the pipeline once.
    pub async fn select(
        &self,
        range: Option<TimeRange>,
        selection: Option<SeriesSelection>,
    ) -> ChartState {
        if let Some(range) = range {
            *self.range.lock().await = range;
        }
        if let Some(selection) = selection {
            *self.selection.lock().await = selection;
        }
        self.refresh().await
    }

    /// Re-run fetch -> filter -> build with the current selections.
    pub async fn refresh(&self) -> ChartState {
        let token = self.cell.issue();
        let range = *self.range.lock().await;
        let selection = self.selection.lock().await.clone();

        match self
            .repository
            .fetch_consumption(self.settings.start, self.settings.end)
            .await
        {
            Ok(readings) => {
                let now = chrono::Utc::now().timestamp();
                let filtered = filter_by_time(readings, range, now);
                let payload = match self.settings.variant {
                    ChartVariant::Minimal => build_series(
                        &filtered,
                        |r| time_label(r.time),
                        |r| r.load,
                        LOAD_SERIES_NAME,
                        ConsumptionSeries::Load.color(),
                    ),
                    ChartVariant::Extended => build_multi_series(&filtered, &selection),
                };
                self.cell.commit(token, payload).await;
            }
            Err(error) => {
                tracing::error!("error fetching consumption data: {error}");
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
