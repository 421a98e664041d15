// HTTP request handlers
use crate::application::chart_state::ChartState;
use crate::domain::chart::ChartPayload;
use crate::domain::series::SeriesSelection;
use crate::domain::time_range::TimeRange;
use crate::presentation::app_state::AppState;
use crate::presentation::chart_runtime::{chart_options, ChartOptions};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct EnergyChartQuery {
    pub range: Option<TimeRange>,
}

#[derive(Deserialize)]
pub struct ConsumptionChartQuery {
    pub range: Option<TimeRange>,
    /// Comma-separated series names, e.g. `series=load,solar`
    pub series: Option<String>,
}

/// Wire form of one chart's view state. A fetch failure never surfaces
/// here: the chart stays `loading` or keeps its previous payload.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChartResponse {
    Loading,
    Ready {
        chart: ChartPayload,
        options: &'static ChartOptions,
    },
}

impl From<ChartState> for ChartResponse {
    fn from(state: ChartState) -> Self {
        match state {
            ChartState::Loading => ChartResponse::Loading,
            ChartState::Ready(chart) => ChartResponse::Ready {
                chart,
                options: chart_options(),
            },
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Energy chart: a `range` parameter changes the selection and re-runs the
/// pipeline; without one the current state is returned as-is. The pipeline
/// only ever runs on mount or on a selection change.
pub async fn energy_chart(
    Query(query): Query<EnergyChartQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<ChartResponse> {
    let chart_state = match query.range {
        Some(range) => state.energy_chart.set_range(range).await,
        None => state.energy_chart.snapshot().await,
    };
    Json(chart_state.into())
}

/// Consumption chart: optionally change the time range and/or visible
/// series, re-run the pipeline, return the current state. Unknown series
/// names are rejected here so the selection enum stays closed.
pub async fn consumption_chart(
    Query(query): Query<ConsumptionChartQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartResponse>, (StatusCode, String)> {
    let selection = match query.series.as_deref() {
        Some(raw) => Some(parse_selection(raw).map_err(|e| (StatusCode::BAD_REQUEST, e))?),
        None => None,
    };

    let chart_state = if query.range.is_none() && selection.is_none() {
        state.consumption_chart.snapshot().await
    } else {
        state.consumption_chart.select(query.range, selection).await
    };
    Ok(Json(chart_state.into()))
}

fn parse_selection(raw: &str) -> Result<SeriesSelection, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::ConsumptionSeries;

    #[test]
    fn test_parse_selection() {
        let selection = parse_selection("solar, load").unwrap();
        assert_eq!(
            selection,
            SeriesSelection::from([ConsumptionSeries::Load, ConsumptionSeries::Solar])
        );

        assert!(parse_selection("").unwrap().is_empty());
        assert!(parse_selection("load,battery").is_err());
    }

    #[test]
    fn test_loading_response_shape() {
        let response = ChartResponse::from(ChartState::Loading);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"status": "loading"})
        );
    }
}
