// Series builders - turn filtered readings into chart payloads
use crate::domain::chart::{ChartDataset, ChartLabel, ChartPayload};
use crate::domain::reading::ConsumptionReading;
use chrono::DateTime;
use serde::Deserialize;
use std::collections::HashSet;
use std::str::FromStr;

pub const ENERGY_SERIES_NAME: &str = "Energy";
pub const ENERGY_COLOR: &str = "rgba(53, 162, 235, 0.5)";
pub const LOAD_SERIES_NAME: &str = "Load";

/// Date-only label (energy pipeline).
pub fn date_label(time: i64) -> ChartLabel {
    ChartLabel::Text(
        DateTime::from_timestamp(time, 0)
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    )
}

/// Time-only label (consumption pipeline, minimal variant).
pub fn time_label(time: i64) -> ChartLabel {
    ChartLabel::Text(
        DateTime::from_timestamp(time, 0)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default(),
    )
}

/// Build a single-dataset payload; `labels[i]` pairs with `data[i]` for the
/// reading at position `i`. Empty input yields empty labels and one dataset
/// with an empty data array, not an absent payload.
pub fn build_series<R>(
    records: &[R],
    label_fn: impl Fn(&R) -> ChartLabel,
    value_fn: impl Fn(&R) -> f64,
    name: &str,
    color: &str,
) -> ChartPayload {
    ChartPayload {
        labels: records.iter().map(&label_fn).collect(),
        datasets: vec![ChartDataset {
            label: name.to_string(),
            data: records.iter().map(&value_fn).collect(),
            background_color: color.to_string(),
        }],
    }
}

/// One selectable series of the consumption chart's extended variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumptionSeries {
    Load,
    Solar,
    Grid,
}

impl ConsumptionSeries {
    /// Fixed output order, regardless of selection order.
    pub const PRIORITY: [ConsumptionSeries; 3] = [
        ConsumptionSeries::Load,
        ConsumptionSeries::Solar,
        ConsumptionSeries::Grid,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ConsumptionSeries::Load => "Load (kW)",
            ConsumptionSeries::Solar => "Solar (kW)",
            ConsumptionSeries::Grid => "Grid (kW)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ConsumptionSeries::Load => "rgba(255, 99, 132, 0.5)",
            ConsumptionSeries::Solar => "rgba(255, 206, 86, 0.5)",
            ConsumptionSeries::Grid => "rgba(75, 192, 192, 0.5)",
        }
    }

    fn value(self, reading: &ConsumptionReading) -> f64 {
        match self {
            ConsumptionSeries::Load => reading.load,
            ConsumptionSeries::Solar => reading.solar.unwrap_or(0.0),
            ConsumptionSeries::Grid => reading.grid.unwrap_or(0.0),
        }
    }
}

impl FromStr for ConsumptionSeries {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "load" => Ok(ConsumptionSeries::Load),
            "solar" => Ok(ConsumptionSeries::Solar),
            "grid" => Ok(ConsumptionSeries::Grid),
            other => Err(format!("unknown series: {other}")),
        }
    }
}

/// The set of series currently visible on the consumption chart.
pub type SeriesSelection = HashSet<ConsumptionSeries>;

/// Which form of the consumption chart this deployment renders.
///
/// The two variants diverge on purpose: the minimal form labels by clock
/// time, the extended form labels by position. They are kept separate
/// rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    Minimal,
    Extended,
}

impl Default for ChartVariant {
    fn default() -> Self {
        ChartVariant::Extended
    }
}

/// Build the extended consumption payload: one dataset per selected series,
/// in fixed priority order, labeled by position `1..=N`.
///
/// An empty selection yields the full label run with zero datasets; callers
/// render an empty chart rather than erroring.
pub fn build_multi_series(
    records: &[ConsumptionReading],
    selection: &SeriesSelection,
) -> ChartPayload {
    ChartPayload {
        labels: (1..=records.len() as u64).map(ChartLabel::Index).collect(),
        datasets: ConsumptionSeries::PRIORITY
            .into_iter()
            .filter(|series| selection.contains(series))
            .map(|series| ChartDataset {
                label: series.display_name().to_string(),
                data: records.iter().map(|r| series.value(r)).collect(),
                background_color: series.color().to_string(),
            })
            .collect(),
    }
}
