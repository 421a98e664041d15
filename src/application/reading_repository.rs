// Repository trait for the remote reading feeds
use crate::domain::reading::{ConsumptionReading, EnergyReading};
use async_trait::async_trait;
use thiserror::Error;

/// Why a fetch produced no readings.
///
/// Kept as a typed value rather than a bare log line so tests and future UI
/// can inspect the failure; the view state still swallows it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("response could not be decoded: {0}")]
    Parse(String),
}

#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Fetch the full energy reading history.
    async fn fetch_energy(&self) -> Result<Vec<EnergyReading>, FetchError>;

    /// Fetch consumption readings for a fixed `[start, end]` window
    /// (unix seconds). Range selection proper happens client-side.
    async fn fetch_consumption(
        &self,
        start: i64,
        end: i64,
    ) -> Result<Vec<ConsumptionReading>, FetchError>;
}
