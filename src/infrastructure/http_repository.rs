// HTTP implementation of the reading repository
use crate::application::reading_repository::{FetchError, ReadingRepository};
use crate::domain::reading::{ConsumptionReading, EnergyReading};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Fetches reading feeds from the remote dashboard API with plain GETs.
/// No auth, no pagination, no retries; one request per pipeline run.
#[derive(Debug, Clone)]
pub struct HttpReadingRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReadingRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "{url} returned status {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ReadingRepository for HttpReadingRepository {
    async fn fetch_energy(&self) -> Result<Vec<EnergyReading>, FetchError> {
        self.get_json(format!("{}/getdata", self.base_url)).await
    }

    async fn fetch_consumption(
        &self,
        start: i64,
        end: i64,
    ) -> Result<Vec<ConsumptionReading>, FetchError> {
        self.get_json(format!(
            "{}/getconsumptiondata?start={start}&end={end}",
            self.base_url
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let repository = HttpReadingRepository::new("https://example.com/alpha/".to_string());
        assert_eq!(repository.base_url, "https://example.com/alpha");
    }
}
