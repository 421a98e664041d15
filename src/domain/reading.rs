// Remote reading domain models
use serde::Deserialize;

/// One production reading from the energy feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergyReading {
    /// Unix timestamp in seconds
    pub time: i64,
    pub energy: f64,
}

/// One reading from the consumption feed.
///
/// The minimal remote variant only reports `load`; the extended variant
/// carries all three fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsumptionReading {
    /// Unix timestamp in seconds
    pub time: i64,
    pub load: f64,
    #[serde(default)]
    pub solar: Option<f64>,
    #[serde(default)]
    pub grid: Option<f64>,
}

/// Anything carrying a unix timestamp in seconds.
pub trait Timestamped {
    fn time(&self) -> i64;
}

impl Timestamped for EnergyReading {
    fn time(&self) -> i64 {
        self.time
    }
}

impl Timestamped for ConsumptionReading {
    fn time(&self) -> i64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_reading_optional_fields() {
        let minimal: ConsumptionReading =
            serde_json::from_str(r#"{"time": 1692316800, "load": 2.5}"#).unwrap();
        assert_eq!(minimal.load, 2.5);
        assert_eq!(minimal.solar, None);
        assert_eq!(minimal.grid, None);

        let extended: ConsumptionReading =
            serde_json::from_str(r#"{"time": 1692316800, "load": 2.5, "solar": 1.0, "grid": 0.5}"#)
                .unwrap();
        assert_eq!(extended.solar, Some(1.0));
        assert_eq!(extended.grid, Some(0.5));
    }
}
