// Renderer-ready chart payload, serialized in the Chart.js wire shape
use serde::Serialize;

/// Fully-built chart payload: labels plus one or more named series.
///
/// Rebuilt in full on every filter change, never patched in place. Every
/// dataset's `data` has the same length as `labels`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<ChartLabel>,
    pub datasets: Vec<ChartDataset>,
}

/// Display label for one position on the category axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartLabel {
    Text(String),
    Index(u64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let payload = ChartPayload {
            labels: vec![
                ChartLabel::Text("2023-08-18".to_string()),
                ChartLabel::Index(2),
            ],
            datasets: vec![ChartDataset {
                label: "Energy".to_string(),
                data: vec![5.0, 3.0],
                background_color: "rgba(53, 162, 235, 0.5)".to_string(),
            }],
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "labels": ["2023-08-18", 2],
                "datasets": [{
                    "label": "Energy",
                    "data": [5.0, 3.0],
                    "backgroundColor": "rgba(53, 162, 235, 0.5)"
                }]
            })
        );
    }
}
