use crate::domain::series::ChartVariant;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub remote: RemoteSettings,
    pub consumption: ConsumptionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteSettings {
    pub base_url: String,
}

/// The consumption feed takes a fixed unix-second window; real range
/// selection happens client-side over whatever this window returns.
#[derive(Debug, Deserialize, Clone)]
pub struct ConsumptionSettings {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub variant: ChartVariant,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
