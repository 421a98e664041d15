// Application state for HTTP handlers
use crate::application::consumption_chart::ConsumptionChartController;
use crate::application::energy_chart::EnergyChartController;

pub struct AppState {
    pub energy_chart: EnergyChartController,
    pub consumption_chart: ConsumptionChartController,
}
