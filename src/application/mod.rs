// Application layer - repository seam and per-chart view state
pub mod chart_state;
pub mod consumption_chart;
pub mod energy_chart;
pub mod reading_repository;
