// Presentation layer - HTTP surface for the browser frontend
pub mod app_state;
pub mod chart_runtime;
pub mod handlers;
