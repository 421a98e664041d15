// Domain layer - readings, time filtering, and chart building
pub mod chart;
pub mod reading;
pub mod series;
pub mod time_range;
