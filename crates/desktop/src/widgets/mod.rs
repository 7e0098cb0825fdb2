pub mod dashed_container;
pub mod line_chart;
pub mod pie_chart;
pub mod welcome_overlay;
