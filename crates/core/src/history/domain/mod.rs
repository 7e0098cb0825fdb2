pub mod daily_record;
pub mod overview_stats;
