use std::sync::OnceLock;

use crate::history::domain::daily_record::DailyRecord;

static DATASET: OnceLock<Vec<DailyRecord>> = OnceLock::new();

/// The bundled historical dataset, parsed once. Read-only.
pub fn dataset() -> &'static [DailyRecord] {
    DATASET.get_or_init(|| {
        serde_json::from_str(include_str!("meetings.json")).unwrap_or_else(|e| {
            log::error!("bundled dataset is invalid: {e}");
            Vec::new()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::domain::overview_stats::OverviewStats;

    #[test]
    fn test_dataset_parses_and_is_nonempty() {
        let records = dataset();
        assert!(!records.is_empty());
    }

    #[test]
    fn test_dataset_is_chronological_with_sane_percentages() {
        let records = dataset();
        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for r in records {
            assert!((0.0..=100.0).contains(&r.male));
            assert!((0.0..=100.0).contains(&r.female));
        }
    }

    #[test]
    fn test_dataset_feeds_overview_stats() {
        let stats = OverviewStats::from_records(dataset());
        assert_eq!(stats.meetings, dataset().len());
        assert!(stats.average_male > 0.0);
        assert!(stats.average_female > 0.0);
    }
}
