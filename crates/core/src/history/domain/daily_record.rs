use chrono::NaiveDate;
use serde::Deserialize;

/// One analyzed meeting in the bundled historical dataset.
///
/// `male` and `female` are speaking-time percentages (0-100).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub male: f64,
    pub female: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let record: DailyRecord =
            serde_json::from_str(r#"{"date": "2025-03-04", "male": 62.5, "female": 37.5}"#)
                .unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(record.male, 62.5);
        assert_eq!(record.female, 37.5);
    }
}
