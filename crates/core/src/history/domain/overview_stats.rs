use super::daily_record::DailyRecord;

/// Aggregates the Overview view renders: meeting count and average
/// speaking-time split across all bundled records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewStats {
    pub meetings: usize,
    pub average_male: f64,
    pub average_female: f64,
}

impl OverviewStats {
    pub fn from_records(records: &[DailyRecord]) -> Self {
        if records.is_empty() {
            return Self {
                meetings: 0,
                average_male: 0.0,
                average_female: 0.0,
            };
        }
        let n = records.len() as f64;
        Self {
            meetings: records.len(),
            average_male: records.iter().map(|r| r.male).sum::<f64>() / n,
            average_female: records.iter().map(|r| r.female).sum::<f64>() / n,
        }
    }

    pub fn average_male_label(&self) -> String {
        format!("{:.2}", self.average_male)
    }

    pub fn average_female_label(&self) -> String {
        format!("{:.2}", self.average_female)
    }
}
