use serde::{Deserialize, Deserializer};

use super::gender::Gender;

/// Outcome of one submission round-trip. Exactly one shape is populated:
/// parsed statistics, or the error message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Analysis(SpeakingStats),
    Failed(String),
}

impl AnalysisResult {
    pub fn failed(message: impl Into<String>) -> Self {
        AnalysisResult::Failed(message.into())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisResult::Failed(_))
    }
}

/// Parsed success payload of the analysis service.
///
/// `genders` is aligned by index with `transcript`; the live service
/// serializes the seconds fields as strings, so both numbers and numeric
/// strings are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeakingStats {
    pub transcript: Vec<String>,
    #[serde(default)]
    pub genders: Vec<Gender>,
    #[serde(default)]
    pub male_ratio: f64,
    #[serde(default)]
    pub female_ratio: f64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub male_seconds: f64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub female_seconds: f64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub total_seconds: f64,
}

impl SpeakingStats {
    /// Pair each transcript line with its gender label.
    ///
    /// Indices past the end of `genders` fall back to `Unknown`; a shorter
    /// gender list is defined behavior, not an error.
    pub fn transcript_lines(&self) -> Vec<(&str, Gender)> {
        self.transcript
            .iter()
            .enumerate()
            .map(|(i, line)| {
                (
                    line.as_str(),
                    self.genders.get(i).copied().unwrap_or(Gender::Unknown),
                )
            })
            .collect()
    }

    pub fn male_percent(&self) -> f64 {
        self.male_ratio * 100.0
    }

    pub fn female_percent(&self) -> f64 {
        self.female_ratio * 100.0
    }

    /// Two-decimal display figure; the stored ratio stays untouched.
    pub fn male_percent_label(&self) -> String {
        format!("{:.2}", self.male_percent())
    }

    pub fn female_percent_label(&self) -> String {
        format!("{:.2}", self.female_percent())
    }
}

fn lenient_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stats(transcript: &[&str], genders: &[Gender]) -> SpeakingStats {
        SpeakingStats {
            transcript: transcript.iter().map(|s| s.to_string()).collect(),
            genders: genders.to_vec(),
            male_ratio: 0.6,
            female_ratio: 0.4,
            male_seconds: 12.0,
            female_seconds: 8.0,
            total_seconds: 20.0,
        }
    }

    #[test]
    fn test_transcript_lines_aligned() {
        let s = stats(&["hi", "hello"], &[Gender::Male, Gender::Female]);
        assert_eq!(
            s.transcript_lines(),
            vec![("hi", Gender::Male), ("hello", Gender::Female)]
        );
    }

    #[test]
    fn test_transcript_lines_short_genders_fall_back_to_unknown() {
        let s = stats(&["a", "b", "c"], &[Gender::Female]);
        let lines = s.transcript_lines();
        assert_eq!(lines[0].1, Gender::Female);
        assert_eq!(lines[1].1, Gender::Unknown);
        assert_eq!(lines[2].1, Gender::Unknown);
    }

    #[test]
    fn test_transcript_lines_empty_genders() {
        let s = stats(&["only line"], &[]);
        assert_eq!(s.transcript_lines(), vec![("only line", Gender::Unknown)]);
    }

    #[test]
    fn test_percent_labels_round_to_two_decimals() {
        let s = stats(&[], &[]);
        assert_eq!(s.male_percent_label(), "60.00");
        assert_eq!(s.female_percent_label(), "40.00");
    }

    #[test]
    fn test_percent_label_rounds_thirds() {
        let mut s = stats(&[], &[]);
        s.male_ratio = 1.0 / 3.0;
        assert_eq!(s.male_percent_label(), "33.33");
    }

    #[test]
    fn test_deserialize_seconds_from_strings() {
        let json = r#"{
            "transcript": ["hello"],
            "genders": ["female"],
            "male_ratio": 0.25,
            "female_ratio": 0.75,
            "male_seconds": "5.0",
            "female_seconds": "15.0",
            "total_seconds": "20.0"
        }"#;
        let s: SpeakingStats = serde_json::from_str(json).unwrap();
        assert_relative_eq!(s.male_seconds, 5.0);
        assert_relative_eq!(s.female_seconds, 15.0);
        assert_relative_eq!(s.total_seconds, 20.0);
    }

    #[test]
    fn test_deserialize_seconds_from_numbers() {
        let json = r#"{"transcript": [], "male_seconds": 3.5}"#;
        let s: SpeakingStats = serde_json::from_str(json).unwrap();
        assert_relative_eq!(s.male_seconds, 3.5);
        assert_relative_eq!(s.total_seconds, 0.0);
    }

    #[test]
    fn test_deserialize_missing_genders_defaults_empty() {
        let json = r#"{"transcript": ["x", "y"]}"#;
        let s: SpeakingStats = serde_json::from_str(json).unwrap();
        assert!(s.genders.is_empty());
        assert!(s.transcript_lines().iter().all(|l| l.1 == Gender::Unknown));
    }
}
