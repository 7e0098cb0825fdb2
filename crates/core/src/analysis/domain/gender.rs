use serde::{Deserialize, Serialize};

/// Gender label the analysis service attaches to each transcript line.
///
/// Anything the service sends that is not `"male"` or `"female"`
/// deserializes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"male\"", Gender::Male)]
    #[case("\"female\"", Gender::Female)]
    #[case("\"unknown\"", Gender::Unknown)]
    #[case("\"SPEAKER_00\"", Gender::Unknown)]
    #[case("\"\"", Gender::Unknown)]
    fn test_deserialize(#[case] json: &str, #[case] expected: Gender) {
        let gender: Gender = serde_json::from_str(json).unwrap();
        assert_eq!(gender, expected);
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }
}
