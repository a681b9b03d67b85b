use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stage status (tri-state outcome of one pipeline stage)
///
/// - Success: the stage finished and succeeded
/// - Failed: the stage finished and failed
/// - Pending: anything else (not started, running, unknown, missing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StageStatus {
    Success,
    Failed,
    #[default]
    Pending,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Success => "success",
            StageStatus::Failed => "failed",
            StageStatus::Pending => "pending",
        }
    }

    /// Parse a status label. Never fails: only the exact lowercase labels
    /// `success` and `failed` are recognized, everything else is pending.
    pub fn from_label(s: &str) -> Self {
        match s {
            "success" => StageStatus::Success,
            "failed" => StageStatus::Failed,
            _ => StageStatus::Pending,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StageStatus::Success)
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StageStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Callers hand us whatever their pipeline produced; anything that is not the
// string "success" or "failed" (null, numbers, objects) is pending.
impl<'de> Deserialize<'de> for StageStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => StageStatus::from_label(&s),
            _ => StageStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known_values() {
        assert_eq!(StageStatus::from_label("success"), StageStatus::Success);
        assert_eq!(StageStatus::from_label("failed"), StageStatus::Failed);
    }

    #[test]
    fn test_from_label_is_exact() {
        for label in ["Success", "SUCCESS", " success", "success\n", "Failed", "FAILED", " failed "] {
            assert_eq!(StageStatus::from_label(label), StageStatus::Pending, "label {:?}", label);
        }
    }

    #[test]
    fn test_from_label_unknown_values_are_pending() {
        for label in ["pending", "running", "", "succeeded", "fail", "undefined"] {
            assert_eq!(StageStatus::from_label(label), StageStatus::Pending, "label {:?}", label);
        }
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(StageStatus::default(), StageStatus::Pending);
    }

    #[test]
    fn test_deserialize_non_string_values() {
        let statuses: Vec<StageStatus> =
            serde_json::from_str(r#"["success", null, 3, {"state": "success"}, "failed"]"#).unwrap();
        assert_eq!(
            statuses,
            vec![
                StageStatus::Success,
                StageStatus::Pending,
                StageStatus::Pending,
                StageStatus::Pending,
                StageStatus::Failed,
            ]
        );
    }

    #[test]
    fn test_serialize_as_lowercase_label() {
        assert_eq!(serde_json::to_string(&StageStatus::Failed).unwrap(), "\"failed\"");
    }
}
