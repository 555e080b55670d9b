use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Models offered on the form. The cheapest one is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelChoice {
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [ModelChoice::Gpt4, ModelChoice::Gpt4o, ModelChoice::Gpt35Turbo];

    pub fn id(&self) -> &'static str {
        match self {
            ModelChoice::Gpt4 => "gpt-4",
            ModelChoice::Gpt4o => "gpt-4o",
            ModelChoice::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::Gpt4 => "GPT-4",
            ModelChoice::Gpt4o => "GPT-4o",
            ModelChoice::Gpt35Turbo => "GPT-3.5 Turbo",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ModelChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelChoice::ALL
            .into_iter()
            .find(|model| model.id() == s.trim())
            .ok_or_else(|| AppError::Validation(format!("Unsupported model: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cheapest_model() {
        assert_eq!(ModelChoice::default(), ModelChoice::Gpt35Turbo);
        assert_eq!(ModelChoice::default().id(), "gpt-3.5-turbo");
    }

    #[test]
    fn test_parse_known_and_unknown_ids() {
        assert_eq!("gpt-4o".parse::<ModelChoice>().unwrap(), ModelChoice::Gpt4o);
        assert_eq!(" gpt-4 ".parse::<ModelChoice>().unwrap(), ModelChoice::Gpt4);
        assert!(matches!("gpt-5".parse::<ModelChoice>(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&ModelChoice::Gpt35Turbo).unwrap();
        assert_eq!(json, "\"gpt-3.5-turbo\"");
        let parsed: ModelChoice = serde_json::from_str("\"gpt-4o\"").unwrap();
        assert_eq!(parsed, ModelChoice::Gpt4o);
    }
}
