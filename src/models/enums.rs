use serde::{Deserialize, Serialize};

use crate::triage::TriageError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = TriageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TriageError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(EmergencyCategory {
    Cardiac => "cardiac",
    Respiratory => "respiratory",
    Neurological => "neurological",
    Consciousness => "consciousness",
    Bleeding => "bleeding",
    Allergic => "allergic",
    Poisoning => "poisoning",
    Pregnancy => "pregnancy",
    Acute => "acute",
});

str_enum!(VagueCategory {
    Abdominal => "abdominal",
    Headache => "headache",
    Chest => "chest",
    Back => "back",
    Dizziness => "dizziness",
    Fever => "fever",
    Breathing => "breathing",
    Fatigue => "fatigue",
    Nausea => "nausea",
    Skin => "skin",
    Joint => "joint",
    Urinary => "urinary",
    Anxiety => "anxiety",
    Sleep => "sleep",
    Temperature => "temperature",
    Numbness => "numbness",
    Weight => "weight",
    Nonspecific => "nonspecific",
});

// Category tokens emitted by the body-region picker.
str_enum!(SymptomToken {
    Fatigue => "fatigue",
    Fever => "fever",
    Anxiety => "anxiety",
    Sleep => "sleep",
    Nausea => "nausea",
    Skin => "skin",
    Headache => "headache",
    Chest => "chest",
    Breathing => "breathing",
    Abdominal => "abdominal",
    Back => "back",
    Joint => "joint",
    Numbness => "numbness",
    Urinary => "urinary",
    Dizziness => "dizziness",
});

str_enum!(Language {
    En => "en",
    Es => "es",
});

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn emergency_category_round_trip() {
        for (variant, s) in [
            (EmergencyCategory::Cardiac, "cardiac"),
            (EmergencyCategory::Respiratory, "respiratory"),
            (EmergencyCategory::Neurological, "neurological"),
            (EmergencyCategory::Consciousness, "consciousness"),
            (EmergencyCategory::Bleeding, "bleeding"),
            (EmergencyCategory::Allergic, "allergic"),
            (EmergencyCategory::Poisoning, "poisoning"),
            (EmergencyCategory::Pregnancy, "pregnancy"),
            (EmergencyCategory::Acute, "acute"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(EmergencyCategory::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn symptom_token_round_trip() {
        for (variant, s) in [
            (SymptomToken::Fatigue, "fatigue"),
            (SymptomToken::Chest, "chest"),
            (SymptomToken::Breathing, "breathing"),
            (SymptomToken::Urinary, "urinary"),
            (SymptomToken::Dizziness, "dizziness"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SymptomToken::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = VagueCategory::from_str("elbow").unwrap_err();
        assert!(err.to_string().contains("VagueCategory"));
        assert!(err.to_string().contains("elbow"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&VagueCategory::Abdominal).unwrap();
        assert_eq!(json, "\"abdominal\"");
        let lang: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(lang, Language::Es);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
