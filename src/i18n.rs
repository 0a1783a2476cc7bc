//! Supported interface languages.
//!
//! Only the language codes live here; translation tables belong to whatever
//! front end renders the text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Ml,
    Bn,
    Mr,
    Gu,
    Or,
    Kn,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Hi,
        Language::Ta,
        Language::Te,
        Language::Ml,
        Language::Bn,
        Language::Mr,
        Language::Gu,
        Language::Or,
        Language::Kn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Ml => "ml",
            Language::Bn => "bn",
            Language::Mr => "mr",
            Language::Gu => "gu",
            Language::Or => "or",
            Language::Kn => "kn",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Ta => "Tamil",
            Language::Te => "Telugu",
            Language::Ml => "Malayalam",
            Language::Bn => "Bengali",
            Language::Mr => "Marathi",
            Language::Gu => "Gujarati",
            Language::Or => "Odia",
            Language::Kn => "Kannada",
        }
    }

    /// Parses a code, falling back to English for anything unrecognized.
    pub fn from_code_or_default(code: &str) -> Language {
        code.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("unsupported language code '{}'", s))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.english_name(), self.code())
    }
}
