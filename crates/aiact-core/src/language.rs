//! # Bilingual Text
//!
//! Every user-facing string in the platform exists in Korean and English.
//! [`BilingualText`] carries both halves; [`Language`] selects one.
//! Korean is the default display language.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Display language preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean.
    #[default]
    Ko,
    /// English.
    En,
}

impl Language {
    /// Short language code (`"ko"` / `"en"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Pick the matching half of a literal pair.
    pub fn pick<'a>(&self, ko: &'a str, en: &'a str) -> &'a str {
        match self {
            Self::Ko => ko,
            Self::En => en,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            other => Err(CoreError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// The same content in Korean and English.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BilingualText {
    /// Korean text.
    pub ko: String,
    /// English text.
    pub en: String,
}

impl BilingualText {
    /// Build a pair from its two halves.
    pub fn new(ko: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ko: ko.into(),
            en: en.into(),
        }
    }

    /// Text for `lang`.
    pub fn get(&self, lang: Language) -> &str {
        localize(self, lang)
    }
}

/// Select the half of `pair` matching `lang`.
pub fn localize(pair: &BilingualText, lang: Language) -> &str {
    match lang {
        Language::Ko => &pair.ko,
        Language::En => &pair.en,
    }
}
