//! Character-ratio language detection.
//!
//! Only two languages are recognised. Anything that is neither clearly
//! Chinese nor clearly English comes back as [`Language::Unknown`], which the
//! pipeline treats as "nothing to do" rather than as a failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Share of CJK ideographs above which text is Chinese.
pub const CJK_THRESHOLD: f64 = 0.30;
/// Share of ASCII letters above which text may be English.
pub const LATIN_THRESHOLD: f64 = 0.30;
/// English text must stay below this CJK share.
pub const CJK_CEILING_FOR_ENGLISH: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    Unknown,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Unknown => "unknown",
        }
    }

    /// Fails for [`Language::Unknown`]; used at every entry point that needs
    /// a concrete language.
    pub fn require_known(self) -> Result<Self> {
        match self {
            Language::Unknown => Err(Error::UnsupportedLanguage(self.code().to_string())),
            known => Ok(known),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::English),
            "zh" => Ok(Language::Chinese),
            "unknown" => Ok(Language::Unknown),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// CJK Unified Ideographs block.
#[inline]
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Classify `text` as English, Chinese or unknown.
///
/// The Chinese test runs first so text leaning Chinese is never called
/// English, and the English branch also demands a low CJK share. Both
/// thresholds are strict: exactly 30% CJK is not Chinese.
pub fn detect_language(text: &str) -> Language {
    let trimmed = text.trim();
    let total = trimmed.chars().count();
    if total == 0 {
        return Language::Unknown;
    }

    let (cjk, latin) = trimmed.chars().fold((0usize, 0usize), |(cjk, latin), c| {
        (
            cjk + usize::from(is_cjk(c)),
            latin + usize::from(c.is_ascii_alphabetic()),
        )
    });

    let cjk_ratio = cjk as f64 / total as f64;
    let latin_ratio = latin as f64 / total as f64;

    if cjk_ratio > CJK_THRESHOLD {
        Language::Chinese
    } else if latin_ratio > LATIN_THRESHOLD && cjk_ratio < CJK_CEILING_FOR_ENGLISH {
        Language::English
    } else {
        Language::Unknown
    }
}
