//! Post-hoc checks on normalized text.
//!
//! Each check looks only at the output, never at how it was produced, and
//! every check runs even when an earlier one failed. Stopwords are looked
//! up on a plain whitespace split, which matches how the normalizer joins
//! its tokens; Chinese segments that span whitespace are not re-segmented.

use std::fmt;

use crate::contractions::CONTRACTIONS;
use crate::error::Result;
use crate::language::Language;
use crate::resources::Resources;

/// Characters that must not survive special-character removal.
pub const RESIDUAL_PUNCTUATION: &str = "!@#$%^&*()_+";

/// One failed invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `<` or `>` left in the text.
    Markup,
    /// Uppercase letters in English output.
    Uppercase,
    /// A contraction from the expansion table is still present.
    Contraction(&'static str),
    /// At least one whitespace-separated token is a stopword.
    Stopwords(Language),
    /// A character from [`RESIDUAL_PUNCTUATION`] is present.
    SpecialCharacters,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Markup => f.write_str("markup not fully removed"),
            ValidationError::Uppercase => f.write_str("English text not lowercased"),
            ValidationError::Contraction(c) => write!(f, "unexpanded contraction: '{c}'"),
            ValidationError::Stopwords(lang) => write!(f, "{lang} stopwords not removed"),
            ValidationError::SpecialCharacters => f.write_str("special characters not removed"),
        }
    }
}

/// Check normalized `text`; an empty list means every check passed.
///
/// Only an unsupported `lang` is an error; findings are values.
pub fn validate(res: &Resources, text: &str, lang: Language) -> Result<Vec<ValidationError>> {
    let stopwords = res.analyzer(lang)?.stopwords();
    let mut errors = Vec::new();

    if text.contains(['<', '>']) {
        errors.push(ValidationError::Markup);
    }

    if lang == Language::English {
        if text.chars().any(char::is_uppercase) {
            errors.push(ValidationError::Uppercase);
        }
        let lower = text.to_lowercase();
        for &(contraction, _) in CONTRACTIONS {
            let curly = contraction.replace('\'', "’");
            if lower.contains(contraction) || lower.contains(&curly) {
                errors.push(ValidationError::Contraction(contraction));
            }
        }
    }

    if text.split_whitespace().any(|t| stopwords.contains(t)) {
        errors.push(ValidationError::Stopwords(lang));
    }

    if text.contains(|c: char| RESIDUAL_PUNCTUATION.contains(c)) {
        errors.push(ValidationError::SpecialCharacters);
    }

    Ok(errors)
}
