//! Tokenization, lemmatization and stopword removal.

pub mod analyzer;
pub mod dictionary;
pub mod lemma;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;

pub use analyzer::{Analyzer, Chinese, English};
pub use dictionary::Lexicon;
pub use lemma::Lemmatizer;
pub use stopwords::StopWords;
pub use tagger::{PosTagger, WordClass};

use crate::error::Result;
use crate::language::Language;
use crate::resources::Resources;

/// Tokenize `text` with the language's segmenter.
pub fn tokenize<'a>(res: &Resources, text: &'a str, lang: Language) -> Result<Vec<&'a str>> {
    Ok(res.analyzer(lang)?.tokenize(text))
}

/// Tag, lemmatize and re-join English text.
///
/// ```
/// use rust_book_normalize::{lexical::lemmatize_text, Resources};
/// let res = Resources::builtin();
/// assert_eq!(lemmatize_text(&res, "Cats are running"), "cat be run");
/// ```
pub fn lemmatize_text(res: &Resources, text: &str) -> String {
    res.english().lemmatize(text)
}

/// Drop stopwords and re-join the surviving tokens with single spaces.
///
/// `custom` replaces the language's bundled list. Unless `is_lower_case`
/// says the text is already lowercase, each token is lowercased before the
/// lookup; surviving tokens keep their original form.
pub fn remove_stopwords(
    res: &Resources,
    text: &str,
    lang: Language,
    is_lower_case: bool,
    custom: Option<&StopWords>,
) -> Result<String> {
    let analyzer = res.analyzer(lang)?;
    let stopwords = custom.unwrap_or_else(|| analyzer.stopwords());

    let kept: Vec<&str> = analyzer
        .tokenize(text)
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| {
            if is_lower_case {
                !stopwords.contains(token)
            } else {
                !stopwords.contains(&token.to_lowercase())
            }
        })
        .collect();
    Ok(kept.join(" "))
}
