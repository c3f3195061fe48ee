//! Per-language analysis behind one interface.
//!
//! Everything that differs between English and Chinese (segmentation, the
//! stopword list, the special-character allow-list and whether lemmatization
//! exists at all) lives here, so callers pick an [`Analyzer`] once and never
//! branch on the language again.

use jieba_rs::Jieba;
use regex::Regex;

use super::lemma::Lemmatizer;
use super::stopwords::StopWords;
use super::tagger::{PosTagger, WordClass};
use super::tokenize::word_tokenize;
use crate::clean::special_char_pattern;
use crate::error::Result;
use crate::language::Language;

pub trait Analyzer: Send + Sync {
    fn language(&self) -> Language;

    /// Split `text` into tokens. Tokens borrow from the input.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn stopwords(&self) -> &StopWords;

    /// Deletion pattern for characters outside the language's allow-list.
    fn special_chars(&self, remove_digits: bool) -> Result<&'static Regex> {
        special_char_pattern(self.language(), remove_digits)
    }

    /// Reduce every token to its base form and join with single spaces.
    /// Languages without inflection return the text unchanged.
    fn lemmatize(&self, text: &str) -> String {
        text.to_string()
    }
}

pub struct English {
    stopwords: StopWords,
    tagger: PosTagger,
    lemmatizer: Lemmatizer,
}

impl English {
    pub fn new(stopwords: StopWords, tagger: PosTagger, lemmatizer: Lemmatizer) -> Self {
        Self {
            stopwords,
            tagger,
            lemmatizer,
        }
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}

impl Default for English {
    fn default() -> Self {
        Self::new(StopWords::english(), PosTagger::new(), Lemmatizer::new())
    }
}

impl Analyzer for English {
    fn language(&self) -> Language {
        Language::English
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        word_tokenize(text)
    }

    fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    fn lemmatize(&self, text: &str) -> String {
        let tokens = word_tokenize(text);
        self.tagger
            .tag(&tokens)
            .into_iter()
            .map(|(token, tag)| self.lemmatizer.lemmatize(token, WordClass::from_penn(tag)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct Chinese {
    stopwords: StopWords,
    jieba: Jieba,
}

impl Chinese {
    pub fn new(stopwords: StopWords, jieba: Jieba) -> Self {
        Self { stopwords, jieba }
    }
}

impl Default for Chinese {
    fn default() -> Self {
        Self::new(StopWords::chinese(), Jieba::new())
    }
}

impl Analyzer for Chinese {
    fn language(&self) -> Language {
        Language::Chinese
    }

    /// Precise-mode segmentation with HMM discovery of unknown words.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, true)
    }

    fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lemmatize() {
        let en = English::default();
        assert_eq!(en.lemmatize("Cats are running quickly"), "cat be run quickly");
        assert_eq!(en.lemmatize("running fast"), "run fast");
    }

    #[test]
    fn test_english_tokenize() {
        let en = English::default();
        assert_eq!(en.tokenize("The fox."), vec!["The", "fox", "."]);
    }

    #[test]
    fn test_chinese_tokenize_covers_input() {
        let zh = Chinese::default();
        let text = "这只敏捷的棕色狐狸跳过了那只懒狗";
        let tokens = zh.tokenize(text);
        assert!(tokens.len() > 1);
        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn test_chinese_has_no_lemmatization() {
        let zh = Chinese::default();
        assert_eq!(zh.lemmatize("狐狸跳过"), "狐狸跳过");
    }

    #[test]
    fn test_special_chars_follow_language() {
        let en = English::default();
        let zh = Chinese::default();
        assert!(en.special_chars(false).unwrap().is_match("世"));
        assert!(!zh.special_chars(false).unwrap().is_match("世"));
        assert!(zh.special_chars(true).unwrap().is_match("7"));
    }
}
