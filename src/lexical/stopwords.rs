//! Stopword sets.
//!
//! The bundled lists are compiled into the binary. Custom lists use the same
//! file format: one word per line, blank lines and `#` comments ignored.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::language::Language;

const ENGLISH_LIST: &str = include_str!("../../data/stopwords_en.txt");
const CHINESE_LIST: &str = include_str!("../../data/stopwords_zh.txt");

/// A set of stopwords. Matching is exact; callers decide whether tokens
/// are lowercased first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// Parse the one-word-per-line list format.
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(&content))
    }

    /// NLTK English list.
    pub fn english() -> Self {
        Self::parse(ENGLISH_LIST)
    }

    /// NLTK Chinese list.
    pub fn chinese() -> Self {
        Self::parse(CHINESE_LIST)
    }

    /// Bundled list for `lang`.
    pub fn builtin(lang: Language) -> Result<Self> {
        match lang.require_known()? {
            Language::English => Ok(Self::english()),
            _ => Ok(Self::chinese()),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let sw = StopWords::english();
        assert_eq!(sw.len(), 179);
        for word in ["the", "is", "over", "don't", "s"] {
            assert!(sw.contains(word), "{word}");
        }
        assert!(!sw.contains("fox"));
        assert!(!sw.contains("The"));
    }

    #[test]
    fn test_chinese_list() {
        let sw = StopWords::chinese();
        for word in ["这", "的", "了", "那"] {
            assert!(sw.contains(word), "{word}");
        }
        for word in ["只", "敏捷", "狗", "狐狸"] {
            assert!(!sw.contains(word), "{word}");
        }
    }

    #[test]
    fn test_chinese_list_covers_function_phrases() {
        let sw = StopWords::chinese();
        assert!(sw.len() > 800, "{}", sw.len());
        for word in ["一些", "为了", "主要", "不过", "一般", "不仅", "人们", "因此"] {
            assert!(sw.contains(word), "{word}");
        }
        assert!(!sw.contains("人"));
        assert!(!sw.contains("目标"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let sw = StopWords::parse("# header\n\nfoo\n  bar  \n#baz\n");
        assert_eq!(sw, StopWords::new(["foo", "bar"]));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.txt");
        fs::write(&path, "alpha\nbeta\n").unwrap();
        let sw = StopWords::from_file(&path).unwrap();
        assert!(sw.contains("alpha"));
        assert!(sw.contains("beta"));
    }

    #[test]
    fn test_builtin_rejects_unknown() {
        assert!(StopWords::builtin(Language::Unknown).is_err());
        assert!(StopWords::builtin(Language::Chinese).unwrap().contains("的"));
    }
}
