//! Linguistic state shared by every normalization call.
//!
//! Building a [`Resources`] loads the jieba dictionary, the OpenCC tables,
//! the stopword lists and the optional lexicon. Do it once per process and
//! pass the handle around; nothing in it changes after construction, so it
//! is shared freely across threads.

use std::path::PathBuf;

use opencc_jieba_rs::OpenCC;
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::language::Language;
use crate::lexical::{Analyzer, Chinese, English, Lemmatizer, Lexicon, PosTagger, StopWords};

/// Where to find optional resources on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// Directory with `en_US.aff`/`en_US.dic` and/or `en_words.txt`.
    pub dictionary_dir: Option<PathBuf>,
    pub english_stopwords: Option<PathBuf>,
    pub chinese_stopwords: Option<PathBuf>,
}

pub struct Resources {
    english: English,
    chinese: Chinese,
    converter: OpenCC,
}

impl Resources {
    /// Bundled stopword lists, rule-only lemmatization.
    pub fn builtin() -> Self {
        Self {
            english: English::default(),
            chinese: Chinese::default(),
            converter: OpenCC::new(),
        }
    }

    pub fn load(config: &ResourceConfig) -> Result<Self> {
        let english_stopwords = match &config.english_stopwords {
            Some(path) => StopWords::from_file(path)?,
            None => StopWords::english(),
        };
        let chinese_stopwords = match &config.chinese_stopwords {
            Some(path) => StopWords::from_file(path)?,
            None => StopWords::chinese(),
        };
        let lemmatizer = match &config.dictionary_dir {
            Some(dir) => Lemmatizer::with_lexicon(Lexicon::load(dir)?),
            None => Lemmatizer::new(),
        };

        info!(
            en_stopwords = english_stopwords.len(),
            zh_stopwords = chinese_stopwords.len(),
            lexicon = lemmatizer.has_lexicon(),
            "linguistic resources ready"
        );

        Ok(Self {
            english: English::new(english_stopwords, PosTagger::new(), lemmatizer),
            chinese: Chinese::new(chinese_stopwords, jieba_rs::Jieba::new()),
            converter: OpenCC::new(),
        })
    }

    /// The analyzer for `lang`; `Unknown` is a contract violation.
    pub fn analyzer(&self, lang: Language) -> Result<&dyn Analyzer> {
        match lang.require_known()? {
            Language::English => Ok(&self.english),
            _ => Ok(&self.chinese),
        }
    }

    pub fn english(&self) -> &English {
        &self.english
    }

    pub fn chinese(&self) -> &Chinese {
        &self.chinese
    }

    /// Traditional to simplified Chinese, character for character.
    /// Punctuation is left alone and non-Chinese text passes through.
    pub fn simplify(&self, text: &str) -> String {
        self.converter.t2s(text, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_simplify() {
        let res = Resources::builtin();
        assert_eq!(res.simplify("漢字"), "汉字");
        assert_eq!(res.simplify("hello"), "hello");
    }

    #[test]
    fn test_analyzer_dispatch() {
        let res = Resources::builtin();
        assert_eq!(res.analyzer(Language::English).unwrap().language(), Language::English);
        assert_eq!(res.analyzer(Language::Chinese).unwrap().language(), Language::Chinese);
        assert!(res.analyzer(Language::Unknown).is_err());
    }

    #[test]
    fn test_load_custom_stopwords_and_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let stop = dir.path().join("en.txt");
        fs::write(&stop, "fox\n").unwrap();
        fs::write(dir.path().join("en_words.txt"), "fast\n").unwrap();

        let res = Resources::load(&ResourceConfig {
            dictionary_dir: Some(dir.path().to_path_buf()),
            english_stopwords: Some(stop),
            chinese_stopwords: None,
        })
        .unwrap();

        let en = res.analyzer(Language::English).unwrap();
        assert!(en.stopwords().contains("fox"));
        assert!(!en.stopwords().contains("the"));
        assert!(res.english().lemmatizer().has_lexicon());
    }

    #[test]
    fn test_load_missing_stopword_file_fails() {
        let config = ResourceConfig {
            english_stopwords: Some(PathBuf::from("/nope/stopwords.txt")),
            ..Default::default()
        };
        assert!(Resources::load(&config).is_err());
    }
}
