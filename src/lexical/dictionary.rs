//! English lexicon used to confirm lemmatization candidates.
//!
//! Loads an optional Hunspell dictionary (`en_US.aff` + `en_US.dic`) and an
//! optional plain word list (`en_words.txt`, one word per line, `#`
//! comments). A word is known if either source accepts it.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};
use zspell::Dictionary;

use crate::error::{Error, Result};

const HUNSPELL_NAME: &str = "en_US";
const WORD_LIST_NAME: &str = "en_words.txt";

pub struct Lexicon {
    hunspell: Option<Dictionary>,
    words: HashSet<String>,
}

impl Lexicon {
    /// Load whatever lexicon files exist in `dict_dir`.
    ///
    /// A missing directory, or a directory with neither file, is an error;
    /// a Hunspell pair that fails to build is logged and skipped as long as
    /// the word list loads.
    pub fn load(dict_dir: &Path) -> Result<Self> {
        if !dict_dir.is_dir() {
            return Err(Error::Dictionary(format!(
                "dictionary directory not found: {}",
                dict_dir.display()
            )));
        }

        let lexicon = Self {
            hunspell: load_hunspell(dict_dir, HUNSPELL_NAME)?,
            words: load_word_list(dict_dir)?,
        };
        if lexicon.is_empty() {
            return Err(Error::Dictionary(format!(
                "no {HUNSPELL_NAME}.aff/.dic or {WORD_LIST_NAME} in {}",
                dict_dir.display()
            )));
        }
        info!(
            hunspell = lexicon.hunspell.is_some(),
            words = lexicon.words.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Lexicon backed only by an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hunspell: None,
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hunspell.is_none() && self.words.is_empty()
    }

    /// Whether `word` is known, trying it as given and then lowercased.
    pub fn contains(&self, word: &str) -> bool {
        if self.contains_exact(word) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.contains_exact(&lower)
    }

    fn contains_exact(&self, word: &str) -> bool {
        self.words.contains(word)
            || self
                .hunspell
                .as_ref()
                .is_some_and(|d| d.check_word(word))
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("hunspell", &self.hunspell.is_some())
            .field("words", &self.words.len())
            .finish()
    }
}

fn load_word_list(dict_dir: &Path) -> Result<HashSet<String>> {
    let path = dict_dir.join(WORD_LIST_NAME);
    if !path.exists() {
        debug!(path = %path.display(), "word list not present");
        return Ok(HashSet::new());
    }
    let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}

fn load_hunspell(dict_dir: &Path, name: &str) -> Result<Option<Dictionary>> {
    let aff_path = dict_dir.join(format!("{name}.aff"));
    let dic_path = dict_dir.join(format!("{name}.dic"));

    if !aff_path.exists() || !dic_path.exists() {
        debug!(name, "hunspell dictionary not present");
        return Ok(None);
    }

    let aff = fs::read_to_string(&aff_path).map_err(|e| Error::io(&aff_path, e))?;
    let dic = fs::read_to_string(&dic_path).map_err(|e| Error::io(&dic_path, e))?;

    match zspell::builder().config_str(&aff).dict_str(&dic).build() {
        Ok(dict) => Ok(Some(dict)),
        Err(e) => {
            warn!(name, error = %e, "failed to build hunspell dictionary");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_lookup_is_case_insensitive() {
        let lexicon = Lexicon::from_words(["Run", "dog"]);
        assert!(lexicon.contains("run"));
        assert!(lexicon.contains("Dog"));
        assert!(!lexicon.contains("asdfgh"));
    }

    #[test]
    fn test_load_word_list_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(WORD_LIST_NAME), "# comment\nrun\n\n  sit \n").unwrap();
        let lexicon = Lexicon::load(dir.path()).unwrap();
        assert!(lexicon.contains("run"));
        assert!(lexicon.contains("sit"));
        assert!(!lexicon.contains("# comment"));
    }

    #[test]
    fn test_missing_dir_is_error() {
        let err = Lexicon::load(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::Dictionary(_)));
    }

    #[test]
    fn test_empty_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Lexicon::load(dir.path()), Err(Error::Dictionary(_))));
    }
}
