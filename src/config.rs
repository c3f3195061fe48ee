use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::resources::ResourceConfig;

/// Stage switches for one normalization run.
///
/// Every flag enables exactly one stage; a disabled stage is skipped, never
/// replaced by something else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub html_stripping: bool,
    pub contraction_expansion: bool,
    pub accented_char_removal: bool,
    pub text_lower_case: bool,
    pub text_lemmatization: bool,
    pub special_char_removal: bool,
    pub stopword_removal: bool,
    /// Also drop 0-9 during special-character removal.
    pub remove_digits: bool,
    /// Traditional to simplified Chinese.
    pub zh_simplification: bool,
    /// Log every stage at debug level.
    #[serde(alias = "isDebug")]
    pub debug: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            html_stripping: true,
            contraction_expansion: true,
            accented_char_removal: true,
            text_lower_case: true,
            text_lemmatization: true,
            special_char_removal: true,
            stopword_removal: true,
            remove_digits: false,
            zh_simplification: true,
            debug: false,
        }
    }
}

impl NormalizeConfig {
    /// Every stage off.
    pub fn none() -> Self {
        Self {
            html_stripping: false,
            contraction_expansion: false,
            accented_char_removal: false,
            text_lower_case: false,
            text_lemmatization: false,
            special_char_removal: false,
            stopword_removal: false,
            remove_digits: false,
            zh_simplification: false,
            debug: false,
        }
    }

    /// `(name, value)` for every flag, in stage order, for reports.
    pub fn flags(&self) -> [(&'static str, bool); 10] {
        [
            ("html_stripping", self.html_stripping),
            ("contraction_expansion", self.contraction_expansion),
            ("accented_char_removal", self.accented_char_removal),
            ("zh_simplification", self.zh_simplification),
            ("text_lower_case", self.text_lower_case),
            ("text_lemmatization", self.text_lemmatization),
            ("special_char_removal", self.special_char_removal),
            ("remove_digits", self.remove_digits),
            ("stopword_removal", self.stopword_removal),
            ("debug", self.debug),
        ]
    }
}

fn default_top_n() -> usize {
    10
}

fn default_longest_k() -> usize {
    20
}

fn default_jobs() -> usize {
    1
}

/// Batch driver input: which books to process and how.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Book name to source path, in processing order.
    #[serde(default, deserialize_with = "named_entries")]
    pub booklist: Vec<(String, PathBuf)>,
    #[serde(default, deserialize_with = "named_entries")]
    pub preprocessing_params: Vec<(String, NormalizeConfig)>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_longest_k")]
    pub longest_k: usize,
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl BatchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        if config.jobs == 0 {
            return Err(Error::Config("jobs must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Read a batch file. Relative book and resource paths are resolved
    /// against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_json(&json)?;
        if let Some(base) = path.parent() {
            let resources = &mut config.resources;
            let paths = config
                .booklist
                .iter_mut()
                .map(|(_, book)| book)
                .chain(resources.dictionary_dir.as_mut())
                .chain(resources.english_stopwords.as_mut())
                .chain(resources.chinese_stopwords.as_mut());
            for p in paths {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        }
        Ok(config)
    }

    /// Parameters for `book`, if the file names any.
    pub fn params_for(&self, book: &str) -> Option<&NormalizeConfig> {
        self.preprocessing_params
            .iter()
            .find(|(name, _)| name == book)
            .map(|(_, params)| params)
    }
}

/// Accept either `{"name": value, ...}` or `[["name", value], ...]`,
/// keeping entry order.
fn named_entries<'de, D, V>(deserializer: D) -> std::result::Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: serde::de::DeserializeOwned,
{
    let parse = |name: String, value: Value| -> std::result::Result<(String, V), D::Error> {
        serde_json::from_value::<V>(value)
            .map(|v| (name.clone(), v))
            .map_err(|e| de::Error::custom(format!("entry '{name}': {e}")))
    };

    match Value::deserialize(deserializer)? {
        Value::Object(map) => map.into_iter().map(|(k, v)| parse(k, v)).collect(),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Array(pair) if pair.len() == 2 => {
                    let mut pair = pair.into_iter();
                    match (pair.next(), pair.next()) {
                        (Some(Value::String(name)), Some(value)) => parse(name, value),
                        _ => Err(de::Error::custom("entry name must be a string")),
                    }
                }
                _ => Err(de::Error::custom("expected a [name, value] pair")),
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        other => Err(de::Error::custom(format!(
            "expected an object or a list of pairs, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = NormalizeConfig::default();
        assert!(c.html_stripping && c.stopword_removal && c.zh_simplification);
        assert!(!c.remove_digits);
        assert!(!c.debug);
    }

    #[test]
    fn test_partial_json_and_debug_alias() {
        let c: NormalizeConfig =
            serde_json::from_str(r#"{"remove_digits": true, "isDebug": true}"#).unwrap();
        assert!(c.remove_digits);
        assert!(c.debug);
        assert!(c.text_lemmatization);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(serde_json::from_str::<NormalizeConfig>(r#"{"stemming": true}"#).is_err());
    }

    #[test]
    fn test_batch_accepts_pairs_and_objects() {
        let json = r#"{
            "booklist": [["Zed", "b.txt"], ["Alpha", "a.txt"]],
            "preprocessing_params": {"Alpha": {"stopword_removal": false}}
        }"#;
        let c = BatchConfig::from_json(json).unwrap();
        let names: Vec<&str> = c.booklist.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Zed", "Alpha"]);
        assert!(!c.params_for("Alpha").unwrap().stopword_removal);
        assert!(c.params_for("Zed").is_none());
        assert_eq!(c.top_n, 10);
        assert_eq!(c.longest_k, 20);
        assert_eq!(c.jobs, 1);
    }

    #[test]
    fn test_batch_object_order_preserved() {
        let json = r#"{"booklist": {"c": "3.txt", "a": "1.txt", "b": "2.txt"}}"#;
        let c = BatchConfig::from_json(json).unwrap();
        let names: Vec<&str> = c.booklist.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_batch_bad_entries() {
        assert!(BatchConfig::from_json(r#"{"booklist": [["only-name"]]}"#).is_err());
        assert!(BatchConfig::from_json(r#"{"booklist": 3}"#).is_err());
        assert!(BatchConfig::from_json(r#"{"jobs": 0}"#).is_err());
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, r#"{"booklist": {"A": "a.txt", "B": "/abs/b.txt"}}"#).unwrap();
        let c = BatchConfig::from_file(&path).unwrap();
        assert_eq!(c.booklist[0].1, dir.path().join("a.txt"));
        assert_eq!(c.booklist[1].1, PathBuf::from("/abs/b.txt"));
    }
}
