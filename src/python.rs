use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::config::NormalizeConfig;
use crate::error::Error;
use crate::language::{self, Language};
use crate::resources::{ResourceConfig, Resources};
use crate::{pipeline, stats, verify};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::Io { .. } => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Detect the language of a text
/// Returns: "en", "zh" or "unknown"
#[pyfunction]
fn detect_language(text: &str) -> &'static str {
    language::detect_language(text).code()
}

/// Normalizer holding the loaded linguistic resources
#[pyclass]
struct Normalizer {
    res: Resources,
}

#[pymethods]
impl Normalizer {
    #[new]
    #[pyo3(signature = (dictionary_dir=None, english_stopwords=None, chinese_stopwords=None))]
    fn new(
        dictionary_dir: Option<String>,
        english_stopwords: Option<String>,
        chinese_stopwords: Option<String>,
    ) -> PyResult<Self> {
        let config = ResourceConfig {
            dictionary_dir: dictionary_dir.map(Into::into),
            english_stopwords: english_stopwords.map(Into::into),
            chinese_stopwords: chinese_stopwords.map(Into::into),
        };
        Ok(Self {
            res: Resources::load(&config)?,
        })
    }

    /// Normalize a document
    /// Returns: (normalized_text, language_code)
    #[pyo3(signature = (
        text,
        html_stripping=true,
        contraction_expansion=true,
        accented_char_removal=true,
        text_lower_case=true,
        text_lemmatization=true,
        special_char_removal=true,
        stopword_removal=true,
        remove_digits=false,
        zh_simplification=true,
        debug=false,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn normalize(
        &self,
        py: Python<'_>,
        text: &str,
        html_stripping: bool,
        contraction_expansion: bool,
        accented_char_removal: bool,
        text_lower_case: bool,
        text_lemmatization: bool,
        special_char_removal: bool,
        stopword_removal: bool,
        remove_digits: bool,
        zh_simplification: bool,
        debug: bool,
    ) -> PyResult<(String, &'static str)> {
        let config = NormalizeConfig {
            html_stripping,
            contraction_expansion,
            accented_char_removal,
            text_lower_case,
            text_lemmatization,
            special_char_removal,
            stopword_removal,
            remove_digits,
            zh_simplification,
            debug,
        };
        let (out, lang) = py.detach(|| pipeline::normalize(&self.res, text, &config))?;
        Ok((out, lang.code()))
    }

    /// Most frequent and longest tokens
    /// Returns: ([(word, count)], [(word, length)])
    #[pyo3(signature = (text, lang, n=10, k=20))]
    fn statistics(
        &self,
        text: &str,
        lang: &str,
        n: usize,
        k: usize,
    ) -> PyResult<(Vec<(String, usize)>, Vec<(String, usize)>)> {
        let lang: Language = lang.parse()?;
        Ok(stats::get_statistics(&self.res, text, n, k, lang)?)
    }

    /// Check normalized text
    /// Returns: list of error messages, empty when every check passed
    fn validate(&self, text: &str, lang: &str) -> PyResult<Vec<String>> {
        let lang: Language = lang.parse()?;
        let errors = verify::validate(&self.res, text, lang)?;
        Ok(errors.iter().map(ToString::to_string).collect())
    }
}

#[pymodule]
fn rust_book_normalize(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(detect_language, m)?)?;
    m.add_class::<Normalizer>()?;
    Ok(())
}
