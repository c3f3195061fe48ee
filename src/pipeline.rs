//! Ordered normalization stages.
//!
//! A [`Pipeline`] is built once from a [`NormalizeConfig`]: every enabled
//! flag contributes one stage, disabled flags contribute nothing. Stages
//! run in two groups around language detection:
//!
//! 1. markup stripping
//! 2. contraction expansion (not for Chinese-looking text)
//! 3. accent folding (not for Chinese-looking text)
//! 4. script simplification (not for English-looking text)
//! 5. language detection, always
//! 6. lowercasing (English)
//! 7. lemmatization (English)
//! 8. special-character removal
//! 9. stopword removal
//!
//! Before detection the language is only a guess made on the
//! markup-stripped text, used to keep accent folding from deleting every
//! ideograph. After detection it is authoritative.

use tracing::debug;

use crate::clean;
use crate::config::NormalizeConfig;
use crate::contractions::expand_contractions;
use crate::document::Document;
use crate::error::Result;
use crate::language::{Language, detect_language};
use crate::lexical::remove_stopwords;
use crate::resources::Resources;

type StageFn = Box<dyn Fn(&Resources, &str, Language) -> Result<String> + Send + Sync>;

/// Which languages a stage runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Any,
    English,
    Chinese,
}

impl Scope {
    /// `Unknown` only arises from the provisional guess, where a stage is
    /// skipped only when the text clearly belongs to the other language.
    fn admits(self, lang: Language) -> bool {
        match self {
            Scope::Any => true,
            Scope::English => lang != Language::Chinese,
            Scope::Chinese => lang != Language::English,
        }
    }
}

struct Stage {
    name: &'static str,
    scope: Scope,
    run: StageFn,
}

impl Stage {
    fn new<F>(name: &'static str, scope: Scope, run: F) -> Self
    where
        F: Fn(&Resources, &str, Language) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name,
            scope,
            run: Box::new(run),
        }
    }

    fn pure(name: &'static str, scope: Scope, f: fn(&str) -> String) -> Self {
        Self::new(name, scope, move |_, text, _| Ok(f(text)))
    }
}

pub struct Pipeline {
    before_detection: Vec<Stage>,
    after_detection: Vec<Stage>,
    debug: bool,
}

impl Pipeline {
    pub fn new(config: &NormalizeConfig) -> Self {
        let mut before = Vec::new();
        if config.html_stripping {
            before.push(Stage::pure("strip_markup", Scope::Any, clean::strip_markup));
        }
        if config.contraction_expansion {
            before.push(Stage::pure("expand_contractions", Scope::English, expand_contractions));
        }
        if config.accented_char_removal {
            before.push(Stage::pure("remove_accents", Scope::English, clean::remove_accented_chars));
        }
        if config.zh_simplification {
            before.push(Stage::new("simplify_chinese", Scope::Chinese, |res, text, _| {
                Ok(res.simplify(text))
            }));
        }

        let mut after = Vec::new();
        if config.text_lower_case {
            after.push(Stage::pure("lowercase", Scope::English, str::to_lowercase));
        }
        if config.text_lemmatization {
            after.push(Stage::new("lemmatize", Scope::English, |res, text, lang| {
                Ok(res.analyzer(lang)?.lemmatize(text))
            }));
        }
        if config.special_char_removal {
            let remove_digits = config.remove_digits;
            after.push(Stage::new("remove_special_chars", Scope::Any, move |res, text, lang| {
                let pattern = res.analyzer(lang)?.special_chars(remove_digits)?;
                Ok(clean::delete_special(pattern, text))
            }));
        }
        if config.stopword_removal {
            let is_lower_case = config.text_lower_case;
            after.push(Stage::new("remove_stopwords", Scope::Any, move |res, text, lang| {
                remove_stopwords(res, text, lang, is_lower_case, None)
            }));
        }

        Self {
            before_detection: before,
            after_detection: after,
            debug: config.debug,
        }
    }

    /// Names of the configured stages in run order, detection included.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.before_detection
            .iter()
            .map(|s| s.name)
            .chain(std::iter::once("detect_language"))
            .chain(self.after_detection.iter().map(|s| s.name))
            .collect()
    }

    /// Run every applicable stage over `doc`.
    ///
    /// Blank input, or text whose language cannot be determined, leaves the
    /// document empty with language `Unknown`.
    pub fn run(&self, res: &Resources, doc: &mut Document) -> Result<()> {
        if doc.raw().trim().is_empty() {
            doc.abandon();
            return Ok(());
        }

        let mut provisional = None;
        for stage in &self.before_detection {
            let lang = match stage.scope {
                Scope::Any => Language::Unknown,
                _ => *provisional.get_or_insert_with(|| detect_language(doc.text())),
            };
            if stage.scope.admits(lang) {
                self.apply(res, doc, stage, lang)?;
            }
        }

        let lang = detect_language(doc.text());
        doc.set_language(lang);
        if self.debug {
            debug!(language = %lang, "detected language");
        }
        if lang == Language::Unknown {
            doc.abandon();
            return Ok(());
        }

        for stage in &self.after_detection {
            if stage.scope.admits(lang) {
                self.apply(res, doc, stage, lang)?;
            }
        }
        Ok(())
    }

    fn apply(&self, res: &Resources, doc: &mut Document, stage: &Stage, lang: Language) -> Result<()> {
        let out = (stage.run)(res, doc.text(), lang)?;
        if self.debug {
            debug!(
                stage = stage.name,
                before = doc.text().len(),
                after = out.len(),
                "stage applied"
            );
        }
        doc.apply(stage.name, out);
        Ok(())
    }
}

/// Normalize `text` with the stages `config` enables.
///
/// Returns the normalized text and its detected language; `("", Unknown)`
/// when there is nothing to normalize.
pub fn normalize(res: &Resources, text: &str, config: &NormalizeConfig) -> Result<(String, Language)> {
    let mut doc = Document::new(text);
    Pipeline::new(config).run(res, &mut doc)?;
    Ok(doc.into_output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref RES: Resources = Resources::builtin();
    }

    #[test]
    fn test_stage_names_follow_flags() {
        let names = Pipeline::new(&NormalizeConfig::default()).stage_names();
        assert_eq!(
            names,
            [
                "strip_markup",
                "expand_contractions",
                "remove_accents",
                "simplify_chinese",
                "detect_language",
                "lowercase",
                "lemmatize",
                "remove_special_chars",
                "remove_stopwords",
            ]
        );
        assert_eq!(
            Pipeline::new(&NormalizeConfig::none()).stage_names(),
            ["detect_language"]
        );
    }

    #[test]
    fn test_blank_input() {
        let configs = [
            NormalizeConfig::default(),
            NormalizeConfig::none(),
            NormalizeConfig {
                text_lower_case: true,
                ..NormalizeConfig::none()
            },
        ];
        for config in &configs {
            for text in ["", "   \n\t"] {
                let out = normalize(&RES, text, config).unwrap();
                assert_eq!(out, (String::new(), Language::Unknown));
            }
        }
    }

    #[test]
    fn test_unknown_language_short_circuits() {
        let out = normalize(&RES, "12345 67890 !!!", &NormalizeConfig::default()).unwrap();
        assert_eq!(out, (String::new(), Language::Unknown));
    }

    #[test]
    fn test_english_full_pipeline() {
        let raw = "<p>The cats <b>weren't</b> running quickly!</p><script>var x = 1;</script>";
        let (text, lang) = normalize(&RES, raw, &NormalizeConfig::default()).unwrap();
        assert_eq!(lang, Language::English);
        assert_eq!(text, "cat run quickly");
    }

    #[test]
    fn test_chinese_keeps_ideographs() {
        let raw = "<div>這隻敏捷的棕色狐狸跳過了那隻懶狗。</div>";
        let (text, lang) = normalize(&RES, raw, &NormalizeConfig::default()).unwrap();
        assert_eq!(lang, Language::Chinese);
        assert!(text.contains("狐狸"));
        assert!(!text.contains('。'));
        let tokens: Vec<&str> = text.split(' ').collect();
        assert!(!tokens.contains(&"的"));
    }

    #[test]
    fn test_disabled_stages_are_skipped() {
        let config = NormalizeConfig::none();
        let (text, lang) = normalize(&RES, "Hello World, it's me.", &config).unwrap();
        assert_eq!(lang, Language::English);
        assert_eq!(text, "Hello World, it's me.");
    }

    #[test]
    fn test_trace_records_applied_stages() {
        let config = NormalizeConfig {
            zh_simplification: true,
            text_lower_case: true,
            ..NormalizeConfig::none()
        };
        let mut doc = Document::new("Plain English words here");
        Pipeline::new(&config).run(&RES, &mut doc).unwrap();
        // simplification is skipped for English-looking text
        assert_eq!(doc.applied(), ["lowercase"]);
        assert_eq!(doc.text(), "plain english words here");
    }

    #[test]
    fn test_remove_digits() {
        let config = NormalizeConfig {
            special_char_removal: true,
            remove_digits: true,
            ..NormalizeConfig::none()
        };
        let (text, _) = normalize(&RES, "Chapter 12 begins", &config).unwrap();
        assert_eq!(text, "Chapter  begins");
    }
}
