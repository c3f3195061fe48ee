//! A text moving through the pipeline.

use crate::language::Language;

/// Raw input plus processing state.
///
/// The raw text never changes. `text` holds the output of the last stage
/// that ran, `language` the result of detection (or `Unknown` before it),
/// and `applied` the names of the stages that ran, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: String,
    text: String,
    language: Language,
    applied: Vec<&'static str>,
}

impl Document {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            text: raw.clone(),
            raw,
            language: Language::Unknown,
            applied: Vec::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Stage names in the order they ran.
    pub fn applied(&self) -> &[&'static str] {
        &self.applied
    }

    pub(crate) fn apply(&mut self, stage: &'static str, text: String) {
        self.text = text;
        self.applied.push(stage);
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Give up on the document: empty text, unknown language.
    pub(crate) fn abandon(&mut self) {
        self.text.clear();
        self.language = Language::Unknown;
    }

    pub fn into_output(self) -> (String, Language) {
        (self.text, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document() {
        let doc = Document::new("Hello");
        assert_eq!(doc.raw(), "Hello");
        assert_eq!(doc.text(), "Hello");
        assert_eq!(doc.language(), Language::Unknown);
        assert!(doc.applied().is_empty());
    }

    #[test]
    fn test_apply_keeps_raw() {
        let mut doc = Document::new("Hello");
        doc.apply("lowercase", "hello".to_string());
        assert_eq!(doc.raw(), "Hello");
        assert_eq!(doc.text(), "hello");
        assert_eq!(doc.applied(), ["lowercase"]);
    }

    #[test]
    fn test_abandon() {
        let mut doc = Document::new("???");
        doc.set_language(Language::English);
        doc.abandon();
        assert_eq!(doc.into_output(), (String::new(), Language::Unknown));
    }
}
