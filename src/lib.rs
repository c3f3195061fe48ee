//! Text normalization for English and Chinese books.
//!
//! [`normalize`] runs a configurable pipeline (markup stripping, contraction
//! expansion, accent folding, script simplification, language detection,
//! lowercasing, lemmatization, special-character and stopword removal) over
//! one document. [`get_statistics`] and [`validate`] inspect its output with
//! the same tokenization. All linguistic state lives in [`Resources`], built
//! once and shared.
//!
//! ```
//! use rust_book_normalize::{Language, NormalizeConfig, Resources, normalize, validate};
//!
//! let res = Resources::builtin();
//! let (text, lang) = normalize(&res, "<p>The cats weren't running!</p>", &NormalizeConfig::default()).unwrap();
//! assert_eq!(lang, Language::English);
//! assert_eq!(text, "cat run");
//! assert!(validate(&res, &text, lang).unwrap().is_empty());
//! ```

pub mod batch;
pub mod clean;
pub mod config;
pub mod contractions;
pub mod document;
pub mod error;
pub mod language;
pub mod lexical;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod resources;
pub mod stats;
pub mod verify;

#[cfg(feature = "python")]
mod python;

pub use batch::{BookReport, Outcome, process_book, run_batch};
pub use config::{BatchConfig, NormalizeConfig};
pub use document::Document;
pub use error::{Error, Result};
pub use language::{Language, detect_language};
pub use loader::{load_gutenberg, save_processed_text};
pub use pipeline::{Pipeline, normalize};
pub use report::Report;
pub use resources::{ResourceConfig, Resources};
pub use stats::get_statistics;
pub use verify::{ValidationError, validate};
